// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

/*!
# District Heating Network Graph

This is a library for assembling the elements of a district heating network
(balancing points, sources, sinks, conversion units, storages and heat pipes)
and the flows between them into a directed graph, that can be handed to an
optimizer as its input model.

## The `Point` and `Line` traits

The main struct is [`EnergySystem`], instances of which can be created by
passing the rows of a point layer and a line layer, along with the catalogs
of the houses, generation sites and heat pipes, to the
[`try_new`][EnergySystem::try_new] method.

The library doesn't know about the types that the geometry readers produce,
and instead uses traits to interact with them.  Therefore, to be usable with
this library, the point and line row types must implement the [`Point`] and
[`Line`] traits, respectively.

## Labels

Every element is identified by a [`Label`]: a `(group, medium, role,
instance)` key.  Labels are unique within an [`EnergySystem`], and creating an
element with a label that already exists is a no-op.  Buses are additionally
kept in a registry, from which the other elements look up the buses they
attach to.

## Assembly

The [`try_new`][EnergySystem::try_new] method assembles the system in the
following order:

- A bus for every point, in the group given by the point type.
- Heat pipes for every line.  Laterals get a single pipe per pipe option,
  directed from the house or generation site into the network.  Distribution
  lines get pipes in both directions, and the optimizer decides which of them
  to build.
- The elements of every house and every generation site, from their catalogs.

If any step fails, the method returns an [`Error`], and a fully assembled
[`EnergySystem`] otherwise.

## Investment costs

Conversion units, storages and heat pipes can leave their capacity to the
optimizer.  Their capacity costs are derived with the [`annuity`] transform,
scaled to the modeled horizon by [`GlobalParameters::horizon_scale`].
*/

mod component_category;
pub use component_category::ComponentCategory;

mod config;
pub use config::AssemblyConfig;

mod economics;
pub use economics::{annuity, GlobalParameters, Investment, HOURS_PER_YEAR};

pub mod element;
pub use element::{Element, Flow};

mod graph;
pub use graph::{iterators, BusHandle, EnergySystem, PipeEdge, Scope};

mod graph_traits;
pub use graph_traits::{Line, LineType, Point, PointType};

mod label;
pub use label::{Group, Label};

pub mod tables;

mod error;
pub use error::Error;
