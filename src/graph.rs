// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! A graph representation of the elements of a district heating energy
//! system, and the flows between them.

mod builders;
mod creation;
mod dispatch;
mod registry;
mod retrieval;
mod topology;

pub mod iterators;

#[cfg(test)]
mod test_utils;

use crate::{AssemblyConfig, Element, Flow, Label};
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

pub use builders::{PipeEdge, Scope};
pub use registry::BusHandle;

/// `Element`s stored in a `DiGraph` instance can be addressed with
/// `NodeIndex`es.
///
/// `NodeIndexMap` stores the corresponding `NodeIndex` for every `Label`, so
/// that elements in the `DiGraph` can be retrieved from their labels.
pub(crate) type NodeIndexMap = HashMap<Label, NodeIndex>;

/// `BusMap` is the balancing-point registry: it maps the labels of all buses
/// to their handles.
pub(crate) type BusMap = HashMap<Label, BusHandle>;

/// A graph representation of the elements of an energy system and the flows
/// between them.
///
/// Nodes are enumerated in creation order, so assembling the same inputs in
/// the same order always produces the same sequence of elements.
pub struct EnergySystem {
    graph: DiGraph<Element, Flow>,
    node_indices: NodeIndexMap,
    buses: BusMap,
    config: AssemblyConfig,
}
