// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Methods for creating [`EnergySystem`] instances from the point and line
//! layers and the catalogs.

use petgraph::graph::DiGraph;

use crate::tables::InputData;
use crate::{AssemblyConfig, Element, Error, Flow, Group, Line, Point, PointType};

use super::{BusHandle, BusMap, EnergySystem, NodeIndexMap};

/// `EnergySystem` instantiation.
impl EnergySystem {
    /// Creates an empty [`EnergySystem`].
    pub fn new(config: AssemblyConfig) -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: NodeIndexMap::new(),
            buses: BusMap::new(),
            config,
        }
    }

    /// Assembles a new [`EnergySystem`] from the given points, lines and
    /// catalogs.
    ///
    /// The network buses are created from the points first, then the heat
    /// pipes from the lines, and finally the elements of every house and
    /// every generation site from their catalogs.
    ///
    /// Returns an error if the global parameters don't describe a valid
    /// horizon, or if any step fails.  No partially assembled system is
    /// returned in that case.
    pub fn try_new<P: Point, L: Line>(
        points: impl IntoIterator<Item = P>,
        lines: impl IntoIterator<Item = L>,
        data: &InputData,
        config: AssemblyConfig,
    ) -> Result<Self, Error> {
        data.params.horizon_scale()?;

        let points = points.into_iter().collect::<Vec<_>>();
        let lines = lines.into_iter().collect::<Vec<_>>();

        let mut system = Self::new(config);
        system.add_points(&points)?;
        system.add_lines(&lines, &data.heatpipe_options, &data.params)?;

        let houses = points
            .iter()
            .filter(|p| p.point_type() == PointType::House)
            .map(|p| p.id());
        system.add_sites(Group::House, houses, &data.houses, &data.params)?;

        let generation = points
            .iter()
            .filter(|p| p.point_type() == PointType::Generation)
            .map(|p| p.id());
        system.add_sites(Group::Generation, generation, &data.generation, &data.params)?;

        tracing::info!(
            "Energy system assembled with {} elements and {} flows.",
            system.graph.node_count(),
            system.graph.edge_count()
        );

        Ok(system)
    }

    /// Adds the given element along with its flows from the `inputs` buses and
    /// to the `outputs` buses.
    ///
    /// Returns `false` without changing anything if an element with the same
    /// label already exists.
    pub(crate) fn add_element(
        &mut self,
        element: Element,
        inputs: Vec<(BusHandle, Flow)>,
        outputs: Vec<(BusHandle, Flow)>,
    ) -> Result<bool, Error> {
        if self.node_indices.contains_key(element.label()) {
            tracing::debug!("Element {} already exists, skipping.", element.label());
            return Ok(false);
        }
        for (bus, _) in inputs.iter().chain(outputs.iter()) {
            self.bus_element(*bus)?;
        }

        let label = element.label().clone();
        let idx = self.graph.add_node(element);
        self.node_indices.insert(label, idx);

        for (bus, flow) in inputs {
            self.graph.add_edge(bus.0, idx, flow);
        }
        for (bus, flow) in outputs {
            self.graph.add_edge(idx, bus.0, flow);
        }

        Ok(true)
    }
}
