// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Methods for retrieving elements and flows from an [`EnergySystem`].

use std::collections::BTreeMap;

use crate::iterators::{Elements, Flows, Neighbors};
use crate::{AssemblyConfig, ComponentCategory, Element, EnergySystem, Error, Label};

/// `Element` and `Flow` retrieval.
impl EnergySystem {
    /// Returns the element with the given `label`, if it exists.
    pub fn element(&self, label: &Label) -> Result<&Element, Error> {
        self.node_indices
            .get(label)
            .map(|i| &self.graph[*i])
            .ok_or_else(|| Error::missing_reference(format!("Element {label} not found.")))
    }

    /// Returns an iterator over the elements in creation order.
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            iter: self.graph.raw_nodes().iter(),
        }
    }

    /// Returns an iterator over the flows in creation order, as
    /// `(from, to, flow)` triples.
    pub fn flows(&self) -> Flows<'_> {
        Flows {
            graph: &self.graph,
            iter: self.graph.raw_edges().iter(),
        }
    }

    /// Returns an iterator over the buses the element with the given `label`
    /// draws from.
    ///
    /// Returns an error if the given `label` does not exist.
    pub fn inputs(&self, label: &Label) -> Result<Neighbors<'_>, Error> {
        self.neighbors(label, petgraph::Direction::Incoming)
    }

    /// Returns an iterator over the buses the element with the given `label`
    /// feeds.
    ///
    /// Returns an error if the given `label` does not exist.
    pub fn outputs(&self, label: &Label) -> Result<Neighbors<'_>, Error> {
        self.neighbors(label, petgraph::Direction::Outgoing)
    }

    fn neighbors(
        &self,
        label: &Label,
        direction: petgraph::Direction,
    ) -> Result<Neighbors<'_>, Error> {
        self.node_indices
            .get(label)
            .map(|&index| Neighbors {
                graph: &self.graph,
                iter: self.graph.neighbors_directed(index, direction),
            })
            .ok_or_else(|| Error::missing_reference(format!("Element {label} not found.")))
    }

    /// Returns the number of elements in each category.
    pub fn summary(&self) -> BTreeMap<ComponentCategory, usize> {
        let mut summary = ComponentCategory::ALL
            .into_iter()
            .map(|c| (c, 0))
            .collect::<BTreeMap<_, _>>();
        for element in self.elements() {
            *summary.entry(element.category()).or_default() += 1;
        }
        summary
    }

    /// Returns the configuration the system was assembled with.
    pub fn config(&self) -> &AssemblyConfig {
        &self.config
    }
}
