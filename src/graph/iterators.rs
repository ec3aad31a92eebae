// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Iterators over elements and flows in an `EnergySystem`.

use petgraph::graph::DiGraph;

use crate::{Element, Flow};

/// An iterator over the elements in an `EnergySystem`.
pub struct Elements<'a> {
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Node<Element>>,
}

impl<'a> Iterator for Elements<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|n| &n.weight)
    }
}

/// An iterator over the flows in an `EnergySystem`, along with the elements
/// they connect.
pub struct Flows<'a> {
    pub(crate) graph: &'a DiGraph<Element, Flow>,
    pub(crate) iter: std::slice::Iter<'a, petgraph::graph::Edge<Flow>>,
}

impl<'a> Iterator for Flows<'a> {
    type Item = (&'a Element, &'a Element, &'a Flow);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|e| (&self.graph[e.source()], &self.graph[e.target()], &e.weight))
    }
}

/// An iterator over the neighbors of an element in an `EnergySystem`.
pub struct Neighbors<'a> {
    pub(crate) graph: &'a DiGraph<Element, Flow>,
    pub(crate) iter: petgraph::graph::Neighbors<'a, Flow>,
}

impl<'a> Iterator for Neighbors<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|i| &self.graph[i])
    }
}
