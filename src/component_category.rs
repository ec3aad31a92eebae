// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module defines the `ComponentCategory` enum, which represents the
//! category of an element in an energy system.

use std::fmt::Display;

/// Represents the category of an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentCategory {
    /// A balancing point for one medium at one location.
    Bus,
    Source,
    Sink,
    /// A conversion unit with one input and one output.
    Transformer,
    Storage,
    HeatPipe,
}

impl ComponentCategory {
    /// All categories, in the order used for summaries.
    pub const ALL: [ComponentCategory; 6] = [
        ComponentCategory::Bus,
        ComponentCategory::Source,
        ComponentCategory::Sink,
        ComponentCategory::Transformer,
        ComponentCategory::Storage,
        ComponentCategory::HeatPipe,
    ];
}

impl Display for ComponentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentCategory::Bus => write!(f, "Bus"),
            ComponentCategory::Source => write!(f, "Source"),
            ComponentCategory::Sink => write!(f, "Sink"),
            ComponentCategory::Transformer => write!(f, "Transformer"),
            ComponentCategory::Storage => write!(f, "GenericStorage"),
            ComponentCategory::HeatPipe => write!(f, "HeatPipeline"),
        }
    }
}

/// Predicates for checking the category of an element in tests.
#[cfg(test)]
pub(crate) trait CategoryPredicates {
    fn category(&self) -> ComponentCategory;

    fn is_bus(&self) -> bool {
        self.category() == ComponentCategory::Bus
    }

    fn is_source(&self) -> bool {
        self.category() == ComponentCategory::Source
    }

    fn is_sink(&self) -> bool {
        self.category() == ComponentCategory::Sink
    }

    fn is_transformer(&self) -> bool {
        self.category() == ComponentCategory::Transformer
    }

    fn is_heat_pipe(&self) -> bool {
        self.category() == ComponentCategory::HeatPipe
    }
}
