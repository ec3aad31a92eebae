// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! The elements of an energy system, and the flows that connect them to their
//! balancing points.

use crate::component_category::ComponentCategory;
use crate::economics::Investment;
use crate::Label;

/// A directed flow between an element and a balancing point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Flow {
    /// Fixed installed capacity, or the scaling factor of `actual_value`.
    pub nominal_value: Option<f64>,
    /// Cost per unit of flow.
    pub variable_costs: f64,
    /// Upper bound of the flow summed over the horizon, relative to the
    /// capacity.
    pub summed_max: Option<f64>,
    /// Exogenous profile of the flow, relative to `nominal_value`.
    pub actual_value: Option<Vec<f64>>,
    /// Whether `actual_value` is an exact schedule instead of an upper bound.
    pub fixed: bool,
    pub investment: Option<Investment>,
}

/// A balancing point for one medium at one location.
#[derive(Clone, Debug, PartialEq)]
pub struct Bus {
    pub label: Label,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Source {
    pub label: Label,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sink {
    pub label: Label,
}

/// A conversion unit with one input and one output.
#[derive(Clone, Debug, PartialEq)]
pub struct Transformer {
    pub label: Label,
    /// Efficiency of the conversion from the input to the output.
    pub conversion_factor: f64,
}

/// A storage charged and discharged from the same balancing point.
#[derive(Clone, Debug, PartialEq)]
pub struct Storage {
    pub label: Label,
    pub nominal_capacity: Option<f64>,
    /// Relative loss of the stored content per timestep.
    pub loss_rate: f64,
    pub inflow_conversion_factor: f64,
    pub outflow_conversion_factor: f64,
    pub invest_relation_input_capacity: Option<f64>,
    pub invest_relation_output_capacity: Option<f64>,
    pub investment: Option<Investment>,
}

/// A directed pipe segment between two balancing points.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatPipe {
    pub label: Label,
    /// Relative heat loss per unit of length.
    pub heat_loss_factor: f64,
    pub length: f64,
}

/// An element of an energy system.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Bus(Bus),
    Source(Source),
    Sink(Sink),
    Transformer(Transformer),
    Storage(Storage),
    HeatPipe(HeatPipe),
}

impl Element {
    /// Returns the identity key of the element.
    pub fn label(&self) -> &Label {
        match self {
            Element::Bus(e) => &e.label,
            Element::Source(e) => &e.label,
            Element::Sink(e) => &e.label,
            Element::Transformer(e) => &e.label,
            Element::Storage(e) => &e.label,
            Element::HeatPipe(e) => &e.label,
        }
    }

    /// Returns the category of the element.
    pub fn category(&self) -> ComponentCategory {
        match self {
            Element::Bus(_) => ComponentCategory::Bus,
            Element::Source(_) => ComponentCategory::Source,
            Element::Sink(_) => ComponentCategory::Sink,
            Element::Transformer(_) => ComponentCategory::Transformer,
            Element::Storage(_) => ComponentCategory::Storage,
            Element::HeatPipe(_) => ComponentCategory::HeatPipe,
        }
    }
}

#[cfg(test)]
impl crate::component_category::CategoryPredicates for Element {
    fn category(&self) -> ComponentCategory {
        Element::category(self)
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.category(), self.label())
    }
}
