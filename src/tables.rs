// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Rows of the per-category catalogs, and the tables that group them.
//!
//! Column names follow the spreadsheets the catalogs are usually read from, so
//! rows can be deserialized directly from a reader's records.

use std::collections::HashMap;

use serde::Deserialize;

use crate::economics::GlobalParameters;
use crate::Error;

/// A row of the `bus` catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct BusRow {
    pub active: bool,
    /// Medium of the bus.
    pub label_2: String,
    /// Whether to attach a sink that absorbs any surplus.
    #[serde(default)]
    pub excess: bool,
    #[serde(rename = "excess costs", default)]
    pub excess_costs: f64,
    /// Whether to attach a source that covers any shortfall.
    #[serde(default)]
    pub shortage: bool,
    #[serde(rename = "shortage costs", default)]
    pub shortage_costs: f64,
}

/// A row of the `source` catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SourceRow {
    pub active: bool,
    /// Medium of the bus the source feeds.
    pub label_2: String,
    /// Whether the costs are given as a time series.
    #[serde(default)]
    pub cost_series: bool,
    #[serde(rename = "variable costs", default)]
    pub variable_costs: f64,
}

/// A row of the `demand` catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DemandRow {
    pub active: bool,
    /// Medium of the bus the demand draws from, and the category of its
    /// demand series.
    pub label_2: String,
    pub scalingfactor: f64,
    /// Whether the series is an exact schedule instead of an upper bound.
    #[serde(default)]
    pub fixed: bool,
}

/// The input/output layout of a conversion unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub enum TransformerType {
    #[default]
    #[serde(rename = "1-in_1-out")]
    OneInOneOut,
}

/// Conversion efficiency of a conversion unit.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawEfficiency")]
pub enum Efficiency {
    Constant(f64),
    /// Efficiency given as a time series, which is not supported.
    Series,
}

impl Default for Efficiency {
    fn default() -> Self {
        Efficiency::Constant(1.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEfficiency {
    Constant(f64),
    Keyword(String),
}

impl TryFrom<RawEfficiency> for Efficiency {
    type Error = String;

    fn try_from(raw: RawEfficiency) -> Result<Self, Self::Error> {
        match raw {
            RawEfficiency::Constant(value) => Ok(Efficiency::Constant(value)),
            RawEfficiency::Keyword(keyword) if keyword == "series" => Ok(Efficiency::Series),
            RawEfficiency::Keyword(keyword) => Err(format!("Unknown efficiency: {keyword}")),
        }
    }
}

/// A row of the `transformer` catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TransformerRow {
    pub active: bool,
    /// Role of the conversion unit, e.g. `boiler`.
    pub label_3: String,
    #[serde(rename = "type")]
    pub kind: TransformerType,
    /// Medium of the input bus.
    pub in_1: String,
    /// Medium of the output bus.
    pub out_1: String,
    pub eff_out_1: Efficiency,
    #[serde(default)]
    pub variable_costs: f64,
    #[serde(default)]
    pub in_1_sum_max: Option<f64>,
    #[serde(default)]
    pub invest: bool,
    #[serde(default)]
    pub capex: f64,
    /// Lifetime in years.
    #[serde(default)]
    pub n: u32,
    /// Fixed service cost per unit of capacity and year.
    #[serde(default)]
    pub service: f64,
    #[serde(default)]
    pub min_invest: f64,
    #[serde(default)]
    pub max_invest: f64,
    /// Nominal capacity, when the capacity is not invested in.
    #[serde(default)]
    pub installed: f64,
}

/// A row of the `storages` catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct StorageRow {
    pub active: bool,
    /// Role of the storage.
    pub label: String,
    /// Medium of the bus the storage is charged from and discharged to.
    pub bus: String,
    #[serde(default)]
    pub invest: bool,
    #[serde(default)]
    pub capex: f64,
    #[serde(default)]
    pub n: u32,
    /// Nominal capacity, when the capacity is not invested in.
    #[serde(default)]
    pub capacity: f64,
    /// Relative loss of the stored content per timestep.
    #[serde(default)]
    pub capacity_loss: f64,
    #[serde(default)]
    pub invest_relation_input_capacity: f64,
    #[serde(default)]
    pub invest_relation_output_capacity: f64,
    pub inflow_conversion_factor: f64,
    pub outflow_conversion_factor: f64,
}

/// A row of the `heatpipe_options` catalog.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HeatPipeRow {
    pub active: bool,
    /// Role of the pipe, e.g. `heatpipe`.
    pub label_3: String,
    /// Capital cost per unit of capacity and unit of length.
    pub capex_pipes: f64,
    /// Lifetime in years.
    pub n_pipes: u32,
    /// Capital cost per unit of length, independent of the capacity.
    #[serde(default)]
    pub fix_costs: f64,
    /// Whether the pipe is either built with at least `cap_min` or not at all.
    #[serde(default)]
    pub nonconvex: bool,
    #[serde(default)]
    pub cap_min: f64,
    pub cap_max: f64,
    /// Relative heat loss per unit of length.
    pub l_factor: f64,
}

/// The catalogs that are applied to every instance of a group.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub bus: Vec<BusRow>,
    #[serde(default)]
    pub source: Vec<SourceRow>,
    #[serde(default)]
    pub demand: Vec<DemandRow>,
    #[serde(default)]
    pub transformer: Vec<TransformerRow>,
    #[serde(default)]
    pub storages: Vec<StorageRow>,
}

/// Demand time series, keyed by category label and instance id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemandSeries {
    series: HashMap<(String, String), Vec<f64>>,
}

impl DemandSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the series for the given category and instance, replacing any
    /// previous one.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        instance: impl Into<String>,
        values: Vec<f64>,
    ) {
        self.series.insert((category.into(), instance.into()), values);
    }

    /// Returns the series for the given category and instance.
    pub fn get(&self, category: &str, instance: &str) -> Result<&[f64], Error> {
        self.series
            .get(&(category.to_string(), instance.to_string()))
            .map(Vec::as_slice)
            .ok_or_else(|| {
                Error::missing_reference(format!(
                    "No {category} demand series found for {instance}."
                ))
            })
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

/// The catalogs and demand series of one group.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SiteData {
    pub catalog: Catalog,
    pub series: DemandSeries,
}

/// Everything besides the point and line layers that is needed to assemble an
/// energy system.
#[derive(Clone, Debug, PartialEq)]
pub struct InputData {
    pub params: GlobalParameters,
    pub heatpipe_options: Vec<HeatPipeRow>,
    pub houses: SiteData,
    pub generation: SiteData,
}
