// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module is only compiled when running unit tests and contains features
//! that are shared by all tests of the `graph` module.
//!
//! - the `TestPoint` and `TestLine` types, which implement the `Point` and
//!   `Line` traits respectively.
//! - catalogs for houses, generation sites and heat pipes.
//! - the `EnergySystemBuilder`, which can declaratively build networks for use
//!   in tests.

use crate::economics::GlobalParameters;
use crate::tables::{
    BusRow, Catalog, DemandRow, DemandSeries, Efficiency, HeatPipeRow, InputData, SiteData,
    SourceRow, StorageRow, TransformerRow, TransformerType,
};
use crate::{AssemblyConfig, EnergySystem, Error, Line, LineType, Point, PointType};

#[derive(Clone, Debug, PartialEq)]
pub(super) struct TestPoint(String, PointType);

impl TestPoint {
    pub(super) fn new(id: &str, point_type: PointType) -> Self {
        TestPoint(id.to_string(), point_type)
    }
}

impl Point for TestPoint {
    fn id(&self) -> &str {
        &self.0
    }

    fn point_type(&self) -> PointType {
        self.1
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(super) struct TestLine {
    id_start: String,
    id_end: String,
    line_type: LineType,
    length: f64,
}

impl TestLine {
    pub(super) fn new(id_start: &str, id_end: &str, line_type: LineType, length: f64) -> Self {
        TestLine {
            id_start: id_start.to_string(),
            id_end: id_end.to_string(),
            line_type,
            length,
        }
    }
}

impl Line for TestLine {
    fn id_start(&self) -> &str {
        &self.id_start
    }

    fn id_end(&self) -> &str {
        &self.id_end
    }

    fn line_type(&self) -> LineType {
        self.line_type
    }

    fn length(&self) -> f64 {
        self.length
    }
}

/// Global parameters for a horizon of three hourly timesteps.
pub(super) fn params() -> GlobalParameters {
    GlobalParameters {
        num_ts: 3,
        time_res: 1.0,
        rate: 0.01,
    }
}

/// A pipe option with role `heatpipe`.
pub(super) fn heat_pipe_row(nonconvex: bool) -> HeatPipeRow {
    HeatPipeRow {
        active: true,
        label_3: "heatpipe".to_string(),
        capex_pipes: 2.0,
        n_pipes: 40,
        fix_costs: 100.0,
        nonconvex,
        cap_min: 5.0,
        cap_max: 1000.0,
        l_factor: 0.0001,
    }
}

fn heat_and_gas_buses() -> Vec<BusRow> {
    vec![
        BusRow {
            active: true,
            label_2: "heat".to_string(),
            ..Default::default()
        },
        BusRow {
            active: true,
            label_2: "gas".to_string(),
            shortage: true,
            shortage_costs: 1000.0,
            ..Default::default()
        },
    ]
}

fn gas_source() -> SourceRow {
    SourceRow {
        active: true,
        label_2: "gas".to_string(),
        cost_series: false,
        variable_costs: 0.06,
    }
}

fn boiler() -> TransformerRow {
    TransformerRow {
        active: true,
        label_3: "boiler".to_string(),
        kind: TransformerType::OneInOneOut,
        in_1: "gas".to_string(),
        out_1: "heat".to_string(),
        eff_out_1: Efficiency::Constant(0.95),
        invest: true,
        capex: 150.0,
        n: 20,
        service: 2.0,
        max_invest: 100.0,
        ..Default::default()
    }
}

/// The house catalog, with a heat demand series for each of the given
/// instances.
///
/// Every house gets a heat and a gas bus, a gas source, a heat demand, a gas
/// boiler and a heat storage.
pub(super) fn house_site(instances: &[&str]) -> SiteData {
    let mut series = DemandSeries::new();
    for instance in instances {
        series.insert("heat", *instance, vec![0.2, 0.6, 0.4]);
    }

    SiteData {
        catalog: Catalog {
            bus: heat_and_gas_buses(),
            source: vec![gas_source()],
            demand: vec![DemandRow {
                active: true,
                label_2: "heat".to_string(),
                scalingfactor: 10.0,
                fixed: true,
            }],
            transformer: vec![boiler()],
            storages: vec![StorageRow {
                active: true,
                label: "tank".to_string(),
                bus: "heat".to_string(),
                invest: true,
                capex: 40.0,
                n: 20,
                capacity_loss: 0.001,
                invest_relation_input_capacity: 0.2,
                invest_relation_output_capacity: 0.2,
                inflow_conversion_factor: 1.0,
                outflow_conversion_factor: 1.0,
                ..Default::default()
            }],
        },
        series,
    }
}

/// The generation catalog: a heat and a gas bus, a gas source and a gas
/// boiler.
pub(super) fn generation_site() -> SiteData {
    SiteData {
        catalog: Catalog {
            bus: heat_and_gas_buses(),
            source: vec![gas_source()],
            transformer: vec![boiler()],
            ..Default::default()
        },
        series: DemandSeries::new(),
    }
}

/// Input data for houses `H1` to `H3`.
pub(super) fn input_data() -> InputData {
    InputData {
        params: params(),
        heatpipe_options: vec![heat_pipe_row(false)],
        houses: house_site(&["H1", "H2", "H3"]),
        generation: generation_site(),
    }
}

/// Represents a point added to the `EnergySystemBuilder`.
#[derive(Eq, Hash, PartialEq, Copy, Clone)]
pub(super) struct PointHandle(usize);

/// A builder for creating networks easily, for use in tests.
pub(super) struct EnergySystemBuilder {
    points: Vec<TestPoint>,
    lines: Vec<TestLine>,
}

impl EnergySystemBuilder {
    /// Creates a new `EnergySystemBuilder`.
    pub(super) fn new() -> Self {
        EnergySystemBuilder {
            points: Vec::new(),
            lines: Vec::new(),
        }
    }

    fn add_point(&mut self, id: &str, point_type: PointType) -> PointHandle {
        self.points.push(TestPoint::new(id, point_type));
        PointHandle(self.points.len() - 1)
    }

    /// Adds a house to the network and returns its handle.
    pub(super) fn house(&mut self, id: &str) -> PointHandle {
        self.add_point(id, PointType::House)
    }

    /// Adds a generation site to the network and returns its handle.
    pub(super) fn generation(&mut self, id: &str) -> PointHandle {
        self.add_point(id, PointType::Generation)
    }

    /// Adds a junction to the network and returns its handle.
    pub(super) fn junction(&mut self, id: &str) -> PointHandle {
        self.add_point(id, PointType::Junction)
    }

    /// Connects two points with a line of length 10.
    pub(super) fn connect(
        &mut self,
        from: PointHandle,
        to: PointHandle,
        line_type: LineType,
    ) -> &mut Self {
        let line = TestLine::new(
            self.points[from.0].id(),
            self.points[to.0].id(),
            line_type,
            10.0,
        );
        self.lines.push(line);
        self
    }

    /// Builds and returns the energy system from the points and lines added
    /// to the builder, and the catalogs from [`input_data`].
    pub(super) fn build(&self) -> Result<EnergySystem, Error> {
        EnergySystem::try_new(
            self.points.clone(),
            self.lines.clone(),
            &input_data(),
            AssemblyConfig::default(),
        )
    }
}
