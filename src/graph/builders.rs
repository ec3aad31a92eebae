// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Methods for adding the elements of each category to an [`EnergySystem`]
//! from the rows of the category's catalog.
//!
//! Every builder skips rows that are not `active`, and attaches the elements
//! it creates to buses that already exist in the registry.

use crate::economics::GlobalParameters;
use crate::tables::{BusRow, DemandRow, DemandSeries, HeatPipeRow, SourceRow, StorageRow, TransformerRow};
use crate::{EnergySystem, Error, Group, Label};

use super::BusHandle;

mod bus;
mod demand;
mod heat_pipe;
mod source;
mod storage;
mod transformer;

/// The parts of a [`Label`] that are fixed by the caller of a builder.
///
/// The group and instance are always fixed.  The medium is fixed only for
/// elements whose medium doesn't come from the catalog rows, like heat pipes.
#[derive(Clone, Debug, PartialEq)]
pub struct Scope {
    group: Group,
    medium: Option<String>,
    instance: String,
}

impl Scope {
    /// Creates a scope for the given group and instance, without a medium.
    pub fn new(group: Group, instance: impl Into<String>) -> Self {
        Self {
            group,
            medium: None,
            instance: instance.into(),
        }
    }

    /// Returns the scope with the medium fixed to the given value.
    pub fn with_medium(self, medium: impl Into<String>) -> Self {
        Self {
            medium: Some(medium.into()),
            ..self
        }
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// Returns the label with the given medium and role in this scope.
    pub(crate) fn label(&self, medium: Option<&str>, role: &str) -> Label {
        Label::new(self.group, medium, role, self.instance.as_str())
    }

    /// Returns the label with this scope's medium and the given role.
    pub(crate) fn scoped_label(&self, role: &str) -> Label {
        self.label(self.medium.as_deref(), role)
    }

    /// Returns the label of the bus for the given medium in this scope.
    pub(crate) fn bus_label(&self, medium: &str) -> Label {
        Label::bus(self.group, medium, self.instance.as_str())
    }
}

/// A directed connection between two buses, resolved from a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PipeEdge {
    pub input: BusHandle,
    pub output: BusHandle,
    pub length: f64,
}

/// Catalog-driven element creation.
impl EnergySystem {
    /// Adds a bus for each active row, along with its optional excess sink and
    /// shortage source.  Rows whose bus already exists are skipped.
    pub fn add_buses(&mut self, scope: &Scope, rows: &[BusRow]) -> Result<(), Error> {
        bus::BusBuilder::new(self, scope).build(rows)
    }

    /// Adds a source for each active row.
    pub fn add_sources(&mut self, scope: &Scope, rows: &[SourceRow]) -> Result<(), Error> {
        source::SourceBuilder::new(self, scope).build(rows)
    }

    /// Adds a sink for each active row, following the demand series of the
    /// row's category and the scope's instance.
    pub fn add_demands(
        &mut self,
        scope: &Scope,
        rows: &[DemandRow],
        series: &DemandSeries,
        params: &GlobalParameters,
    ) -> Result<(), Error> {
        demand::DemandBuilder::new(self, scope, series, params).build(rows)
    }

    /// Adds a conversion unit for each active row.
    pub fn add_transformers(
        &mut self,
        scope: &Scope,
        rows: &[TransformerRow],
        params: &GlobalParameters,
    ) -> Result<(), Error> {
        transformer::TransformerBuilder::new(self, scope, params).build(rows)
    }

    /// Adds a storage for each active row.
    pub fn add_storages(
        &mut self,
        scope: &Scope,
        rows: &[StorageRow],
        params: &GlobalParameters,
    ) -> Result<(), Error> {
        storage::StorageBuilder::new(self, scope, params).build(rows)
    }

    /// Adds a heat pipe along the given edge for each active row.
    pub fn add_heat_pipes(
        &mut self,
        scope: &Scope,
        rows: &[HeatPipeRow],
        params: &GlobalParameters,
        edge: &PipeEdge,
    ) -> Result<(), Error> {
        heat_pipe::HeatPipeBuilder::new(self, scope, params, edge).build(rows)
    }
}
