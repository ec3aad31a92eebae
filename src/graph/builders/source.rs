// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the builder for sources.

use crate::element::Source;
use crate::graph::Scope;
use crate::tables::SourceRow;
use crate::{Element, EnergySystem, Error, Flow, Label};

pub(crate) struct SourceBuilder<'a> {
    system: &'a mut EnergySystem,
    scope: &'a Scope,
}

impl<'a> SourceBuilder<'a> {
    pub fn new(system: &'a mut EnergySystem, scope: &'a Scope) -> Self {
        Self { system, scope }
    }

    /// Creates a source with constant variable costs for each active row,
    /// feeding the bus of the row's medium.
    pub fn build(self, rows: &[SourceRow]) -> Result<(), Error> {
        for row in rows {
            let label = self.scope.label(Some(&row.label_2), Label::SOURCE);
            if !row.active {
                tracing::debug!("Source {label} is not active, skipping.");
                continue;
            }
            if row.cost_series {
                return Err(Error::unsupported_feature(format!(
                    "Source {label} has variable costs given as a time series."
                )));
            }

            let bus = self.system.bus(&self.scope.bus_label(&row.label_2))?;
            self.system.add_element(
                Element::Source(Source { label }),
                vec![],
                vec![(
                    bus,
                    Flow {
                        variable_costs: row.variable_costs,
                        ..Default::default()
                    },
                )],
            )?;
        }

        Ok(())
    }
}
