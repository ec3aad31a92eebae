// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the builder for buses.

use crate::element::{Sink, Source};
use crate::graph::Scope;
use crate::tables::BusRow;
use crate::{Element, EnergySystem, Error, Flow, Label};

pub(crate) struct BusBuilder<'a> {
    system: &'a mut EnergySystem,
    scope: &'a Scope,
}

impl<'a> BusBuilder<'a> {
    pub fn new(system: &'a mut EnergySystem, scope: &'a Scope) -> Self {
        Self { system, scope }
    }

    /// Creates the buses of the active rows.
    ///
    /// Buses can be requested more than once, e.g. when a house catalog lists
    /// the heat bus that was already created for the house's point.  Such
    /// rows are skipped entirely, so the excess sink and shortage source are
    /// only attached when the bus is created.
    pub fn build(self, rows: &[BusRow]) -> Result<(), Error> {
        for row in rows {
            let label = self.scope.bus_label(&row.label_2);
            if !row.active {
                tracing::debug!("Bus {label} is not active, skipping.");
                continue;
            }
            if self.system.contains_bus(&label) {
                tracing::debug!("Bus {label} already exists, skipping.");
                continue;
            }

            let bus = self.system.get_or_create_bus(label.clone())?;

            if row.excess {
                self.system.add_element(
                    Element::Sink(Sink {
                        label: label.with_role(Label::EXCESS),
                    }),
                    vec![(
                        bus,
                        Flow {
                            variable_costs: row.excess_costs,
                            ..Default::default()
                        },
                    )],
                    vec![],
                )?;
            }

            if row.shortage {
                self.system.add_element(
                    Element::Source(Source {
                        label: label.with_role(Label::SHORTAGE),
                    }),
                    vec![],
                    vec![(
                        bus,
                        Flow {
                            variable_costs: row.shortage_costs,
                            ..Default::default()
                        },
                    )],
                )?;
            }
        }

        Ok(())
    }
}
