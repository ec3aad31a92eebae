// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the builder for storages.

use crate::economics::{GlobalParameters, Investment};
use crate::element::Storage;
use crate::graph::Scope;
use crate::tables::StorageRow;
use crate::{Element, EnergySystem, Error, Flow};

pub(crate) struct StorageBuilder<'a> {
    system: &'a mut EnergySystem,
    scope: &'a Scope,
    params: &'a GlobalParameters,
}

impl<'a> StorageBuilder<'a> {
    pub fn new(
        system: &'a mut EnergySystem,
        scope: &'a Scope,
        params: &'a GlobalParameters,
    ) -> Self {
        Self {
            system,
            scope,
            params,
        }
    }

    /// Creates a storage for each active row, charged from and discharged to
    /// the bus of the row's medium.
    ///
    /// Invested storages get the capacity cost from the annuity transform,
    /// and couple their charge and discharge power to the capacity.
    pub fn build(self, rows: &[StorageRow]) -> Result<(), Error> {
        for row in rows {
            let label = self.scope.label(Some(&row.bus), &row.label);
            if !row.active {
                tracing::debug!("Storage {label} is not active, skipping.");
                continue;
            }

            let bus = self.system.bus(&self.scope.bus_label(&row.bus))?;

            let storage = if row.invest {
                let ep_costs = self.params.periodical_costs(row.capex, row.n)?;
                Storage {
                    label,
                    nominal_capacity: None,
                    loss_rate: row.capacity_loss,
                    inflow_conversion_factor: row.inflow_conversion_factor,
                    outflow_conversion_factor: row.outflow_conversion_factor,
                    invest_relation_input_capacity: Some(row.invest_relation_input_capacity),
                    invest_relation_output_capacity: Some(row.invest_relation_output_capacity),
                    investment: Some(Investment::try_new(ep_costs, 0.0, f64::INFINITY)?),
                }
            } else {
                Storage {
                    label,
                    nominal_capacity: Some(row.capacity),
                    loss_rate: row.capacity_loss,
                    inflow_conversion_factor: row.inflow_conversion_factor,
                    outflow_conversion_factor: row.outflow_conversion_factor,
                    invest_relation_input_capacity: None,
                    invest_relation_output_capacity: None,
                    investment: None,
                }
            };

            self.system.add_element(
                Element::Storage(storage),
                vec![(bus, Flow::default())],
                vec![(bus, Flow::default())],
            )?;
        }

        Ok(())
    }
}
