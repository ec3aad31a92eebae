// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the builder for heat pipes.

use crate::economics::{GlobalParameters, Investment};
use crate::element::HeatPipe;
use crate::graph::{PipeEdge, Scope};
use crate::tables::HeatPipeRow;
use crate::{Element, EnergySystem, Error, Flow};

pub(crate) struct HeatPipeBuilder<'a> {
    system: &'a mut EnergySystem,
    scope: &'a Scope,
    params: &'a GlobalParameters,
    edge: &'a PipeEdge,
}

impl<'a> HeatPipeBuilder<'a> {
    pub fn new(
        system: &'a mut EnergySystem,
        scope: &'a Scope,
        params: &'a GlobalParameters,
        edge: &'a PipeEdge,
    ) -> Self {
        Self {
            system,
            scope,
            params,
            edge,
        }
    }

    /// Creates a heat pipe along the edge for each active pipe option.
    ///
    /// The capacity cost scales with the length of the edge.  Nonconvex
    /// options are built with at least `cap_min` or not at all, and add a fixed
    /// cost that also scales with the length.
    pub fn build(self, rows: &[HeatPipeRow]) -> Result<(), Error> {
        for row in rows {
            let label = self.scope.scoped_label(&row.label_3);
            if !row.active {
                tracing::debug!("Heat pipe {label} is not active, skipping.");
                continue;
            }

            let length = self.edge.length;
            let ep_costs = self
                .params
                .periodical_costs(row.capex_pipes * length, row.n_pipes)?;

            let investment = if row.nonconvex {
                let offset = self
                    .params
                    .periodical_costs(row.fix_costs * length, row.n_pipes)?;
                Investment::try_nonconvex(ep_costs, row.cap_min, row.cap_max, offset)?
            } else {
                Investment::try_new(ep_costs, 0.0, row.cap_max)?
            };

            self.system.add_element(
                Element::HeatPipe(HeatPipe {
                    label,
                    heat_loss_factor: row.l_factor,
                    length,
                }),
                vec![(self.edge.input, Flow::default())],
                vec![(
                    self.edge.output,
                    Flow {
                        investment: Some(investment),
                        ..Default::default()
                    },
                )],
            )?;
        }

        Ok(())
    }
}
