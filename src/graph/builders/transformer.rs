// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the builder for conversion units.

use crate::economics::{GlobalParameters, Investment};
use crate::element::Transformer;
use crate::graph::Scope;
use crate::tables::{Efficiency, TransformerRow, TransformerType};
use crate::{Element, EnergySystem, Error, Flow};

pub(crate) struct TransformerBuilder<'a> {
    system: &'a mut EnergySystem,
    scope: &'a Scope,
    params: &'a GlobalParameters,
}

impl<'a> TransformerBuilder<'a> {
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

    /// Creates a conversion unit for each active row.
    ///
    /// Conversion units have no medium in their label, as the role already
    /// identifies them.  When the row is an investment, the capacity of the
    /// output flow is left to the optimizer, at the annualized capital cost
    /// plus the service cost, both scaled to the modeled horizon.
    pub fn build(self, rows: &[TransformerRow]) -> Result<(), Error> {
        for row in rows {
            let label = self.scope.label(None, &row.label_3);
            if !row.active {
                tracing::debug!("Transformer {label} is not active, skipping.");
                continue;
            }

            let conversion_factor = match row.eff_out_1 {
                Efficiency::Constant(value) => value,
                Efficiency::Series => {
                    return Err(Error::unsupported_feature(format!(
                        "Transformer {label} has an efficiency given as a time series."
                    )));
                }
            };

            match row.kind {
                TransformerType::OneInOneOut => {
                    let input = self.system.bus(&self.scope.bus_label(&row.in_1))?;
                    let output = self.system.bus(&self.scope.bus_label(&row.out_1))?;

                    let output_flow = if row.invest {
                        let ep_costs = self.params.periodical_costs(row.capex, row.n)?
                            + row.service * self.params.horizon_scale()?;
                        Flow {
                            variable_costs: row.variable_costs,
                            summed_max: row.in_1_sum_max,
                            investment: Some(Investment::try_new(
                                ep_costs,
                                row.min_invest,
                                row.max_invest,
                            )?),
                            ..Default::default()
                        }
                    } else {
                        Flow {
                            nominal_value: Some(row.installed),
                            variable_costs: row.variable_costs,
                            summed_max: row.in_1_sum_max,
                            ..Default::default()
                        }
                    };

                    self.system.add_element(
                        Element::Transformer(Transformer {
                            label,
                            conversion_factor,
                        }),
                        vec![(input, Flow::default())],
                        vec![(output, output_flow)],
                    )?;
                }
            }
        }

        Ok(())
    }
}
