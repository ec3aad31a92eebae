// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the builder for demands.

use crate::economics::GlobalParameters;
use crate::element::Sink;
use crate::graph::Scope;
use crate::tables::{DemandRow, DemandSeries};
use crate::{Element, EnergySystem, Error, Flow, Label};

pub(crate) struct DemandBuilder<'a> {
    system: &'a mut EnergySystem,
    scope: &'a Scope,
    series: &'a DemandSeries,
    params: &'a GlobalParameters,
}

impl<'a> DemandBuilder<'a> {
    pub fn new(
        system: &'a mut EnergySystem,
        scope: &'a Scope,
        series: &'a DemandSeries,
        params: &'a GlobalParameters,
    ) -> Self {
        Self {
            system,
            scope,
            series,
            params,
        }
    }

    /// Creates a sink for each active row, drawing from the bus of the row's
    /// medium.
    ///
    /// The sink follows the series stored for the row's medium and the
    /// scope's instance, scaled by the row's `scalingfactor`.
    pub fn build(self, rows: &[DemandRow]) -> Result<(), Error> {
        for row in rows {
            let label = self.scope.label(Some(&row.label_2), Label::DEMAND);
            if !row.active {
                tracing::debug!("Demand {label} is not active, skipping.");
                continue;
            }

            let series = self.series.get(&row.label_2, self.scope.instance())?;
            if series.len() != self.params.num_ts {
                return Err(Error::invalid_parameter(format!(
                    "Demand series of {label} has {} values, expected {}.",
                    series.len(),
                    self.params.num_ts
                )));
            }

            let bus = self.system.bus(&self.scope.bus_label(&row.label_2))?;
            self.system.add_element(
                Element::Sink(Sink { label }),
                vec![(
                    bus,
                    Flow {
                        nominal_value: Some(row.scalingfactor),
                        actual_value: Some(series.to_vec()),
                        fixed: row.fixed,
                        ..Default::default()
                    },
                )],
                vec![],
            )?;
        }

        Ok(())
    }
}
