// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Economic parameters and the annuity transform used to derive investment
//! costs for conversion units, storages and heat pipes.

use serde::Deserialize;

use crate::Error;

/// Number of hours in the reference period that annuities are computed for.
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Global parameters shared by all builders.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct GlobalParameters {
    /// Number of modeled timesteps.
    pub num_ts: usize,
    /// Length of a timestep in hours, e.g. `0.25` for quarter-hour resolution.
    pub time_res: f64,
    /// Discount rate used for annualizing capital costs.
    pub rate: f64,
}

impl GlobalParameters {
    /// Returns the factor that converts an annualized cost into the cost for
    /// the modeled horizon.
    ///
    /// Returns an error if the horizon is empty or the time resolution is not
    /// a positive number of hours, as every derived cost would be zero.
    pub fn horizon_scale(&self) -> Result<f64, Error> {
        if self.num_ts == 0 {
            return Err(Error::invalid_parameter(
                "Number of timesteps must be at least one. Found 0.",
            ));
        }
        if !self.time_res.is_finite() || self.time_res <= 0.0 {
            return Err(Error::invalid_parameter(format!(
                "Time resolution must be a positive number of hours. Found {}.",
                self.time_res
            )));
        }
        Ok(self.num_ts as f64 / (HOURS_PER_YEAR / self.time_res))
    }

    /// Returns the annuity of `capex` over `n` years at the global discount
    /// rate, scaled to the modeled horizon.
    pub fn periodical_costs(&self, capex: f64, n: u32) -> Result<f64, Error> {
        Ok(annuity(capex, n, self.rate)? * self.horizon_scale()?)
    }
}

/// Calculates the annuity of a one-time capital cost `capex` paid off over `n`
/// years at the discount rate `rate`.
///
/// `annuity(C, n, r) = C * r(1+r)^n / ((1+r)^n - 1)`, which is `C / n` for a
/// rate of zero.
pub fn annuity(capex: f64, n: u32, rate: f64) -> Result<f64, Error> {
    if n < 1 {
        return Err(Error::invalid_parameter(format!(
            "Annuity needs a lifetime of at least one year. Found {n}."
        )));
    }
    if !(0.0..=1.0).contains(&rate) {
        return Err(Error::invalid_parameter(format!(
            "Discount rate must be between 0 and 1. Found {rate}."
        )));
    }

    if rate == 0.0 {
        return Ok(capex / n as f64);
    }

    // Equal to `C * r(1+r)^n / ((1+r)^n - 1)`, and stays finite when the
    // growth factor overflows for very long lifetimes.
    let growth = (1.0 + rate).powf(f64::from(n));
    Ok(capex * rate / (1.0 - growth.recip()))
}

/// The parameters that let the optimizer choose an installed capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct Investment {
    ep_costs: f64,
    minimum: f64,
    maximum: f64,
    offset: Option<f64>,
}

impl Investment {
    /// Creates a continuous investment with the given capacity-proportional
    /// cost and capacity bounds.
    pub fn try_new(ep_costs: f64, minimum: f64, maximum: f64) -> Result<Self, Error> {
        Self::validate(ep_costs, minimum, maximum)?;
        Ok(Self {
            ep_costs,
            minimum,
            maximum,
            offset: None,
        })
    }

    /// Creates an indivisible investment: the capacity is either zero, or
    /// between `minimum` and `maximum` at the additional fixed `offset` cost.
    pub fn try_nonconvex(
        ep_costs: f64,
        minimum: f64,
        maximum: f64,
        offset: f64,
    ) -> Result<Self, Error> {
        Self::validate(ep_costs, minimum, maximum)?;
        if offset.is_nan() || offset < 0.0 {
            return Err(Error::invalid_parameter(format!(
                "Investment offset must be non-negative. Found {offset}."
            )));
        }
        Ok(Self {
            ep_costs,
            minimum,
            maximum,
            offset: Some(offset),
        })
    }

    fn validate(ep_costs: f64, minimum: f64, maximum: f64) -> Result<(), Error> {
        if !ep_costs.is_finite() || ep_costs < 0.0 {
            return Err(Error::invalid_parameter(format!(
                "Investment costs must be finite and non-negative. Found {ep_costs}."
            )));
        }
        if minimum.is_nan() || maximum.is_nan() || minimum < 0.0 || minimum > maximum {
            return Err(Error::invalid_parameter(format!(
                "Investment bounds must satisfy 0 <= minimum <= maximum. Found [{minimum}, {maximum}]."
            )));
        }
        Ok(())
    }

    /// Returns the cost per unit of installed capacity.
    pub fn ep_costs(&self) -> f64 {
        self.ep_costs
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    /// Returns the fixed cost of an indivisible investment.
    pub fn offset(&self) -> Option<f64> {
        self.offset
    }

    pub fn is_nonconvex(&self) -> bool {
        self.offset.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_annuity() -> Result<(), Error> {
        assert_eq!(annuity(1000.0, 20, 0.0)?, 50.0);
        assert!((annuity(1000.0, 20, 0.05)? - 80.24).abs() < 0.005);
        assert!(approx_eq(annuity(1000.0, 1, 0.05)?, 1050.0));

        assert!(annuity(1000.0, 0, 0.05)
            .is_err_and(|e| e
                == Error::invalid_parameter(
                    "Annuity needs a lifetime of at least one year. Found 0."
                )));
        assert!(annuity(1000.0, 20, -0.1).is_err_and(|e| e
            == Error::invalid_parameter("Discount rate must be between 0 and 1. Found -0.1.")));
        assert!(annuity(1000.0, 20, 1.5).is_err());

        // Lifetimes beyond the range of `i32` still give the limit `C * r`.
        assert!(approx_eq(annuity(1000.0, u32::MAX, 0.05)?, 50.0));
        assert!(annuity(1000.0, 1000, 0.05)? >= 50.0);

        Ok(())
    }

    #[test]
    fn test_horizon_scale() -> Result<(), Error> {
        let hourly = GlobalParameters {
            num_ts: 8760,
            time_res: 1.0,
            rate: 0.05,
        };
        assert_eq!(hourly.horizon_scale()?, 1.0);

        let short = GlobalParameters {
            num_ts: 876,
            time_res: 1.0,
            rate: 0.05,
        };
        assert!(approx_eq(short.horizon_scale()?, 0.1));

        let quarter_hourly = GlobalParameters {
            num_ts: 876,
            time_res: 0.25,
            rate: 0.05,
        };
        assert!(approx_eq(quarter_hourly.horizon_scale()?, 0.025));

        // The derived cost scales linearly with the horizon.
        let full = hourly.periodical_costs(1000.0, 20)?;
        assert!(approx_eq(short.periodical_costs(1000.0, 20)?, full * 0.1));
        assert!(approx_eq(full, annuity(1000.0, 20, 0.05)?));

        Ok(())
    }

    #[test]
    fn test_invalid_horizon() {
        let zero_res = GlobalParameters {
            num_ts: 6,
            time_res: 0.0,
            rate: 0.05,
        };
        assert!(zero_res.periodical_costs(1000.0, 20).is_err_and(|e| e
            == Error::invalid_parameter(
                "Time resolution must be a positive number of hours. Found 0."
            )));

        let nan_res = GlobalParameters {
            time_res: f64::NAN,
            ..zero_res.clone()
        };
        assert!(nan_res.horizon_scale().is_err());

        let empty = GlobalParameters {
            num_ts: 0,
            time_res: 1.0,
            rate: 0.05,
        };
        assert!(empty.periodical_costs(1000.0, 20).is_err_and(|e| e
            == Error::invalid_parameter("Number of timesteps must be at least one. Found 0.")));
    }

    #[test]
    fn test_investment() -> Result<(), Error> {
        let inv = Investment::try_new(12.5, 0.0, 100.0)?;
        assert_eq!(inv.ep_costs(), 12.5);
        assert_eq!(inv.offset(), None);
        assert!(!inv.is_nonconvex());

        let inv = Investment::try_nonconvex(12.5, 10.0, 100.0, 300.0)?;
        assert_eq!(inv.offset(), Some(300.0));
        assert!(inv.is_nonconvex());
        assert_eq!((inv.minimum(), inv.maximum()), (10.0, 100.0));

        assert!(Investment::try_new(-1.0, 0.0, 100.0).is_err_and(|e| e
            == Error::invalid_parameter(
                "Investment costs must be finite and non-negative. Found -1."
            )));
        assert!(Investment::try_new(f64::NAN, 0.0, 100.0).is_err());
        assert!(Investment::try_new(1.0, 50.0, 10.0).is_err());
        assert!(Investment::try_nonconvex(1.0, 0.0, 10.0, -5.0).is_err());

        Ok(())
    }
}
