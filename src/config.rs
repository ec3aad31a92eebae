// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module contains the configuration options for assembling an
//! `EnergySystem`.

/// Configuration options for assembling an `EnergySystem`.
#[derive(Clone, Debug)]
pub struct AssemblyConfig {
    /// The medium tag of the balancing points created from the point layer,
    /// and of the heat pipes connecting them.
    pub network_medium: String,

    /// Id prefix that marks the house endpoint of a house lateral line.
    pub house_prefix: String,

    /// Id prefix that marks the generation endpoint of a generation lateral
    /// line.
    pub generation_prefix: String,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            network_medium: "heat".to_string(),
            house_prefix: "H".to_string(),
            generation_prefix: "G".to_string(),
        }
    }
}
