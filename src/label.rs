// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! This module defines the `Label` identity key and the `Group` enum, which
//! together identify every element of an `EnergySystem`.

use std::fmt::Display;

/// The network segment that owns an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    House,
    Generation,
    Infrastructure,
}

impl Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Group::House => write!(f, "house"),
            Group::Generation => write!(f, "generation"),
            Group::Infrastructure => write!(f, "infrastructure"),
        }
    }
}

/// The four-part identity key of an element: `(group, medium, role,
/// instance)`.
///
/// Two labels are equal iff all four parts are equal.  No normalization is
/// applied, so callers need to use consistent spelling for the medium, role
/// and instance parts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label {
    group: Group,
    medium: Option<String>,
    role: String,
    instance: String,
}

impl Label {
    /// Role tag of balancing points.
    pub const BUS: &'static str = "bus";
    /// Role tag of sources attached by the source builder.
    pub const SOURCE: &'static str = "source";
    /// Role tag of sinks attached by the demand builder.
    pub const DEMAND: &'static str = "demand";
    /// Role tag of the optional excess sink of a bus.
    pub const EXCESS: &'static str = "excess";
    /// Role tag of the optional shortage source of a bus.
    pub const SHORTAGE: &'static str = "shortage";

    /// Creates a new label from its four parts.
    pub fn new(
        group: Group,
        medium: Option<&str>,
        role: impl Into<String>,
        instance: impl Into<String>,
    ) -> Self {
        Self {
            group,
            medium: medium.map(str::to_string),
            role: role.into(),
            instance: instance.into(),
        }
    }

    /// Creates the label of the balancing point for the given medium at the
    /// given location.
    pub fn bus(group: Group, medium: &str, instance: impl Into<String>) -> Self {
        Self::new(group, Some(medium), Self::BUS, instance)
    }

    /// Returns a copy of this label with the role replaced.
    pub(crate) fn with_role(&self, role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            ..self.clone()
        }
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn medium(&self) -> Option<&str> {
        self.medium.as_deref()
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn instance(&self) -> &str {
        &self.instance
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}_{}_{}_{}",
            self.group,
            self.medium.as_deref().unwrap_or("None"),
            self.role,
            self.instance
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality() {
        let a = Label::bus(Group::House, "heat", "H1");
        let b = Label::new(Group::House, Some("heat"), "bus", "H1");
        assert_eq!(a, b);

        assert_ne!(a, Label::bus(Group::Infrastructure, "heat", "H1"));
        assert_ne!(a, Label::bus(Group::House, "gas", "H1"));
        assert_ne!(a, Label::bus(Group::House, "heat", "h1"));
        assert_ne!(
            Label::new(Group::House, None, "boiler", "H1"),
            Label::new(Group::House, Some("heat"), "boiler", "H1")
        );

        let set: HashSet<Label> = [a.clone(), b, a.with_role("demand")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Label::bus(Group::Infrastructure, "heat", "K1").to_string(),
            "infrastructure_heat_bus_K1"
        );
        assert_eq!(
            Label::new(Group::Generation, None, "boiler", "G1").to_string(),
            "generation_None_boiler_G1"
        );
    }
}
