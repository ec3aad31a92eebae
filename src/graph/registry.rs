// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! The balancing-point registry of an [`EnergySystem`].

use petgraph::graph::NodeIndex;

use crate::element::Bus;
use crate::{Element, EnergySystem, Error, Label};

/// A handle to a balancing point registered in an [`EnergySystem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BusHandle(pub(crate) NodeIndex);

/// Balancing-point registration and lookup.
impl EnergySystem {
    /// Returns the handle of the bus with the given label, creating the bus if
    /// it doesn't exist yet.
    ///
    /// An existing bus is never modified, so calling this repeatedly with the
    /// same label always returns the same handle.
    pub fn get_or_create_bus(&mut self, label: Label) -> Result<BusHandle, Error> {
        if let Some(handle) = self.buses.get(&label) {
            return Ok(*handle);
        }
        if self.node_indices.contains_key(&label) {
            return Err(Error::internal(format!(
                "Label {label} is already used by an element that is not a bus."
            )));
        }

        let idx = self.graph.add_node(Element::Bus(Bus {
            label: label.clone(),
        }));
        let handle = BusHandle(idx);
        self.node_indices.insert(label.clone(), idx);
        self.buses.insert(label, handle);

        Ok(handle)
    }

    /// Returns the handle of the bus with the given label.
    ///
    /// Returns an error if no such bus has been registered.
    pub fn bus(&self, label: &Label) -> Result<BusHandle, Error> {
        self.buses
            .get(label)
            .copied()
            .ok_or_else(|| Error::missing_reference(format!("Bus {label} not found.")))
    }

    /// Returns true if a bus with the given label has been registered.
    pub fn contains_bus(&self, label: &Label) -> bool {
        self.buses.contains_key(label)
    }

    /// Returns the number of registered buses.
    pub fn bus_count(&self) -> usize {
        self.buses.len()
    }

    /// Returns the bus element behind the given handle.
    pub fn bus_element(&self, handle: BusHandle) -> Result<&Element, Error> {
        match self.graph.node_weight(handle.0) {
            Some(element @ Element::Bus(_)) => Ok(element),
            _ => Err(Error::internal(format!(
                "Handle {:?} doesn't point to a bus.",
                handle.0
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssemblyConfig, Group};

    #[test]
    fn test_get_or_create_is_idempotent() -> Result<(), Error> {
        let mut system = EnergySystem::new(AssemblyConfig::default());
        let label = Label::bus(Group::House, "heat", "H1");

        let first = system.get_or_create_bus(label.clone())?;
        let second = system.get_or_create_bus(label.clone())?;

        assert_eq!(first, second);
        assert_eq!(system.bus_count(), 1);
        assert_eq!(system.elements().count(), 1);
        assert_eq!(
            system.bus_element(first)?,
            &Element::Bus(Bus {
                label: label.clone()
            })
        );

        let other = system.get_or_create_bus(Label::bus(Group::Infrastructure, "heat", "H1"))?;
        assert_ne!(first, other);
        assert_eq!(system.elements().count(), 2);

        Ok(())
    }

    #[test]
    fn test_lookup() -> Result<(), Error> {
        let mut system = EnergySystem::new(AssemblyConfig::default());
        let label = Label::bus(Group::Infrastructure, "heat", "K1");

        assert!(system
            .bus(&label)
            .is_err_and(|e| e == Error::missing_reference(
                "Bus infrastructure_heat_bus_K1 not found."
            )));
        assert!(!system.contains_bus(&label));

        let handle = system.get_or_create_bus(label.clone())?;
        assert_eq!(system.bus(&label), Ok(handle));
        assert!(system.contains_bus(&label));

        Ok(())
    }
}
