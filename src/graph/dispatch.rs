// License: MIT
// Copyright © 2024 The dhs-network-graph Authors

//! Methods for applying a group's catalogs to every instance of the group.

use crate::economics::GlobalParameters;
use crate::tables::SiteData;
use crate::{ComponentCategory, EnergySystem, Error, Group};

use super::Scope;

/// Adds the elements of one category for one instance, from the site's
/// catalogs.
type SiteBuilder = fn(&mut EnergySystem, &Scope, &SiteData, &GlobalParameters) -> Result<(), Error>;

/// The builders that run after an instance's buses exist, keyed by category.
const SITE_BUILDERS: [(ComponentCategory, SiteBuilder); 4] = [
    (ComponentCategory::Source, sources),
    (ComponentCategory::Sink, demands),
    (ComponentCategory::Transformer, transformers),
    (ComponentCategory::Storage, storages),
];

fn sources(
    system: &mut EnergySystem,
    scope: &Scope,
    site: &SiteData,
    _: &GlobalParameters,
) -> Result<(), Error> {
    system.add_sources(scope, &site.catalog.source)
}

fn demands(
    system: &mut EnergySystem,
    scope: &Scope,
    site: &SiteData,
    params: &GlobalParameters,
) -> Result<(), Error> {
    system.add_demands(scope, &site.catalog.demand, &site.series, params)
}

fn transformers(
    system: &mut EnergySystem,
    scope: &Scope,
    site: &SiteData,
    params: &GlobalParameters,
) -> Result<(), Error> {
    system.add_transformers(scope, &site.catalog.transformer, params)
}

fn storages(
    system: &mut EnergySystem,
    scope: &Scope,
    site: &SiteData,
    params: &GlobalParameters,
) -> Result<(), Error> {
    system.add_storages(scope, &site.catalog.storages, params)
}

/// Per-group assembly.
impl EnergySystem {
    /// Adds the elements listed in the site's catalogs for every given
    /// instance of the group.
    ///
    /// The buses of an instance are created first, as all other elements of
    /// the instance attach to them.  Buses that already exist, like the
    /// network buses created from the point layer, are reused.
    pub fn add_sites<'a>(
        &mut self,
        group: Group,
        instances: impl IntoIterator<Item = &'a str>,
        site: &SiteData,
        params: &GlobalParameters,
    ) -> Result<(), Error> {
        let mut count = 0;
        for instance in instances {
            let scope = Scope::new(group, instance);
            self.add_buses(&scope, &site.catalog.bus)?;

            for (category, build) in SITE_BUILDERS {
                tracing::trace!("Adding {category} elements for {group} {instance}.");
                build(self, &scope, site, params)?;
            }
            count += 1;
        }

        tracing::info!("Elements appended for {count} {group} instances.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component_category::CategoryPredicates;
    use crate::graph::test_utils::{generation_site, house_site, params};
    use crate::{AssemblyConfig, Label};

    #[test]
    fn test_house_sites() -> Result<(), Error> {
        let mut system = EnergySystem::new(AssemblyConfig::default());
        let site = house_site(&["H1", "H2"]);

        system.add_sites(Group::House, ["H1", "H2"], &site, &params())?;

        let summary = system.summary();
        assert_eq!(summary[&ComponentCategory::Bus], 4);
        assert_eq!(summary[&ComponentCategory::Source], 4);
        assert_eq!(summary[&ComponentCategory::Sink], 2);
        assert_eq!(summary[&ComponentCategory::Transformer], 2);
        assert_eq!(summary[&ComponentCategory::Storage], 2);

        for instance in ["H1", "H2"] {
            let boiler = Label::new(Group::House, None, "boiler", instance);
            assert!(system.element(&boiler)?.is_transformer());
            assert!(system
                .outputs(&boiler)?
                .eq([system.element(&Label::bus(Group::House, "heat", instance))?]));
        }

        Ok(())
    }

    #[test]
    fn test_same_builders_for_generation() -> Result<(), Error> {
        let mut system = EnergySystem::new(AssemblyConfig::default());
        system.get_or_create_bus(Label::bus(Group::Generation, "heat", "G1"))?;

        system.add_sites(Group::Generation, ["G1"], &generation_site(), &params())?;

        let labels = system
            .elements()
            .map(|e| e.label().to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            labels,
            [
                "generation_heat_bus_G1",
                "generation_gas_bus_G1",
                "generation_gas_shortage_G1",
                "generation_gas_source_G1",
                "generation_None_boiler_G1",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_failing_site_aborts() {
        let mut system = EnergySystem::new(AssemblyConfig::default());
        let site = house_site(&["H1"]);

        assert!(system
            .add_sites(Group::House, ["H1", "H2"], &site, &params())
            .is_err_and(|e| e == Error::missing_reference("No heat demand series found for H2.")));
    }
}
