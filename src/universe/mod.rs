pub mod config;
pub mod description;
pub mod disjoint_set;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod topology;
pub mod view;

use error::GeneratorError;
use model::{Faction, Planet, PlanetId, Ring, Service, StarSystem, SystemId};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

/// Result of one generation run, keyed by identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Universe {
    pub home: SystemId,
    pub systems: BTreeMap<SystemId, StarSystem>,
    pub planets: BTreeMap<PlanetId, Planet>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UniverseStats {
    pub systems: usize,
    pub planets: usize,
    pub connections: usize,
    pub min_degree: usize,
    pub max_degree: usize,
    pub mean_degree: f64,
    pub mean_tech: f64,
    pub by_faction: BTreeMap<Faction, usize>,
    pub by_ring: BTreeMap<Ring, usize>,
}

impl Universe {
    pub fn system(&self, id: SystemId) -> Option<&StarSystem> {
        self.systems.get(&id)
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.get(&id)
    }

    pub fn home(&self) -> Option<&StarSystem> {
        self.system(self.home)
    }

    pub fn system_by_name(&self, name: &str) -> Option<&StarSystem> {
        self.systems.values().find(|s| s.name == name)
    }

    pub fn planets_of(&self, id: SystemId) -> Vec<&Planet> {
        self.system(id)
            .map(|s| s.planets.iter().filter_map(|p| self.planet(*p)).collect())
            .unwrap_or_default()
    }

    pub fn neighbors(&self, id: SystemId) -> Vec<&StarSystem> {
        self.system(id)
            .map(|s| {
                s.connected_systems
                    .iter()
                    .filter_map(|n| self.system(*n))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn systems_by_faction(&self, faction: Faction) -> Vec<&StarSystem> {
        self.systems.values().filter(|s| s.faction == faction).collect()
    }

    pub fn systems_in_ring(&self, ring: Ring) -> Vec<&StarSystem> {
        self.systems.values().filter(|s| s.ring == ring).collect()
    }

    /// Each jump route once, as (lower id, higher id), in ascending order.
    pub fn connections(&self) -> Vec<(SystemId, SystemId)> {
        let mut out = Vec::new();
        for system in self.systems.values() {
            for &other in &system.connected_systems {
                if system.id < other {
                    out.push((system.id, other));
                }
            }
        }
        out.sort();
        out
    }

    /// Hop count from `start` to every system reachable from it.
    pub fn hops_from(&self, start: SystemId) -> HashMap<SystemId, usize> {
        let mut hops = HashMap::new();
        if !self.systems.contains_key(&start) {
            return hops;
        }
        let mut queue = VecDeque::new();
        hops.insert(start, 0);
        queue.push_back(start);
        while let Some(current) = queue.pop_front() {
            let depth = hops[&current];
            if let Some(system) = self.system(current) {
                for &next in &system.connected_systems {
                    if !hops.contains_key(&next) {
                        hops.insert(next, depth + 1);
                        queue.push_back(next);
                    }
                }
            }
        }
        hops
    }

    pub fn stats(&self) -> UniverseStats {
        let mut stats = UniverseStats {
            systems: self.systems.len(),
            planets: self.planets.len(),
            connections: self.connections().len(),
            min_degree: usize::MAX,
            ..UniverseStats::default()
        };
        let mut degree_total = 0;
        let mut tech_total = 0u32;
        for system in self.systems.values() {
            let degree = system.degree();
            degree_total += degree;
            stats.min_degree = stats.min_degree.min(degree);
            stats.max_degree = stats.max_degree.max(degree);
            tech_total += system.tech_level as u32;
            *stats.by_faction.entry(system.faction).or_insert(0) += 1;
            *stats.by_ring.entry(system.ring).or_insert(0) += 1;
        }
        if stats.systems == 0 {
            stats.min_degree = 0;
        } else {
            stats.mean_degree = degree_total as f64 / stats.systems as f64;
            stats.mean_tech = tech_total as f64 / stats.systems as f64;
        }
        stats
    }

    /// Checks the structural guarantees every generated universe carries.
    /// Degree bounds are deliberately not checked here.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let mut names = HashSet::new();
        for system in self.systems.values() {
            if !names.insert(system.name.as_str()) {
                return Err(GeneratorError::DuplicateName(system.name.clone()));
            }

            let mut seen = HashSet::new();
            for &other in &system.connected_systems {
                if other == system.id {
                    return Err(GeneratorError::SelfLoop(system.id));
                }
                if !seen.insert(other) {
                    return Err(GeneratorError::DuplicateRoute {
                        from: system.id,
                        to: other,
                    });
                }
                let target = self.system(other).ok_or(GeneratorError::UnknownSystem {
                    from: system.id,
                    to: other,
                })?;
                if !target.is_connected_to(system.id) {
                    return Err(GeneratorError::AsymmetricRoute {
                        from: system.id,
                        to: other,
                    });
                }
            }

            for planet_id in &system.planets {
                match self.planet(*planet_id) {
                    Some(p) if p.system_id == system.id => {}
                    _ => return Err(GeneratorError::OrphanPlanet(*planet_id)),
                }
            }
        }

        for planet in self.planets.values() {
            let listed = self
                .system(planet.system_id)
                .map(|s| s.planets.contains(&planet.id))
                .unwrap_or(false);
            if !listed {
                return Err(GeneratorError::OrphanPlanet(planet.id));
            }
            if !planet.offers(Service::Trading) {
                return Err(GeneratorError::MissingTrading(planet.id));
            }
        }

        let reached = self.hops_from(self.home).len();
        if reached != self.systems.len() {
            return Err(GeneratorError::Disconnected {
                reached,
                total: self.systems.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::config::GeneratorConfig;
    use super::generator::{Generator, HOME_SYSTEM_NAME, HOME_TECH_FLOOR, MAX_TECH, MIN_TECH};
    use super::model::{Faction, Position, Ring, Service};
    use super::Universe;
    use crate::universe::error::GeneratorError;
    use std::collections::HashSet;

    fn generate(seed: u64, systems: usize) -> Universe {
        let mut gen = Generator::new(GeneratorConfig::with_seed(seed, systems));
        gen.generate().expect("generation succeeds")
    }

    #[test]
    fn seed_12345_with_ten_systems() {
        let config = GeneratorConfig::with_seed(12345, 10);
        let (min, max) = (config.min_connections, config.max_connections);
        let universe = Generator::new(config).generate().expect("generation succeeds");

        assert_eq!(universe.systems.len(), 10);
        let homes: Vec<_> = universe
            .systems
            .values()
            .filter(|s| s.position == Position::ORIGIN)
            .collect();
        assert_eq!(homes.len(), 1);
        assert_eq!(homes[0].name, HOME_SYSTEM_NAME);
        assert_eq!(homes[0].faction, Faction::HOME);
        assert_eq!(universe.hops_from(homes[0].id).len(), 10);
        for system in universe.systems.values() {
            let degree = system.degree();
            assert!(
                (min..=max).contains(&degree),
                "{} has {} routes",
                system.name,
                degree
            );
        }
    }

    #[test]
    fn every_system_is_reachable_from_home() {
        for seed in [1, 2, 3, 99, 2024] {
            let universe = generate(seed, 80);
            assert_eq!(universe.hops_from(universe.home).len(), 80);
        }
    }

    #[test]
    fn degrees_stay_within_bounds() {
        let config = GeneratorConfig::with_seed(31, 120);
        let (min, max) = (config.min_connections, config.max_connections);
        let universe = Generator::new(config).generate().expect("generation succeeds");
        for system in universe.systems.values() {
            assert!(system.degree() >= min, "{} under-linked", system.name);
            assert!(system.degree() <= max, "{} over-linked", system.name);
        }
    }

    #[test]
    fn routes_are_symmetric_without_loops_or_duplicates() {
        let universe = generate(5, 60);
        for system in universe.systems.values() {
            let unique: HashSet<_> = system.connected_systems.iter().collect();
            assert_eq!(unique.len(), system.connected_systems.len());
            assert!(!system.is_connected_to(system.id));
            for other in &system.connected_systems {
                assert!(universe.systems[other].is_connected_to(system.id));
            }
        }
    }

    #[test]
    fn system_names_are_unique() {
        let universe = generate(8, 300);
        let names: HashSet<_> = universe.systems.values().map(|s| &s.name).collect();
        assert_eq!(names.len(), 300);
    }

    #[test]
    fn same_seed_same_universe() {
        let a = generate(424242, 70);
        let b = generate(424242, 70);
        assert_eq!(a, b);

        let c = generate(424243, 70);
        assert_ne!(a, c);
    }

    #[test]
    fn home_system_invariants() {
        for seed in [10, 20, 30, 40] {
            let universe = generate(seed, 25);
            let home = universe.home().expect("home exists");
            assert_eq!(home.name, HOME_SYSTEM_NAME);
            assert!(home.position.is_origin());
            assert_eq!(home.faction, Faction::HOME);
            assert!(home.tech_level >= HOME_TECH_FLOOR);
            assert_eq!(universe.planets_of(home.id)[0].name, "Earth");
        }
    }

    #[test]
    fn tech_levels_and_services_respect_thresholds() {
        let universe = generate(64, 150);
        for system in universe.systems.values() {
            assert!((MIN_TECH..=MAX_TECH).contains(&system.tech_level));
        }
        for planet in universe.planets.values() {
            assert!((MIN_TECH..=MAX_TECH).contains(&planet.tech_level));
            assert!(planet.offers(Service::Trading));
            for service in &planet.services {
                assert!(
                    planet.tech_level >= service.min_tech(),
                    "{} offers {:?} at tech {}",
                    planet.name,
                    service,
                    planet.tech_level
                );
            }
            assert_eq!(
                planet.tech_level,
                universe.systems[&planet.system_id].tech_level
            );
        }
    }

    #[test]
    fn planets_and_systems_reference_each_other() {
        let universe = generate(17, 40);
        let listed: usize = universe.systems.values().map(|s| s.planets.len()).sum();
        assert_eq!(listed, universe.planets.len());
        for planet in universe.planets.values() {
            assert!(universe.systems[&planet.system_id]
                .planets
                .contains(&planet.id));
        }
    }

    #[test]
    fn degenerate_configs_do_not_crash() {
        let mut single = GeneratorConfig::with_seed(3, 0);
        single.max_planets = 0;
        let universe = Generator::new(single).generate().expect("single system");
        assert_eq!(universe.systems.len(), 1);
        assert!(universe.connections().is_empty());

        let mut tight = GeneratorConfig::with_seed(3, 4);
        tight.min_connections = 10;
        tight.max_connections = 10;
        let universe = Generator::new(tight).generate().expect("tight degrees");
        assert!(universe.systems.values().all(|s| s.degree() == 3));

        let mut scrambled = GeneratorConfig::with_seed(3, 30);
        scrambled.core_radius = 500.0;
        scrambled.mid_radius = 10.0;
        scrambled.edge_radius = 0.0;
        let universe = Generator::new(scrambled).generate().expect("scrambled radii");
        assert_eq!(universe.systems.len(), 30);
    }

    #[test]
    fn connections_list_each_route_once() {
        let universe = generate(21, 30);
        let connections = universe.connections();
        let degree_sum: usize = universe.systems.values().map(|s| s.degree()).sum();
        assert_eq!(connections.len() * 2, degree_sum);
        assert!(connections.iter().all(|(a, b)| a < b));
        assert_eq!(universe.stats().connections, connections.len());
    }

    #[test]
    fn stats_summarise_the_universe() {
        let universe = generate(12, 45);
        let stats = universe.stats();
        assert_eq!(stats.systems, 45);
        assert_eq!(stats.planets, universe.planets.len());
        assert_eq!(stats.by_faction.values().sum::<usize>(), 45);
        assert_eq!(stats.by_ring.values().sum::<usize>(), 45);
        assert!(stats.min_degree <= stats.max_degree);
        assert!(stats.mean_degree >= stats.min_degree as f64);
        assert!(stats.mean_tech >= 1.0 && stats.mean_tech <= 10.0);
    }

    #[test]
    fn validate_catches_broken_routes() {
        let mut universe = generate(6, 12);
        let home = universe.home;
        let victim = universe.systems[&home].connected_systems[0];
        universe
            .systems
            .get_mut(&victim)
            .expect("neighbour exists")
            .connected_systems
            .retain(|id| *id != home);
        assert!(matches!(
            universe.validate(),
            Err(GeneratorError::AsymmetricRoute { .. })
        ));

        let mut universe = generate(6, 12);
        let home = universe.home;
        universe
            .systems
            .get_mut(&home)
            .expect("home exists")
            .connected_systems
            .push(home);
        assert!(matches!(
            universe.validate(),
            Err(GeneratorError::SelfLoop(_))
        ));
    }

    #[test]
    fn lookups_find_systems_by_name_and_faction() {
        let universe = generate(88, 35);
        let home = universe.system_by_name(HOME_SYSTEM_NAME).expect("Sol present");
        assert_eq!(home.id, universe.home);
        assert!(universe
            .systems_by_faction(Faction::HOME)
            .iter()
            .any(|s| s.id == universe.home));
        assert_eq!(universe.neighbors(home.id).len(), home.degree());
        let total: usize = Ring::ALL
            .iter()
            .map(|r| universe.systems_in_ring(*r).len())
            .sum();
        assert!(universe.systems_in_ring(Ring::Core).contains(&home));
        assert_eq!(total, 35);
    }
}
