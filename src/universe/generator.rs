//! Seed-driven universe generation.
//!
//! Phases run over an arena of systems addressed by index (index 0 is the
//! home system). Each phase reads earlier outputs as slices and returns a
//! fresh `Vec`; nothing is patched in place after it has been produced.

use crate::universe::config::GeneratorConfig;
use crate::universe::description::{describe_planet, describe_system};
use crate::universe::error::GeneratorError;
use crate::universe::model::{
    Faction, Planet, PlanetId, Position, Ring, Service, StarSystem, SystemId,
};
use crate::universe::naming::{planet_name, NameRegistry};
use crate::universe::topology::{build_routes, spanning_tree, DegreeBounds};
use crate::universe::Universe;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::{BTreeMap, HashSet};
use std::f64::consts::TAU;

pub const HOME_SYSTEM_NAME: &str = "Sol";
pub const HOME_PLANET_NAME: &str = "Earth";
/// The home system's tech level never drops below this.
pub const HOME_TECH_FLOOR: u8 = 7;

pub const MIN_TECH: u8 = 1;
pub const MAX_TECH: u8 = 10;

const PLACEMENT_RETRIES: usize = 8;

pub struct Generator {
    rng: ChaCha8Rng,
    seed: u64,
    config: GeneratorConfig,
    next_id: u32,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        let seed = if config.seed == 0 {
            rand::thread_rng().gen_range(1..=u64::MAX)
        } else {
            config.seed
        };
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
            config,
            next_id: 0,
        }
    }

    /// Effective seed; differs from the config only when the config asked for a random one.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs every phase. A second call continues the same random stream and
    /// yields a different universe.
    pub fn generate(&mut self) -> Result<Universe, GeneratorError> {
        let count = self.config.system_count.max(1);
        log::info!("generating {} systems (seed {})", count, self.seed);

        let positions = self.place_systems(count);
        let rings: Vec<Ring> = positions.iter().map(|p| self.ring_of(p)).collect();
        let factions = self.assign_factions(&rings);
        let tech_levels = self.assign_tech_levels(&rings);
        let names = self.name_systems(count);
        let descriptions = self.describe_systems(&factions, &rings, &tech_levels);

        let tree = spanning_tree(&positions);
        log::debug!("spanning tree has {} edges", tree.len());
        let bounds = DegreeBounds {
            min: self.config.min_connections,
            max: self.config.max_connections,
        };
        let links = build_routes(
            &positions,
            &tree,
            bounds,
            self.config.shortcut_chance,
            &mut self.rng,
        );

        let system_ids: Vec<SystemId> = (0..count).map(|_| SystemId(self.alloc_id())).collect();
        let planets = self.generate_planets(&system_ids, &names, &factions, &tech_levels);

        let universe = assemble(Arena {
            ids: &system_ids,
            names,
            positions: &positions,
            rings: &rings,
            factions: &factions,
            tech_levels: &tech_levels,
            descriptions,
            links: &links,
            planets,
        });
        universe.validate()?;

        log::info!(
            "generated {} systems and {} planets",
            universe.systems.len(),
            universe.planets.len()
        );
        Ok(universe)
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn sample_between(&mut self, low: f64, high: f64) -> f64 {
        if high > low {
            self.rng.gen_range(low..high)
        } else {
            low
        }
    }

    fn sample_radius(&mut self) -> f64 {
        let c = &self.config;
        let (core, mid, outer, edge) = (c.core_radius, c.mid_radius, c.outer_radius, c.edge_radius);
        let roll: f64 = self.rng.gen();
        let radius = if roll < 0.15 {
            self.sample_between(0.0, core)
        } else if roll < 0.50 {
            self.sample_between(core, mid)
        } else if roll < 0.90 {
            self.sample_between(mid, outer)
        } else {
            self.sample_between(outer, edge)
        };
        // Keeps every non-home system off the origin after rounding.
        radius.max(1.0)
    }

    fn sample_position(&mut self) -> Position {
        let angle = self.rng.gen_range(0.0..TAU);
        let radius = self.sample_radius();
        Position::new(
            (radius * angle.cos()).round() as i32,
            (radius * angle.sin()).round() as i32,
        )
    }

    fn place_systems(&mut self, count: usize) -> Vec<Position> {
        let mut positions = Vec::with_capacity(count);
        let mut occupied = HashSet::new();
        positions.push(Position::ORIGIN);
        occupied.insert(Position::ORIGIN);
        for _ in 1..count {
            // A few redraws keep systems from stacking; a crowded config may still stack.
            let mut position = self.sample_position();
            for _ in 0..PLACEMENT_RETRIES {
                if !occupied.contains(&position) {
                    break;
                }
                position = self.sample_position();
            }
            occupied.insert(position);
            positions.push(position);
        }
        positions
    }

    pub fn ring_of(&self, position: &Position) -> Ring {
        let distance = position.distance_to(&Position::ORIGIN);
        if distance <= self.config.core_radius {
            Ring::Core
        } else if distance <= self.config.mid_radius {
            Ring::Mid
        } else if distance <= self.config.outer_radius {
            Ring::Outer
        } else {
            Ring::Edge
        }
    }

    fn assign_factions(&mut self, rings: &[Ring]) -> Vec<Faction> {
        rings
            .iter()
            .enumerate()
            .map(|(idx, &ring)| {
                if idx == 0 {
                    Faction::HOME
                } else {
                    weighted_pick(&mut self.rng, faction_weights(ring))
                }
            })
            .collect()
    }

    fn assign_tech_levels(&mut self, rings: &[Ring]) -> Vec<u8> {
        rings
            .iter()
            .enumerate()
            .map(|(idx, &ring)| {
                let rolled = base_tech(ring) as i32 + self.rng.gen_range(-1..=1);
                let tech = rolled.clamp(MIN_TECH as i32, MAX_TECH as i32) as u8;
                if idx == 0 {
                    tech.max(HOME_TECH_FLOOR)
                } else {
                    tech
                }
            })
            .collect()
    }

    fn name_systems(&mut self, count: usize) -> Vec<String> {
        let mut registry = NameRegistry::new(self.config.naming.clone());
        registry.reserve(HOME_SYSTEM_NAME);
        let mut names = Vec::with_capacity(count);
        names.push(HOME_SYSTEM_NAME.to_string());
        for _ in 1..count {
            names.push(registry.system_name(&mut self.rng));
        }
        names
    }

    fn describe_systems(
        &mut self,
        factions: &[Faction],
        rings: &[Ring],
        tech_levels: &[u8],
    ) -> Vec<String> {
        factions
            .iter()
            .zip(rings)
            .zip(tech_levels)
            .map(|((&faction, &ring), &tech)| describe_system(&mut self.rng, faction, ring, tech))
            .collect()
    }

    fn planet_count(&mut self) -> usize {
        let (min, max) = (self.config.min_planets, self.config.max_planets);
        if max > min {
            self.rng.gen_range(min..=max)
        } else {
            min
        }
    }

    fn population(&mut self, tech_level: u8) -> u64 {
        let tech = tech_level as f64;
        let base = 1_000.0 * tech * tech * (1.0 + tech).ln();
        let variance = self.rng.gen_range(0.5..1.5);
        (base * variance * 100.0).round() as u64
    }

    fn generate_planets(
        &mut self,
        system_ids: &[SystemId],
        names: &[String],
        factions: &[Faction],
        tech_levels: &[u8],
    ) -> Vec<Vec<Planet>> {
        let mut out = Vec::with_capacity(system_ids.len());
        for (idx, &system_id) in system_ids.iter().enumerate() {
            let count = self.planet_count();
            let tech_level = tech_levels[idx];
            let mut planets = Vec::with_capacity(count);
            for p in 0..count {
                let name = if idx == 0 && p == 0 {
                    HOME_PLANET_NAME.to_string()
                } else {
                    planet_name(&mut self.rng, &names[idx], p)
                };
                let services = Service::available_at(tech_level);
                let population = self.population(tech_level);
                let description =
                    describe_planet(&mut self.rng, factions[idx], &services, population);
                planets.push(Planet {
                    id: PlanetId(self.alloc_id()),
                    system_id,
                    name,
                    description,
                    services,
                    population,
                    tech_level,
                });
            }
            out.push(planets);
        }
        out
    }
}

const CORE_FACTIONS: &[(Faction, u32)] = &[
    (Faction::UnitedEarth, 70),
    (Faction::MarsRepublic, 20),
    (Faction::TradersGuild, 10),
];
const MID_FACTIONS: &[(Faction, u32)] = &[
    (Faction::MarsRepublic, 40),
    (Faction::TradersGuild, 35),
    (Faction::UnitedEarth, 25),
];
const OUTER_FACTIONS: &[(Faction, u32)] = &[
    (Faction::FrontierAlliance, 50),
    (Faction::TradersGuild, 30),
    (Faction::Independent, 20),
];
const EDGE_FACTIONS: &[(Faction, u32)] = &[
    (Faction::Independent, 50),
    (Faction::PirateClans, 50),
];

fn faction_weights(ring: Ring) -> &'static [(Faction, u32)] {
    match ring {
        Ring::Core => CORE_FACTIONS,
        Ring::Mid => MID_FACTIONS,
        Ring::Outer => OUTER_FACTIONS,
        Ring::Edge => EDGE_FACTIONS,
    }
}

fn base_tech(ring: Ring) -> u8 {
    match ring {
        Ring::Core => 8,
        Ring::Mid => 6,
        Ring::Outer => 4,
        Ring::Edge => 9,
    }
}

fn weighted_pick<T: Copy>(rng: &mut ChaCha8Rng, options: &[(T, u32)]) -> T {
    let total: u32 = options.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0..total);
    for &(value, weight) in options {
        if roll < weight {
            return value;
        }
        roll -= weight;
    }
    options[options.len() - 1].0
}

struct Arena<'a> {
    ids: &'a [SystemId],
    names: Vec<String>,
    positions: &'a [Position],
    rings: &'a [Ring],
    factions: &'a [Faction],
    tech_levels: &'a [u8],
    descriptions: Vec<String>,
    links: &'a [Vec<usize>],
    planets: Vec<Vec<Planet>>,
}

fn assemble(arena: Arena<'_>) -> Universe {
    let Arena {
        ids,
        names,
        positions,
        rings,
        factions,
        tech_levels,
        descriptions,
        links,
        planets,
    } = arena;

    let mut systems = BTreeMap::new();
    let mut planet_map = BTreeMap::new();
    let parts = names.into_iter().zip(descriptions).zip(planets);
    for (idx, ((name, description), system_planets)) in parts.enumerate() {
        let planet_ids: Vec<PlanetId> = system_planets.iter().map(|p| p.id).collect();
        for planet in system_planets {
            planet_map.insert(planet.id, planet);
        }
        systems.insert(
            ids[idx],
            StarSystem {
                id: ids[idx],
                name,
                position: positions[idx],
                ring: rings[idx],
                faction: factions[idx],
                tech_level: tech_levels[idx],
                description,
                planets: planet_ids,
                connected_systems: links[idx].iter().map(|&j| ids[j]).collect(),
            },
        );
    }

    Universe {
        home: ids[0],
        systems,
        planets: planet_map,
    }
}
