use crate::universe::config::GeneratorConfig;
use crate::universe::error::GeneratorError;
use crate::universe::generator::Generator;
use crate::universe::model::{Planet, StarSystem};
use crate::universe::{Universe, UniverseStats};
use serde::Serialize;
use std::fmt::Write;

#[derive(Serialize)]
struct PlanetView {
    id: u32,
    name: String,
    description: String,
    services: Vec<&'static str>,
    population: u64,
    tech_level: u8,
}

#[derive(Serialize)]
struct SystemView {
    id: u32,
    name: String,
    x: i32,
    y: i32,
    ring: &'static str,
    faction: &'static str,
    tech_level: u8,
    description: String,
    planets: Vec<PlanetView>,
    links: Vec<u32>,
}

#[derive(Serialize)]
struct StatsView {
    systems: usize,
    planets: usize,
    connections: usize,
    min_degree: usize,
    max_degree: usize,
    mean_degree: f64,
    mean_tech: f64,
}

#[derive(Serialize)]
pub struct UniverseView {
    seed: u64,
    home: u32,
    stats: StatsView,
    systems: Vec<SystemView>,
    connections: Vec<(u32, u32)>,
}

impl From<&Planet> for PlanetView {
    fn from(planet: &Planet) -> Self {
        Self {
            id: planet.id.0,
            name: planet.name.clone(),
            description: planet.description.clone(),
            services: planet.services.iter().map(|s| s.label()).collect(),
            population: planet.population,
            tech_level: planet.tech_level,
        }
    }
}

impl From<&UniverseStats> for StatsView {
    fn from(stats: &UniverseStats) -> Self {
        Self {
            systems: stats.systems,
            planets: stats.planets,
            connections: stats.connections,
            min_degree: stats.min_degree,
            max_degree: stats.max_degree,
            mean_degree: stats.mean_degree,
            mean_tech: stats.mean_tech,
        }
    }
}

impl UniverseView {
    pub fn new(universe: &Universe, seed: u64) -> Self {
        let systems = universe
            .systems
            .values()
            .map(|system| system_view(universe, system))
            .collect();
        Self {
            seed,
            home: universe.home.0,
            stats: StatsView::from(&universe.stats()),
            systems,
            connections: universe
                .connections()
                .into_iter()
                .map(|(a, b)| (a.0, b.0))
                .collect(),
        }
    }
}

fn system_view(universe: &Universe, system: &StarSystem) -> SystemView {
    SystemView {
        id: system.id.0,
        name: system.name.clone(),
        x: system.position.x,
        y: system.position.y,
        ring: system.ring.label(),
        faction: system.faction.label(),
        tech_level: system.tech_level,
        description: system.description.clone(),
        planets: universe
            .planets_of(system.id)
            .into_iter()
            .map(PlanetView::from)
            .collect(),
        links: system.connected_systems.iter().map(|id| id.0).collect(),
    }
}

pub fn universe_json(config: GeneratorConfig) -> Result<String, GeneratorError> {
    let mut gen = Generator::new(config);
    let universe = gen.generate()?;
    let view = UniverseView::new(&universe, gen.seed());
    Ok(serde_json::to_string(&view)?)
}

pub fn universe_report(universe: &Universe, seed: u64) -> String {
    let stats = universe.stats();
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Universe with {} systems, {} planets, {} routes (seed {})",
        stats.systems, stats.planets, stats.connections, seed
    );
    let _ = writeln!(
        output,
        "Routes per system: min {} / max {} / mean {:.2}; mean tech {:.2}",
        stats.min_degree, stats.max_degree, stats.mean_degree, stats.mean_tech
    );
    for (faction, count) in &stats.by_faction {
        let _ = writeln!(output, "  {}: {}", faction.label(), count);
    }

    let hops = universe.hops_from(universe.home);
    for system in universe.systems.values() {
        let links = if system.connected_systems.is_empty() {
            "none".to_string()
        } else {
            system
                .connected_systems
                .iter()
                .map(|id| universe.system(*id).map_or("?", |s| s.name.as_str()))
                .collect::<Vec<_>>()
                .join(", ")
        };
        let _ = writeln!(
            output,
            "{} [{}] ({}, {}) {} tech {} hops {} -> {}",
            system.name,
            system.ring.label(),
            system.position.x,
            system.position.y,
            system.faction.label(),
            system.tech_level,
            hops.get(&system.id).copied().unwrap_or_default(),
            links
        );
        for planet in universe.planets_of(system.id) {
            let services = planet
                .services
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join(", ");
            let _ = writeln!(
                output,
                "  - {} pop={} services={}",
                planet.name, planet.population, services
            );
        }
    }

    output
}
