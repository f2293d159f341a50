use crate::universe::error::GeneratorError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Candidate names tried before falling back to a numbered name.
    pub max_attempts: u32,
    pub fallback_prefix: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            fallback_prefix: "Uncharted".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub system_count: usize,
    pub core_radius: f64,
    pub mid_radius: f64,
    pub outer_radius: f64,
    pub edge_radius: f64,
    pub min_connections: usize,
    pub max_connections: usize,
    /// Zero picks a random seed when the generator is built.
    pub seed: u64,
    pub shortcut_chance: f64,
    pub min_planets: usize,
    pub max_planets: usize,
    pub naming: NamingConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            system_count: 50,
            core_radius: 100.0,
            mid_radius: 250.0,
            outer_radius: 450.0,
            edge_radius: 600.0,
            min_connections: 2,
            max_connections: 6,
            seed: 0,
            shortcut_chance: 0.3,
            min_planets: 1,
            max_planets: 4,
            naming: NamingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(seed: u64, system_count: usize) -> Self {
        Self {
            seed,
            system_count,
            ..Self::default()
        }
    }

    /// Parses a (possibly partial) JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        Ok(serde_json::from_str(json)?)
    }
}
