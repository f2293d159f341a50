use crate::universe::config::NamingConfig;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

const GREEK_LETTERS: &[&str] = &[
    "Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta", "Eta", "Theta", "Iota", "Kappa",
    "Lambda", "Mu", "Nu", "Xi", "Omicron", "Pi", "Rho", "Sigma", "Tau", "Upsilon", "Phi", "Chi",
    "Psi", "Omega",
];
const CONSTELLATIONS: &[&str] = &[
    "Andromedae",
    "Aquilae",
    "Arietis",
    "Aurigae",
    "Bootis",
    "Cancri",
    "Canis Majoris",
    "Capricorni",
    "Carinae",
    "Cassiopeiae",
    "Centauri",
    "Cephei",
    "Ceti",
    "Cygni",
    "Draconis",
    "Eridani",
    "Geminorum",
    "Herculis",
    "Hydrae",
    "Leonis",
    "Librae",
    "Lyrae",
    "Orionis",
    "Pavonis",
    "Pegasi",
    "Persei",
    "Piscium",
    "Sagittarii",
    "Scorpii",
    "Tauri",
    "Ursae Majoris",
    "Virginis",
];
const STAR_NAMES: &[&str] = &[
    "Achernar", "Aldebaran", "Algol", "Alnitak", "Altair", "Antares", "Arcturus", "Bellatrix",
    "Betelgeuse", "Canopus", "Capella", "Castor", "Deneb", "Denebola", "Fomalhaut", "Hadar",
    "Kochab", "Mira", "Mizar", "Polaris", "Pollux", "Procyon", "Regulus", "Rigel", "Sirius",
    "Spica", "Thuban", "Vega", "Wezen", "Zubenelgenubi",
];
const CATALOGS: &[&str] = &["HD", "HIP", "Gliese", "Kepler", "Wolf", "Ross", "LHS", "Luyten"];
const PREFIXES: &[&str] = &[
    "Nova", "Terra", "Astra", "Helio", "Cryo", "Luma", "Vala", "Kora", "Sera", "Ossa",
    "Pyra", "Thal", "Xeno", "Zephy", "Ithra", "Mora",
];
const SUFFIXES: &[&str] = &[
    "prime", "nis", "thar", "dor", "lia", "vex", "mos", "ria", "don", "phos", "tera", "quen",
];
const STATION_KINDS: &[&str] = &[
    "Station", "Outpost", "Orbital", "Habitat", "Platform", "Citadel", "Depot", "Haven",
];
const ROMAN: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII",
];

fn pick<'a>(rng: &mut ChaCha8Rng, options: &'a [&str]) -> &'a str {
    let idx = rng.gen_range(0..options.len());
    options[idx]
}

fn build_system_name_candidate(rng: &mut ChaCha8Rng) -> String {
    match rng.gen_range(0..4) {
        0 => format!("{} {}", pick(rng, GREEK_LETTERS), pick(rng, CONSTELLATIONS)),
        1 => pick(rng, STAR_NAMES).to_string(),
        2 => {
            let catalog = pick(rng, CATALOGS);
            match catalog {
                "Kepler" => format!("{}-{}", catalog, rng.gen_range(10..2000)),
                "HD" | "HIP" => format!("{} {}", catalog, rng.gen_range(1000..99999)),
                _ => format!("{} {}", catalog, rng.gen_range(1..999)),
            }
        }
        _ => format!("{}{}", pick(rng, PREFIXES), pick(rng, SUFFIXES)),
    }
}

/// Issues system names that are unique for the lifetime of one generation run.
#[derive(Clone, Debug)]
pub struct NameRegistry {
    used: HashSet<String>,
    config: NamingConfig,
    next_fallback: u32,
}

impl NameRegistry {
    pub fn new(config: NamingConfig) -> Self {
        Self {
            used: HashSet::new(),
            config,
            next_fallback: 1,
        }
    }

    /// Claims a fixed name (e.g. the home system). False if it was taken.
    pub fn reserve(&mut self, name: &str) -> bool {
        self.used.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    pub fn system_name(&mut self, rng: &mut ChaCha8Rng) -> String {
        for _ in 0..self.config.max_attempts {
            let candidate = build_system_name_candidate(rng);
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }

        log::warn!(
            "no unique system name after {} attempts, using fallback",
            self.config.max_attempts
        );
        self.fallback_name()
    }

    fn fallback_name(&mut self) -> String {
        loop {
            let candidate = format!("{}-{:04}", self.config.fallback_prefix, self.next_fallback);
            self.next_fallback += 1;
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

fn roman_numeral(idx: usize) -> String {
    ROMAN
        .get(idx)
        .map(|s| s.to_string())
        .unwrap_or_else(|| (idx + 1).to_string())
}

/// Planet name from its system name and index; unique per (system, index).
pub fn planet_name(rng: &mut ChaCha8Rng, system_name: &str, idx: usize) -> String {
    if rng.gen::<f64>() < 0.3 {
        return format!("{} {} {}", system_name, pick(rng, STATION_KINDS), idx + 1);
    }
    if rng.gen_bool(0.5) {
        format!("{} {}", system_name, roman_numeral(idx))
    } else {
        // Letters start at 'b'; 'a' is the star.
        let suffix = match u8::try_from(idx) {
            Ok(i) if i < 25 => ((b'b' + i) as char).to_string(),
            _ => format!("b{}", idx),
        };
        format!("{} {}", system_name, suffix)
    }
}
