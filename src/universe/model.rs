use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SystemId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PlanetId(pub u32);

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

impl fmt::Display for PlanetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance. Only meaningful for ordering; take
    /// [`Position::distance_to`] when lengths are summed.
    pub fn distance_squared(&self, other: &Position) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dy = self.y as i64 - other.y as i64;
        dx * dx + dy * dy
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.distance_squared(other) as f64).sqrt()
    }

    pub fn is_origin(&self) -> bool {
        *self == Self::ORIGIN
    }
}

/// Concentric distance band around the home system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Ring {
    Core,
    Mid,
    Outer,
    Edge,
}

impl Ring {
    pub const ALL: [Ring; 4] = [Ring::Core, Ring::Mid, Ring::Outer, Ring::Edge];

    pub fn label(self) -> &'static str {
        match self {
            Ring::Core => "Core",
            Ring::Mid => "Mid",
            Ring::Outer => "Outer",
            Ring::Edge => "Edge",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Faction {
    UnitedEarth,
    MarsRepublic,
    TradersGuild,
    FrontierAlliance,
    Independent,
    PirateClans,
}

impl Faction {
    /// Faction that always holds the home system.
    pub const HOME: Faction = Faction::UnitedEarth;

    pub const ALL: [Faction; 6] = [
        Faction::UnitedEarth,
        Faction::MarsRepublic,
        Faction::TradersGuild,
        Faction::FrontierAlliance,
        Faction::Independent,
        Faction::PirateClans,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Faction::UnitedEarth => "United Earth",
            Faction::MarsRepublic => "Mars Republic",
            Faction::TradersGuild => "Traders Guild",
            Faction::FrontierAlliance => "Frontier Alliance",
            Faction::Independent => "Independent",
            Faction::PirateClans => "Pirate Clans",
        }
    }
}

/// Planet service, ordered by the tech level that unlocks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Service {
    Trading,
    Bar,
    Missions,
    Outfitter,
    Shipyard,
}

impl Service {
    pub const ALL: [Service; 5] = [
        Service::Trading,
        Service::Bar,
        Service::Missions,
        Service::Outfitter,
        Service::Shipyard,
    ];

    pub fn min_tech(self) -> u8 {
        match self {
            Service::Trading => 1,
            Service::Bar => 3,
            Service::Missions => 4,
            Service::Outfitter => 5,
            Service::Shipyard => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Service::Trading => "trading",
            Service::Bar => "bar",
            Service::Missions => "missions",
            Service::Outfitter => "outfitter",
            Service::Shipyard => "shipyard",
        }
    }

    pub fn available_at(tech_level: u8) -> Vec<Service> {
        Self::ALL
            .iter()
            .copied()
            .filter(|s| tech_level >= s.min_tech())
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub system_id: SystemId,
    pub name: String,
    pub description: String,
    pub services: Vec<Service>,
    pub population: u64,
    pub tech_level: u8,
}

impl Planet {
    pub fn offers(&self, service: Service) -> bool {
        self.services.contains(&service)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct StarSystem {
    pub id: SystemId,
    pub name: String,
    pub position: Position,
    pub ring: Ring,
    pub faction: Faction,
    pub tech_level: u8,
    pub description: String,
    pub planets: Vec<PlanetId>,
    pub connected_systems: Vec<SystemId>,
}

impl StarSystem {
    pub fn degree(&self) -> usize {
        self.connected_systems.len()
    }

    pub fn is_connected_to(&self, other: SystemId) -> bool {
        self.connected_systems.contains(&other)
    }
}
