use crate::universe::model::{PlanetId, SystemId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("jump network is disconnected: reached {reached} of {total} systems")]
    Disconnected { reached: usize, total: usize },
    #[error("route {from} -> {to} has no return route")]
    AsymmetricRoute { from: SystemId, to: SystemId },
    #[error("system {0} is connected to itself")]
    SelfLoop(SystemId),
    #[error("system {from} lists route to {to} more than once")]
    DuplicateRoute { from: SystemId, to: SystemId },
    #[error("route {from} -> {to} points at an unknown system")]
    UnknownSystem { from: SystemId, to: SystemId },
    #[error("planet {0} is not referenced consistently by its system")]
    OrphanPlanet(PlanetId),
    #[error("system name {0:?} is used more than once")]
    DuplicateName(String),
    #[error("planet {0} does not offer trading")]
    MissingTrading(PlanetId),
}
