use bevy_ecs::event::Event;
use thiserror::Error;

/// Top-level error for the whole crate.
///
/// Also registered as an ECS event: systems report recoverable faults
/// through `EventWriter<GameError>` and the tick loop drains them to the
/// log instead of panicking mid-frame.
#[derive(Error, Debug, Event)]
pub enum GameError {
    #[error("Level error: {0}")]
    Level(#[from] LevelError),

    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors raised while validating or instantiating level data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("level grid is empty")]
    EmptyGrid,

    #[error("row {row} has {found} columns, expected {expected}")]
    NotRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile code {0}")]
    UnknownTileCode(u8),

    #[error("spawn point ({row}, {col}) is outside the grid")]
    SpawnOutOfBounds { row: usize, col: usize },

    #[error("level has no goal tile")]
    MissingGoal,
}

/// Errors surfaced by the asset readiness tracker.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("asset '{name}' failed to load: {reason}")]
    LoadFailed { name: String, reason: String },

    #[error("{pending} asset(s) still pending")]
    NotReady { pending: usize },
}

pub type GameResult<T> = Result<T, GameError>;
