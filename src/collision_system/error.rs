use super::world::ShapeId;
use thiserror::Error;

/// Misuse of a [`super::world::World`] or its configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpaceError {
    /// adding `space` would make it contain itself, directly or through a nested space
    #[error("space {space:?} can not contain itself")]
    SelfContainment { space: ShapeId },
    #[error("shape {id:?} is not a space")]
    NotASpace { id: ShapeId },
    #[error("unknown shape {id:?}")]
    UnknownShape { id: ShapeId },
    #[error("invalid resolve configuration: {reason}")]
    InvalidConfig { reason: String },
}
