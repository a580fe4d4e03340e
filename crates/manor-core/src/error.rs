use crate::direction::Direction;
use crate::id::LocationId;

/// Alias for `Result<T, WorldError>`.
pub type WorldResult<T> = Result<T, WorldError>;

/// Errors raised by world graph lookups and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    /// No location with this id exists in the graph.
    #[error("unknown location: {0}")]
    UnknownLocation(LocationId),

    /// A location with this id was already added.
    #[error("location already exists: {0}")]
    DuplicateLocation(LocationId),

    /// An exit points at a location that is not part of the graph.
    #[error("exit {direction} from {from} leads to unknown location {to}")]
    DanglingExit {
        /// The location owning the exit.
        from: LocationId,
        /// The exit's direction label.
        direction: Direction,
        /// The missing destination.
        to: LocationId,
    },
}
