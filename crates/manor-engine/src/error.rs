//! Error types for the engine.
//!
//! The `Display` text of every variant is what the player reads, so front
//! ends print errors verbatim.

use std::io;
use std::path::PathBuf;

use manor_core::{ItemId, LocationId, WorldError};
use thiserror::Error;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Everything a command can fail with. None of these end the session.
#[derive(Debug, Error)]
pub enum GameError {
    /// No exit in the requested direction, or the direction is not one.
    #[error("You can't go that way.")]
    NoSuchExit {
        /// The direction as typed.
        direction: String,
    },

    /// The destination is locked and the player lacks what opens it.
    #[error("{}", locked_message(.destination, .required.as_ref()))]
    Locked {
        /// The locked location.
        destination: LocationId,
        /// The item that would open it, if the lock names one.
        required: Option<ItemId>,
    },

    /// The item is not lying at the player's location.
    #[error("There is no {0} here.")]
    ItemNotHere(ItemId),

    /// The item is not in the player's inventory.
    #[error("You don't have a {0}.")]
    ItemNotOwned(ItemId),

    /// Using the item does nothing here.
    #[error("{0}")]
    NoEffect(String),

    /// The player stands at, or an operation named, a location missing from
    /// the world graph. Only reachable through ids read from a save file.
    #[error("You are somewhere the map does not know: {0}.")]
    UnknownLocation(LocationId),

    /// Any other world graph inconsistency.
    #[error(transparent)]
    World(WorldError),

    /// `load` found no save file.
    #[error("No save game file found.")]
    SaveFileMissing {
        /// The path that was tried.
        path: PathBuf,
    },

    /// `load` found a save file that is not a valid save game.
    #[error("File is corrupted.")]
    SaveFileCorrupted {
        /// The path that was read.
        path: PathBuf,
        /// The decoding failure.
        #[source]
        source: serde_json::Error,
    },

    /// Reading or writing the save file failed for another reason.
    #[error("Could not access save file {}: {source}", .path.display())]
    SaveIo {
        /// The path involved.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The input matched no command.
    #[error("You mutter something unintelligible. Try typing 'help' for a list of commands.")]
    UnknownCommand(String),

    /// A verb was given without the argument it needs.
    #[error("{0}")]
    Usage(&'static str),

    /// A command arrived after the story ended.
    #[error("The story is over. Start a new game to play again.")]
    GameOver,

    /// An item error with a close match the player may have meant.
    #[error("{inner} Did you mean '{suggestion}'?")]
    WithSuggestion {
        /// The original failure.
        inner: Box<GameError>,
        /// The closest known item id.
        suggestion: ItemId,
    },
}

impl From<WorldError> for GameError {
    fn from(err: WorldError) -> Self {
        match err {
            WorldError::UnknownLocation(id) => Self::UnknownLocation(id),
            other => Self::World(other),
        }
    }
}

fn locked_message(destination: &LocationId, required: Option<&ItemId>) -> String {
    match required {
        Some(item) => format!(
            "The path to the {} is locked. You need {item} to proceed.",
            destination.title()
        ),
        None => format!("The path to the {} is locked.", destination.title()),
    }
}
