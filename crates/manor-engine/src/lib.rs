//! State engine for the Manor mystery.
//!
//! Holds the player's mutable state, resolves commands against the world
//! graph from `manor-core`, applies the per-item use rules and persists the
//! player's progress to a JSON save file. A [`Session`] wraps an [`Engine`]
//! with command parsing, response formatting and the autosave policy; the
//! terminal front end only feeds it raw input lines and prints what comes
//! back.

/// Session configuration.
pub mod config;
/// The command-resolution engine.
pub mod engine;
/// Error types for the engine.
pub mod error;
/// Command parsing and item name suggestions.
pub mod parser;
/// Player state.
pub mod player;
/// Declarative per-item use rules.
pub mod rules;
/// Save game format and file persistence.
pub mod save;
/// The command loop glue: parse, execute, format, autosave.
pub mod session;

pub use config::SessionConfig;
pub use engine::Engine;
pub use error::{GameError, GameResult};
pub use parser::{Command, parse_command};
pub use player::{Phase, PlayerState};
pub use save::SaveGame;
pub use session::Session;
