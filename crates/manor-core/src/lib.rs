//! World graph for the Manor mystery.
//!
//! This crate owns the static topology of the game: locations, the directed
//! exits between them, the items lying in each room and the locks guarding
//! some of them. It has no rules of its own. The state engine in
//! `manor-engine` reads and mutates the graph through the primitives exposed
//! by [`WorldGraph`].

/// Examine text for every item in the manor.
pub mod catalogue;
/// Compass and vertical directions used to label exits.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// The owned, indexed collection of locations.
pub mod graph;
/// String identifiers for locations and items.
pub mod id;
/// A single node of the world graph.
pub mod location;
/// The hand-authored manor and its grounds.
pub mod manor;

pub use direction::Direction;
pub use error::{WorldError, WorldResult};
pub use graph::WorldGraph;
pub use id::{ItemId, LocationId};
pub use location::Location;
pub use manor::{START_LOCATION, manor};
