//! Player state management.

use manor_core::{ItemId, LocationId};

/// The two phases of a game. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Accepting commands.
    Active,
    /// Ended by quitting or by solving the mystery.
    Over,
}

/// The player's mutable state. This is the root of everything that gets
/// saved; the world graph's locks and item placements are not part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Where the player stands. Not guaranteed to exist in the world graph
    /// after loading a save file.
    pub current_location: LocationId,
    /// Held items in pickup order.
    pub inventory: Vec<ItemId>,
    /// Locations described to the player, in order of first visit.
    pub visited_locations: Vec<LocationId>,
    /// Set by quitting or winning.
    pub is_over: bool,
}

impl PlayerState {
    /// A fresh player at `start` with nothing in hand.
    pub fn new(start: impl Into<LocationId>) -> Self {
        Self {
            current_location: start.into(),
            inventory: Vec::new(),
            visited_locations: Vec::new(),
            is_over: false,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        if self.is_over {
            Phase::Over
        } else {
            Phase::Active
        }
    }

    /// Check if the player holds an item.
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Add an item to the inventory. Returns false if it was already held.
    pub fn add_item(&mut self, item: ItemId) -> bool {
        if self.has_item(item.as_str()) {
            return false;
        }
        self.inventory.push(item);
        true
    }

    /// Whether the location has been visited.
    pub fn has_visited(&self, location: &str) -> bool {
        self.visited_locations.iter().any(|l| l == location)
    }

    /// Record a visit. Returns true on the first visit.
    pub fn mark_visited(&mut self, location: &LocationId) -> bool {
        if self.has_visited(location.as_str()) {
            return false;
        }
        self.visited_locations.push(location.clone());
        true
    }

    /// Enter the terminal phase.
    pub fn finish(&mut self) {
        self.is_over = true;
    }
}
