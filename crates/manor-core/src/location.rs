use std::collections::BTreeMap;

use crate::direction::Direction;
use crate::id::{ItemId, LocationId};

/// A room or outdoor area the player can stand in.
///
/// Identity, description and exits never change after construction. The item
/// list and the lock flag are mutated by the state engine through
/// [`WorldGraph`](crate::WorldGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    id: LocationId,
    description: String,
    exits: BTreeMap<Direction, LocationId>,
    items: Vec<ItemId>,
    locked: bool,
    required_item: Option<ItemId>,
}

impl Location {
    /// Create an unlocked, empty location with no exits.
    pub fn new(id: impl Into<LocationId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            items: Vec::new(),
            locked: false,
            required_item: None,
        }
    }

    /// Add a directed exit.
    pub fn with_exit(mut self, direction: Direction, to: impl Into<LocationId>) -> Self {
        self.exits.insert(direction, to.into());
        self
    }

    /// Place an item here.
    pub fn with_item(mut self, item: impl Into<ItemId>) -> Self {
        self.items.push(item.into());
        self
    }

    /// Lock this location; holding `item` while walking in opens it.
    pub fn locked_by(mut self, item: impl Into<ItemId>) -> Self {
        self.locked = true;
        self.required_item = Some(item.into());
        self
    }

    /// Lock this location without naming an item that opens it.
    pub fn sealed(mut self) -> Self {
        self.locked = true;
        self.required_item = None;
        self
    }

    /// The location's id.
    pub fn id(&self) -> &LocationId {
        &self.id
    }

    /// Display name, e.g. `Guest Bedroom`.
    pub fn name(&self) -> String {
        self.id.title()
    }

    /// Narrative text shown on arrival.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// All exits keyed by direction.
    pub fn exits(&self) -> &BTreeMap<Direction, LocationId> {
        &self.exits
    }

    /// The destination in `direction`, if there is an exit that way.
    pub fn exit(&self, direction: Direction) -> Option<&LocationId> {
        self.exits.get(&direction)
    }

    /// Items currently lying here, in placement order.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    /// Whether `item` is lying here.
    pub fn has_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Whether entering is currently blocked.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The item that opens the lock, if any.
    pub fn required_item(&self) -> Option<&ItemId> {
        self.required_item.as_ref()
    }

    pub(crate) fn unlock(&mut self) -> bool {
        std::mem::replace(&mut self.locked, false)
    }

    pub(crate) fn take_item(&mut self, item: &str) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn put_item(&mut self, item: ItemId) {
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cellar() -> Location {
        Location::new("cellar", "A dank cellar.")
            .with_exit(Direction::North, "kitchen")
            .with_item("lantern")
            .locked_by("carving_knife")
    }

    #[test]
    fn builder_sets_fields() {
        let loc = cellar();
        assert_eq!(loc.id(), &LocationId::new("cellar"));
        assert_eq!(loc.name(), "Cellar");
        assert_eq!(loc.description(), "A dank cellar.");
        assert_eq!(loc.exit(Direction::North), Some(&LocationId::new("kitchen")));
        assert_eq!(loc.exit(Direction::South), None);
        assert!(loc.has_item("lantern"));
        assert!(loc.is_locked());
        assert_eq!(loc.required_item(), Some(&ItemId::new("carving_knife")));
    }

    #[test]
    fn sealed_has_no_key() {
        let loc = Location::new("vault", "").sealed();
        assert!(loc.is_locked());
        assert!(loc.required_item().is_none());
    }

    #[test]
    fn unlock_reports_previous_state() {
        let mut loc = cellar();
        assert!(loc.unlock());
        assert!(!loc.is_locked());
        assert!(!loc.unlock());
    }

    #[test]
    fn take_and_put_items() {
        let mut loc = cellar();
        assert!(loc.take_item("lantern"));
        assert!(!loc.take_item("lantern"));
        assert!(loc.items().is_empty());

        loc.put_item(ItemId::new("rope"));
        loc.put_item(ItemId::new("rope"));
        assert_eq!(loc.items().len(), 2);
    }
}
