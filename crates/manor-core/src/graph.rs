use std::collections::{BTreeMap, HashMap};

use crate::direction::Direction;
use crate::error::{WorldError, WorldResult};
use crate::id::{ItemId, LocationId};
use crate::location::Location;

/// The world graph. Owns every [`Location`]; callers refer to locations by id
/// and never hold on to a location's mutable collections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldGraph {
    locations: HashMap<LocationId, Location>,
    // Insertion order, for stable iteration.
    order: Vec<LocationId>,
}

impl WorldGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    /// Add a location. Fails if the id is already taken.
    pub fn add_location(&mut self, location: Location) -> WorldResult<()> {
        if self.locations.contains_key(location.id()) {
            return Err(WorldError::DuplicateLocation(location.id().clone()));
        }
        self.order.push(location.id().clone());
        self.locations.insert(location.id().clone(), location);
        Ok(())
    }

    /// Check that every exit leads to a location in this graph.
    pub fn validate(&self) -> WorldResult<()> {
        for location in self.locations() {
            for (direction, to) in location.exits() {
                if !self.contains(to) {
                    return Err(WorldError::DanglingExit {
                        from: location.id().clone(),
                        direction: *direction,
                        to: to.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Whether a location with this id exists.
    pub fn contains(&self, id: impl AsRef<str>) -> bool {
        self.locations.contains_key(id.as_ref())
    }

    /// Look up a location.
    pub fn location(&self, id: impl AsRef<str>) -> WorldResult<&Location> {
        let id = id.as_ref();
        self.locations
            .get(id)
            .ok_or_else(|| WorldError::UnknownLocation(LocationId::new(id)))
    }

    fn location_mut(&mut self, id: &str) -> WorldResult<&mut Location> {
        self.locations
            .get_mut(id)
            .ok_or_else(|| WorldError::UnknownLocation(LocationId::new(id)))
    }

    /// All locations in the order they were added.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.order.iter().filter_map(|id| self.locations.get(id))
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Exits out of a location.
    pub fn exits_of(&self, id: impl AsRef<str>) -> WorldResult<&BTreeMap<Direction, LocationId>> {
        Ok(self.location(id)?.exits())
    }

    /// Whether a location is locked.
    pub fn is_locked(&self, id: impl AsRef<str>) -> WorldResult<bool> {
        Ok(self.location(id)?.is_locked())
    }

    /// The item that opens a location's lock, if any.
    pub fn required_item(&self, id: impl AsRef<str>) -> WorldResult<Option<&ItemId>> {
        Ok(self.location(id)?.required_item())
    }

    /// Items lying at a location.
    pub fn items_at(&self, id: impl AsRef<str>) -> WorldResult<&[ItemId]> {
        Ok(self.location(id)?.items())
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Open a location's lock. Idempotent; there is no way to lock it again.
    /// Returns whether the location was locked before the call.
    pub fn unlock(&mut self, id: impl AsRef<str>) -> WorldResult<bool> {
        Ok(self.location_mut(id.as_ref())?.unlock())
    }

    /// Remove one occurrence of `item` from a location. Returns whether it was
    /// there.
    pub fn remove_item(&mut self, id: impl AsRef<str>, item: impl AsRef<str>) -> WorldResult<bool> {
        Ok(self.location_mut(id.as_ref())?.take_item(item.as_ref()))
    }

    /// Append `item` to a location's items.
    pub fn add_item(&mut self, id: impl AsRef<str>, item: impl Into<ItemId>) -> WorldResult<()> {
        self.location_mut(id.as_ref())?.put_item(item.into());
        Ok(())
    }
}

impl FromIterator<Location> for WorldGraph {
    /// Build a graph from locations. A later location replaces an earlier one
    /// with the same id.
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut graph = Self::new();
        for location in iter {
            let id = location.id().clone();
            if graph.locations.insert(id.clone(), location).is_none() {
                graph.order.push(id);
            }
        }
        graph
    }
}
