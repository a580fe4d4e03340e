//! The command-resolution engine.

use std::path::Path;

use manor_core::{Direction, ItemId, LocationId, START_LOCATION, WorldGraph, catalogue, manor};
use tracing::{debug, info};

use crate::error::{GameError, GameResult};
use crate::player::PlayerState;
use crate::rules::{self, Effect, Resolution};
use crate::save::SaveGame;

/// Owns the world graph and the player state and performs every mutation the
/// player can cause.
#[derive(Debug, Clone)]
pub struct Engine {
    world: WorldGraph,
    // Loading a save restores the world from this copy.
    pristine: WorldGraph,
    player: PlayerState,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// A new game in the manor, starting in the garden.
    pub fn new() -> Self {
        Self::with_world(manor(), START_LOCATION)
    }

    /// A new game in an arbitrary world.
    pub fn with_world(world: WorldGraph, start: impl Into<LocationId>) -> Self {
        Self {
            pristine: world.clone(),
            world,
            player: PlayerState::new(start),
        }
    }

    /// The world graph in its current state.
    pub fn world(&self) -> &WorldGraph {
        &self.world
    }

    /// The player state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.player.is_over
    }

    /// Describe where the player stands, listing any items lying there, and
    /// mark the location visited.
    pub fn describe_current_location(&mut self) -> GameResult<String> {
        let location = self.world.location(&self.player.current_location)?;

        let mut output = location.description().to_string();
        if !location.items().is_empty() {
            output.push_str("\n\nYou see: ");
            output.push_str(&join_ids(location.items()));
        }

        let id = location.id().clone();
        if self.player.mark_visited(&id) {
            debug!(location = %id, "first visit");
        }
        Ok(output)
    }

    /// Walk through the exit labelled `direction`. Entering a locked location
    /// while holding its required item opens the lock for good.
    pub fn move_player(&mut self, direction: &str) -> GameResult<String> {
        let no_exit = || GameError::NoSuchExit {
            direction: direction.to_string(),
        };

        let dir = Direction::parse(direction).ok_or_else(no_exit)?;
        let destination = self
            .world
            .exits_of(&self.player.current_location)?
            .get(&dir)
            .cloned()
            .ok_or_else(no_exit)?;

        let target = self.world.location(&destination)?;
        let message = if target.is_locked() {
            match target.required_item() {
                Some(item) if self.player.has_item(item.as_str()) => {
                    info!(location = %destination, key = %item, "unlocked");
                    self.world.unlock(&destination)?;
                    format!("You unlock the path and move {dir}.")
                }
                required => {
                    return Err(GameError::Locked {
                        destination,
                        required: required.cloned(),
                    });
                }
            }
        } else {
            format!("You move {dir}.")
        };

        debug!(from = %self.player.current_location, to = %destination, "moved");
        self.player.current_location = destination;
        Ok(message)
    }

    /// Move an item from the player's location into the inventory.
    pub fn pick_up(&mut self, item: &str) -> GameResult<String> {
        if !self.world.remove_item(&self.player.current_location, item)? {
            return Err(GameError::ItemNotHere(ItemId::new(item)));
        }
        debug!(%item, location = %self.player.current_location, "picked up");
        self.player.add_item(ItemId::new(item));
        Ok(format!("You pick up the {item}."))
    }

    /// Use a held item. Items are never consumed.
    pub fn use_item(&mut self, item: &str) -> GameResult<String> {
        if !self.player.has_item(item) {
            return Err(GameError::ItemNotOwned(ItemId::new(item)));
        }

        match rules::resolve(item, &self.world, &self.player) {
            Resolution::Success { effect, message } => {
                debug!(%item, location = %self.player.current_location, "used");
                if let Some(effect) = effect {
                    self.apply(effect)?;
                }
                Ok(message.to_string())
            }
            Resolution::Failure(message) => Err(GameError::NoEffect(message)),
        }
    }

    fn apply(&mut self, effect: Effect) -> GameResult<()> {
        match effect {
            Effect::Unlock(location) => {
                self.world.unlock(location)?;
                info!(%location, "forced open");
            }
            Effect::Reveal(item) => {
                self.world.add_item(&self.player.current_location, item)?;
                info!(%item, location = %self.player.current_location, "revealed");
            }
            Effect::Win => {
                self.player.finish();
                info!("mystery solved");
            }
        }
        Ok(())
    }

    /// Whether an item is held or lying at the player's location.
    pub fn can_see(&self, item: &str) -> GameResult<bool> {
        if self.player.has_item(item) {
            return Ok(true);
        }
        let items = self.world.items_at(&self.player.current_location)?;
        Ok(items.iter().any(|i| i == item))
    }

    /// Describe a visible item.
    pub fn examine_item(&self, item: &str) -> GameResult<String> {
        if !self.can_see(item)? {
            return Ok(format!(
                "You don't see a {item} here, and you don't have it in your inventory."
            ));
        }
        Ok(catalogue::describe(item)
            .map(str::to_string)
            .unwrap_or_else(|| format!("It's a {item}. Nothing special.")))
    }

    /// End the game without solving it.
    pub fn quit(&mut self) {
        self.player.finish();
    }

    /// Capture the persisted part of the state.
    pub fn snapshot(&self) -> SaveGame {
        SaveGame::capture(&self.player)
    }

    /// Replace the player's progress with `save` and reset the world graph to
    /// its pristine state.
    pub fn restore(&mut self, save: SaveGame) {
        self.world = self.pristine.clone();
        save.apply(&mut self.player);
    }

    /// Write the save file.
    pub fn save_to_file(&self, path: &Path) -> GameResult<()> {
        self.snapshot().write(path)?;
        debug!(path = %path.display(), "saved");
        Ok(())
    }

    /// Read the save file and restore from it. On any failure the current
    /// state is left untouched.
    pub fn load_from_file(&mut self, path: &Path) -> GameResult<()> {
        let save = SaveGame::read(path)?;
        self.restore(save);
        info!(path = %path.display(), location = %self.player.current_location, "loaded");
        Ok(())
    }
}

/// Comma-separated ids, as shown in item listings.
pub(crate) fn join_ids<T: AsRef<str>>(ids: &[T]) -> String {
    ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use manor_core::Location;
    use proptest::prelude::*;

    fn engine_at(location: &str) -> Engine {
        Engine::with_world(manor(), location)
    }

    fn give(engine: &mut Engine, items: &[&str]) {
        for item in items {
            engine.player.add_item(ItemId::new(*item));
        }
    }

    #[test]
    fn fresh_game_defaults() {
        let engine = Engine::new();
        assert_eq!(engine.player().current_location, "garden");
        assert!(engine.player().inventory.is_empty());
        assert!(engine.player().visited_locations.is_empty());
        assert!(!engine.is_over());
    }

    #[test]
    fn describe_lists_items_and_marks_visited() {
        let mut engine = Engine::new();
        let text = engine.describe_current_location().unwrap();
        assert!(text.starts_with("You stand at the edge of a manicured garden."));
        assert!(text.ends_with("\n\nYou see: cigarette_case, matches"));
        assert_eq!(engine.player().visited_locations, [LocationId::new("garden")]);

        engine.describe_current_location().unwrap();
        assert_eq!(engine.player().visited_locations.len(), 1);
    }

    #[test]
    fn describe_without_items_has_no_listing() {
        let mut engine = engine_at("staircase");
        let text = engine.describe_current_location().unwrap();
        assert!(!text.contains("You see:"));
    }

    #[test]
    fn opening_scenario() {
        let mut engine = Engine::new();
        engine.pick_up("cigarette_case").unwrap();
        assert_eq!(engine.move_player("east").unwrap(), "You move east.");
        assert_eq!(engine.player().current_location, "foyer");
        assert_eq!(engine.player().inventory, [ItemId::new("cigarette_case")]);

        engine.move_player("north").unwrap();
        assert_eq!(engine.player().current_location, "staircase");

        let err = engine.move_player("west").unwrap_err();
        assert!(matches!(err, GameError::Locked { .. }));
        assert!(err.to_string().contains("old_key"));
        assert_eq!(engine.player().current_location, "staircase");
        assert!(engine.world().is_locked("master_bedroom").unwrap());
    }

    #[test]
    fn moving_does_not_mark_visited() {
        let mut engine = Engine::new();
        engine.move_player("east").unwrap();
        assert!(engine.player().visited_locations.is_empty());
    }

    #[test]
    fn no_such_exit_leaves_location() {
        let mut engine = Engine::new();
        let err = engine.move_player("north").unwrap_err();
        assert!(matches!(err, GameError::NoSuchExit { .. }));
        assert_eq!(err.to_string(), "You can't go that way.");

        let err = engine.move_player("sideways").unwrap_err();
        assert!(matches!(err, GameError::NoSuchExit { ref direction } if direction == "sideways"));
        assert_eq!(engine.player().current_location, "garden");
    }

    #[test]
    fn required_item_unlocks_permanently() {
        let mut engine = engine_at("staircase");
        give(&mut engine, &["old_key"]);

        assert_eq!(
            engine.move_player("west").unwrap(),
            "You unlock the path and move west."
        );
        assert_eq!(engine.player().current_location, "master_bedroom");
        assert!(!engine.world().is_locked("master_bedroom").unwrap());

        // Coming back in no longer needs the key flavor.
        engine.move_player("east").unwrap();
        assert_eq!(engine.move_player("west").unwrap(), "You move west.");
    }

    #[test]
    fn lock_without_required_item_fails_cleanly() {
        let world: WorldGraph = [
            Location::new("hall", "A hall.").with_exit(Direction::North, "vault"),
            Location::new("vault", "A vault.").sealed(),
        ]
        .into_iter()
        .collect();
        let mut engine = Engine::with_world(world, "hall");

        let err = engine.move_player("n").unwrap_err();
        assert!(matches!(err, GameError::Locked { required: None, .. }));
        assert_eq!(err.to_string(), "The path to the Vault is locked.");
        assert_eq!(engine.player().current_location, "hall");
    }

    #[test]
    fn pick_up_moves_item_atomically() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.pick_up("matches").unwrap(),
            "You pick up the matches."
        );
        assert_eq!(engine.player().inventory, [ItemId::new("matches")]);
        assert_eq!(
            engine.world().items_at("garden").unwrap(),
            &[ItemId::new("cigarette_case")]
        );

        let err = engine.pick_up("matches").unwrap_err();
        assert!(matches!(err, GameError::ItemNotHere(_)));
        assert_eq!(engine.player().inventory.len(), 1);
    }

    #[test]
    fn pick_up_missing_item_changes_nothing() {
        let mut engine = Engine::new();
        let before = engine.world().clone();
        let err = engine.pick_up("lantern").unwrap_err();
        assert_eq!(err.to_string(), "There is no lantern here.");
        assert_eq!(engine.world(), &before);
        assert!(engine.player().inventory.is_empty());
    }

    #[test]
    fn use_requires_ownership() {
        let mut engine = engine_at("kitchen");
        let err = engine.use_item("carving_knife").unwrap_err();
        assert!(matches!(err, GameError::ItemNotOwned(_)));
        assert_eq!(err.to_string(), "You don't have a carving_knife.");
    }

    #[test]
    fn knife_forces_the_cellar() {
        let mut engine = engine_at("kitchen");
        engine.pick_up("carving_knife").unwrap();
        engine.use_item("carving_knife").unwrap();
        assert!(!engine.world().is_locked("cellar").unwrap());

        let err = engine.use_item("carving_knife").unwrap_err();
        assert!(matches!(err, GameError::NoEffect(_)));
        assert!(engine.player().has_item("carving_knife"));
    }

    #[test]
    fn shears_reveal_seed_pouch_once() {
        let mut engine = engine_at("greenhouse");
        engine.pick_up("pruning_shears").unwrap();
        engine.use_item("pruning_shears").unwrap();
        assert_eq!(
            engine.world().items_at("greenhouse").unwrap(),
            &[ItemId::new("rare_seed_pouch")]
        );

        assert!(engine.use_item("pruning_shears").is_err());
        assert_eq!(engine.world().items_at("greenhouse").unwrap().len(), 1);

        engine.pick_up("rare_seed_pouch").unwrap();
        assert!(engine.use_item("pruning_shears").is_err());
        assert!(engine.world().items_at("greenhouse").unwrap().is_empty());
    }

    #[test]
    fn ledger_elsewhere_is_no_effect() {
        let mut engine = engine_at("foyer");
        give(&mut engine, &["incriminating_ledger", "old_key"]);
        let err = engine.use_item("incriminating_ledger").unwrap_err();
        assert!(matches!(err, GameError::NoEffect(_)));
        assert!(!engine.is_over());
    }

    #[test]
    fn full_walkthrough_wins() {
        let mut engine = Engine::new();
        let steps: &[(&str, &str)] = &[
            ("move", "east"),
            ("move", "south"),
            ("take", "carving_knife"),
            ("use", "carving_knife"),
            ("move", "south"),
            ("take", "lantern"),
            ("move", "north"),
            ("move", "north"),
            ("move", "east"),
            ("take", "old_key"),
            ("move", "north"),
            ("take", "incriminating_ledger"),
            ("move", "south"),
            ("move", "west"),
            ("move", "north"),
            ("move", "west"),
        ];
        for (verb, arg) in steps {
            let result = match *verb {
                "move" => engine.move_player(arg),
                "take" => engine.pick_up(arg),
                "use" => engine.use_item(arg),
                _ => unreachable!(),
            };
            assert!(result.is_ok(), "{verb} {arg}: {result:?}");
        }
        assert_eq!(engine.player().current_location, "master_bedroom");
        assert!(!engine.is_over());

        let message = engine.use_item("incriminating_ledger").unwrap();
        assert!(message.contains("The mystery is solved"));
        assert!(engine.is_over());
        // Items are never consumed.
        assert!(engine.player().has_item("incriminating_ledger"));
    }

    #[test]
    fn examine_visible_items_only() {
        let mut engine = Engine::new();
        let text = engine.examine_item("matches").unwrap();
        assert!(text.starts_with("A small box of matches"));
        assert!(engine.world().items_at("garden").unwrap().len() == 2);
        assert!(engine.player().inventory.is_empty());

        engine.pick_up("matches").unwrap();
        engine.move_player("east").unwrap();
        assert!(engine.examine_item("matches").unwrap().starts_with("A small box"));

        assert_eq!(
            engine.examine_item("lantern").unwrap(),
            "You don't see a lantern here, and you don't have it in your inventory."
        );
    }

    #[test]
    fn examine_uncatalogued_item_falls_back() {
        let mut engine = engine_at("greenhouse");
        engine.pick_up("pruning_shears").unwrap();
        engine.use_item("pruning_shears").unwrap();
        assert_eq!(
            engine.examine_item("rare_seed_pouch").unwrap(),
            "It's a rare_seed_pouch. Nothing special."
        );
    }

    #[test]
    fn unknown_location_surfaces_as_error() {
        let mut engine = engine_at("starting_room");
        assert!(matches!(
            engine.describe_current_location(),
            Err(GameError::UnknownLocation(_))
        ));
        assert!(matches!(
            engine.move_player("north"),
            Err(GameError::UnknownLocation(_))
        ));
        assert!(matches!(
            engine.pick_up("matches"),
            Err(GameError::UnknownLocation(_))
        ));
        assert!(engine.player().visited_locations.is_empty());
    }

    #[test]
    fn restore_resets_world_but_keeps_progress() {
        let mut engine = engine_at("kitchen");
        engine.pick_up("carving_knife").unwrap();
        engine.use_item("carving_knife").unwrap();
        let save = engine.snapshot();

        engine.move_player("south").unwrap();
        engine.restore(save);

        assert_eq!(engine.player().current_location, "kitchen");
        assert!(engine.player().has_item("carving_knife"));
        assert!(engine.world().is_locked("cellar").unwrap());
        // The knife is back on the block as well.
        assert!(engine.world().items_at("kitchen").unwrap().len() == 1);
        engine.pick_up("carving_knife").unwrap();
        assert_eq!(engine.player().inventory.len(), 1);
    }

    #[test]
    fn quit_ends_the_game() {
        let mut engine = Engine::new();
        engine.quit();
        assert!(engine.is_over());
    }

    proptest! {
        #[test]
        fn missing_exits_never_move_the_player(
            start in prop::sample::select(manor().locations().map(|l| l.id().clone()).collect::<Vec<_>>()),
            dir in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            let mut engine = Engine::with_world(manor(), start.clone());
            prop_assume!(!engine.world().exits_of(&start).unwrap().contains_key(&dir));

            let result = engine.move_player(dir.name());
            prop_assert!(
                matches!(result, Err(GameError::NoSuchExit { .. })),
                "expected NoSuchExit, got {:?}",
                result
            );
            prop_assert_eq!(&engine.player().current_location, &start);
        }
    }
}
