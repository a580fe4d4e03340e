//! Save game format and file persistence.
//!
//! Only the player's progress is persisted. Lock states and item placements
//! in the world graph are rebuilt from the static table on load.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use manor_core::{ItemId, LocationId};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::player::PlayerState;

/// Where the game saves when nothing else is configured.
pub const DEFAULT_SAVE_PATH: &str = "savegame.json";

/// The location recorded for a save file that names none. It is deliberately
/// not part of the manor.
pub const MISSING_LOCATION: &str = "starting_room";

fn missing_location() -> LocationId {
    LocationId::new(MISSING_LOCATION)
}

/// The persisted part of [`PlayerState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    /// Where the player stood.
    #[serde(default = "missing_location")]
    pub current_location: LocationId,
    /// Held items in pickup order.
    #[serde(default)]
    pub inventory: Vec<ItemId>,
    /// Locations described so far.
    #[serde(default)]
    pub visited_locations: Vec<LocationId>,
}

impl SaveGame {
    /// Snapshot the player.
    pub fn capture(player: &PlayerState) -> Self {
        Self {
            current_location: player.current_location.clone(),
            inventory: player.inventory.clone(),
            visited_locations: player.visited_locations.clone(),
        }
    }

    /// Overwrite the player's progress. The phase is left alone.
    pub fn apply(self, player: &mut PlayerState) {
        player.current_location = self.current_location;
        player.inventory = self.inventory;
        player.visited_locations = self.visited_locations;
    }

    /// Serialize to the on-disk JSON text.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Write to `path`, replacing any previous file. The text goes to a
    /// sibling `.tmp` file first and is renamed into place.
    pub fn write(&self, path: &Path) -> GameResult<()> {
        let io_err = |source: io::Error| GameError::SaveIo {
            path: path.to_path_buf(),
            source,
        };

        let json = self.to_json().map_err(|e| io_err(io::Error::from(e)))?;
        let tmp = temp_path(path);
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, path).map_err(io_err)
    }

    /// Read from `path`. Missing keys take their defaults.
    pub fn read(path: &Path) -> GameResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => GameError::SaveFileMissing {
                path: path.to_path_buf(),
            },
            _ => GameError::SaveIo {
                path: path.to_path_buf(),
                source,
            },
        })?;

        serde_json::from_str(&text).map_err(|source| GameError::SaveFileCorrupted {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample() -> SaveGame {
        SaveGame {
            current_location: LocationId::new("foyer"),
            inventory: vec![ItemId::new("cigarette_case"), ItemId::new("matches")],
            visited_locations: vec![LocationId::new("garden"), LocationId::new("foyer")],
        }
    }

    #[test]
    fn json_shape() {
        let json = sample().to_json().unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "current_location": "foyer",
          "inventory": [
            "cigarette_case",
            "matches"
          ],
          "visited_locations": [
            "garden",
            "foyer"
          ]
        }
        "#);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.json");
        sample().write(&path).unwrap();

        assert_eq!(SaveGame::read(&path).unwrap(), sample());
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn write_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.json");
        sample().write(&path).unwrap();

        let fresh = SaveGame::capture(&PlayerState::new("garden"));
        fresh.write(&path).unwrap();
        assert_eq!(SaveGame::read(&path).unwrap(), fresh);
    }

    #[test]
    fn missing_keys_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.json");

        fs::write(&path, r#"{"inventory": ["lantern"]}"#).unwrap();
        let save = SaveGame::read(&path).unwrap();
        assert_eq!(save.current_location, MISSING_LOCATION);
        assert_eq!(save.inventory, [ItemId::new("lantern")]);
        assert!(save.visited_locations.is_empty());

        fs::write(&path, "{}").unwrap();
        let save = SaveGame::read(&path).unwrap();
        assert_eq!(save.current_location, MISSING_LOCATION);
        assert!(save.inventory.is_empty());
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SaveGame::read(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, GameError::SaveFileMissing { .. }));
        assert_eq!(err.to_string(), "No save game file found.");
    }

    #[test]
    fn corrupted_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.json");
        for garbage in ["{not json", "[1, 2, 3]", r#"{"inventory": "lantern"}"#] {
            fs::write(&path, garbage).unwrap();
            let err = SaveGame::read(&path).unwrap_err();
            assert!(matches!(err, GameError::SaveFileCorrupted { .. }), "{garbage}");
            assert_eq!(err.to_string(), "File is corrupted.");
        }
    }

    #[test]
    fn apply_keeps_phase() {
        let mut player = PlayerState::new("garden");
        player.finish();
        sample().apply(&mut player);
        assert_eq!(player.current_location, "foyer");
        assert_eq!(player.inventory.len(), 2);
        assert!(player.is_over);
    }

    #[test]
    fn write_into_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no").join("such").join("savegame.json");
        let err = sample().write(&path).unwrap_err();
        assert!(matches!(err, GameError::SaveIo { .. }));
    }

    fn id() -> impl Strategy<Value = String> {
        "[a-z][a-z_]{0,15}"
    }

    proptest! {
        #[test]
        fn round_trip_reproduces_player(
            location in id(),
            inventory in prop::collection::vec(id(), 0..8),
            visited in prop::collection::vec(id(), 0..8),
        ) {
            let mut player = PlayerState::new(location);
            for item in inventory {
                player.add_item(ItemId::new(item));
            }
            for place in visited {
                player.mark_visited(&LocationId::new(place));
            }

            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("savegame.json");
            SaveGame::capture(&player).write(&path).unwrap();

            let mut restored = PlayerState::new("garden");
            SaveGame::read(&path).unwrap().apply(&mut restored);
            prop_assert_eq!(restored, player);
        }
    }
}
