//! Configuration for a play session.

use std::path::PathBuf;

use crate::save::DEFAULT_SAVE_PATH;

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// File used by `load` and by the autosave.
    pub save_path: PathBuf,
    /// Save after every processed command, failed ones included.
    pub autosave: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            autosave: true,
        }
    }
}

impl SessionConfig {
    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Turn the autosave on or off.
    pub fn with_autosave(mut self, autosave: bool) -> Self {
        self.autosave = autosave;
        self
    }
}
