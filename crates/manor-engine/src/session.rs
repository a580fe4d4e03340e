//! The command loop glue: parse, execute, format, autosave.

use manor_core::ItemId;
use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::engine::{Engine, join_ids};
use crate::error::{GameError, GameResult};
use crate::parser::{Command, HELP_TEXT, parse_command, suggest};

/// Narration shown before the first prompt.
pub const INTRO: &str = "You were invited as a guest to tonight's grand soiree at the manor. You step \
into the garden, lighting a cigarette under the moonlight. The scent of roses and freshly trimmed \
hedges soothes you, when suddenly a scream echoes from the foyer. The chatter and laughter that once \
filled the air fall silent, replaced by the hushed murmurs of alarm. A body has been discovered.

As an experienced detective, you flick your cigarette aside and steel yourself. It's time to \
investigate.

Type 'help' for a list of commands, and 'look' to examine your surroundings.";

/// Shown once the story has ended.
pub const FAREWELL: &str = "Thanks for playing.";

const QUIT_MESSAGE: &str = "You choose to step away, leaving the mystery unsolved.";
const LOADED_MESSAGE: &str = "Game successfully loaded!";

/// A play session: one engine plus the save policy.
#[derive(Debug, Clone)]
pub struct Session {
    engine: Engine,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session {
    /// A new game in the manor.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_engine(Engine::new(), config)
    }

    /// A session around an existing engine.
    pub fn with_engine(engine: Engine, config: SessionConfig) -> Self {
        Self { engine, config }
    }

    /// The engine.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Whether the story has ended.
    pub fn is_over(&self) -> bool {
        self.engine.is_over()
    }

    /// Process one line of player input and return the response.
    ///
    /// With autosave on, the save file is written afterwards whether or not
    /// the command succeeded. Once the game is over every input fails with
    /// [`GameError::GameOver`] and nothing is saved.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let command = parse_command(input);
        debug!(?command, "processing");
        let result = self.execute(command);

        if self.config.autosave {
            if let Err(err) = self.save() {
                warn!(path = %self.config.save_path.display(), error = %err, "autosave failed");
            }
        }
        result
    }

    /// Execute a parsed command without touching the save file.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        match command {
            Command::Quit => Ok(self.do_quit()),
            Command::Load => self.load(),
            Command::Look => self.do_look(),
            Command::Move { direction } => self.do_move(&direction),
            Command::Take { item } => self.do_take(item.as_str()),
            Command::Use { item } => self.do_use(item.as_str()),
            Command::Examine { item } => self.do_examine(item.as_str()),
            Command::Inventory => Ok(format!("You currently carry: {}", self.inventory_list())),
            Command::Help => Ok(HELP_TEXT.to_string()),
            Command::Incomplete { usage } => Err(GameError::Usage(usage)),
            Command::Unknown { input } => Err(GameError::UnknownCommand(input)),
        }
    }

    /// Write the player's progress to the configured save file.
    pub fn save(&self) -> GameResult<()> {
        self.engine.save_to_file(&self.config.save_path)
    }

    /// Restore the player's progress from the configured save file.
    pub fn load(&mut self) -> GameResult<String> {
        self.engine.load_from_file(&self.config.save_path)?;
        Ok(LOADED_MESSAGE.to_string())
    }

    fn do_quit(&mut self) -> String {
        self.engine.quit();
        QUIT_MESSAGE.to_string()
    }

    fn do_look(&mut self) -> GameResult<String> {
        let description = self.engine.describe_current_location()?;
        Ok(format!(
            "You are currently in the {}.\n\n{description}",
            self.engine.player().current_location.title()
        ))
    }

    fn do_move(&mut self, direction: &str) -> GameResult<String> {
        let message = self.engine.move_player(direction)?;
        let description = self.engine.describe_current_location()?;
        Ok(format!(
            "{message}\n\nYou are now in the {}.\n\n{description}",
            self.engine.player().current_location.title()
        ))
    }

    fn do_take(&mut self, item: &str) -> GameResult<String> {
        match self.engine.pick_up(item) {
            Ok(message) => Ok(format!("{message}\n\nYou now carry: {}", self.inventory_list())),
            Err(err @ GameError::ItemNotHere(_)) => {
                let here = self.engine.world().items_at(&self.engine.player().current_location)?;
                Err(with_suggestion(err, suggest(item, here)))
            }
            Err(err) => Err(err),
        }
    }

    fn do_use(&mut self, item: &str) -> GameResult<String> {
        match self.engine.use_item(item) {
            Ok(message) => Ok(format!(
                "{message}\nYour current inventory: {}",
                self.inventory_list()
            )),
            Err(err @ GameError::ItemNotOwned(_)) => {
                let held = &self.engine.player().inventory;
                Err(with_suggestion(err, suggest(item, held)))
            }
            Err(err) => Err(err),
        }
    }

    fn do_examine(&self, item: &str) -> GameResult<String> {
        let text = self.engine.examine_item(item)?;
        if self.engine.can_see(item)? {
            return Ok(text);
        }

        let player = self.engine.player();
        let here = self.engine.world().items_at(&player.current_location)?;
        Ok(match suggest(item, player.inventory.iter().chain(here)) {
            Some(candidate) => format!("{text} Did you mean '{candidate}'?"),
            None => text,
        })
    }

    fn inventory_list(&self) -> String {
        let inventory = &self.engine.player().inventory;
        if inventory.is_empty() {
            "nothing".to_string()
        } else {
            join_ids(inventory)
        }
    }
}

fn with_suggestion(err: GameError, suggestion: Option<ItemId>) -> GameError {
    match suggestion {
        Some(suggestion) => GameError::WithSuggestion {
            inner: Box::new(err),
            suggestion,
        },
        None => err,
    }
}
