//! Command parsing for player input.

use manor_core::ItemId;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Give up and end the game.
    Quit,
    /// Restore the save file.
    Load,
    /// Describe the current location.
    Look,
    /// Walk through an exit.
    Move {
        /// The direction as typed. Parsed later so that a bad direction is a
        /// failed move rather than a parse error.
        direction: String,
    },
    /// Pick up an item.
    Take {
        /// The item, normalised to an id.
        item: ItemId,
    },
    /// Use a held item.
    Use {
        /// The item, normalised to an id.
        item: ItemId,
    },
    /// Read an item's description.
    Examine {
        /// The item, normalised to an id.
        item: ItemId,
    },
    /// List held items.
    Inventory,
    /// Show the command reference.
    Help,
    /// A verb that needs an argument arrived without one.
    Incomplete {
        /// The prompt telling the player what is missing.
        usage: &'static str,
    },
    /// Unrecognised input.
    Unknown {
        /// The input after trimming and lowercasing.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const QUIT_VERBS: &[&str] = &["quit", "exit", "q"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv"];
const HELP_VERBS: &[&str] = &["help", "commands"];

const MOVE_USAGE: &str = "Move where? Try 'move north', 'move east', etc.";
const TAKE_USAGE: &str = "Take what? Specify an item name.";
const USE_USAGE: &str = "Use what? Specify an item you currently have.";
const EXAMINE_USAGE: &str = "Examine what? Specify an item to examine.";

/// The command reference shown by `help`.
pub const HELP_TEXT: &str = "Available commands:
  look              - Describe your current surroundings.
  move <direction>  - Move north, south, east, west, up, down, etc.
  take <item>       - Pick up an item in your current location.
  use <item>        - Use an item from your inventory.
  examine <item>    - Take a closer look at an item you can see.
  inventory (inv)   - Check what you are carrying.
  load              - Restore your last saved game.
  help              - Show this list.
  quit              - Quit the game.

Hints:
  - 'look' often to rediscover details about your location.
  - If you find keys or tools, 'use' them where appropriate.";

/// Parse a player input line. Case and surrounding whitespace are ignored.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim().to_lowercase();
    let words: Vec<&str> = input.split_whitespace().collect();
    let Some((&verb, rest)) = words.split_first() else {
        return Command::Unknown {
            input: String::new(),
        };
    };

    // Single-word commands only match on their own.
    if rest.is_empty() {
        if QUIT_VERBS.contains(&verb) {
            return Command::Quit;
        }
        if INVENTORY_VERBS.contains(&verb) {
            return Command::Inventory;
        }
        if HELP_VERBS.contains(&verb) {
            return Command::Help;
        }
    }

    match verb {
        "load" => Command::Load,
        "look" => Command::Look,
        "move" => match rest.first() {
            Some(direction) => Command::Move {
                direction: (*direction).to_string(),
            },
            None => Command::Incomplete { usage: MOVE_USAGE },
        },
        "take" => parse_item(rest, TAKE_USAGE, |item| Command::Take { item }),
        "use" => parse_item(rest, USE_USAGE, |item| Command::Use { item }),
        "examine" => parse_item(rest, EXAMINE_USAGE, |item| Command::Examine { item }),
        _ => Command::Unknown {
            input: input.clone(),
        },
    }
}

fn parse_item(rest: &[&str], usage: &'static str, make: impl FnOnce(ItemId) -> Command) -> Command {
    if rest.is_empty() {
        Command::Incomplete { usage }
    } else {
        make(ItemId::new(rest.join("_")))
    }
}
