//! Declarative per-item use rules.
//!
//! Each usable item owns a [`UseRule`]: an ordered list of [`Case`]s, each
//! guarded by conditions over the player's location, inventory and the world
//! graph. The first case whose conditions all hold decides the outcome. When
//! none holds, the rule's `otherwise` message is a failure.

use manor_core::{Direction, WorldGraph};

use crate::player::PlayerState;

use Condition::{At, AtAnyOf, HasExit, Holding, Locked, Present};

/// A test against world and player state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    /// The player stands at this location.
    At(&'static str),
    /// The player stands at any of these locations.
    AtAnyOf(&'static [&'static str]),
    /// The player holds this item.
    Holding(&'static str),
    /// This location is currently locked.
    Locked(&'static str),
    /// The player's location has an exit in this direction.
    HasExit(Direction),
    /// This item is held or lying at the player's location.
    Present(&'static str),
}

impl Condition {
    /// Evaluate the condition against the current state.
    pub fn evaluate(&self, world: &WorldGraph, player: &PlayerState) -> bool {
        let here = &player.current_location;
        match *self {
            Condition::At(location) => here == location,
            Condition::AtAnyOf(locations) => locations.iter().any(|l| here == l),
            Condition::Holding(item) => player.has_item(item),
            Condition::Locked(location) => world.is_locked(location).is_ok_and(|locked| locked),
            Condition::HasExit(direction) => world
                .exits_of(here)
                .is_ok_and(|exits| exits.contains_key(&direction)),
            Condition::Present(item) => {
                player.has_item(item)
                    || world
                        .items_at(here)
                        .is_ok_and(|items| items.iter().any(|i| i == item))
            }
        }
    }
}

/// A state change caused by a successful use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Open a location's lock without its required item.
    Unlock(&'static str),
    /// Place an item at the player's location.
    Reveal(&'static str),
    /// Solve the mystery and end the game.
    Win,
}

/// What a matching case does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Succeeds with narration only.
    Flavor,
    /// Succeeds and changes state.
    Apply(Effect),
    /// Fails with the case's message.
    Refuse,
}

/// One guarded branch of a rule.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    /// All must hold for the case to match.
    pub when: &'static [Condition],
    /// What happens on a match.
    pub outcome: Outcome,
    /// Text shown to the player.
    pub message: &'static str,
}

/// The use behavior of a single item.
#[derive(Debug, Clone, Copy)]
pub struct UseRule {
    /// The item this rule belongs to.
    pub item: &'static str,
    /// Cases in priority order.
    pub cases: &'static [Case],
    /// Failure text when no case matches.
    pub otherwise: &'static str,
}

/// The result of resolving a use against the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The use worked.
    Success {
        /// State change to apply, if any.
        effect: Option<Effect>,
        /// Text shown to the player.
        message: &'static str,
    },
    /// The use did nothing.
    Failure(String),
}

const DARK_PLACES: &[&str] = &["secret_library", "secret_tunnel"];

/// Items that exist only as evidence.
pub const INERT_ITEMS: &[&str] = &[
    "cigarette_case",
    "bloody_handkerchief",
    "strange_token",
    "perfume_bottle",
    "orchard_ladder",
];

/// The rule table.
pub const RULES: &[UseRule] = &[
    UseRule {
        item: "old_key",
        cases: &[
            Case {
                when: &[At("master_bedroom")],
                outcome: Outcome::Flavor,
                message: "You turn the old key in the heavy lock. The master bedroom is now accessible.",
            },
            Case {
                when: &[At("greenhouse")],
                outcome: Outcome::Flavor,
                message: "The old key turns smoothly, and the greenhouse door clicks open.",
            },
        ],
        otherwise: "You try the old key, but find nothing here to unlock.",
    },
    UseRule {
        item: "carving_knife",
        cases: &[Case {
            when: &[At("kitchen"), Locked("cellar")],
            outcome: Outcome::Apply(Effect::Unlock("cellar")),
            message: "You wedge the carving knife into the cellar door's seam and pry it open.",
        }],
        otherwise: "You brandish the carving knife, but there's nothing here to force open.",
    },
    UseRule {
        item: "lantern",
        cases: &[Case {
            when: &[AtAnyOf(DARK_PLACES)],
            outcome: Outcome::Flavor,
            message: "You raise the lantern, and its warm glow illuminates hidden details in the darkness.",
        }],
        otherwise: "You hold up the lantern, but there's already enough light here.",
    },
    UseRule {
        item: "silk_scarf",
        cases: &[Case {
            when: &[At("balcony"), HasExit(Direction::Down)],
            outcome: Outcome::Flavor,
            message: "You secure the silk scarf and use it to safely descend below.",
        }],
        otherwise: "You hold the silk scarf in your hands. Soft, but not particularly useful here.",
    },
    UseRule {
        item: "pruning_shears",
        cases: &[
            Case {
                when: &[At("greenhouse"), Present("rare_seed_pouch")],
                outcome: Outcome::Refuse,
                message: "You trim the vines again, but there is nothing more hidden among them.",
            },
            Case {
                when: &[At("greenhouse")],
                outcome: Outcome::Apply(Effect::Reveal("rare_seed_pouch")),
                message: "You snip away some overgrown vines, revealing a small pouch of rare seeds!",
            },
        ],
        otherwise: "You open and close the pruning shears futilely. Nothing to cut here.",
    },
    UseRule {
        item: "rope",
        cases: &[
            Case {
                when: &[At("stable")],
                outcome: Outcome::Flavor,
                message: "You tie the rope securely to a beam, making it easier to move around the stable.",
            },
            Case {
                when: &[At("orchard")],
                outcome: Outcome::Flavor,
                message: "You tie the rope around a sturdy branch, feeling more secure in your footing.",
            },
        ],
        otherwise: "You hold the rope, but there's nowhere obvious to secure it.",
    },
    UseRule {
        item: "caretaker_journal",
        cases: &[Case {
            when: &[At("caretaker_shack")],
            outcome: Outcome::Flavor,
            message: "You flip through the journal by lantern light. The caretaker noted someone \
                      slipping into the secret tunnel late at night.",
        }],
        otherwise: "You glance at the journal, but this doesn't seem like the right place to learn more.",
    },
    UseRule {
        item: "matches",
        cases: &[Case {
            when: &[Holding("lantern"), AtAnyOf(DARK_PLACES)],
            outcome: Outcome::Flavor,
            message: "You strike a match and light the lantern. The darkness recedes.",
        }],
        otherwise: "You strike a match. It flares briefly before dying out, accomplishing little here.",
    },
    UseRule {
        item: "incriminating_ledger",
        cases: &[
            Case {
                when: &[At("master_bedroom"), Holding("old_key")],
                outcome: Outcome::Apply(Effect::Win),
                message: "You open the incriminating ledger before the host, revealing every debt \
                          and secret. The host pales as you declare: 'You are the murderer.' Gasps \
                          fill the air as the truth comes crashing down.\n\nThe mystery is solved, \
                          and the game ends.",
            },
            Case {
                when: &[At("master_bedroom")],
                outcome: Outcome::Refuse,
                message: "You show the ledger, but something is missing. You need all crucial \
                          evidence to accuse the murderer.",
            },
        ],
        otherwise: "You leaf through the ledger, but there is no one here to confront with it.",
    },
    UseRule {
        item: "mysterious_letter",
        cases: &[Case {
            when: &[At("drawing_room")],
            outcome: Outcome::Flavor,
            message: "You re-read the letter here, comparing its handwriting to the portrait's \
                      figures. It intensifies your suspicion of the family's secrets.",
        }],
        otherwise: "You unfold the letter, but learn nothing new in this location.",
    },
];

/// Fallback for items with no rule at all.
pub const NO_RULE_MESSAGE: &str = "You can't use that here.";

/// Find the rule for an item.
pub fn rule_for(item: &str) -> Option<&'static UseRule> {
    RULES.iter().find(|rule| rule.item == item)
}

/// Decide what using `item` does right now. Does not check that the item is
/// held and does not mutate anything.
pub fn resolve(item: &str, world: &WorldGraph, player: &PlayerState) -> Resolution {
    let Some(rule) = rule_for(item) else {
        if INERT_ITEMS.contains(&item) {
            return Resolution::Failure(format!(
                "You examine the {item}, but it doesn't seem to have any special use here."
            ));
        }
        return Resolution::Failure(NO_RULE_MESSAGE.to_string());
    };

    let matched = rule
        .cases
        .iter()
        .find(|case| case.when.iter().all(|c| c.evaluate(world, player)));

    match matched {
        Some(case) => match case.outcome {
            Outcome::Flavor => Resolution::Success {
                effect: None,
                message: case.message,
            },
            Outcome::Apply(effect) => Resolution::Success {
                effect: Some(effect),
                message: case.message,
            },
            Outcome::Refuse => Resolution::Failure(case.message.to_string()),
        },
        None => Resolution::Failure(rule.otherwise.to_string()),
    }
}
