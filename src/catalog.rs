use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single playable rule card.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Rule {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// A pair of opposing rule cards. Flipping the group swaps which side is in play.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RuleGroup {
    pub id: u32,
    pub name: String,
    pub primary_rule: Rule,
    pub flipped_rule: Rule,
}

/// A one-shot challenge card.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub id: u32,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ModifierKind {
    Swap,
    Flip,
    Clone,
    Left,
}

/// A card that rearranges cards already in play rather than adding new ones.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub id: u32,
    pub kind: ModifierKind,
    pub name: String,
    pub description: String,
}

/// The full read-only card set a game session draws from. Loaded once at startup.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Catalog {
    pub rule_groups: Vec<RuleGroup>,
    pub prompts: Vec<Prompt>,
    pub modifiers: Vec<Modifier>,
}

impl Catalog {
    /// The built-in card set. External callers may supply their own `Catalog` instead.
    pub fn default_set() -> &'static Catalog {
        &DEFAULT_CATALOG
    }
}

fn rule(id: u32, name: &str, description: &str) -> Rule {
    Rule {
        id,
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn group(id: u32, name: &str, primary_rule: Rule, flipped_rule: Rule) -> RuleGroup {
    RuleGroup {
        id,
        name: name.to_string(),
        primary_rule,
        flipped_rule,
    }
}

fn prompt(id: u32, text: &str) -> Prompt {
    Prompt {
        id,
        text: text.to_string(),
    }
}

fn modifier(id: u32, kind: ModifierKind, name: &str, description: &str) -> Modifier {
    Modifier {
        id,
        kind,
        name: name.to_string(),
        description: description.to_string(),
    }
}

static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(|| Catalog {
    rule_groups: vec![
        group(
            1,
            "Volume",
            rule(11, "The Quiet Game", "Speak only in a whisper until your next turn"),
            rule(12, "Town Crier", "Announce every card you draw at full volume"),
        ),
        group(
            2,
            "Hands",
            rule(21, "No Pointing", "Pointing at anyone or anything costs you a point"),
            rule(22, "Jazz Hands", "Every sentence must end with jazz hands"),
        ),
        group(
            3,
            "Names",
            rule(31, "Code Names", "Address every player by a made-up code name"),
            rule(32, "Full Titles", "Address every player as Sir or Madam plus their full name"),
        ),
        group(
            4,
            "Posture",
            rule(41, "Stand and Deliver", "Stand up whenever you read a card aloud"),
            rule(42, "Glued Down", "Leaving your seat costs you a point"),
        ),
        group(
            5,
            "Questions",
            rule(51, "Question Everything", "You may only speak in questions"),
            rule(52, "No Questions", "Asking a question costs you a point"),
        ),
        group(
            6,
            "Ceremony",
            rule(61, "Invisible Hat", "Tip your invisible hat before every spin"),
            rule(62, "Salute the Wheel", "Salute whenever the wheel stops"),
        ),
    ],
    prompts: vec![
        prompt(101, "Name three movie villains in ten seconds"),
        prompt(102, "Do your best impression of the player to your right"),
        prompt(103, "Keep a straight face while everyone tries to make you laugh"),
        prompt(104, "Hum a song until someone guesses it"),
        prompt(105, "Tell a two-sentence story about the last photo on your phone"),
        prompt(106, "Name five animals that start with the same letter"),
        prompt(107, "Speak in rhyme until your next turn"),
        prompt(108, "Balance something on your head for the next spin"),
        prompt(109, "Swap seats with the tallest player"),
        prompt(110, "Recite the alphabet backwards from M"),
        prompt(111, "Invent a handshake with the player across from you"),
        prompt(112, "Describe your day so far without the letter S"),
    ],
    modifiers: vec![
        modifier(201, ModifierKind::Swap, "Card Swap", "Trade one of your cards with another player"),
        modifier(202, ModifierKind::Flip, "Flip It", "Flip one rule group to its other side"),
        modifier(203, ModifierKind::Clone, "Copycat", "Copy the effect of the last card drawn"),
        modifier(204, ModifierKind::Left, "Pass Left", "Hand your newest card to the player on your left"),
        modifier(205, ModifierKind::Swap, "Seat Swap", "Swap seats with a player of your choice"),
        modifier(206, ModifierKind::Flip, "Double Flip", "Flip two rule groups to their other sides"),
    ],
});
