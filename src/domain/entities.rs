//! Domain entities: characters and the attributes that discriminate them

use std::fmt;

/// Number of fields a dataset row must carry to describe a character.
pub const FIELD_COUNT: usize = 8;

/// A guessable character.
///
/// All categorical fields are trimmed and lowercased on construction;
/// `name` keeps its original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub name: String,
    pub gender: String,
    pub alive: bool,
    pub age_group: String,
    pub famous_for: String,
    pub nationality: String,
    pub religion: String,
    pub royalty: bool,
}

impl Character {
    /// Build a character from raw fields in dataset order:
    /// `[name, gender, alive, age_group, famous_for, nationality, religion, royalty]`.
    ///
    /// Returns `None` when fewer than [`FIELD_COUNT`] fields are given.
    /// Extra trailing fields are ignored.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Option<Self> {
        if fields.len() < FIELD_COUNT {
            return None;
        }
        let field = |i: usize| fields[i].as_ref().trim();
        let text = |i: usize| field(i).to_lowercase();
        let flag = |i: usize| field(i).eq_ignore_ascii_case("yes");

        Some(Self {
            name: field(0).to_string(),
            gender: text(1),
            alive: flag(2),
            age_group: text(3),
            famous_for: text(4),
            nationality: text(5),
            religion: text(6),
            royalty: flag(7),
        })
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Attribute a tree node can test.
///
/// `Name` is synthetic: it only appears on fallback splits that isolate
/// one candidate among otherwise indistinguishable characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Alive,
    Royalty,
    Gender,
    AgeGroup,
    FamousFor,
    Nationality,
    Religion,
    Name,
}

const TRUE: &str = "true";
const FALSE: &str = "false";

impl Attribute {
    /// Boolean attributes, in scan order.
    pub const BOOLEAN: [Attribute; 2] = [Attribute::Alive, Attribute::Royalty];

    /// Categorical attributes, in scan order.
    pub const CATEGORICAL: [Attribute; 5] = [
        Attribute::Gender,
        Attribute::AgeGroup,
        Attribute::FamousFor,
        Attribute::Nationality,
        Attribute::Religion,
    ];

    /// Value tested for the "yes" branch of a boolean split.
    pub const TRUE_VALUE: &'static str = TRUE;

    /// The character's value for this attribute.
    ///
    /// Booleans map to `"true"` / `"false"` so every attribute compares as text.
    pub fn value_of(self, character: &Character) -> &str {
        match self {
            Attribute::Alive => bool_str(character.alive),
            Attribute::Royalty => bool_str(character.royalty),
            Attribute::Gender => &character.gender,
            Attribute::AgeGroup => &character.age_group,
            Attribute::FamousFor => &character.famous_for,
            Attribute::Nationality => &character.nationality,
            Attribute::Religion => &character.religion,
            Attribute::Name => &character.name,
        }
    }

    /// Whether `character` falls on the "yes" side of `self == value`.
    pub fn matches(self, character: &Character, value: &str) -> bool {
        self.value_of(character) == value
    }

    /// Human-readable question for the test `self == value`.
    pub fn question(self, value: &str) -> String {
        match self {
            Attribute::Alive => "Is the person alive?".to_string(),
            Attribute::Royalty => "Is the person royalty?".to_string(),
            Attribute::Gender => format!("Is the person {}?", value),
            Attribute::AgeGroup => format!("Is the person's age group {}?", value),
            Attribute::FamousFor => format!("Is the person famous for {}?", value),
            Attribute::Nationality => format!("Is the person from {}?", value),
            Attribute::Religion => format!("Is the person's religion {}?", value),
            Attribute::Name => format!("Is your character {}?", value),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Alive => "alive",
            Attribute::Royalty => "royalty",
            Attribute::Gender => "gender",
            Attribute::AgeGroup => "ageGroup",
            Attribute::FamousFor => "famousFor",
            Attribute::Nationality => "nationality",
            Attribute::Religion => "religion",
            Attribute::Name => "name",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn bool_str(flag: bool) -> &'static str {
    if flag {
        TRUE
    } else {
        FALSE
    }
}
