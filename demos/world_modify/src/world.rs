//! In-memory worlds and the typed properties they expose.
//!
//! Every world starts with the same property table. Values are parsed from
//! command-line text according to the type of the current value, so a flag
//! only accepts booleans and a list grows or shrinks one item at a time.

use std::collections::BTreeMap;
use std::fmt;

use attempt::{Attempt, AttemptOptionExt, AttemptResultExt, FailureReason, Replace, replace};

/// Reasons a single property change is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FailureReason)]
#[failure_reason(prefix = "world.property")]
pub enum PropertyFailure {
    /// The world has no property with the requested name.
    #[failure_reason(template = "Property {property} does not exist")]
    UnknownProperty,
    /// A flag was given something other than a boolean.
    #[failure_reason(template = "'{value}' is not true or false")]
    NotABoolean,
    /// A number property was given text that does not parse.
    #[failure_reason(template = "'{value}' is not a whole number ({error})")]
    NotANumber,
    /// A choice property was given a value outside its allowed set.
    #[failure_reason(template = "'{value}' is not one of {allowed}")]
    NotAllowed,
    /// `add` or `remove` was used on a property that is not a list.
    #[failure_reason(template = "Property {property} does not hold a list")]
    NotAList,
    /// `remove` named an item the list does not contain.
    #[failure_reason(template = "'{value}' is not in {property}")]
    NotInList,
}

/// Difficulty levels accepted by the `difficulty` property.
pub const DIFFICULTIES: &[&str] = &["peaceful", "easy", "normal", "hard"];

/// Current value of a world property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    /// On/off switch.
    Flag(bool),
    /// Signed whole number.
    Number(i64),
    /// One entry from a fixed set.
    Choice {
        /// Selected entry.
        value: &'static str,
        /// Every accepted entry.
        allowed: &'static [&'static str],
    },
    /// Ordered list of names.
    List(Vec<String>),
}

impl PropertyValue {
    fn parsed(&self, raw: &str) -> Attempt<Self, PropertyFailure> {
        match *self {
            Self::Flag(_) => parse_flag(raw).map(Self::Flag),
            Self::Number(_) => parse_number(raw).map(Self::Number),
            Self::Choice { allowed, .. } => {
                parse_choice(raw, allowed).map(|value| Self::Choice { value, allowed })
            }
            Self::List(_) => Attempt::success(Self::List(split_list(raw))),
        }
    }

    fn with_item(&self, property: &str, raw: &str) -> Attempt<Self, PropertyFailure> {
        let Self::List(items) = self else {
            return Attempt::failure(PropertyFailure::NotAList, [Replace::PROPERTY.with(property)]);
        };
        let mut next = items.clone();
        if !next.iter().any(|item| item == raw) {
            next.push(raw.to_owned());
        }
        Attempt::success(Self::List(next))
    }

    fn without_item(&self, property: &str, raw: &str) -> Attempt<Self, PropertyFailure> {
        let Self::List(items) = self else {
            return Attempt::failure(PropertyFailure::NotAList, [Replace::PROPERTY.with(property)]);
        };
        items
            .iter()
            .position(|item| item == raw)
            .ok_or_failure(
                PropertyFailure::NotInList,
                [Replace::VALUE.with(raw), Replace::PROPERTY.with(property)],
            )
            .map(|index| {
                let mut next = items.clone();
                next.remove(index);
                Self::List(next)
            })
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Choice { value, .. } => f.write_str(value),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

fn parse_flag(raw: &str) -> Attempt<bool, PropertyFailure> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" => Attempt::success(true),
        "false" | "off" | "no" => Attempt::success(false),
        _ => Attempt::failure(PropertyFailure::NotABoolean, [Replace::VALUE.with(raw)]),
    }
}

fn parse_number(raw: &str) -> Attempt<i64, PropertyFailure> {
    raw.trim()
        .parse::<i64>()
        .into_attempt_with(PropertyFailure::NotANumber, |err| {
            [Replace::VALUE.with(raw), Replace::ERROR.with(err.to_string())]
        })
}

fn parse_choice(raw: &str, allowed: &'static [&'static str]) -> Attempt<&'static str, PropertyFailure> {
    allowed
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(raw.trim()))
        .ok_or_failure(
            PropertyFailure::NotAllowed,
            [
                Replace::VALUE.with(raw),
                replace("{allowed}").with(allowed.join(", ")),
            ],
        )
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

fn default_properties() -> BTreeMap<&'static str, PropertyValue> {
    BTreeMap::from([
        ("pvp", PropertyValue::Flag(true)),
        ("hunger", PropertyValue::Flag(true)),
        ("player-limit", PropertyValue::Number(-1)),
        (
            "difficulty",
            PropertyValue::Choice {
                value: "normal",
                allowed: DIFFICULTIES,
            },
        ),
        ("world-blacklist", PropertyValue::List(Vec::new())),
    ])
}

/// A requested change to one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change<'a> {
    /// Replace the value with the parsed text.
    Set(&'a str),
    /// Append an item to a list.
    Add(&'a str),
    /// Drop an item from a list.
    Remove(&'a str),
    /// Restore the default value.
    Reset,
}

/// A named world and its properties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    name: String,
    properties: BTreeMap<&'static str, PropertyValue>,
}

impl World {
    /// Creates a world with every property at its default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: default_properties(),
        }
    }

    /// World name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of `property`.
    #[must_use]
    pub fn property(&self, property: &str) -> Option<&PropertyValue> {
        self.properties.get(property)
    }

    /// Names of every property, in sorted order.
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.properties.keys().copied()
    }

    /// Applies `change` to `property` and returns the stored value.
    ///
    /// The world is left untouched when the change fails.
    pub fn apply(&mut self, property: &str, change: Change<'_>) -> Attempt<PropertyValue, PropertyFailure> {
        let Some(current) = self.properties.get_mut(property) else {
            return Attempt::failure(
                PropertyFailure::UnknownProperty,
                [Replace::PROPERTY.with(property)],
            );
        };
        let next = match change {
            Change::Set(raw) => current.parsed(raw),
            Change::Add(raw) => current.with_item(property, raw),
            Change::Remove(raw) => current.without_item(property, raw),
            Change::Reset => default_properties().remove(property).ok_or_failure(
                PropertyFailure::UnknownProperty,
                [Replace::PROPERTY.with(property)],
            ),
        };
        next.on_success(|value| {
            tracing::debug!(property, %value, "property updated");
            current.clone_from(value);
        })
    }
}

/// The set of worlds a command can modify.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldRegistry {
    worlds: BTreeMap<String, World>,
}

impl WorldRegistry {
    /// Registers a fresh world for every name.
    pub fn with_worlds<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let worlds = names
            .into_iter()
            .map(|name| {
                let world = World::new(name);
                (world.name.clone(), world)
            })
            .collect();
        Self { worlds }
    }

    /// The three worlds of a default server.
    #[must_use]
    pub fn demo() -> Self {
        Self::with_worlds(["world", "world_nether", "world_the_end"])
    }

    /// Looks up a world by exact name.
    #[must_use]
    pub fn world(&self, name: &str) -> Option<&World> {
        self.worlds.get(name)
    }

    /// Looks up a world by exact name for modification.
    pub fn world_mut(&mut self, name: &str) -> Option<&mut World> {
        self.worlds.get_mut(name)
    }
}
