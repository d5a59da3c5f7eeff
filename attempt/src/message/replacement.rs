//! Named placeholder substitutions carried by a [`Message`].

use std::borrow::Cow;
use std::fmt;

use fluent_bundle::FluentValue;

use crate::{Localizer, Message};

/// Value substituted for a placeholder.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum ReplacementValue {
    /// Plain text.
    Text(String),
    /// Whole number, formatted by the localiser when one is used.
    Integer(i64),
    /// Decimal number, formatted by the localiser when one is used.
    Float(f64),
    /// Nested message, rendered with the same localiser as its parent.
    Message(Box<Message>),
}

impl ReplacementValue {
    /// Renders the value as display text.
    #[must_use]
    pub fn render(&self, localizer: &dyn Localizer) -> String {
        match self {
            Self::Message(message) => message.render(localizer),
            other => other.to_string(),
        }
    }

    pub(crate) fn to_fluent(&self, localizer: &dyn Localizer) -> FluentValue<'_> {
        match self {
            Self::Text(text) => FluentValue::from(text.as_str()),
            Self::Integer(value) => FluentValue::from(*value),
            Self::Float(value) => FluentValue::from(*value),
            Self::Message(message) => FluentValue::from(message.render(localizer)),
        }
    }
}

impl fmt::Display for ReplacementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Message(message) => fmt::Display::fmt(message, f),
        }
    }
}

impl From<&str> for ReplacementValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for ReplacementValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for ReplacementValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<Cow<'_, str>> for ReplacementValue {
    fn from(value: Cow<'_, str>) -> Self {
        Self::Text(value.into_owned())
    }
}

impl From<bool> for ReplacementValue {
    fn from(value: bool) -> Self {
        Self::Text(value.to_string())
    }
}

macro_rules! integer_replacement {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ReplacementValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_replacement!(i8, i16, i32, i64, u8, u16, u32);

/// Values beyond `i64` are kept as their decimal text.
macro_rules! wide_integer_replacement {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ReplacementValue {
                fn from(value: $ty) -> Self {
                    i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Integer)
                }
            }
        )*
    };
}

wide_integer_replacement!(u64, usize, isize);

impl From<f64> for ReplacementValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Message> for ReplacementValue {
    fn from(value: Message) -> Self {
        Self::Message(Box::new(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for ReplacementValue {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(|| Self::Text(String::new()), Into::into)
    }
}

/// A `{placeholder}` paired with the value that replaces it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageReplacement {
    key: String,
    value: ReplacementValue,
}

impl MessageReplacement {
    /// Placeholder as written in templates, braces included.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replacement value.
    #[must_use]
    pub const fn value(&self) -> &ReplacementValue {
        &self.value
    }

    /// Placeholder with one pair of surrounding braces removed, as used for
    /// Fluent argument names.
    ///
    /// ```rust
    /// use attempt::replace;
    ///
    /// assert_eq!(replace("{world}").with("nether").argument_name(), "world");
    /// assert_eq!(replace("world").with("nether").argument_name(), "world");
    /// ```
    #[must_use]
    pub fn argument_name(&self) -> &str {
        self.key
            .strip_prefix('{')
            .and_then(|inner| inner.strip_suffix('}'))
            .unwrap_or(&self.key)
    }
}

/// Half-built replacement awaiting its value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "call `with` to produce a replacement"]
pub struct Replacer {
    key: Cow<'static, str>,
}

impl Replacer {
    /// Completes the replacement.
    pub fn with(self, value: impl Into<ReplacementValue>) -> MessageReplacement {
        MessageReplacement {
            key: self.key.into_owned(),
            value: value.into(),
        }
    }
}

/// Starts a replacement for `key`.
///
/// ```rust
/// use attempt::{Message, replace};
///
/// let message = Message::text("Hello {name}").with_replacement(replace("{name}").with("Ada"));
/// assert_eq!(message.to_string(), "Hello Ada");
/// ```
pub fn replace(key: impl Into<Cow<'static, str>>) -> Replacer {
    Replacer { key: key.into() }
}

/// Placeholders shared by many messages.
#[derive(Debug, Clone, Copy)]
pub struct Replace;

impl Replace {
    /// `{world}`
    pub const WORLD: Replacer = Replacer {
        key: Cow::Borrowed("{world}"),
    };
    /// `{property}`
    pub const PROPERTY: Replacer = Replacer {
        key: Cow::Borrowed("{property}"),
    };
    /// `{value}`
    pub const VALUE: Replacer = Replacer {
        key: Cow::Borrowed("{value}"),
    };
    /// `{action}`
    pub const ACTION: Replacer = Replacer {
        key: Cow::Borrowed("{action}"),
    };
    /// `{error}`
    pub const ERROR: Replacer = Replacer {
        key: Cow::Borrowed("{error}"),
    };
}
