//! Numeric-or-blank form field
//!
//! Set fields (`reps`, `weight`, `restSec`) hold whatever the user typed.
//! Blank is distinct from zero, and nothing is coerced until a statistic
//! needs the number.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

/// A user-entered numeric field, stored as entered.
///
/// Serialized as `""` when blank, a JSON number, or a JSON string.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    /// Not entered
    #[default]
    Blank,
    /// Entered as a JSON number
    Number(Number),
    /// Entered as text (e.g. `"5"` from a form input)
    Text(EnteredText),
}

/// Non-empty text typed into a numeric field. Empty input is `Blank`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnteredText(String);

impl EnteredText {
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        (!text.is_empty()).then_some(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FieldValue {
    /// Shape an arbitrary JSON value into a field.
    ///
    /// Empty strings, `null`, booleans, arrays and objects become `Blank`.
    /// Text is read as a decimal float only; hex and other radix forms are
    /// not numbers.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n.clone()),
            Value::String(s) => Self::from(s.as_str()),
            _ => Self::Blank,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    /// Parse the field as a finite number.
    ///
    /// Text is trimmed first; blank and whitespace-only text read as zero, matching
    /// how numeric form inputs are coerced.
    pub fn as_number(&self) -> Option<f64> {
        let n = match self {
            Self::Blank => 0.0,
            Self::Number(n) => n.as_f64()?,
            Self::Text(s) => {
                let trimmed = s.as_str().trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse::<f64>().ok()?
                }
            }
        };
        n.is_finite().then_some(n)
    }

    /// The field's value if it is a finite number greater than zero.
    pub fn positive(&self) -> Option<f64> {
        self.as_number().filter(|n| *n > 0.0)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s.as_str()),
        }
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Self::Blank, Self::Number)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        EnteredText::new(value).map_or(Self::Blank, Self::Text)
    }
}

impl Serialize for FieldValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Blank => serializer.serialize_str(""),
            Self::Number(n) => n.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}
