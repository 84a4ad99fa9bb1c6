use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stat number as it appeared in the source document.
///
/// The API serializes stat values as either JSON integers or JSON floats, and
/// the representation is the only signal available for how the value should be
/// displayed. Deserializing through `f64` would erase that signal, so the two
/// representations are kept apart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatValue {
    Int(i64),
    Float(f64),
}

impl StatValue {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    pub fn is_fractional(&self) -> bool {
        matches!(*self, Self::Float(_))
    }

    /// Render for display: a fractional value below 100 is shown as a
    /// one-decimal percentage, everything else as a whole number.
    ///
    /// Known limitation carried over from the upstream tool: a value that is
    /// semantically a percentage but reaches 100 or more (very high CRIT DMG,
    /// for example) is shown as a bare number.
    pub fn display_string(&self) -> String {
        match *self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) if v < 100.0 => format!("{v:.1}%"),
            Self::Float(v) => format!("{v:.0}"),
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

impl Serialize for StatValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            Self::Int(v) => serializer.serialize_i64(v),
            Self::Float(v) => serializer.serialize_f64(v),
        }
    }
}

impl<'de> Deserialize<'de> for StatValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatValueVisitor;

        impl<'de> Visitor<'de> for StatValueVisitor {
            type Value = StatValue;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a JSON number")
            }

            fn visit_i64<E>(self, v: i64) -> Result<StatValue, E>
            where
                E: de::Error,
            {
                Ok(StatValue::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<StatValue, E>
            where
                E: de::Error,
            {
                Ok(match i64::try_from(v) {
                    Ok(n) => StatValue::Int(n),
                    Err(_) => StatValue::Float(v as f64),
                })
            }

            fn visit_f64<E>(self, v: f64) -> Result<StatValue, E>
            where
                E: de::Error,
            {
                Ok(StatValue::Float(v))
            }
        }

        deserializer.deserialize_any(StatValueVisitor)
    }
}
