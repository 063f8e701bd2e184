//! Recurrence index sets for turno rules.
//!
//! The shift-list endpoint sends weekday and week-of-month indices as
//! comma-separated strings (`"1,2,3"`). Every consumer goes through
//! [`RecurrenceSet::parse`] so there is exactly one discard policy for
//! malformed tokens: each bad token is dropped on its own and the rest of
//! the string is kept.

use std::collections::BTreeSet;
use std::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A set of small positive recurrence indices (weekday 1-7 or week 1-5).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct RecurrenceSet(BTreeSet<u8>);

impl RecurrenceSet {
    /// Empty set. A rule carrying one never matches any date.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated index list.
    ///
    /// Whitespace around tokens is trimmed; empty and non-numeric tokens are
    /// skipped individually.
    ///
    /// ```
    /// use turnos::domain::models::RecurrenceSet;
    ///
    /// let set = RecurrenceSet::parse("1, abc, 3");
    /// assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut indices = BTreeSet::new();
        for token in raw.split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            match token.parse::<u8>() {
                Ok(index) => {
                    indices.insert(index);
                }
                Err(_) => {
                    tracing::debug!(token, raw, "discarding malformed recurrence token");
                }
            }
        }
        Self(indices)
    }

    pub fn contains(&self, index: u8) -> bool {
        self.0.contains(&index)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// True when both sets share at least one index.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.0.is_disjoint(&other.0)
    }
}

impl FromIterator<u8> for RecurrenceSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for RecurrenceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        f.write_str(&joined)
    }
}

impl Serialize for RecurrenceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecurrenceSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RecurrenceSetVisitor)
    }
}

/// Accepts the string form, a bare number, an array of numbers/strings, or null.
struct RecurrenceSetVisitor;

impl<'de> Visitor<'de> for RecurrenceSetVisitor {
    type Value = RecurrenceSet;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a comma-separated index string, an index array or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(RecurrenceSet::parse(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(u8::try_from(v).map_or_else(|_| RecurrenceSet::empty(), |i| [i].into_iter().collect()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(u8::try_from(v).map_or_else(|_| RecurrenceSet::empty(), |i| [i].into_iter().collect()))
    }

    fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
        Ok(RecurrenceSet::empty())
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(RecurrenceSet::empty())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RecurrenceSet::empty())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(RecurrenceSet::empty())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(self)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut indices = BTreeSet::new();
        while let Some(item) = seq.next_element::<serde_json::Value>()? {
            let index = match &item {
                serde_json::Value::Number(n) => n.as_u64().and_then(|n| u8::try_from(n).ok()),
                serde_json::Value::String(s) => s.trim().parse::<u8>().ok(),
                _ => None,
            };
            match index {
                Some(index) => {
                    indices.insert(index);
                }
                None => tracing::debug!(%item, "discarding malformed recurrence element"),
            }
        }
        Ok(RecurrenceSet(indices))
    }
}
