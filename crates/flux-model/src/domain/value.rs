use std::fmt;

use serde::{Deserialize, Serialize};

/// A single generated integer flowing from a producer to its consumers.
///
/// Values carry no identity: two values with the same number are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Value(pub u32);

impl Value {
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Filter predicate shared by every demo: `value % 2 == 0`.
    #[inline]
    pub fn is_even(self) -> bool {
        self.0 % 2 == 0
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn even_filter() {
        assert!(Value(0).is_even());
        assert!(Value(42).is_even());
        assert!(!Value(3).is_even());
        assert!(!Value(99).is_even());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Value(8)).unwrap();
        assert_eq!(json, "8");
        assert_eq!(Value(8).to_string(), "8");
    }
}
