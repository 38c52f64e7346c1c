use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A profession skill rank, always within [1, 200].
///
/// Zero is not representable: the command boundary turns a zero input into a
/// removal before the store is involved, so a document containing a zero (or
/// anything else out of range) fails to deserialize as a whole.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Level(u16);

#[derive(Debug, Error)]
#[error("level must be between 1 and 200 (got {0})")]
pub struct InvalidLevel(pub u16);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(200);

    /// Build a level from raw input; `None` when outside [1, 200].
    pub const fn new(value: u16) -> Option<Level> {
        if value >= Level::MIN.0 && value <= Level::MAX.0 {
            Some(Level(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether this is the starred maximum rank (level 200).
    pub const fn is_maxed(self) -> bool {
        self.0 == Level::MAX.0
    }
}

impl TryFrom<u16> for Level {
    type Error = InvalidLevel;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Level::new(value).ok_or(InvalidLevel(value))
    }
}

impl From<Level> for u16 {
    fn from(level: Level) -> u16 {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::Level;

    #[test]
    fn accepts_the_whole_valid_range() {
        assert_eq!(Level::new(1), Some(Level::MIN));
        assert_eq!(Level::new(147).map(Level::get), Some(147));
        assert_eq!(Level::new(200), Some(Level::MAX));
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(Level::new(0), None);
        assert_eq!(Level::new(201), None);
        assert_eq!(Level::new(u16::MAX), None);
    }

    #[test]
    fn only_two_hundred_is_maxed() {
        assert!(Level::MAX.is_maxed());
        assert!(!Level::new(199).unwrap().is_maxed());
        assert!(!Level::MIN.is_maxed());
    }

    #[test]
    fn serializes_as_a_bare_number() {
        let level = Level::new(73).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "73");
        assert_eq!(serde_json::from_str::<Level>("73").unwrap(), level);
    }

    #[test]
    fn deserialization_enforces_the_range() {
        assert!(serde_json::from_str::<Level>("0").is_err());
        assert!(serde_json::from_str::<Level>("201").is_err());
    }

    #[test]
    fn orders_numerically() {
        assert!(Level::new(200).unwrap() > Level::new(199).unwrap());
        assert!(Level::new(2).unwrap() > Level::MIN);
    }
}
