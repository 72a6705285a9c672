//! # Rings
//!
//! The three concentric rings of the drop machine.
//!
//! ## Ring Definitions
//!
//! | Ring | Index | Drop Positions |
//! |------|-------|----------------|
//! | MIDDLE | 0 | 1 |
//! | INNER | 1 | 6 |
//! | OUTER | 2 | 13 |
//!
//! ## Important Note
//!
//! Indices follow declaration order (MIDDLE, INNER, OUTER). They address
//! rings internally and say nothing about where a ring sits physically.

use crate::DropRingError;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// DROP COUNTS
// =============================================================================

/// Drop positions on the MIDDLE ring.
pub const MIDDLE_DROP_COUNT: usize = 1;

/// Drop positions on the INNER ring.
pub const INNER_DROP_COUNT: usize = 6;

/// Drop positions on the OUTER ring.
pub const OUTER_DROP_COUNT: usize = 13;

// =============================================================================
// RING ENUM
// =============================================================================

/// One of the three drop rings of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Ring {
    /// Index 0, one drop position.
    Middle,
    /// Index 1, six drop positions.
    Inner,
    /// Index 2, thirteen drop positions.
    Outer,
}

impl Ring {
    /// Number of rings.
    pub const COUNT: usize = 3;

    /// Every ring, in declaration order.
    pub const ALL: [Ring; Ring::COUNT] = [Ring::Middle, Ring::Inner, Ring::Outer];

    /// Iterate over every ring in declaration order.
    pub fn iter() -> impl Iterator<Item = Ring> {
        Self::ALL.into_iter()
    }

    /// Get the ring index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Ring::Middle => 0,
            Ring::Inner => 1,
            Ring::Outer => 2,
        }
    }

    /// Get the number of drop positions on this ring.
    #[must_use]
    pub const fn drop_count(self) -> usize {
        match self {
            Ring::Middle => MIDDLE_DROP_COUNT,
            Ring::Inner => INNER_DROP_COUNT,
            Ring::Outer => OUTER_DROP_COUNT,
        }
    }

    /// Get the canonical ring name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Ring::Middle => "MIDDLE",
            Ring::Inner => "INNER",
            Ring::Outer => "OUTER",
        }
    }

    /// Look up a ring by its canonical name.
    ///
    /// Matching is exact and case-sensitive: `"INNER"` resolves, `"inner"`
    /// and `" INNER"` do not.
    pub fn from_name(name: &str) -> Result<Self, DropRingError> {
        match name {
            "MIDDLE" => Ok(Ring::Middle),
            "INNER" => Ok(Ring::Inner),
            "OUTER" => Ok(Ring::Outer),
            _ => {
                tracing::debug!(name, "rejected unknown ring name");
                Err(DropRingError::UnknownMember(name.to_string()))
            }
        }
    }

    /// Get the ring with the given index, if any.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Ring::Middle),
            1 => Some(Ring::Inner),
            2 => Some(Ring::Outer),
            _ => None,
        }
    }

    /// Total drop positions across all rings.
    #[must_use]
    pub const fn total_drop_count() -> usize {
        MIDDLE_DROP_COUNT + INNER_DROP_COUNT + OUTER_DROP_COUNT
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ring {
    type Err = DropRingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<&str> for Ring {
    type Error = DropRingError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_name(value)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn declaration_order() {
        assert_eq!(Ring::ALL, [Ring::Middle, Ring::Inner, Ring::Outer]);
        assert_eq!(Ring::iter().collect::<Vec<_>>(), Ring::ALL.to_vec());
    }

    #[test]
    fn ring_attributes() {
        assert_eq!((Ring::Middle.index(), Ring::Middle.drop_count()), (0, 1));
        assert_eq!((Ring::Inner.index(), Ring::Inner.drop_count()), (1, 6));
        assert_eq!((Ring::Outer.index(), Ring::Outer.drop_count()), (2, 13));
    }

    #[test]
    fn index_matches_position_in_all() {
        for (position, ring) in Ring::iter().enumerate() {
            assert_eq!(ring.index(), position);
            assert_eq!(Ring::from_index(position), Some(ring));
        }
        assert_eq!(Ring::from_index(Ring::COUNT), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Ring::from_name("INNER"), Ok(Ring::Inner));
        assert_eq!(
            Ring::from_name("inner"),
            Err(DropRingError::UnknownMember("inner".to_string()))
        );
    }

    #[test]
    fn parse_and_try_from_agree_with_lookup() {
        assert_eq!("OUTER".parse::<Ring>(), Ok(Ring::Outer));
        assert_eq!(Ring::try_from("MIDDLE"), Ok(Ring::Middle));
        assert!("Outer".parse::<Ring>().is_err());
    }

    #[test]
    fn total_drop_count_is_twenty() {
        assert_eq!(Ring::total_drop_count(), 20);
        assert_eq!(
            Ring::iter().map(Ring::drop_count).sum::<usize>(),
            Ring::total_drop_count()
        );
    }

    #[test]
    fn hash_consistent_with_eq() {
        let set: HashSet<Ring> = Ring::iter().chain(Ring::iter()).collect();
        assert_eq!(set.len(), Ring::COUNT);
        assert!(set.contains(&Ring::Inner));
    }

    #[test]
    fn ring_display() {
        assert_eq!(format!("{}", Ring::Middle), "MIDDLE");
        assert_eq!(Ring::Outer.to_string(), "OUTER");
    }
}
