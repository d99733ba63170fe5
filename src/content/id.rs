//! Practical identifiers.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::resolver::ResolveError;

/// Identifier of a practical, always within `1..=10`.
///
/// The only way to obtain one from user input is [`PracticalId::new`] or
/// parsing text, both of which reject anything outside the catalog range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PracticalId(pub(super) u8);

impl PracticalId {
    /// Lowest valid practical number.
    pub const MIN: u8 = 1;
    /// Highest valid practical number.
    pub const MAX: u8 = 10;

    /// The first practical.
    pub const FIRST: Self = Self(Self::MIN);
    /// The last practical.
    pub const LAST: Self = Self(Self::MAX);

    /// Create an id if `number` is within the catalog range.
    pub fn new(number: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&number).then_some(Self(number))
    }

    /// The practical number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Iterate over every valid id in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }

    /// The following practical, wrapping from 10 back to 1.
    pub fn next(self) -> Self {
        if self.0 >= Self::MAX {
            Self(Self::MIN)
        } else {
            Self(self.0 + 1)
        }
    }

    /// The preceding practical, wrapping from 1 to 10.
    pub fn prev(self) -> Self {
        if self.0 <= Self::MIN {
            Self(Self::MAX)
        } else {
            Self(self.0 - 1)
        }
    }

    /// Zero-based position within the catalog.
    pub fn index(self) -> usize {
        usize::from(self.0 - Self::MIN)
    }
}

impl fmt::Display for PracticalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PracticalId {
    type Err = ResolveError;

    /// Parse a route parameter such as `"3"`.
    ///
    /// Surrounding whitespace is ignored. Signs, decimals and anything
    /// outside `1..=10` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let not_found = || ResolveError::NotFound {
            requested: s.to_string(),
        };

        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(not_found());
        }

        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(not_found)
    }
}
