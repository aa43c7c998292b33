mod convert;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

///
/// Key
///
/// Atomic entity identity: text or numeric.
/// Same-kind keys order by value (text lexicographic, numbers numeric);
/// cross-kind comparison falls back to a stable variant rank.
/// Well-formed models never mix key kinds; the fallback only keeps the
/// order total and carries no domain meaning.
///

#[derive(Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum Key {
    Int(i64),
    Text(String),
    Uint(u64),
}

impl Key {
    // ── Variant ranks (do not reorder) ─────────────────
    const RANK_INT: u8 = 0;
    const RANK_TEXT: u8 = 1;
    const RANK_UINT: u8 = 2;

    const fn variant_rank(&self) -> u8 {
        match self {
            Self::Int(_) => Self::RANK_INT,
            Self::Text(_) => Self::RANK_TEXT,
            Self::Uint(_) => Self::RANK_UINT,
        }
    }

    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Uint(_))
    }

    /// Text payload, if this is a text key.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            Self::Int(_) | Self::Uint(_) => None,
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Ord::cmp(a, b),
            (Self::Text(a), Self::Text(b)) => Ord::cmp(a, b),
            (Self::Uint(a), Self::Uint(b)) => Ord::cmp(a, b),

            _ => Ord::cmp(&self.variant_rank(), &other.variant_rank()), // fallback for cross-kind comparison
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(Ord::cmp(self, other))
    }
}
