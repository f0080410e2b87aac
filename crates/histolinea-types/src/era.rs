//! Historical era labels and their presentation metadata.
//!
//! An [`Era`] is derived from a record's start date for grouping and
//! filtering in the client. It is presentation metadata only: the era of
//! a record is never persisted, so the stored data cannot go stale if
//! the boundary years are ever revised.
//!
//! The classification logic itself (year -> era, date-range overlap)
//! lives in `histolinea-core`; this module only defines the label type
//! and its display attributes.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named historical era.
///
/// The four variants are mutually exclusive and collectively exhaustive
/// over all calendar years. Serialized as the stable lowercase key
/// (`"ancient"`, `"medieval"`, `"modern"`, `"contemporary"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Era {
    /// Before the fall of the Western Roman Empire (year < 476).
    Ancient,
    /// From 476 up to the European arrival in the Americas (year < 1492).
    Medieval,
    /// From 1492 up to the French Revolution (year < 1789).
    Modern,
    /// From 1789 onward.
    Contemporary,
}

impl Era {
    /// All eras in chronological order.
    pub const ALL: [Self; 4] = [
        Self::Ancient,
        Self::Medieval,
        Self::Modern,
        Self::Contemporary,
    ];

    /// Stable lowercase key, matching the serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ancient => "ancient",
            Self::Medieval => "medieval",
            Self::Modern => "modern",
            Self::Contemporary => "contemporary",
        }
    }

    /// Human-readable display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ancient => "Ancient",
            Self::Medieval => "Medieval",
            Self::Modern => "Modern",
            Self::Contemporary => "Contemporary",
        }
    }

    /// Accent color used by the client when rendering this era.
    ///
    /// The rgba values come from the web client's theme and are served
    /// alongside the key so the timeline and the grid agree on colors.
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Ancient => "rgba(46,125,50,0.9)",
            Self::Medieval => "rgba(109,76,65,0.95)",
            Self::Modern => "rgba(21,101,192,0.9)",
            Self::Contemporary => "rgba(106,27,154,0.9)",
        }
    }

    /// Parse a stable key back into an era.
    ///
    /// Returns `None` for unknown keys. Used when decoding the `era`
    /// filter query parameter.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ancient" => Some(Self::Ancient),
            "medieval" => Some(Self::Medieval),
            "modern" => Some(Self::Modern),
            "contemporary" => Some(Self::Contemporary),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn serializes_as_key() {
        for era in Era::ALL {
            let json = serde_json::to_string(&era).unwrap();
            assert_eq!(json, format!("\"{}\"", era.key()));
        }
    }

    #[test]
    fn from_key_roundtrips_all_eras() {
        for era in Era::ALL {
            assert_eq!(Era::from_key(era.key()), Some(era));
        }
    }

    #[test]
    fn from_key_rejects_unknown() {
        assert_eq!(Era::from_key("futuristic"), None);
        assert_eq!(Era::from_key(""), None);
        assert_eq!(Era::from_key("Ancient"), None);
    }
}
