//! Era classification and date-range overlap for historical records.
//!
//! Both operations here are total pure functions over already-fetched
//! data. They drive grouping and filtering in the presentation layer and
//! never influence what is stored: a record's era is recomputed from its
//! start date on every read.
//!
//! # Design Principles
//!
//! - Classification is total over all `i32` years, negative years
//!   included. There is no error path.
//! - Boundary years are module constants -- the era of a record is never
//!   persisted, so revising a boundary only changes future reads.
//! - Date comparison uses [`NaiveDate`]'s `Ord`, a true calendar
//!   comparison, rather than the string comparison a fixed-width ISO
//!   format would permit.

use chrono::{Datelike, NaiveDate};
use histolinea_types::Era;

/// First year of the medieval era (fall of the Western Roman Empire).
const MEDIEVAL_FROM_YEAR: i32 = 476;

/// First year of the modern era (European arrival in the Americas).
const MODERN_FROM_YEAR: i32 = 1492;

/// First year of the contemporary era (French Revolution).
const CONTEMPORARY_FROM_YEAR: i32 = 1789;

/// Classify a calendar year into its historical era.
///
/// | Era | Condition |
/// |-----|-----------|
/// | ancient | year < 476 |
/// | medieval | 476 <= year < 1492 |
/// | modern | 1492 <= year < 1789 |
/// | contemporary | year >= 1789 |
pub const fn classify_year(year: i32) -> Era {
    if year < MEDIEVAL_FROM_YEAR {
        Era::Ancient
    } else if year < MODERN_FROM_YEAR {
        Era::Medieval
    } else if year < CONTEMPORARY_FROM_YEAR {
        Era::Modern
    } else {
        Era::Contemporary
    }
}

/// Classify a calendar date into its historical era.
///
/// Only the year component participates; month and day are irrelevant to
/// the fixed boundaries.
pub fn classify_date(date: NaiveDate) -> Era {
    classify_year(date.year())
}

/// Last year of the ancient era (inclusive).
const ANCIENT_UNTIL_YEAR: i32 = 475;

/// Last year of the medieval era (inclusive).
const MEDIEVAL_UNTIL_YEAR: i32 = 1491;

/// Last year of the modern era (inclusive).
const MODERN_UNTIL_YEAR: i32 = 1788;

/// Inclusive first and last year of an era, where bounded.
///
/// `(None, Some(475))` for ancient, `(Some(1789), None)` for
/// contemporary. Served with the era metadata so the client can render
/// range captions without hard-coding the boundaries a second time.
pub const fn year_bounds(era: Era) -> (Option<i32>, Option<i32>) {
    match era {
        Era::Ancient => (None, Some(ANCIENT_UNTIL_YEAR)),
        Era::Medieval => (Some(MEDIEVAL_FROM_YEAR), Some(MEDIEVAL_UNTIL_YEAR)),
        Era::Modern => (Some(MODERN_FROM_YEAR), Some(MODERN_UNTIL_YEAR)),
        Era::Contemporary => (Some(CONTEMPORARY_FROM_YEAR), None),
    }
}

/// Test whether a record's date span intersects a query range.
///
/// A record with no end date is treated as a single-day event, so its
/// effective end is its start. Both query bounds are inclusive and each
/// is optional; an absent bound imposes no constraint. Equivalent to
/// asking whether `[start, effective_end]` intersects
/// `[from or -inf, to or +inf]`.
pub fn overlaps(
    start: NaiveDate,
    end: Option<NaiveDate>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> bool {
    let effective_end = end.unwrap_or(start);

    if let Some(from) = from
        && effective_end < from
    {
        return false;
    }
    if let Some(to) = to
        && start > to
    {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // =========================================================================
    // classify_year
    // =========================================================================

    #[test]
    fn ancient_medieval_boundary() {
        assert_eq!(classify_year(475), Era::Ancient);
        assert_eq!(classify_year(476), Era::Medieval);
    }

    #[test]
    fn medieval_modern_boundary() {
        assert_eq!(classify_year(1491), Era::Medieval);
        assert_eq!(classify_year(1492), Era::Modern);
    }

    #[test]
    fn modern_contemporary_boundary() {
        assert_eq!(classify_year(1788), Era::Modern);
        assert_eq!(classify_year(1789), Era::Contemporary);
    }

    #[test]
    fn classify_is_total_over_extremes() {
        assert_eq!(classify_year(i32::MIN), Era::Ancient);
        assert_eq!(classify_year(-753), Era::Ancient);
        assert_eq!(classify_year(0), Era::Ancient);
        assert_eq!(classify_year(2026), Era::Contemporary);
        assert_eq!(classify_year(i32::MAX), Era::Contemporary);
    }

    #[test]
    fn classify_date_uses_only_the_year() {
        assert_eq!(classify_date(date(1491, 12, 31)), Era::Medieval);
        assert_eq!(classify_date(date(1492, 1, 1)), Era::Modern);
    }

    #[test]
    fn year_bounds_tile_the_number_line() {
        assert_eq!(year_bounds(Era::Ancient), (None, Some(475)));
        assert_eq!(year_bounds(Era::Medieval), (Some(476), Some(1491)));
        assert_eq!(year_bounds(Era::Modern), (Some(1492), Some(1788)));
        assert_eq!(year_bounds(Era::Contemporary), (Some(1789), None));
    }

    // =========================================================================
    // overlaps
    // =========================================================================

    #[test]
    fn point_event_inside_range_overlaps() {
        assert!(overlaps(
            date(1500, 1, 1),
            None,
            Some(date(1499, 1, 1)),
            Some(date(1501, 1, 1)),
        ));
    }

    #[test]
    fn event_entirely_before_lower_bound_does_not_overlap() {
        assert!(!overlaps(
            date(1000, 1, 1),
            Some(date(1002, 1, 1)),
            Some(date(1003, 1, 1)),
            None,
        ));
    }

    #[test]
    fn event_after_upper_bound_does_not_overlap() {
        assert!(!overlaps(
            date(2000, 1, 1),
            None,
            None,
            Some(date(1999, 12, 31)),
        ));
    }

    #[test]
    fn no_bounds_always_overlaps() {
        assert!(overlaps(date(500, 1, 1), Some(date(600, 1, 1)), None, None));
    }

    #[test]
    fn bounds_are_inclusive() {
        // Effective end exactly on `from`.
        assert!(overlaps(
            date(1000, 1, 1),
            Some(date(1003, 1, 1)),
            Some(date(1003, 1, 1)),
            None,
        ));
        // Start exactly on `to`.
        assert!(overlaps(
            date(1999, 12, 31),
            None,
            None,
            Some(date(1999, 12, 31)),
        ));
    }

    #[test]
    fn spanning_event_overlaps_interior_range() {
        assert!(overlaps(
            date(100, 1, 1),
            Some(date(2000, 1, 1)),
            Some(date(1500, 1, 1)),
            Some(date(1500, 12, 31)),
        ));
    }
}
