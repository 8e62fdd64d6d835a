//! Day to pixel-offset tables.
//!
//! Each period has one position file mapping day numbers to the pixel
//! offset where the sprite lands on that period's card. Lookups are
//! fail-fast: a day without an entry aborts the whole request, no
//! partial composite is produced for the other days.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StampError};

use super::Period;

/// A pixel offset into a card template.
///
/// Offsets are signed so that a bad position file produces an
/// `OutOfBounds` failure at composition time instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i64,
    pub dy: i64,
}

impl Offset {
    pub fn new(dx: i64, dy: i64) -> Self {
        Self { dx, dy }
    }
}

/// Day to offset table for one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMap {
    period: Period,
    offsets: BTreeMap<i32, Offset>,
}

impl PositionMap {
    pub fn new(period: Period, offsets: BTreeMap<i32, Offset>) -> Self {
        Self { period, offsets }
    }

    /// The period this map belongs to.
    pub fn period(&self) -> Period {
        self.period
    }

    /// Get the offset for a day, failing if the day has no entry.
    pub fn lookup(&self, day: i32) -> Result<Offset> {
        self.offsets
            .get(&day)
            .copied()
            .ok_or_else(|| StampError::MissingPosition {
                day,
                period: self.period.to_string(),
            })
    }

    /// Resolve a sequence of days into offsets, keeping the request order.
    ///
    /// Fails on the first day without an entry.
    pub fn resolve(&self, days: &[i32]) -> Result<Vec<Offset>> {
        days.iter().map(|&day| self.lookup(day)).collect()
    }

    /// Number of days with an entry.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Check if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate over (day, offset) entries in day order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Offset)> + '_ {
        self.offsets.iter().map(|(&day, &offset)| (day, offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_map() -> PositionMap {
        let mut offsets = BTreeMap::new();
        offsets.insert(1, Offset::new(10, 10));
        offsets.insert(2, Offset::new(100, 200));
        offsets.insert(15, Offset::new(700, 500));
        PositionMap::new(Period::new(2024, 3), offsets)
    }

    #[test]
    fn test_lookup_known_day() {
        let map = sample_map();
        assert_eq!(map.lookup(2).unwrap(), Offset::new(100, 200));
    }

    #[test]
    fn test_lookup_missing_day_fails() {
        let map = sample_map();
        let err = map.lookup(31).unwrap_err();
        match err {
            StampError::MissingPosition { day, period } => {
                assert_eq!(day, 31);
                assert_eq!(period, "2024-03");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_resolve_keeps_request_order() {
        let map = sample_map();
        let offsets = map.resolve(&[15, 1, 15]).unwrap();
        assert_eq!(
            offsets,
            vec![
                Offset::new(700, 500),
                Offset::new(10, 10),
                Offset::new(700, 500)
            ]
        );
    }

    #[test]
    fn test_resolve_fails_fast_on_missing_day() {
        let map = sample_map();
        let err = map.resolve(&[1, 31, 2]).unwrap_err();
        assert!(matches!(err, StampError::MissingPosition { day: 31, .. }));
    }

    #[test]
    fn test_iter_in_day_order() {
        let map = sample_map();
        let days: Vec<i32> = map.iter().map(|(day, _)| day).collect();
        assert_eq!(days, vec![1, 2, 15]);
    }
}
