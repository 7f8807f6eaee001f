//! The lucky number of the day.
//!
//! Students whose register number matches it are spared from being called on.
//! One number is drawn per calendar day (UTC) and reused until the date
//! changes.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;
use rand::Rng;

pub const LUCKY_NUMBER_RANGE: RangeInclusive<u8> = 1..=35;

#[derive(Debug, Default)]
pub struct LuckyNumber {
    current: Mutex<Option<(NaiveDate, u8)>>,
}

impl LuckyNumber {
    pub fn today(&self) -> u8 {
        self.number_for(Utc::now().date_naive())
    }

    /// Returns the number for `date`, drawing a new one if the cached number
    /// belongs to another day.
    pub fn number_for(&self, date: NaiveDate) -> u8 {
        let mut current = self.current.lock();
        match *current {
            Some((cached_date, number)) if cached_date == date => number,
            _ => {
                let number = rand::thread_rng().gen_range(LUCKY_NUMBER_RANGE);
                *current = Some((date, number));
                tracing::debug!(%date, number, "Drew lucky number");
                number
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 9, d).unwrap()
    }

    #[test]
    fn test_same_day_is_stable() {
        let lucky = LuckyNumber::default();
        let first = lucky.number_for(day(1));
        for _ in 0..20 {
            assert_eq!(lucky.number_for(day(1)), first);
        }
    }

    #[test]
    fn test_number_in_range() {
        let lucky = LuckyNumber::default();
        for d in 1..=30 {
            assert!(LUCKY_NUMBER_RANGE.contains(&lucky.number_for(day(d))));
        }
    }

    #[test]
    fn test_new_day_replaces_cache() {
        let lucky = LuckyNumber::default();
        lucky.number_for(day(1));
        let second = lucky.number_for(day(2));
        assert_eq!(*lucky.current.lock(), Some((day(2), second)));
    }

    #[test]
    fn test_concurrent_readers_agree() {
        let lucky = Arc::new(LuckyNumber::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let lucky = Arc::clone(&lucky);
                std::thread::spawn(move || lucky.number_for(day(3)))
            })
            .collect();

        let numbers: Vec<u8> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(numbers.windows(2).all(|w| w[0] == w[1]));
    }
}
