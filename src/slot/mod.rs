//! Time-of-day slots used as schedule keys.
//!
//! A slot is either a single point ("9:45 AM") or a range
//! ("9:00 AM - 12:30 PM"). Equality, hashing and ordering only look at the
//! hour and minute, never at seconds or a calendar date.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use chrono::{NaiveTime, Timelike};
use serde::{Serialize, Serializer};

use crate::error::PlannerError;

const DISPLAY_FORMAT: &str = "%-I:%M %p";
const PARSE_FORMAT: &str = "%I:%M %p";
const RANGE_SEPARATOR: &str = " - ";

#[derive(Debug, Clone, Copy)]
pub struct TimeSlot {
    start: NaiveTime,
    end: Option<NaiveTime>,
}

impl TimeSlot {
    pub fn at(time: NaiveTime) -> Self {
        Self {
            start: time,
            end: None,
        }
    }

    pub fn between(start: NaiveTime, end: NaiveTime) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Point slot at `minute_of_day` minutes past midnight.
    pub fn from_minute_of_day(minute_of_day: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(minute_of_day / 60, minute_of_day % 60, 0).map(Self::at)
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn hour(&self) -> u32 {
        self.start.hour()
    }

    /// Minutes past midnight of the slot start. This is the sort key.
    pub fn minute_of_day(&self) -> u32 {
        minute_of_day(self.start)
    }

    /// Compares by time of day only, ignoring the range end.
    pub fn cmp_time_of_day(&self, other: &Self) -> Ordering {
        self.minute_of_day().cmp(&other.minute_of_day())
    }

    fn key(&self) -> (u32, Option<u32>) {
        (minute_of_day(self.start), self.end.map(minute_of_day))
    }
}

pub fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

impl PartialEq for TimeSlot {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TimeSlot {}

impl Hash for TimeSlot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start.format(DISPLAY_FORMAT))?;
        if let Some(end) = self.end {
            write!(f, "{RANGE_SEPARATOR}{}", end.format(DISPLAY_FORMAT))?;
        }
        Ok(())
    }
}

impl FromStr for TimeSlot {
    type Err = PlannerError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || PlannerError::InvalidTimeSlot(raw.to_string());
        let parse = |part: &str| {
            NaiveTime::parse_from_str(part.trim(), PARSE_FORMAT).map_err(|_| invalid())
        };

        match raw.split_once(RANGE_SEPARATOR) {
            Some((start, end)) => Ok(Self::between(parse(start)?, parse(end)?)),
            None => Ok(Self::at(parse(raw)?)),
        }
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn formats_point_and_range_without_leading_zero() {
        assert_eq!(TimeSlot::at(time(5, 45)).to_string(), "5:45 AM");
        assert_eq!(
            TimeSlot::between(time(12, 30), time(13, 30)).to_string(),
            "12:30 PM - 1:30 PM"
        );
    }

    #[test]
    fn parses_what_it_formats() {
        let slot: TimeSlot = "9:00 AM - 12:30 PM".parse().unwrap();
        assert_eq!(slot, TimeSlot::between(time(9, 0), time(12, 30)));

        let point: TimeSlot = "05:45 PM".parse().unwrap();
        assert_eq!(point, TimeSlot::at(time(17, 45)));
    }

    #[test]
    fn rejects_garbage() {
        let err = "quarter past nine".parse::<TimeSlot>().unwrap_err();
        assert!(matches!(err, PlannerError::InvalidTimeSlot(_)));
    }

    #[test]
    fn equality_ignores_seconds() {
        let with_seconds = NaiveTime::from_hms_opt(14, 45, 31).unwrap();
        assert_eq!(TimeSlot::at(with_seconds), TimeSlot::at(time(14, 45)));
    }

    #[test]
    fn point_and_range_with_same_start_are_distinct_keys() {
        let point = TimeSlot::at(time(8, 0));
        let range = TimeSlot::between(time(8, 0), time(9, 0));
        assert_ne!(point, range);
        assert_eq!(point.cmp_time_of_day(&range), Ordering::Equal);
    }

    #[test]
    fn from_minute_of_day_rejects_overflow() {
        assert_eq!(
            TimeSlot::from_minute_of_day(5 * 60 + 45),
            Some(TimeSlot::at(time(5, 45)))
        );
        assert!(TimeSlot::from_minute_of_day(24 * 60).is_none());
    }
}
