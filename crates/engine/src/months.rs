//! Calendar months and the composite monthly-bucket key.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::EngineError;

/// A calendar month.
///
/// The canonical encoding is the lowercase full name (`"january"`), which is
/// how budgets store their month scope. Variant order follows the calendar,
/// so deriving `Ord` gives calendar ordering for free.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Canonical lowercase full name, as stored in the database.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }

    /// Three-letter label for chart axes ("Jan", "Feb", ...).
    pub fn short_name(self) -> &'static str {
        match self {
            Self::January => "Jan",
            Self::February => "Feb",
            Self::March => "Mar",
            Self::April => "Apr",
            Self::May => "May",
            Self::June => "Jun",
            Self::July => "Jul",
            Self::August => "Aug",
            Self::September => "Sep",
            Self::October => "Oct",
            Self::November => "Nov",
            Self::December => "Dec",
        }
    }

    /// Month number, 1 (January) to 12 (December).
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Month> {
        match number {
            1..=12 => Some(Self::ALL[number as usize - 1]),
            _ => None,
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Month {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|month| month.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::Validation(format!("invalid month: {value}")))
    }
}

/// Composite monthly-bucket key.
///
/// Buckets key on (year, month), never on a display string, so January 2023
/// and January 2024 stay distinct and sorting follows the calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: Month,
}

impl MonthKey {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    /// Key of the calendar month a timestamp falls in.
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        // month0() is 0..=11 by construction.
        Self {
            year: at.year(),
            month: Month::ALL[at.month0() as usize],
        }
    }

    /// The following calendar month.
    pub fn succ(self) -> Self {
        match self.month {
            Month::December => Self::new(self.year + 1, Month::January),
            month => Self::new(self.year, Month::ALL[month as usize + 1]),
        }
    }

    /// Midnight UTC on the first day of the month, or `None` for a year
    /// outside the supported calendar range.
    pub fn first_instant(self) -> Option<DateTime<Utc>> {
        let date = NaiveDate::from_ymd_opt(self.year, self.month.number(), 1)?;
        let at = date.and_hms_opt(0, 0, 0)?;
        Some(Utc.from_utc_datetime(&at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Month::try_from("january").unwrap(), Month::January);
        assert_eq!(Month::try_from("January").unwrap(), Month::January);
        assert_eq!(Month::try_from("DECEMBER").unwrap(), Month::December);
        assert!(Month::try_from("jan").is_err());
    }

    #[test]
    fn numbers_round_trip() {
        for month in Month::ALL {
            assert_eq!(Month::from_number(month.number()), Some(month));
        }
        assert_eq!(Month::from_number(0), None);
        assert_eq!(Month::from_number(13), None);
    }

    #[test]
    fn keys_from_different_years_do_not_collide() {
        let jan_2023 = MonthKey::new(2023, Month::January);
        let jan_2024 = MonthKey::new(2024, Month::January);
        assert_ne!(jan_2023, jan_2024);
        assert!(jan_2023 < jan_2024);
    }

    #[test]
    fn succ_wraps_december_into_next_year() {
        let dec = MonthKey::new(2024, Month::December);
        assert_eq!(dec.succ(), MonthKey::new(2025, Month::January));
        let feb = MonthKey::new(2024, Month::February);
        assert_eq!(feb.succ(), MonthKey::new(2024, Month::March));
    }

    #[test]
    fn key_derived_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 12, 30, 0).unwrap();
        assert_eq!(MonthKey::from_datetime(at), MonthKey::new(2024, Month::February));
    }

    #[test]
    fn first_instant_bounds_a_month() {
        let key = MonthKey::new(2024, Month::January);
        let start = key.first_instant().unwrap();
        let end = key.succ().first_instant().unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap());
    }
}
