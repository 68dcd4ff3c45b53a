//! Academic calendar rules: the term cycle, semester codes and ad windows.

use chrono::{Datelike, NaiveDate};

/// Terms in the order sessions cycle through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Term {
    Fall,
    Winter,
    Summer,
    FallWinter,
}

impl Term {
    /// Term of the `ordinal`-th generated session.
    pub fn for_ordinal(ordinal: u32) -> Self {
        match ordinal % 4 {
            0 => Self::Fall,
            1 => Self::Winter,
            2 => Self::Summer,
            _ => Self::FallWinter,
        }
    }

    /// Session name for the term starting in academic `year`.
    pub fn name(&self, year: i32) -> String {
        match self {
            Self::Fall => format!("{} Fall", year),
            Self::Winter => format!("{} Winter", year),
            Self::Summer => format!("{} Summer", year),
            Self::FallWinter => format!("{}-{} Fall-Winter", year, year + 1),
        }
    }

    /// First and last day of the term.
    pub fn dates(&self, year: i32) -> (NaiveDate, NaiveDate) {
        match self {
            Self::Fall => (ymd(year, 9, 1), ymd(year, 12, 31)),
            Self::Winter => (ymd(year, 1, 1), ymd(year, 4, 30)),
            Self::Summer => (ymd(year, 5, 1), ymd(year, 8, 31)),
            Self::FallWinter => (ymd(year, 9, 1), ymd(year + 1, 4, 30)),
        }
    }

    /// Whether the term is paid at two rates.
    pub fn has_second_rate(&self) -> bool {
        matches!(self, Self::FallWinter)
    }
}

/// Suffix appended to course codes to mark the semester a position runs in.
///
/// `H1-S` for sessions starting in January, `H1-F` for sessions ending in
/// December or July, `Y1-Y` for everything else.
pub fn semester_type(start_date: NaiveDate, end_date: NaiveDate) -> &'static str {
    if start_date.month() == 1 {
        "H1-S"
    } else if matches!(end_date.month(), 12 | 7) {
        "H1-F"
    } else {
        "Y1-Y"
    }
}

/// Advertising window for positions in a session starting on `start_date`.
///
/// September starts advertise through August, May starts through April, and
/// every other start through the December of the previous year.
pub fn ad_window(start_date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let year = start_date.year();
    match start_date.month() {
        9 => (ymd(year, 8, 1), ymd(year, 8, 31)),
        5 => (ymd(year, 4, 1), ymd(year, 4, 30)),
        _ => (ymd(year - 1, 12, 1), ymd(year - 1, 12, 31)),
    }
}

/// Fixed calendar dates used by the term table. Day numbers are always valid
/// for their month; years outside chrono's range fall back to the minimum date.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn terms_cycle_every_four_ordinals() {
        assert_eq!(Term::for_ordinal(0), Term::Fall);
        assert_eq!(Term::for_ordinal(1), Term::Winter);
        assert_eq!(Term::for_ordinal(2), Term::Summer);
        assert_eq!(Term::for_ordinal(3), Term::FallWinter);
        assert_eq!(Term::for_ordinal(4), Term::Fall);
    }

    #[test]
    fn fall_winter_spans_two_years() {
        assert_eq!(Term::FallWinter.name(2025), "2025-2026 Fall-Winter");
        assert_eq!(
            Term::FallWinter.dates(2025),
            (date(2025, 9, 1), date(2026, 4, 30))
        );
    }

    #[test]
    fn january_start_is_spring_half() {
        assert_eq!(semester_type(date(2026, 1, 1), date(2026, 4, 30)), "H1-S");
    }

    #[test]
    fn december_or_july_end_is_fall_half() {
        assert_eq!(semester_type(date(2025, 9, 1), date(2025, 12, 31)), "H1-F");
        assert_eq!(semester_type(date(2025, 5, 1), date(2025, 7, 31)), "H1-F");
    }

    #[test]
    fn other_sessions_are_full_year() {
        assert_eq!(semester_type(date(2025, 5, 1), date(2025, 8, 31)), "Y1-Y");
        assert_eq!(semester_type(date(2025, 9, 1), date(2026, 4, 30)), "Y1-Y");
    }

    #[test]
    fn september_start_advertises_in_august() {
        assert_eq!(
            ad_window(date(2025, 9, 1)),
            (date(2025, 8, 1), date(2025, 8, 31))
        );
    }

    #[test]
    fn may_start_advertises_in_april() {
        assert_eq!(
            ad_window(date(2025, 5, 1)),
            (date(2025, 4, 1), date(2025, 4, 30))
        );
    }

    #[test]
    fn january_start_advertises_in_previous_december() {
        assert_eq!(
            ad_window(date(2026, 1, 1)),
            (date(2025, 12, 1), date(2025, 12, 31))
        );
    }
}
