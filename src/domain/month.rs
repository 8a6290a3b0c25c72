use chrono::{Datelike, Utc};
use std::fmt;

/// Literal stored in an experience's `end` field while the role is ongoing.
pub const PRESENT: &str = "Present";

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A calendar month. Parsed from the month-picker wire form (`2021-03`)
/// and stored/displayed as a `"Mon, YYYY"` label (`Mar, 2021`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Month { year, month })
        } else {
            None
        }
    }

    /// Parses the `YYYY-MM` value emitted by the month picker.
    pub fn from_picker(input: &str) -> Option<Self> {
        let (year, month) = input.trim().split_once('-')?;
        let year: i32 = year.parse().ok()?;
        let month: u32 = month.parse().ok()?;
        Month::new(year, month)
    }

    /// Parses the stored `"Mon, YYYY"` label form.
    pub fn parse_label(label: &str) -> Option<Self> {
        let (name, year) = label.split_once(',')?;
        let month = MONTH_NAMES
            .iter()
            .position(|m| m.eq_ignore_ascii_case(name.trim()))? as u32
            + 1;
        let year: i32 = year.trim().parse().ok()?;
        Month::new(year, month)
    }

    pub fn current() -> Self {
        let today = Utc::now().date_naive();
        Month {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Months since year zero. Gives a total order across years.
    pub fn index(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// Sort rank of a stored end date, higher = more recent.
/// `Present` ranks as the current month; labels that no longer parse
/// rank below every real date so they land last in a newest-first order.
pub fn end_rank(raw: &str) -> i64 {
    if raw == PRESENT {
        return Month::current().index();
    }
    Month::parse_label(raw).map_or(i64::MIN, |m| m.index())
}

/// Sort rank of a stored start date, same scale as [`end_rank`].
pub fn start_rank(raw: &str) -> i64 {
    Month::parse_label(raw).map_or(i64::MIN, |m| m.index())
}

/// The year token of a stored date label: the text after the comma,
/// falling back to the raw string when there is none (`Present` stays
/// `Present`).
pub fn year_token(raw: &str) -> &str {
    match raw.split_once(',') {
        Some((_, year)) => year.trim(),
        None => raw,
    }
}

/// Display period for an experience card, e.g. `"2020 - Present"`.
pub fn period(start: &str, end: &str) -> String {
    format!("{} - {}", year_token(start), year_token(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_picker_input() {
        assert_eq!(Month::from_picker("2021-03"), Month::new(2021, 3));
        assert_eq!(Month::from_picker("1999-12"), Month::new(1999, 12));
        assert_eq!(Month::from_picker("2021-13"), None);
        assert_eq!(Month::from_picker("2021"), None);
        assert_eq!(Month::from_picker(""), None);
    }

    #[test]
    fn formats_and_reparses_label() {
        let month = Month::from_picker("2021-03").unwrap();
        assert_eq!(month.to_string(), "Mar, 2021");
        assert_eq!(Month::parse_label("Mar, 2021"), Some(month));
        assert_eq!(Month::parse_label("mar, 2021"), Some(month));
        assert_eq!(Month::parse_label("Smarch, 2021"), None);
        assert_eq!(Month::parse_label("Present"), None);
    }

    #[test]
    fn month_ordering_spans_years() {
        let dec_2019 = Month::parse_label("Dec, 2019").unwrap();
        let jan_2020 = Month::parse_label("Jan, 2020").unwrap();
        assert!(dec_2019.index() < jan_2020.index());
        assert_eq!(jan_2020.index() - dec_2019.index(), 1);
    }

    #[test]
    fn present_ranks_as_current_month() {
        assert_eq!(end_rank(PRESENT), Month::current().index());
        assert!(end_rank(PRESENT) > end_rank("Dec, 2019"));
    }

    #[test]
    fn unparseable_dates_rank_last() {
        assert_eq!(end_rank("sometime"), i64::MIN);
        assert!(end_rank("sometime") < end_rank("Jan, 1970"));
        assert_eq!(start_rank(""), i64::MIN);
    }

    #[test]
    fn period_uses_year_tokens_with_fallback() {
        assert_eq!(period("Jan, 2020", "Present"), "2020 - Present");
        assert_eq!(period("Mar, 2021", "Dec, 2022"), "2021 - 2022");
        assert_eq!(year_token("Present"), "Present");
        assert_eq!(year_token("Mar, 2021"), "2021");
    }
}
