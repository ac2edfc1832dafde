//! Calendar-day keys.
//!
//! Every date comparison in the tracker happens on `YYYY-MM-DD` strings.
//! Keys are always derived from the *local* calendar date, so a habit marked
//! at 23:59 stays on the day the user saw on the wall clock instead of
//! shifting to the UTC date.

use chrono::{Local, NaiveDate};

pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

pub fn parse_day_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DAY_KEY_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_key_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
        assert_eq!(day_key(date), "2026-03-07");
    }

    #[test]
    fn parse_day_key_round_trips() {
        let date = parse_day_key("2026-08-21").expect("valid key");
        assert_eq!(day_key(date), "2026-08-21");
    }

    #[test]
    fn parse_day_key_rejects_garbage() {
        assert_eq!(parse_day_key("not-a-date"), None);
        assert_eq!(parse_day_key("2026-13-01"), None);
        assert_eq!(parse_day_key(""), None);
    }
}
