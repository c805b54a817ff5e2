//! Text formatting shared by the view model and the CSV export.

use std::fmt::Display;

use chrono::{DateTime, TimeZone, Utc};

/// Short US-style date in `tz`, e.g. `Mar 4, 2024`.
pub fn format_join_date<Tz>(at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format("%b %-d, %Y").to_string()
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Neutralises control characters so record text cannot drive the terminal.
///
/// Tabs and newlines become spaces; every other control character (including ESC,
/// which starts ANSI sequences) becomes U+FFFD.
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .map(|ch| match ch {
            '\t' | '\n' | '\r' => ' ',
            c if c.is_control() => char::REPLACEMENT_CHARACTER,
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_join_date_uses_short_month_and_unpadded_day() {
        let at = Utc
            .with_ymd_and_hms(2024, 3, 4, 12, 0, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(format_join_date(&at, &Utc), "Mar 4, 2024");
    }

    #[test]
    fn test_join_date_is_read_in_the_given_zone() {
        let at = Utc
            .with_ymd_and_hms(2024, 12, 31, 22, 0, 0)
            .single()
            .expect("valid timestamp");
        let tz = FixedOffset::east_opt(3 * 3600).expect("valid offset");
        assert_eq!(format_join_date(&at, &tz), "Jan 1, 2025");
    }

    #[test]
    fn test_sanitize_text_strips_escape_sequences() {
        assert_eq!(sanitize_text("a\u{1b}[31mb"), "a\u{fffd}[31mb");
        assert_eq!(sanitize_text("two\nlines"), "two lines");
        assert_eq!(sanitize_text("Zoë"), "Zoë");
    }

    #[test]
    fn test_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }
}
