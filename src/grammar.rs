//! The catalog of known transcript timestamp grammars.
//!
//! Chat exports vary by platform, locale and app version. Each
//! [`FormatGrammar`] pairs a timestamp regex with the chrono template that
//! reads it back. Several grammars share one regex and differ only in the
//! day/month order of their template; [`FormatGrammar::all`] fixes the
//! priority order that decides between them.
//!
//! | Grammar | Example |
//! |---------|---------|
//! | US/UK 12h comma | `1/5/23, 10:15 AM - Alice: Hi` |
//! | US/UK 12h no comma | `1/5/23 10:15 AM - Alice: Hi` |
//! | US/UK 24h comma | `1/5/23, 22:15 - Alice: Hi` |
//! | US/UK 24h no comma | `1/5/23 22:15 - Alice: Hi` |
//! | Bracketed with seconds | `[1/5/23, 22:15:09] Alice: Hi` |
//! | DD/MM/YYYY | `15/01/2023, 22:15 - Alice: Hi` |
//! | ISO | `2023-01-15 22:15:09 - Alice: Hi` |
//! | European | `15.01.23, 22:15 - Alice: Hi` |

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

const TWELVE_HOUR_COMMA: &str = r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s[AaPp][Mm]\s-\s";
const TWELVE_HOUR_NO_COMMA: &str = r"\d{1,2}/\d{1,2}/\d{2,4}\s\d{1,2}:\d{2}\s[AaPp][Mm]\s-\s";
const TWENTY_FOUR_HOUR_COMMA: &str = r"\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}\s-\s";
const TWENTY_FOUR_HOUR_NO_COMMA: &str = r"\d{1,2}/\d{1,2}/\d{2,4}\s\d{1,2}:\d{2}\s-\s";
const BRACKETED_SECONDS: &str = r"\[\d{1,2}/\d{1,2}/\d{2,4},\s\d{1,2}:\d{2}:\d{2}\]\s";
const FULL_YEAR_COMMA: &str = r"\d{1,2}/\d{1,2}/\d{4},\s\d{1,2}:\d{2}\s-\s";
const ISO: &str = r"\d{4}-\d{2}-\d{2}\s\d{1,2}:\d{2}:\d{2}\s-\s";
const EUROPEAN: &str = r"\d{1,2}\.\d{1,2}\.\d{2,4},\s\d{1,2}:\d{2}\s-\s";

/// One known transcript dialect.
///
/// Variants are declared in detection priority order. When two grammars share
/// a pattern (for example [`UsTwelveHourComma`](Self::UsTwelveHourComma) and
/// [`UkTwelveHourComma`](Self::UkTwelveHourComma)) the earlier one wins
/// detection; the date parser still retries every template, so a UK export
/// with a day above 12 is read correctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatGrammar {
    /// `1/5/23, 10:15 AM - ` read as month/day
    UsTwelveHourComma,
    /// `5/1/23, 10:15 AM - ` read as day/month
    UkTwelveHourComma,
    /// `1/5/23 10:15 AM - ` read as month/day
    UsTwelveHour,
    /// `5/1/23 10:15 AM - ` read as day/month
    UkTwelveHour,
    /// `1/5/23, 22:15 - ` read as month/day
    UsTwentyFourHourComma,
    /// `5/1/23, 22:15 - ` read as day/month
    UkTwentyFourHourComma,
    /// `5/1/2023, 22:15 - ` read as day/month
    UkTwentyFourHourCommaFullYear,
    /// `1/5/23 22:15 - ` read as month/day
    UsTwentyFourHour,
    /// `5/1/23 22:15 - ` read as day/month
    UkTwentyFourHour,
    /// `[1/5/23, 22:15:09] `
    BracketedSeconds,
    /// `15/01/2023, 22:15 - `
    DayMonthFullYear,
    /// `2023-01-15 22:15:09 - `
    Iso,
    /// `15.01.23, 22:15 - `
    European,
}

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FormatGrammar::all()
        .iter()
        .map(|grammar| Regex::new(grammar.pattern()).expect("catalog patterns are valid"))
        .collect()
});

impl FormatGrammar {
    /// Grammar assumed when nothing in the sample matches.
    pub const DEFAULT: FormatGrammar = FormatGrammar::UsTwelveHourComma;

    /// Returns every grammar in detection priority order.
    pub fn all() -> &'static [FormatGrammar] {
        &[
            FormatGrammar::UsTwelveHourComma,
            FormatGrammar::UkTwelveHourComma,
            FormatGrammar::UsTwelveHour,
            FormatGrammar::UkTwelveHour,
            FormatGrammar::UsTwentyFourHourComma,
            FormatGrammar::UkTwentyFourHourComma,
            FormatGrammar::UkTwentyFourHourCommaFullYear,
            FormatGrammar::UsTwentyFourHour,
            FormatGrammar::UkTwentyFourHour,
            FormatGrammar::BracketedSeconds,
            FormatGrammar::DayMonthFullYear,
            FormatGrammar::Iso,
            FormatGrammar::European,
        ]
    }

    /// Returns the unanchored regex source matching this grammar's timestamp
    /// prefix, including the trailing separator.
    pub fn pattern(self) -> &'static str {
        match self {
            FormatGrammar::UsTwelveHourComma | FormatGrammar::UkTwelveHourComma => {
                TWELVE_HOUR_COMMA
            }
            FormatGrammar::UsTwelveHour | FormatGrammar::UkTwelveHour => TWELVE_HOUR_NO_COMMA,
            FormatGrammar::UsTwentyFourHourComma
            | FormatGrammar::UkTwentyFourHourComma
            | FormatGrammar::UkTwentyFourHourCommaFullYear => TWENTY_FOUR_HOUR_COMMA,
            FormatGrammar::UsTwentyFourHour | FormatGrammar::UkTwentyFourHour => {
                TWENTY_FOUR_HOUR_NO_COMMA
            }
            FormatGrammar::BracketedSeconds => BRACKETED_SECONDS,
            FormatGrammar::DayMonthFullYear => FULL_YEAR_COMMA,
            FormatGrammar::Iso => ISO,
            FormatGrammar::European => EUROPEAN,
        }
    }

    /// Returns the compiled pattern. Compiled once per process.
    pub fn regex(self) -> &'static Regex {
        &COMPILED[self.index()]
    }

    /// Returns the chrono template that reads a matched timestamp fragment.
    pub fn date_template(self) -> &'static str {
        match self {
            FormatGrammar::UsTwelveHourComma => "%m/%d/%y, %I:%M %p - ",
            FormatGrammar::UkTwelveHourComma => "%d/%m/%y, %I:%M %p - ",
            FormatGrammar::UsTwelveHour => "%m/%d/%y %I:%M %p - ",
            FormatGrammar::UkTwelveHour => "%d/%m/%y %I:%M %p - ",
            FormatGrammar::UsTwentyFourHourComma => "%m/%d/%y, %H:%M - ",
            FormatGrammar::UkTwentyFourHourComma => "%d/%m/%y, %H:%M - ",
            FormatGrammar::UkTwentyFourHourCommaFullYear => "%d/%m/%Y, %H:%M - ",
            FormatGrammar::UsTwentyFourHour => "%m/%d/%y %H:%M - ",
            FormatGrammar::UkTwentyFourHour => "%d/%m/%y %H:%M - ",
            FormatGrammar::BracketedSeconds => "[%m/%d/%y, %H:%M:%S] ",
            FormatGrammar::DayMonthFullYear => "%d/%m/%Y, %H:%M - ",
            FormatGrammar::Iso => "%Y-%m-%d %H:%M:%S - ",
            FormatGrammar::European => "%d.%m.%y, %H:%M - ",
        }
    }

    /// Returns the human-readable name of this grammar.
    pub fn name(self) -> &'static str {
        match self {
            FormatGrammar::UsTwelveHourComma => "US 12h comma",
            FormatGrammar::UkTwelveHourComma => "UK 12h comma",
            FormatGrammar::UsTwelveHour => "US 12h no comma",
            FormatGrammar::UkTwelveHour => "UK 12h no comma",
            FormatGrammar::UsTwentyFourHourComma => "US 24h comma",
            FormatGrammar::UkTwentyFourHourComma => "UK 24h comma",
            FormatGrammar::UkTwentyFourHourCommaFullYear => "UK 24h comma full year",
            FormatGrammar::UsTwentyFourHour => "US 24h no comma",
            FormatGrammar::UkTwentyFourHour => "UK 24h no comma",
            FormatGrammar::BracketedSeconds => "Bracketed with seconds",
            FormatGrammar::DayMonthFullYear => "DD/MM/YYYY format",
            FormatGrammar::Iso => "ISO format",
            FormatGrammar::European => "European format",
        }
    }

    /// Returns the short identifier used on the command line and in serde.
    pub fn slug(self) -> &'static str {
        match self {
            FormatGrammar::UsTwelveHourComma => "us-twelve-hour-comma",
            FormatGrammar::UkTwelveHourComma => "uk-twelve-hour-comma",
            FormatGrammar::UsTwelveHour => "us-twelve-hour",
            FormatGrammar::UkTwelveHour => "uk-twelve-hour",
            FormatGrammar::UsTwentyFourHourComma => "us-twenty-four-hour-comma",
            FormatGrammar::UkTwentyFourHourComma => "uk-twenty-four-hour-comma",
            FormatGrammar::UkTwentyFourHourCommaFullYear => "uk-twenty-four-hour-comma-full-year",
            FormatGrammar::UsTwentyFourHour => "us-twenty-four-hour",
            FormatGrammar::UkTwentyFourHour => "uk-twenty-four-hour",
            FormatGrammar::BracketedSeconds => "bracketed-seconds",
            FormatGrammar::DayMonthFullYear => "day-month-full-year",
            FormatGrammar::Iso => "iso",
            FormatGrammar::European => "european",
        }
    }

    /// Returns `true` if the template keeps seconds.
    pub fn has_seconds(self) -> bool {
        self.date_template().contains("%S")
    }

    /// Renders a timestamp the way this grammar writes it, separator included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatscope::FormatGrammar;
    /// use chrono::NaiveDate;
    ///
    /// let ts = NaiveDate::from_ymd_opt(2023, 1, 5).unwrap().and_hms_opt(10, 15, 0).unwrap();
    /// assert_eq!(FormatGrammar::UsTwelveHourComma.format_timestamp(&ts), "01/05/23, 10:15 AM - ");
    /// ```
    pub fn format_timestamp(self, timestamp: &NaiveDateTime) -> String {
        timestamp.format(self.date_template()).to_string()
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FormatGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FormatGrammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        FormatGrammar::all()
            .iter()
            .copied()
            .find(|g| g.slug() == wanted || g.name().to_lowercase() == wanted)
            .ok_or_else(|| {
                format!(
                    "Unknown grammar: '{}'. Expected one of: {}",
                    s,
                    FormatGrammar::all()
                        .iter()
                        .map(|g| g.slug())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_catalog_size_and_order() {
        let all = FormatGrammar::all();
        assert!(all.len() >= 12);
        assert_eq!(all[0], FormatGrammar::DEFAULT);
        for (i, grammar) in all.iter().enumerate() {
            assert_eq!(grammar.index(), i, "{grammar} is out of declaration order");
        }
    }

    #[test]
    fn test_all_patterns_compile() {
        for grammar in FormatGrammar::all() {
            assert_eq!(grammar.regex().as_str(), grammar.pattern());
        }
    }

    #[test]
    fn test_us_uk_share_pattern() {
        assert_eq!(
            FormatGrammar::UsTwelveHourComma.pattern(),
            FormatGrammar::UkTwelveHourComma.pattern()
        );
        assert_ne!(
            FormatGrammar::UsTwelveHourComma.date_template(),
            FormatGrammar::UkTwelveHourComma.date_template()
        );
    }

    #[test]
    fn test_patterns_match_their_own_output() {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(22, 7, 9)
            .unwrap();
        for grammar in FormatGrammar::all() {
            let rendered = grammar.format_timestamp(&ts);
            assert!(
                grammar.regex().is_match(&rendered),
                "{grammar} does not match {rendered:?}"
            );
        }
    }

    #[test]
    fn test_templates_parse_their_own_output() {
        let ts = NaiveDate::from_ymd_opt(2023, 1, 15)
            .unwrap()
            .and_hms_opt(22, 7, 0)
            .unwrap();
        for grammar in FormatGrammar::all() {
            let rendered = grammar.format_timestamp(&ts);
            let parsed = NaiveDateTime::parse_from_str(&rendered, grammar.date_template())
                .unwrap_or_else(|e| panic!("{grammar} failed on {rendered:?}: {e}"));
            assert_eq!(parsed, ts);
        }
    }

    #[test]
    fn test_twelve_hour_matches_lowercase_and_narrow_space() {
        let regex = FormatGrammar::UsTwelveHourComma.regex();
        assert!(regex.is_match("1/5/23, 10:15 am - Alice: hi"));
        assert!(regex.is_match("1/5/23, 10:15\u{202f}PM - Alice: hi"));
        assert!(!regex.is_match("1/5/23, 10:15 - Alice: hi"));
    }

    #[test]
    fn test_seconds_flag() {
        assert!(FormatGrammar::Iso.has_seconds());
        assert!(FormatGrammar::BracketedSeconds.has_seconds());
        assert!(!FormatGrammar::UsTwelveHourComma.has_seconds());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(FormatGrammar::from_str("iso").unwrap(), FormatGrammar::Iso);
        assert_eq!(
            FormatGrammar::from_str("US 12h comma").unwrap(),
            FormatGrammar::UsTwelveHourComma
        );
        assert_eq!(
            FormatGrammar::from_str("Bracketed-Seconds").unwrap(),
            FormatGrammar::BracketedSeconds
        );
        assert!(FormatGrammar::from_str("klingon").is_err());
    }

    #[test]
    fn test_slug_round_trip() {
        for grammar in FormatGrammar::all() {
            assert_eq!(FormatGrammar::from_str(grammar.slug()).unwrap(), *grammar);
        }
    }

    #[test]
    fn test_serde_uses_slug() {
        let json = serde_json::to_string(&FormatGrammar::UkTwentyFourHourCommaFullYear).unwrap();
        assert_eq!(json, "\"uk-twenty-four-hour-comma-full-year\"");
        let back: FormatGrammar = serde_json::from_str("\"european\"").unwrap();
        assert_eq!(back, FormatGrammar::European);
    }
}
