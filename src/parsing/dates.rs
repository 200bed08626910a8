//! Timestamp parsing.
//!
//! Dates are parsed column-wise first: every catalog template is tried
//! against all fragments, in priority order, and the first template that reads
//! every fragment wins. This tolerates a detector that picked the wrong
//! day/month variant. Only if no template fits the whole column does the
//! flexible per-row interpreter run, and rows it can't read become `None`.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{ChatscopeError, Result};
use crate::grammar::FormatGrammar;

/// Date layouts tried by the flexible interpreter, month-first before day-first.
const FLEXIBLE_DATES: &[&str] = &[
    "%m/%d/%y", "%m/%d/%Y", "%d/%m/%y", "%d/%m/%Y", "%Y/%m/%d", "%Y-%m-%d", "%d-%m-%y",
    "%d-%m-%Y", "%m-%d-%y", "%m-%d-%Y", "%d.%m.%y", "%d.%m.%Y", "%Y.%m.%d",
];

/// Time layouts tried by the flexible interpreter.
const FLEXIBLE_TIMES: &[&str] = &["%I:%M:%S %p", "%I:%M %p", "%H:%M:%S", "%H:%M"];

/// Which strategy produced the parsed timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "grammar", rename_all = "snake_case")]
pub enum DateStrategy {
    /// One catalog template read every fragment.
    Template(FormatGrammar),
    /// Fragments were interpreted one by one; failures became `None`.
    Flexible,
}

impl std::fmt::Display for DateStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateStrategy::Template(grammar) => write!(f, "template '{}'", grammar.date_template()),
            DateStrategy::Flexible => f.write_str("flexible"),
        }
    }
}

/// Parsed timestamp column, aligned with the input fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDates {
    pub strategy: DateStrategy,
    pub values: Vec<Option<NaiveDateTime>>,
}

impl ParsedDates {
    /// Number of fragments that could not be parsed.
    pub fn failed(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }
}

/// Replaces the no-break spaces exports put before AM/PM with plain spaces.
fn normalize_spaces(fragment: &str) -> std::borrow::Cow<'_, str> {
    if fragment.contains(['\u{202f}', '\u{a0}']) {
        fragment.replace(['\u{202f}', '\u{a0}'], " ").into()
    } else {
        fragment.into()
    }
}

/// `%Y` accepts any digit count in chrono; reject years that were really `%y`.
fn plausible(parsed: NaiveDateTime, template: &str) -> Option<NaiveDateTime> {
    if template.contains("%Y") && parsed.year() < 1000 {
        return None;
    }
    Some(parsed)
}

/// Parses one fragment with one chrono template.
pub fn parse_with_template(fragment: &str, template: &str) -> Option<NaiveDateTime> {
    let fragment = normalize_spaces(fragment);
    NaiveDateTime::parse_from_str(&fragment, template)
        .ok()
        .and_then(|parsed| plausible(parsed, template))
}

/// Interprets a fragment without knowing its grammar.
///
/// Strips brackets, parentheses, commas and the trailing `-` separator, then
/// tries each date layout against each time layout.
pub fn parse_flexible(fragment: &str) -> Option<NaiveDateTime> {
    let fragment = normalize_spaces(fragment);
    let trimmed = fragment.trim().trim_end_matches('-').trim();
    let trimmed = trimmed.trim_start_matches(['[', '(']).trim_end_matches([']', ')']);
    let cleaned = trimmed
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.is_empty() {
        return None;
    }

    FLEXIBLE_DATES.iter().find_map(|date| {
        FLEXIBLE_TIMES.iter().find_map(|time| {
            let template = format!("{date} {time}");
            NaiveDateTime::parse_from_str(&cleaned, &template)
                .ok()
                .and_then(|parsed| plausible(parsed, &template))
        })
    })
}

/// Parses a column of timestamp fragments.
///
/// With `flexible` disabled, a column that no template reads completely is a
/// [`DateParseFailure`](ChatscopeError::DateParseFailure). With it enabled the
/// column falls back to [`parse_flexible`]; it still fails if not a single
/// fragment could be read.
pub fn parse_dates(fragments: &[&str], flexible: bool) -> Result<ParsedDates> {
    if fragments.is_empty() {
        return Err(ChatscopeError::date_parse_failure(0));
    }

    for grammar in FormatGrammar::all() {
        let template = grammar.date_template();
        let column: Option<Vec<NaiveDateTime>> = fragments
            .iter()
            .map(|fragment| parse_with_template(fragment, template))
            .collect();

        if let Some(column) = column {
            return Ok(ParsedDates {
                strategy: DateStrategy::Template(*grammar),
                values: column.into_iter().map(Some).collect(),
            });
        }
    }

    if !flexible {
        return Err(ChatscopeError::date_parse_failure(fragments.len()));
    }

    let values: Vec<Option<NaiveDateTime>> =
        fragments.iter().map(|fragment| parse_flexible(fragment)).collect();

    if values.iter().all(Option::is_none) {
        return Err(ChatscopeError::date_parse_failure(fragments.len()));
    }

    Ok(ParsedDates {
        strategy: DateStrategy::Flexible,
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate, Timelike};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap()
    }

    #[test]
    fn test_parse_with_template_us() {
        let parsed = parse_with_template("1/5/23, 10:15 AM - ", "%m/%d/%y, %I:%M %p - ");
        assert_eq!(parsed, Some(dt(2023, 1, 5, 10, 15, 0)));
    }

    #[test]
    fn test_parse_with_template_narrow_space() {
        let parsed = parse_with_template("1/5/23, 10:15\u{202f}PM - ", "%m/%d/%y, %I:%M %p - ");
        assert_eq!(parsed, Some(dt(2023, 1, 5, 22, 15, 0)));
    }

    #[test]
    fn test_two_digit_year_rejected_by_full_year_template() {
        assert_eq!(
            parse_with_template("15/01/23, 10:15 - ", "%d/%m/%Y, %H:%M - "),
            None
        );
    }

    #[test]
    fn test_four_digit_year_rejected_by_short_year_template() {
        assert_eq!(
            parse_with_template("15/01/2023, 10:15 - ", "%d/%m/%y, %H:%M - "),
            None
        );
    }

    #[test]
    fn test_column_prefers_first_template() {
        let fragments = ["1/5/23, 10:15 AM - ", "1/6/23, 11:00 PM - "];
        let parsed = parse_dates(&fragments, true).unwrap();
        assert_eq!(
            parsed.strategy,
            DateStrategy::Template(FormatGrammar::UsTwelveHourComma)
        );
        assert_eq!(parsed.values[0], Some(dt(2023, 1, 5, 10, 15, 0)));
        assert_eq!(parsed.values[1], Some(dt(2023, 1, 6, 23, 0, 0)));
    }

    #[test]
    fn test_column_retries_day_first() {
        // 15 can't be a month, so the US template fails on the whole column.
        let fragments = ["1/5/23, 10:15 AM - ", "15/5/23, 10:16 AM - "];
        let parsed = parse_dates(&fragments, true).unwrap();
        assert_eq!(
            parsed.strategy,
            DateStrategy::Template(FormatGrammar::UkTwelveHourComma)
        );
        assert_eq!(parsed.values[0], Some(dt(2023, 5, 1, 10, 15, 0)));
    }

    #[test]
    fn test_two_digit_year_window() {
        let fragments = ["1/5/85, 10:15 AM - ", "1/5/69, 10:16 AM - ", "1/5/70, 10:17 AM - "];
        let parsed = parse_dates(&fragments, true).unwrap();
        assert_eq!(
            parsed.strategy,
            DateStrategy::Template(FormatGrammar::UsTwelveHourComma)
        );
        let years: Vec<i32> = parsed.values.iter().map(|v| v.unwrap().year()).collect();
        assert_eq!(years, [1985, 2069, 1970]);
    }

    #[test]
    fn test_column_full_year() {
        let fragments = ["15/01/2023, 22:15 - ", "16/01/2023, 08:00 - "];
        let parsed = parse_dates(&fragments, true).unwrap();
        assert_eq!(
            parsed.strategy,
            DateStrategy::Template(FormatGrammar::UkTwentyFourHourCommaFullYear)
        );
        assert_eq!(parsed.values[1], Some(dt(2023, 1, 16, 8, 0, 0)));
    }

    #[test]
    fn test_column_iso_keeps_seconds() {
        let parsed = parse_dates(&["2023-01-15 22:15:09 - "], true).unwrap();
        assert_eq!(parsed.strategy, DateStrategy::Template(FormatGrammar::Iso));
        assert_eq!(parsed.values[0].unwrap().second(), 9);
    }

    #[test]
    fn test_flexible_fallback_coerces_failures() {
        let fragments = ["26.10.2025, 20:40 - ", "garbage - ", "27.10.2025, 08:05 - "];
        let parsed = parse_dates(&fragments, true).unwrap();
        assert_eq!(parsed.strategy, DateStrategy::Flexible);
        assert_eq!(parsed.values[0], Some(dt(2025, 10, 26, 20, 40, 0)));
        assert_eq!(parsed.values[1], None);
        assert_eq!(parsed.values[2], Some(dt(2025, 10, 27, 8, 5, 0)));
        assert_eq!(parsed.failed(), 1);
    }

    #[test]
    fn test_flexible_disabled_fails() {
        let fragments = ["26.10.2025, 20:40 - "];
        let err = parse_dates(&fragments, false).unwrap_err();
        assert!(err.is_date_parse_failure());
    }

    #[test]
    fn test_nothing_parses() {
        let err = parse_dates(&["99/99/99, 99:99 - "], true).unwrap_err();
        assert!(err.is_date_parse_failure());
        let err = parse_dates(&[], true).unwrap_err();
        assert!(err.is_date_parse_failure());
    }

    #[test]
    fn test_parse_flexible_variants() {
        assert_eq!(
            parse_flexible("[05.01.2023, 10:15:30] "),
            Some(dt(2023, 1, 5, 10, 15, 30))
        );
        assert_eq!(
            parse_flexible("(2023/01/05 10:15:30) - "),
            Some(dt(2023, 1, 5, 10, 15, 30))
        );
        assert_eq!(
            parse_flexible("05-01-2023 10:15 - "),
            Some(dt(2023, 1, 5, 10, 15, 0))
        );
        assert_eq!(
            parse_flexible("1/5/2023 9:05 pm - "),
            Some(dt(2023, 1, 5, 21, 5, 0))
        );
        assert_eq!(parse_flexible(" - "), None);
        assert_eq!(parse_flexible("not a date"), None);
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(DateStrategy::Flexible.to_string(), "flexible");
        assert!(
            DateStrategy::Template(FormatGrammar::Iso)
                .to_string()
                .contains("%Y-%m-%d")
        );
    }
}
