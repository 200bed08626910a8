//! Sender attribution.
//!
//! The text after a timestamp is either `Sender: message`, the rarer
//! `Sender - message`, or a system notification with no author at all
//! ("Alice added Bob", "Messages and calls are end-to-end encrypted").

use std::sync::LazyLock;

use regex::Regex;

/// Sender assigned to system and service notifications.
pub const SYSTEM_SENDER: &str = "group_notification";

/// Everything up to the first colon followed by whitespace.
static COLON_SENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?):\s").expect("colon sender pattern is valid"));

/// Everything up to the first hyphen, en dash or em dash surrounded by whitespace.
static DASH_SENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?)\s[-–—]\s").expect("dash sender pattern is valid"));

/// An international number prefix (`+44 7700 900123 `) followed by a label.
static PHONE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\+\d+(?:[ \-]\d+)*\s+(\D.*)$").expect("phone prefix pattern is valid")
});

/// The country code of a bare number (`+44 7700 900123`).
static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\+\d+\s+(.+)$").expect("country code pattern is valid"));

/// Direction marks exports wrap around phone numbers.
const BIDI_MARKS: &[char] = &[
    '\u{200e}', '\u{200f}', '\u{202a}', '\u{202b}', '\u{202c}', '\u{202d}', '\u{202e}',
];

/// Splits a message into `(sender, body)`.
///
/// Precedence:
/// 1. `Sender: body`, split at the first `": "`
/// 2. `Sender - body`, split at the first spaced `-`, `–` or `—`
/// 3. otherwise a notification: `(SYSTEM_SENDER, whole message)`
///
/// The sender is returned raw; see [`normalize_sender`]. The body is trimmed.
///
/// # Example
///
/// ```rust
/// use chatscope::parsing::{split_sender, SYSTEM_SENDER};
///
/// assert_eq!(split_sender("Alice: hi there\n"), ("Alice", "hi there"));
/// assert_eq!(split_sender("Bob left"), (SYSTEM_SENDER, "Bob left"));
/// ```
pub fn split_sender(message: &str) -> (&str, &str) {
    let captures = COLON_SENDER
        .captures(message)
        .or_else(|| DASH_SENDER.captures(message));

    match captures {
        Some(caps) => {
            let (Some(whole), Some(sender)) = (caps.get(0), caps.get(1)) else {
                return (SYSTEM_SENDER, message.trim());
            };
            (sender.as_str(), message[whole.end()..].trim())
        }
        None => (SYSTEM_SENDER, message.trim()),
    }
}

/// Cleans a raw sender name.
///
/// Removes direction marks and surrounding whitespace and, when
/// `strip_phone_prefix` is set, a leading international number in front of a
/// label (`"+1 555 1234 Alice"` becomes `"Alice"`). A bare number only loses
/// its country code (`"+44 7700 900123"` becomes `"7700 900123"`). A name that cleans down to nothing becomes
/// [`SYSTEM_SENDER`].
pub fn normalize_sender(raw: &str, strip_phone_prefix: bool) -> String {
    let cleaned: String = raw.chars().filter(|c| !BIDI_MARKS.contains(c)).collect();
    let cleaned = cleaned.trim();

    let name = if strip_phone_prefix {
        PHONE_PREFIX
            .captures(cleaned)
            .or_else(|| COUNTRY_CODE.captures(cleaned))
            .and_then(|caps| caps.get(1))
            .map_or(cleaned, |rest| rest.as_str().trim())
    } else {
        cleaned
    };

    if name.is_empty() {
        SYSTEM_SENDER.to_string()
    } else {
        name.to_string()
    }
}
