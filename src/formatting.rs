/*!
 * Text and date normalization for cell values.
 *
 * Spreadsheet exports carry stray whitespace, escaped entities that survived
 * a round of double escaping, and Excel `DateTime` values in ISO form. The
 * helpers here turn those into the plain strings the front-end displays.
 */

use chrono::{DateTime, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

/// Entity escapes decoded by `clean_text`, in order. `&amp;` goes before
/// `&lt;`/`&gt;` so doubly escaped markup such as `&amp;lt;b&amp;gt;` comes
/// out as `<b>`.
const ENTITY_ESCAPES: [(&str, &str); 5] = [
    ("&#10;", "\n"),
    ("&quot;", "\""),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
];

/// Separator placed between surviving lines of a cleaned value
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Long-form date rendering, e.g. "June 10, 2007"
const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Offset-less ISO forms: Excel's `1999-01-10T00:00:00.000`, then minute precision
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n?|\n").unwrap());

/// Decode the entity escapes listed in `ENTITY_ESCAPES`
pub fn decode_entities(text: &str) -> String {
    ENTITY_ESCAPES
        .iter()
        .fold(text.to_string(), |acc, (escaped, literal)| acc.replace(escaped, literal))
}

/// Clean a raw cell value.
///
/// Entities are decoded, blank lines removed, each remaining line trimmed and
/// the lines rejoined with a blank line between them. `None` and empty input
/// give an empty string.
///
/// Entities are decoded one level per call, so cleaning is idempotent except
/// for input escaped more than twice (`&amp;amp;lt;`).
pub fn clean_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let decoded = decode_entities(text);
    let lines: Vec<&str> = LINE_BREAK_REGEX
        .split(&decoded)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines.join(PARAGRAPH_SEPARATOR).trim().to_string()
}

/// Render an ISO date-time as "Month DD, YYYY".
///
/// Only values containing a `T` separator are parsed. Anything that is not a
/// date-time, or fails to parse, is returned trimmed but otherwise untouched.
pub fn normalize_air_date(value: &str) -> String {
    let value = value.trim();
    if !value.contains('T') {
        return value.to_string();
    }

    parse_iso_datetime(value)
        .map(|dt| dt.format(LONG_DATE_FORMAT).to_string())
        .unwrap_or_else(|| value.to_string())
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.naive_local());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Split a music cell into track titles.
///
/// Lines that are blank or consist only of digits are list indices left over
/// from the spreadsheet, not tracks, and are dropped.
pub fn split_music_tracks(value: Option<&str>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };

    let decoded = decode_entities(value);
    LINE_BREAK_REGEX
        .split(&decoded)
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.chars().all(|c| c.is_ascii_digit()))
        .map(|line| clean_text(Some(line)))
        .collect()
}
