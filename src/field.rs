//! Field types and the per-field parser.
//!
//! A Quartz expression is split on whitespace into six or seven raw fields.
//! Each raw field is classified into a [`ParsedField`] node here; nothing in
//! this module can fail. Strings that match no known shape fall through to
//! [`ParsedField::Single`] and are dealt with (or rejected) elsewhere.
//!
//! ## Recognition order
//!
//! The shapes overlap (`L-3` contains `-`, `5L` ends like `FRIL`, `1-5/2`
//! contains both `-` and `/`), so the first match wins:
//!
//! ```text
//! "*" "?" "L"          -> All / Any / Last
//! "LW"                 -> LastWeekday
//! L-<n>                -> LastOffset
//! <n>L | <ABC>L        -> LastWeekdayOfMonth
//! ...W                 -> NearestWeekday
//! ...#...              -> NthWeekday
//! ...-.../... | .../.. -> RangeWithInterval | Interval
//! ...-... (no comma)   -> Range
//! ...,...              -> List
//! anything else        -> Single
//! ```

use crate::error::ParseFieldTypeError;
use crate::lexicon::{leading_int, month_number, weekday_number};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the seven positions of a Quartz expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Second,
    Minute,
    Hour,
    DayOfMonth,
    Month,
    DayOfWeek,
    Year,
}

impl FieldType {
    /// All field types, in expression order.
    pub const ALL: [FieldType; 7] = [
        FieldType::Second,
        FieldType::Minute,
        FieldType::Hour,
        FieldType::DayOfMonth,
        FieldType::Month,
        FieldType::DayOfWeek,
        FieldType::Year,
    ];

    /// Wire name used by the JSON payload and `FromStr`.
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldType::Second => "second",
            FieldType::Minute => "minute",
            FieldType::Hour => "hour",
            FieldType::DayOfMonth => "dayOfMonth",
            FieldType::Month => "month",
            FieldType::DayOfWeek => "dayOfWeek",
            FieldType::Year => "year",
        }
    }

    /// Unit suffix appended to plain values (`5` + `秒`).
    pub const fn unit(self) -> &'static str {
        match self {
            FieldType::Second => "秒",
            FieldType::Minute => "分",
            FieldType::Hour => "時",
            FieldType::DayOfMonth => "日",
            FieldType::Month => "月",
            FieldType::DayOfWeek => "",
            FieldType::Year => "年",
        }
    }

    /// Japanese field name used in validation messages.
    pub const fn label(self) -> &'static str {
        match self {
            FieldType::Second => "秒",
            FieldType::Minute => "分",
            FieldType::Hour => "時",
            FieldType::DayOfMonth => "日",
            FieldType::Month => "月",
            FieldType::DayOfWeek => "曜日",
            FieldType::Year => "年",
        }
    }

    /// Inclusive numeric bounds accepted by the validator.
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            FieldType::Second | FieldType::Minute => (0, 59),
            FieldType::Hour => (0, 23),
            FieldType::DayOfMonth => (1, 31),
            FieldType::Month => (1, 12),
            FieldType::DayOfWeek => (1, 7),
            FieldType::Year => (1970, 2099),
        }
    }

    /// Largest value of a time-of-day field; `None` for calendar fields.
    pub const fn clock_max(self) -> Option<i64> {
        match self {
            FieldType::Second | FieldType::Minute => Some(59),
            FieldType::Hour => Some(23),
            _ => None,
        }
    }

    /// Whether `from > to` ranges wrap around instead of being rejected.
    pub const fn allows_wraparound(self) -> bool {
        !matches!(self, FieldType::Year)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = ParseFieldTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldTypeError(s.to_string()))
    }
}

/// Parsed shape of a single field.
///
/// Values stay as the raw text the user wrote (`"05"`, `"MON"`) so the
/// translator can echo them back; only the wraparound flag is computed up
/// front.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ParsedField {
    /// `*`
    All,
    /// `?`
    Any,
    /// `L`
    Last,
    /// `LW`: weekday nearest to the end of the month.
    LastWeekday,
    /// `L-n`: `n` days before the end of the month.
    LastOffset { offset: String },
    /// `nL` / `FRIL`: last given weekday of the month.
    LastWeekdayOfMonth { day: String },
    /// `nW`: weekday nearest to day `n`.
    NearestWeekday { day: String },
    /// `day#nth`
    NthWeekday { day: String, nth: String },
    /// `start/interval`, with `*` kept verbatim as the start.
    Interval { start: String, interval: String },
    RangeWithInterval { from: String, to: String, interval: String, is_wraparound: bool },
    Range { from: String, to: String, is_wraparound: bool },
    List { items: Vec<ParsedField> },
    Single { value: String },
}

impl ParsedField {
    /// Tag name as it appears in the JSON payload.
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedField::All => "all",
            ParsedField::Any => "any",
            ParsedField::Last => "last",
            ParsedField::LastWeekday => "lastWeekday",
            ParsedField::LastOffset { .. } => "lastOffset",
            ParsedField::LastWeekdayOfMonth { .. } => "lastWeekdayOfMonth",
            ParsedField::NearestWeekday { .. } => "nearestWeekday",
            ParsedField::NthWeekday { .. } => "nthWeekday",
            ParsedField::Interval { .. } => "interval",
            ParsedField::RangeWithInterval { .. } => "rangeWithInterval",
            ParsedField::Range { .. } => "range",
            ParsedField::List { .. } => "list",
            ParsedField::Single { .. } => "single",
        }
    }

    /// Literal value of a `Single` node.
    pub fn value(&self) -> Option<&str> {
        match self {
            ParsedField::Single { value } => Some(value),
            _ => None,
        }
    }

    /// Start of an `Interval` node.
    pub fn start(&self) -> Option<&str> {
        match self {
            ParsedField::Interval { start, .. } => Some(start),
            _ => None,
        }
    }

    /// Lower endpoint of a `Range` or `RangeWithInterval` node.
    pub fn range_from(&self) -> Option<&str> {
        match self {
            ParsedField::Range { from, .. } | ParsedField::RangeWithInterval { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Whether this is a plain `Single` value.
    pub fn is_single(&self) -> bool {
        matches!(self, ParsedField::Single { .. })
    }
}

/// Classify one raw field.
///
/// # Example
/// ```
/// use quartz_cron_jp::{FieldType, ParsedField, parse_field};
///
/// let parsed = parse_field("2#1", FieldType::DayOfWeek);
/// assert_eq!(parsed, ParsedField::NthWeekday { day: "2".into(), nth: "1".into() });
/// ```
pub fn parse_field(value: &str, field: FieldType) -> ParsedField {
    let parsed = classify(value, field);
    tracing::trace!(field = %field, raw = value, kind = parsed.kind(), "parsed field");
    parsed
}

fn classify(value: &str, field: FieldType) -> ParsedField {
    match value {
        "*" => return ParsedField::All,
        "?" => return ParsedField::Any,
        "L" => return ParsedField::Last,
        "LW" => return ParsedField::LastWeekday,
        _ => {}
    }

    if regex!(r"^L-\d+$").is_match(value) {
        return ParsedField::LastOffset { offset: value[2..].to_string() };
    }

    if regex!(r"^\d+L$").is_match(value) || regex!(r"(?i)^[a-z]{3}l$").is_match(value) {
        return ParsedField::LastWeekdayOfMonth { day: value[..value.len() - 1].to_string() };
    }

    if let Some(day) = value.strip_suffix('W').filter(|day| !day.is_empty()) {
        return ParsedField::NearestWeekday { day: day.to_string() };
    }

    if value.contains('#') {
        let (day, nth) = first_two(value, '#');
        return ParsedField::NthWeekday { day, nth };
    }

    if value.contains('/') {
        let (start, interval) = first_two(value, '/');
        if start.contains('-') {
            let (from, to) = first_two(&start, '-');
            let is_wraparound = is_wraparound(&from, &to, field);
            return ParsedField::RangeWithInterval { from, to, interval, is_wraparound };
        }
        return ParsedField::Interval { start, interval };
    }

    if value.contains('-') && !value.contains(',') {
        return range(value, field);
    }

    if value.contains(',') {
        return list(value, field);
    }

    ParsedField::Single { value: value.to_string() }
}

fn list(value: &str, field: FieldType) -> ParsedField {
    let mut seen: Vec<&str> = Vec::new();
    let mut items = Vec::new();

    for item in value.split(',') {
        let parsed = if item.contains('-') {
            range(item, field)
        } else if regex!(r"(?i)^\d+l$").is_match(item) {
            ParsedField::LastWeekdayOfMonth { day: item[..item.len() - 1].to_string() }
        } else if item.eq_ignore_ascii_case("L") {
            ParsedField::Last
        } else {
            if seen.contains(&item) {
                continue;
            }
            seen.push(item);
            ParsedField::Single { value: item.to_string() }
        };
        items.push(parsed);
    }

    ParsedField::List { items }
}

fn range(value: &str, field: FieldType) -> ParsedField {
    let (from, to) = first_two(value, '-');
    let is_wraparound = is_wraparound(&from, &to, field);
    ParsedField::Range { from, to, is_wraparound }
}

/// First two pieces of `value` split on `sep`; a missing piece is empty.
fn first_two(value: &str, sep: char) -> (String, String) {
    let mut parts = value.split(sep);
    let first = parts.next().unwrap_or_default().to_string();
    let second = parts.next().unwrap_or_default().to_string();
    (first, second)
}

/// `from > to` after mapping weekday/month names to their Quartz numbers.
fn is_wraparound(from: &str, to: &str, field: FieldType) -> bool {
    let number = |code: &str| match field {
        FieldType::DayOfWeek => weekday_number(code),
        FieldType::Month => month_number(code),
        _ => leading_int(code),
    };
    matches!((number(from), number(to)), (Some(from), Some(to)) if from > to)
}
