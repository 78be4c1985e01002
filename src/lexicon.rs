//! Static lookup tables and formatting helpers shared by every stage.
//!
//! Quartz numbers weekdays from Sunday (`1 = SUN` … `7 = SAT`) while Japanese
//! calendars read a week from Monday. Both views are derived from
//! `chrono::Weekday` so the two orderings can never drift apart:
//!
//! ```text
//! "2" / "MON" ──▶ Weekday::Mon ──┬─ number_from_sunday()  = 2   (Quartz code)
//!                                ├─ num_days_from_monday() = 0  (display order)
//!                                └─ glyph                  = 月
//! ```

use chrono::{Month, Weekday};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Canonical three-letter weekday codes, in Quartz order.
pub(crate) const VALID_DAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Canonical three-letter month codes.
pub(crate) const VALID_MONTH_NAMES: [&str; 12] =
    ["JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC"];

/// Weekday glyphs in display order (Monday first).
pub(crate) const WEEKDAY_GLYPHS_FROM_MONDAY: [&str; 7] = ["月", "火", "水", "木", "金", "土", "日"];

/// Sort key used for weekdays that do not resolve to a real day.
pub(crate) const UNKNOWN_DAY_ORDER: u32 = 99;

static WEEKDAY_CODES: Lazy<HashMap<&'static str, Weekday>> = Lazy::new(|| {
    HashMap::from([
        ("1", Weekday::Sun),
        ("2", Weekday::Mon),
        ("3", Weekday::Tue),
        ("4", Weekday::Wed),
        ("5", Weekday::Thu),
        ("6", Weekday::Fri),
        ("7", Weekday::Sat),
        ("SUN", Weekday::Sun),
        ("MON", Weekday::Mon),
        ("TUE", Weekday::Tue),
        ("WED", Weekday::Wed),
        ("THU", Weekday::Thu),
        ("FRI", Weekday::Fri),
        ("SAT", Weekday::Sat),
    ])
});

static MONTH_CODES: Lazy<HashMap<&'static str, Month>> = Lazy::new(|| {
    let numeric = (1u8..=12).filter_map(|n| Month::try_from(n).ok().map(|m| (m, n)));
    let mut map: HashMap<&'static str, Month> = HashMap::new();
    for (month, n) in numeric {
        map.insert(NUMERIC_MONTH_KEYS[usize::from(n) - 1], month);
        map.insert(VALID_MONTH_NAMES[usize::from(n) - 1], month);
    }
    map
});

const NUMERIC_MONTH_KEYS: [&str; 12] = ["1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12"];

/// Resolve a Quartz weekday code (`1`-`7` or `SUN`-`SAT`, any case).
pub(crate) fn weekday_from_code(code: &str) -> Option<Weekday> {
    WEEKDAY_CODES.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Resolve a Quartz month code (`1`-`12` or `JAN`-`DEC`, any case).
pub(crate) fn month_from_code(code: &str) -> Option<Month> {
    MONTH_CODES.get(code.to_ascii_uppercase().as_str()).copied()
}

pub(crate) fn weekday_glyph(day: Weekday) -> &'static str {
    WEEKDAY_GLYPHS_FROM_MONDAY[day.num_days_from_monday() as usize]
}

/// Japanese glyph for a weekday code; unknown codes pass through unchanged.
pub(crate) fn day_name(code: &str) -> String {
    match weekday_from_code(code) {
        Some(day) => weekday_glyph(day).to_string(),
        None => code.to_string(),
    }
}

/// Position of a weekday code in a Monday-first week (`MON = 0` … `SUN = 6`).
pub(crate) fn day_sort_order(code: &str) -> u32 {
    weekday_from_code(code).map_or(UNKNOWN_DAY_ORDER, |day| day.num_days_from_monday())
}

/// `N月` for a month code; unknown codes get the suffix appended as-is.
pub(crate) fn month_name(code: &str) -> String {
    match month_from_code(code) {
        Some(month) => format!("{}月", month.number_from_month()),
        None => format!("{code}月"),
    }
}

/// Numeric weekday position used for wraparound detection.
pub(crate) fn weekday_number(code: &str) -> Option<i64> {
    VALID_DAY_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(code))
        .map(|idx| idx as i64 + 1)
        .or_else(|| leading_int(code))
}

/// Numeric month position used for wraparound detection.
pub(crate) fn month_number(code: &str) -> Option<i64> {
    VALID_MONTH_NAMES
        .iter()
        .position(|name| name.eq_ignore_ascii_case(code))
        .map(|idx| idx as i64 + 1)
        .or_else(|| leading_int(code))
}

/// Read the integer at the start of `text`, ignoring anything after it.
///
/// `"15W"` reads as 15, `"05"` as 5, `"W"` as `None`.
pub(crate) fn leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().unwrap_or(i64::MAX);
    Some(if negative { -value } else { value })
}

/// [`leading_int`] with a zero default.
pub(crate) fn int_or_zero(text: &str) -> i64 {
    leading_int(text).unwrap_or(0)
}

fn hour12(hour: i64) -> (&'static str, i64) {
    match hour {
        0 => ("午前", 0),
        h if h < 12 => ("午前", h),
        12 => ("午後", 12),
        h => ("午後", h - 12),
    }
}

/// 24-hour value to `午前H時` / `午後H時`.
pub(crate) fn format_hour12(hour: i64) -> String {
    let (period, h) = hour12(hour);
    format!("{period}{h}時")
}

/// Like [`format_hour12`] without the trailing `時`, for joined hour lists.
pub(crate) fn format_hour12_bare(hour: i64) -> String {
    let (period, h) = hour12(hour);
    format!("{period}{h}")
}

pub(crate) fn format_time12(hour: i64, minute: i64) -> String {
    format!("{}{minute}分", format_hour12(hour))
}

pub(crate) fn format_time_with_sec12(hour: i64, minute: i64, second: i64) -> String {
    format!("{}{minute}分{second}秒", format_hour12(hour))
}
