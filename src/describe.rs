//! Whole-expression description builder.
//!
//! Merges seven translated fields into one sentence:
//!
//! ```text
//! year prefix ─┐
//!   connector ─┤  "2025年" + "の" + "毎月" + "第1月曜日" + " " + "午前10時"
//!   frequency ─┤
//! date phrase ─┤   (month / day-of-month / day-of-week)
//! time phrase ─┘   (second / minute / hour, see `time.rs`)
//! ```
//!
//! The frequency word is chosen from which fields are wildcards:
//!
//! - nothing date-like constrained: `毎日`, unless the hour is `*` too (the time
//!   phrase already says how often);
//! - month `*` with a day constraint: `毎月`, or `毎週` for plain weekdays;
//!   nth/last weekdays are month-relative and keep `毎月`;
//! - month constrained: `毎年`, unless a year is given.

#[path = "describe/time.rs"]
mod time;

use crate::CronFields;
use crate::field::ParsedField;
use crate::translate::TranslatedField;

/// Text used when no part of the description produced anything.
pub const FALLBACK_DESCRIPTION: &str = "指定された条件で実行";

/// Build the full Japanese sentence for an expression.
///
/// `translated` and `parsed` must come from the same expression; the builder
/// reads flags from the former and raw values from the latter.
pub fn build_description(translated: &CronFields<TranslatedField>, parsed: &CronFields<ParsedField>) -> String {
    let year_prefix = year_prefix(translated.year.as_ref(), parsed.year.as_ref());

    let has_day_of_month = translated.day_of_month.is_constraint();
    let has_day_of_week = translated.day_of_week.is_constraint();
    let has_month = !translated.month.is_all() && !translated.month.text.is_empty();

    let mut parts: Vec<String> = Vec::new();
    if let Some(date) = date_phrase(translated, has_month, has_day_of_month, has_day_of_week) {
        parts.push(date);
    }

    let time = time::TimeOfDay::new(translated, parsed).describe();
    if !time.is_empty() {
        parts.push(time);
    }

    let frequency = if translated.month.is_all() && !has_day_of_month && !has_day_of_week {
        if translated.hour.is_all() { "" } else { "毎日" }
    } else if translated.month.is_all() {
        if !has_day_of_month && !is_month_relative_weekday(&parsed.day_of_week) { "毎週" } else { "毎月" }
    } else if has_month && year_prefix.is_empty() {
        "毎年"
    } else {
        ""
    };

    let year_is_stepped = matches!(parsed.year, Some(ParsedField::Interval { .. } | ParsedField::RangeWithInterval { .. }));
    let connector = if !year_prefix.is_empty() && (!frequency.is_empty() || (year_is_stepped && !parts.is_empty())) {
        "の"
    } else {
        ""
    };

    let description = format!("{year_prefix}{connector}{frequency}{}", parts.join(" "));
    if description.is_empty() { FALLBACK_DESCRIPTION.to_string() } else { description }
}

fn year_prefix(translated: Option<&TranslatedField>, parsed: Option<&ParsedField>) -> String {
    let (Some(translated), Some(parsed)) = (translated, parsed) else {
        return String::new();
    };
    if translated.is_all() || translated.text.is_empty() {
        return String::new();
    }

    match parsed {
        ParsedField::Single { value } => format!("{value}年"),
        ParsedField::Range { from, to, .. } => format!("{from}年〜{to}年"),
        ParsedField::List { .. } => translated.text.clone(),
        ParsedField::Interval { start, interval } => format!("{start}年起点で{interval}年間隔"),
        ParsedField::RangeWithInterval { from, to, interval, .. } => format!("{from}年〜{to}年の間、{interval}年間隔"),
        _ => String::new(),
    }
}

fn date_phrase(
    translated: &CronFields<TranslatedField>,
    has_month: bool,
    has_day_of_month: bool,
    has_day_of_week: bool,
) -> Option<String> {
    let month = &translated.month;
    let day_of_month = &translated.day_of_month.text;
    let day_of_week = &translated.day_of_week.text;

    let phrase = match (has_month, has_day_of_month, has_day_of_week) {
        (true, true, _) => {
            let stepped = month.is_range_with_interval() || month.is_interval();
            let (sep, each) = if stepped { (" ", "各月の") } else { ("", "") };
            let mut phrase = format!("{}{sep}{each}{day_of_month}", month.text);
            if has_day_of_week {
                phrase = format!("{phrase}の{day_of_week}");
            }
            phrase
        }
        (true, false, true) => format!("{}{day_of_week}", month.text),
        (true, false, false) => month.text.clone(),
        (false, true, true) => format!("{day_of_month}の{day_of_week}"),
        (false, true, false) => day_of_month.clone(),
        (false, false, true) => day_of_week.clone(),
        (false, false, false) => return None,
    };
    Some(phrase)
}

/// Nth-weekday and last-weekday-of-month repeat monthly, not weekly.
fn is_month_relative_weekday(parsed: &ParsedField) -> bool {
    let relative = |item: &ParsedField| {
        matches!(item, ParsedField::LastWeekdayOfMonth { .. } | ParsedField::NthWeekday { .. })
    };
    match parsed {
        ParsedField::List { items } => items.iter().any(relative),
        other => relative(other),
    }
}

#[cfg(test)]
#[path = "describe/tests.rs"]
mod tests;
