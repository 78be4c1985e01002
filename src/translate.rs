//! Field-to-text translation.
//!
//! Turns one [`ParsedField`] into a Japanese noun phrase plus a set of
//! [`FieldFlags`]. The description builder (`describe.rs`) branches on those
//! flags rather than re-reading the text, so every shape it cares about must be
//! flagged here:
//!
//! ```text
//! ParsedField ──▶ translate_field ──▶ TranslatedField { text, flags, metadata }
//!                                                  │
//!                                                  └──▶ build_description
//! ```
//!
//! Interval-of-one needs care: `*/1` and `0/1` read as "every second/minute/
//! hour", but `59/1` on seconds can only ever fire at :59, so it is reported as
//! a single value with [`FieldFlags::SINGLE`].

use crate::field::{FieldType, ParsedField};
use crate::lexicon::{
    UNKNOWN_DAY_ORDER, WEEKDAY_GLYPHS_FROM_MONDAY, day_name, day_sort_order, format_hour12, int_or_zero, leading_int,
    month_name, weekday_from_code, weekday_glyph,
};
use chrono::Weekday;

bitflags::bitflags! {
    /// Shape markers read by the description builder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldFlags: u16 {
        const ALL                 = 1 << 0;
        const ANY                 = 1 << 1;
        const LAST                = 1 << 2;
        const INTERVAL            = 1 << 3;
        const EVERY_SECOND        = 1 << 4;
        const EVERY_MINUTE        = 1 << 5;
        const EVERY_HOUR          = 1 << 6;
        /// A boundary interval (`59/1`) that collapses to one value.
        const SINGLE              = 1 << 7;
        const RANGE_WITH_INTERVAL = 1 << 8;
        const MONTH_LIST          = 1 << 9;
    }
}

/// Localized text for one field plus the flags the builder needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TranslatedField {
    /// Japanese phrase for this field alone; empty only for `?`.
    pub text: String,
    pub flags: FieldFlags,
    /// Interval start with `*` already resolved to `0`.
    pub start_value: Option<String>,
    /// Raw endpoints and step of an hour range-with-interval.
    pub range_from: Option<String>,
    pub range_to: Option<String>,
    pub interval_value: Option<String>,
}

impl TranslatedField {
    fn new(text: impl Into<String>, flags: FieldFlags) -> Self {
        Self { text: text.into(), flags, ..Default::default() }
    }

    fn plain(text: impl Into<String>) -> Self {
        Self::new(text, FieldFlags::empty())
    }

    fn with_start(mut self, start: &str) -> Self {
        self.start_value = Some(start.to_string());
        self
    }

    pub fn is_all(&self) -> bool {
        self.flags.contains(FieldFlags::ALL)
    }

    pub fn is_any(&self) -> bool {
        self.flags.contains(FieldFlags::ANY)
    }

    pub fn is_interval(&self) -> bool {
        self.flags.contains(FieldFlags::INTERVAL)
    }

    pub fn is_single(&self) -> bool {
        self.flags.contains(FieldFlags::SINGLE)
    }

    pub fn is_range_with_interval(&self) -> bool {
        self.flags.contains(FieldFlags::RANGE_WITH_INTERVAL)
    }

    pub fn is_every_second(&self) -> bool {
        self.flags.contains(FieldFlags::EVERY_SECOND)
    }

    pub fn is_every_minute(&self) -> bool {
        self.flags.contains(FieldFlags::EVERY_MINUTE)
    }

    pub fn is_every_hour(&self) -> bool {
        self.flags.contains(FieldFlags::EVERY_HOUR)
    }

    /// True when the field constrains the schedule and has something to say.
    pub(crate) fn is_constraint(&self) -> bool {
        !self.is_any() && !self.is_all() && !self.text.is_empty()
    }
}

/// Translate one parsed field.
///
/// # Example
/// ```
/// use quartz_cron_jp::{FieldType, parse_field, translate_field};
///
/// let parsed = parse_field("MON-FRI", FieldType::DayOfWeek);
/// assert_eq!(translate_field(&parsed, FieldType::DayOfWeek).text, "平日（月〜金）");
/// ```
pub fn translate_field(parsed: &ParsedField, field: FieldType) -> TranslatedField {
    match parsed {
        ParsedField::All => {
            let text = match field {
                FieldType::DayOfWeek => "毎日".to_string(),
                _ => format!("毎{}", field.unit()),
            };
            TranslatedField::new(text, FieldFlags::ALL)
        }
        ParsedField::Any => TranslatedField::new("", FieldFlags::ANY),
        ParsedField::Last => match field {
            FieldType::DayOfMonth => TranslatedField::new("末日", FieldFlags::LAST),
            _ => TranslatedField::plain("最終"),
        },
        ParsedField::LastWeekday => TranslatedField::plain("末日に最も近い平日"),
        ParsedField::LastOffset { offset } => TranslatedField::plain(format!("末日の{offset}日前")),
        ParsedField::LastWeekdayOfMonth { day } => TranslatedField::plain(format!("最終{}曜日", day_name(day))),
        ParsedField::NearestWeekday { day } => TranslatedField::plain(format!("{day}日に最も近い平日")),
        ParsedField::NthWeekday { day, nth } => TranslatedField::plain(format!("第{nth}{}曜日", day_name(day))),
        ParsedField::Interval { start, interval } => interval_text(start, interval, field),
        ParsedField::RangeWithInterval { from, to, interval, .. } => range_with_interval_text(from, to, interval, field),
        ParsedField::Range { from, to, .. } => range_text(from, to, field),
        ParsedField::List { items } => list_text(items, field),
        ParsedField::Single { value } => TranslatedField::plain(match field {
            FieldType::DayOfWeek => format!("{}曜日", day_name(value)),
            FieldType::Month => month_name(value),
            FieldType::Hour => format_hour12(int_or_zero(value)),
            _ => format!("{value}{}", field.unit()),
        }),
    }
}

fn interval_text(start: &str, interval: &str, field: FieldType) -> TranslatedField {
    let start_value = if start == "*" { "0" } else { start };

    if interval == "1" {
        if let Some(max) = field.clock_max().filter(|max| leading_int(start_value) == Some(*max)) {
            let text = match field {
                FieldType::Hour => format_hour12(max),
                _ => format!("{start_value}{}", field.unit()),
            };
            return TranslatedField::new(text, FieldFlags::SINGLE);
        }
        if start == "*" || start == "0" {
            let every = match field {
                FieldType::Second => Some(("毎秒", FieldFlags::EVERY_SECOND)),
                FieldType::Minute => Some(("毎分", FieldFlags::EVERY_MINUTE)),
                FieldType::Hour => Some(("毎時", FieldFlags::EVERY_HOUR)),
                _ => None,
            };
            if let Some((text, flag)) = every {
                return TranslatedField::new(text, FieldFlags::INTERVAL | flag);
            }
        }
    }

    let text = match field {
        FieldType::Month => format!("{start_value}月起点で{interval}ヶ月間隔"),
        FieldType::DayOfWeek => format!("{}曜日起点で{interval}日間隔", day_name(start_value)),
        FieldType::Hour => format!("{}起点で{interval}時間間隔", format_hour12(int_or_zero(start_value))),
        _ => format!("{start_value}{unit}起点で{interval}{unit}間隔", unit = field.unit()),
    };
    TranslatedField::new(text, FieldFlags::INTERVAL).with_start(start_value)
}

fn range_with_interval_text(from: &str, to: &str, interval: &str, field: FieldType) -> TranslatedField {
    match field {
        FieldType::DayOfWeek => weekday_range_with_interval(from, to, interval),
        FieldType::Hour => {
            let step = if leading_int(interval) == Some(1) { "毎時".to_string() } else { format!("{interval}時間間隔") };
            let text = format!(
                "{}〜{}の間、{step}",
                format_hour12(int_or_zero(from)),
                format_hour12(int_or_zero(to))
            );
            TranslatedField {
                text,
                flags: FieldFlags::RANGE_WITH_INTERVAL,
                range_from: Some(from.to_string()),
                range_to: Some(to.to_string()),
                interval_value: Some(interval.to_string()),
                ..Default::default()
            }
        }
        FieldType::Month if leading_int(interval) == Some(1) => {
            TranslatedField::plain(format!("{}〜{}", month_name(from), month_name(to)))
        }
        FieldType::Month => TranslatedField::new(
            format!("{}〜{}の間、{interval}ヶ月間隔", month_name(from), month_name(to)),
            FieldFlags::RANGE_WITH_INTERVAL,
        ),
        _ => TranslatedField::new(
            format!("{from}〜{to}{unit}の間、{interval}{unit}間隔", unit = field.unit()),
            FieldFlags::RANGE_WITH_INTERVAL,
        ),
    }
}

/// `from-to/n` on weekdays: a stride of one is a plain range, a forward
/// range is enumerated, a wrapping range is described instead.
fn weekday_range_with_interval(from: &str, to: &str, interval: &str) -> TranslatedField {
    let step = leading_int(interval).unwrap_or(0);
    if step == 1 {
        return TranslatedField::plain(format!("{}〜{}曜日", day_name(from), day_name(to)));
    }

    let numeric = |code: &str| leading_int(code).filter(|n| *n > 0);
    let endpoints = match (numeric(from), numeric(to)) {
        (Some(start), Some(end)) => Some((start, end)),
        _ => symbolic_weekday_index(from).zip(symbolic_weekday_index(to)),
    };

    let Some((start, end)) = endpoints else {
        return TranslatedField::new(format!("{from}〜{to}曜日"), FieldFlags::RANGE_WITH_INTERVAL);
    };

    if start > end {
        let text = format!("{}〜{}曜日の範囲で{step}日間隔", quartz_day_glyph(start, from), quartz_day_glyph(end, to));
        return TranslatedField::new(text, FieldFlags::RANGE_WITH_INTERVAL);
    }

    let stride = step.max(1) as usize;
    let days: Vec<String> = (start..=end).step_by(stride).map(|n| quartz_day_glyph(n, &n.to_string())).collect();
    TranslatedField::new(format!("{}曜日", days.join("・")), FieldFlags::RANGE_WITH_INTERVAL)
}

/// Quartz number (`SUN = 1`) of a three-letter weekday name.
fn symbolic_weekday_index(code: &str) -> Option<i64> {
    weekday_from_code(code).filter(|_| !code.bytes().all(|b| b.is_ascii_digit())).map(quartz_number)
}

fn quartz_number(day: Weekday) -> i64 {
    i64::from(day.number_from_sunday())
}

fn quartz_day_glyph(number: i64, fallback: &str) -> String {
    match weekday_from_code(&number.to_string()) {
        Some(day) => weekday_glyph(day).to_string(),
        None => fallback.to_string(),
    }
}

fn range_text(from: &str, to: &str, field: FieldType) -> TranslatedField {
    let text = match field {
        FieldType::DayOfWeek => {
            if matches!(from, "MON" | "2") && matches!(to, "FRI" | "6") {
                "平日（月〜金）".to_string()
            } else if matches!(from, "SUN" | "1") && matches!(to, "SAT" | "7") {
                "月〜日曜日".to_string()
            } else {
                format!("{}〜{}曜日", day_name(from), day_name(to))
            }
        }
        FieldType::Month => format!("{}〜{}", month_name(from), month_name(to)),
        FieldType::Hour => format!("{}〜{}", format_hour12(int_or_zero(from)), format_hour12(int_or_zero(to))),
        _ => format!("{from}〜{to}{}", field.unit()),
    };
    TranslatedField::plain(text)
}

fn list_text(items: &[ParsedField], field: FieldType) -> TranslatedField {
    if field == FieldType::DayOfWeek {
        return TranslatedField::plain(weekday_list_text(items));
    }

    let parts: Vec<String> = items
        .iter()
        .map(|item| match item {
            ParsedField::Range { from, to, .. } => match field {
                FieldType::Month => format!("{}〜{}", month_name(from), month_name(to)),
                FieldType::Hour => format!("{}〜{}", format_hour12(int_or_zero(from)), format_hour12(int_or_zero(to))),
                _ => format!("{from}〜{to}"),
            },
            ParsedField::Last => "末".to_string(),
            ParsedField::LastWeekdayOfMonth { day } => format!("最終{}", day_name(day)),
            ParsedField::Single { value } => match field {
                FieldType::Month => month_name(value),
                FieldType::Hour => format_hour12(int_or_zero(value)),
                _ => value.clone(),
            },
            other => translate_field(other, field).text,
        })
        .collect();

    match field {
        FieldType::Month => TranslatedField::new(parts.join("・"), FieldFlags::MONTH_LIST),
        FieldType::Hour => TranslatedField::plain(parts.join("、")),
        _ => TranslatedField::plain(format!("{}{}", parts.join("、"), field.unit())),
    }
}

/// Weekday lists read Monday-first, with consecutive runs folded together:
/// `MON,TUE,WED,FRI` becomes `月〜水・金曜日`.
fn weekday_list_text(items: &[ParsedField]) -> String {
    let has_last_weekday = items.iter().any(|item| matches!(item, ParsedField::LastWeekdayOfMonth { .. }));
    if has_last_weekday {
        let parts: Vec<String> = items
            .iter()
            .map(|item| match item {
                ParsedField::LastWeekdayOfMonth { day } => format!("最終{}", day_name(day)),
                ParsedField::Single { value } => day_name(value),
                ParsedField::Range { from, to, .. } => format!("{}〜{}", day_name(from), day_name(to)),
                ParsedField::Last => "最終".to_string(),
                other => translate_field(other, FieldType::DayOfWeek).text,
            })
            .collect();
        return format!("{}曜日", parts.join("・"));
    }

    let mut days: Vec<u32> = Vec::new();
    for item in items {
        match item {
            ParsedField::Range { from, to, .. } => {
                let (start, end) = (day_sort_order(from), day_sort_order(to));
                if start <= end {
                    days.extend(start..=end);
                } else {
                    days.extend(start..=6);
                    days.extend(0..=end);
                }
            }
            ParsedField::Single { value } => days.push(day_sort_order(value)),
            _ => days.push(UNKNOWN_DAY_ORDER),
        }
    }
    days.retain(|day| (*day as usize) < WEEKDAY_GLYPHS_FROM_MONDAY.len());
    days.sort_unstable();
    days.dedup();

    let mut runs: Vec<(u32, u32)> = Vec::new();
    for day in days {
        match runs.last_mut() {
            Some((_, end)) if *end + 1 == day => *end = day,
            _ => runs.push((day, day)),
        }
    }

    let glyph = |day: u32| WEEKDAY_GLYPHS_FROM_MONDAY[day as usize];
    let groups: Vec<String> = runs
        .into_iter()
        .map(|(start, end)| match end - start + 1 {
            1 => glyph(start).to_string(),
            2 => format!("{}・{}", glyph(start), glyph(end)),
            _ => format!("{}〜{}", glyph(start), glyph(end)),
        })
        .collect();
    format!("{}曜日", groups.join("・"))
}
