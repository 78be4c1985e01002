//! Expression validator.
//!
//! Works on the raw whitespace-split fields, independent of the parser. Apart
//! from the field-count gate every check runs unconditionally and the errors
//! pile up in a fixed order:
//!
//! ```text
//! field count ─▶ (stop on failure)
//! ? placement ─▶ numeric ranges ─▶ zero steps ─▶ syntax ─▶ range direction
//!   ─▶ L/W/# placement ─▶ # form ─▶ W form ─▶ L-n offset ─▶ calendar
//!   ─▶ weekday names ─▶ month names ─▶ year format
//! ```
//!
//! Each check is a small function returning `Option<String>`.

use crate::CronFields;
use crate::error::FIELD_COUNT_MESSAGE;
use crate::field::FieldType;
use crate::lexicon::{VALID_DAY_NAMES, VALID_MONTH_NAMES, leading_int};
use serde::Serialize;

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// Always empty for now; kept so callers can rely on the field.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<String>) -> Self {
        Self { is_valid: errors.is_empty(), errors, warnings: Vec::new() }
    }
}

/// Validate a Quartz expression and collect every problem found.
///
/// # Example
/// ```
/// use quartz_cron_jp::validate;
///
/// let result = validate("0 0 9 31 2 ?");
/// assert!(!result.is_valid);
/// assert!(result.errors[0].contains("2月31日は存在しません"));
/// ```
pub fn validate(expr: &str) -> ValidationResult {
    let Ok(fields) = CronFields::split(expr) else {
        tracing::debug!(expr, "wrong field count");
        return ValidationResult::from_errors(vec![FIELD_COUNT_MESSAGE.to_string()]);
    };

    let errors = collect_errors(&fields);
    tracing::debug!(expr, errors = errors.len(), "validated expression");
    ValidationResult::from_errors(errors)
}

fn collect_errors(fields: &CronFields<String>) -> Vec<String> {
    let mut errors: Vec<String> = Vec::new();
    let dom = fields.day_of_month.as_str();
    let month = fields.month.as_str();
    let dow = fields.day_of_week.as_str();
    let year = fields.year.as_deref();

    errors.extend(question_mark_placement(dom, dow));

    // The year takes part in range checks but not in step or syntax checks.
    let with_year: Vec<(FieldType, &str)> = fields.iter().map(|(field, value)| (field, value.as_str())).collect();
    let without_year = &with_year[..6];

    errors.extend(with_year.iter().filter_map(|&(field, value)| numeric_range(value, field)));
    errors.extend(without_year.iter().filter_map(|&(field, value)| zero_step(value, field)));
    errors.extend(without_year.iter().filter_map(|&(field, value)| syntax(value, field)));
    errors.extend(with_year.iter().filter_map(|&(field, value)| range_direction(value, field)));

    errors.extend(symbol_placement(fields));

    if dow != "?" && dow != "*" && dow.contains('#') {
        errors.extend(nth_weekday_form(dow));
        errors.extend(alone(dow, '#', "「#」（第n曜日）"));
    }
    if dom != "?" && dom != "*" && dom.contains('W') {
        errors.extend(alone(dom, 'W', "「W」（最寄り平日）"));
    }

    errors.extend(last_offset(dom));
    errors.extend(calendar(dom, month));

    if dow != "?" && dow != "*" {
        errors.extend(weekday_names(dow));
    }
    if month != "?" && month != "*" {
        errors.extend(month_names(month));
    }
    if let Some(year) = year {
        errors.extend(year_format(year));
    }

    errors
}

/// Exactly one of day-of-month and day-of-week must be `?`.
fn question_mark_placement(dom: &str, dow: &str) -> Option<String> {
    match (dom == "?", dow == "?") {
        (false, false) => Some("日と曜日のどちらかは必ず「?」にしてください".to_string()),
        (true, true) => Some("日と曜日の両方を「?」にすることはできません".to_string()),
        _ => None,
    }
}

/// Every number embedded in the field must sit inside the field's bounds.
///
/// The year's own step (`2025/2`) is not a year and is skipped.
fn numeric_range(value: &str, field: FieldType) -> Option<String> {
    if is_wildcard(value) {
        return None;
    }
    let value = if field == FieldType::Year { regex!(r"/\d+$").replace(value, "") } else { value.into() };
    let (min, max) = field.bounds();

    regex!(r"\d+")
        .find_iter(&value)
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .find(|n| *n < u64::from(min) || *n > u64::from(max))
        .map(|n| format!("{}の値「{n}」は範囲外です（{min}〜{max}）", field.label()))
}

fn zero_step(value: &str, field: FieldType) -> Option<String> {
    if is_wildcard(value) {
        return None;
    }
    let step = regex!(r"/(\d+)").captures(value)?.get(1)?.as_str();
    step.bytes()
        .all(|b| b == b'0')
        .then(|| format!("{}のステップ値「0」は無効です（1以上を指定してください）", field.label()))
}

fn syntax(value: &str, field: FieldType) -> Option<String> {
    if is_wildcard(value) {
        return None;
    }
    let name = field.label();

    let mut invalid: Vec<&str> = Vec::new();
    for m in regex!(r"[^0-9A-Za-z*?\-/,#LW]").find_iter(value) {
        if !invalid.contains(&m.as_str()) {
            invalid.push(m.as_str());
        }
    }
    if !invalid.is_empty() {
        return Some(format!("{name}に不正な文字「{}」が含まれています", invalid.join("」「")));
    }

    let problem = if value.contains(",,") {
        "に連続したカンマがあります"
    } else if value.starts_with(',') {
        "の先頭に不正なカンマがあります"
    } else if value.ends_with(',') {
        "の末尾に不正なカンマがあります"
    } else if value.contains("**") {
        "に連続した「*」があります"
    } else if value.contains("//") {
        "に連続した「/」があります"
    } else if value.contains("--") {
        "に連続した「-」があります"
    } else if value.ends_with('-') || regex!(r"-[,/]").is_match(value) {
        "の範囲指定が不完全です（終了値がありません）"
    } else if value.starts_with('-') || regex!(r"[,/]-").is_match(value) {
        "の範囲指定が不完全です（開始値がありません）"
    } else if value.ends_with('/') {
        "のステップ指定が不完全です（間隔値がありません）"
    } else if value.starts_with('/') {
        "のステップ指定が不完全です（開始値がありません）"
    } else {
        return None;
    };
    Some(format!("{name}{problem}"))
}

/// `from > to` is only an error where a range cannot wrap around (the year).
fn range_direction(value: &str, field: FieldType) -> Option<String> {
    if is_wildcard(value) || field.allows_wraparound() {
        return None;
    }
    regex!(r"([A-Za-z]+|\d+)-([A-Za-z]+|\d+)").captures_iter(value).find_map(|caps| {
        let (from, to) = (caps.get(1)?.as_str(), caps.get(2)?.as_str());
        match (leading_int(from), leading_int(to)) {
            (Some(a), Some(b)) if a > b => Some(format!(
                "{}の範囲「{from}-{to}」が不正です（開始値が終了値より大きい）",
                field.label()
            )),
            _ => None,
        }
    })
}

fn uses_last(value: &str) -> bool {
    value == "L" || regex!(r"^L$|^\d+L$|^L-|^L,").is_match(value)
}

fn uses_nearest_weekday(value: &str) -> bool {
    regex!(r"\d+W").is_match(value)
}

fn uses_nth(value: &str) -> bool {
    regex!(r"\d+#\d+").is_match(value)
}

/// `L` belongs to the day fields, `W` to day-of-month, `#` to day-of-week.
fn symbol_placement(fields: &CronFields<String>) -> Vec<String> {
    let time = [fields.second.as_str(), fields.minute.as_str(), fields.hour.as_str()];
    let month = fields.month.as_str();
    let mut errors = Vec::new();

    if time.iter().chain([&month]).any(|v| uses_last(v)) {
        errors.push("「L」は日または曜日フィールドでのみ使用できます".to_string());
    }
    if time.iter().chain([&month, &fields.day_of_week.as_str()]).any(|v| uses_nearest_weekday(v)) {
        errors.push("「W」は日フィールドでのみ使用できます".to_string());
    }
    if time.iter().chain([&fields.day_of_month.as_str(), &month]).any(|v| uses_nth(v)) {
        errors.push("「#」は曜日フィールドでのみ使用できます".to_string());
    }
    errors
}

/// `day#nth` needs both halves and an nth between 1 and 5.
fn nth_weekday_form(value: &str) -> Option<String> {
    let caps = regex!(r"([A-Za-z]+|\d+)?#(\d+)?").captures(value)?;
    if caps.get(1).is_none() {
        return Some("「#」の前に曜日を指定してください".to_string());
    }
    let nth = match caps.get(2) {
        Some(nth) => nth.as_str().parse::<u64>().unwrap_or(u64::MAX),
        None => return Some("「#」の後に週番号（1〜5）を指定してください".to_string()),
    };
    (!(1..=5).contains(&nth)).then(|| format!("「#」の週番号「{nth}」は範囲外です（1〜5）"))
}

/// `#` and `W` cannot be combined with lists or ranges.
fn alone(value: &str, symbol: char, what: &str) -> Option<String> {
    if !value.contains(symbol) {
        return None;
    }
    if value.contains(',') {
        return Some(format!("{what}はカンマとの併用ができません。単独で指定してください"));
    }
    if value.contains('-') {
        return Some(format!("{what}は範囲指定との併用ができません。単独で指定してください"));
    }
    None
}

fn last_offset(dom: &str) -> Option<String> {
    let offset = regex!(r"^L-(\d+)$").captures(dom)?.get(1)?.as_str().parse::<u64>().unwrap_or(u64::MAX);
    (offset > 30).then(|| format!("「L-{offset}」のオフセットが大きすぎます（最大30日）"))
}

/// Longest day of each short month; February allows the 29th every year.
const SHORT_MONTHS: [(i64, i64); 5] = [(2, 29), (4, 30), (6, 30), (9, 30), (11, 30)];

/// Reject dates no calendar has, reading the leading number of both fields.
fn calendar(dom: &str, month: &str) -> Option<String> {
    if dom == "?" || dom == "*" || month == "*" {
        return None;
    }
    let day = leading_int(dom)?;
    let month = leading_int(month)?;
    let (_, max) = SHORT_MONTHS.iter().find(|(m, _)| *m == month)?;
    (day > *max).then(|| format!("{month}月{day}日は存在しません（最大{max}日）"))
}

fn weekday_names(dow: &str) -> Option<String> {
    let cleaned = regex!(r"[?*#\d]").replace_all(dow, "");
    regex!(r"[-/,L]+")
        .split(&cleaned)
        .filter(|part| !part.is_empty())
        .find(|part| !VALID_DAY_NAMES.contains(&part.to_ascii_uppercase().as_str()))
        .map(|part| {
            format!("曜日「{part}」は無効です。SUN, MON, TUE, WED, THU, FRI, SAT または 1-7 を使用してください")
        })
}

fn month_names(month: &str) -> Option<String> {
    let cleaned = regex!(r"[?*\d]").replace_all(month, "");
    regex!(r"[-/,]+")
        .split(&cleaned)
        .filter(|part| !part.is_empty())
        .find(|part| !VALID_MONTH_NAMES.contains(&part.to_ascii_uppercase().as_str()))
        .map(|part| format!("月「{part}」は無効です。JAN-DEC または 1-12 を使用してください"))
}

fn year_format(year: &str) -> Option<String> {
    if year == "*" || regex!(r"^[\d,\-/*]+$").is_match(year) {
        return None;
    }
    Some(format!("年の値「{year}」は無効です（数値を指定してください）"))
}

fn is_wildcard(value: &str) -> bool {
    value.is_empty() || value == "*" || value == "?"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors(expr: &str) -> Vec<String> {
        validate(expr).errors
    }

    #[test]
    fn accepts_common_expressions() {
        for expr in [
            "0 0 12 * * ?",
            "0 30 9 ? * MON-FRI",
            "0 0/15 * * * ?",
            "0 0 10 ? * 2#1",
            "0 30 9 ? * 1L",
            "0 0 18 L * ?",
            "0 0 9 15W * ?",
            "0 0 0 1 1 ? 2025",
            "0 0 12 ? JAN,JUN MON 2025-2030",
            "0 0 22-5 * * ?",
            "0 0 12 29 2 ?",
            "0 0 0 L-30 * ?",
            "0 0 12 ? * fri",
        ] {
            let result = validate(expr);
            assert!(result.is_valid, "{expr}: {:?}", result.errors);
            assert!(result.warnings.is_empty());
        }
    }

    #[test]
    fn field_count_short_circuits() {
        for expr in ["", "0 0 12 * *", "0 0 12 * * ? 2025 extra"] {
            assert_eq!(errors(expr), vec![FIELD_COUNT_MESSAGE.to_string()], "{expr:?}");
        }
    }

    #[test]
    fn day_and_weekday_exclusivity() {
        assert_eq!(errors("0 0 12 15 * MON"), vec!["日と曜日のどちらかは必ず「?」にしてください"]);
        assert_eq!(errors("0 0 12 ? * ?"), vec!["日と曜日の両方を「?」にすることはできません"]);
    }

    #[test]
    fn numeric_ranges_and_steps() {
        assert_eq!(errors("0 0 25 * * ?"), vec!["時の値「25」は範囲外です（0〜23）"]);
        assert_eq!(errors("0 0 12 ? * 8"), vec!["曜日の値「8」は範囲外です（1〜7）"]);
        assert_eq!(errors("0 0 12 1 1 ? 1969"), vec!["年の値「1969」は範囲外です（1970〜2099）"]);
        assert!(validate("0 0 12 1 1 ? 2025/5").is_valid);
        assert_eq!(errors("0 0/0 12 * * ?"), vec!["分のステップ値「0」は無効です（1以上を指定してください）"]);
    }

    #[test]
    fn syntax_problems() {
        let cases = vec![
            ("秒に不正な文字「.」が含まれています", "0.5 0 12 * * ?"),
            ("分に連続したカンマがあります", "0 1,,2 12 * * ?"),
            ("分の先頭に不正なカンマがあります", "0 ,1 12 * * ?"),
            ("分の末尾に不正なカンマがあります", "0 1, 12 * * ?"),
            ("時に連続した「*」があります", "0 0 ** * * ?"),
            ("時に連続した「/」があります", "0 0 1//2 * * ?"),
            ("時に連続した「-」があります", "0 0 1--2 * * ?"),
            ("時の範囲指定が不完全です（終了値がありません）", "0 0 1- * * ?"),
            ("時の範囲指定が不完全です（開始値がありません）", "0 0 -1 * * ?"),
            ("時のステップ指定が不完全です（間隔値がありません）", "0 0 1/ * * ?"),
            ("時のステップ指定が不完全です（開始値がありません）", "0 0 /2 * * ?"),
        ];
        for (expected, expr) in cases {
            assert!(errors(expr).iter().any(|e| e == expected), "{expr}: {:?}", errors(expr));
        }
    }

    #[test]
    fn only_year_rejects_reversed_ranges() {
        assert!(validate("0 0 22-5 * * ?").is_valid);
        assert!(validate("0 0 12 ? NOV-FEB *").is_valid);
        assert!(validate("0 0 12 ? 12-3/2 *").is_valid);
        assert!(validate("0 0 12 ? * SAT-MON").is_valid);
        assert!(validate("0 0 12 ? * 7-2").is_valid);
        assert!(validate("0 0 12 1 1 ? 2025-2030").is_valid);
        assert_eq!(
            errors("0 0 12 1 1 ? 2030-2025"),
            vec!["年の範囲「2030-2025」が不正です（開始値が終了値より大きい）"]
        );
        assert_eq!(
            errors("0 0 12 1 1 ? 2030-2025/2"),
            vec!["年の範囲「2030-2025」が不正です（開始値が終了値より大きい）"]
        );
        assert_eq!(
            errors("0 0 12 1 1 ? 2025,2030-2026"),
            vec!["年の範囲「2030-2026」が不正です（開始値が終了値より大きい）"]
        );
    }

    #[test]
    fn special_symbols() {
        assert!(errors("0 0 5L * * ?").contains(&"「L」は日または曜日フィールドでのみ使用できます".to_string()));
        assert!(errors("0 0 12 ? * 2W").contains(&"「W」は日フィールドでのみ使用できます".to_string()));
        assert!(errors("0 0 12 1#2 * ?").contains(&"「#」は曜日フィールドでのみ使用できます".to_string()));
        assert_eq!(errors("0 0 12 ? * #2"), vec!["「#」の前に曜日を指定してください"]);
        assert_eq!(errors("0 0 12 ? * 2#"), vec!["「#」の後に週番号（1〜5）を指定してください"]);
        assert_eq!(errors("0 0 12 ? * 2#6"), vec!["「#」の週番号「6」は範囲外です（1〜5）"]);
        assert_eq!(
            errors("0 0 12 ? * 2#1,3"),
            vec!["「#」（第n曜日）はカンマとの併用ができません。単独で指定してください"]
        );
        assert_eq!(
            errors("0 0 12 1W-5 * ?"),
            vec!["「W」（最寄り平日）は範囲指定との併用ができません。単独で指定してください"]
        );
        assert_eq!(errors("0 0 12 L-31 * ?"), vec!["「L-31」のオフセットが大きすぎます（最大30日）"]);
    }

    #[test]
    fn impossible_calendar_dates() {
        assert_eq!(errors("0 0 9 31 2 ?"), vec!["2月31日は存在しません（最大29日）"]);
        assert_eq!(errors("0 0 9 31 4 ?"), vec!["4月31日は存在しません（最大30日）"]);
        assert_eq!(errors("0 0 9 31W 11 ?"), vec!["11月31日は存在しません（最大30日）"]);
        assert!(validate("0 0 9 31 FEB ?").is_valid);
    }

    #[test]
    fn symbolic_names() {
        assert_eq!(
            errors("0 0 12 ? * ABC"),
            vec!["曜日「ABC」は無効です。SUN, MON, TUE, WED, THU, FRI, SAT または 1-7 を使用してください"]
        );
        assert_eq!(errors("0 0 12 1 FOO ?"), vec!["月「FOO」は無効です。JAN-DEC または 1-12 を使用してください"]);
        assert!(errors("0 0 12 1 1 ? 20x5").contains(&"年の値「20x5」は無効です（数値を指定してください）".to_string()));
    }

    #[test]
    fn errors_accumulate_in_check_order() {
        let found = errors("0 60 25 15 * MON");
        assert_eq!(
            found,
            vec![
                "日と曜日のどちらかは必ず「?」にしてください",
                "分の値「60」は範囲外です（0〜59）",
                "時の値「25」は範囲外です（0〜23）",
            ]
        );
    }
}
