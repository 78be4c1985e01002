use super::*;
use crate::field::parse_field;
use crate::translate::translate_field;

fn describe(expr: &str) -> String {
    let raw = CronFields::split(expr).expect("six or seven fields").with_uppercase_calendar();
    let parsed = raw.map(|field, value| parse_field(value, field));
    let translated = parsed.map(|field, value| translate_field(value, field));
    build_description(&translated, &parsed)
}

fn check(cases: Vec<(&str, &str)>) {
    for (expected, expr) in cases {
        assert_eq!(describe(expr), expected, "expr: {expr}");
    }
}

#[test]
fn daily_and_weekly_schedules() {
    check(vec![
        ("毎日午後12時", "0 0 12 * * ?"),
        ("毎週平日（月〜金） 午前9時30分", "0 30 9 ? * MON-FRI"),
        ("毎週平日（月〜金） 午前9時30分", "0 30 9 ? * mon-fri"),
        ("毎週月〜日曜日 午後12時", "0 0 12 ? * SUN-SAT"),
        ("毎週月・水・金曜日 午後12時", "0 0 12 ? * MON,WED,FRI"),
        ("毎週平日（月〜金） 午前9時〜午後5時", "0 0 9-17 ? * MON-FRI"),
        ("毎日午前8・午後12・午後6時30分", "0 30 8,12,18 * * ?"),
    ]);
}

#[test]
fn monthly_day_constraints() {
    check(vec![
        ("毎月第1月曜日 午前10時", "0 0 10 ? * 2#1"),
        ("毎月最終日曜日 午前9時30分", "0 30 9 ? * 1L"),
        ("毎月末日 午後6時", "0 0 18 L * ?"),
        ("毎月15日に最も近い平日 午前9時", "0 0 9 15W * ?"),
        ("毎月末日に最も近い平日 午後12時", "0 0 12 LW * ?"),
        ("毎月末日の3日前 午前0時", "0 0 0 L-3 * ?"),
        ("毎月1日起点で5日間隔 午後12時", "0 0 12 1/5 * ?"),
    ]);
}

#[test]
fn year_prefixes() {
    check(vec![
        ("2025年1月1日 午前0時", "0 0 0 1 1 ? 2025"),
        ("2025年の毎日午後12時", "0 0 12 * * ? 2025"),
        ("2026年の毎月最終金曜日 午前10時15分", "0 15 10 ? * 6L 2026"),
        ("2025年〜2030年1月1日 午後12時", "0 0 12 1 1 ? 2025-2030"),
        ("2025、2027年1月1日 午後12時", "0 0 12 1 1 ? 2025,2027"),
        ("2025年起点で2年間隔の1月1日 午後12時", "0 0 12 1 1 ? 2025/2"),
        ("2025年起点で2年間隔の毎日午後12時", "0 0 12 * * ? 2025/2"),
        ("2025年〜2030年の間、2年間隔の1月1日 午後12時", "0 0 12 1 1 ? 2025-2030/2"),
        ("2025年1月起点で3ヶ月間隔 各月の1日 午後12時", "0 0 12 1 1/3 ? 2025"),
        ("毎秒", "* * * * * ? *"),
    ]);
}

#[test]
fn date_phrase_shapes() {
    check(vec![
        ("毎年1月・6月 午後12時", "0 0 12 ? JAN,JUN *"),
        ("毎年6月 午後12時", "0 0 12 ? 6 *"),
        ("毎年1月月曜日 午後12時", "0 0 12 ? JAN MON"),
        ("毎年1月〜3月1日 午後12時", "0 0 12 1 JAN-MAR ?"),
        ("毎年1月15日の月曜日 午後12時", "0 0 12 15 JAN MON"),
        ("毎年1月起点で3ヶ月間隔 各月の1日 午後12時", "0 0 12 1 1/3 ?"),
        ("毎年1月〜12月の間、3ヶ月間隔 各月の1日 午後12時", "0 0 12 1 1-12/3 ?"),
        ("毎月15日 午後12時", "0 0 12 15 * ?"),
        ("毎月月・最終金曜日 午後12時", "0 0 12 ? * 2,6L"),
        ("2026年の毎月月・最終金曜日 午後12時", "0 0 12 ? * MON,6L 2026"),
    ]);
}

#[test]
fn boundary_singles() {
    check(vec![
        ("毎分59秒", "59/1 * * * * ?"),
        ("毎日午前9時30分59秒", "59/1 30 9 * * ?"),
        ("毎日午前9時台に毎分59秒", "59/1 * 9 * * ?"),
        ("毎日午前9時0分59秒", "59/1 0/5 9 * * ?"),
        ("毎日午前0時30分59秒", "59/1 30 9-17 * * ?"),
        ("毎時30分59秒", "59/1 30 * * * ?"),
        ("毎日午前0時0分59秒", "59/1 0/5 9-17 * * ?"),
        ("毎日午前0時台に毎分59秒", "59/1 * 9-17 * * ?"),
        ("毎時0分59秒", "59/1 0/5 * * * ?"),
        ("毎日午後11時0分", "0 0 23/1 * * ?"),
        ("毎日午後11時台に毎分", "0 * 23/1 * * ?"),
        ("毎日午後11時台に毎分毎秒", "* * 23/1 * * ?"),
        ("毎日午後11時台に毎分15秒", "15 * 23/1 * * ?"),
        ("毎日午後11時0分", "0 0/5 23/1 * * ?"),
        ("毎日午後11時30分15秒", "15 30 23/1 * * ?"),
        ("毎時59分", "0 59/1 * * * ?"),
        ("毎日午前9時59分", "0 59/1 9 * * ?"),
        ("毎時59分に毎秒", "* 59/1 * * * ?"),
        ("毎時59分15秒", "15 59/1 * * * ?"),
    ]);
}

#[test]
fn second_spans() {
    check(vec![
        ("0〜30秒の間、10秒間隔", "0-30/10 * * * * ?"),
        ("毎日午前9時15分の0〜30秒の間、10秒間隔", "0-30/10 15 9 * * ?"),
        ("50〜10秒", "50-10 * * * * ?"),
    ]);
}

#[test]
fn second_intervals() {
    check(vec![
        ("毎秒", "* * * * * ?"),
        ("毎分0秒起点で10秒間隔", "*/10 * * * * ?"),
        ("毎日午前2時0分に毎秒", "0/1 0 2 * * ?"),
        ("毎日午前9時台に毎分0秒起点で5秒間隔", "*/5 * 9 * * ?"),
        ("毎時30分台に0秒起点で5秒間隔", "*/5 30 * * * ?"),
        ("毎時30分台に毎秒", "0/1 30 * * * ?"),
        ("毎日午前9時30分に0秒起点で10秒間隔", "*/10 30 9 * * ?"),
        ("毎日午前9時〜午後5時 毎時30分、0秒起点で10秒間隔", "*/10 30 9-17 * * ?"),
        ("毎日午前9時〜午後5時の間、各分の0秒起点で10秒間隔", "*/10 * 9-17 * * ?"),
        ("毎日午前0時起点で2時間間隔、各分の0秒起点で10秒間隔", "*/10 * 0/2 * * ?"),
        ("毎日午前0時起点で2時間間隔、各時の30分、各分の0秒起点で10秒間隔", "*/10 30 0/2 * * ?"),
    ]);
}

#[test]
fn second_intervals_under_minute_intervals() {
    check(vec![
        ("0分起点で5分間隔、各分の0秒起点で10秒間隔", "*/10 0/5 * * * ?"),
        ("毎日午前9時台に0分起点で5分間隔、各分の0秒起点で10秒間隔", "*/10 0/5 9 * * ?"),
        ("毎日午前9時〜午後5時の間、各時の0分起点で5分間隔、各分の0秒起点で10秒間隔", "*/10 0/5 9-17 * * ?"),
        (
            "毎日午前9時〜午後5時の間、2時間間隔、各時の0分起点で5分間隔、各分の0秒起点で10秒間隔",
            "*/10 0/5 9-17/2 * * ?",
        ),
        (
            "毎日午前2時起点で3時間間隔、各時の1分起点で10分間隔、各分の10秒起点で3秒間隔",
            "10/3 1/10 2/3 * * ?",
        ),
    ]);
}

#[test]
fn minute_spans() {
    check(vec![
        ("毎時45〜15分", "0 45-15 * * * ?"),
        ("毎日午前9時の45〜15分", "0 45-15 9 * * ?"),
        ("毎時50〜10分の間、5分間隔", "0 50-10/5 * * * ?"),
    ]);
}

#[test]
fn minute_intervals() {
    check(vec![
        ("毎分", "0 * * * * ?"),
        ("毎分15秒", "15 */1 * * * ?"),
        ("毎秒", "* */1 * * * ?"),
        ("毎日午前9時台に毎分", "0 0/1 9 * * ?"),
        ("毎日午前9時台に毎分毎秒", "* */1 9 * * ?"),
        ("毎時0分起点で15分間隔", "0 0/15 * * * ?"),
        ("毎時10分起点で20分間隔", "0 10/20 * * * ?"),
        ("毎時0分15秒起点で30分間隔", "15 0/30 * * * ?"),
        ("毎日午前9時0分起点で30分間隔", "0 0/30 9 * * ?"),
        ("毎日午前9時0分15秒起点で30分間隔", "15 0/30 9 * * ?"),
        ("毎日午前9時〜午後5時の間、毎時0分起点で30分間隔", "0 0/30 9-17 * * ?"),
        ("毎日午前9時〜午後5時の間、2時間間隔、毎時0分起点で30分間隔", "0 0/30 9-17/2 * * ?"),
        ("毎日午前0時起点で2時間間隔、各時の0分起点で30分間隔", "0 0/30 0/2 * * ?"),
        ("毎日午前0時起点で2時間間隔、各時の0分起点で30分間隔、各分の15秒", "15 0/30 0/2 * * ?"),
    ]);
}

#[test]
fn hour_ranges_with_interval() {
    check(vec![
        ("毎日午前9時〜午後5時の間、2時間間隔", "0 0 9-17/2 * * ?"),
        ("毎日午前9時〜午後5時の間、2時間間隔", "0 * 9-17/2 * * ?"),
        ("毎日午前9時〜午後5時の間、2時間間隔で30分", "0 30 9-17/2 * * ?"),
        ("毎日午後10時〜午前5時の間、2時間間隔で15分", "0 15 22-5/2 * * ?"),
        ("毎日午前9時〜午後5時の間、2時間間隔の0・30分", "0 0,30 9-17/2 * * ?"),
        ("毎日午前9時〜午後5時の間、毎時30分", "0 30 9-17/1 * * ?"),
        ("毎日午後10時〜午前5時", "0 0 22-5/1 * * ?"),
    ]);
}

#[test]
fn hour_intervals() {
    check(vec![
        ("毎日午前0時起点で2時間間隔", "0 0 */2 * * ?"),
        ("毎日午前0時起点で2時間間隔", "0 * 0/2 * * ?"),
        ("毎日午前0時30分起点で2時間間隔", "0 30 0/2 * * ?"),
        ("毎日午前0時30分15秒起点で2時間間隔", "15 30 0/2 * * ?"),
        ("毎日毎時0分", "0 0 */1 * * ?"),
        ("毎日毎時30分15秒", "15 30 */1 * * ?"),
        ("毎日毎分", "0 * */1 * * ?"),
        ("毎日午前0時0分起点で3時間間隔の15・45分", "0 15,45 */3 * * ?"),
        ("毎日午前0時0分起点で3時間間隔の15・45分30秒", "30 15,45 */3 * * ?"),
    ]);
}

#[test]
fn wildcard_mixes() {
    check(vec![
        ("毎分15秒", "15 * * * * ?"),
        ("毎時30分", "0 30 * * * ?"),
        ("毎時15・45分", "0 15,45 * * * ?"),
        ("毎時15・45分に毎秒", "* 15,45 * * * ?"),
        ("毎時15・45分10秒", "10 15,45 * * * ?"),
        ("毎日午前9時台に毎分", "0 * 9 * * ?"),
        ("毎日午前9時台に毎秒", "* * 9 * * ?"),
        ("毎日午前9時台に毎分10秒", "10 * 9 * * ?"),
        ("毎日午前9時〜午後5時の間、毎分", "0 * 9-17 * * ?"),
        ("毎日午前9時〜午後5時の間、毎分に毎秒", "* * 9-17 * * ?"),
        ("毎日午前9時〜午後5時の間、毎分10秒", "10 * 9-17 * * ?"),
    ]);
}

#[test]
fn fixed_times() {
    check(vec![
        ("毎日午前9時に毎秒", "* 0 9 * * ?"),
        ("毎日午前9時30分に毎秒", "* 30 9 * * ?"),
        ("毎日午前9時30分10秒", "10 30 9 * * ?"),
        ("毎日午前9時0分10秒", "10 0 9 * * ?"),
        ("毎日午前9時〜午後5時の間に毎秒", "* 0 9-17 * * ?"),
        ("毎日午前9時〜午後5時の間、毎時30分に毎秒", "* 30 9-17 * * ?"),
        ("毎日午前9時〜午後5時の間、毎時30分10秒", "10 30 9-17 * * ?"),
        ("毎日午前9時〜午後5時の間、毎時30分", "0 30 9-17 * * ?"),
    ]);
}

#[test]
fn hour_lists() {
    check(vec![
        ("毎日午前8・午後12時", "0 0 8,12 * * ?"),
        ("毎日午前9・午後12〜午後2時", "0 0 9,12-14 * * ?"),
        ("毎日午前8・午後12時に毎秒", "* 0 8,12 * * ?"),
        ("毎日午前8・午後12時30分に毎秒", "* 30 8,12 * * ?"),
        ("毎日午前8・午後12時30分10秒", "10 30 8,12 * * ?"),
        ("毎日午前8・午後12時の0・30分", "0 0,30 8,12 * * ?"),
        ("毎日午前8・午後12時の0・30分に毎秒", "* 0,30 8,12 * * ?"),
        ("毎日午前8・午後12時の0・30分10秒", "10 0,30 8,12 * * ?"),
        ("毎日午前8・午後12時の0・30分0・30秒", "0,30 0,30 8,12 * * ?"),
    ]);
}
