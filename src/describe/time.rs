//! Time-of-day phrase: second, minute and hour merged into one phrase.
//!
//! Shapes are tried in a fixed order and the first that applies wins:
//!
//! ```text
//! (1) boundary singles  59/1 sec, 23/1 hour, 59/1 min
//! (2) second span       0-30/10, 50-10
//! (3) second interval   */5, 0/1 ...
//! (4) minute span       45-15, 50-10/5
//! (5) minute interval   0/15, */1 ...
//! (6) hour range+step   9-17/2
//! (7) hour interval     0/2, */1
//! (8) wildcard mixes    * * / N * / * N / range *
//! (9) fixed time        9:30, 8,12,18 o'clock, 9-17 o'clock
//! ```
//!
//! A zero minute is dropped (`午前9時`, not `午前9時0分`) unless a non-zero
//! second is spelled out, in which case the minute is kept for clarity.

use crate::CronFields;
use crate::field::ParsedField;
use crate::lexicon::{format_hour12, format_hour12_bare, format_time_with_sec12, format_time12, int_or_zero};
use crate::translate::TranslatedField;

pub(super) struct TimeOfDay<'a> {
    second: &'a TranslatedField,
    minute: &'a TranslatedField,
    hour: &'a TranslatedField,
    parsed_second: &'a ParsedField,
    parsed_minute: &'a ParsedField,
    parsed_hour: &'a ParsedField,
    /// Value of a single second, 0 for every other shape.
    sec: i64,
    /// Value of a single minute, 0 for every other shape.
    min: i64,
}

impl<'a> TimeOfDay<'a> {
    pub(super) fn new(translated: &'a CronFields<TranslatedField>, parsed: &'a CronFields<ParsedField>) -> Self {
        Self {
            second: &translated.second,
            minute: &translated.minute,
            hour: &translated.hour,
            parsed_second: &parsed.second,
            parsed_minute: &parsed.minute,
            parsed_hour: &parsed.hour,
            sec: parsed.second.value().map_or(0, int_or_zero),
            min: parsed.minute.value().map_or(0, int_or_zero),
        }
    }

    pub(super) fn describe(&self) -> String {
        self.boundary_second()
            .or_else(|| self.boundary_hour())
            .or_else(|| self.boundary_minute())
            .or_else(|| self.second_span())
            .or_else(|| self.second_interval())
            .or_else(|| self.minute_span())
            .or_else(|| self.minute_interval())
            .or_else(|| self.hour_range_with_interval())
            .or_else(|| self.hour_interval())
            .or_else(|| self.wildcards())
            .unwrap_or_else(|| self.fixed_time())
    }

    /// The second, when it is a plain non-zero value worth spelling out.
    fn explicit_second(&self) -> Option<i64> {
        (self.sec != 0 && self.parsed_second.is_single()).then_some(self.sec)
    }

    /// Hour of a single-valued hour field (`0` when it is not one).
    fn hour_value(&self) -> i64 {
        int_or_zero(self.parsed_hour.value().unwrap_or("0"))
    }

    /// `午前9時〜午後5時` for a plain hour range.
    fn hour_range(&self) -> Option<String> {
        match self.parsed_hour {
            ParsedField::Range { from, to, .. } => {
                Some(format!("{}〜{}", format_hour12(int_or_zero(from)), format_hour12(int_or_zero(to))))
            }
            _ => None,
        }
    }

    /// `HH:MM[:SS]` with the second only when it is explicit.
    fn clock(&self, hour: i64, minute: i64) -> String {
        match self.explicit_second() {
            Some(sec) => format_time_with_sec12(hour, minute, sec),
            None => format_time12(hour, minute),
        }
    }

    // (1) ---------------------------------------------------------------------

    fn boundary_second(&self) -> Option<String> {
        if !self.second.is_single() {
            return None;
        }
        let sec = raw_start(self.parsed_second);
        let sec_n = int_or_zero(sec);

        let text = if self.hour.is_single() {
            let hour = int_or_zero(raw_start(self.parsed_hour));
            if self.minute.is_single() {
                format_time_with_sec12(hour, int_or_zero(raw_start(self.parsed_minute)), sec_n)
            } else if !self.minute.is_all() {
                format_time_with_sec12(hour, self.min, sec_n)
            } else {
                format!("{}台に毎分{sec}秒", format_hour12(hour))
            }
        } else if self.minute.is_single() {
            let minute = raw_start(self.parsed_minute);
            if !self.hour.is_all() {
                format_time_with_sec12(self.hour_value(), int_or_zero(minute), sec_n)
            } else {
                format!("毎時{minute}分{sec}秒")
            }
        } else {
            match (self.hour.is_all(), self.minute.is_all()) {
                (false, false) => format_time_with_sec12(self.hour_value(), self.min, sec_n),
                (false, true) => format!("{}台に毎分{sec}秒", format_hour12(self.hour_value())),
                (true, false) => format!("毎時{}分{sec}秒", self.min),
                (true, true) => format!("毎分{sec}秒"),
            }
        };
        Some(text)
    }

    fn boundary_hour(&self) -> Option<String> {
        if !self.hour.is_single() {
            return None;
        }
        let hour = int_or_zero(raw_start(self.parsed_hour));

        let text = if self.minute.is_single() {
            self.clock(hour, int_or_zero(raw_start(self.parsed_minute)))
        } else if !self.minute.is_all() {
            self.clock(hour, self.min)
        } else if self.second.is_all() {
            format!("{}台に毎分毎秒", format_hour12(hour))
        } else if let Some(sec) = self.explicit_second() {
            format!("{}台に毎分{sec}秒", format_hour12(hour))
        } else {
            format!("{}台に毎分", format_hour12(hour))
        };
        Some(text)
    }

    fn boundary_minute(&self) -> Option<String> {
        if !self.minute.is_single() {
            return None;
        }
        let minute = raw_start(self.parsed_minute);

        let text = if !self.hour.is_all() {
            self.clock(self.hour_value(), int_or_zero(minute))
        } else if self.second.is_all() {
            format!("毎時{minute}分に毎秒")
        } else if let Some(sec) = self.explicit_second() {
            format!("毎時{minute}分{sec}秒")
        } else {
            format!("毎時{minute}分")
        };
        Some(text)
    }

    // (2) ---------------------------------------------------------------------

    fn second_span(&self) -> Option<String> {
        let span = match self.parsed_second {
            ParsedField::RangeWithInterval { from, to, interval, .. } => format!("{from}〜{to}秒の間、{interval}秒間隔"),
            ParsedField::Range { from, to, .. } => format!("{from}〜{to}秒"),
            _ => return None,
        };
        if !self.hour.is_all() && !self.minute.is_all() {
            return Some(format!("{}の{span}", format_time12(self.hour_value(), self.min)));
        }
        Some(span)
    }

    // (3) ---------------------------------------------------------------------

    fn second_interval(&self) -> Option<String> {
        if !self.second.is_interval() {
            return None;
        }
        let second = &self.second.text;

        if self.second.is_every_second() && self.hour.is_all() && self.minute.is_all() {
            return Some("毎秒".to_string());
        }

        if self.minute.is_interval() {
            let minute = &self.minute.text;
            let text = if self.hour.is_interval() {
                let (hour_start, hour_step) = interval_parts(self.parsed_hour);
                let (min_start, min_step) = interval_parts(self.parsed_minute);
                let (sec_start, sec_step) = interval_parts(self.parsed_second);
                format!(
                    "{}起点で{hour_step}時間間隔、各時の{min_start}分起点で{min_step}分間隔、各分の{sec_start}秒起点で{sec_step}秒間隔",
                    format_hour12(int_or_zero(hour_start))
                )
            } else if self.hour.is_range_with_interval() {
                format!("{}、各時の{minute}、各分の{second}", self.hour.text)
            } else if let Some(range) = self.hour_range() {
                format!("{range}の間、各時の{minute}、各分の{second}")
            } else if !self.hour.is_all() {
                format!("{}台に{minute}、各分の{second}", format_hour12(self.hour_value()))
            } else {
                format!("{minute}、各分の{second}")
            };
            return Some(text);
        }

        if self.hour.is_interval() || self.hour.is_range_with_interval() {
            if !self.minute.is_all() {
                return Some(format!("{}、各時の{}分、各分の{second}", self.hour.text, self.min));
            }
            return Some(format!("{}、各分の{second}", self.hour.text));
        }

        if let Some(range) = self.hour_range() {
            if !self.minute.is_all() {
                return Some(format!("{range} 毎時{}分、{second}", self.min));
            }
            return Some(format!("{range}の間、各分の{second}"));
        }

        let text = match (self.hour.is_all(), self.minute.is_all()) {
            (false, false) => format!("{}に{second}", format_time12(self.hour_value(), self.min)),
            (false, true) => format!("{}台に毎分{second}", format_hour12(self.hour_value())),
            (true, false) if self.second.is_every_second() => format!("毎時{}分台に毎秒", self.min),
            (true, false) => format!("毎時{}分台に{second}", self.min),
            (true, true) => format!("毎分{second}"),
        };
        Some(text)
    }

    // (4) ---------------------------------------------------------------------

    fn minute_span(&self) -> Option<String> {
        let span = match self.parsed_minute {
            ParsedField::Range { from, to, .. } => format!("{from}〜{to}分"),
            ParsedField::RangeWithInterval { from, to, interval, .. } => format!("{from}〜{to}分の間、{interval}分間隔"),
            _ => return None,
        };
        if !self.hour.is_all() {
            return Some(format!("{}の{span}", format_hour12(self.hour_value())));
        }
        Some(format!("毎時{span}"))
    }

    // (5) ---------------------------------------------------------------------

    fn minute_interval(&self) -> Option<String> {
        if !self.minute.is_interval() {
            return None;
        }

        if self.minute.is_every_minute() {
            let lead = if self.hour.is_all() { String::new() } else { format!("{}台に", format_hour12(self.hour_value())) };
            let text = if self.second.is_all() {
                if self.hour.is_all() { "毎秒".to_string() } else { format!("{lead}毎分毎秒") }
            } else if let Some(sec) = self.explicit_second() {
                format!("{lead}毎分{sec}秒")
            } else {
                format!("{lead}毎分")
            };
            return Some(text);
        }

        let (min_start, min_step) = interval_parts(self.parsed_minute);
        let sec = self.explicit_second();
        let start = match sec {
            Some(sec) => format!("{min_start}分{sec}秒"),
            None => format!("{min_start}分"),
        };

        if self.hour.is_interval() {
            let (hour_start, hour_step) = interval_parts(self.parsed_hour);
            let base = format!(
                "{}起点で{hour_step}時間間隔、各時の{min_start}分起点で{min_step}分間隔",
                format_hour12(int_or_zero(hour_start))
            );
            return Some(match sec {
                Some(sec) => format!("{base}、各分の{sec}秒"),
                None => base,
            });
        }

        if self.hour.is_range_with_interval() {
            return Some(format!("{}、毎時{start}起点で{min_step}分間隔", self.hour.text));
        }

        if self.hour.is_all() {
            return Some(format!("毎時{start}起点で{min_step}分間隔"));
        }

        if let Some(range) = self.hour_range() {
            return Some(format!("{range}の間、毎時{start}起点で{min_step}分間隔"));
        }

        Some(format!("{}起点で{min_step}分間隔", self.clock(self.hour_value(), int_or_zero(min_start))))
    }

    // (6) ---------------------------------------------------------------------

    fn hour_range_with_interval(&self) -> Option<String> {
        if !self.hour.is_range_with_interval() {
            return None;
        }
        let hour = &self.hour.text;

        let text = match self.parsed_minute {
            ParsedField::List { items } => format!("{hour}の{}分", list_values(items)),
            ParsedField::Single { value } => {
                let minute = int_or_zero(value);
                if self.hour.interval_value.as_deref() == Some("1") {
                    match hour.strip_suffix("の間、毎時") {
                        Some(range) if minute == 0 => range.to_string(),
                        Some(range) => format!("{range}の間、毎時{minute}分"),
                        None => hour.clone(),
                    }
                } else if minute == 0 {
                    hour.clone()
                } else {
                    format!("{hour}で{minute}分")
                }
            }
            _ => hour.clone(),
        };
        Some(text)
    }

    // (7) ---------------------------------------------------------------------

    fn hour_interval(&self) -> Option<String> {
        if !self.hour.is_interval() {
            return None;
        }
        let (hour_start, hour_step) = interval_parts(self.parsed_hour);
        let hour_start = int_or_zero(hour_start);

        if self.hour.is_every_hour() && self.minute.is_all() {
            return Some(self.every_minute());
        }

        if let ParsedField::List { items } = self.parsed_minute {
            let minutes = list_values(items);
            let text = match self.explicit_second() {
                Some(sec) => format!("{}起点で{hour_step}時間間隔の{minutes}分{sec}秒", format_time12(hour_start, 0)),
                None => format!("{}起点で{hour_step}時間間隔の{minutes}分", format_time12(hour_start, 0)),
            };
            return Some(text);
        }

        if self.minute.is_all() {
            return Some(self.hour.text.clone());
        }

        let minute = self.min;
        let sec = self.explicit_second();
        let text = if self.hour.is_every_hour() {
            match sec {
                Some(sec) => format!("毎時{minute}分{sec}秒"),
                None => format!("毎時{minute}分"),
            }
        } else if let Some(sec) = sec {
            format!("{}起点で{hour_step}時間間隔", format_time_with_sec12(hour_start, minute, sec))
        } else if minute == 0 {
            format!("{}起点で{hour_step}時間間隔", format_hour12(hour_start))
        } else {
            format!("{}起点で{hour_step}時間間隔", format_time12(hour_start, minute))
        };
        Some(text)
    }

    // (8) ---------------------------------------------------------------------

    fn wildcards(&self) -> Option<String> {
        let hour_all = self.hour.is_all();
        let minute_all = self.minute.is_all();

        if hour_all && minute_all {
            return Some(self.every_minute());
        }

        if hour_all {
            let minutes = match self.parsed_minute {
                ParsedField::List { items } => format!("{}分", list_values(items)),
                _ => format!("{}分", self.min),
            };
            let text = if self.second.is_all() {
                format!("毎時{minutes}に毎秒")
            } else if let Some(sec) = self.explicit_second() {
                format!("毎時{minutes}{sec}秒")
            } else {
                format!("毎時{minutes}")
            };
            return Some(text);
        }

        if !minute_all {
            return None;
        }

        let lead = match self.hour_range() {
            Some(range) => {
                let text = if self.second.is_all() {
                    format!("{range}の間、毎分に毎秒")
                } else if let Some(sec) = self.explicit_second() {
                    format!("{range}の間、毎分{sec}秒")
                } else {
                    format!("{range}の間、毎分")
                };
                return Some(text);
            }
            None => format_hour12(self.hour_value()),
        };
        let text = if self.second.is_all() {
            format!("{lead}台に毎秒")
        } else if let Some(sec) = self.explicit_second() {
            format!("{lead}台に毎分{sec}秒")
        } else {
            format!("{lead}台に毎分")
        };
        Some(text)
    }

    /// Phrase for "every minute of every hour", honouring the second field.
    fn every_minute(&self) -> String {
        if self.second.is_all() {
            "毎秒".to_string()
        } else if let Some(sec) = self.explicit_second() {
            format!("毎分{sec}秒")
        } else {
            "毎分".to_string()
        }
    }

    // (9) ---------------------------------------------------------------------

    fn fixed_time(&self) -> String {
        let minute = self.min;
        let sec = self.explicit_second();

        if let ParsedField::List { items } = self.parsed_hour {
            return self.hour_list_time(items);
        }

        if let Some(range) = self.hour_range() {
            return if self.second.is_all() {
                if minute == 0 { format!("{range}の間に毎秒") } else { format!("{range}の間、毎時{minute}分に毎秒") }
            } else if let Some(sec) = sec {
                format!("{range}の間、毎時{minute}分{sec}秒")
            } else if minute == 0 {
                range
            } else {
                format!("{range}の間、毎時{minute}分")
            };
        }

        let hour = int_or_zero(self.parsed_hour.value().or(self.parsed_hour.range_from()).unwrap_or("0"));
        if self.second.is_all() {
            return if minute == 0 {
                format!("{}に毎秒", format_hour12(hour))
            } else {
                format!("{}に毎秒", format_time12(hour, minute))
            };
        }
        if let Some(sec) = sec {
            return format_time_with_sec12(hour, minute, sec);
        }
        if minute == 0 { format_hour12(hour) } else { format_time12(hour, minute) }
    }

    /// `午前8・午後12・午後6時30分` for an hour list.
    fn hour_list_time(&self, items: &[ParsedField]) -> String {
        let hours: Vec<String> = items
            .iter()
            .filter_map(|item| match item {
                ParsedField::Range { from, to, .. } => Some(format!(
                    "{}〜{}",
                    format_hour12_bare(int_or_zero(from)),
                    format_hour12_bare(int_or_zero(to))
                )),
                other => other.value().map(|value| format_hour12_bare(int_or_zero(value))),
            })
            .collect();
        let hours = format!("{}時", hours.join("・"));
        let minute = self.min;
        let sec = self.explicit_second();

        if let ParsedField::List { items } = self.parsed_minute {
            let minutes = format!("{hours}の{}分", list_values(items));
            if let ParsedField::List { items } = self.parsed_second {
                return format!("{minutes}{}秒", list_values(items));
            }
            if self.second.is_all() {
                return format!("{minutes}に毎秒");
            }
            return match sec {
                Some(sec) => format!("{minutes}{sec}秒"),
                None => minutes,
            };
        }

        if self.second.is_all() {
            return if minute == 0 { format!("{hours}に毎秒") } else { format!("{hours}{minute}分に毎秒") };
        }
        match sec {
            Some(sec) => format!("{hours}{minute}分{sec}秒"),
            None if minute == 0 => hours,
            None => format!("{hours}{minute}分"),
        }
    }
}

/// Raw start of an interval node, `"0"` for any other shape.
fn raw_start(parsed: &ParsedField) -> &str {
    parsed.start().unwrap_or("0")
}

/// Start (with `*` read as `0`) and step of an interval node.
fn interval_parts(parsed: &ParsedField) -> (&str, &str) {
    match parsed {
        ParsedField::Interval { start, interval } if start == "*" => ("0", interval.as_str()),
        ParsedField::Interval { start, interval } => (start.as_str(), interval.as_str()),
        _ => ("0", ""),
    }
}

/// `0・15・30` for list items; ranges read `10〜20`.
fn list_values(items: &[ParsedField]) -> String {
    let values: Vec<String> = items
        .iter()
        .filter_map(|item| match item {
            ParsedField::Single { value } => Some(value.clone()),
            ParsedField::Range { from, to, .. } => Some(format!("{from}〜{to}")),
            _ => None,
        })
        .collect();
    values.join("・")
}
