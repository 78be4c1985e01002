//! Quartz cron expressions to Japanese.
//!
//! ```
//! use quartz_cron_jp::translate;
//!
//! let out = translate("0 30 9 ? * MON-FRI").unwrap();
//! assert_eq!(out.description, "毎週平日（月〜金） 午前9時30分");
//! ```
//!
//! The pipeline is split the same way the public functions are:
//! [`parse_field`] classifies each raw field, [`translate_field`] gives it a
//! Japanese phrase plus shape flags, and [`build_description`] merges the seven
//! fields into one sentence. [`validate`] runs separately on the raw text and
//! gates [`translate`].

#[macro_use]
mod macros;
mod api;
mod describe;
mod error;
mod field;
mod lexicon;
mod translate;
mod validate;

pub use api::{FieldInfo, Options, TranslateResult, Translation, VERSION, translate, translate_with};
pub use describe::{FALLBACK_DESCRIPTION, build_description};
pub use error::{FIELD_COUNT_DETAIL, FIELD_COUNT_MESSAGE, ParseFieldTypeError, TranslateError};
pub use field::{FieldType, ParsedField, parse_field};
pub use translate::{FieldFlags, TranslatedField, translate_field};
pub use validate::{ValidationResult, validate};

use serde::Serialize;

// --- Shared types -----------------------------------------------------------

/// One value per field of an expression, in expression order.
///
/// The same record carries raw text, parsed nodes, translations and reported
/// field info. `year` is `None` for six-field expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CronFields<T> {
    pub second: T,
    pub minute: T,
    pub hour: T,
    pub day_of_month: T,
    pub month: T,
    pub day_of_week: T,
    pub year: Option<T>,
}

impl<T> CronFields<T> {
    /// Apply `f` to every present field, keeping the layout.
    pub fn map<U>(&self, mut f: impl FnMut(FieldType, &T) -> U) -> CronFields<U> {
        CronFields {
            second: f(FieldType::Second, &self.second),
            minute: f(FieldType::Minute, &self.minute),
            hour: f(FieldType::Hour, &self.hour),
            day_of_month: f(FieldType::DayOfMonth, &self.day_of_month),
            month: f(FieldType::Month, &self.month),
            day_of_week: f(FieldType::DayOfWeek, &self.day_of_week),
            year: self.year.as_ref().map(|year| f(FieldType::Year, year)),
        }
    }

    /// Pair every field with the same field of `other`.
    pub fn zip<U>(self, other: CronFields<U>) -> CronFields<(T, U)> {
        CronFields {
            second: (self.second, other.second),
            minute: (self.minute, other.minute),
            hour: (self.hour, other.hour),
            day_of_month: (self.day_of_month, other.day_of_month),
            month: (self.month, other.month),
            day_of_week: (self.day_of_week, other.day_of_week),
            year: self.year.zip(other.year),
        }
    }

    /// Present fields with their type; six items, or seven with a year.
    pub fn iter(&self) -> impl Iterator<Item = (FieldType, &T)> {
        [
            (FieldType::Second, &self.second),
            (FieldType::Minute, &self.minute),
            (FieldType::Hour, &self.hour),
            (FieldType::DayOfMonth, &self.day_of_month),
            (FieldType::Month, &self.month),
            (FieldType::DayOfWeek, &self.day_of_week),
        ]
        .into_iter()
        .chain(self.year.as_ref().map(|year| (FieldType::Year, year)))
    }
}

impl CronFields<String> {
    /// Split an expression on runs of whitespace.
    ///
    /// Anything other than six or seven fields is a
    /// [`TranslateError::FieldCount`].
    pub fn split(expr: &str) -> Result<Self, TranslateError> {
        let parts: Vec<&str> = expr.split_whitespace().collect();
        let [second, minute, hour, day_of_month, month, day_of_week, rest @ ..] = parts.as_slice() else {
            return Err(TranslateError::FieldCount { found: parts.len() });
        };
        let year = match rest {
            [] => None,
            [year] => Some(year.to_string()),
            _ => return Err(TranslateError::FieldCount { found: parts.len() }),
        };

        Ok(CronFields {
            second: second.to_string(),
            minute: minute.to_string(),
            hour: hour.to_string(),
            day_of_month: day_of_month.to_string(),
            month: month.to_string(),
            day_of_week: day_of_week.to_string(),
            year,
        })
    }

    /// Upper-case the calendar fields so `mon`, `jan` and `l` read like their
    /// canonical spellings. Time fields and the year are left alone.
    pub(crate) fn with_uppercase_calendar(mut self) -> Self {
        for value in [&mut self.day_of_month, &mut self.month, &mut self.day_of_week] {
            *value = value.to_ascii_uppercase();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_accepts_six_or_seven_fields() {
        let six = CronFields::split("  0 30\t9 ? *  MON-FRI ").unwrap();
        assert_eq!(six.hour, "9");
        assert_eq!(six.day_of_week, "MON-FRI");
        assert_eq!(six.year, None);
        assert_eq!(six.iter().count(), 6);

        let seven = CronFields::split("0 0 0 1 1 ? 2025").unwrap();
        assert_eq!(seven.year.as_deref(), Some("2025"));
        assert_eq!(seven.iter().last(), Some((FieldType::Year, &"2025".to_string())));
    }

    #[test]
    fn split_rejects_other_counts() {
        for (found, expr) in [(0, ""), (5, "0 0 12 * *"), (8, "0 0 12 * * ? 2025 x")] {
            assert_eq!(CronFields::split(expr), Err(TranslateError::FieldCount { found }), "{expr:?}");
        }
    }

    #[test]
    fn uppercase_touches_only_calendar_fields() {
        let fields = CronFields::split("0 0 12 lw jan-mar ? 2025").unwrap().with_uppercase_calendar();
        assert_eq!(fields.day_of_month, "LW");
        assert_eq!(fields.month, "JAN-MAR");
        assert_eq!(fields.day_of_week, "?");

        let lengths = fields.map(|_, value| value.len());
        assert_eq!(lengths.month, 7);
        assert_eq!(lengths.year, Some(4));
    }
}
