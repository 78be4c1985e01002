//! Error types for quartz-cron-jp

use thiserror::Error;

/// Headline reported when an expression does not have six or seven fields.
pub const FIELD_COUNT_MESSAGE: &str = "Quartz Cronは6〜7フィールド必要です（秒 分 時 日 月 曜日 [年]）";

/// Detail reported alongside [`FIELD_COUNT_MESSAGE`] by `translate`.
pub const FIELD_COUNT_DETAIL: &str = "フィールド数が不正です";

/// Reasons `translate` refuses to describe an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The expression does not split into six or seven fields.
    #[error("{}", FIELD_COUNT_MESSAGE)]
    FieldCount { found: usize },

    /// The expression has the right shape but fails validation.
    #[error("{}", .errors.first().map(String::as_str).unwrap_or_default())]
    Validation { errors: Vec<String> },
}

impl TranslateError {
    /// Headline message (the first validation error, or the field-count notice).
    pub fn error(&self) -> String {
        self.to_string()
    }

    /// Every validation error that caused the refusal.
    pub fn validation_errors(&self) -> Vec<&str> {
        match self {
            TranslateError::FieldCount { .. } => vec![FIELD_COUNT_DETAIL],
            TranslateError::Validation { errors } => errors.iter().map(String::as_str).collect(),
        }
    }
}

/// Returned by `FieldType::from_str` for names other than the seven wire names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field type '{0}' (expected second, minute, hour, dayOfMonth, month, dayOfWeek or year)")]
pub struct ParseFieldTypeError(pub String);
