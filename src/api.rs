use crate::CronFields;
use crate::describe::build_description;
use crate::error::TranslateError;
use crate::field::{ParsedField, parse_field};
use crate::translate::translate_field;
use crate::validate::validate;
use serde::Serialize;

/// Crate version, reported by front ends.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Options that affect translation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Describe the expression even if [`validate`](crate::validate) rejects it.
    ///
    /// Output for invalid input is best effort and may read oddly; only the
    /// field-count check still applies.
    pub skip_validation: bool,
}

/// One field of a successful translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    /// Field text as parsed. Day-of-month, month and day-of-week are
    /// upper-cased.
    pub raw: String,
    pub parsed: ParsedField,
    /// Japanese phrase for this field alone.
    pub translated: String,
}

/// Result of a successful [`translate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub description: String,
    pub fields: CronFields<FieldInfo>,
}

pub type TranslateResult = Result<Translation, TranslateError>;

/// Translate `expr` with default [`Options`].
///
/// # Example
/// ```
/// use quartz_cron_jp::translate;
///
/// assert_eq!(translate("0 0 12 * * ?").unwrap().description, "毎日午後12時");
///
/// let err = translate("0 0 25 * * ?").unwrap_err();
/// assert!(err.error().contains("25"));
/// ```
pub fn translate(expr: &str) -> TranslateResult {
    translate_with(expr, &Options::default())
}

/// Translate `expr`, honouring `options`.
pub fn translate_with(expr: &str, options: &Options) -> TranslateResult {
    let raw = CronFields::split(expr).inspect_err(|err| tracing::debug!(expr, %err, "refused: field count"))?;

    if !options.skip_validation {
        let validation = validate(expr);
        if !validation.is_valid {
            tracing::debug!(expr, errors = validation.errors.len(), "refused: validation failed");
            return Err(TranslateError::Validation { errors: validation.errors });
        }
    }

    let raw = raw.with_uppercase_calendar();
    let parsed = raw.map(|field, value| parse_field(value, field));
    let translated = parsed.map(|field, value| translate_field(value, field));
    let description = build_description(&translated, &parsed);

    tracing::debug!(
        expr,
        fields = raw.iter().count(),
        skip_validation = options.skip_validation,
        description = description.as_str(),
        "translated expression"
    );

    let fields = raw.zip(parsed).zip(translated).map(|_, ((raw, parsed), translated)| FieldInfo {
        raw: raw.clone(),
        parsed: parsed.clone(),
        translated: translated.text.clone(),
    });

    Ok(Translation { description, fields })
}
