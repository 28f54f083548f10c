//! Numeric extraction on top of the string scanner.

use tracing::debug;

use crate::string::lookup;
use crate::{ExtractError, ExtractorKind, FlagNames, Requirement, Result, validate};

/// Extracts the first value for `names` and parses it as an `f64`.
///
/// Negative and fractional values (`-123.55`) are accepted in both the
/// `--key value` and `--key=value` forms. A value that is present but not a
/// number is an error only when `requirement` is
/// [`Requirement::Required`]; otherwise it is treated as absent.
///
/// # Examples
///
/// ```
/// use argv_extract_core::{Requirement, extract_number};
///
/// let argv = ["app", "--key", "-123.55"];
/// let value = extract_number("--key", Requirement::Optional, None, &argv).unwrap();
/// assert_eq!(value, Some(-123.55));
///
/// let argv = ["app", "--key=test"];
/// assert_eq!(extract_number("--key", Requirement::Optional, None, &argv).unwrap(), None);
/// assert!(extract_number("--key", Requirement::Required, None, &argv).is_err());
/// ```
///
/// # Errors
///
/// - [`ExtractError::InvalidKey`] if any name is malformed.
/// - [`ExtractError::MissingArgument`] if required and absent.
/// - [`ExtractError::InvalidNumber`] if required and the value does not
///   parse.
pub fn extract_number<'a, S: AsRef<str>>(
    names: impl Into<FlagNames<'a>>,
    requirement: Requirement,
    description: Option<&str>,
    tokens: &[S],
) -> Result<Option<f64>> {
    let names = names.into();
    validate(ExtractorKind::Number, &names)?;

    let Some(raw) = lookup(&names, requirement, description, tokens)? else {
        return Ok(None);
    };

    match parse_number(&raw) {
        Some(number) => Ok(Some(number)),
        None if requirement.is_required() => {
            Err(ExtractError::invalid_number(&names, &raw, description))
        }
        None => {
            debug!(names = ?names.as_slice(), raw = %raw, "ignoring non-numeric value");
            Ok(None)
        }
    }
}

/// Like [`extract_number`] with [`Requirement::Required`], returning the
/// number directly.
///
/// # Errors
///
/// Same as [`extract_number`].
pub fn require_number<'a, S: AsRef<str>>(
    names: impl Into<FlagNames<'a>>,
    description: Option<&str>,
    tokens: &[S],
) -> Result<f64> {
    let names = names.into();
    extract_number(names.clone(), Requirement::Required, description, tokens)?
        .ok_or_else(|| ExtractError::missing(&names, description))
}

/// Parses a flag value as a floating-point number.
///
/// Surrounding whitespace is ignored. Exponent forms are accepted; `NaN`
/// and infinities are rejected so every accepted value survives a JSON
/// round trip.
///
/// # Examples
///
/// ```
/// use argv_extract_core::parse_number;
///
/// assert_eq!(parse_number("42"), Some(42.0));
/// assert_eq!(parse_number(" -0.5 "), Some(-0.5));
/// assert_eq!(parse_number("1e3"), Some(1000.0));
/// assert_eq!(parse_number("NaN"), None);
/// assert_eq!(parse_number("inf"), None);
/// assert_eq!(parse_number("12abc"), None);
/// ```
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}
