//! First-match string extraction.
//!
//! This is the core scanner the number and enum extractors build on. For
//! each candidate name in order, tokens are scanned left to right for either
//! `name=value` (the value is everything after the first `=`, possibly
//! empty) or a bare `name` followed by a value token. A bare occurrence whose
//! successor is missing or looks like a flag carries no value; the scan
//! resumes right after it, so the flag-like successor can itself be matched.

use tracing::{debug, trace};

use crate::names::{Occurrence, occurrence};
use crate::{ExtractError, ExtractorKind, FlagNames, Requirement, Result, is_flag_token, validate};

/// Returns the first value supplied for any of `names`.
///
/// Names are tried in order; the first name that yields a value wins even if
/// a later name appears earlier in `tokens`.
///
/// # Examples
///
/// ```
/// use argv_extract_core::{Requirement, extract_string};
///
/// let argv = ["node", "app", "--key", "-c", "d", "--key", "value"];
/// let value = extract_string("--key", Requirement::Optional, None, &argv).unwrap();
/// assert_eq!(value.as_deref(), Some("value"));
///
/// let argv = ["app", "--name="];
/// let value = extract_string(["--name", "-n"], Requirement::Required, None, &argv).unwrap();
/// assert_eq!(value.as_deref(), Some(""));
/// ```
///
/// # Errors
///
/// - [`ExtractError::InvalidKey`] if any name is malformed.
/// - [`ExtractError::MissingArgument`] if `requirement` is
///   [`Requirement::Required`] and no name yields a value.
pub fn extract_string<'a, S: AsRef<str>>(
    names: impl Into<FlagNames<'a>>,
    requirement: Requirement,
    description: Option<&str>,
    tokens: &[S],
) -> Result<Option<String>> {
    let names = names.into();
    validate(ExtractorKind::String, &names)?;
    lookup(&names, requirement, description, tokens)
}

/// Like [`extract_string`] with [`Requirement::Required`], returning the
/// value directly.
///
/// # Errors
///
/// Same as [`extract_string`].
pub fn require_string<'a, S: AsRef<str>>(
    names: impl Into<FlagNames<'a>>,
    description: Option<&str>,
    tokens: &[S],
) -> Result<String> {
    let names = names.into();
    extract_string(names.clone(), Requirement::Required, description, tokens)?
        .ok_or_else(|| ExtractError::missing(&names, description))
}

/// Scan over already validated names, applying requirement semantics.
pub(crate) fn lookup<S: AsRef<str>>(
    names: &FlagNames<'_>,
    requirement: Requirement,
    description: Option<&str>,
    tokens: &[S],
) -> Result<Option<String>> {
    match find_value(names, tokens) {
        Some(value) => {
            debug!(names = ?names.as_slice(), value, "flag value found");
            Ok(Some(value.to_string()))
        }
        None if requirement.is_required() => Err(ExtractError::missing(names, description)),
        None => {
            debug!(names = ?names.as_slice(), "flag not present");
            Ok(None)
        }
    }
}

pub(crate) fn find_value<'t, S: AsRef<str>>(
    names: &FlagNames<'_>,
    tokens: &'t [S],
) -> Option<&'t str> {
    names.iter().find_map(|name| find_value_for(name, tokens))
}

fn find_value_for<'t, S: AsRef<str>>(name: &str, tokens: &'t [S]) -> Option<&'t str> {
    let mut cursor = 0;
    while let Some(token) = tokens.get(cursor) {
        let index = cursor;
        cursor += 1;
        match occurrence(token.as_ref(), name) {
            Some(Occurrence::Joined(value)) => return Some(value),
            Some(Occurrence::Bare) => match tokens.get(cursor).map(AsRef::as_ref) {
                Some(next) if !is_flag_token(next) => return Some(next),
                next => trace!(name, index, ?next, "flag has no value, resuming scan"),
            },
            None => {}
        }
    }
    None
}
