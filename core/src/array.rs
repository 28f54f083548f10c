//! Multi-valued extraction.
//!
//! Unlike the first-match scanner, this walks the whole token list once per
//! candidate name and keeps every value it finds. A value wrapped in double
//! quotes is a comma-separated list: `"1,2,3"` contributes three elements.

use tracing::{debug, trace};

use crate::names::{Occurrence, occurrence};
use crate::{ExtractError, ExtractorKind, FlagNames, Requirement, Result, is_flag_token, validate};

/// Collects the values of every occurrence of every name in `names`.
///
/// Results are grouped by name in the order the names were given, and in
/// token order within each name. Bare occurrences followed by a flag-like
/// token (or by nothing) contribute no value. When `requirement` is
/// [`Requirement::Required`], a successful result is never empty.
///
/// # Examples
///
/// ```
/// use argv_extract_core::{Requirement, extract_array};
///
/// let argv = ["node", "app", "--key", "\"1,2,3\"", "--key", "\"a,b\""];
/// let values = extract_array("--key", Requirement::Optional, None, &argv).unwrap();
/// assert_eq!(values, Some(vec!["1", "2", "3", "a", "b"].into_iter().map(String::from).collect()));
///
/// let argv = ["app", "-t", "x", "--tag=y"];
/// let values = extract_array(["--tag", "-t"], Requirement::Required, None, &argv).unwrap();
/// assert_eq!(values, Some(vec!["y".to_string(), "x".to_string()]));
/// ```
///
/// # Errors
///
/// - [`ExtractError::InvalidKey`] if any name is malformed.
/// - [`ExtractError::MissingArgument`] if required and nothing was
///   collected.
pub fn extract_array<'a, S: AsRef<str>>(
    names: impl Into<FlagNames<'a>>,
    requirement: Requirement,
    description: Option<&str>,
    tokens: &[S],
) -> Result<Option<Vec<String>>> {
    let names = names.into();
    validate(ExtractorKind::Array, &names)?;

    let values: Vec<String> = names
        .iter()
        .flat_map(|name| raw_values(name, tokens))
        .flat_map(expand_quoted_list)
        .map(String::from)
        .collect();

    if values.is_empty() {
        if requirement.is_required() {
            return Err(ExtractError::missing(&names, description));
        }
        debug!(names = ?names.as_slice(), "no values collected");
        return Ok(None);
    }

    debug!(names = ?names.as_slice(), count = values.len(), "values collected");
    Ok(Some(values))
}

/// Like [`extract_array`] with [`Requirement::Required`], returning the
/// non-empty list directly.
///
/// # Errors
///
/// Same as [`extract_array`].
pub fn require_array<'a, S: AsRef<str>>(
    names: impl Into<FlagNames<'a>>,
    description: Option<&str>,
    tokens: &[S],
) -> Result<Vec<String>> {
    let names = names.into();
    extract_array(names.clone(), Requirement::Required, description, tokens)?
        .ok_or_else(|| ExtractError::missing(&names, description))
}

/// Splits a double-quoted value on commas; any other value is one element.
///
/// The value must start and end with `"` and be at least two characters
/// long. No trimming is applied to the parts.
///
/// # Examples
///
/// ```
/// use argv_extract_core::expand_quoted_list;
///
/// assert_eq!(expand_quoted_list("\"a,b,c\""), vec!["a", "b", "c"]);
/// assert_eq!(expand_quoted_list("a,b"), vec!["a,b"]);
/// assert_eq!(expand_quoted_list("\"\""), vec![""]);
/// assert_eq!(expand_quoted_list("\""), vec!["\""]);
/// ```
pub fn expand_quoted_list(value: &str) -> Vec<&str> {
    match value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.split(',').collect(),
        None => vec![value],
    }
}

fn raw_values<'t, S: AsRef<str>>(name: &str, tokens: &'t [S]) -> Vec<&'t str> {
    let mut values = Vec::new();
    for (index, token) in tokens.iter().enumerate() {
        match occurrence(token.as_ref(), name) {
            Some(Occurrence::Joined(value)) => values.push(value),
            Some(Occurrence::Bare) => match tokens.get(index + 1).map(AsRef::as_ref) {
                Some(next) if !is_flag_token(next) => values.push(next),
                next => trace!(name, index, ?next, "skipping occurrence without value"),
            },
            None => {}
        }
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arr(names: &[&str], tokens: &[&str]) -> Option<Vec<String>> {
        extract_array(names, Requirement::Optional, Some(""), tokens).unwrap()
    }

    fn owned(values: &[&str]) -> Option<Vec<String>> {
        Some(values.iter().map(|v| v.to_string()).collect())
    }

    #[test]
    fn test_space_and_equals_forms() {
        let argv = ["node", "something", "k=v", "c", "d", "--key", "value"];
        assert_eq!(arr(&["--key"], &argv), owned(&["value"]));
        let argv = ["node", "something", "k=v", "c", "d", "--key=value"];
        assert_eq!(arr(&["--key"], &argv), owned(&["value"]));
    }

    #[test]
    fn test_skips_flag_lookalike_values() {
        let argv = ["node", "something", "--key", "-c", "d", "--key", "value"];
        assert_eq!(arr(&["--key"], &argv), owned(&["value"]));
        let argv = ["node", "something", "--k", "-c", "d", "--key", "value"];
        assert_eq!(arr(&["--key"], &argv), owned(&["value"]));
    }

    #[test]
    fn test_combines_repeated_keys() {
        let argv = [
            "node",
            "something",
            "--key",
            "\"1,2,3\"",
            "k=v",
            "c",
            "d",
            "--key=\"a,b,c,d\"",
        ];
        assert_eq!(
            arr(&["--key"], &argv),
            owned(&["1", "2", "3", "a", "b", "c", "d"])
        );
    }

    #[test]
    fn test_separates_quoted_comma_values() {
        let argv = ["node", "something", "k=v", "c", "d", "--key=\"a,b,c,d\""];
        assert_eq!(arr(&["--key"], &argv), owned(&["a", "b", "c", "d"]));
    }

    #[test]
    fn test_unquoted_commas_stay_together() {
        assert_eq!(arr(&["--key"], &["--key", "a,b"]), owned(&["a,b"]));
    }

    #[test]
    fn test_lone_quote_is_kept_verbatim() {
        assert_eq!(expand_quoted_list("\""), vec!["\""]);
        assert_eq!(arr(&["--key"], &["--key", "\""]), owned(&["\""]));
        assert_eq!(arr(&["--key"], &["--key=\"\""]), owned(&[""]));
    }

    #[test]
    fn test_groups_by_name_order() {
        let argv = ["-k", "1", "--key", "2", "-k", "3"];
        assert_eq!(arr(&["--key", "-k"], &argv), owned(&["2", "1", "3"]));
    }

    #[test]
    fn test_empty_equals_value_is_kept() {
        assert_eq!(arr(&["--key"], &["--key="]), owned(&[""]));
    }

    #[test]
    fn test_first_token_is_scanned() {
        assert_eq!(arr(&["--key"], &["--key", "v"]), owned(&["v"]));
    }

    #[test]
    fn test_required_missing_errors() {
        let err = extract_array(["--hey"], Requirement::Required, Some(""), &["a", "b"]).unwrap_err();
        assert!(matches!(err, ExtractError::MissingArgument { .. }));
    }

    #[test]
    fn test_optional_missing_is_none() {
        assert_eq!(arr(&["--hey"], &["a", "b"]), None);
    }

    #[test]
    fn test_invalid_key() {
        let err = extract_array("hey", Requirement::Optional, None, &["a", "b"]).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::InvalidKey {
                extractor: ExtractorKind::Array,
                ..
            }
        ));
    }

    #[test]
    fn test_require_array() {
        let values = require_array("--tag", None, &["--tag", "a", "--tag", "\"b,c\""]).unwrap();
        assert_eq!(values, vec!["a", "b", "c"]);
    }
}
