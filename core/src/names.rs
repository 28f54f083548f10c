//! Flag names, key validation, and the shared flag-token pattern.
//!
//! A flag name must start with `-` or `--` followed by an ASCII letter and
//! must not contain `=`. The same leading pattern decides whether a token in
//! the argument list "looks like a flag", which is how the scanners refuse
//! to consume `--other` as the value of a preceding bare flag.

use std::sync::LazyLock;

use regex::Regex;

use crate::{ExtractError, ExtractorKind, Result};

static FLAG_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^--?[A-Za-z]").expect("static regex must compile"));

/// Returns `true` if `token` starts like a flag (`-x...` or `--x...`).
///
/// Negative numbers such as `-12.5` are not flag tokens.
///
/// # Examples
///
/// ```
/// use argv_extract_core::is_flag_token;
///
/// assert!(is_flag_token("-c"));
/// assert!(is_flag_token("--key=value"));
/// assert!(!is_flag_token("-123.55"));
/// assert!(!is_flag_token("value"));
/// assert!(!is_flag_token("---x"));
/// ```
pub fn is_flag_token(token: &str) -> bool {
    FLAG_TOKEN_RE.is_match(token)
}

/// Checks that a single key is a well-formed flag name.
///
/// # Errors
///
/// Returns [`ExtractError::InvalidKey`] naming `extractor` and the key.
pub fn validate_key(extractor: ExtractorKind, key: &str) -> Result<()> {
    if !is_flag_token(key) || key.contains('=') {
        return Err(ExtractError::invalid_key(extractor, key));
    }
    Ok(())
}

/// Validates every name in the set, failing on the first malformed one.
///
/// Called by every extractor before any scanning takes place.
///
/// # Examples
///
/// ```
/// use argv_extract_core::{ExtractError, ExtractorKind, FlagNames, validate};
///
/// assert!(validate(ExtractorKind::String, &FlagNames::from(["--name", "-n"])).is_ok());
///
/// let err = validate(ExtractorKind::String, &FlagNames::from("--name=bob")).unwrap_err();
/// assert!(matches!(err, ExtractError::InvalidKey { .. }));
/// ```
///
/// # Errors
///
/// Returns [`ExtractError::InvalidKey`] for the first name that does not
/// match `--?[A-Za-z]` or that contains `=`.
pub fn validate(extractor: ExtractorKind, names: &FlagNames<'_>) -> Result<()> {
    names
        .iter()
        .try_for_each(|name| validate_key(extractor, name))
}

/// One or more spellings of a single logical flag.
///
/// Order matters: extractors that stop at the first match try the names in
/// sequence. Duplicates are tolerated.
///
/// Built from a single name or any common collection of names:
///
/// ```
/// use argv_extract_core::FlagNames;
///
/// let one = FlagNames::from("--verbose");
/// assert_eq!(one.len(), 1);
///
/// let many = FlagNames::from(["--verbose", "-v"]);
/// assert_eq!(many.iter().collect::<Vec<_>>(), vec!["--verbose", "-v"]);
///
/// let owned = vec!["--verbose".to_string()];
/// assert_eq!(FlagNames::from(&owned).len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlagNames<'a> {
    names: Vec<&'a str>,
}

impl<'a> FlagNames<'a> {
    /// Iterates the names in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.names.iter().copied()
    }

    /// Number of names in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` when no names were supplied.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names as a borrowed slice.
    pub fn as_slice(&self) -> &[&'a str] {
        &self.names
    }

    /// Owned copies of the names, used when building errors.
    pub fn to_vec(&self) -> Vec<String> {
        self.names.iter().map(|name| name.to_string()).collect()
    }
}

impl<'a> From<&'a str> for FlagNames<'a> {
    fn from(name: &'a str) -> Self {
        Self { names: vec![name] }
    }
}

impl<'a> From<&'a String> for FlagNames<'a> {
    fn from(name: &'a String) -> Self {
        Self {
            names: vec![name.as_str()],
        }
    }
}

impl<'a> From<&[&'a str]> for FlagNames<'a> {
    fn from(names: &[&'a str]) -> Self {
        Self {
            names: names.to_vec(),
        }
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for FlagNames<'a> {
    fn from(names: [&'a str; N]) -> Self {
        Self {
            names: Vec::from(names),
        }
    }
}

impl<'a, const N: usize> From<&[&'a str; N]> for FlagNames<'a> {
    fn from(names: &[&'a str; N]) -> Self {
        Self {
            names: names.to_vec(),
        }
    }
}

impl<'a> From<Vec<&'a str>> for FlagNames<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        Self { names }
    }
}

impl<'a> From<&Vec<&'a str>> for FlagNames<'a> {
    fn from(names: &Vec<&'a str>) -> Self {
        Self {
            names: names.clone(),
        }
    }
}

impl<'a> From<&'a [String]> for FlagNames<'a> {
    fn from(names: &'a [String]) -> Self {
        Self {
            names: names.iter().map(String::as_str).collect(),
        }
    }
}

impl<'a> From<&'a Vec<String>> for FlagNames<'a> {
    fn from(names: &'a Vec<String>) -> Self {
        Self::from(names.as_slice())
    }
}

/// How a token matched a flag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Occurrence<'t> {
    /// The token is exactly the name; its value, if any, is the next token.
    Bare,
    /// The token is `name=value`; carries everything after the first `=`.
    Joined(&'t str),
}

/// Matches `token` against `name`, distinguishing `--key` from `--key=value`.
///
/// A token that merely shares a prefix with the name (`--keyboard` for
/// `--key`) does not match.
pub(crate) fn occurrence<'t>(token: &'t str, name: &str) -> Option<Occurrence<'t>> {
    let rest = token.strip_prefix(name)?;
    if rest.is_empty() {
        return Some(Occurrence::Bare);
    }
    rest.strip_prefix('=').map(Occurrence::Joined)
}
