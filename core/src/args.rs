//! Owned token list with the process arguments as the default source.
//!
//! The free extractor functions take the token list explicitly. [`ArgList`]
//! bundles a list with the same operations, and [`ArgList::from_env`] is the
//! one place the process argument vector is read.

use crate::{
    FlagNames, Requirement, Result, extract_array, extract_bool, extract_enum, extract_number,
    extract_string, require_array, require_enum, require_number, require_string,
};

/// An immutable list of argument tokens.
///
/// No token is special: when built from the environment, the program name
/// at index 0 is scanned like any other token.
///
/// # Examples
///
/// ```
/// use argv_extract_core::{ArgList, Requirement};
///
/// let args = ArgList::new(["app", "--port", "8080", "--verbose", "--tag=a"]);
/// assert_eq!(args.number("--port", Requirement::Required, None).unwrap(), Some(8080.0));
/// assert!(args.flag(["--verbose", "-v"]).unwrap());
/// assert_eq!(args.require_array("--tag", None).unwrap(), vec!["a"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgList {
    tokens: Vec<String>,
}

impl ArgList {
    /// Creates a list from any sequence of tokens.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads the current process arguments.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_env() -> Self {
        Self::new(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// The tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` when the list has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// See [`extract_string`].
    pub fn string<'a>(
        &self,
        names: impl Into<FlagNames<'a>>,
        requirement: Requirement,
        description: Option<&str>,
    ) -> Result<Option<String>> {
        extract_string(names, requirement, description, &self.tokens)
    }

    /// See [`require_string`].
    pub fn require_string<'a>(
        &self,
        names: impl Into<FlagNames<'a>>,
        description: Option<&str>,
    ) -> Result<String> {
        require_string(names, description, &self.tokens)
    }

    /// See [`extract_number`].
    pub fn number<'a>(
        &self,
        names: impl Into<FlagNames<'a>>,
        requirement: Requirement,
        description: Option<&str>,
    ) -> Result<Option<f64>> {
        extract_number(names, requirement, description, &self.tokens)
    }

    /// See [`require_number`].
    pub fn require_number<'a>(
        &self,
        names: impl Into<FlagNames<'a>>,
        description: Option<&str>,
    ) -> Result<f64> {
        require_number(names, description, &self.tokens)
    }

    /// See [`extract_enum`].
    pub fn choice<'a, 'v, T: AsRef<str>>(
        &self,
        names: impl Into<FlagNames<'a>>,
        allowed: &'v [T],
        requirement: Requirement,
        description: Option<&str>,
    ) -> Result<Option<&'v T>> {
        extract_enum(names, allowed, requirement, description, &self.tokens)
    }

    /// See [`require_enum`].
    pub fn require_choice<'a, 'v, T: AsRef<str>>(
        &self,
        names: impl Into<FlagNames<'a>>,
        allowed: &'v [T],
        description: Option<&str>,
    ) -> Result<&'v T> {
        require_enum(names, allowed, description, &self.tokens)
    }

    /// See [`extract_bool`].
    pub fn flag<'a>(&self, names: impl Into<FlagNames<'a>>) -> Result<bool> {
        extract_bool(names, &self.tokens)
    }

    /// See [`extract_array`].
    pub fn array<'a>(
        &self,
        names: impl Into<FlagNames<'a>>,
        requirement: Requirement,
        description: Option<&str>,
    ) -> Result<Option<Vec<String>>> {
        extract_array(names, requirement, description, &self.tokens)
    }

    /// See [`require_array`].
    pub fn require_array<'a>(
        &self,
        names: impl Into<FlagNames<'a>>,
        description: Option<&str>,
    ) -> Result<Vec<String>> {
        require_array(names, description, &self.tokens)
    }
}

impl<S: Into<String>> FromIterator<S> for ArgList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl AsRef<[String]> for ArgList {
    fn as_ref(&self) -> &[String] {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ExtractError;

    fn sample() -> ArgList {
        ArgList::new([
            "node", "app", "--mode", "fast", "-n", "3", "--dry-run", "--tag", "\"x,y\"",
        ])
    }

    #[test]
    fn test_from_env_has_program_name() {
        let args = ArgList::from_env();
        assert!(!args.is_empty());
    }

    #[test]
    fn test_methods_delegate() {
        let args = sample();
        assert_eq!(args.len(), 9);
        assert_eq!(
            args.string("--mode", Requirement::Optional, None).unwrap().as_deref(),
            Some("fast")
        );
        assert_eq!(args.require_number(["--count", "-n"], None).unwrap(), 3.0);
        assert_eq!(
            args.require_choice("--mode", &["fast", "slow"], None).unwrap(),
            &"fast"
        );
        assert!(args.flag("--dry-run").unwrap());
        assert_eq!(
            args.array("--tag", Requirement::Optional, None).unwrap(),
            Some(vec!["x".to_string(), "y".to_string()])
        );
    }

    #[test]
    fn test_required_methods_error() {
        let args = sample();
        let err = args.require_string("--missing", Some("Needed")).unwrap_err();
        assert!(matches!(err, ExtractError::MissingArgument { .. }));
        assert!(args.require_array("--missing", None).is_err());
        assert!(
            args.choice("--mode", &["slow"], Requirement::Required, None)
                .is_err()
        );
        assert_eq!(args.number("--mode", Requirement::Optional, None).unwrap(), None);
    }

    #[test]
    fn test_collect_from_strings() {
        let args: ArgList = vec!["-a".to_string(), "1".to_string()].into_iter().collect();
        assert_eq!(args.tokens(), &["-a", "1"]);
    }
}
