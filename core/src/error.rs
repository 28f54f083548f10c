//! Error types for flag extraction.
//!
//! Every failure is synchronous and surfaces directly to the caller of an
//! extractor. Messages always name the flag(s) involved, quoted and
//! comma-joined when there are several, followed by the caller-supplied
//! description when one was given.

use std::fmt;

use thiserror::Error;

use crate::FlagNames;

/// Identifies which extractor reported an error.
///
/// Used in [`ExtractError::InvalidKey`] so the message points at the call
/// site that passed the malformed key.
///
/// # Examples
///
/// ```
/// use argv_extract_core::ExtractorKind;
///
/// assert_eq!(ExtractorKind::Number.to_string(), "extract_number()");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractorKind {
    /// [`extract_string`](crate::extract_string).
    String,
    /// [`extract_number`](crate::extract_number).
    Number,
    /// [`extract_enum`](crate::extract_enum).
    Enum,
    /// [`extract_bool`](crate::extract_bool).
    Bool,
    /// [`extract_array`](crate::extract_array).
    Array,
}

impl ExtractorKind {
    /// Returns the public function name of the extractor.
    pub const fn function_name(self) -> &'static str {
        match self {
            Self::String => "extract_string()",
            Self::Number => "extract_number()",
            Self::Enum => "extract_enum()",
            Self::Bool => "extract_bool()",
            Self::Array => "extract_array()",
        }
    }
}

impl fmt::Display for ExtractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.function_name())
    }
}

/// Errors raised by the extractors.
///
/// `InvalidKey` is a programming error in the calling CLI and is never
/// suppressed. The remaining variants are only raised for
/// [`Requirement::Required`](crate::Requirement::Required) extractions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// A flag name does not start with `-` or `--` followed by a letter, or
    /// contains `=`.
    #[error(
        "{extractor} received an invalid key. Keys must start with '-' or '--', followed by a \
         letter of the alphabet, and can not include an equal sign \"=\". Got: {key}"
    )]
    InvalidKey {
        /// Extractor that received the key.
        extractor: ExtractorKind,
        /// The rejected key, verbatim.
        key: String,
    },

    /// A required flag was not present in the token list.
    #[error("{}", missing_message(.names, .description.as_deref()))]
    MissingArgument {
        /// Candidate names that were searched.
        names: Vec<String>,
        /// Caller-supplied description.
        description: Option<String>,
    },

    /// A required numeric flag had a value that is not a number.
    #[error("{}", invalid_number_message(.names, .input, .description.as_deref()))]
    InvalidNumber {
        /// Candidate names that were searched.
        names: Vec<String>,
        /// The value that failed to parse.
        input: String,
        /// Caller-supplied description.
        description: Option<String>,
    },

    /// A required enum flag had a value outside the allowed set.
    #[error("{}", invalid_enum_message(.names, .allowed, .input, .description.as_deref()))]
    InvalidEnumValue {
        /// Candidate names that were searched.
        names: Vec<String>,
        /// Values the flag accepts.
        allowed: Vec<String>,
        /// The value that was supplied.
        input: String,
        /// Caller-supplied description.
        description: Option<String>,
    },
}

impl ExtractError {
    pub(crate) fn invalid_key(extractor: ExtractorKind, key: &str) -> Self {
        Self::InvalidKey {
            extractor,
            key: key.to_string(),
        }
    }

    pub(crate) fn missing(names: &FlagNames<'_>, description: Option<&str>) -> Self {
        Self::MissingArgument {
            names: names.to_vec(),
            description: description.map(String::from),
        }
    }

    pub(crate) fn invalid_number(
        names: &FlagNames<'_>,
        input: &str,
        description: Option<&str>,
    ) -> Self {
        Self::InvalidNumber {
            names: names.to_vec(),
            input: input.to_string(),
            description: description.map(String::from),
        }
    }

    pub(crate) fn invalid_enum<T: AsRef<str>>(
        names: &FlagNames<'_>,
        allowed: &[T],
        input: &str,
        description: Option<&str>,
    ) -> Self {
        Self::InvalidEnumValue {
            names: names.to_vec(),
            allowed: allowed.iter().map(|v| v.as_ref().to_string()).collect(),
            input: input.to_string(),
            description: description.map(String::from),
        }
    }

    /// Returns the flag names involved in the error.
    ///
    /// For [`InvalidKey`](Self::InvalidKey) this is the single rejected key.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Self::InvalidKey { key, .. } => vec![key.as_str()],
            Self::MissingArgument { names, .. }
            | Self::InvalidNumber { names, .. }
            | Self::InvalidEnumValue { names, .. } => names.iter().map(String::as_str).collect(),
        }
    }
}

/// Error returned when parsing a [`Requirement`](crate::Requirement) from a
/// string that is neither `"required"` nor `"optional"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown requirement mode: {0:?} (expected \"required\" or \"optional\")")]
pub struct ParseRequirementError(pub String);

/// Errors raised while loading or applying a [`FlagTable`](crate::FlagTable).
#[derive(Debug, Error)]
pub enum TableError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An entry failed structural validation.
    #[error("invalid flag table entry: {0}")]
    InvalidEntry(String),

    /// Extraction failed for one of the entries.
    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Convenience alias for results with [`ExtractError`].
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Wraps each item in double quotes and joins them with `", "`.
pub(crate) fn quote_join<T: AsRef<str>>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item.as_ref()))
        .collect::<Vec<_>>()
        .join(", ")
}

fn with_description(message: String, description: Option<&str>) -> String {
    match description {
        Some(desc) if !desc.trim().is_empty() => format!("{message}. {desc}"),
        _ => message,
    }
}

fn missing_message(names: &[String], description: Option<&str>) -> String {
    let message = match names {
        [name] => format!("expected command line argument \"{name}\", but it wasn't set"),
        _ => format!(
            "expected one of the following command line arguments, but none were provided: {}",
            quote_join(names)
        ),
    };
    with_description(message, description)
}

fn subject(names: &[String]) -> String {
    match names {
        [name] => format!("command line argument \"{name}\""),
        _ => format!("command line argument matching one of {}", quote_join(names)),
    }
}

fn invalid_number_message(names: &[String], input: &str, description: Option<&str>) -> String {
    with_description(
        format!(
            "expected {} to be a valid number, but got: \"{input}\"",
            subject(names)
        ),
        description,
    )
}

fn invalid_enum_message(
    names: &[String],
    allowed: &[String],
    input: &str,
    description: Option<&str>,
) -> String {
    with_description(
        format!(
            "expected {} to be one of: {}, but got: \"{input}\"",
            subject(names),
            quote_join(allowed)
        ),
        description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_message_names_extractor_and_key() {
        let err = ExtractError::invalid_key(ExtractorKind::Array, "hey");
        let message = err.to_string();
        assert!(message.starts_with("extract_array() received an invalid key"));
        assert!(message.ends_with("Got: hey"));
    }

    #[test]
    fn test_missing_single_name() {
        let names = FlagNames::from("--port");
        let err = ExtractError::missing(&names, None);
        assert_eq!(
            err.to_string(),
            "expected command line argument \"--port\", but it wasn't set"
        );
    }

    #[test]
    fn test_missing_multiple_names_with_description() {
        let names = FlagNames::from(["--port", "-p"]);
        let err = ExtractError::missing(&names, Some("Port to listen on"));
        assert_eq!(
            err.to_string(),
            "expected one of the following command line arguments, but none were provided: \
             \"--port\", \"-p\". Port to listen on"
        );
    }

    #[test]
    fn test_blank_description_is_not_appended() {
        let names = FlagNames::from("--port");
        let err = ExtractError::missing(&names, Some("  "));
        assert!(!err.to_string().ends_with('.'));
        assert!(!err.to_string().contains(". "));
    }

    #[test]
    fn test_invalid_number_message() {
        let names = FlagNames::from("--age");
        let err = ExtractError::invalid_number(&names, "old", None);
        assert_eq!(
            err.to_string(),
            "expected command line argument \"--age\" to be a valid number, but got: \"old\""
        );
    }

    #[test]
    fn test_invalid_enum_message_lists_allowed_values() {
        let names = FlagNames::from(["--mode", "-m"]);
        let err = ExtractError::invalid_enum(&names, &["fast", "slow"], "medium", Some("Speed"));
        assert_eq!(
            err.to_string(),
            "expected command line argument matching one of \"--mode\", \"-m\" to be one of: \
             \"fast\", \"slow\", but got: \"medium\". Speed"
        );
    }

    #[test]
    fn test_names_accessor() {
        let names = FlagNames::from(["--a", "-b"]);
        let err = ExtractError::missing(&names, None);
        assert_eq!(err.names(), vec!["--a", "-b"]);

        let err = ExtractError::invalid_key(ExtractorKind::Bool, "x=y");
        assert_eq!(err.names(), vec!["x=y"]);
    }

    #[test]
    fn test_quote_join() {
        assert_eq!(quote_join(&["a", "b"]), "\"a\", \"b\"");
        assert_eq!(quote_join::<&str>(&[]), "");
    }
}
