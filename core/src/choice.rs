//! Enum extraction: a string value restricted to a fixed set.

use tracing::debug;

use crate::string::lookup;
use crate::{ExtractError, ExtractorKind, FlagNames, Requirement, Result, validate};

/// Extracts the first value for `names` and checks it against `allowed`.
///
/// Returns a reference to the matching member of `allowed`, so callers can
/// pass their own value type as long as it exposes its string form through
/// [`AsRef<str>`].
///
/// The lookup itself is always optional; `requirement` then decides what
/// happens when the flag is absent or its value is not allowed.
///
/// # Examples
///
/// ```
/// use argv_extract_core::{Requirement, extract_enum};
///
/// let formats = ["json", "yaml"];
/// let argv = ["app", "--format", "yaml"];
/// let value = extract_enum(["--format", "-f"], &formats, Requirement::Optional, None, &argv);
/// assert_eq!(value.unwrap(), Some(&"yaml"));
///
/// let argv = ["app", "--format=toml"];
/// let value = extract_enum("--format", &formats, Requirement::Optional, None, &argv);
/// assert_eq!(value.unwrap(), None);
/// ```
///
/// # Errors
///
/// - [`ExtractError::InvalidKey`] if any name is malformed.
/// - [`ExtractError::MissingArgument`] if required and absent.
/// - [`ExtractError::InvalidEnumValue`] if required and the value is not in
///   `allowed`.
pub fn extract_enum<'a, 'v, S, T>(
    names: impl Into<FlagNames<'a>>,
    allowed: &'v [T],
    requirement: Requirement,
    description: Option<&str>,
    tokens: &[S],
) -> Result<Option<&'v T>>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let names = names.into();
    validate(ExtractorKind::Enum, &names)?;

    let Some(raw) = lookup(&names, Requirement::Optional, description, tokens)? else {
        if requirement.is_required() {
            return Err(ExtractError::missing(&names, description));
        }
        return Ok(None);
    };

    match allowed.iter().find(|candidate| AsRef::<str>::as_ref(*candidate) == raw.as_str()) {
        Some(member) => Ok(Some(member)),
        None if requirement.is_required() => Err(ExtractError::invalid_enum(
            &names,
            allowed,
            &raw,
            description,
        )),
        None => {
            debug!(names = ?names.as_slice(), raw = %raw, "ignoring value outside allowed set");
            Ok(None)
        }
    }
}

/// Like [`extract_enum`] with [`Requirement::Required`], returning the member
/// directly.
///
/// # Errors
///
/// Same as [`extract_enum`].
pub fn require_enum<'a, 'v, S, T>(
    names: impl Into<FlagNames<'a>>,
    allowed: &'v [T],
    description: Option<&str>,
    tokens: &[S],
) -> Result<&'v T>
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let names = names.into();
    extract_enum(
        names.clone(),
        allowed,
        Requirement::Required,
        description,
        tokens,
    )?
    .ok_or_else(|| ExtractError::missing(&names, description))
}
