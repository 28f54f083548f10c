//! Presence check for boolean switches.

use tracing::debug;

use crate::{ExtractorKind, FlagNames, Result, validate};

/// Returns `true` if any token is exactly one of `names`.
///
/// No `=` splitting and no value consumption: `--verbose=false` does not
/// count, and `-v` does not match `--v` or `v`. A missing switch is simply
/// `false`.
///
/// # Examples
///
/// ```
/// use argv_extract_core::extract_bool;
///
/// assert!(extract_bool(["--a", "-c"], &["x", "y", "-c"]).unwrap());
/// assert!(!extract_bool(["--a", "-c"], &["x", "y", "c"]).unwrap());
/// ```
///
/// # Errors
///
/// Returns [`ExtractError::InvalidKey`](crate::ExtractError::InvalidKey) if
/// any name is malformed.
pub fn extract_bool<'a, S: AsRef<str>>(names: impl Into<FlagNames<'a>>, tokens: &[S]) -> Result<bool> {
    let names = names.into();
    validate(ExtractorKind::Bool, &names)?;

    let present = tokens
        .iter()
        .any(|token| names.iter().any(|name| name == token.as_ref()));
    debug!(names = ?names.as_slice(), present, "switch checked");
    Ok(present)
}
