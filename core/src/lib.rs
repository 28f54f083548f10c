//! Typed extraction of named flags from a raw argument list.
//!
//! This crate pulls individual values out of an argument vector without
//! declaring a full command-line grammar:
//!
//! - [`extract_string`] — first value of a flag, from `--key value` or
//!   `--key=value`.
//! - [`extract_number`] — the same, parsed as `f64`.
//! - [`extract_enum`] — the same, restricted to a set of allowed values.
//! - [`extract_bool`] — whether a switch is present.
//! - [`extract_array`] — every value of every occurrence, with quoted
//!   comma-separated lists (`"a,b,c"`) expanded.
//!
//! Each extractor accepts one or more candidate names ([`FlagNames`]), a
//! [`Requirement`] deciding whether absence is an error, an optional
//! description appended to error messages, and the token list. Flag names
//! are validated before any scanning; a malformed name is always an
//! [`ExtractError::InvalidKey`]. The `require_*` variants return the value
//! directly for required flags.
//!
//! A bare flag is never given a value that itself looks like a flag: in
//! `--key -c d`, `--key` has no value and `-c` is scanned as a flag.
//!
//! [`ArgList`] wraps an owned token list (by default the process arguments)
//! and [`FlagTable`] describes a program's flags declaratively in YAML.
//!
//! # Example
//!
//! ```
//! use argv_extract_core::*;
//!
//! let argv = ["node", "app", "--key", "-c", "d", "--key", "value", "--n=-1.5"];
//!
//! let key = extract_string("--key", Requirement::Optional, None, &argv).unwrap();
//! assert_eq!(key.as_deref(), Some("value"));
//!
//! let n = require_number(["--n", "-n"], Some("A small number"), &argv).unwrap();
//! assert_eq!(n, -1.5);
//!
//! assert!(extract_bool("-c", &argv).unwrap());
//!
//! let err = extract_string("key", Requirement::Optional, None, &argv).unwrap_err();
//! assert!(matches!(err, ExtractError::InvalidKey { .. }));
//! ```

mod args;
mod array;
mod boolean;
mod choice;
mod error;
mod names;
mod number;
mod requirement;
mod string;
mod table;

pub use args::ArgList;
pub use array::{expand_quoted_list, extract_array, require_array};
pub use boolean::extract_bool;
pub use choice::{extract_enum, require_enum};
pub use error::{ExtractError, ExtractorKind, ParseRequirementError, Result, TableError};
pub use names::{FlagNames, is_flag_token, validate, validate_key};
pub use number::{extract_number, parse_number, require_number};
pub use requirement::Requirement;
pub use string::{extract_string, require_string};
pub use table::{ExtractedArgs, ExtractedValue, FlagEntry, FlagKind, FlagTable};
