//! Declarative flag tables.
//!
//! A [`FlagTable`] describes every flag a program accepts in one YAML
//! document and extracts them all in a single pass, which keeps the flag
//! definitions out of the program's control flow.
//!
//! # Example YAML
//!
//! ```yaml
//! flags:
//!   - id: port
//!     names: ["--port", "-p"]
//!     kind: { type: number }
//!     requirement: required
//!     description: Port to listen on
//!   - id: format
//!     names: ["--format"]
//!     kind: { type: enum, allowed: [json, yaml] }
//!   - id: verbose
//!     names: ["--verbose", "-v"]
//!     kind: { type: bool }
//!   - id: tags
//!     names: ["--tag"]
//!     kind: { type: array }
//! ```

use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    ExtractError, ExtractorKind, FlagNames, Requirement, TableError, extract_array, extract_bool,
    extract_enum, extract_number, extract_string, validate,
};

/// What kind of value an entry extracts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlagKind {
    /// A single string value.
    String,
    /// A single `f64` value.
    Number,
    /// A presence switch; always produces a value.
    Bool,
    /// A string restricted to `allowed`.
    Enum {
        /// Accepted values.
        allowed: Vec<String>,
    },
    /// Every value of every occurrence, with quoted lists expanded.
    Array,
}

impl FlagKind {
    /// The extractor used for this kind.
    pub const fn extractor(&self) -> ExtractorKind {
        match self {
            Self::String => ExtractorKind::String,
            Self::Number => ExtractorKind::Number,
            Self::Bool => ExtractorKind::Bool,
            Self::Enum { .. } => ExtractorKind::Enum,
            Self::Array => ExtractorKind::Array,
        }
    }
}

/// One logical flag in a [`FlagTable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagEntry {
    /// Key under which the value is reported.
    pub id: String,
    /// Accepted spellings, in resolution order.
    pub names: Vec<String>,
    /// Value kind.
    pub kind: FlagKind,
    /// Defaults to optional. Ignored for `bool` entries.
    #[serde(default)]
    pub requirement: Requirement,
    /// Appended to error messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl FlagEntry {
    /// Runs the entry's extractor over `tokens`.
    ///
    /// # Errors
    ///
    /// Propagates the extractor's [`ExtractError`].
    pub fn extract<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Option<ExtractedValue>, ExtractError> {
        let names = FlagNames::from(&self.names);
        let description = self.description.as_deref();
        let requirement = self.requirement;

        let value = match &self.kind {
            FlagKind::String => {
                extract_string(names, requirement, description, tokens)?.map(ExtractedValue::String)
            }
            FlagKind::Number => {
                extract_number(names, requirement, description, tokens)?.map(ExtractedValue::Number)
            }
            FlagKind::Bool => Some(ExtractedValue::Bool(extract_bool(names, tokens)?)),
            FlagKind::Enum { allowed } => {
                extract_enum(names, allowed.as_slice(), requirement, description, tokens)?
                    .map(|member| ExtractedValue::String(member.clone()))
            }
            FlagKind::Array => {
                extract_array(names, requirement, description, tokens)?.map(ExtractedValue::List)
            }
        };
        Ok(value)
    }
}

/// A value produced by a [`FlagEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    /// From `string` and `enum` entries.
    String(String),
    /// From `number` entries.
    Number(f64),
    /// From `bool` entries.
    Bool(bool),
    /// From `array` entries.
    List(Vec<String>),
}

/// Extracted values keyed by entry id.
///
/// Absent optional entries are omitted; `bool` entries are always present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedArgs(BTreeMap<String, ExtractedValue>);

impl ExtractedArgs {
    /// Returns the raw value for `id`.
    pub fn get(&self, id: &str) -> Option<&ExtractedValue> {
        self.0.get(id)
    }

    /// Returns the value for `id` if it is a string.
    pub fn get_str(&self, id: &str) -> Option<&str> {
        match self.0.get(id)? {
            ExtractedValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value for `id` if it is a number.
    pub fn get_number(&self, id: &str) -> Option<f64> {
        match self.0.get(id)? {
            ExtractedValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the switch state for `id`, `false` when absent.
    pub fn get_bool(&self, id: &str) -> bool {
        matches!(self.0.get(id), Some(ExtractedValue::Bool(true)))
    }

    /// Returns the value for `id` if it is a list.
    pub fn get_list(&self, id: &str) -> Option<&[String]> {
        match self.0.get(id)? {
            ExtractedValue::List(values) => Some(values),
            _ => None,
        }
    }

    /// Returns `true` if `id` produced a value.
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    /// Number of ids with a value.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(id, value)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExtractedValue)> {
        self.0.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Serializes the values as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Json`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, TableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A set of flag entries, typically loaded from YAML.
///
/// # Examples
///
/// ```
/// use argv_extract_core::FlagTable;
///
/// let table = FlagTable::from_yaml_str(r#"
/// flags:
///   - id: port
///     names: ["--port", "-p"]
///     kind: { type: number }
///     requirement: required
///   - id: verbose
///     names: ["-v"]
///     kind: { type: bool }
/// "#).unwrap();
///
/// let args = table.extract(&["app", "-p", "8080"]).unwrap();
/// assert_eq!(args.get_number("port"), Some(8080.0));
/// assert!(!args.get_bool("verbose"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagTable {
    /// Entries in declaration order.
    #[serde(default)]
    pub flags: Vec<FlagEntry>,
}

impl FlagTable {
    /// Parses and validates a table from YAML text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Yaml`] if parsing fails, or any error from
    /// [`validate`](Self::validate).
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TableError> {
        let table: Self = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// Loads and validates a table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Io`] if the file cannot be read,
    /// [`TableError::Yaml`] if parsing fails, or any error from
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let table: Self = serde_yaml::from_reader(reader)?;
        table.validate()?;
        Ok(table)
    }

    /// Checks the table's structure.
    ///
    /// Every entry needs at least one well-formed name, enum entries need at
    /// least one allowed value, and ids must be unique. A name used by more
    /// than one entry is allowed but logged.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Extract`] wrapping
    /// [`ExtractError::InvalidKey`] for a malformed name, or
    /// [`TableError::InvalidEntry`] for the other problems.
    pub fn validate(&self) -> Result<(), TableError> {
        let mut ids = HashSet::new();
        let mut owners: HashMap<&str, &str> = HashMap::new();

        for entry in &self.flags {
            if entry.id.trim().is_empty() {
                return Err(TableError::InvalidEntry("entry id cannot be empty".into()));
            }
            if !ids.insert(entry.id.as_str()) {
                return Err(TableError::InvalidEntry(format!(
                    "duplicate entry id: {}",
                    entry.id
                )));
            }
            if entry.names.is_empty() {
                return Err(TableError::InvalidEntry(format!(
                    "entry {} has no names",
                    entry.id
                )));
            }
            if let FlagKind::Enum { allowed } = &entry.kind {
                if allowed.is_empty() {
                    return Err(TableError::InvalidEntry(format!(
                        "enum entry {} has no allowed values",
                        entry.id
                    )));
                }
            }

            validate(entry.kind.extractor(), &FlagNames::from(&entry.names))?;

            for name in &entry.names {
                if let Some(previous) = owners.insert(name.as_str(), entry.id.as_str()) {
                    if previous != entry.id {
                        warn!(name = %name, previous, current = %entry.id, "flag name shared by two entries");
                    }
                }
            }
        }

        Ok(())
    }

    /// Extracts every entry from `tokens`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`validate`](Self::validate), or
    /// [`TableError::Extract`] for the first entry whose extraction fails.
    pub fn extract<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ExtractedArgs, TableError> {
        self.validate()?;

        let mut values = BTreeMap::new();
        for entry in &self.flags {
            if let Some(value) = entry.extract(tokens)? {
                values.insert(entry.id.clone(), value);
            }
        }

        debug!(entries = self.flags.len(), extracted = values.len(), "flag table extracted");
        Ok(ExtractedArgs(values))
    }
}
