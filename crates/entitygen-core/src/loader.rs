//! Schema loading from delimited text files.
//!
//! Each non-blank line is one row; cells are split on `,` and trimmed. There
//! is no quoting or escaping. The schema identifier is the file name up to its
//! first `.`, so `users.csv` and `users.v2.csv` both load as `users`; when two
//! files share an identifier the later one wins.

use crate::config::ReadErrorPolicy;
use crate::error::{GenError, GenResult};
use crate::field::{Field, Schema};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Schemas keyed by identifier
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    schemas: BTreeMap<String, Schema>,
    skipped: Vec<PathBuf>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a schema, returning the one it replaced
    pub fn insert(&mut self, schema: Schema) -> Option<Schema> {
        self.schemas.insert(schema.identifier().to_string(), schema)
    }

    pub fn get(&self, identifier: &str) -> Option<&Schema> {
        self.schemas.get(identifier)
    }

    /// Schemas in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Schema> {
        self.schemas.values()
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }

    /// Inputs passed over under [`ReadErrorPolicy::Skip`]
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }
}

impl FromIterator<Schema> for SchemaSet {
    fn from_iter<I: IntoIterator<Item = Schema>>(iter: I) -> Self {
        let mut set = SchemaSet::new();
        for schema in iter {
            set.insert(schema);
        }
        set
    }
}

/// Split file content into rows, skipping blank lines.
///
/// Accepts both `\n` and `\r\n` line endings.
pub fn parse_rows(content: &str) -> Vec<Field> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(Field::from_line)
        .collect()
}

/// Derive the schema identifier from an input path.
///
/// Returns `None` when the file name is missing, not UTF-8, or starts with `.`.
///
/// # Examples
///
/// ```
/// use entitygen_core::schema_identifier;
/// use std::path::Path;
///
/// assert_eq!(schema_identifier(Path::new("data/users.csv")).as_deref(), Some("users"));
/// assert_eq!(schema_identifier(Path::new("users.v2.csv")).as_deref(), Some("users"));
/// assert_eq!(schema_identifier(Path::new(".csv")), None);
/// ```
pub fn schema_identifier(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let identifier = file_name.split('.').next().unwrap_or_default();
    if identifier.is_empty() {
        None
    } else {
        Some(identifier.to_string())
    }
}

/// Load one input file into a schema
pub fn load_schema(path: &Path) -> GenResult<Schema> {
    let identifier = schema_identifier(path).ok_or_else(|| GenError::InvalidIdentifier {
        path: path.to_path_buf(),
    })?;

    let content = fs::read_to_string(path).map_err(|e| GenError::input_read(path, e))?;
    let fields = parse_rows(&content);

    let blank = content.lines().count() - fields.len();
    if blank > 0 {
        debug!(path = %path.display(), blank, "Skipped blank lines");
    }

    Ok(Schema::new(identifier, fields))
}

/// Load every input into a [`SchemaSet`].
///
/// Inputs are processed in the order given. Under [`ReadErrorPolicy::Abort`]
/// the first failure is returned; under [`ReadErrorPolicy::Skip`] failures are
/// logged and recorded in [`SchemaSet::skipped`].
pub fn load_schemas<P: AsRef<Path>>(inputs: &[P], policy: ReadErrorPolicy) -> GenResult<SchemaSet> {
    let mut set = SchemaSet::new();

    for input in inputs {
        let path = input.as_ref();
        let schema = match load_schema(path) {
            Ok(schema) => schema,
            Err(e) if policy == ReadErrorPolicy::Skip => {
                warn!(path = %path.display(), error = %e, "Skipping unreadable input");
                set.skipped.push(path.to_path_buf());
                continue;
            }
            Err(e) => return Err(e),
        };

        debug!(
            path = %path.display(),
            identifier = schema.identifier(),
            fields = schema.len(),
            "Loaded schema"
        );

        if let Some(previous) = set.insert(schema) {
            warn!(
                identifier = previous.identifier(),
                path = %path.display(),
                "Schema identifier already loaded; later input replaces it"
            );
        }
    }

    Ok(set)
}
