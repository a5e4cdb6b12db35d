//! Field rows and schemas
//!
//! A [`Field`] is one row of an input file, kept as the raw trimmed cells.
//! By convention the cells are laid out as:
//!
//! | Index | Meaning |
//! |-------|---------|
//! | 0 | Field name |
//! | 1 | Reserved (not used by generation) |
//! | 2 | Declared domain type (`Numeric`, `Varchar`, `Datetime`, ...) |
//!
//! Missing cells read as the empty string, so short rows still render.

use crate::types::translate_type;

const NAME_CELL: usize = 0;
const FLAG_CELL: usize = 1;
const TYPE_CELL: usize = 2;

/// One input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    cells: Vec<String>,
}

impl Field {
    /// Create a field from already-trimmed cells
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Split a raw line on commas and trim each cell
    pub fn from_line(line: &str) -> Self {
        Self::new(line.split(',').map(|cell| cell.trim().to_string()).collect())
    }

    /// All cells of the row, in file order
    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell at `index`, or `""` if the row is shorter
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn name(&self) -> &str {
        self.cell(NAME_CELL)
    }

    /// The reserved second cell
    pub fn flag(&self) -> &str {
        self.cell(FLAG_CELL)
    }

    pub fn declared_type(&self) -> &str {
        self.cell(TYPE_CELL)
    }

    /// Declared type after translation to a Java class name
    pub fn java_type(&self) -> &str {
        translate_type(self.declared_type())
    }
}

/// The ordered fields of one input file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    identifier: String,
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(identifier: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            identifier: identifier.into(),
            fields,
        }
    }

    /// Identifier derived from the input file name
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
#[path = "field/field_tests.rs"]
mod field_tests;
