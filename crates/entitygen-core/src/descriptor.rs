//! Entity descriptors: one resolved (schema, variant) pair ready to render.

use crate::field::{Field, Schema};
use crate::variant::Variant;
use std::path::PathBuf;

/// Where generated files go and which extension they carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub dir: PathBuf,
    pub extension: String,
}

impl OutputLayout {
    pub fn new(dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            extension: extension.into(),
        }
    }

    /// Path of the generated file for `identifier` in `variant`
    pub fn path_for(&self, identifier: &str, variant: Variant) -> PathBuf {
        self.dir
            .join(format!("{}.{}", variant.file_stem(identifier), self.extension))
    }
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self::new("out", "java")
    }
}

/// Naming and structure for one generated class
///
/// Borrows the schema's fields; the three descriptors of a schema all point at
/// the same slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityDescriptor<'a> {
    pub variant: Variant,
    pub identifier: &'a str,
    pub class_name: String,
    pub superclass_name: Option<&'static str>,
    pub fields: &'a [Field],
    pub output_path: PathBuf,
}

impl<'a> EntityDescriptor<'a> {
    pub fn new(schema: &'a Schema, variant: Variant, layout: &OutputLayout) -> Self {
        let identifier = schema.identifier();
        Self {
            variant,
            identifier,
            class_name: variant.class_name(identifier),
            superclass_name: variant.superclass(),
            fields: schema.fields(),
            output_path: layout.path_for(identifier, variant),
        }
    }
}

/// Build the App, Relational and Document descriptors for `schema`, in that order
pub fn build_descriptors<'a>(
    schema: &'a Schema,
    layout: &OutputLayout,
) -> [EntityDescriptor<'a>; 3] {
    Variant::ALL.map(|variant| EntityDescriptor::new(schema, variant, layout))
}
