//! The three generation targets applied to every schema.
//!
//! | Variant | Class name | Superclass | File stem |
//! |---------|------------|------------|-----------|
//! | [`Variant::App`] | `App<id>Entity` | `AppEntityBase` | `App<id>Entity` |
//! | [`Variant::Relational`] | `<id>` | `AnnotatedEntity` | `<id>PostgreData` |
//! | [`Variant::Document`] | `<id>` | `MongoEntityBase` | `<id>MongoData` |
//!
//! Only the App variant carries its prefix and suffix in the class name. The
//! other two keep the bare identifier and differ only by file name. Downstream
//! tooling depends on this, so it must not be "fixed".

use serde::Serialize;

/// Generation target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Base application entity
    App,
    /// Relational-persistence entity
    Relational,
    /// Document-store entity
    Document,
}

impl Variant {
    /// Every variant, in emission order
    pub const ALL: [Variant; 3] = [Variant::App, Variant::Relational, Variant::Document];

    /// Class name declared by the generated source
    pub fn class_name(self, identifier: &str) -> String {
        match self {
            Variant::App => format!("App{identifier}Entity"),
            Variant::Relational | Variant::Document => identifier.to_string(),
        }
    }

    /// Superclass token, or `None` for a class without `extends`
    pub fn superclass(self) -> Option<&'static str> {
        match self {
            Variant::App => Some("AppEntityBase"),
            Variant::Relational => Some("AnnotatedEntity"),
            Variant::Document => Some("MongoEntityBase"),
        }
    }

    /// File name without extension
    pub fn file_stem(self, identifier: &str) -> String {
        match self {
            Variant::App => format!("App{identifier}Entity"),
            Variant::Relational => format!("{identifier}PostgreData"),
            Variant::Document => format!("{identifier}MongoData"),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Variant::App => "app",
            Variant::Relational => "relational",
            Variant::Document => "document",
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
