//! Declared column type to Java type translation.
//!
//! | Declared | Java |
//! |----------|------|
//! | `Numeric` | `Integer` |
//! | `Varchar` | `String` |
//! | `Datetime` | `Date` |
//! | anything else | unchanged |
//!
//! The passthrough lets an input file name a Java type directly (`Long`,
//! `BigDecimal`, `List<String>`). Matching is exact and case-sensitive.

/// Translate a declared domain type into a Java class name.
///
/// # Examples
///
/// ```
/// use entitygen_core::translate_type;
///
/// assert_eq!(translate_type("Numeric"), "Integer");
/// assert_eq!(translate_type("Varchar"), "String");
/// assert_eq!(translate_type("Datetime"), "Date");
/// assert_eq!(translate_type("Boolean"), "Boolean");
/// ```
pub fn translate_type(declared: &str) -> &str {
    match declared {
        "Numeric" => "Integer",
        "Varchar" => "String",
        "Datetime" => "Date",
        other => other,
    }
}
