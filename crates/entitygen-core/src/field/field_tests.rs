#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test]
fn Field___from_line___splits_and_trims_cells() {
    let field = Field::from_line("  id , not null ,  Numeric ");

    assert_eq!(field.cells(), ["id", "not null", "Numeric"]);
    assert_eq!(field.name(), "id");
    assert_eq!(field.flag(), "not null");
    assert_eq!(field.declared_type(), "Numeric");
}

#[test]
fn Field___from_line_with_empty_flag___keeps_position() {
    let field = Field::from_line("id,,Numeric");

    assert_eq!(field.cells().len(), 3);
    assert_eq!(field.flag(), "");
    assert_eq!(field.declared_type(), "Numeric");
}

#[test]
fn Field___from_line_with_extra_cells___keeps_all() {
    let field = Field::from_line("id,,Numeric,primary key");

    assert_eq!(field.cells().len(), 4);
    assert_eq!(field.cell(3), "primary key");
}

#[test_case("name", "", "")]
#[test_case("name,", "", "")]
#[test_case("name,,", "", "")]
#[test_case("", "", "")]
fn Field___short_row___missing_cells_read_empty(line: &str, flag: &str, ty: &str) {
    let field = Field::from_line(line);

    assert_eq!(field.flag(), flag);
    assert_eq!(field.declared_type(), ty);
    assert_eq!(field.cell(42), "");
}

#[test_case("Numeric", "Integer")]
#[test_case("Varchar", "String")]
#[test_case("Datetime", "Date")]
#[test_case("BigDecimal", "BigDecimal")]
fn Field___java_type___translates_declared_type(declared: &str, expected: &str) {
    let field = Field::new(vec!["x".into(), String::new(), declared.into()]);

    assert_eq!(field.java_type(), expected);
}

#[test]
fn Schema___new___preserves_field_order() {
    let schema = Schema::new(
        "users",
        vec![Field::from_line("id,,Numeric"), Field::from_line("name,,Varchar")],
    );

    let names: Vec<&str> = schema.fields().iter().map(Field::name).collect();

    assert_eq!(schema.identifier(), "users");
    assert_eq!(names, ["id", "name"]);
    assert_eq!(schema.len(), 2);
    assert!(!schema.is_empty());
}
