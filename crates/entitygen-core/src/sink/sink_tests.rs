#![allow(non_snake_case)]

use super::*;
use tempfile::TempDir;

#[test]
fn FsSink___reset___removes_previous_contents() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("out");
    fs::create_dir_all(root.join("stale")).unwrap();
    fs::write(root.join("Old.java"), "old").unwrap();
    let mut sink = FsSink::new(&root);

    sink.reset().unwrap();

    assert!(root.is_dir());
    assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
}

#[test]
fn FsSink___reset_missing_root___creates_it() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("out");
    let mut sink = FsSink::new(&root);

    sink.reset().unwrap();

    assert!(root.is_dir());
}

#[test]
fn FsSink___write___overwrites_existing_file() {
    let dir = TempDir::new().unwrap();
    let mut sink = FsSink::new(dir.path());
    let path = dir.path().join("Users.java");
    fs::write(&path, "previous content that is longer").unwrap();

    sink.write(&path, "public class Users {}").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "public class Users {}");
}

#[test]
fn FsSink___write_into_missing_dir___returns_output_write_error() {
    let dir = TempDir::new().unwrap();
    let mut sink = FsSink::new(dir.path().join("out"));
    let path = dir.path().join("out").join("Users.java");

    let result = sink.write(&path, "x");

    assert!(matches!(result, Err(GenError::OutputWrite { .. })));
}

#[test]
fn FsSink___reset_when_root_is_a_file___returns_output_write_error() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("out");
    fs::write(&root, "not a directory").unwrap();
    let mut sink = FsSink::new(&root);

    let result = sink.reset();

    assert!(matches!(result, Err(GenError::OutputWrite { .. })));
}

#[test]
fn MemorySink___records_calls_in_order() {
    let mut sink = MemorySink::new();

    sink.reset().unwrap();
    sink.write(Path::new("out/A.java"), "a").unwrap();
    sink.write(Path::new("out/B.java"), "b").unwrap();

    assert_eq!(
        sink.events(),
        [
            SinkEvent::Reset,
            SinkEvent::Write("out/A.java".into()),
            SinkEvent::Write("out/B.java".into()),
        ]
    );
    assert_eq!(sink.get("out/B.java"), Some("b"));
}

#[test]
fn MemorySink___reset___clears_files() {
    let mut sink = MemorySink::new();
    sink.write(Path::new("out/A.java"), "a").unwrap();

    sink.reset().unwrap();

    assert!(sink.files().is_empty());
}
