//! Shared test utilities and fixture generators

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use typarg::Registry;

/// Registry mirroring a small plotting tool:
///
/// - `-h/--help`: Flag
/// - `-x/--x-axis`: Integer
/// - `-y/--y-axis`: Floating
/// - `-t/--title`: Text
/// - `-f/--file`: InputFile, any extension
/// - `-o/--out-file`: OutputFile, any extension
pub fn plot_registry() -> Registry {
    let mut registry = Registry::new();
    registry.flag('h', Some("help")).unwrap();
    registry.integer('x', Some("x-axis")).unwrap();
    registry.floating('y', Some("y-axis")).unwrap();
    registry.text('t', Some("title")).unwrap();
    registry
        .input_file('f', Some("file"), Vec::<String>::new())
        .unwrap();
    registry
        .output_file('o', Some("out-file"), Vec::<String>::new())
        .unwrap();
    registry
}

/// Build a token vector with a program name at index 0.
pub fn argv(tokens: &[&str]) -> Vec<String> {
    std::iter::once("prog")
        .chain(tokens.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Create a temporary directory holding the named files (each with a line of content)
pub fn create_temp_files(names: &[&str]) -> (TempDir, Vec<PathBuf>) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let paths = names
        .iter()
        .map(|name| {
            let path = dir.path().join(name);
            fs::write(&path, "fixture\n").expect("Failed to write fixture file");
            path
        })
        .collect();
    (dir, paths)
}

/// UTF-8 form of a fixture path, for use as a token
pub fn token(path: &std::path::Path) -> String {
    path.to_str().expect("Fixture path is not UTF-8").to_string()
}
