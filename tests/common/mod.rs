//! Shared utilities for integration tests
//!
//! Provides canonical OBJ fixtures and helpers for writing content to
//! temporary files.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// The four unit-square corners plus one quad face (`f 1 2 4 3`)
///
/// Fan triangulation from vertex 1 splits the square into two right
/// triangles of area 0.5 each, so the face's total area is exactly 1.0.
pub const UNIT_SQUARE_QUAD: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 4 3
";

/// A triangle of area 0.5 plus the unit-square quad of area 1.0
pub const TRIANGLE_AND_SQUARE: &str = "\
v 0 0 0
v 1 0 0
v 0 1 0
v 1 1 0
f 1 2 3
f 1 2 4 3
";

/// Write OBJ content to a named temporary file
pub fn write_temp_obj(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("failed to write temp file");
    file.flush().expect("failed to flush temp file");
    file
}

/// Generate OBJ content with a grid of unit right triangles
///
/// Produces `columns + 1` vertex pairs and `columns` triangles, each of
/// area 0.5, all in the z=0 plane.
pub fn triangle_strip_obj(columns: usize) -> String {
    let mut obj = String::new();
    for i in 0..=columns {
        obj.push_str(&format!("v {} 0 0\n", i));
        obj.push_str(&format!("v {} 1 0\n", i));
    }
    for i in 0..columns {
        let base = (2 * i + 1) as i64;
        obj.push_str(&format!("f {} {} {}\n", base, base + 2, base + 1));
    }
    obj
}
