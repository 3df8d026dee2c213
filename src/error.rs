//! Error types for OBJ parsing and area computation
//!
//! This module provides error handling for OBJ file operations. All errors
//! include error codes for categorization and enough context to pinpoint the
//! offending record.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O errors
//! - **E2xxx**: OBJ record parsing errors
//! - **E3xxx**: Area computation errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: I/O error reading input
//! - `E2001`: Malformed vertex record
//! - `E2002`: Malformed face record
//! - `E3001`: Face references a vertex index out of range
//! - `E3002`: Aggregate statistics requested for a model with no polygons
//!
//! At the application boundary every one of these collapses into a single
//! "broken file" signal; the distinction exists for logs and diagnostics only.

use std::io;
use thiserror::Error;

/// Result type for OBJ operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when parsing OBJ files or computing polygon areas
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading the input
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - File not found
    /// - Insufficient permissions
    /// - Disk read error
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed `v` record
    ///
    /// **Error Code**: E2001
    ///
    /// **Common Causes**:
    /// - Fewer than three coordinates after the `v` tag
    /// - A coordinate token that is not a valid floating-point literal
    #[error("[E2001] Malformed vertex record at line {line}: {message}")]
    MalformedVertex {
        /// 1-based source line of the offending record
        line: usize,
        /// Description of what was wrong with the record
        message: String,
    },

    /// Malformed `f` record
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - An `f` tag with no vertex references after it
    /// - A reference whose leading component is not a valid integer
    #[error("[E2002] Malformed face record at line {line}: {message}")]
    MalformedFace {
        /// 1-based source line of the offending record
        line: usize,
        /// Description of what was wrong with the record
        message: String,
    },

    /// Face references a vertex index outside the parsed vertex sequence
    ///
    /// **Error Code**: E3001
    ///
    /// OBJ faces reference vertices by 1-based index. Any reference that is
    /// zero, negative, or beyond the number of parsed vertices fails here
    /// rather than at parse time, since the parser does not range-check.
    #[error(
        "[E3001] Face references vertex {index} but the model has {vertex_count} vertices \
         (valid indices are 1..={vertex_count})"
    )]
    VertexIndexOutOfRange {
        /// The 1-based vertex reference as written in the file
        index: i64,
        /// Number of vertices the model actually contains
        vertex_count: usize,
    },

    /// Aggregate statistics requested for a model with no polygons
    ///
    /// **Error Code**: E3002
    ///
    /// `min` and `max` are undefined over an empty area sequence, so a model
    /// with zero `f` records cannot produce a [`ModelInfo`](crate::ModelInfo).
    #[error("[E3002] Cannot aggregate area statistics: model contains no polygons")]
    EmptyAggregate,
}

impl Error {
    /// Create a MalformedVertex error for a specific source line
    ///
    /// # Arguments
    /// * `line` - 1-based line number of the `v` record
    /// * `message` - Description of the error
    pub fn malformed_vertex(line: usize, message: impl Into<String>) -> Self {
        Error::MalformedVertex {
            line,
            message: message.into(),
        }
    }

    /// Create a MalformedFace error for a specific source line
    ///
    /// # Arguments
    /// * `line` - 1-based line number of the `f` record
    /// * `message` - Description of the error
    pub fn malformed_face(line: usize, message: impl Into<String>) -> Self {
        Error::MalformedFace {
            line,
            message: message.into(),
        }
    }

    /// Create a VertexIndexOutOfRange error
    ///
    /// # Arguments
    /// * `index` - The 1-based vertex reference as written in the file
    /// * `vertex_count` - Number of vertices the model contains
    pub fn index_out_of_range(index: i64, vertex_count: usize) -> Self {
        Error::VertexIndexOutOfRange {
            index,
            vertex_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_in_messages() {
        let io_err = Error::Io(io::Error::new(io::ErrorKind::NotFound, "test"));
        assert!(io_err.to_string().contains("[E1001]"));

        let vertex_err = Error::malformed_vertex(3, "expected 3 coordinates, found 2");
        assert!(vertex_err.to_string().contains("[E2001]"));

        let face_err = Error::malformed_face(7, "no vertex references");
        assert!(face_err.to_string().contains("[E2002]"));

        let range_err = Error::index_out_of_range(99, 4);
        assert!(range_err.to_string().contains("[E3001]"));

        assert!(Error::EmptyAggregate.to_string().contains("[E3002]"));
    }

    #[test]
    fn test_malformed_vertex_includes_line() {
        let err = Error::malformed_vertex(42, "token 'abc' is not a number");
        assert!(err.to_string().contains("line 42"));
        assert!(err.to_string().contains("token 'abc' is not a number"));
    }

    #[test]
    fn test_out_of_range_names_valid_range() {
        let err = Error::index_out_of_range(99, 4);
        let message = err.to_string();
        assert!(message.contains("vertex 99"));
        assert!(message.contains("4 vertices"));
        assert!(message.contains("1..=4"));
    }
}
