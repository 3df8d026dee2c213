//! # objinfo
//!
//! Surface-area statistics for Wavefront OBJ models.
//!
//! This library parses the `v`/`f` subset of the OBJ format, computes the
//! surface area of every polygon by fan triangulation and Heron's formula,
//! and aggregates the results: smallest and largest area, polygon count,
//! and the count of polygons whose area exceeds a user-set limit. Changing
//! the limit re-derives only the over-limit count from the stored area
//! sequence; the file is never re-parsed and no area is ever recomputed.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Single-pass OBJ parsing with all four face-reference sub-formats
//!   (`idx`, `idx/vt`, `idx/vt/vn`, `idx//vn`)
//! - Exact `f64` area computation, reproducible across runs
//! - A thread-safe [`Session`] coordinator with last-writer-wins
//!   publication for interactive use
//!
//! ## Example
//!
//! ```
//! use objinfo::{area_ops, Model};
//! use std::io::Cursor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nv 1 1 0\nf 1 2 4 3\n";
//! let model = Model::from_reader(Cursor::new(obj))?;
//!
//! let info = area_ops::compute_model_info(&model, Some(0.5))?;
//! println!("{}", info);
//! assert_eq!(info.total, 1);
//! assert_eq!(info.more_than_limit, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod area_ops;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;

pub use error::{Error, Result};
pub use model::{Model, ModelInfo, ParserConfig, Polygon, Vertex};
pub use session::Session;

use std::io::Read;
use std::path::Path;

impl Model {
    /// Parse an OBJ file from a reader
    ///
    /// This method uses the default parser configuration, which ignores
    /// extra vertex components (e.g. a `w` coordinate).
    ///
    /// # Arguments
    ///
    /// * `reader` - A reader containing the OBJ file data
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objinfo::Model;
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("model.obj")?;
    /// let model = Model::from_reader(file)?;
    ///
    /// println!("{} vertices, {} polygons", model.vertices.len(), model.polygons.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        parser::parse_obj(reader)
    }

    /// Parse an OBJ file from a reader with a custom configuration
    ///
    /// # Arguments
    ///
    /// * `reader` - A reader containing the OBJ file data
    /// * `config` - Parser configuration controlling vertex-record
    ///   strictness
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objinfo::{Model, ParserConfig};
    /// use std::fs::File;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let file = File::open("model.obj")?;
    /// let config = ParserConfig::new().with_strict_vertex_records();
    /// let model = Model::from_reader_with_config(file, &config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_reader_with_config<R: Read>(reader: R, config: &ParserConfig) -> Result<Self> {
        parser::parse_obj_with_config(reader, config)
    }

    /// Parse an OBJ file from a file path
    ///
    /// This is a convenience method that opens the file and parses it with
    /// the default configuration. The file content decides whether the
    /// parse succeeds; the filename and extension are never inspected.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use objinfo::Model;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = Model::from_path("model.obj")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        parser::parse_obj(file)
    }
}
