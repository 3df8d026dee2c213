//! Data structures representing parsed OBJ models and their area statistics

use std::fmt;

/// Configuration for parsing OBJ files
///
/// Controls how strictly vertex records are validated. The default accepts
/// `v` lines with more than three coordinate tokens and ignores the extras,
/// which matches how most OBJ writers emit an optional `w` component.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    strict_vertex_records: bool,
}

impl ParserConfig {
    /// Create a new parser configuration with default (lenient) behavior
    pub fn new() -> Self {
        Self {
            strict_vertex_records: false,
        }
    }

    /// Reject `v` records that carry more than three coordinate tokens
    ///
    /// By default a fourth component (e.g. the `w` of `v x y z w`) is
    /// silently dropped. With strict vertex records enabled such a line
    /// fails with [`Error::MalformedVertex`](crate::Error::MalformedVertex)
    /// instead.
    ///
    /// # Example
    ///
    /// ```
    /// use objinfo::{parser, ParserConfig};
    ///
    /// let config = ParserConfig::new().with_strict_vertex_records();
    /// assert!(parser::parse_obj_str_with_config("v 1 2 3 4\n", &config).is_err());
    /// ```
    pub fn with_strict_vertex_records(mut self) -> Self {
        self.strict_vertex_records = true;
        self
    }

    /// Check whether strict vertex-record validation is enabled
    pub fn strict_vertex_records(&self) -> bool {
        self.strict_vertex_records
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A 3D vertex with x, y, z coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A polygon (face) defined by an ordered sequence of vertex references
///
/// References are stored exactly as written in the file: 1-based, signed.
/// The parser does not range-check them; zero, negative, or too-large
/// references survive parsing and fail during area computation.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// 1-based vertex references, in the order they appear on the `f` line
    pub indices: Vec<i64>,
}

impl Polygon {
    /// Create a new polygon from a sequence of 1-based vertex references
    pub fn new(indices: Vec<i64>) -> Self {
        Self { indices }
    }

    /// Check whether the polygon has too few references to enclose any area
    ///
    /// A degenerate polygon (fewer than 3 references) has a well-defined
    /// area of zero; it is never an error.
    pub fn is_degenerate(&self) -> bool {
        self.indices.len() < 3
    }
}

/// A parsed OBJ model: the vertex sequence and the polygon sequence
///
/// Produced by one parse pass over the file. The model is the sole owner of
/// its vertices and polygons; a new file selection replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// Parsed vertices, in file order (0-indexed)
    pub vertices: Vec<Vertex>,
    /// Parsed polygons, in file order
    pub polygons: Vec<Polygon>,
}

impl Model {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a vertex by its 1-based OBJ reference
    ///
    /// This is the single point where 1-based file references meet the
    /// 0-indexed vertex sequence. Returns `None` for any reference outside
    /// `1..=vertices.len()`, including zero and negative values.
    pub fn vertex(&self, index: i64) -> Option<&Vertex> {
        if index < 1 {
            return None;
        }
        self.vertices.get(index as usize - 1)
    }
}

/// Aggregate area statistics for one parsed model
///
/// Holds the per-polygon area sequence (parallel to the model's polygon
/// sequence) plus the derived scalars. `more_than_limit` is always
/// recomputable from `polygon_areas` and a limit alone; changing the limit
/// never requires re-parsing the file or re-running the area formula.
///
/// A `ModelInfo` is immutable once built. Limit changes produce a
/// replacement value via
/// [`area_ops::recompute_with_limit`](crate::area_ops::recompute_with_limit)
/// rather than mutating in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelInfo {
    /// Area of each polygon, in the same order as the model's polygons
    pub polygon_areas: Vec<f64>,
    /// Smallest polygon area
    pub min: f64,
    /// Largest polygon area
    pub max: f64,
    /// Total number of polygons
    pub total: usize,
    /// Number of polygons whose area strictly exceeds the limit
    ///
    /// With the limit unset this equals `total`: every polygon counts.
    pub more_than_limit: usize,
}

impl fmt::Display for ModelInfo {
    /// Render counts as integers and areas to exactly 6 decimal places
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total: {}", self.total)?;
        writeln!(f, "min: {:.6}", self.min)?;
        writeln!(f, "max: {:.6}", self.max)?;
        write!(f, "more than limit: {}", self.more_than_limit)
    }
}
