//! Parser for the Wavefront OBJ subset used by the area statistics pipeline
//!
//! Only `v` (vertex) and `f` (face) records are interpreted. Every other
//! record tag (`vt`, `vn`, `vp`, `g`, `usemtl`, `#` comments, ...) is
//! skipped, so files using unsupported directives still parse. The parser
//! makes a single linear pass over the input and performs no range checking
//! of face references; out-of-range references are caught later by the area
//! engine.
//!
//! Input bytes are decoded as UTF-8 lossily. Malformed byte sequences become
//! replacement characters, which only matter when they land inside a `v` or
//! `f` record, where they fail numeric parsing like any other bad token.

use crate::error::{Error, Result};
use crate::model::{Model, ParserConfig, Polygon, Vertex};
use std::io::Read;

/// Parse an OBJ file from a reader with the default configuration
///
/// # Arguments
///
/// * `reader` - A reader containing the OBJ file data
///
/// # Example
///
/// ```
/// use objinfo::parser;
/// use std::io::Cursor;
///
/// # fn main() -> objinfo::Result<()> {
/// let obj = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";
/// let model = parser::parse_obj(Cursor::new(obj))?;
/// assert_eq!(model.vertices.len(), 3);
/// assert_eq!(model.polygons.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn parse_obj<R: Read>(reader: R) -> Result<Model> {
    parse_obj_with_config(reader, &ParserConfig::new())
}

/// Parse an OBJ file from a reader with a custom configuration
///
/// # Arguments
///
/// * `reader` - A reader containing the OBJ file data
/// * `config` - Parser configuration controlling vertex-record strictness
pub fn parse_obj_with_config<R: Read>(mut reader: R, config: &ParserConfig) -> Result<Model> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = String::from_utf8_lossy(&bytes);
    parse_obj_str_with_config(&text, config)
}

/// Parse OBJ content from a string with the default configuration
pub fn parse_obj_str(text: &str) -> Result<Model> {
    parse_obj_str_with_config(text, &ParserConfig::new())
}

/// Parse OBJ content from a string with a custom configuration
///
/// This is the text-level core the reader entry points delegate to. Lines
/// are split on whitespace runs, so tabs and repeated spaces separate
/// tokens, and the CR of CRLF line endings is absorbed by tokenization.
pub fn parse_obj_str_with_config(text: &str, config: &ParserConfig) -> Result<Model> {
    let mut model = Model::new();

    for (line_index, line) in text.lines().enumerate() {
        let line_number = line_index + 1;
        let mut tokens = line.split_whitespace();

        let Some(tag) = tokens.next() else {
            continue; // blank line
        };

        match tag {
            "v" => {
                let coords: Vec<&str> = tokens.collect();
                model
                    .vertices
                    .push(parse_vertex_record(&coords, line_number, config)?);
            }
            "f" => {
                let refs: Vec<&str> = tokens.collect();
                model
                    .polygons
                    .push(parse_face_record(&refs, line_number)?);
            }
            _ => {} // unsupported directive, skipped
        }
    }

    Ok(model)
}

/// Parse the coordinate tokens of one `v` record
///
/// Exactly three coordinates are consumed. Extra trailing tokens are
/// ignored unless the configuration enables strict vertex records, in which
/// case they fail the record.
///
/// # Arguments
///
/// * `tokens` - The whitespace-split tokens after the `v` tag
/// * `line` - 1-based source line, for error reporting
/// * `config` - Parser configuration
pub fn parse_vertex_record(tokens: &[&str], line: usize, config: &ParserConfig) -> Result<Vertex> {
    if tokens.len() < 3 {
        return Err(Error::malformed_vertex(
            line,
            format!("expected 3 coordinates, found {}", tokens.len()),
        ));
    }
    if config.strict_vertex_records() && tokens.len() > 3 {
        return Err(Error::malformed_vertex(
            line,
            format!("expected exactly 3 coordinates, found {}", tokens.len()),
        ));
    }

    let parse_coordinate = |token: &str| -> Result<f64> {
        token.parse::<f64>().map_err(|_| {
            Error::malformed_vertex(
                line,
                format!("'{}' is not a valid floating-point number", token),
            )
        })
    };

    Ok(Vertex::new(
        parse_coordinate(tokens[0])?,
        parse_coordinate(tokens[1])?,
        parse_coordinate(tokens[2])?,
    ))
}

/// Parse the vertex references of one `f` record
///
/// Each reference may be any of the four OBJ sub-formats (`idx`, `idx/vt`,
/// `idx/vt/vn`, `idx//vn`); only the leading vertex index is retained. The
/// index is kept 1-based and signed, exactly as written.
///
/// # Arguments
///
/// * `tokens` - The whitespace-split tokens after the `f` tag
/// * `line` - 1-based source line, for error reporting
pub fn parse_face_record(tokens: &[&str], line: usize) -> Result<Polygon> {
    if tokens.is_empty() {
        return Err(Error::malformed_face(line, "no vertex references"));
    }

    let mut indices = Vec::with_capacity(tokens.len());
    for token in tokens {
        let leading = token.split('/').next().unwrap_or("");
        let index = leading.parse::<i64>().map_err(|_| {
            Error::malformed_face(
                line,
                format!("reference '{}' does not start with a valid integer index", token),
            )
        })?;
        indices.push(index);
    }

    Ok(Polygon::new(indices))
}
