//! Polygon surface-area operations
//!
//! This module provides the geometric core of the crate:
//! - Euclidean distances between vertices
//! - Triangle area via Heron's formula
//! - Polygon area by fan triangulation
//! - Aggregate statistics ([`ModelInfo`]) against an area limit
//!
//! The aggregate is split into a full path (run once per parse) and a
//! partial path ([`recompute_with_limit`], run on every limit change) that
//! only re-counts `more_than_limit` from the stored area sequence. Limit
//! edits are O(polygon count) and never re-invoke the parser or the area
//! formula.

use crate::error::{Error, Result};
use crate::model::{Model, ModelInfo, Polygon, Vertex};

/// Compute the Euclidean distance between two vertices
///
/// Full `f64` precision, no epsilon tolerance.
pub fn vertex_distance(a: &Vertex, b: &Vertex) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Compute the area of a triangle via Heron's formula
///
/// Side lengths are the pairwise Euclidean distances between the three
/// vertices; with semi-perimeter `s = (a+b+c)/2` the area is
/// `sqrt(s(s-a)(s-b)(s-c))`.
///
/// # Arguments
/// * `a`, `b`, `c` - The triangle's corner vertices
///
/// # Returns
/// The triangle's area, always >= 0
pub fn triangle_area(a: &Vertex, b: &Vertex, c: &Vertex) -> f64 {
    let ab = vertex_distance(a, b);
    let bc = vertex_distance(b, c);
    let ca = vertex_distance(c, a);

    let s = (ab + bc + ca) / 2.0;
    let radicand = s * (s - ab) * (s - bc) * (s - ca);

    // Rounding can push the radicand slightly negative for degenerate
    // (collinear) triangles; those have zero area.
    if radicand <= 0.0 {
        0.0
    } else {
        radicand.sqrt()
    }
}

/// Compute the surface area of one polygon by fan triangulation
///
/// The polygon `[p0, p1, ..., pn]` is decomposed into triangles
/// `(p0, pi, pi+1)` for `i` in `1..n`, all sharing the first vertex, and
/// the triangle areas are summed. A degenerate polygon (fewer than 3
/// references) has area 0.
///
/// # Arguments
/// * `model` - The model whose vertices the polygon references
/// * `polygon` - The polygon to measure
///
/// # Returns
/// The polygon's area, or [`Error::VertexIndexOutOfRange`] if any
/// reference falls outside the model's vertex sequence
pub fn polygon_area(model: &Model, polygon: &Polygon) -> Result<f64> {
    if polygon.is_degenerate() {
        return Ok(0.0);
    }

    let refs = &polygon.indices;
    let anchor = resolve_vertex(model, refs[0])?;

    let mut area = 0.0;
    for pair in refs[1..].windows(2) {
        let b = resolve_vertex(model, pair[0])?;
        let c = resolve_vertex(model, pair[1])?;
        area += triangle_area(anchor, b, c);
    }

    Ok(area)
}

/// Compute the per-polygon area sequence for a whole model
///
/// The result is parallel to `model.polygons`. Any out-of-range vertex
/// reference fails the whole computation; no partial sequence escapes.
pub fn compute_polygon_areas(model: &Model) -> Result<Vec<f64>> {
    model
        .polygons
        .iter()
        .map(|polygon| polygon_area(model, polygon))
        .collect()
}

/// Count the areas strictly greater than the limit
///
/// With the limit unset every area counts, so the result is `areas.len()`.
pub fn count_over_limit(areas: &[f64], limit: Option<f64>) -> usize {
    match limit {
        Some(limit) => areas.iter().filter(|&&area| area > limit).count(),
        None => areas.len(),
    }
}

/// Build the full aggregate from an already-computed area sequence
///
/// # Arguments
/// * `areas` - Per-polygon areas, taken over by the resulting `ModelInfo`
/// * `limit` - The current area limit, or `None` when unset
///
/// # Returns
/// The aggregate, or [`Error::EmptyAggregate`] when the sequence is empty
/// (`min`/`max` are undefined over zero polygons)
pub fn model_info_from_areas(areas: Vec<f64>, limit: Option<f64>) -> Result<ModelInfo> {
    if areas.is_empty() {
        return Err(Error::EmptyAggregate);
    }

    let min = areas.iter().copied().fold(f64::INFINITY, f64::min);
    let max = areas.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let total = areas.len();
    let more_than_limit = count_over_limit(&areas, limit);

    Ok(ModelInfo {
        polygon_areas: areas,
        min,
        max,
        total,
        more_than_limit,
    })
}

/// Compute the full aggregate for a model: areas plus derived scalars
///
/// This is the parse-side composition of [`compute_polygon_areas`] and
/// [`model_info_from_areas`], run once per file selection.
pub fn compute_model_info(model: &Model, limit: Option<f64>) -> Result<ModelInfo> {
    let areas = compute_polygon_areas(model)?;
    model_info_from_areas(areas, limit)
}

/// Re-derive `more_than_limit` for a new limit
///
/// The partial recompute path: a replacement `ModelInfo` is built from the
/// existing one with only the over-limit count re-derived. `min`, `max`,
/// `total`, and the area sequence are carried over untouched.
pub fn recompute_with_limit(info: &ModelInfo, limit: Option<f64>) -> ModelInfo {
    ModelInfo {
        polygon_areas: info.polygon_areas.clone(),
        min: info.min,
        max: info.max,
        total: info.total,
        more_than_limit: count_over_limit(&info.polygon_areas, limit),
    }
}

fn resolve_vertex(model: &Model, index: i64) -> Result<&Vertex> {
    model
        .vertex(index)
        .ok_or_else(|| Error::index_out_of_range(index, model.vertices.len()))
}
