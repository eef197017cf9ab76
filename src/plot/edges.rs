use std::io::Write;

use tracing::debug;

use super::{canvas::Canvas, style::LineStyle, Result};
use crate::tsplib::geometry::*;

/// Draws every edge as a segment, in input order, and sums the rounded
/// Euclidean edge lengths.
///
/// The total is written to `report` as `total edge length: <total>` only
/// after all edges were resolved; an out-of-range point id or a total that
/// does not fit into a [`Length`] aborts before anything is reported.
pub fn plot_edges<C: Canvas, W: Write>(
    coordinates: &Coordinates,
    edges: &[Edge],
    style: &LineStyle,
    canvas: &mut C,
    mut report: W,
) -> Result<Length> {
    let mut total_length: Length = 0;
    for &edge in edges {
        let (p, q) = coordinates.endpoints(edge)?;
        canvas.segment(p, q, style);
        total_length = add_length(total_length, p.rounded_distance(&q)?)?;
    }

    debug!("Drew {} edges with style {style}", edges.len());
    writeln!(report, "total edge length: {total_length}")?;
    Ok(total_length)
}
