use std::path::Path;

use tracing::{info, warn};

use super::{canvas::Canvas, style::LineStyle, Result};
use crate::tsplib::{geometry::*, Tour};

/// Draws `tour` as one closed polyline. Every point id is resolved before
/// anything is drawn, so an out-of-range id leaves the canvas untouched.
pub fn plot_tour<C: Canvas>(
    coordinates: &Coordinates,
    tour: &Tour,
    style: &LineStyle,
    canvas: &mut C,
) -> Result<()> {
    let points = tour
        .order()
        .iter()
        .map(|&u| coordinates.point(u))
        .collect::<Result<Vec<_>>>()?;

    if !tour.is_permutation_of(coordinates.len()) {
        warn!(
            "Tour with {} entries does not visit each of the {} points exactly once",
            tour.len(),
            coordinates.len()
        );
    }

    let length = tour.length(coordinates)?;
    info!("Tour length: {length}");

    canvas.closed_polyline(&points, style);
    Ok(())
}

pub fn read_and_plot_tour<C: Canvas>(
    coordinates: &Coordinates,
    tour_path: &Path,
    style: &LineStyle,
    canvas: &mut C,
) -> Result<()> {
    let tour = Tour::read_file(tour_path)?;
    plot_tour(coordinates, &tour, style, canvas)
}
