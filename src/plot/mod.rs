//! Drawing of edge sets and tours on a 2D figure.

pub type Result<T> = std::io::Result<T>;

pub mod canvas;
pub use canvas::Canvas;

pub mod style;
pub use style::LineStyle;

pub mod svg_canvas;
pub use svg_canvas::SvgCanvas;

pub mod edges;
pub use edges::plot_edges;

pub mod tour_overlay;
pub use tour_overlay::{plot_tour, read_and_plot_tour};
