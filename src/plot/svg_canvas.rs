use std::{
    f64::consts::{FRAC_PI_2, PI},
    path::Path,
};

use itertools::Itertools;
use svg::{
    node::element::{path::Data, Circle, Group, Line, Path as SvgPath, Polygon, Rectangle},
    Document, Node,
};
use tracing::info;

use super::{
    canvas::Canvas,
    style::{LineStyle, Marker},
    Result,
};
use crate::tsplib::geometry::Point;

const DEFAULT_WIDTH: f64 = 1000.0;
/// Margin added on each side, relative to the data extent.
const MARGIN: f64 = 0.05;
/// Line width and marker sizes are multiples of this fraction of the view.
const UNIT: f64 = 1e-3;

enum Shape {
    Segment(Point, Point, LineStyle),
    ClosedPolyline(Vec<Point>, LineStyle),
}

/// Collects draw calls and renders them into an SVG document with the y axis
/// pointing up. The view box is fitted to everything drawn.
pub struct SvgCanvas {
    shapes: Vec<Shape>,
    equal_aspect: bool,
    width: f64,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::with_width(DEFAULT_WIDTH)
    }

    pub fn with_width(width: f64) -> Self {
        Self {
            shapes: Vec::new(),
            equal_aspect: false,
            width,
        }
    }

    fn points(&self) -> impl Iterator<Item = &Point> {
        self.shapes.iter().flat_map(|shape| match shape {
            Shape::Segment(p, q, _) => vec![p, q],
            Shape::ClosedPolyline(points, _) => points.iter().collect(),
        })
    }

    /// Lower left and upper right corner of everything drawn so far.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        self.points().fold(None, |acc, p| {
            let (lo, hi) = acc.unwrap_or((*p, *p));
            Some((
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            ))
        })
    }

    pub fn into_document(self) -> Document {
        let (lo, hi) = self
            .bounds()
            .unwrap_or((Point::new(0.0, 0.0), Point::new(1.0, 1.0)));

        let extent = |span: f64| if span > 0.0 { span } else { 1.0 };
        let (w, h) = (extent(hi.x - lo.x), extent(hi.y - lo.y));
        let (pad_x, pad_y) = (MARGIN * w, MARGIN * h);

        // y is flipped by the group transform below
        let view_x = lo.x - pad_x;
        let view_y = -(hi.y + pad_y);
        let view_w = w + 2.0 * pad_x;
        let view_h = h + 2.0 * pad_y;
        let unit = UNIT * view_w.max(view_h);

        let (height, aspect) = if self.equal_aspect {
            (self.width * view_h / view_w, "xMidYMid meet")
        } else {
            (self.width * 0.75, "none")
        };

        let mut figure = Group::new().set("transform", "scale(1,-1)");
        for shape in &self.shapes {
            match shape {
                Shape::Segment(p, q, style) => {
                    if style.dash.is_some() {
                        figure.append(stroke(
                            Line::new()
                                .set("x1", p.x)
                                .set("y1", p.y)
                                .set("x2", q.x)
                                .set("y2", q.y),
                            style,
                            unit,
                        ));
                    }
                    draw_markers(&mut figure, [p, q].into_iter(), style, unit);
                }
                Shape::ClosedPolyline(points, style) => {
                    if style.dash.is_some() && !points.is_empty() {
                        let coords = points.iter().map(|p| format!("{},{}", p.x, p.y)).join(" ");
                        figure.append(stroke(
                            Polygon::new().set("points", coords).set("fill", "none"),
                            style,
                            unit,
                        ));
                    }
                    draw_markers(&mut figure, points.iter(), style, unit);
                }
            }
        }

        Document::new()
            .set("viewBox", format!("{view_x} {view_y} {view_w} {view_h}"))
            .set("width", self.width)
            .set("height", height)
            .set("preserveAspectRatio", aspect)
            .add(
                Rectangle::new()
                    .set("x", view_x)
                    .set("y", view_y)
                    .set("width", view_w)
                    .set("height", view_h)
                    .set("fill", "white"),
            )
            .add(figure)
    }

    pub fn save(self, path: &Path) -> Result<()> {
        let shapes = self.shapes.len();
        svg::save(path, &self.into_document())?;
        info!("Wrote figure with {shapes} shapes to {}", path.display());
        Ok(())
    }
}

fn stroke<N: Node>(mut node: N, style: &LineStyle, unit: f64) -> N {
    let width = 1.5 * unit;
    node.assign("stroke", style.color.rgb());
    node.assign("stroke-width", width);
    if let Some(pattern) = style.dash.and_then(|d| d.pattern()) {
        node.assign(
            "stroke-dasharray",
            pattern.iter().map(|x| x * width).join(" "),
        );
    }
    node
}

fn draw_markers<'a>(
    figure: &mut Group,
    points: impl Iterator<Item = &'a Point>,
    style: &LineStyle,
    unit: f64,
) {
    let Some(marker) = style.marker else {
        return;
    };

    let color = style.color.rgb();
    let size = 3.0 * unit;
    for p in points {
        let filled_polygon = |corners: &[(f64, f64)]| {
            let coords = corners
                .iter()
                .map(|(dx, dy)| format!("{},{}", p.x + dx * size, p.y + dy * size))
                .join(" ");
            Polygon::new().set("points", coords).set("fill", color)
        };
        let strokes = |data: Data| {
            SvgPath::new()
                .set("d", data)
                .set("fill", "none")
                .set("stroke", color)
                .set("stroke-width", unit)
        };

        match marker {
            Marker::Point => figure.append(
                Circle::new()
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", size / 2.0)
                    .set("fill", color),
            ),
            Marker::Circle => figure.append(
                Circle::new()
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", size)
                    .set("fill", color),
            ),
            Marker::Cross => figure.append(strokes(
                Data::new()
                    .move_to((p.x - size, p.y - size))
                    .line_to((p.x + size, p.y + size))
                    .move_to((p.x - size, p.y + size))
                    .line_to((p.x + size, p.y - size)),
            )),
            Marker::Plus => figure.append(strokes(
                Data::new()
                    .move_to((p.x - size, p.y))
                    .line_to((p.x + size, p.y))
                    .move_to((p.x, p.y - size))
                    .line_to((p.x, p.y + size)),
            )),
            Marker::Square => {
                figure.append(filled_polygon(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]))
            }
            Marker::Diamond => {
                figure.append(filled_polygon(&[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]))
            }
            Marker::Star => {
                let corners: Vec<_> = (0..10)
                    .map(|i| {
                        let radius = if i % 2 == 0 { 1.0 } else { 0.4 };
                        let angle = FRAC_PI_2 + i as f64 * PI / 5.0;
                        (radius * angle.cos(), radius * angle.sin())
                    })
                    .collect();
                figure.append(filled_polygon(&corners))
            }
        }
    }
}

impl Canvas for SvgCanvas {
    fn segment(&mut self, from: Point, to: Point, style: &LineStyle) {
        self.shapes.push(Shape::Segment(from, to, *style));
    }

    fn closed_polyline(&mut self, points: &[Point], style: &LineStyle) {
        self.shapes.push(Shape::ClosedPolyline(points.to_vec(), *style));
    }

    fn set_equal_aspect(&mut self, equal: bool) {
        self.equal_aspect = equal;
    }
}
