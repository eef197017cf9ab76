use super::style::LineStyle;
use crate::tsplib::geometry::Point;

/// Drawing surface in data coordinates. Draw calls are rendered in the order
/// they are issued, later calls on top of earlier ones.
pub trait Canvas {
    fn segment(&mut self, from: Point, to: Point, style: &LineStyle);

    /// Draws `points` as one polyline including the closing segment from the
    /// last point back to the first.
    fn closed_polyline(&mut self, points: &[Point], style: &LineStyle);

    /// If set, one unit on the x axis is drawn as long as one unit on the y axis.
    fn set_equal_aspect(&mut self, equal: bool);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Segment(Point, Point, LineStyle),
        ClosedPolyline(Vec<Point>, LineStyle),
    }

    #[derive(Debug, Default)]
    pub struct RecordingCanvas {
        pub calls: Vec<DrawCall>,
        pub equal_aspect: bool,
    }

    impl Canvas for RecordingCanvas {
        fn segment(&mut self, from: Point, to: Point, style: &LineStyle) {
            self.calls.push(DrawCall::Segment(from, to, *style));
        }

        fn closed_polyline(&mut self, points: &[Point], style: &LineStyle) {
            self.calls.push(DrawCall::ClosedPolyline(points.to_vec(), *style));
        }

        fn set_equal_aspect(&mut self, equal: bool) {
            self.equal_aspect = equal;
        }
    }
}
