use super::Result;
use std::io::ErrorKind;

pub type PointId = u32;
pub type NumPoints = PointId;
pub type Length = u64;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Euclidean distance rounded to the nearest integer (ties away from zero).
    /// Fails if the distance is not finite or does not fit into a [`Length`].
    pub fn rounded_distance(&self, other: &Point) -> Result<Length> {
        let rounded = self.distance(other).round();
        raise_error_unless!(
            rounded.is_finite() && rounded < Length::MAX as f64,
            ErrorKind::InvalidData,
            format!("Distance between {self:?} and {other:?} is not a representable length")
        );

        Ok(rounded as Length)
    }
}

/// Adds `length` to the running `total`, failing instead of wrapping around.
pub fn add_length(total: Length, length: Length) -> Result<Length> {
    total.checked_add(length).ok_or_else(|| {
        std::io::Error::new(ErrorKind::InvalidData, "total edge length overflows")
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub PointId, pub PointId);

impl Edge {
    pub fn new(u: PointId, v: PointId) -> Self {
        Self(u, v)
    }
}

/// Coordinates of a point set, addressed by the zero-based position of each
/// point in the instance file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Coordinates {
    points: Vec<Point>,
}

impl Coordinates {
    pub fn from_vec(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn point(&self, id: PointId) -> Result<Point> {
        match self.points.get(id as usize) {
            Some(&p) => Ok(p),
            None => Err(std::io::Error::new(
                ErrorKind::InvalidData,
                format!(
                    "Point id {id} out of range; the instance has {} points",
                    self.points.len()
                ),
            )),
        }
    }

    pub fn endpoints(&self, Edge(u, v): Edge) -> Result<(Point, Point)> {
        Ok((self.point(u)?, self.point(v)?))
    }

    pub fn edge_length(&self, edge: Edge) -> Result<Length> {
        let (p, q) = self.endpoints(edge)?;
        p.rounded_distance(&q)
    }
}

impl FromIterator<Point> for Coordinates {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pythagorean_triple_is_exact() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(3.0, 4.0);
        assert_eq!(p.distance(&q), 5.0);
        assert_eq!(p.rounded_distance(&q).unwrap(), 5);
    }

    #[test]
    fn diagonal_rounds_down() {
        let p = Point::new(0.0, 0.0);
        let q = Point::new(1.0, 1.0);
        assert!((p.distance(&q) - std::f64::consts::SQRT_2).abs() < 1e-12);
        assert_eq!(p.rounded_distance(&q).unwrap(), 1);
    }

    #[test]
    fn half_rounds_away_from_zero() {
        let p = Point::new(0.0, 0.0);
        assert_eq!(p.rounded_distance(&Point::new(2.5, 0.0)).unwrap(), 3);
        assert_eq!(p.rounded_distance(&Point::new(0.0, -0.5)).unwrap(), 1);
    }

    #[test]
    fn lookup_out_of_range() {
        let coords: Coordinates = [Point::new(0.0, 0.0), Point::new(1.0, 0.0)]
            .into_iter()
            .collect();

        assert_eq!(coords.point(1).unwrap(), Point::new(1.0, 0.0));

        let err = coords.point(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);

        assert!(coords.endpoints(Edge(0, 7)).is_err());
        assert_eq!(coords.edge_length(Edge(1, 0)).unwrap(), 1);
    }

    #[test]
    fn unrepresentable_distances() {
        let p = Point::new(0.0, 0.0);
        for q in [
            Point::new(f64::NAN, 0.0),
            Point::new(f64::INFINITY, 0.0),
            Point::new(0.0, f64::NEG_INFINITY),
            Point::new(1e20, 0.0),
        ] {
            let err = p.rounded_distance(&q).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{q:?}");
        }

        assert_eq!(
            p.rounded_distance(&Point::new(1e19, 0.0)).unwrap(),
            10_000_000_000_000_000_000
        );
    }

    #[test]
    fn add_length_fails_on_overflow() {
        assert_eq!(add_length(3, 4).unwrap(), 7);
        assert_eq!(add_length(Length::MAX - 1, 1).unwrap(), Length::MAX);

        let err = add_length(Length::MAX, 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }
}
