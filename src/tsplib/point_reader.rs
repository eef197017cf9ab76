use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines},
    path::Path,
};

use tracing::{debug, info};

use super::{
    geometry::*,
    header::{read_header, Header},
    MAX_RESERVED_ENTRIES, Result,
};

pub const NODE_COORD_SECTION: &str = "NODE_COORD_SECTION";

/// Streams the points of a TSPLIB instance in file order. Records are
/// `id x y` with `id` being the 1-based running index of the point.
pub struct PointReader<R> {
    lines: Lines<R>,
    header: Header,
    points_read: NumPoints,
}

impl<R: BufRead> PointReader<R> {
    pub fn try_new(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = read_header(&mut lines, NODE_COORD_SECTION)?;

        Ok(Self {
            lines,
            header,
            points_read: 0,
        })
    }

    pub fn number_of_points(&self) -> NumPoints {
        self.header.dimension
    }

    pub fn name(&self) -> Option<&str> {
        self.header.name.as_deref()
    }

    pub fn edge_weight_type(&self) -> Option<&str> {
        self.header.edge_weight_type.as_deref()
    }

    fn next_non_empty_line(&mut self) -> Result<Option<String>> {
        loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(Err(x)) => return Err(x),
                Some(Ok(line)) if line.trim().is_empty() => continue,
                Some(Ok(line)) => return Ok(Some(line)),
            }
        }
    }

    fn parse_point_line(&mut self) -> Result<Point> {
        let line = self.next_non_empty_line()?;
        raise_error_unless!(
            line.is_some(),
            ErrorKind::InvalidData,
            format!(
                "Premature end of file; read {} of {} points",
                self.points_read,
                self.number_of_points()
            )
        );
        let line = line.unwrap();
        let mut parts = line.split_whitespace();

        let id: NumPoints = parse_next_value!(parts, "Point id");
        raise_error_unless!(
            id == self.points_read + 1,
            ErrorKind::InvalidData,
            format!(
                "Point id ({id}) does not match number of currently read points ({})",
                self.points_read
            )
        );

        let x: f64 = parse_next_value!(parts, "x coordinate");
        let y: f64 = parse_next_value!(parts, "y coordinate");
        raise_error_unless!(
            x.is_finite() && y.is_finite(),
            ErrorKind::InvalidData,
            format!("Point {id} has non-finite coordinates ({x}, {y})")
        );

        self.points_read += 1;
        Ok(Point::new(x, y))
    }
}

impl<R: BufRead> Iterator for PointReader<R> {
    type Item = Result<Point>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.points_read >= self.number_of_points() {
            return None;
        }

        Some(self.parse_point_line())
    }
}

pub fn read_coordinates<R: BufRead>(reader: R) -> Result<Coordinates> {
    let reader = PointReader::try_new(reader)?;
    debug!(
        "Instance {:?} ({:?}), number of points according to header: {}",
        reader.name().unwrap_or("unnamed"),
        reader.edge_weight_type().unwrap_or("unknown edge weight type"),
        reader.number_of_points()
    );

    let mut points =
        Vec::with_capacity((reader.number_of_points() as usize).min(MAX_RESERVED_ENTRIES));
    for point in reader {
        points.push(point?);
    }

    Ok(Coordinates::from_vec(points))
}

pub fn read_coordinates_file(path: &Path) -> Result<Coordinates> {
    info!("Reading point set file: {}", path.display());
    let coordinates = read_coordinates(BufReader::new(File::open(path)?))?;
    info!("Finished reading {} points", coordinates.len());
    Ok(coordinates)
}

#[cfg(test)]
mod test {
    use super::*;

    const DEMO_FILE: &str = "NAME : demo5\nCOMMENT : five points\nTYPE : TSP\nDIMENSION : 5\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n1 0 0\n2 3 4\n\n3 -1.5 2.25\n4\t10\t10\n5 1e2 0\nEOF\n";

    #[test]
    fn test_success() {
        let reader = PointReader::try_new(DEMO_FILE.as_bytes()).unwrap();

        assert_eq!(reader.number_of_points(), 5);
        assert_eq!(reader.name(), Some("demo5"));
        assert_eq!(reader.edge_weight_type(), Some("EUC_2D"));

        let points: Vec<_> = reader.map(Result::unwrap).collect();
        assert_eq!(
            points,
            vec![
                Point::new(0.0, 0.0),
                Point::new(3.0, 4.0),
                Point::new(-1.5, 2.25),
                Point::new(10.0, 10.0),
                Point::new(100.0, 0.0),
            ]
        );
    }

    #[test]
    fn reading_twice_is_identical() {
        let first = read_coordinates(DEMO_FILE.as_bytes()).unwrap();
        let second = read_coordinates(DEMO_FILE.as_bytes()).unwrap();
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }

    #[test]
    fn point_id_mismatch() {
        let data = "DIMENSION: 3\nNODE_COORD_SECTION\n1 0 0\n3 1 1\n2 2 2\n";
        let mut reader = PointReader::try_new(data.as_bytes()).unwrap();
        assert!(reader.next().unwrap().is_ok());
        assert!(reader.next().unwrap().is_err());
        assert!(read_coordinates(data.as_bytes()).is_err());
    }

    #[test]
    fn premature_end_of_file() {
        let data = "DIMENSION: 3\nNODE_COORD_SECTION\n1 0 0\n2 1 1\n";
        let err = read_coordinates(data.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn non_finite_coordinates() {
        for record in ["2 nan 5", "2 5 NaN", "2 inf 0", "2 0 -inf", "2 1e400 0"] {
            let data = format!("DIMENSION: 2\nNODE_COORD_SECTION\n1 0 0\n{record}\n");
            let err = read_coordinates(data.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{record}");
        }
    }

    #[test]
    fn huge_dimension_fails_at_end_of_file() {
        let data = "DIMENSION: 4000000000\nNODE_COORD_SECTION\n1 0 0\n";
        let err = read_coordinates(data.as_bytes()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn malformed_coordinate() {
        let data = "DIMENSION: 2\nNODE_COORD_SECTION\n1 0 0\n2 1 north\n";
        assert!(read_coordinates(data.as_bytes()).is_err());

        let data = "DIMENSION: 2\nNODE_COORD_SECTION\n1 0 0\n2 1\n";
        assert!(read_coordinates(data.as_bytes()).is_err());
    }

    #[test]
    fn missing_file() {
        let err = read_coordinates_file(Path::new("does/not/exist.tsp")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
