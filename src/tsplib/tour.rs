use itertools::Itertools;

use super::{geometry::*, header::read_header, MAX_RESERVED_ENTRIES, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Write},
    path::Path,
};

use tracing::info;

pub const TOUR_SECTION: &str = "TOUR_SECTION";

/// Visiting order of a closed tour; the last point connects back to the
/// first. Point ids are zero-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tour {
    order: Vec<PointId>,
}

impl Tour {
    pub fn from_0indexed_vec(order: Vec<PointId>) -> Self {
        Self { order }
    }

    pub fn from_1indexed_vec(mut order: Vec<PointId>) -> Result<Self> {
        for u in order.iter_mut() {
            raise_error_unless!(*u > 0, ErrorKind::InvalidData, "Point id smaller than 1");
            *u -= 1;
        }

        Ok(Self { order })
    }

    /// The identity tour `0, 1, ..., n-1`.
    pub fn identity(n: NumPoints) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    pub fn read<R: BufRead>(reader: R) -> Result<Self> {
        let mut lines = reader.lines();
        let header = read_header(&mut lines, TOUR_SECTION)?;
        let dimension = header.dimension as usize;

        let mut order: Vec<PointId> = Vec::with_capacity(dimension.min(MAX_RESERVED_ENTRIES));
        'lines: for line in lines {
            let line = line?;
            for token in line.split_whitespace() {
                if order.len() >= dimension || token == "-1" {
                    break 'lines;
                }

                order.push(token.parse().map_err(|_| {
                    std::io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Invalid value found. Cannot parse point id from '{token}'."),
                    )
                })?);
            }

            if order.len() >= dimension {
                break;
            }
        }

        Self::from_1indexed_vec(order)
    }

    pub fn read_file(path: &Path) -> Result<Self> {
        info!("Reading tour file: {}", path.display());
        let tour = Self::read(BufReader::new(File::open(path)?))?;
        info!("Finished reading tour with {} points", tour.len());
        Ok(tour)
    }

    pub fn write<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "DIMENSION: {}", self.order.len())?;
        writeln!(writer, "{TOUR_SECTION}")?;
        for &u in &self.order {
            writeln!(writer, "{}", u + 1)?;
        }

        Ok(())
    }

    pub fn order(&self) -> &[PointId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consecutive pairs including the closing edge from the last point back
    /// to the first. A single-point tour yields one self loop.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.order
            .iter()
            .circular_tuple_windows()
            .map(|(&u, &v)| Edge(u, v))
    }

    pub fn length(&self, coordinates: &Coordinates) -> Result<Length> {
        self.edges()
            .try_fold(0, |total, e| add_length(total, coordinates.edge_length(e)?))
    }

    /// Returns true if every point of an `n`-point instance is visited exactly once.
    pub fn is_permutation_of(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }

        let mut visited = vec![false; n];
        for &u in &self.order {
            match visited.get_mut(u as usize) {
                Some(seen) if !*seen => *seen = true,
                _ => return false,
            }
        }

        true
    }
}
