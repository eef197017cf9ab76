//! Readers and writers for the flat-text files around a TSP instance: the
//! TSPLIB point set (`NODE_COORD_SECTION`), the TSPLIB tour (`TOUR_SECTION`)
//! and the zero-indexed edge list written by the candidate-edge finders.

pub type Result<T> = std::io::Result<T>;

/// Upper bound on capacity reserved up front from a `DIMENSION` header;
/// larger data sections grow as they are read.
const MAX_RESERVED_ENTRIES: usize = 1 << 16;

macro_rules! raise_error_unless {
    ($cond : expr, $kind : expr, $info : expr) => {
        if !($cond) {
            return Err(std::io::Error::new($kind, $info));
        }
    };
}

macro_rules! parse_next_value {
    ($iterator : expr, $name : expr) => {{
        let next = $iterator.next();
        raise_error_unless!(
            next.is_some(),
            std::io::ErrorKind::InvalidData,
            format!("Premature end of line when parsing {}.", $name)
        );

        let parsed = next.unwrap().parse();
        raise_error_unless!(
            parsed.is_ok(),
            std::io::ErrorKind::InvalidData,
            format!("Invalid value found. Cannot parse {}.", $name)
        );

        parsed.unwrap()
    }};
}

pub mod geometry;
pub mod header;

pub mod edge_list;
pub mod point_reader;

pub mod tour;
pub use tour::Tour;
