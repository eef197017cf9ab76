use super::{geometry::NumPoints, Result};
use std::io::{BufRead, ErrorKind, Lines};

/// The specification part of a TSPLIB file, i.e. everything before the
/// data section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    pub name: Option<String>,
    pub edge_weight_type: Option<String>,
    pub dimension: NumPoints,
}

fn split_keyword(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    Some((key.trim(), value.trim()))
}

/// Consumes lines up to and including the one that opens `section`
/// (e.g. `NODE_COORD_SECTION`). A non-zero `DIMENSION` is mandatory.
pub fn read_header<R: BufRead>(lines: &mut Lines<R>, section: &str) -> Result<Header> {
    let mut header = Header::default();
    let mut found_section = false;

    for line in lines.by_ref() {
        let line = line?;
        if line.contains(section) {
            found_section = true;
            break;
        }

        let Some((key, value)) = split_keyword(&line) else {
            continue;
        };

        match key {
            "NAME" => header.name = Some(value.to_string()),
            "EDGE_WEIGHT_TYPE" => header.edge_weight_type = Some(value.to_string()),
            "DIMENSION" => {
                header.dimension = value.parse().map_err(|_| {
                    std::io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Invalid value found. Cannot parse DIMENSION from '{value}'."),
                    )
                })?
            }
            _ => {}
        }
    }

    raise_error_unless!(
        found_section,
        ErrorKind::InvalidData,
        format!("No {section} found")
    );
    raise_error_unless!(
        header.dimension > 0,
        ErrorKind::InvalidData,
        "No DIMENSION header found"
    );

    Ok(header)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keywords_with_and_without_spaces() {
        let data = "NAME : demo\nCOMMENT: made up\nTYPE: TSP\nDIMENSION: 4\nEDGE_WEIGHT_TYPE : EUC_2D\nNODE_COORD_SECTION\n1 0 0\n";
        let mut lines = data.as_bytes().lines();
        let header = read_header(&mut lines, "NODE_COORD_SECTION").unwrap();

        assert_eq!(header.name.as_deref(), Some("demo"));
        assert_eq!(header.edge_weight_type.as_deref(), Some("EUC_2D"));
        assert_eq!(header.dimension, 4);

        // the data section is left untouched
        assert_eq!(lines.next().unwrap().unwrap(), "1 0 0");
    }

    #[test]
    fn missing_dimension() {
        let data = "NAME: demo\nTOUR_SECTION\n1\n";
        let err = read_header(&mut data.as_bytes().lines(), "TOUR_SECTION").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn zero_dimension() {
        let data = "DIMENSION: 0\nTOUR_SECTION\n";
        assert!(read_header(&mut data.as_bytes().lines(), "TOUR_SECTION").is_err());
    }

    #[test]
    fn missing_section() {
        let data = "DIMENSION: 3\n1\n2\n3\n";
        assert!(read_header(&mut data.as_bytes().lines(), "TOUR_SECTION").is_err());
    }

    #[test]
    fn unparsable_dimension() {
        let data = "DIMENSION: many\nTOUR_SECTION\n";
        assert!(read_header(&mut data.as_bytes().lines(), "TOUR_SECTION").is_err());
    }
}
