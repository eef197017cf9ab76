use std::{
    fs::File,
    io::{BufRead, BufReader, ErrorKind, Lines, Write},
    path::Path,
};

use tracing::info;

use super::{geometry::*, Result};

/// Reads `i j` lines with zero-based point ids, one edge per line.
pub struct EdgeListReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl<R: BufRead> EdgeListReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    fn parse_edge_line(&mut self) -> Result<Option<Edge>> {
        let line = loop {
            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    let line = line?;
                    self.line_number += 1;
                    if !line.trim().is_empty() {
                        break line;
                    }
                }
            }
        };

        let mut parts = line.split_whitespace();
        let from = parse_next_value!(parts, format!("source point in line {}", self.line_number));
        let dest = parse_next_value!(parts, format!("target point in line {}", self.line_number));

        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Expected end of line {}", self.line_number)
        );

        Ok(Some(Edge::new(from, dest)))
    }
}

impl<R: BufRead> Iterator for EdgeListReader<R> {
    type Item = Result<Edge>;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_edge_line().transpose()
    }
}

pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Vec<Edge>> {
    EdgeListReader::new(reader).collect()
}

pub fn read_edge_list_file(path: &Path) -> Result<Vec<Edge>> {
    info!("Reading edge list file: {}", path.display());
    let edges = read_edge_list(BufReader::new(File::open(path)?))?;
    info!("Finished reading {} edges", edges.len());
    Ok(edges)
}

/// Writes the edges verbatim (no sorting, no deduplication) and returns the
/// number of lines written.
pub fn edge_list_writer<W: Write>(
    mut writer: W,
    edges: impl Iterator<Item = Edge>,
) -> Result<usize> {
    let mut written = 0;
    for Edge(u, v) in edges {
        writeln!(writer, "{u} {v}")?;
        written += 1;
    }

    Ok(written)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_success() {
        const DEMO_FILE: &str = "0 1\n1 2\n\n  2 0 \n3\t3\n1 0\n";
        let edges = read_edge_list(DEMO_FILE.as_bytes()).unwrap();

        // duplicates (in either direction) and self loops are kept as given
        assert_eq!(
            edges,
            vec![Edge(0, 1), Edge(1, 2), Edge(2, 0), Edge(3, 3), Edge(1, 0)]
        );
    }

    #[test]
    fn empty_file() {
        assert!(read_edge_list("".as_bytes()).unwrap().is_empty());
        assert!(read_edge_list("\n\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn malformed_lines() {
        for data in ["0 1\n2\n", "0 1\n2 x\n", "0 1 2\n", "-1 2\n", "0.5 1\n"] {
            let err = read_edge_list(data.as_bytes()).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidData, "{data:?}");
        }
    }

    #[test]
    fn reader_continues_after_error() {
        let mut reader = EdgeListReader::new("0 1\nfoo\n2 3\n".as_bytes());
        assert_eq!(reader.next().unwrap().unwrap(), Edge(0, 1));
        assert!(reader.next().unwrap().is_err());
        assert_eq!(reader.next().unwrap().unwrap(), Edge(2, 3));
        assert!(reader.next().is_none());
    }

    #[test]
    fn transcribe() {
        let edges = vec![Edge(4, 1), Edge(0, 0), Edge(1, 4), Edge(2, 3)];
        let mut buffer: Vec<u8> = Vec::new();

        let written = edge_list_writer(&mut buffer, edges.iter().copied()).unwrap();
        assert_eq!(written, 4);
        assert_eq!(String::from_utf8(buffer.clone()).unwrap(), "4 1\n0 0\n1 4\n2 3\n");

        assert_eq!(read_edge_list(buffer.as_slice()).unwrap(), edges);
    }
}
