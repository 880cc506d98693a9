//! Adjacency matrix reader.

use std::path::Path;

use tracing::debug;

use super::graph::Network;
use super::types::VertexId;
use crate::error::{QGraphError, Result};

/// A matrix row together with its 1-indexed line number in the source.
struct Row<'a> {
    line: usize,
    text: &'a str,
}

/// Check if a line carries no matrix data.
fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Iterate over the matrix rows of `input`, skipping blanks and comments.
fn rows(input: &str) -> impl Iterator<Item = Row<'_>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, text)| !is_blank_or_comment(text))
        .map(|(idx, text)| Row {
            line: idx + 1,
            text,
        })
}

/// Split a row into tokens with their 1-indexed starting columns.
fn tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    // (char column, (byte offset, char))
    let mut rest = text.char_indices().enumerate().peekable();
    std::iter::from_fn(move || {
        while rest.next_if(|(_, (_, c))| c.is_whitespace()).is_some() {}
        let (column, (start, _)) = *rest.peek()?;
        let mut end = text.len();
        for (_, (pos, c)) in rest.by_ref() {
            if c.is_whitespace() {
                end = pos;
                break;
            }
        }
        Some((column + 1, &text[start..end]))
    })
}

/// Parse an adjacency matrix into a network.
///
/// The first pass counts the rows so that every vertex exists before the
/// first edge is added; the second pass walks the entries row-major and
/// adds one segment per `1`.
pub fn parse_adjacency(input: &str) -> Result<Network> {
    let num_vertices = rows(input).count();
    let mut network = Network::with_vertices(num_vertices);

    for (from, row) in rows(input).enumerate() {
        let mut width = 0usize;
        for (to, (column, token)) in tokens(row.text).enumerate() {
            if to >= num_vertices {
                return Err(QGraphError::format(
                    row.line,
                    column,
                    format!("row has more than {} entries", num_vertices),
                ));
            }
            let value = token.parse::<i64>().map_err(|_| {
                QGraphError::format(row.line, column, format!("'{}' is not an integer", token))
            })?;
            match value {
                1 => {
                    network.add_edge(VertexId(from), VertexId(to));
                }
                0 => {}
                _ => {
                    return Err(QGraphError::format(
                        row.line,
                        column,
                        format!("expected '0' or '1', found '{}'", token),
                    ));
                }
            }
            width = to + 1;
        }

        if width < num_vertices {
            return Err(QGraphError::format(
                row.line,
                row.text.chars().count() + 1,
                format!("row has {} entries, expected {}", width, num_vertices),
            ));
        }
    }

    debug!(
        vertices = network.num_vertices(),
        edges = network.num_edges(),
        "Parsed adjacency matrix"
    );

    Ok(network)
}

/// Read and parse an adjacency matrix file.
pub fn load_adjacency(path: &Path) -> Result<Network> {
    let content = std::fs::read_to_string(path).map_err(|e| QGraphError::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_adjacency(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::EigenfunctionId;

    #[test]
    fn test_parse_single_edge() {
        let net = parse_adjacency("0 1\n0 0\n").unwrap();
        assert_eq!(net.num_vertices(), 2);
        assert_eq!(net.num_edges(), 1);
        let edge = net.edge(EigenfunctionId(1)).unwrap();
        assert_eq!(edge.source, VertexId(0));
        assert_eq!(edge.target, VertexId(1));
    }

    #[test]
    fn test_ids_follow_row_major_order() {
        let input = "0 0 1 1\n0 0 0 0\n0 1 0 0\n0 0 0 0";
        let net = parse_adjacency(input).unwrap();
        let pairs: Vec<(usize, usize)> = net
            .edges()
            .iter()
            .map(|e| (e.source.0, e.target.0))
            .collect();
        assert_eq!(pairs, vec![(0, 2), (0, 3), (2, 1)]);
        for (idx, edge) in net.edges().iter().enumerate() {
            assert_eq!(edge.id, EigenfunctionId(idx + 1));
        }
    }

    #[test]
    fn test_empty_input() {
        let net = parse_adjacency("").unwrap();
        assert!(net.is_empty());
        assert_eq!(net.num_edges(), 0);
    }

    #[test]
    fn test_blank_and_comment_lines_ignored() {
        let input = "# chain\n\n0 1\n   \n0 0\n";
        let net = parse_adjacency(input).unwrap();
        assert_eq!(net.num_vertices(), 2);
        assert_eq!(net.num_edges(), 1);
    }

    #[test]
    fn test_irregular_whitespace() {
        let net = parse_adjacency("  0\t1  \n0   0").unwrap();
        assert_eq!(net.num_edges(), 1);
    }

    #[test]
    fn test_invalid_token() {
        let err = parse_adjacency("0 1\n0 2\n").unwrap_err();
        match err {
            QGraphError::Format { line, column, .. } => {
                assert_eq!(line, 2);
                assert_eq!(column, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tokens_parsed_as_integers() {
        let net = parse_adjacency("00 01\n-0 +0\n").unwrap();
        assert_eq!(net.num_vertices(), 2);
        assert_eq!(net.num_edges(), 1);
        let edge = net.edge(EigenfunctionId(1)).unwrap();
        assert_eq!((edge.source, edge.target), (VertexId(0), VertexId(1)));
    }

    #[test]
    fn test_non_integer_token() {
        let err = parse_adjacency("0 1\n0 x\n").unwrap_err();
        assert!(matches!(err, QGraphError::Format { line: 2, column: 3, .. }));
        let err = parse_adjacency("0 1\n0 -1\n").unwrap_err();
        assert!(matches!(err, QGraphError::Format { line: 2, column: 3, .. }));
    }

    #[test]
    fn test_wide_chain() {
        // One edge per row, i -> i + 1
        let size = 2000;
        let input: String = (0..size)
            .map(|i| {
                let mut row = vec!["0"; size];
                if i + 1 < size {
                    row[i + 1] = "1";
                }
                row.join(" ") + "\n"
            })
            .collect();
        let start = std::time::Instant::now();
        let net = parse_adjacency(&input).unwrap();
        assert_eq!(net.num_vertices(), size);
        assert_eq!(net.num_edges(), size - 1);
        assert!(
            start.elapsed() < std::time::Duration::from_secs(5),
            "parsing took {:?}",
            start.elapsed()
        );
    }

    #[test]
    fn test_short_row_rejected() {
        let err = parse_adjacency("0 1 0\n0 0\n0 0 0\n").unwrap_err();
        assert!(matches!(err, QGraphError::Format { line: 2, .. }));
    }

    #[test]
    fn test_long_row_rejected() {
        let err = parse_adjacency("0 1 0\n0 0\n").unwrap_err();
        assert!(matches!(err, QGraphError::Format { line: 1, column: 5, .. }));
    }

    #[test]
    fn test_tokens_columns() {
        let found: Vec<(usize, &str)> = tokens(" 0  1 0").collect();
        assert_eq!(found, vec![(2, "0"), (5, "1"), (7, "0")]);
        let wide: Vec<(usize, &str)> = tokens("λ 1\t0").collect();
        assert_eq!(wide, vec![(1, "λ"), (3, "1"), (5, "0")]);
    }
}
