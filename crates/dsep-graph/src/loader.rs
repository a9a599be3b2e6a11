//! Loading adjacency matrices from whitespace-delimited text.
//!
//! The expected layout is a header line of node labels followed by one line
//! per node, each starting with that node's label:
//!
//! ```text
//!    A B C
//! A  0 1 0
//! B  0 0 1
//! C  0 0 0
//! ```
//!
//! How many header lines and label columns to skip is controlled by
//! [`LoaderConfig`]. Entries may be written as integers or floats, but must
//! equal 0 or 1.
//!
//! Text from a `#` to the end of its line is a comment. Lines left blank
//! after removing comments are ignored and do not count as header lines.
//! Errors report positions as 1-based lines of the original text.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::matrix::AdjacencyMatrix;

/// Layout of a matrix file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Non-blank, non-comment lines skipped before the first data row.
    pub header_rows: usize,
    /// Leading fields skipped on every data row.
    pub label_columns: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            header_rows: 1,
            label_columns: 1,
        }
    }
}

impl LoaderConfig {
    /// A layout with no header line and no label column.
    pub fn bare() -> Self {
        Self {
            header_rows: 0,
            label_columns: 0,
        }
    }
}

impl AdjacencyMatrix {
    /// Parse a matrix from text laid out as described by `config`.
    pub fn parse_str(text: &str, config: &LoaderConfig) -> GraphResult<Self> {
        let data_lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, strip_comment(line)))
            .filter(|(_, line)| !line.trim().is_empty())
            .skip(config.header_rows);

        let mut rows = Vec::new();
        for (line_no, line) in data_lines {
            let entries = line
                .split_whitespace()
                .skip(config.label_columns)
                .enumerate()
                .map(|(column, token)| parse_entry(line_no, column, token))
                .collect::<GraphResult<Vec<bool>>>()?;
            rows.push((line_no, entries));
        }

        let expected = rows.len();
        if let Some((line, entries)) = rows.iter().find(|(_, e)| e.len() != expected) {
            return Err(GraphError::RaggedLine {
                line: *line,
                found: entries.len(),
                expected,
            });
        }

        Self::from_rows(rows.into_iter().map(|(_, entries)| entries).collect())
    }

    /// Read and parse a matrix file.
    pub fn load(path: impl AsRef<Path>, config: &LoaderConfig) -> GraphResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let matrix = Self::parse_str(&text, config)?;
        debug!(
            path = %path.display(),
            nodes = matrix.len(),
            edges = matrix.edge_count(),
            "loaded adjacency matrix"
        );
        Ok(matrix)
    }
}

fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |at| &line[..at])
}

fn parse_entry(line: usize, column: usize, token: &str) -> GraphResult<bool> {
    let invalid = || GraphError::InvalidEntry {
        line,
        column,
        value: token.to_string(),
    };
    let value: f64 = token.parse().map_err(|_| invalid())?;
    if value == 0.0 {
        Ok(false)
    } else if value == 1.0 {
        Ok(true)
    } else {
        Err(invalid())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeIndex;
    use std::io::Write;

    const LABELLED: &str = "\
   A B C
A  0 1 0
B  0 0 1
C  0 0 0
";

    #[test]
    fn default_config_skips_header_and_labels() {
        let c = LoaderConfig::default();
        assert_eq!(c.header_rows, 1);
        assert_eq!(c.label_columns, 1);
    }

    #[test]
    fn parse_labelled_matrix() {
        let m = AdjacencyMatrix::parse_str(LABELLED, &LoaderConfig::default()).unwrap();
        assert_eq!(m.len(), 3);
        assert_eq!(m.edge_count(), 2);
        assert!(m.has_edge(NodeIndex::new(0), NodeIndex::new(1)).unwrap());
        assert!(m.has_edge(NodeIndex::new(1), NodeIndex::new(2)).unwrap());
    }

    #[test]
    fn parse_bare_matrix_with_float_entries() {
        let text = "0.0 1.0\n0.0 0.0\n";
        let m = AdjacencyMatrix::parse_str(text, &LoaderConfig::bare()).unwrap();
        assert_eq!(m.len(), 2);
        assert!(m.has_edge(NodeIndex::new(0), NodeIndex::new(1)).unwrap());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "\n0 1\n\n0 0\n\n";
        let m = AdjacencyMatrix::parse_str(text, &LoaderConfig::bare()).unwrap();
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn non_binary_entry_is_rejected() {
        let text = "0 2\n0 0\n";
        let err = AdjacencyMatrix::parse_str(text, &LoaderConfig::bare()).unwrap_err();
        match err {
            GraphError::InvalidEntry { line, column, value } => {
                assert_eq!((line, column), (1, 1));
                assert_eq!(value, "2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_entry_is_rejected() {
        let text = "0 x\n0 0\n";
        assert!(matches!(
            AdjacencyMatrix::parse_str(text, &LoaderConfig::bare()),
            Err(GraphError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn non_square_is_rejected() {
        let text = "0 1 0\n0 0 1\n";
        assert!(matches!(
            AdjacencyMatrix::parse_str(text, &LoaderConfig::bare()),
            Err(GraphError::RaggedLine { line: 1, found: 3, expected: 2 })
        ));
    }

    #[test]
    fn comment_lines_are_ignored() {
        let text = "  A B\n# note\nA 0 1\nB 0 0\n";
        let m = AdjacencyMatrix::parse_str(text, &LoaderConfig::default()).unwrap();
        assert_eq!(m.len(), 2);
        assert!(m.has_edge(NodeIndex::new(0), NodeIndex::new(1)).unwrap());
    }

    #[test]
    fn leading_comment_is_not_a_header() {
        let text = "# generated\n  A B\nA 0 0 # no edges from A\nB 1 0\n";
        let m = AdjacencyMatrix::parse_str(text, &LoaderConfig::default()).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.edge_count(), 1);
        assert!(m.has_edge(NodeIndex::new(1), NodeIndex::new(0)).unwrap());
    }

    #[test]
    fn errors_report_file_lines() {
        let text = "  A B\n\n# note\nA 0 1\nB 0 7\n";
        let err = AdjacencyMatrix::parse_str(text, &LoaderConfig::default()).unwrap_err();
        assert!(matches!(err, GraphError::InvalidEntry { line: 5, column: 1, .. }));
        assert_eq!(
            err.to_string(),
            "invalid entry \"7\" at line 5, data column 1: expected 0 or 1"
        );

        let text = "  A B\n# note\nA 0 1 0\nB 0 0\n";
        let err = AdjacencyMatrix::parse_str(text, &LoaderConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            GraphError::RaggedLine { line: 3, found: 3, expected: 2 }
        ));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(matches!(
            AdjacencyMatrix::parse_str("  A B\n", &LoaderConfig::default()),
            Err(GraphError::Empty)
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LABELLED.as_bytes()).unwrap();
        let m = AdjacencyMatrix::load(file.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(m.len(), 3);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AdjacencyMatrix::load(dir.path().join("missing.txt"), &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }

    #[test]
    fn config_fields_default_when_absent() {
        let c: LoaderConfig = serde_json::from_str(r#"{"label_columns": 0}"#).unwrap();
        assert_eq!(c.header_rows, 1);
        assert_eq!(c.label_columns, 0);
    }
}
