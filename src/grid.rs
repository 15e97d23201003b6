//! Row-aligned spreadsheet grids.

use serde::{Deserialize, Serialize};

/// One rectangular slice of spreadsheet data: rows of string cells.
///
/// Rows may be shorter than the widest row; a missing trailing cell reads
/// as the empty string. Three grids (subjects, dates, times) are aligned
/// by row index, so row `i` of each refers to the same source row even
/// when their lengths differ.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid(pub Vec<Vec<String>>);

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Grid(rows)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cell at (row, col), or `""` when the row is absent or too short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.0
            .get(row)
            .and_then(|r| r.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Row as a slice, empty when absent.
    pub fn row(&self, row: usize) -> &[String] {
        self.0.get(row).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl From<Vec<Vec<String>>> for Grid {
    fn from(rows: Vec<Vec<String>>) -> Self {
        Grid(rows)
    }
}

impl From<Vec<Vec<&str>>> for Grid {
    fn from(rows: Vec<Vec<&str>>) -> Self {
        Grid(
            rows.into_iter()
                .map(|row| row.into_iter().map(str::to_string).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cells_read_as_empty() {
        let grid = Grid::from(vec![vec!["a"], vec![]]);

        assert_eq!(grid.cell(0, 0), "a");
        assert_eq!(grid.cell(0, 1), "", "short row pads with empty cells");
        assert_eq!(grid.cell(1, 0), "", "empty row");
        assert_eq!(grid.cell(5, 0), "", "row beyond the grid");
    }

    #[test]
    fn test_deserializes_from_sheet_values() {
        let json = r#"[["Пн", "13 жовтня 2025 р."], ["", ""]]"#;
        let grid: Grid = serde_json::from_str(json).unwrap();

        assert_eq!(grid.len(), 2);
        assert_eq!(grid.cell(0, 1), "13 жовтня 2025 р.");
    }
}
