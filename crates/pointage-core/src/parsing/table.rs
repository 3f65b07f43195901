use crate::extraction::RawTable;

/// Minimum number of columns every normalized table carries.
pub const DEFAULT_MIN_COLUMNS: usize = 6;

/// A table padded to a fixed minimum width, with columns labelled `Col1..ColN`.
///
/// Every row has exactly `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedTable {
    rows: Vec<Vec<Option<String>>>,
    width: usize,
}

impl NormalizedTable {
    /// Build a table from rows, padding every row to `max(widest row, min_columns)`.
    pub fn from_rows(rows: Vec<Vec<Option<String>>>, min_columns: usize) -> Self {
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(min_columns);
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        NormalizedTable { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    /// Column labels, `Col1` through `ColN`.
    pub fn column_names(&self) -> Vec<String> {
        (1..=self.width).map(|i| format!("Col{i}")).collect()
    }

    /// Cell at `row` and 1-based `column`; absent when out of range or empty.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        if column == 0 {
            return None;
        }
        self.rows
            .get(row)
            .and_then(|r| r.get(column - 1))
            .and_then(|c| c.as_deref())
    }

    /// Stack tables row-wise in order; the result is as wide as the widest input.
    pub fn concat(tables: &[NormalizedTable]) -> NormalizedTable {
        let rows: Vec<Vec<Option<String>>> = tables
            .iter()
            .flat_map(|t| t.rows.iter().cloned())
            .collect();
        NormalizedTable::from_rows(rows, 0)
    }
}

/// Reshape a raw grid into a table with at least `min_columns` columns.
///
/// Returns `None` for a table without rows. Wider tables keep their extra
/// columns; row order and count are unchanged.
pub fn normalize(raw: &RawTable, min_columns: usize) -> Option<NormalizedTable> {
    if raw.is_empty() {
        return None;
    }
    Some(NormalizedTable::from_rows(raw.rows.clone(), min_columns))
}
