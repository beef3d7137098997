use std::collections::BTreeMap;
use std::fmt;

use super::error::TableError;
use super::group::ColumnGroup;

// ---------------------------------------------------------------------------
// CellValue – a single cell
// ---------------------------------------------------------------------------

/// One cell of the table. Scalar cells come straight out of the CSV;
/// vector cells only appear after x-consolidation.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    /// Fixed-length spectral vector (one value per original x column).
    Vector(Vec<f64>),
    /// Blank field in the source file.
    Empty,
}

impl CellValue {
    /// Numeric view of the cell, for plotting and consolidation.
    /// Text is accepted when it parses as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            CellValue::Text(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    /// Rendering used by the table view: floats with six decimals, vectors
    /// truncated to their first element plus a count of what is hidden.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v:.6}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Vector(v) => match v.split_first() {
                Some((first, [])) => write!(f, "{first:.6}"),
                Some((first, rest)) => write!(f, "{first:.6} … (+{})", rest.len()),
                None => write!(f, "[]"),
            },
            CellValue::Empty => Ok(()),
        }
    }
}

// ---------------------------------------------------------------------------
// Column / GroupedTable
// ---------------------------------------------------------------------------

/// One column: its group tag, verbatim header, and cells in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub group: ColumnGroup,
    pub header: String,
    pub cells: Vec<CellValue>,
}

/// A column-ordered, group-tagged table.
///
/// Column identity is the (group, header) pair; duplicate headers within a
/// group are kept positionally, never merged. Transforms return new tables,
/// the source table is never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedTable {
    pub columns: Vec<Column>,
    n_rows: usize,
}

impl GroupedTable {
    /// Assemble a table from columns. Every column must carry `n_rows`
    /// cells; the importer and the transforms uphold this.
    pub fn new(columns: Vec<Column>, n_rows: usize) -> Self {
        debug_assert!(columns.iter().all(|c| c.cells.len() == n_rows));
        GroupedTable { columns, n_rows }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Cell lookup by row/column index.
    pub fn cell(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.columns.get(col).and_then(|c| c.cells.get(row))
    }

    /// Columns tagged with `group`, row order and row count unchanged.
    /// A valid group with no matching columns yields an empty sub-table.
    pub fn select_group(&self, group: ColumnGroup) -> GroupedTable {
        let columns: Vec<Column> = self
            .columns
            .iter()
            .filter(|c| c.group == group)
            .cloned()
            .collect();
        GroupedTable::new(columns, self.n_rows)
    }

    /// Name-based variant of [`select_group`] for callers holding the group
    /// as text; rejects names outside the fixed set.
    pub fn columns_in_group(&self, group: &str) -> Result<GroupedTable, TableError> {
        let group: ColumnGroup = group.parse()?;
        Ok(self.select_group(group))
    }

    /// Which headers belong to which group, reading the tags attached at
    /// import time. Groups with no columns are omitted; `BTreeMap` keeps
    /// the iteration order stable.
    pub fn group_membership(&self) -> BTreeMap<ColumnGroup, Vec<String>> {
        let mut membership: BTreeMap<ColumnGroup, Vec<String>> = BTreeMap::new();
        for col in &self.columns {
            membership
                .entry(col.group)
                .or_default()
                .push(col.header.clone());
        }
        membership
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn column(group: ColumnGroup, header: &str, cells: Vec<CellValue>) -> Column {
        Column {
            group,
            header: header.to_string(),
            cells,
        }
    }

    fn sample_table() -> GroupedTable {
        GroupedTable::new(
            vec![
                column(
                    ColumnGroup::Sid,
                    "Sample",
                    vec![
                        CellValue::Text("A".into()),
                        CellValue::Text("B".into()),
                    ],
                ),
                column(
                    ColumnGroup::X,
                    "1200",
                    vec![CellValue::Number(0.12), CellValue::Number(0.21)],
                ),
                column(
                    ColumnGroup::X,
                    "1201",
                    vec![CellValue::Number(0.15), CellValue::Number(0.25)],
                ),
                column(
                    ColumnGroup::Y,
                    "Protein(LAB)",
                    vec![CellValue::Number(11.2), CellValue::Empty],
                ),
            ],
            2,
        )
    }

    #[test]
    fn select_group_keeps_order_and_row_count() {
        let sub = sample_table().select_group(ColumnGroup::X);
        assert_eq!(sub.n_rows(), 2);
        let headers: Vec<&str> = sub.columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, vec!["1200", "1201"]);
    }

    #[test]
    fn valid_group_with_no_columns_is_empty_not_an_error() {
        let sub = sample_table().columns_in_group("time").unwrap();
        assert_eq!(sub.n_cols(), 0);
        assert_eq!(sub.n_rows(), 2);
    }

    #[test]
    fn unknown_group_name_is_rejected() {
        let err = sample_table().columns_in_group("wavelength").unwrap_err();
        assert!(matches!(err, TableError::UnknownGroup(name) if name == "wavelength"));
    }

    #[test]
    fn membership_covers_present_groups_only() {
        let membership = sample_table().group_membership();
        assert_eq!(membership.len(), 3);
        assert_eq!(membership[&ColumnGroup::X], vec!["1200", "1201"]);
        assert_eq!(membership[&ColumnGroup::Sid], vec!["Sample"]);
        assert!(!membership.contains_key(&ColumnGroup::Cat));
    }

    #[test]
    fn cell_lookup_by_index() {
        let table = sample_table();
        assert_eq!(table.cell(1, 1), Some(&CellValue::Number(0.21)));
        assert_eq!(table.cell(2, 0), None);
        assert_eq!(table.cell(0, 9), None);
    }

    #[test]
    fn display_truncates_vectors() {
        assert_eq!(CellValue::Number(0.12).to_string(), "0.120000");
        assert_eq!(
            CellValue::Vector(vec![0.12, 0.15, 0.09]).to_string(),
            "0.120000 … (+2)"
        );
        assert_eq!(CellValue::Vector(vec![0.5]).to_string(), "0.500000");
        assert_eq!(CellValue::Vector(vec![]).to_string(), "[]");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn text_cells_coerce_to_f64_when_numeric() {
        assert_eq!(CellValue::Text(" 3.5 ".into()).as_f64(), Some(3.5));
        assert_eq!(CellValue::Text("n/a".into()).as_f64(), None);
        assert_eq!(CellValue::Empty.as_f64(), None);
    }
}
