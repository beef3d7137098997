use super::error::TableError;
use super::group::ColumnGroup;
use super::table::{CellValue, Column, GroupedTable};

// ---------------------------------------------------------------------------
// X-consolidation: many scalar wavelength columns → one vector column
// ---------------------------------------------------------------------------

/// Collapse all x columns into a single vector-valued x column.
///
/// The new column is headed `"{first}-{last}"` from the outermost x headers
/// and sits where the x block started; every row holds one vector with the
/// x cells in their original left-to-right order. Cells that have no
/// numeric reading become NaN. A table with no x columns comes back
/// unchanged.
pub fn consolidate_x(table: &GroupedTable) -> GroupedTable {
    let x_cols: Vec<&Column> = table
        .columns
        .iter()
        .filter(|c| c.group == ColumnGroup::X)
        .collect();

    let (Some(first), Some(last)) = (x_cols.first(), x_cols.last()) else {
        return table.clone();
    };
    let header = format!("{}-{}", first.header, last.header);

    let cells: Vec<CellValue> = (0..table.n_rows())
        .map(|row| {
            let vector: Vec<f64> = x_cols
                .iter()
                .map(|c| c.cells[row].as_f64().unwrap_or(f64::NAN))
                .collect();
            CellValue::Vector(vector)
        })
        .collect();

    let consolidated = Column {
        group: ColumnGroup::X,
        header,
        cells,
    };

    // Rebuild: the consolidated column takes the first x position, the
    // remaining x columns vanish, everything else keeps its place.
    let mut columns = Vec::with_capacity(table.n_cols() - x_cols.len() + 1);
    let mut consolidated = Some(consolidated);
    for col in &table.columns {
        if col.group == ColumnGroup::X {
            if let Some(new_col) = consolidated.take() {
                columns.push(new_col);
            }
        } else {
            columns.push(col.clone());
        }
    }

    GroupedTable::new(columns, table.n_rows())
}

// ---------------------------------------------------------------------------
// X-expansion: one vector column → many scalar wavelength columns
// ---------------------------------------------------------------------------

/// Expand the single vector-valued x column back into one scalar column per
/// entry of `original_headers`.
///
/// A table with no x column comes back unchanged, mirroring
/// [`consolidate_x`]. More than one x column is ambiguous and fails with
/// [`TableError::MultipleXColumns`]. Every row's vector length must equal
/// `original_headers.len()`, otherwise the call fails with
/// [`TableError::DimensionMismatch`] before anything is built, leaving the
/// input untouched.
///
/// The result orders columns by group in first-seen order, with the x group
/// replaced in place by `original_headers`; duplicate (group, header) pairs
/// keep their first occurrence only.
pub fn expand_x(
    table: &GroupedTable,
    original_headers: &[String],
) -> Result<GroupedTable, TableError> {
    let x_count = table
        .columns
        .iter()
        .filter(|c| c.group == ColumnGroup::X)
        .count();
    if x_count > 1 {
        return Err(TableError::MultipleXColumns(x_count));
    }
    let Some(x_col) = table.columns.iter().find(|c| c.group == ColumnGroup::X) else {
        return Ok(table.clone());
    };

    // Validate every row before assembling anything.
    let rows: Vec<Vec<f64>> = x_col
        .cells
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            let vector = match cell {
                CellValue::Vector(v) => v.clone(),
                CellValue::Number(v) => vec![*v],
                _ => Vec::new(),
            };
            if vector.len() != original_headers.len() {
                return Err(TableError::DimensionMismatch {
                    row,
                    expected: original_headers.len(),
                    found: vector.len(),
                });
            }
            Ok(vector)
        })
        .collect::<Result<_, _>>()?;

    let expanded: Vec<Column> = original_headers
        .iter()
        .enumerate()
        .map(|(i, header)| Column {
            group: ColumnGroup::X,
            header: header.clone(),
            cells: rows.iter().map(|v| CellValue::Number(v[i])).collect(),
        })
        .collect();

    // Groups in first-seen order, the x group swapped for the expanded
    // columns, duplicate (group, header) pairs collapsed to first occurrence.
    let mut group_order: Vec<ColumnGroup> = Vec::new();
    for col in &table.columns {
        if !group_order.contains(&col.group) {
            group_order.push(col.group);
        }
    }

    let mut columns: Vec<Column> = Vec::new();
    let mut seen: Vec<(ColumnGroup, String)> = Vec::new();
    let mut push_unique = |columns: &mut Vec<Column>, col: Column| {
        let key = (col.group, col.header.clone());
        if !seen.contains(&key) {
            seen.push(key);
            columns.push(col);
        }
    };

    for group in group_order {
        if group == ColumnGroup::X {
            for col in &expanded {
                push_unique(&mut columns, col.clone());
            }
        } else {
            for col in table.columns.iter().filter(|c| c.group == group) {
                push_unique(&mut columns, col.clone());
            }
        }
    }

    Ok(GroupedTable::new(columns, table.n_rows()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
