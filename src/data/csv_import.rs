use std::path::Path;

use super::error::TableError;
use super::group::assign_groups;
use super::table::{CellValue, Column, GroupedTable};

// ---------------------------------------------------------------------------
// CSV importer
// ---------------------------------------------------------------------------

/// Read a delimited text file into a [`GroupedTable`].
///
/// The header row is classified once via [`assign_groups`] and each tag is
/// attached to its column. Headers and text cells are kept verbatim,
/// numeric-looking cells become numbers, blank fields stay empty. Record
/// lengths are strict, so a ragged file fails as [`TableError::FileRead`]
/// instead of importing half a table.
pub fn import_table(path: &Path) -> Result<GroupedTable, TableError> {
    let file_read = |source: csv::Error| TableError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::Reader::from_path(path).map_err(file_read)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(file_read)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let groups = assign_groups(&headers);
    let mut columns: Vec<Column> = headers
        .into_iter()
        .zip(groups)
        .map(|(header, group)| Column {
            group,
            header,
            cells: Vec::new(),
        })
        .collect();

    let mut n_rows = 0;
    for result in reader.records() {
        let record = result.map_err(file_read)?;
        for (i, col) in columns.iter_mut().enumerate() {
            col.cells.push(parse_cell(record.get(i).unwrap_or("")));
        }
        n_rows += 1;
    }

    Ok(GroupedTable::new(columns, n_rows))
}

fn parse_cell(raw: &str) -> CellValue {
    if raw.is_empty() {
        return CellValue::Empty;
    }
    if let Ok(v) = raw.trim().parse::<f64>() {
        return CellValue::Number(v);
    }
    CellValue::Text(raw.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::data::group::ColumnGroup;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn imports_a_classified_table() {
        let file = write_csv(
            "Sample,1200,1201,Protein(LAB),StartTime\n\
             A,0.12,0.15,11.2,2024-03-01\n\
             B,0.21,0.25,,2024-03-02\n",
        );

        let table = import_table(file.path()).unwrap();
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.n_cols(), 5);

        let groups: Vec<ColumnGroup> = table.columns.iter().map(|c| c.group).collect();
        assert_eq!(
            groups,
            vec![
                ColumnGroup::Sid,
                ColumnGroup::X,
                ColumnGroup::X,
                ColumnGroup::Y,
                ColumnGroup::Time,
            ]
        );

        assert_eq!(table.cell(0, 0), Some(&CellValue::Text("A".into())));
        assert_eq!(table.cell(1, 1), Some(&CellValue::Number(0.21)));
        assert_eq!(table.cell(1, 3), Some(&CellValue::Empty));
        assert_eq!(
            table.cell(0, 4),
            Some(&CellValue::Text("2024-03-01".into()))
        );
    }

    #[test]
    fn header_only_file_imports_with_zero_rows() {
        let file = write_csv("Sample,1200,1201\n");
        let table = import_table(file.path()).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_cols(), 3);
    }

    #[test]
    fn missing_file_fails_with_file_read() {
        let err = import_table(Path::new("no/such/file.csv")).unwrap_err();
        assert!(matches!(err, TableError::FileRead { .. }));
    }

    #[test]
    fn ragged_rows_fail_with_file_read() {
        let file = write_csv("Sample,1200,1201\nA,0.12\n");
        let err = import_table(file.path()).unwrap_err();
        assert!(matches!(err, TableError::FileRead { .. }));
    }
}
