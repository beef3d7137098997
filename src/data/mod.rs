/// Data layer: column classification, the grouped table, and the
/// wide ⇄ consolidated x transforms.
///
/// Architecture:
/// ```text
///        .csv
///          │
///          ▼
///   ┌─────────────┐
///   │ csv_import   │  read file, classify headers → GroupedTable
///   └─────────────┘
///          │            uses
///          │      ┌──────────────┐
///          ├─────▶│    group      │  header → ColumnGroup rules
///          ▼      └──────────────┘
///   ┌─────────────┐
///   │ GroupedTable │  ordered (group, header) columns + queries
///   └─────────────┘
///          │
///          ▼
///   ┌─────────────┐
///   │  transform   │  consolidate_x ⇄ expand_x
///   └─────────────┘
/// ```

pub mod csv_import;
pub mod error;
pub mod group;
pub mod table;
pub mod transform;
