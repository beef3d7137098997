use crate::data::error::TableError;
use crate::data::group::ColumnGroup;
use crate::data::table::GroupedTable;
use crate::data::transform::{consolidate_x, expand_x};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until the user imports a file).
    pub table: Option<GroupedTable>,

    /// Stem of the imported file, shown as the window's data title.
    pub source_name: Option<String>,

    /// Wide-form x headers captured at import time. Needed to expand a
    /// consolidated table and to label the plot's wavelength axis.
    pub x_headers: Vec<String>,

    /// Whether the x block is currently shown as one vector column.
    pub consolidated: bool,

    /// Central view: spectra plot instead of the table grid.
    pub show_plot: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            source_name: None,
            x_headers: Vec::new(),
            consolidated: false,
            show_plot: false,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a freshly imported table and remember its wide x headers.
    pub fn set_table(&mut self, table: GroupedTable, source_name: String) {
        self.x_headers = table
            .group_membership()
            .remove(&ColumnGroup::X)
            .unwrap_or_default();
        self.consolidated = false;
        self.source_name = Some(source_name);
        self.status_message = None;
        self.table = Some(table);
    }

    /// Switch between the wide and the consolidated x representation.
    /// Transform failures land in the status line, the table stays as-is.
    pub fn toggle_consolidated(&mut self) {
        let Some(table) = &self.table else {
            return;
        };

        if self.consolidated {
            match expand_x(table, &self.x_headers) {
                Ok(expanded) => {
                    self.table = Some(expanded);
                    self.consolidated = false;
                }
                Err(e) => self.report_error("expand x", &e),
            }
        } else {
            self.table = Some(consolidate_x(table));
            self.consolidated = true;
        }
    }

    fn report_error(&mut self, what: &str, e: &TableError) {
        log::error!("Failed to {what}: {e}");
        self.status_message = Some(format!("Error: {e}"));
    }
}
