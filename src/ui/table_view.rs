use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::color::group_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Classified table grid (central panel)
// ---------------------------------------------------------------------------

/// Render the classified table: headers and cells carry their group's
/// pastel background, rows are numbered from 1.
pub fn table_grid(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Import a CSV file to view it  (File → Import CSV…)");
            });
            return;
        }
    };

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(false)
            .column(TableColumn::auto())
            .columns(TableColumn::auto().resizable(true), table.n_cols())
            .header(22.0, |mut header| {
                // Row-number corner cell.
                header.col(|_ui| {});
                for col in &table.columns {
                    let fill = group_color(col.group);
                    header.col(|ui| {
                        paint_cell_background(ui, fill);
                        ui.label(RichText::new(&col.header).strong().color(Color32::BLACK));
                    });
                }
            })
            .body(|body| {
                body.rows(18.0, table.n_rows(), |mut row| {
                    let row_idx = row.index();
                    row.col(|ui| {
                        ui.label(format!("{}", row_idx + 1));
                    });
                    for col in &table.columns {
                        let fill = group_color(col.group);
                        row.col(|ui| {
                            paint_cell_background(ui, fill);
                            let text = col.cells[row_idx].to_string();
                            ui.label(RichText::new(text).color(Color32::BLACK));
                        });
                    }
                });
            });
    });
}

fn paint_cell_background(ui: &mut Ui, fill: Color32) {
    ui.painter()
        .rect_filled(ui.available_rect_before_wrap(), 0, fill);
}
