use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::group_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – column group legend
// ---------------------------------------------------------------------------

/// Render the left legend panel: one entry per group present in the table,
/// with its color, column count, and a collapsible list of headers.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Column groups");
    ui.separator();

    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.label("No table loaded.");
            return;
        }
    };

    let membership = table.group_membership();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for (group, headers) in &membership {
                let color = group_color(*group);
                let header_text = format!("{group}  ({} columns)", headers.len());

                egui::CollapsingHeader::new(
                    RichText::new(header_text).strong().color(color),
                )
                .id_salt(group.as_str())
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    for header in headers {
                        ui.label(header);
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Import CSV…").clicked() {
                import_csv_dialog(state);
                ui.close_menu();
            }
            if ui.button("Export CSV…").clicked() {
                // Same stub the original ships: the writer does not exist yet.
                state.status_message = Some("CSV export is not implemented yet".to_string());
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Quit").clicked() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            let name = state.source_name.as_deref().unwrap_or("table");
            ui.label(format!(
                "{name}: {} rows × {} columns",
                table.n_rows(),
                table.n_cols()
            ));

            ui.separator();

            if ui
                .selectable_label(state.consolidated, "Consolidated x")
                .clicked()
            {
                state.toggle_consolidated();
            }

            if ui.selectable_label(state.show_plot, "Plot").clicked() {
                state.show_plot = !state.show_plot;
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn import_csv_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Import CSV file")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::csv_import::import_table(&path) {
            Ok(table) => {
                log::info!(
                    "Imported {} rows × {} columns from {}",
                    table.n_rows(),
                    table.n_cols(),
                    path.display()
                );
                for (group, headers) in table.group_membership() {
                    log::info!("  {group}: {} columns", headers.len());
                }

                let name = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                state.set_table(table, name);
            }
            Err(e) => {
                log::error!("Failed to import CSV: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
