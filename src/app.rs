use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot, table_view};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SpectraWorkshopApp {
    pub state: AppState,
}

impl eframe::App for SpectraWorkshopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: group legend ----
        egui::SidePanel::left("group_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table grid or spectra plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.show_plot {
                plot::spectral_plot(ui, &self.state);
            } else {
                table_view::table_grid(ui, &self.state);
            }
        });
    }
}
