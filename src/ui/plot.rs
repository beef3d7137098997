use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::generate_palette;
use crate::data::group::{ColumnGroup, is_numeric_header};
use crate::data::table::{CellValue, GroupedTable};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Spectra plot (central panel)
// ---------------------------------------------------------------------------

/// Render every row of the x block as one line over the spectral axis.
pub fn spectral_plot(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Import a CSV file to view spectra  (File → Import CSV…)");
            });
            return;
        }
    };

    let series = row_series(table, &state.x_headers);
    let palette = generate_palette(series.len());

    Plot::new("spectra_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Wavelength")
        .y_axis_label("Value")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (i, (name, points)) in series.into_iter().enumerate() {
                let color = palette.get(i).copied().unwrap_or(Color32::LIGHT_BLUE);
                let points: PlotPoints = points.into();
                plot_ui.line(Line::new(points).name(&name).color(color).width(1.5));
            }
        });
}

/// Build one (label, points) series per row from the x block.
///
/// Wide tables pair each x column's parsed header with the row's cell;
/// consolidated tables pair the cached wide headers with the stored vector.
/// Headers that do not parse fall back to the column index so the plot
/// still renders.
fn row_series(table: &GroupedTable, x_headers: &[String]) -> Vec<(String, Vec<[f64; 2]>)> {
    let x_block = table.select_group(ColumnGroup::X);
    if x_block.n_cols() == 0 {
        return Vec::new();
    }

    let consolidated =
        x_block.n_cols() == 1 && !is_numeric_header(&x_block.columns[0].header);

    let wavelengths: Vec<f64> = if consolidated {
        x_headers
            .iter()
            .enumerate()
            .map(|(i, h)| h.trim().parse::<f64>().unwrap_or(i as f64))
            .collect()
    } else {
        x_block
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| c.header.trim().parse::<f64>().unwrap_or(i as f64))
            .collect()
    };

    let sid_block = table.select_group(ColumnGroup::Sid);

    (0..table.n_rows())
        .map(|row| {
            let values: Vec<f64> = if consolidated {
                match &x_block.columns[0].cells[row] {
                    CellValue::Vector(v) => v.clone(),
                    other => other.as_f64().map(|v| vec![v]).unwrap_or_default(),
                }
            } else {
                x_block
                    .columns
                    .iter()
                    .map(|c| c.cells[row].as_f64().unwrap_or(f64::NAN))
                    .collect()
            };

            let points: Vec<[f64; 2]> = wavelengths
                .iter()
                .zip(values.iter())
                .map(|(&x, &y)| [x, y])
                .collect();

            let name = sid_block
                .cell(row, 0)
                .map(|v| v.to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| format!("row {}", row + 1));

            (name, points)
        })
        .collect()
}
