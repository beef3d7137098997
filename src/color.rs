use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::group::ColumnGroup;

// ---------------------------------------------------------------------------
// Group colors
// ---------------------------------------------------------------------------

/// Pastel background color for a column group, used by the table view and
/// the legend.
pub fn group_color(group: ColumnGroup) -> Color32 {
    match group {
        ColumnGroup::Sid => Color32::from_rgb(255, 253, 208), // beige
        ColumnGroup::X => Color32::from_rgb(173, 216, 230),   // light blue
        ColumnGroup::Y => Color32::from_rgb(198, 239, 206),   // light green
        ColumnGroup::Cat => Color32::from_rgb(255, 218, 185), // light orange
        ColumnGroup::Unknown => Color32::from_rgb(211, 211, 211), // light grey
        ColumnGroup::Prd => Color32::from_rgb(221, 160, 221), // plum
        ColumnGroup::Md => Color32::from_rgb(240, 230, 140),  // khaki
        ColumnGroup::Time => Color32::from_rgb(255, 182, 193), // pink
    }
}

// ---------------------------------------------------------------------------
// Line palette for the spectra plot
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}
