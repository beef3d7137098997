/// UI layer: panels, the classified table grid, and the spectra plot.
pub mod panels;
pub mod plot;
pub mod table_view;
