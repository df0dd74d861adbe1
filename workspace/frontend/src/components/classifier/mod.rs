mod chart;
mod form;
mod result;
mod view;

pub use chart::HistoryChart;
pub use form::MeasurementForm;
pub use result::ResultPanel;
pub use view::IrisClassifier;
