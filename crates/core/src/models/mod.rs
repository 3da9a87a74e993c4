pub mod analytics;
pub mod calendar;
pub mod chart;
pub mod entry;
pub mod settings;
