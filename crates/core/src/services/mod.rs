pub mod aggregation_service;
pub mod calendar_service;
pub mod entry_service;
