pub mod chart;
pub mod dataset;
pub mod export;
pub mod import;
pub mod selection;
