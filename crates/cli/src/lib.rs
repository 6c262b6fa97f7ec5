//! Console front end: configuration, a scripted message feed, report output.

pub mod config;
pub mod feed;
pub mod output;

pub use config::{AppConfig, ReportFormat};
pub use output::run;
