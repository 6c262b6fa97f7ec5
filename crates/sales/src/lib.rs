//! Sales message processing domain.
//!
//! Sale and price-adjustment messages are applied to per-category running
//! totals, implemented purely as deterministic domain logic (no IO). Reports
//! come back as values for the caller to render.

pub mod adjustment;
pub mod category;
pub mod config;
pub mod message;
pub mod processor;
pub mod report;
pub mod sale;

mod integration_tests;

pub use adjustment::{Adjustment, AdjustmentAmount, Operation};
pub use category::CategoryMap;
pub use config::ProcessorConfig;
pub use message::{LimitReached, Message, MessageCounted, ProcessorEvent, SalesRecorded};
pub use processor::{MessageProcessor, ProcessOutcome};
pub use report::{
    AdjustmentRecord, AdjustmentSummary, CategoryAdjustments, CategoryTotal, Report,
    ReportRenderer, SaleSummary,
};
pub use sale::Sale;
