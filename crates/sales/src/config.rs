use serde::{Deserialize, Serialize};

use msgproc_core::{DomainError, DomainResult};

/// Reporting cadence and message quota.
///
/// Both values are positive; deserialization goes through the same check as
/// `ProcessorConfig::new`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProcessorConfig")]
pub struct ProcessorConfig {
    summary_interval: u64,
    message_limit: u64,
}

/// Unchecked wire shape of `ProcessorConfig`.
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawProcessorConfig {
    summary_interval: u64,
    message_limit: u64,
}

impl TryFrom<RawProcessorConfig> for ProcessorConfig {
    type Error = DomainError;

    fn try_from(raw: RawProcessorConfig) -> Result<Self, Self::Error> {
        ProcessorConfig::new(raw.summary_interval, raw.message_limit)
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            summary_interval: 10,
            message_limit: 50,
        }
    }
}

impl ProcessorConfig {
    pub fn new(summary_interval: u64, message_limit: u64) -> DomainResult<Self> {
        if summary_interval == 0 {
            return Err(DomainError::invalid_argument(
                "summary_interval must be positive",
            ));
        }
        if message_limit == 0 {
            return Err(DomainError::invalid_argument("message_limit must be positive"));
        }
        Ok(Self {
            summary_interval,
            message_limit,
        })
    }

    /// A sale summary is produced every `summary_interval` accepted messages.
    pub fn summary_interval(&self) -> u64 {
        self.summary_interval
    }

    /// Accepted messages before the processor terminates.
    pub fn message_limit(&self) -> u64 {
        self.message_limit
    }

    pub fn is_summary_point(&self, sequence: u64) -> bool {
        sequence % self.summary_interval == 0 || self.is_limit(sequence)
    }

    pub fn is_limit(&self, sequence: u64) -> bool {
        sequence == self.message_limit
    }
}
