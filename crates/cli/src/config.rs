//! Configuration loaded from the environment.

use anyhow::{Context, Result, bail};

use msgproc_core::money::DEFAULT_CURRENCY_SYMBOL;
use msgproc_sales::ProcessorConfig;

pub const SUMMARY_INTERVAL_ENV: &str = "MSGPROC_SUMMARY_INTERVAL";
pub const MESSAGE_LIMIT_ENV: &str = "MSGPROC_MESSAGE_LIMIT";
pub const CURRENCY_SYMBOL_ENV: &str = "MSGPROC_CURRENCY_SYMBOL";
pub const REPORT_FORMAT_ENV: &str = "MSGPROC_REPORT_FORMAT";

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// The console text layout.
    #[default]
    Text,
    /// One JSON object per report per line.
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => bail!("unknown report format {other:?} (expected \"text\" or \"json\")"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub processor: ProcessorConfig,
    pub currency_symbol: String,
    pub report_format: ReportFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            processor: ProcessorConfig::default(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            report_format: ReportFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = AppConfig::default();

        let summary_interval = match lookup(SUMMARY_INTERVAL_ENV) {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SUMMARY_INTERVAL_ENV}={v:?} is not a number"))?,
            None => defaults.processor.summary_interval(),
        };
        let message_limit = match lookup(MESSAGE_LIMIT_ENV) {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{MESSAGE_LIMIT_ENV}={v:?} is not a number"))?,
            None => defaults.processor.message_limit(),
        };
        let processor = ProcessorConfig::new(summary_interval, message_limit)
            .context("invalid processor configuration")?;

        let currency_symbol = lookup(CURRENCY_SYMBOL_ENV).unwrap_or(defaults.currency_symbol);

        let report_format = match lookup(REPORT_FORMAT_ENV) {
            Some(v) => v
                .parse::<ReportFormat>()
                .with_context(|| format!("invalid {REPORT_FORMAT_ENV}"))?,
            None => defaults.report_format,
        };

        Ok(Self {
            processor,
            currency_symbol,
            report_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.processor.summary_interval(), 10);
        assert_eq!(cfg.processor.message_limit(), 50);
        assert_eq!(cfg.currency_symbol, "$");
        assert_eq!(cfg.report_format, ReportFormat::Text);
    }

    #[test]
    fn values_are_read_from_lookup() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (SUMMARY_INTERVAL_ENV, "5"),
            (MESSAGE_LIMIT_ENV, " 20 "),
            (CURRENCY_SYMBOL_ENV, "€"),
            (REPORT_FORMAT_ENV, "JSON"),
        ]))
        .unwrap();

        assert_eq!(cfg.processor, ProcessorConfig::new(5, 20).unwrap());
        assert_eq!(cfg.currency_symbol, "€");
        assert_eq!(cfg.report_format, ReportFormat::Json);
    }

    #[test]
    fn bad_values_fail_with_context() {
        let err = AppConfig::from_lookup(lookup(&[(MESSAGE_LIMIT_ENV, "fifty")])).unwrap_err();
        assert!(err.to_string().contains(MESSAGE_LIMIT_ENV));

        let err = AppConfig::from_lookup(lookup(&[(SUMMARY_INTERVAL_ENV, "0")])).unwrap_err();
        assert!(format!("{err:#}").contains("summary_interval must be positive"));

        let err = AppConfig::from_lookup(lookup(&[(REPORT_FORMAT_ENV, "xml")])).unwrap_err();
        assert!(format!("{err:#}").contains("unknown report format"));
    }
}
