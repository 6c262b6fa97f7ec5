//! Drives a feed through the processor and writes reports.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use msgproc_sales::{Message, MessageProcessor, Report, ReportRenderer};

use crate::config::{AppConfig, ReportFormat};

/// What happened during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub accepted: u64,
    pub reports: usize,
    pub terminated: bool,
}

/// Feed messages until the processor terminates or the feed runs dry.
pub fn run<W: Write>(
    config: &AppConfig,
    feed: impl IntoIterator<Item = Message>,
    out: &mut W,
) -> Result<RunSummary> {
    let mut processor = MessageProcessor::new(config.processor);
    let renderer = ReportRenderer::new(config.currency_symbol.clone());
    let mut summary = RunSummary::default();

    for message in feed {
        let outcome = processor
            .process(&message)
            .with_context(|| format!("failed to process {} message", message.kind()))?;

        for report in &outcome.reports {
            write_report(out, &renderer, config.report_format, report)?;
        }
        summary.reports += outcome.reports.len();

        if processor.is_terminated() {
            break;
        }
    }

    out.flush().context("failed to flush report output")?;

    summary.accepted = processor.message_count();
    summary.terminated = processor.is_terminated();
    info!(
        accepted = summary.accepted,
        reports = summary.reports,
        terminated = summary.terminated,
        "run finished"
    );
    Ok(summary)
}

fn write_report<W: Write>(
    out: &mut W,
    renderer: &ReportRenderer,
    format: ReportFormat,
    report: &Report,
) -> Result<()> {
    match format {
        ReportFormat::Text => out
            .write_all(renderer.render(report).as_bytes())
            .context("failed to write report")?,
        ReportFormat::Json => {
            serde_json::to_writer(&mut *out, report).context("failed to serialize report")?;
            out.write_all(b"\n").context("failed to write report")?;
        }
    }
    Ok(())
}
