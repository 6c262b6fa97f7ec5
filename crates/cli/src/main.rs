use anyhow::Result;

use msgproc_cli::{AppConfig, feed::demo_feed, run};

/// Messages offered by the scripted feed; more than any sane limit needs.
const FEED_LEN: usize = 500;

fn main() -> Result<()> {
    msgproc_observability::init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        summary_interval = config.processor.summary_interval(),
        message_limit = config.processor.message_limit(),
        "msgproc starting"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, demo_feed(FEED_LEN), &mut out)?;
    Ok(())
}
