use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::errors::{Result, SeqnError};

/// Filter used when neither `RUST_LOG` nor an explicit level is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs the subscriber for the `seqn-fprime` host.
///
/// Events go to stderr: stdout carries the converted sequence or the lint
/// report. At `warn` the host reports argument nodes dropped during
/// conversion; `debug` adds dictionary and tree loading, lint rule matches
/// and relative time tags that match no duration form.
pub fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL)));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init()
        .map_err(|err| SeqnError::GeneralError(format!("tracing already initialised: {err}")))
}
