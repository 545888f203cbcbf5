#![forbid(unsafe_code)]

//! Console plumbing: panic reporting and `tracing` output to `console.*`.

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_web::MakeWebConsoleWriter;

pub(crate) fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Install a console subscriber for events at or above `max_level`.
/// Later calls are no-ops.
pub(crate) fn install_logging(max_level: Level) {
    let console = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(max_level));
    let _ = tracing_subscriber::registry().with(console).try_init();
}
