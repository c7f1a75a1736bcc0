//! Tracing subscriber for the dhx-dropdown binary.
//!
//! Installed BEFORE Dioxus launches so dioxus-logger does not set its own
//! subscriber. Webview chatter (`SelectionDidChange`, pointer events) is
//! dropped by matching configured patterns against each formatted line.

use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use dhx_dropdown::config::LoggingConfig;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Substring blocklist applied to formatted log lines.
#[derive(Debug, Clone, Default)]
struct Suppressor {
    patterns: Vec<String>,
}

impl Suppressor {
    fn suppresses(&self, line: &str) -> bool {
        self.patterns.iter().any(|pattern| line.contains(pattern.as_str()))
    }
}

/// Event formatter that drops lines matched by the `Suppressor`.
struct SuppressingFormat {
    inner: fmt::format::Format,
    suppressor: Suppressor,
}

impl<S, N> FormatEvent<S, N> for SuppressingFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut line = String::new();
        self.inner.format_event(ctx, Writer::new(&mut line), event)?;

        if self.suppressor.suppresses(&line) {
            return Ok(());
        }
        write!(writer, "{line}")
    }
}

/// Install the global subscriber.
///
/// Level comes from `RUST_LOG`, falling back to `config.level`. Output goes
/// to `config.log_file` when it can be created, otherwise to stderr.
/// Returns the log file in use, if any.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let log_file = config
        .log_file
        .as_ref()
        .and_then(|path| File::create(path).ok().map(|file| (path.clone(), file)));

    let (writer, ansi, path) = match log_file {
        Some((path, file)) => (BoxMakeWriter::new(Mutex::new(file)), false, Some(path)),
        None => (BoxMakeWriter::new(io::stderr), true, None),
    };

    let fmt_layer = fmt::layer()
        .with_ansi(ansi)
        .with_writer(writer)
        .event_format(SuppressingFormat {
            inner: fmt::format::Format::default().with_target(false),
            suppressor: Suppressor {
                patterns: config.suppressed_patterns.clone(),
            },
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))?;

    Ok(path)
}
