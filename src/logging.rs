//! Tracing subscriber setup for the command-line driver.
//!
//! The library only emits [`tracing`] events; this module decides how they
//! look on the console. Every event goes to stderr. Stdout carries command
//! output only, so `dump --json` and friends stay pipeable.
use std::fmt::Write as _;

use tracing_subscriber::EnvFilter;

/// Collects the `message` field and any structured fields of an event.
#[derive(Default)]
struct FieldCollector {
    message: String,
    fields: String,
}

impl tracing::field::Visit for FieldCollector {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            let _ = write!(self.fields, " {}={value:?}", field.name());
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            let _ = write!(self.fields, " {}={value}", field.name());
        }
    }
}

/// Console formatter: a coloured level tag, the message, then dimmed fields.
struct ConsoleFormatter;

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let mut collector = FieldCollector::default();
        event.record(&mut collector);
        let FieldCollector { message, fields } = collector;

        writeln!(writer, "{}", console_line(*event.metadata().level(), &message, &fields))
    }
}

/// One console line: level tag, message, and the fields dimmed if present.
fn console_line(level: tracing::Level, message: &str, fields: &str) -> String {
    let fields = if fields.is_empty() {
        String::new()
    } else {
        format!("\x1b[2m{fields}\x1b[0m")
    };
    match level {
        tracing::Level::ERROR => format!("\x1b[31mERROR\x1b[0m {message}{fields}"),
        tracing::Level::WARN => format!("\x1b[33mWARN\x1b[0m  {message}{fields}"),
        tracing::Level::INFO => format!("{message}{fields}"),
        _ => format!("\x1b[2m{message}\x1b[0m{fields}"),
    }
}

/// Level directive used when `RUST_LOG` is unset.
const fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Initialise the global [`tracing`] subscriber.
///
/// The console level is `info`, or `debug` with `--verbose`; `RUST_LOG`
/// overrides both. Must be called once at program startup.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter)
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_selects_debug() {
        assert_eq!(default_directive(true), "debug");
        assert_eq!(default_directive(false), "info");
    }

    #[test]
    fn console_line_without_fields_has_no_escapes() {
        assert_eq!(
            console_line(tracing::Level::INFO, "app.ini is valid", ""),
            "app.ini is valid"
        );
    }

    #[test]
    fn console_line_dims_fields() {
        assert_eq!(
            console_line(tracing::Level::INFO, "loaded", " bytes=8"),
            "loaded\x1b[2m bytes=8\x1b[0m"
        );
        assert_eq!(
            console_line(tracing::Level::WARN, "repeated key", ""),
            "\x1b[33mWARN\x1b[0m  repeated key"
        );
        assert_eq!(
            console_line(tracing::Level::DEBUG, "loading app.ini", ""),
            "\x1b[2mloading app.ini\x1b[0m"
        );
    }

    #[test]
    fn collector_separates_message_and_fields() {
        use tracing_subscriber::layer::SubscriberExt as _;

        #[derive(Clone, Default)]
        struct Capture(std::sync::Arc<std::sync::Mutex<Vec<(String, String)>>>);

        impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Capture {
            fn on_event(
                &self,
                event: &tracing::Event<'_>,
                _ctx: tracing_subscriber::layer::Context<'_, S>,
            ) {
                let mut collector = FieldCollector::default();
                event.record(&mut collector);
                if let Ok(mut events) = self.0.lock() {
                    events.push((collector.message, collector.fields));
                }
            }
        }

        let capture = Capture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());
        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(line = 3, key = "k", "repeated key");
        });

        let events = capture.0.lock().map(|e| e.clone()).unwrap_or_default();
        assert_eq!(
            events,
            vec![("repeated key".to_string(), " line=3 key=k".to_string())]
        );
    }
}
