//! Logging integration.
//!
//! Renderers emit [`tracing`] events; binaries call [`setup_logging`] once to
//! install a subscriber.

/// Sets up the global tracing subscriber, writing to stderr.
///
/// `log_level` is an [`EnvFilter`](tracing_subscriber::EnvFilter) directive
/// (e.g. "debug", "info", "bootstrap5_render=trace"); an invalid directive
/// falls back to "info". With `debug` a pretty, human-readable format is
/// used, otherwise structured JSON. Installing twice is a no-op.
pub fn setup_logging(log_level: &str, debug: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // stdout belongs to the rendered HTML
    let installed = if debug {
        builder.pretty().with_line_number(true).try_init()
    } else {
        builder.json().with_current_span(true).try_init()
    };
    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Creates a tracing span around one render call.
///
/// # Examples
///
/// ```
/// use bootstrap5_core::logging::render_span;
///
/// let span = render_span("field", "subject");
/// let _guard = span.enter();
/// tracing::debug!("rendering");
/// ```
pub fn render_span(kind: &str, target: &str) -> tracing::Span {
    tracing::debug_span!("bootstrap5_render", kind, target)
}
