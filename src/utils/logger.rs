use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Logs always go to stderr so stdout carries only the report.
///
/// `RUST_LOG` overrides the default filter; `json` switches to one JSON object per line.
pub fn init_logger(verbose: bool, json: bool) {
    let default_directive = if verbose {
        "santa_mailcheck=debug,info"
    } else {
        "santa_mailcheck=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt_layer.json()).init();
    } else {
        registry
            .with(fmt_layer.with_file(false).with_line_number(false).compact())
            .init();
    }
}
