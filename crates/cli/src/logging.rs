use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GQLBIND_LOG";

const CRATE_PREFIX: &str = "gqlbind";

pub fn init_tracing() {
    // GQLBIND_LOG controls log level: "trace", "debug", "info", "warn", "error"
    // or a full tracing filter spec like "gqlbind_codegen=trace"
    let filter = filter_spec(std::env::var(LOG_ENV).ok().as_deref());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

/// Filter directive for a `GQLBIND_LOG` value.
fn filter_spec(value: Option<&str>) -> String {
    match value {
        Some(level) if is_plain_level(level) => format!("{CRATE_PREFIX}={level}"),
        Some(spec) => spec.to_string(),
        None => format!("{CRATE_PREFIX}=info"),
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
