//! Tracing bootstrap for the terminal shell.

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Default filter directives; `RUST_LOG` overrides them entirely.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "warn" } else { "error" }.to_string(),
        // Keep request noise out of the interactive screens unless asked for.
        "reqwest=warn".to_string(),
        if is_dev { "al_app=info" } else { "al_app=warn" }.to_string(),
        if is_dev { "al_infra=info" } else { "al_infra=warn" }.to_string(),
    ]
}

/// Initialize the global tracing subscriber.
///
/// Logs go to stderr so report output on stdout stays clean enough to pipe.
pub fn init_tracing() -> anyhow::Result<()> {
    let is_dev = cfg!(debug_assertions);

    let filter_directives = build_filter_directives(is_dev);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let fmt_layer = fmt::layer()
        .with_level(true)
        .with_target(true)
        .with_writer(std::io::stderr);

    registry().with(env_filter).with(fmt_layer).try_init()?;

    Ok(())
}
