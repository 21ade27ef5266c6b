use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber once per process.
///
/// `RUST_LOG` is honored; without it only warnings from this crate are shown,
/// so rejected actions surface on stderr while normal output stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "mealplan_cli=warn".parse() {
            filter = filter.add_directive(directive);
        }

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
