//! Log output for the command line tool
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a compact stderr logger for the `biasvar` binary.
///
/// `RUST_LOG` takes precedence. Otherwise the crate logs at `info`, or `debug` when `verbose`
/// is set. Logs go to stderr so report output on stdout stays machine readable.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("biasvar=debug,warn")
        } else {
            EnvFilter::new("biasvar=info,warn")
        }
    });

    // A second initialization fails; keep whichever subscriber came first.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
