//! Logging setup for the scenario runner.
//!
//! Library code logs through `tracing` macros; the cucumber binary installs
//! the subscriber once, before the first scenario starts.
//!
//! # Example
//!
//! ```rust,no_run
//! use showcase_e2e::logger::{init_logger, should_use_colors};
//!
//! init_logger(false, false, !should_use_colors());
//! tracing::info!("starting scenarios");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "showcase_e2e=debug,showcase_browser_test=debug,site=debug";
const QUIET_FILTER: &str = "showcase_e2e=error,showcase_browser_test=error";
const DEFAULT_FILTER: &str = "showcase_e2e=info,showcase_browser_test=info,site=info";

/// Builds the filter for the given verbosity flags.
///
/// `verbose` wins over `quiet`. Without either flag, `RUST_LOG` is used when
/// set and valid.
#[must_use]
pub fn env_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Installs the global subscriber.
///
/// Call once per process. A second call is ignored, since concurrent
/// scenario hooks may race to initialise logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(env_filter(verbose, quiet), no_color);
}

/// Installs the global subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Whether log output should be coloured.
///
/// `NO_COLOR` disables colours, `FORCE_COLOR` enables them even without a
/// terminal; otherwise stdout's capabilities decide.
#[must_use]
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::Term::stdout().features().colors_supported()
}
