// SPDX-License-Identifier: PMPL-1.0-or-later

//! Diagnostic logging setup
//!
//! Log lines go to stderr and carry their module path as a namespace tag
//! (`i18n_sync::compare`), keeping stdout free for the report itself.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "i18n_sync=debug,info"
    } else {
        "info"
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init(verbose: bool, ansi: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_ansi(ansi)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
