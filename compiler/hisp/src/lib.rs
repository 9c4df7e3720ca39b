//! Hisp - the Hercules Lisp driver.
//!
//! Ties the pipeline together for the binary and the integration tests:
//! source line → `hisp_syntax::parse` → `hisp_eval::read` →
//! `hisp_eval::evaluate` → printed result.

mod session;

pub use hisp_eval::{render, Value};
pub use session::Session;

use std::sync::Once;

/// First banner line shown by the interactive loop.
pub const BANNER_TITLE: &str = "Hercules Lisp Version 0.0.0.0.7";

/// Second banner line shown by the interactive loop.
pub const BANNER_HINT: &str = "Press Ctrl+c to Exit";

/// Prompt printed before each interactive line.
pub const PROMPT: &str = "hisp> ";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Set `RUST_LOG=hisp_eval=debug` (or `trace`) to see builtin applications
/// and bindings as an indented tree on stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
