//! Tracing subscriber setup.
//!
//! Off unless `RUST_LOG` is set, so normal runs pay nothing:
//!
//! ```bash
//! RUST_LOG=cryss_parse=debug cryss file.cryss
//! RUST_LOG=debug CRYSS_LOG_TREE=1 cryss parse file.cryss
//! ```
//!
//! `CRYSS_LOG_TREE` switches from flat lines to an indented tree that follows
//! span nesting. Output goes to stderr so it never mixes with prompts or
//! dumps on stdout.

use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tracing_tree::HierarchicalLayer;

static TRACING_INIT: Once = Once::new();

/// Environment variable selecting the tree layout.
pub const LOG_TREE_VAR: &str = "CRYSS_LOG_TREE";

/// Initialize tracing, at most once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os(LOG_TREE_VAR).is_some();

        let flat = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });
        let hierarchical = tree.then(|| {
            HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(flat)
            .with(hierarchical)
            .with(EnvFilter::from_default_env())
            .init();
    });
}
