//! cryss front end driver.
//!
//! Wires the phases together for one session:
//!
//! ```text
//! BufRead ──► Lexer ──► Parser ──► TopLevel
//!               │                     │
//!               ▼                     ▼
//!           SourceLog         lower_item_types ──► TypeInterner
//! ```
//!
//! The [`session`] loop owns the report-and-continue policy. [`commands`]
//! are what the `cryss` binary dispatches to.

pub mod commands;
pub mod session;
pub mod tracing_setup;

pub use session::{Mode, Session, SessionOutput};
