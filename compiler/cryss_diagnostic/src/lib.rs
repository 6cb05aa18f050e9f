//! Diagnostic system for the cryss front end.
//!
//! Every error the lexer, parser or type lowering can raise converts into a
//! [`Diagnostic`]:
//! - an error code for searchability
//! - a message saying what went wrong
//! - a primary label saying where, plus secondary labels for context
//! - notes and suggestions
//!
//! Rendering lives in [`emitter`] and reads source lines from the
//! [`SourceLog`](cryss_ir::SourceLog). It never feeds back into parsing.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
