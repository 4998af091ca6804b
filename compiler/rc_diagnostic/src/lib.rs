//! Diagnostic system for item-effect expressions.
//!
//! Every diagnostic carries:
//! - an error code for searchability
//! - a message (what went wrong)
//! - a primary span (where it went wrong)
//! - context labels and notes (why it's wrong)
//! - suggestions (how to fix)
//!
//! [`emitter::render`] turns a diagnostic plus its source into a snippet.

mod diagnostic;
pub mod emitter;
mod error_code;

pub use diagnostic::{expected_operand, unclosed_delimiter, Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
