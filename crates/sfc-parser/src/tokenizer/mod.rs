//! SFC tokenizer module.
//!
//! A single-pass state machine that splits a single file component into its
//! top-level blocks without interpreting their content.

/// Block type produced by the tokenizer.
pub mod block;
/// Helper methods for tokenizer state transitions and bookkeeping.
pub mod helpers;
/// SFC tokenizer state machine implementation.
pub mod core;

pub use self::core::{SfcTokenizer, TokenizerState};
pub use block::{Attributes, Block};
