//! Top-level block splitter for single file components.
//!
//! # Scope
//!
//! A single file component mixes several top-level blocks in one document:
//!
//! ```text
//! <template>
//!   <span>Hello {{ name }}</span>
//! </template>
//!
//! <script lang="ts">
//! export default {}
//! </script>
//!
//! <style scoped>
//! span { color: red; }
//! </style>
//! ```
//!
//! This crate finds each block's tag name, raw content and opening-tag
//! attributes. It does not look inside the content: no HTML, script or style
//! parsing happens here. Top-level `<!-- ... -->` comments are skipped.
//!
//! Inside a block, only tags sharing the block's own name are tracked, so a
//! nested `<template>` is kept as content instead of closing the outer one,
//! while unrelated or unbalanced markup (`<meta />`, a stray `<li>`) is left
//! alone.
//!
//! # Not Supported
//!
//! - Content containing the literal closing tag of its own block (split it,
//!   e.g. `"<" + "/script>"`)
//! - Character references in attribute values
//! - Escaped quotes inside quoted attribute values

/// Parse errors.
pub mod error;
/// Tokenizer that produces blocks from component source.
pub mod tokenizer;

pub use error::{Expected, ParseError, SourcePosition};
pub use tokenizer::{Attributes, Block, SfcTokenizer, TokenizerState};

/// Split `source` into its top-level blocks, in document order.
///
/// ```
/// let blocks = sfc_parser::parse("<script lang=\"ts\">let a = 1;</script>")?;
/// assert_eq!(blocks.len(), 1);
/// assert_eq!(blocks[0].tag(), "script");
/// assert_eq!(blocks[0].content(), "let a = 1;");
/// assert_eq!(blocks[0].attribute("lang"), Some("ts"));
/// # Ok::<(), sfc_parser::ParseError>(())
/// ```
///
/// # Errors
///
/// Returns the first syntax error found. No blocks are returned in that
/// case, even if some were complete before the error.
pub fn parse(source: &str) -> Result<Vec<Block>, ParseError> {
    let mut tokenizer = SfcTokenizer::new(source);
    tokenizer.run()?;
    Ok(tokenizer.into_blocks())
}

/// The first block with the given tag, if any.
#[must_use]
pub fn find_block<'a>(blocks: &'a [Block], tag: &str) -> Option<&'a Block> {
    blocks.iter().find(|block| block.tag() == tag)
}

/// Every block with the given tag, in document order.
pub fn blocks_named<'a>(blocks: &'a [Block], tag: &'a str) -> impl Iterator<Item = &'a Block> {
    blocks.iter().filter(move |block| block.tag() == tag)
}
