//! Helper functions for the SFC tokenizer.
//!
//! This module contains utility functions used throughout the tokenizer:
//! - State transitions
//! - Input/character handling and character classes
//! - Tag and attribute bookkeeping
//! - Block emission
//! - Error construction and diagnostics

use core::mem;

use sfc_common::warning::warn_once;

use super::block::Block;
use super::core::{SfcTokenizer, TokenizerState};
use crate::error::{Expected, ParseError};

/// Component name used for diagnostics from the tokenizer.
const COMPONENT: &str = "Tokenizer";

// =============================================================================
// State Transition Helpers
// =============================================================================

impl SfcTokenizer<'_> {
    /// Transitions to a new state. The next character is handled there.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl SfcTokenizer<'_> {
    /// Returns the character at the current position and advances past it.
    /// Returns None at the end of the input.
    pub(super) fn consume(&mut self) -> Option<char> {
        let c = self.input[self.current_pos..].chars().next()?;
        self.current_pos += c.len_utf8();
        self.position = self.next_position;
        self.next_position = self.next_position.advance(c);
        Some(c)
    }

    /// Any Unicode whitespace, so CRLF line endings and non-breaking spaces
    /// separate tokens the same way spaces do.
    pub(super) fn is_whitespace_char(c: char) -> bool {
        c.is_whitespace()
    }

    /// `[A-Za-z0-9-!]`. The `!` lets `<!--` through the tag name scanner.
    pub(super) const fn is_tag_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, '-' | '!')
    }

    /// `[A-Za-z0-9-]`.
    pub(super) const fn is_attribute_name_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '-'
    }

}

// =============================================================================
// Tag and Attribute Helpers
// =============================================================================

impl SfcTokenizer<'_> {
    /// The opening tag is complete: its name becomes the open block's tag.
    pub(super) fn open_block(&mut self) {
        self.content.clear();
        self.depth = 1;
        self.switch_to(TokenizerState::Content);
    }

    /// Record `attribute_name` = `attribute_value`.
    ///
    /// A repeated name replaces the earlier value; this is reported once per
    /// distinct tag and attribute pair.
    pub(super) fn finish_attribute(&mut self) {
        let name = mem::take(&mut self.attribute_name);
        let value = mem::take(&mut self.attribute_value);

        if self.attributes.contains_key(&name) {
            warn_once(
                COMPONENT,
                &format!(
                    "duplicate attribute '{name}' on <{}>, keeping the last value",
                    self.tag_name
                ),
            );
        }
        let _ = self.attributes.insert(name, value);
    }

    /// Record a presence-only attribute, whose value is its own name.
    pub(super) fn finish_boolean_attribute(&mut self) {
        self.attribute_value.clone_from(&self.attribute_name);
        self.finish_attribute();
    }

    /// Whether the buffered content token is `</tag>` for the open block.
    pub(super) fn closes_open_tag(&self) -> bool {
        self.content_tag
            .strip_prefix("</")
            .is_some_and(|name| name == self.tag_name)
    }

    /// Whether the buffered content token opens another tag with the open
    /// block's name. Attributes after the name do not matter.
    pub(super) fn opens_nested_tag(&self) -> bool {
        self.content_tag
            .strip_prefix('<')
            .and_then(|token| token.split(Self::is_whitespace_char).next())
            .is_some_and(|name| name == self.tag_name)
    }
}

// =============================================================================
// Block Emission Helpers
// =============================================================================

impl SfcTokenizer<'_> {
    /// The open block's closing tag was found at depth zero.
    /// Moves the per-block state into a new [`Block`] and resets it.
    pub(super) fn emit_block(&mut self) {
        let block = Block::new(
            mem::take(&mut self.tag_name),
            mem::take(&mut self.content),
            mem::take(&mut self.attributes),
        );
        self.content_tag.clear();
        self.blocks.push(block);
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl SfcTokenizer<'_> {
    /// An error for `c`, the character just consumed.
    pub(super) const fn unexpected(&self, c: char, expected: Expected) -> ParseError {
        ParseError::UnexpectedCharacter {
            found: c,
            expected,
            position: self.position,
        }
    }
}
