use strum_macros::Display;

use super::block::{Attributes, Block};
use crate::error::{Expected, ParseError, SourcePosition};

/// The tokenizer state machine.
///
/// Top-level scanning, comments, the attributes of an opening tag and the
/// body of an open block each get their own states, so the comment marker
/// never shares a slot with real tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TokenizerState {
    /// Between blocks. Only whitespace and `<` are legal here.
    Outer,
    /// After a top-level `<`, reading the tag name.
    TagOpen,
    /// Inside `<!-- ... -->`, discarding everything up to `-->`.
    Comment,
    /// Inside an opening tag, reading (or waiting for) an attribute name.
    AttributeName,
    /// After `=`, waiting for the first character of the value.
    BeforeAttributeValue,
    /// Inside a `"`-quoted attribute value.
    AttributeValueDoubleQuoted,
    /// Inside a `'`-quoted attribute value.
    AttributeValueSingleQuoted,
    /// Inside an unquoted attribute value.
    AttributeValueUnquoted,
    /// Right after the closing quote of an attribute value.
    AfterAttributeValueQuoted,
    /// Inside an open block, accumulating raw content.
    Content,
    /// Inside an open block, reading a `<...>` token that may open or close
    /// a tag of the same name.
    ContentTag,
}

/// Splits a single file component into its top-level blocks.
///
/// The tokenizer makes one pass over the input. Block content is never
/// interpreted: the only markup it looks at inside a block is tags sharing
/// the block's own name, which raise and lower the nesting depth so an
/// inner `<template>` does not end an outer one early.
///
/// ```
/// use sfc_parser::SfcTokenizer;
///
/// let mut tokenizer = SfcTokenizer::new("<style scoped>a {}</style>");
/// tokenizer.run()?;
/// let blocks = tokenizer.into_blocks();
/// assert_eq!(blocks[0].tag(), "style");
/// assert_eq!(blocks[0].attribute("scoped"), Some("scoped"));
/// # Ok::<(), sfc_parser::ParseError>(())
/// ```
pub struct SfcTokenizer<'a> {
    pub(super) state: TokenizerState,
    pub(super) input: &'a str,
    /// Byte offset of the next character to consume.
    pub(super) current_pos: usize,
    /// Position of the character most recently consumed.
    pub(super) position: SourcePosition,
    pub(super) next_position: SourcePosition,

    /// Name of the tag being opened, or of the open block.
    pub(super) tag_name: String,
    pub(super) attributes: Attributes,
    pub(super) attribute_name: String,
    pub(super) attribute_value: String,

    pub(super) content: String,
    /// Text of a `<...>` token inside the content, without its `>`.
    pub(super) content_tag: String,
    /// Number of currently open tags named `tag_name`, the block's own
    /// opening tag included.
    pub(super) depth: usize,
    /// Consecutive `-` characters seen at the tail of a comment.
    pub(super) dashes: usize,

    pub(super) blocks: Vec<Block>,
}

impl<'a> SfcTokenizer<'a> {
    /// Create a new tokenizer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        SfcTokenizer {
            state: TokenizerState::Outer,
            input,
            current_pos: 0,
            position: SourcePosition::start(),
            next_position: SourcePosition::start(),
            tag_name: String::new(),
            attributes: Attributes::new(),
            attribute_name: String::new(),
            attribute_value: String::new(),
            content: String::new(),
            content_tag: String::new(),
            depth: 0,
            dashes: 0,
            blocks: Vec::new(),
        }
    }

    /// The state the tokenizer is currently in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// Consume the tokenizer and return the blocks found so far.
    /// Call this after `run()` succeeded to get every block.
    #[must_use]
    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    /// Between blocks.
    fn handle_outer_state(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            c if Self::is_whitespace_char(c) => {}
            '<' => {
                self.tag_name.clear();
                self.switch_to(TokenizerState::TagOpen);
            }
            _ => return Err(self.unexpected(c, Expected::WhitespaceOrTagOpen)),
        }
        Ok(())
    }

    /// After a top-level `<`.
    fn handle_tag_open_state(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            // `!` is allowed so that `<!--` can be recognised.
            c if Self::is_tag_name_char(c) => self.tag_name.push(c),
            '>' if !self.tag_name.is_empty() => self.open_block(),
            c if Self::is_whitespace_char(c) && self.tag_name == "!--" => {
                self.dashes = 0;
                self.switch_to(TokenizerState::Comment);
            }
            c if Self::is_whitespace_char(c) && !self.tag_name.is_empty() => {
                self.attribute_name.clear();
                self.switch_to(TokenizerState::AttributeName);
            }
            _ => return Err(self.unexpected(c, Expected::TagNameOrTagClose)),
        }
        Ok(())
    }

    /// Inside a top-level comment. Only the first `-->` ends it; a nested
    /// `<!--` is ordinary comment text.
    fn handle_comment_state(&mut self, c: char) {
        match c {
            '-' => self.dashes += 1,
            '>' if self.dashes == 2 => {
                self.dashes = 0;
                self.switch_to(TokenizerState::Outer);
            }
            _ => self.dashes = 0,
        }
    }

    /// Inside an opening tag, between attributes or within a name.
    fn handle_attribute_name_state(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            c if Self::is_attribute_name_char(c) => self.attribute_name.push(c),
            '=' if !self.attribute_name.is_empty() => {
                self.attribute_value.clear();
                self.switch_to(TokenizerState::BeforeAttributeValue);
            }
            c if Self::is_whitespace_char(c) => {
                if !self.attribute_name.is_empty() {
                    self.finish_boolean_attribute();
                }
            }
            '>' => {
                if !self.attribute_name.is_empty() {
                    self.finish_boolean_attribute();
                }
                self.open_block();
            }
            _ => return Err(self.unexpected(c, Expected::AttributeNameOrTagClose)),
        }
        Ok(())
    }

    /// After `name=`.
    fn handle_before_attribute_value_state(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            c if Self::is_whitespace_char(c) => {}
            '"' => self.switch_to(TokenizerState::AttributeValueDoubleQuoted),
            '\'' => self.switch_to(TokenizerState::AttributeValueSingleQuoted),
            '>' => return Err(self.unexpected(c, Expected::AttributeValue)),
            c => {
                self.attribute_value.push(c);
                self.switch_to(TokenizerState::AttributeValueUnquoted);
            }
        }
        Ok(())
    }

    /// Inside a quoted value. There is no escape syntax: the value ends at the
    /// first matching quote.
    fn handle_attribute_value_quoted_state(
        &mut self,
        c: char,
        quote: char,
    ) -> Result<(), ParseError> {
        match c {
            c if c == quote => {
                self.finish_attribute();
                self.switch_to(TokenizerState::AfterAttributeValueQuoted);
            }
            '>' => {
                return Err(ParseError::UnterminatedAttributeValue {
                    quote,
                    position: self.position,
                });
            }
            c => self.attribute_value.push(c),
        }
        Ok(())
    }

    /// Inside an unquoted value. Only whitespace and `>` end it; quotes, `=`
    /// and `<` are part of the value.
    fn handle_attribute_value_unquoted_state(&mut self, c: char) {
        match c {
            c if Self::is_whitespace_char(c) => {
                self.finish_attribute();
                self.switch_to(TokenizerState::AttributeName);
            }
            // `>` ends the value and the tag.
            '>' => {
                self.finish_attribute();
                self.open_block();
            }
            c => self.attribute_value.push(c),
        }
    }

    /// After the closing quote of a value, attributes must be separated by
    /// whitespace.
    fn handle_after_attribute_value_quoted_state(&mut self, c: char) -> Result<(), ParseError> {
        match c {
            c if Self::is_whitespace_char(c) => self.switch_to(TokenizerState::AttributeName),
            '>' => self.open_block(),
            _ => return Err(self.unexpected(c, Expected::WhitespaceOrTagClose)),
        }
        Ok(())
    }

    /// Raw block content.
    fn handle_content_state(&mut self, c: char) {
        if c == '<' {
            self.content_tag.clear();
            self.content_tag.push(c);
            self.switch_to(TokenizerState::ContentTag);
        } else {
            self.content.push(c);
        }
    }

    /// A `<...>` token inside block content. Everything up to the next `>` is
    /// part of the token, including further `<` characters and quotes.
    fn handle_content_tag_state(&mut self, c: char) {
        if c != '>' {
            self.content_tag.push(c);
            return;
        }

        if self.closes_open_tag() {
            self.depth -= 1;
            if self.depth == 0 {
                self.emit_block();
                self.switch_to(TokenizerState::Outer);
                return;
            }
        } else if self.opens_nested_tag() {
            self.depth += 1;
        }

        // Anything that is not the block's final closing tag stays in the
        // content verbatim.
        self.content.push_str(&self.content_tag);
        self.content.push('>');
        self.content_tag.clear();
        self.switch_to(TokenizerState::Content);
    }

    /// The input ran out. Only the top-level state is a valid place to stop.
    const fn handle_end_of_input(&self) -> Result<(), ParseError> {
        match self.state {
            TokenizerState::Outer => Ok(()),
            _ => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    /// Run the tokenizer to completion.
    ///
    /// Processes the whole input and collects the blocks. Retrieve them with
    /// [`SfcTokenizer::into_blocks`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered: an unexpected character,
    /// a quoted attribute value cut off by `>`, or input that ends inside a
    /// tag, comment or block.
    pub fn run(&mut self) -> Result<(), ParseError> {
        while let Some(c) = self.consume() {
            match self.state {
                TokenizerState::Outer => self.handle_outer_state(c)?,
                TokenizerState::TagOpen => self.handle_tag_open_state(c)?,
                TokenizerState::Comment => self.handle_comment_state(c),
                TokenizerState::AttributeName => self.handle_attribute_name_state(c)?,
                TokenizerState::BeforeAttributeValue => {
                    self.handle_before_attribute_value_state(c)?;
                }
                TokenizerState::AttributeValueDoubleQuoted => {
                    self.handle_attribute_value_quoted_state(c, '"')?;
                }
                TokenizerState::AttributeValueSingleQuoted => {
                    self.handle_attribute_value_quoted_state(c, '\'')?;
                }
                TokenizerState::AttributeValueUnquoted => {
                    self.handle_attribute_value_unquoted_state(c);
                }
                TokenizerState::AfterAttributeValueQuoted => {
                    self.handle_after_attribute_value_quoted_state(c)?;
                }
                TokenizerState::Content => self.handle_content_state(c),
                TokenizerState::ContentTag => self.handle_content_tag_state(c),
            }
        }

        self.handle_end_of_input()
    }
}
