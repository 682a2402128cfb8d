//! Tests for malformed input.

use sfc_parser::{Expected, ParseError, SourcePosition, parse};

/// Helper to parse input that must be rejected
fn parse_err(input: &str) -> ParseError {
    match parse(input) {
        Ok(blocks) => panic!("expected an error, got {blocks:?}"),
        Err(error) => error,
    }
}

/// Helper to unpack an unexpected-character error
fn unexpected(input: &str) -> (char, Expected, usize) {
    match parse_err(input) {
        ParseError::UnexpectedCharacter {
            found,
            expected,
            position,
        } => (found, expected, position.offset),
        other => panic!("expected UnexpectedCharacter, got {other:?}"),
    }
}

#[test]
fn test_text_between_blocks() {
    assert_eq!(unexpected("hello"), ('h', Expected::WhitespaceOrTagOpen, 0));
    assert_eq!(
        unexpected("<a>x</a>trailing"),
        ('t', Expected::WhitespaceOrTagOpen, 8)
    );
}

#[test]
fn test_stray_closing_tag_at_top_level() {
    assert_eq!(
        unexpected("</template>"),
        ('/', Expected::TagNameOrTagClose, 1)
    );
}

#[test]
fn test_bad_tag_names() {
    assert_eq!(unexpected("<>"), ('>', Expected::TagNameOrTagClose, 1));
    assert_eq!(unexpected("< a>"), (' ', Expected::TagNameOrTagClose, 1));
    assert_eq!(unexpected("<a.b>"), ('.', Expected::TagNameOrTagClose, 2));
}

#[test]
fn test_bad_attribute_names() {
    assert_eq!(
        unexpected("<script =x>"),
        ('=', Expected::AttributeNameOrTagClose, 8)
    );
    assert_eq!(
        unexpected("<script a\"b\">"),
        ('"', Expected::AttributeNameOrTagClose, 9)
    );
    assert_eq!(
        unexpected("<script :src>"),
        (':', Expected::AttributeNameOrTagClose, 8)
    );
}

#[test]
fn test_missing_attribute_value() {
    assert_eq!(
        unexpected("<script type=>"),
        ('>', Expected::AttributeValue, 13)
    );
    assert_eq!(
        unexpected("<script type= >"),
        ('>', Expected::AttributeValue, 14)
    );
}

#[test]
fn test_no_whitespace_after_quoted_value() {
    assert_eq!(
        unexpected("<script a=\"b\"c>"),
        ('c', Expected::WhitespaceOrTagClose, 13)
    );
}

#[test]
fn test_unterminated_double_quoted_value() {
    let error = parse_err("<script type=\"x>\n</script>");
    assert_eq!(
        error,
        ParseError::UnterminatedAttributeValue {
            quote: '"',
            position: SourcePosition {
                offset: 15,
                line: 1,
                column: 16,
            },
        }
    );
    assert_eq!(
        error.to_string(),
        "Unexpected end of attribute, expected '\"' terminator at line 1, column 16."
    );
}

#[test]
fn test_unterminated_single_quoted_value() {
    assert!(matches!(
        parse_err("<script type='x>\n</script>"),
        ParseError::UnterminatedAttributeValue { quote: '\'', .. }
    ));
}

#[test]
fn test_end_of_input_while_scanning() {
    for input in [
        "<",
        "<template",
        "<template ",
        "<script lang",
        "<script lang=",
        "<script lang=ts",
        "<script lang=\"ts",
        "<script lang=\"ts\"",
        "<!--",
        "<!-- never closed",
        "<!-- almost --",
        "<template>",
        "<template>content",
        "<template>content<",
        "<template>content</templ",
        "<template><template></template>",
        "<style>a</style><script>",
    ] {
        assert_eq!(
            parse(input),
            Err(ParseError::UnexpectedEndOfInput),
            "input: {input:?}"
        );
    }
}

#[test]
fn test_no_partial_results() {
    // The first block is complete, but the error still discards it.
    assert!(parse("<template>ok</template>\n<script>oops").is_err());
    assert!(parse("<template>ok</template>\noops").is_err());
}

#[test]
fn test_error_position_on_later_line() {
    let error = parse_err("<template>\n</template>\n\n  <style x='>");
    assert_eq!(
        error.position(),
        Some(SourcePosition {
            offset: 36,
            line: 4,
            column: 13,
        })
    );
}

#[test]
fn test_error_messages_name_alternatives() {
    assert_eq!(
        parse_err("x").to_string(),
        "Unexpected 'x', expected whitespace or '<' at line 1, column 1."
    );
    assert_eq!(
        parse_err("<a b?>").to_string(),
        "Unexpected '?', expected whitespace, attribute name, or '>' at line 1, column 5."
    );
    assert_eq!(
        parse_err("<a b=>").to_string(),
        "Unexpected '>', expected attribute value at line 1, column 6."
    );
    assert_eq!(parse_err("<a>").to_string(), "Unexpected end of file.");
}
