use std::collections::BTreeMap;

use serde::Serialize;

/// Attributes parsed from a block's opening tag, keyed by name.
///
/// Boolean attributes (written without `=value`) map to their own name, so
/// `<style scoped>` yields `{"scoped": "scoped"}`.
pub type Attributes = BTreeMap<String, String>;

/// One top-level section of a single file component.
///
/// A block is emitted when the closing tag matching its opening tag is found
/// at nesting depth zero. The content is the raw text between the opening
/// tag's `>` and that closing tag, with nested markup preserved verbatim.
///
/// Serializes as `{ "tag", "content", "attrs"? }`, omitting `attrs` when the
/// opening tag carried none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    tag: String,
    content: String,
    #[serde(rename = "attrs", skip_serializing_if = "Option::is_none")]
    attributes: Option<Attributes>,
}

impl Block {
    /// Create a block. An empty attribute map is stored as `None`.
    #[must_use]
    pub fn new(tag: String, content: String, attributes: Attributes) -> Self {
        Self {
            tag,
            content,
            attributes: (!attributes.is_empty()).then_some(attributes),
        }
    }

    /// The tag name as written, case preserved.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The raw, uninterpreted text between the opening and closing tags.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// The opening tag's attributes, or `None` if it had none.
    #[must_use]
    pub const fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    /// Look up a single attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .as_ref()
            .and_then(|attributes| attributes.get(name))
            .map(String::as_str)
    }

    /// Whether the opening tag carried the named attribute.
    #[must_use]
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Split the block into its tag, content and attributes.
    #[must_use]
    pub fn into_parts(self) -> (String, String, Option<Attributes>) {
        (self.tag, self.content, self.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attributes_are_absent() {
        let block = Block::new("template".into(), String::new(), Attributes::new());
        assert_eq!(block.attributes(), None);
        assert!(!block.has_attribute("scoped"));
    }

    #[test]
    fn attribute_lookup() {
        let mut attributes = Attributes::new();
        let _ = attributes.insert("lang".into(), "ts".into());
        let block = Block::new("script".into(), "x".into(), attributes);

        assert_eq!(block.attribute("lang"), Some("ts"));
        assert!(block.has_attribute("lang"));
        assert_eq!(block.attribute("setup"), None);
    }
}
