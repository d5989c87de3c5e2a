//! Plain-text flattening of CMS rich-text documents.

use crate::types::RichText;

/// Flattens a rich-text document to plain text by concatenating the text
/// of its top-level content nodes, space-separated, in document order.
///
/// Lossy on purpose: formatting marks and nested block structure are
/// dropped. Pages that need structured rendering consume the raw document
/// through their own renderer instead.
#[must_use]
pub fn flatten(doc: &RichText) -> String {
    let parts: Vec<&str> = doc
        .content
        .iter()
        .filter_map(|node| node.text.as_deref())
        .filter(|text| !text.is_empty())
        .collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RichTextNode;

    fn text_node(text: &str) -> RichTextNode {
        RichTextNode {
            text: Some(text.to_string()),
        }
    }

    #[test]
    fn empty_document_flattens_to_empty_string() {
        assert_eq!(flatten(&RichText::default()), "");
    }

    #[test]
    fn joins_nodes_with_single_spaces() {
        let doc = RichText {
            content: vec![text_node("A light"), text_node("everyday runner.")],
        };
        assert_eq!(flatten(&doc), "A light everyday runner.");
    }

    #[test]
    fn nodes_without_text_are_skipped() {
        let doc = RichText {
            content: vec![
                text_node("Knit upper."),
                RichTextNode { text: None },
                text_node("Gum sole."),
            ],
        };
        assert_eq!(flatten(&doc), "Knit upper. Gum sole.");
    }

    #[test]
    fn empty_text_nodes_do_not_add_separators() {
        let doc = RichText {
            content: vec![text_node(""), text_node("Gum sole.")],
        };
        assert_eq!(flatten(&doc), "Gum sole.");
    }
}
