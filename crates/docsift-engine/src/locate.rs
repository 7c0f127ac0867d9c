//! # Header Location
//!
//! Finds where a section starts. Heading-styled blocks are tried first; only
//! when no heading matches are ordinary short blocks considered, because
//! plenty of documents type their section titles as bold paragraphs or put
//! them in a table cell.
//!
//! Within a pass the first match in document order is authoritative. There
//! is no scoring here; ranking is scan mode's job.

use crate::{
    dictionary::LabelDictionary,
    markup::{BlockId, MarkupTree},
    normalize::normalize,
};

/// Shortest block text (in characters) the loose pass treats as a header.
pub const MIN_LOOSE_HEADER_CHARS: usize = 5;

/// Longest block text (in characters) the loose pass treats as a header.
pub const MAX_LOOSE_HEADER_CHARS: usize = 100;

/// Which pass produced a header match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderPass {
    /// A heading-kind block.
    Heading,
    /// A short paragraph, container, span or table cell.
    Loose,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMatch {
    pub block: BlockId,
    /// The normalized dictionary synonym that matched.
    pub synonym: String,
    pub pass: HeaderPass,
}

pub fn find_header(tree: &MarkupTree, dictionary: &LabelDictionary) -> Option<HeaderMatch> {
    find_in_pass(tree, dictionary, HeaderPass::Heading)
        .or_else(|| find_in_pass(tree, dictionary, HeaderPass::Loose))
}

fn find_in_pass(
    tree: &MarkupTree,
    dictionary: &LabelDictionary,
    pass: HeaderPass,
) -> Option<HeaderMatch> {
    tree.iter()
        .filter(|(_, block)| match pass {
            HeaderPass::Heading => block.kind.is_heading(),
            HeaderPass::Loose => {
                block.kind.may_hold_header()
                    && (MIN_LOOSE_HEADER_CHARS..=MAX_LOOSE_HEADER_CHARS)
                        .contains(&block.text_len())
            }
        })
        .find_map(|(id, block)| {
            dictionary
                .match_header(&normalize(&block.text))
                .map(|synonym| HeaderMatch {
                    block: id,
                    synonym: synonym.to_string(),
                    pass,
                })
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{
        BlockKind, TreeBuilder,
        test_support::{heading, leaf, para, table},
    };

    fn dict() -> LabelDictionary {
        LabelDictionary::builder()
            .headers(&["Amaç ve Kapsam", "Purpose and Scope"])
            .build()
    }

    #[test]
    fn heading_wins_over_earlier_paragraph() {
        let mut b = TreeBuilder::new();
        para(&mut b, "Amaç ve Kapsam");
        para(&mut b, "Giriş metni.");
        let h = heading(&mut b, 2, "1. Amaç ve Kapsam");
        let tree = b.finish();

        let found = find_header(&tree, &dict()).unwrap();
        assert_eq!(found.block, h);
        assert_eq!(found.pass, HeaderPass::Heading);
        assert_eq!(found.synonym, "amac ve kapsam");
    }

    #[test]
    fn falls_back_to_short_blocks() {
        let mut b = TreeBuilder::new();
        heading(&mut b, 1, "Analiz Dokümanı");
        let p = para(&mut b, "Purpose and Scope");
        let tree = b.finish();

        let found = find_header(&tree, &dict()).unwrap();
        assert_eq!(found.block, p);
        assert_eq!(found.pass, HeaderPass::Loose);
    }

    #[test]
    fn loose_pass_ignores_long_blocks() {
        let long = format!("Bu paragraf amaç ve kapsam ifadesini içeriyor {}", "x".repeat(80));
        let mut b = TreeBuilder::new();
        para(&mut b, &long);
        leaf(&mut b, BlockKind::Span, "Ama");
        let tree = b.finish();
        assert_eq!(find_header(&tree, &dict()), None);
    }

    #[test]
    fn header_may_sit_in_a_table_cell() {
        let mut b = TreeBuilder::new();
        table(&mut b, &[&["Amaç ve Kapsam"]]);
        let tree = b.finish();
        let found = find_header(&tree, &dict()).unwrap();
        assert_eq!(tree[found.block].kind, BlockKind::TableCell);
    }

    #[test]
    fn empty_tree_has_no_header() {
        assert_eq!(find_header(&MarkupTree::default(), &dict()), None);
    }
}
