//! # Content Collection
//!
//! Reads the free text that follows a located header. The walk follows
//! reading flow (next sibling, else an ancestor's next sibling) and stops at
//! the next heading or at a line that looks like an untagged sub-header.
//! Tables are stepped over: their content belongs to the table pipeline.

use crate::{
    markup::{BlockId, MarkupBlock, MarkupTree},
    section::Thresholds,
};

/// Headings this short (in characters) are numbering debris, not section breaks.
pub const MAX_IGNORED_HEADING_CHARS: usize = 3;

/// Blocks shorter than this (trimmed, in characters) are skipped.
pub const MIN_COLLECTED_CHARS: usize = 3;

/// An all-caps block strictly between these lengths reads as a sub-header.
pub const INFERRED_SUBHEADER_CHARS: (usize, usize) = (5, 50);

/// Separator between collected paragraphs.
pub const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Collect,
    Skip,
    Stop,
}

/// Collects up to `max_paragraphs` blocks after `header`, joined by a blank line.
///
/// A header found in a table cell reads on from after that table.
/// Returns an empty string when nothing qualified.
pub fn collect_after(tree: &MarkupTree, header: BlockId, thresholds: &Thresholds) -> String {
    let mut collected: Vec<&str> = Vec::new();
    let mut cursor = tree.next_in_flow(flow_origin(tree, header));

    for _ in 0..thresholds.max_elements {
        let Some(id) = cursor else { break };
        match classify(tree, id) {
            Step::Stop => break,
            Step::Skip => {}
            Step::Collect => {
                collected.push(tree[id].text.trim());
                if collected.len() >= thresholds.max_paragraphs {
                    break;
                }
            }
        }
        cursor = tree.next_in_flow(id);
    }

    collected.join(PARAGRAPH_SEPARATOR)
}

/// The block whose successors follow `header`: its outermost table, if any.
pub fn flow_origin(tree: &MarkupTree, header: BlockId) -> BlockId {
    tree.outermost_table(header).unwrap_or(header)
}

fn classify(tree: &MarkupTree, id: BlockId) -> Step {
    let block = &tree[id];
    let len = block.text.trim().chars().count();

    if block.kind.is_heading() && len > MAX_IGNORED_HEADING_CHARS {
        return Step::Stop;
    }
    if looks_like_subheader(block) {
        return Step::Stop;
    }
    if block.kind.is_table() || tree.contains_table(id) {
        return Step::Skip;
    }
    if block.kind.is_heading() || len < MIN_COLLECTED_CHARS {
        return Step::Skip;
    }
    Step::Collect
}

/// Upper-case, period-free and short: "GENEL BİLGİLER".
pub fn looks_like_subheader(block: &MarkupBlock) -> bool {
    let text = block.text.trim();
    let len = text.chars().count();
    let (min, max) = INFERRED_SUBHEADER_CHARS;
    len > min
        && len < max
        && !text.contains('.')
        && text.chars().any(char::is_alphabetic)
        && !text.chars().any(char::is_lowercase)
}
