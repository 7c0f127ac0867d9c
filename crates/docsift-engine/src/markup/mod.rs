//! # Markup Tree
//!
//! The engine's view of a converted document: a tree of headings,
//! paragraphs, containers, spans and tables, stored as an arena in document
//! order.
//!
//! ## Modules
//!
//! - **`types`**: `BlockId`, `BlockKind`, `MarkupBlock`
//! - **`builder`**: `TreeBuilder`, the event-driven constructor converters use
//!
//! ## Key Invariants
//!
//! - Block ids are assigned in pre-order, so id order is document order
//! - A block's descendants occupy the contiguous id range right after it
//! - `next_sibling` is navigation only; ownership is the arena's
//! - A tree belongs to exactly one parse and is dropped when it ends

pub mod builder;
pub mod types;

use std::ops::Index;

pub use builder::TreeBuilder;
pub use types::{BlockId, BlockKind, MarkupBlock};

#[derive(Debug, Clone, Default)]
pub struct MarkupTree {
    pub(crate) blocks: Vec<MarkupBlock>,
    pub(crate) roots: Vec<BlockId>,
}

impl MarkupTree {
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: BlockId) -> Option<&MarkupBlock> {
        self.blocks.get(id.0)
    }

    /// Top-level blocks in document order.
    pub fn roots(&self) -> &[BlockId] {
        &self.roots
    }

    /// Every block in document order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &MarkupBlock)> {
        self.blocks.iter().enumerate().map(|(i, b)| (BlockId(i), b))
    }

    pub fn children(&self, id: BlockId) -> &[BlockId] {
        &self.blocks[id.0].children
    }

    /// All blocks below `id`, in document order.
    pub fn descendants(&self, id: BlockId) -> impl Iterator<Item = BlockId> {
        (id.0 + 1..self.blocks[id.0].subtree_end).map(BlockId)
    }

    /// Blocks above `id`, innermost first.
    pub fn ancestors(&self, id: BlockId) -> impl Iterator<Item = BlockId> + '_ {
        std::iter::successors(self.blocks[id.0].parent, |p| self.blocks[p.0].parent)
    }

    /// Next block in reading flow: the next sibling, or failing that the next
    /// sibling of the closest ancestor that has one.
    pub fn next_in_flow(&self, id: BlockId) -> Option<BlockId> {
        if let Some(next) = self.blocks[id.0].next_sibling {
            return Some(next);
        }
        self.ancestors(id)
            .find_map(|ancestor| self.blocks[ancestor.0].next_sibling)
    }

    pub fn contains_table(&self, id: BlockId) -> bool {
        self.descendants(id)
            .any(|d| self.blocks[d.0].kind.is_table())
    }

    pub fn is_inside_table(&self, id: BlockId) -> bool {
        self.ancestors(id).any(|a| self.blocks[a.0].kind.is_table())
    }

    /// The outermost table holding `id`, if any.
    pub fn outermost_table(&self, id: BlockId) -> Option<BlockId> {
        self.ancestors(id)
            .filter(|&a| self.blocks[a.0].kind.is_table())
            .last()
    }

    /// Tables in document order, outermost before nested.
    pub fn tables(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.iter()
            .filter(|(_, b)| b.kind.is_table())
            .map(|(id, _)| id)
    }

    /// Direct rows of a table.
    pub fn rows(&self, table: BlockId) -> Vec<BlockId> {
        self.children_of_kind(table, BlockKind::TableRow)
    }

    /// Direct cells of a row.
    pub fn cells(&self, row: BlockId) -> Vec<BlockId> {
        self.children_of_kind(row, BlockKind::TableCell)
    }

    /// Trimmed text of every cell in a row.
    pub fn cell_texts(&self, row: BlockId) -> Vec<&str> {
        self.cells(row)
            .into_iter()
            .map(|c| self.blocks[c.0].text.as_str())
            .collect()
    }

    pub fn depth(&self, id: BlockId) -> usize {
        self.ancestors(id).count()
    }

    /// One line per block, indented by depth. Used by the CLI's `outline` command.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for (id, block) in self.iter() {
            let indent = "  ".repeat(self.depth(id));
            let mut preview: String = block.text.chars().take(60).collect();
            if block.text.chars().count() > 60 {
                preview.push('…');
            }
            let preview = preview.replace('\n', " ⏎ ");
            out.push_str(&format!(
                "{indent}{}#{} {preview}\n",
                block.kind.label(),
                id.0
            ));
        }
        out
    }

    fn children_of_kind(&self, id: BlockId, kind: BlockKind) -> Vec<BlockId> {
        self.blocks[id.0]
            .children
            .iter()
            .copied()
            .filter(|c| self.blocks[c.0].kind == kind)
            .collect()
    }
}

impl Index<BlockId> for MarkupTree {
    type Output = MarkupBlock;

    fn index(&self, id: BlockId) -> &MarkupBlock {
        &self.blocks[id.0]
    }
}
