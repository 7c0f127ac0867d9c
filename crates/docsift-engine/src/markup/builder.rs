use super::{
    MarkupTree,
    types::{BlockId, BlockKind, MarkupBlock},
};

/// Builds a [`MarkupTree`] from a stream of open/text/close events.
///
/// Converters drive the builder while they walk their source format. Text
/// pushed while several blocks are open belongs to all of them, which is how
/// a table row ends up with the flattened text of its cells.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    blocks: Vec<MarkupBlock>,
    roots: Vec<BlockId>,
    open: Vec<BlockId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a block as the last child of the innermost open block.
    pub fn open(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId(self.blocks.len());
        let parent = self.open.last().copied();

        let prev = match parent {
            Some(p) => self.blocks[p.0].children.last().copied(),
            None => self.roots.last().copied(),
        };
        if let Some(prev) = prev {
            self.blocks[prev.0].next_sibling = Some(id);
        }
        match parent {
            Some(p) => self.blocks[p.0].children.push(id),
            None => self.roots.push(id),
        }

        if kind.is_block_level() {
            for &ancestor in &self.open {
                let text = &mut self.blocks[ancestor.0].text;
                if !text.is_empty() && !text.ends_with(char::is_whitespace) {
                    text.push('\n');
                }
            }
        }

        self.blocks.push(MarkupBlock {
            kind,
            text: String::new(),
            parent,
            children: Vec::new(),
            next_sibling: None,
            subtree_end: id.0 + 1,
        });
        self.open.push(id);
        id
    }

    /// Appends visible text to every open block.
    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for &id in &self.open {
            self.blocks[id.0].text.push_str(text);
        }
    }

    /// Re-labels the innermost open block, e.g. once a paragraph style says it is a heading.
    pub fn set_kind(&mut self, kind: BlockKind) {
        if let Some(&id) = self.open.last() {
            self.blocks[id.0].kind = kind;
        }
    }

    /// The innermost open block.
    pub fn current(&self) -> Option<BlockId> {
        self.open.last().copied()
    }

    pub fn current_kind(&self) -> Option<BlockKind> {
        self.current().map(|id| self.blocks[id.0].kind)
    }

    /// Number of currently open blocks.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Closes the innermost open block. Closing with nothing open is a no-op.
    pub fn close(&mut self) -> Option<BlockId> {
        let id = self.open.pop()?;
        let end = self.blocks.len();
        let block = &mut self.blocks[id.0];
        block.subtree_end = end;
        let trimmed = block.text.trim();
        if trimmed.len() != block.text.len() {
            block.text = trimmed.to_string();
        }
        Some(id)
    }

    /// Closes any blocks left open and returns the tree.
    pub fn finish(mut self) -> MarkupTree {
        while self.close().is_some() {}
        MarkupTree {
            blocks: self.blocks,
            roots: self.roots,
        }
    }
}
