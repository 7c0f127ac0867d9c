use serde::Serialize;

/// Index of a block inside its [`MarkupTree`](super::MarkupTree).
///
/// Ids are assigned in document (pre-)order, so comparing two ids compares
/// their position in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BlockId(pub(crate) usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// The kind of a converted block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// A heading, level 1..=6.
    Heading { level: u8 },
    Paragraph,
    /// A generic block container (section, div, list).
    Div,
    /// Inline formatting run.
    Span,
    Table,
    TableRow,
    TableCell,
}

impl BlockKind {
    pub fn is_heading(self) -> bool {
        matches!(self, BlockKind::Heading { .. })
    }

    pub fn is_table(self) -> bool {
        matches!(self, BlockKind::Table)
    }

    /// Inline spans flow inside their parent; everything else starts a new line of text.
    pub fn is_block_level(self) -> bool {
        !matches!(self, BlockKind::Span)
    }

    /// Kinds a header may hide in when the document does not use heading styles.
    pub fn may_hold_header(self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::Div | BlockKind::Span | BlockKind::TableCell
        )
    }

    /// Kinds that carry free text eligible for scan scoring.
    pub fn is_text_bearing(self) -> bool {
        matches!(self, BlockKind::Paragraph | BlockKind::Div)
    }

    pub fn label(self) -> String {
        match self {
            BlockKind::Heading { level } => format!("h{level}"),
            BlockKind::Paragraph => "p".into(),
            BlockKind::Div => "div".into(),
            BlockKind::Span => "span".into(),
            BlockKind::Table => "table".into(),
            BlockKind::TableRow => "tr".into(),
            BlockKind::TableCell => "td".into(),
        }
    }
}

/// A node of the converted document tree.
#[derive(Debug, Clone)]
pub struct MarkupBlock {
    /// What the converter says this block is.
    pub kind: BlockKind,
    /// Flattened visible text of the block and its descendants, trimmed.
    pub text: String,
    pub(crate) parent: Option<BlockId>,
    pub(crate) children: Vec<BlockId>,
    pub(crate) next_sibling: Option<BlockId>,
    /// Exclusive end of this block's subtree in the arena.
    pub(crate) subtree_end: usize,
}

impl MarkupBlock {
    pub fn parent(&self) -> Option<BlockId> {
        self.parent
    }

    pub fn children(&self) -> &[BlockId] {
        &self.children
    }

    pub fn next_sibling(&self) -> Option<BlockId> {
        self.next_sibling
    }

    /// Length of the trimmed text in characters.
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}
