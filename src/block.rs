/// Block-level structures recognised in the input.
///
/// Text is kept raw, with only the line marker removed. Inline formatting
/// is applied when the block is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A single `#`..`######` line.
    Heading { level: u8, content: String },
    /// A run of lines starting with `"- "`.
    UnorderedList { items: Vec<String> },
    /// A run of lines starting with `"* "`.
    OrderedList { items: Vec<String> },
    /// A run of plain, non-blank lines.
    Paragraph { lines: Vec<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::UnorderedList { .. } => BlockKind::UnorderedList,
            Block::OrderedList { .. } => BlockKind::OrderedList,
            Block::Paragraph { .. } => BlockKind::Paragraph,
        }
    }

    /// Number of input lines the block was built from.
    pub fn line_count(&self) -> usize {
        match self {
            Block::Heading { .. } => 1,
            Block::UnorderedList { items } | Block::OrderedList { items } => items.len(),
            Block::Paragraph { lines } => lines.len(),
        }
    }
}
