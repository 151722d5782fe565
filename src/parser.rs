use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::block::Block;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").unwrap());

const DASH_MARKER: &str = "- ";
const STAR_MARKER: &str = "* ";

/// Split input lines into blocks with a single forward scan.
///
/// Blank lines only separate blocks. A line starting with `#` that is not a
/// well-formed heading is dropped without output.
pub fn parse<S: AsRef<str>>(lines: &[S]) -> Vec<Block> {
    let mut state = ScanState::new(lines);
    let mut blocks = Vec::new();

    while let Some(line) = state.current() {
        let block = if line.starts_with('#') {
            state.advance();
            parse_heading(line)
        } else if line.starts_with(DASH_MARKER) {
            Some(Block::UnorderedList {
                items: state.take_items(DASH_MARKER),
            })
        } else if line.starts_with(STAR_MARKER) {
            Some(Block::OrderedList {
                items: state.take_items(STAR_MARKER),
            })
        } else if !is_blank(line) {
            Some(Block::Paragraph {
                lines: state.take_paragraph(),
            })
        } else {
            state.advance();
            None
        };

        if let Some(block) = block {
            debug!(kind = ?block.kind(), lines = block.line_count(), "block");
            blocks.push(block);
        }
    }

    blocks
}

/// Cursor over the input. Nothing behind it is revisited.
struct ScanState<'a, S> {
    lines: &'a [S],
    pos: usize,
}

impl<'a, S: AsRef<str>> ScanState<'a, S> {
    fn new(lines: &'a [S]) -> Self {
        Self { lines, pos: 0 }
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.pos).map(AsRef::as_ref)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume consecutive lines carrying `marker`, returning their text after it.
    fn take_items(&mut self, marker: &str) -> Vec<String> {
        let mut items = Vec::new();
        while let Some(item) = self.current().and_then(|line| line.strip_prefix(marker)) {
            items.push(item.to_string());
            self.advance();
        }
        items
    }

    fn take_paragraph(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.current().filter(|line| continues_paragraph(line)) {
            lines.push(line.to_string());
            self.advance();
        }
        lines
    }
}

fn parse_heading(line: &str) -> Option<Block> {
    let caps = HEADING.captures(line)?;
    Some(Block::Heading {
        level: caps[1].len() as u8,
        content: caps[2].to_string(),
    })
}

fn continues_paragraph(line: &str) -> bool {
    !is_blank(line)
        && !line.starts_with('#')
        && !line.starts_with(DASH_MARKER)
        && !line.starts_with(STAR_MARKER)
}

/// Whitespace-only, counting the `\x1c`..`\x1f` separators as whitespace.
fn is_blank(line: &str) -> bool {
    line.chars()
        .all(|ch| ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch))
}
