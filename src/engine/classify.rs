//! Line classification (keyword-block selection).
//!
//! First pipeline stage: scan the raw line stream and keep only lines that
//! belong to a recognized keyword block. A block opens at a line starting with
//! a keyword from the [`KeywordSet`] and runs until a line beginning with the
//! `/` terminator; the terminator line itself is kept (downstream stages use
//! it to delimit date entries) but closes the block. Lines outside any block
//! are dropped without further inspection.

use crate::KeywordSet;

/// A retained line plus its 1-based position in the original deck.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ClassifiedLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Select the ordered sub-sequence of `text`'s lines that belong to a
/// recognized keyword block.
///
/// Once a block is open, every line is retained regardless of content until
/// the terminator; a keyword line *inside* an open block does not nest.
pub(crate) fn classify_lines(text: &str, keywords: KeywordSet) -> Vec<ClassifiedLine<'_>> {
    let mut selected = Vec::new();
    let mut in_block = false;
    for (idx, line) in text.lines().enumerate() {
        let number = idx + 1;
        if line.starts_with('/') {
            selected.push(ClassifiedLine { number, text: line });
            in_block = false;
        } else if in_block || keywords.starts_block(line) {
            in_block = true;
            selected.push(ClassifiedLine { number, text: line });
        }
    }
    selected
}
