//! Indentation handling for the pytok tokenizer
//!
//! Implements Python-style INDENT/DEINDENT tokens from a stack of open indent widths.

use super::LineScanner;
use super::tokens::TokenKind;

/// Tabs advance the indent width to the next multiple of this value.
pub const TAB_WIDTH: usize = 8;

/// Widths of the currently open blocks, strictly increasing from the bottom sentinel `0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct IndentStack {
    levels: Vec<usize>,
}

/// How a new logical line's indentation relates to the open blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IndentChange {
    Same,
    Indent,
    /// Number of blocks closed.
    Deindent(usize),
}

impl IndentStack {
    pub fn new() -> Self {
        Self { levels: vec![0] }
    }

    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    pub fn top(&self) -> usize {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Align the stack with a line indented by `width` columns.
    ///
    /// Deeper lines open one block. Shallower lines close blocks until the top is no deeper than `width`; landing
    /// between two open levels is accepted without complaint. The bottom `0` is never popped.
    pub fn align(&mut self, width: usize) -> IndentChange {
        let top = self.top();
        if width > top {
            self.levels.push(width);
            return IndentChange::Indent;
        }

        let mut closed = 0;
        while self.levels.len() > 1 && width < self.top() {
            self.levels.pop();
            closed += 1;
        }
        if closed == 0 {
            IndentChange::Same
        } else {
            IndentChange::Deindent(closed)
        }
    }
}

/// Advance an indent width past one leading whitespace character.
fn advance_width(width: usize, c: char) -> usize {
    match c {
        ' ' => width + 1,
        '\t' => width + TAB_WIDTH - width % TAB_WIDTH,
        // Form feeds and stray carriage returns take no columns.
        _ => width,
    }
}

impl LineScanner<'_> {
    /// Consume leading whitespace and emit INDENT/DEINDENT tokens for the new logical line.
    pub(super) fn handle_indentation(&mut self) {
        let mut width = 0;
        while let Some(c) = self.cursor.current() {
            if !c.is_ascii_whitespace() {
                break;
            }
            width = advance_width(width, c);
            self.cursor.skip(1);
        }

        match self.state.indents.align(width) {
            IndentChange::Same => {}
            IndentChange::Indent => self.emit_marker(TokenKind::Indent),
            IndentChange::Deindent(count) => {
                for _ in 0..count {
                    self.emit_marker(TokenKind::Deindent);
                }
            }
        }
    }
}
