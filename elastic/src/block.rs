//! Block boundary finder.
//!
//! Elastic tabstops couple lines transitively: a cell on one line can widen a column
//! that a neighbouring line shares with the next line, and so on. An edit therefore
//! affects every line up to the nearest line without tabs in each direction.
//!
//! ```text
//! line 0  "x = 1"          <- no tabs: backward edge
//! line 1  "a\tb\tc"
//! line 2  "aaaa\tb"        <- edit happens here
//! line 3  "\tq"
//! line 4  ""               <- no tabs: forward edge
//! ```
//!
//! The block is lines 0..=4 and its column count is 2.

use crate::{buffer::BufferAccess, scan};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

/// Where a directional scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockEdge {
    /// Last line reached: the first line without tabs, or the buffer's first/last line.
    pub line: usize,
    /// Most tabs seen on any one line before the edge.
    pub max_tabs: usize,
}

/// Lines whose tab stops must be recomputed for an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub start_line: usize,
    /// Exclusive.
    pub end_line: usize,
    /// Number of columns the grid needs.
    pub max_tabs: usize,
}

impl Block {
    pub fn lines(&self) -> std::ops::Range<usize> {
        self.start_line..self.end_line
    }

    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line
    }
}

/// Walk from the line containing `offset` in `direction` until a line without tabs.
///
/// The starting line never ends the walk, since it may be mid-edit. Reaching the start
/// or end of the buffer ends it normally.
pub fn scan_block_edge<B: BufferAccess + ?Sized>(
    buffer: &B,
    offset: usize,
    direction: Direction,
) -> BlockEdge {
    let last_line = buffer.line_count().saturating_sub(1);
    let mut line = buffer.line_of(offset);
    let mut max_tabs = 0;
    let mut orig_line = true;

    loop {
        let tabs = scan::count_tabs(buffer, line);
        if tabs == 0 && !orig_line {
            break;
        }
        max_tabs = max_tabs.max(tabs);
        orig_line = false;

        line = match direction {
            Direction::Backward if line > 0 => line - 1,
            Direction::Forward if line < last_line => line + 1,
            _ => break,
        };
    }

    BlockEdge { line, max_tabs }
}

/// Find the block affected by an edit covering `[start, end)`.
///
/// The column count is the largest of the backward scan, the forward scan and the
/// edited span itself, since the edit may introduce more tabs than either neighbour.
pub fn find_block<B: BufferAccess + ?Sized>(buffer: &B, start: usize, end: usize) -> Block {
    let end = end.max(start);
    let backward = scan_block_edge(buffer, start, Direction::Backward);
    let forward = scan_block_edge(buffer, end, Direction::Forward);
    let between = scan::max_tabs_between(buffer, start, end);

    Block {
        start_line: backward.line,
        end_line: forward.line + 1,
        max_tabs: backward.max_tabs.max(forward.max_tabs).max(between),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBuffer;

    #[test]
    fn stops_at_first_line_without_tabs() {
        let buf = TextBuffer::new("x = 1\na\tb\tc\naaaa\tb\n\tq\n");
        let edit = buf.line_start(2);

        let back = scan_block_edge(&buf, edit, Direction::Backward);
        assert_eq!(back, BlockEdge { line: 0, max_tabs: 2 });

        let fwd = scan_block_edge(&buf, edit, Direction::Forward);
        assert_eq!(fwd, BlockEdge { line: 4, max_tabs: 1 });

        let block = find_block(&buf, edit, edit);
        assert_eq!(
            block,
            Block {
                start_line: 0,
                end_line: 5,
                max_tabs: 2
            }
        );
    }

    #[test]
    fn starting_line_without_tabs_does_not_stop_the_scan() {
        let buf = TextBuffer::new("a\tb\nplain\nc\td\te");
        let edit = buf.line_start(1);

        let back = scan_block_edge(&buf, edit, Direction::Backward);
        assert_eq!(back, BlockEdge { line: 0, max_tabs: 1 });

        let fwd = scan_block_edge(&buf, edit, Direction::Forward);
        assert_eq!(fwd, BlockEdge { line: 2, max_tabs: 2 });
    }

    #[test]
    fn buffer_edges_end_the_scan() {
        let buf = TextBuffer::new("a\tb\nc\td");
        assert_eq!(
            find_block(&buf, 0, buf.len()),
            Block {
                start_line: 0,
                end_line: 2,
                max_tabs: 1
            }
        );
    }

    #[test]
    fn edited_span_can_raise_the_column_count() {
        // Both edge scans stop at the buffer ends before reaching the middle line;
        // only the span scan sees its three tabs.
        let buf = TextBuffer::new("a\tb\n\t\t\t\nc\td");
        let block = find_block(&buf, 0, buf.len());
        assert_eq!(block.max_tabs, 3);
        assert_eq!(block.lines(), 0..3);
    }

    #[test]
    fn blank_line_splits_blocks() {
        let buf = TextBuffer::new("a\tb\n\nc\td\n");
        let first = find_block(&buf, 0, 0);
        assert_eq!(first.lines(), 0..2);

        let second = find_block(&buf, buf.line_start(2), buf.line_start(2));
        assert_eq!(second.lines(), 1..4);
    }

    #[test]
    fn pure_text_edit_has_no_columns() {
        let buf = TextBuffer::new("one\ntwo\nthree");
        let block = find_block(&buf, 4, 5);
        assert_eq!(block.max_tabs, 0);
        assert_eq!(block.lines(), 0..3);
    }
}
