//! Line and tab scanning primitives shared by the block finder and the grid builder.

use crate::buffer::BufferAccess;

/// The only character that splits a line into cells.
pub const TAB: char = '\t';

pub fn is_tab(ch: char) -> bool {
    ch == TAB
}

/// Start offset of the line containing `pos`.
pub fn line_start<B: BufferAccess + ?Sized>(buffer: &B, pos: usize) -> usize {
    buffer.line_start(buffer.line_of(pos))
}

/// End offset (before the terminator) of the line containing `pos`.
pub fn line_end<B: BufferAccess + ?Sized>(buffer: &B, pos: usize) -> usize {
    buffer.line_end(buffer.line_of(pos))
}

pub fn is_line_end<B: BufferAccess + ?Sized>(buffer: &B, pos: usize) -> bool {
    pos == line_end(buffer, pos)
}

/// Number of tabs on `line`.
pub fn count_tabs<B: BufferAccess + ?Sized>(buffer: &B, line: usize) -> usize {
    let end = buffer.line_end(line);
    (buffer.line_start(line)..end)
        .filter_map(|pos| buffer.char_at(pos))
        .filter(|&ch| is_tab(ch))
        .count()
}

/// Largest number of tabs seen on a single line while walking `[start, end)`.
///
/// Only the part of each line inside the range is counted; the block finder covers
/// the partial first and last lines with its own full-line scans.
pub fn max_tabs_between<B: BufferAccess + ?Sized>(buffer: &B, start: usize, end: usize) -> usize {
    let mut tabs = 0;
    let mut max_tabs = 0;

    for pos in start..end.min(buffer.len()) {
        if is_line_end(buffer, pos) {
            tabs = 0;
        } else if buffer.char_at(pos).is_some_and(is_tab) {
            tabs += 1;
            max_tabs = max_tabs.max(tabs);
        }
    }

    max_tabs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBuffer;

    #[test]
    fn line_bounds_from_any_offset() {
        let buf = TextBuffer::new("ab\tc\nde");
        assert_eq!(line_start(&buf, 3), 0);
        assert_eq!(line_end(&buf, 3), 4);
        assert_eq!(line_start(&buf, 6), 5);
        assert_eq!(line_end(&buf, 6), 7);
    }

    #[test]
    fn line_end_detection() {
        let buf = TextBuffer::new("ab\n\ncd");
        assert!(!is_line_end(&buf, 0));
        assert!(is_line_end(&buf, 2));
        // Empty line: start and end coincide.
        assert!(is_line_end(&buf, 3));
        assert!(is_line_end(&buf, 6));
    }

    #[test]
    fn only_u0009_is_a_tab() {
        assert!(is_tab('\t'));
        assert!(!is_tab(' '));
        assert!(!is_tab('\u{0B}'));
    }

    #[test]
    fn counts_tabs_per_line() {
        let buf = TextBuffer::new("a\tb\tc\n\n\t");
        assert_eq!(count_tabs(&buf, 0), 2);
        assert_eq!(count_tabs(&buf, 1), 0);
        assert_eq!(count_tabs(&buf, 2), 1);
    }

    #[test]
    fn max_tabs_resets_at_line_ends() {
        let buf = TextBuffer::new("\t\t\n\t\n\t\t\t");
        assert_eq!(max_tabs_between(&buf, 0, buf.len()), 3);
        assert_eq!(max_tabs_between(&buf, 0, 5), 2);
        assert_eq!(max_tabs_between(&buf, 3, 5), 1);
        assert_eq!(max_tabs_between(&buf, 2, 2), 0);
    }
}
