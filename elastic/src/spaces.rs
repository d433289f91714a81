//! Render elastic tab stops as plain spaces.
//!
//! Once a [`TextBuffer`] has its tab stops computed, each tab can be replaced by enough
//! spaces to reach its stop in a monospace font, producing text that stays aligned in
//! editors without elastic tabstop support.

use crate::{buffer::BufferAccess, text_buffer::TextBuffer};
use unicode_width::UnicodeWidthChar;

/// Expand every tab in `buffer` to spaces, using its current tab stops.
///
/// Stop offsets are converted to columns with the buffer's `char_width`, rounding up.
/// A tab without a stop advances to the next multiple of `fallback_tab_columns`, as a
/// fixed tab width would.
pub fn expand_to_spaces(buffer: &TextBuffer, fallback_tab_columns: usize) -> String {
    let fallback = fallback_tab_columns.max(1);
    let char_width = buffer.char_width().max(1) as usize;
    let line_count = buffer.line_count();
    let mut out = String::with_capacity(buffer.len());

    for line in 0..line_count {
        let stops = buffer.tab_stops(line);
        let mut column = 0;
        let mut tab_index = 0;

        for ch in buffer.line_text(line).chars() {
            if ch != '\t' {
                out.push(ch);
                column += ch.width().unwrap_or(0);
                continue;
            }

            let target = match stops.get(tab_index) {
                Some(&stop) => (stop as usize).div_ceil(char_width),
                None => (column / fallback + 1) * fallback,
            };
            let pad = target.saturating_sub(column).max(1);
            out.push_str(&" ".repeat(pad));
            column += pad;
            tab_index += 1;
        }

        if line + 1 < line_count {
            out.push_str(&buffer.text_between(buffer.line_end(line), buffer.line_start(line + 1)));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ElasticTabstops;

    fn aligned(text: &str) -> String {
        let mut buf = TextBuffer::with_char_width(text, 4);
        let len = buf.len();
        ElasticTabstops::default()
            .recompute(&mut buf, 0, len)
            .unwrap();
        expand_to_spaces(&buf, 4)
    }

    #[test]
    fn columns_line_up() {
        let out = aligned("a\tb\nlonger cell\tc\n");
        // Widest cell is 11 columns (44px), stretched to 56px = 14 columns.
        assert_eq!(out, "a             b\nlonger cell   c\n");
    }

    #[test]
    fn blank_line_separates_blocks() {
        let out = aligned("a\tb\n\nlonger cell\tc");
        // 4px per column: floor of 44px is 11 columns.
        assert_eq!(out, "a          b\n\nlonger cell   c");
    }

    #[test]
    fn tabs_without_stops_use_fallback() {
        let buf = TextBuffer::with_char_width("ab\tc", 4);
        assert_eq!(expand_to_spaces(&buf, 4), "ab  c");
    }

    #[test]
    fn keeps_crlf_terminators() {
        let out = aligned("a\tb\r\nc\td");
        assert_eq!(out, "a          b\r\nc          d");
    }
}
