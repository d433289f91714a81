//! In-memory [`BufferAccess`] implementation backed by a [`ropey::Rope`].
//!
//! Measures text as a monospace font would: every display column (as reported by
//! [`unicode_width`]) is `char_width` pixels wide. Tab stops are stored per line and
//! shifted along with the lines when text is inserted or deleted, the way an editor
//! widget keeps per-line annotations attached to their lines.

use crate::{
    buffer::{BufferAccess, Modification, StyleId},
    error::{OffsetOutOfRangeSnafu, Result, StaleLineSnafu},
};
use ropey::Rope;
use std::ops::Range;
use unicode_width::UnicodeWidthStr;

/// Pixel width of one monospace column when none is configured.
pub const DEFAULT_CHAR_WIDTH: u32 = 8;

pub struct TextBuffer {
    rope: Rope,
    char_width: u32,
    /// One entry per line, always `rope.len_lines()` long.
    tab_stops: Vec<Vec<u32>>,
}

impl TextBuffer {
    pub fn new(text: &str) -> Self {
        Self::with_char_width(text, DEFAULT_CHAR_WIDTH)
    }

    pub fn with_char_width(text: &str, char_width: u32) -> Self {
        let rope = Rope::from_str(text);
        let tab_stops = vec![Vec::new(); rope.len_lines()];
        Self {
            rope,
            char_width,
            tab_stops,
        }
    }

    pub fn char_width(&self) -> u32 {
        self.char_width
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text of `line` without its terminator.
    pub fn line_text(&self, line: usize) -> String {
        self.text_between(self.line_start(line), self.line_end(line))
    }

    /// Tab stops currently set on `line`. Empty for lines that do not exist.
    pub fn tab_stops(&self, line: usize) -> &[u32] {
        self.tab_stops.get(line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Insert `text` at `offset`, returning the notification the host would deliver.
    pub fn insert(&mut self, offset: usize, text: &str) -> Result<Modification> {
        self.check_offset(offset)?;

        let line = self.rope.char_to_line(offset);
        let lines_before = self.rope.len_lines();
        self.rope.insert(offset, text);
        let added = self.rope.len_lines().saturating_sub(lines_before);

        for _ in 0..added {
            self.tab_stops.insert(line + 1, Vec::new());
        }

        Ok(Modification::insert(offset, text))
    }

    /// Delete the characters in `range`, returning the notification the host would
    /// deliver.
    pub fn delete(&mut self, range: Range<usize>) -> Result<Modification> {
        if range.start > range.end {
            return OffsetOutOfRangeSnafu {
                offset: range.start,
                len: self.rope.len_chars(),
            }
            .fail();
        }
        self.check_offset(range.end)?;

        let deleted = self.rope.slice(range.clone()).to_string();
        let line = self.rope.char_to_line(range.start);
        let lines_before = self.rope.len_lines();
        self.rope.remove(range.clone());
        let removed = lines_before.saturating_sub(self.rope.len_lines());

        let at = line + 1;
        self.tab_stops.drain(at..at + removed);

        Ok(Modification::delete(range.start, &deleted))
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        let len = self.rope.len_chars();
        if offset > len {
            return OffsetOutOfRangeSnafu { offset, len }.fail();
        }
        Ok(())
    }

    fn check_line(&self, line: usize) -> Result<()> {
        let line_count = self.tab_stops.len();
        if line >= line_count {
            return StaleLineSnafu { line, line_count }.fail();
        }
        Ok(())
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl BufferAccess for TextBuffer {
    fn len(&self) -> usize {
        self.rope.len_chars()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        (offset < self.rope.len_chars()).then(|| self.rope.char(offset))
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn line_of(&self, offset: usize) -> usize {
        self.rope.char_to_line(offset.min(self.rope.len_chars()))
    }

    fn line_start(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(line)
    }

    fn line_end(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        if len > 0 && is_line_break(slice.char(len - 1)) {
            let last = slice.char(len - 1);
            len -= 1;
            if last == '\n' && len > 0 && slice.char(len - 1) == '\r' {
                len -= 1;
            }
        }
        self.rope.line_to_char(line) + len
    }

    fn text_between(&self, start: usize, end: usize) -> String {
        let len = self.rope.len_chars();
        let end = end.min(len);
        let start = start.min(end);
        self.rope.slice(start..end).to_string()
    }

    fn style_at(&self, _offset: usize) -> StyleId {
        StyleId::default()
    }

    fn measure_width(&self, text: &str, _style: StyleId) -> Result<u32> {
        let columns = u32::try_from(text.width()).unwrap_or(u32::MAX);
        Ok(columns.saturating_mul(self.char_width))
    }

    fn clear_tab_stops(&mut self, line: usize) -> Result<()> {
        self.check_line(line)?;
        self.tab_stops[line].clear();
        Ok(())
    }

    fn add_tab_stop(&mut self, line: usize, offset: u32) -> Result<()> {
        self.check_line(line)?;
        self.tab_stops[line].push(offset);
        Ok(())
    }
}
