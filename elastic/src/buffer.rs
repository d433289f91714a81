//! The host capability interface consumed by the engine.
//!
//! The engine never owns buffer content. Everything it knows about text, line layout,
//! fonts and tab stops comes through [`BufferAccess`], which the host editor implements
//! over its own widget. [`crate::TextBuffer`] is an in-memory implementation used by the
//! command-line front end and the tests.

use crate::error::Result;

/// Identifies one open buffer to the [`crate::ElasticTabstops`] driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(pub u64);

/// Host style (font) identifier passed back to [`BufferAccess::measure_width`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleId(pub u32);

/// Read access to a host buffer plus the two tab-stop mutations the engine needs.
///
/// Offsets are character offsets into the whole buffer. Line end offsets exclude the
/// line terminator, so `line_end(l) == line_start(l)` for an empty line.
pub trait BufferAccess {
    /// Total number of characters in the buffer.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The character at `offset`, or `None` at (or past) the end of the buffer.
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Number of lines. Always at least one.
    fn line_count(&self) -> usize;

    /// Line containing `offset`. Offsets past the end map to the last line.
    fn line_of(&self, offset: usize) -> usize;

    fn line_start(&self, line: usize) -> usize;

    fn line_end(&self, line: usize) -> usize;

    fn text_between(&self, start: usize, end: usize) -> String;

    /// Style of the character at `offset`, used to pick the font for measurement.
    fn style_at(&self, offset: usize) -> StyleId;

    /// Rendered width of `text` in `style`, in whole device pixels.
    fn measure_width(&self, text: &str, style: StyleId) -> Result<u32>;

    /// Remove every tab stop on `line`.
    fn clear_tab_stops(&mut self, line: usize) -> Result<()>;

    /// Add a tab stop at `offset` pixels on `line`. Called in increasing offset order
    /// after [`clear_tab_stops`](Self::clear_tab_stops).
    fn add_tab_stop(&mut self, line: usize, offset: u32) -> Result<()>;
}

/// Kind of buffer change delivered to [`crate::ElasticTabstops::on_modified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModificationKind {
    Insert,
    Delete,
}

/// A single insert or delete reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modification {
    /// Offset of the change.
    pub offset: usize,
    pub kind: ModificationKind,
    /// Length in characters of the inserted or deleted text.
    pub len: usize,
}

impl Modification {
    pub fn insert(offset: usize, text: &str) -> Self {
        Self {
            offset,
            kind: ModificationKind::Insert,
            len: text.chars().count(),
        }
    }

    pub fn delete(offset: usize, text: &str) -> Self {
        Self {
            offset,
            kind: ModificationKind::Delete,
            len: text.chars().count(),
        }
    }

    /// Character range the recompute has to cover once the change is applied.
    ///
    /// An insert covers the new text; a delete collapses to the point it happened at.
    pub fn affected_range(&self) -> std::ops::Range<usize> {
        match self.kind {
            ModificationKind::Insert => self.offset..self.offset.saturating_add(self.len),
            ModificationKind::Delete => self.offset..self.offset,
        }
    }
}
