//! Cell width rules.

use crate::{buffer::BufferAccess, error::Result};

/// Narrowest content width a tab-terminated cell is given, in pixels.
pub const MIN_TAB_WIDTH: u32 = 32;

/// Gap added after every tab-terminated cell, in pixels.
pub const TAB_PADDING: u32 = 12;

/// Pixel metrics used to turn measured cell content into a column width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabMetrics {
    pub min_tab_width: u32,
    pub tab_padding: u32,
}

impl Default for TabMetrics {
    fn default() -> Self {
        Self {
            min_tab_width: MIN_TAB_WIDTH,
            tab_padding: TAB_PADDING,
        }
    }
}

impl TabMetrics {
    pub fn new(min_tab_width: u32, tab_padding: u32) -> Self {
        Self {
            min_tab_width,
            tab_padding,
        }
    }

    /// Width of a tab-terminated cell whose text renders `content_width` pixels wide.
    ///
    /// Every tab therefore advances by at least `min_tab_width + tab_padding`.
    pub fn cell_width(&self, content_width: u32) -> u32 {
        content_width
            .max(self.min_tab_width)
            .saturating_add(self.tab_padding)
    }
}

/// Rendered width of the text in `[start, end)`, measured in the style of its first
/// character.
///
/// An empty span is zero pixels wide and never reaches the host.
pub fn measure_span<B: BufferAccess + ?Sized>(buffer: &B, start: usize, end: usize) -> Result<u32> {
    if start >= end {
        return Ok(0);
    }
    let text = buffer.text_between(start, end);
    buffer.measure_width(&text, buffer.style_at(start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextBuffer;

    #[test]
    fn narrow_cells_get_the_floor() {
        let metrics = TabMetrics::default();
        assert_eq!(metrics.cell_width(0), 44);
        assert_eq!(metrics.cell_width(31), 44);
        assert_eq!(metrics.cell_width(32), 44);
    }

    #[test]
    fn wide_cells_keep_their_width() {
        let metrics = TabMetrics::default();
        assert_eq!(metrics.cell_width(33), 45);
        assert_eq!(metrics.cell_width(100), 112);
    }

    #[test]
    fn custom_metrics() {
        let metrics = TabMetrics::new(8, 2);
        assert_eq!(metrics.cell_width(0), 10);
        assert_eq!(metrics.cell_width(24), 26);
    }

    #[test]
    fn empty_span_measures_zero() {
        let buf = TextBuffer::new("abc");
        assert_eq!(measure_span(&buf, 1, 1), Ok(0));
        assert_eq!(measure_span(&buf, 0, 3), Ok(24));
    }
}
