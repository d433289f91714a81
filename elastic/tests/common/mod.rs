#![allow(dead_code)]

use elastic_tabstops::{BufferAccess, Error, Result, StyleId, TextBuffer};

/// Wraps a [`TextBuffer`] and records every tab-stop write the engine makes.
pub struct Recording {
    pub inner: TextBuffer,
    pub cleared: Vec<usize>,
    pub added: Vec<(usize, u32)>,
    /// Lines that report [`Error::StaleLine`] on write.
    pub stale: Vec<usize>,
    /// Measuring text containing this marker fails.
    pub unmeasurable: Option<&'static str>,
}

impl Recording {
    pub fn new(text: &str) -> Self {
        Self::with_char_width(text, 8)
    }

    pub fn with_char_width(text: &str, char_width: u32) -> Self {
        Self {
            inner: TextBuffer::with_char_width(text, char_width),
            cleared: Vec::new(),
            added: Vec::new(),
            stale: Vec::new(),
            unmeasurable: None,
        }
    }

    pub fn reset(&mut self) {
        self.cleared.clear();
        self.added.clear();
    }

    /// Lines touched by a clear or add since the last reset, sorted and deduplicated.
    pub fn touched_lines(&self) -> Vec<usize> {
        let mut lines: Vec<usize> = self
            .cleared
            .iter()
            .copied()
            .chain(self.added.iter().map(|&(line, _)| line))
            .collect();
        lines.sort_unstable();
        lines.dedup();
        lines
    }

    pub fn stops(&self, line: usize) -> Vec<u32> {
        self.inner.tab_stops(line).to_vec()
    }

    pub fn all_stops(&self) -> Vec<Vec<u32>> {
        (0..self.inner.line_count()).map(|l| self.stops(l)).collect()
    }

    fn check_stale(&self, line: usize) -> Result<()> {
        if self.stale.contains(&line) {
            return Err(Error::StaleLine {
                line,
                line_count: self.inner.line_count(),
            });
        }
        Ok(())
    }
}

impl BufferAccess for Recording {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.inner.char_at(offset)
    }

    fn line_count(&self) -> usize {
        self.inner.line_count()
    }

    fn line_of(&self, offset: usize) -> usize {
        self.inner.line_of(offset)
    }

    fn line_start(&self, line: usize) -> usize {
        self.inner.line_start(line)
    }

    fn line_end(&self, line: usize) -> usize {
        self.inner.line_end(line)
    }

    fn text_between(&self, start: usize, end: usize) -> String {
        self.inner.text_between(start, end)
    }

    fn style_at(&self, offset: usize) -> StyleId {
        self.inner.style_at(offset)
    }

    fn measure_width(&self, text: &str, style: StyleId) -> Result<u32> {
        if let Some(marker) = self.unmeasurable {
            if text.contains(marker) {
                return Err(Error::Measure {
                    len: text.chars().count(),
                    message: "font unavailable".to_string(),
                });
            }
        }
        self.inner.measure_width(text, style)
    }

    fn clear_tab_stops(&mut self, line: usize) -> Result<()> {
        self.check_stale(line)?;
        self.cleared.push(line);
        self.inner.clear_tab_stops(line)
    }

    fn add_tab_stop(&mut self, line: usize, offset: u32) -> Result<()> {
        self.check_stale(line)?;
        self.added.push((line, offset));
        self.inner.add_tab_stop(line, offset)
    }
}
