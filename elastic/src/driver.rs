//! Per-buffer enable/disable state and modification handling.
//!
//! The host forwards its events to [`ElasticTabstops`]:
//!
//! - buffer opened/focused -> [`attach`](ElasticTabstops::attach)
//! - buffer closed -> [`detach`](ElasticTabstops::detach)
//! - preference toggled -> [`set_preference`](ElasticTabstops::set_preference)
//! - text inserted/deleted -> [`on_modified`](ElasticTabstops::on_modified)
//!
//! Every call runs to completion synchronously; the next host event sees the result.

use crate::{
    block::find_block,
    buffer::{BufferAccess, BufferId, Modification},
    error::{Error, OffsetOutOfRangeSnafu, Result},
    grid::stretch_tabstops,
    metrics::TabMetrics,
};
use rustc_hash::FxHashMap;
use std::ops::Range;
use tracing::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    /// Attached, but tab stops are not maintained.
    Disabled,
    /// Tab stops are recomputed on every modification.
    Enabled,
}

/// What a single recompute touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recompute {
    /// Lines whose tab stops were rewritten (or attempted).
    pub lines: Range<usize>,
    pub max_tabs: usize,
    /// Lines the host reported stale while writing stops.
    pub skipped_lines: Vec<usize>,
}

pub struct ElasticTabstops {
    metrics: TabMetrics,
    preference: bool,
    buffers: FxHashMap<BufferId, TrackingState>,
}

impl ElasticTabstops {
    /// Create a driver with the given metrics and initial preference value.
    pub fn new(metrics: TabMetrics, preference: bool) -> Self {
        Self {
            metrics,
            preference,
            buffers: FxHashMap::default(),
        }
    }

    pub fn metrics(&self) -> &TabMetrics {
        &self.metrics
    }

    pub fn preference(&self) -> bool {
        self.preference
    }

    pub fn state(&self, id: BufferId) -> Option<TrackingState> {
        self.buffers.get(&id).copied()
    }

    pub fn is_enabled(&self, id: BufferId) -> bool {
        self.state(id) == Some(TrackingState::Enabled)
    }

    /// Start tracking `id`, enabling it right away when the preference is on.
    pub fn attach<B: BufferAccess + ?Sized>(&mut self, id: BufferId, buffer: &mut B) -> Result<()> {
        self.buffers.entry(id).or_insert(TrackingState::Disabled);
        debug!(?id, preference = self.preference, "attached buffer");
        if self.preference {
            self.enable(id, buffer)?;
        }
        Ok(())
    }

    /// Disable `id` and forget it.
    pub fn detach<B: BufferAccess + ?Sized>(&mut self, id: BufferId, buffer: &mut B) -> Result<()> {
        self.disable(id, buffer)?;
        self.buffers.remove(&id);
        debug!(?id, "detached buffer");
        Ok(())
    }

    /// Switch `id` to Enabled and recompute the whole buffer.
    ///
    /// Does nothing if the preference is off or the buffer is already enabled. Attaches
    /// the buffer if the driver has not seen it yet.
    pub fn enable<B: BufferAccess + ?Sized>(
        &mut self,
        id: BufferId,
        buffer: &mut B,
    ) -> Result<Option<Recompute>> {
        if !self.preference || self.is_enabled(id) {
            return Ok(None);
        }

        // State only flips once the full recompute has succeeded.
        let len = buffer.len();
        let recompute = self.recompute(buffer, 0, len)?;
        self.buffers.insert(id, TrackingState::Enabled);
        debug!(?id, lines = ?recompute.lines, "enabled elastic tabstops");
        Ok(Some(recompute))
    }

    /// Switch `id` to Disabled and clear the tab stops of every line.
    ///
    /// Stale lines are logged and skipped; the remaining lines are still cleared.
    pub fn disable<B: BufferAccess + ?Sized>(&mut self, id: BufferId, buffer: &mut B) -> Result<()> {
        if !self.is_enabled(id) {
            return Ok(());
        }

        self.buffers.insert(id, TrackingState::Disabled);
        for line in 0..buffer.line_count() {
            match buffer.clear_tab_stops(line) {
                Ok(()) => {}
                Err(err @ Error::StaleLine { .. }) => {
                    warn!(line, %err, "skipping stale line while clearing tab stops");
                }
                Err(err) => return Err(err),
            }
        }
        debug!(?id, "disabled elastic tabstops");
        Ok(())
    }

    /// Record a preference change and move every given attached buffer to match it.
    ///
    /// Buffers the driver has not attached are ignored.
    pub fn set_preference<'a, B, I>(&mut self, enabled: bool, buffers: I) -> Result<()>
    where
        B: BufferAccess + ?Sized + 'a,
        I: IntoIterator<Item = (BufferId, &'a mut B)>,
    {
        self.preference = enabled;
        debug!(enabled, "elastic tabstops preference changed");

        for (id, buffer) in buffers {
            if self.state(id).is_none() {
                continue;
            }
            if enabled {
                self.enable(id, buffer)?;
            } else {
                self.disable(id, buffer)?;
            }
        }
        Ok(())
    }

    /// Handle an insert or delete that the host has already applied to `buffer`.
    ///
    /// Returns `None` when `id` is not enabled.
    pub fn on_modified<B: BufferAccess + ?Sized>(
        &mut self,
        id: BufferId,
        buffer: &mut B,
        modification: Modification,
    ) -> Result<Option<Recompute>> {
        if !self.is_enabled(id) {
            return Ok(None);
        }

        trace!(?id, ?modification, "buffer modified");
        let range = modification.affected_range();
        self.recompute(buffer, range.start, range.end).map(Some)
    }

    /// Recompute the block around `[start, end)` and write its tab stops back.
    pub fn recompute<B: BufferAccess + ?Sized>(
        &self,
        buffer: &mut B,
        start: usize,
        end: usize,
    ) -> Result<Recompute> {
        let len = buffer.len();
        if end > len || start > len {
            return OffsetOutOfRangeSnafu {
                offset: end.max(start),
                len,
            }
            .fail();
        }

        let block = find_block(&*buffer, start, end);
        if block.max_tabs == 0 {
            trace!(lines = ?block.lines(), "no columns in block, clearing stops only");
        }

        let skipped_lines = stretch_tabstops(buffer, &self.metrics, &block)?;
        Ok(Recompute {
            lines: block.lines(),
            max_tabs: block.max_tabs,
            skipped_lines,
        })
    }
}

impl Default for ElasticTabstops {
    fn default() -> Self {
        Self::new(TabMetrics::default(), true)
    }
}
