//! Grid builder and stretcher.
//!
//! Builds a `line x column` grid of cells for a block of lines, groups vertically
//! adjacent tab-terminated cells into column blocks, and turns each line's columns into
//! cumulative tab stops.
//!
//! ```text
//! "a\tbb"      | a   | bb        column 0 block: lines 0-1, widest = width("ccc")
//! "ccc\tdd"    | ccc | dd
//! ""           (closes every open column block)
//! ```
//!
//! Each column block owns its widest width exactly once; member cells refer to the block
//! by index and read the shared value when tab stops are emitted.

use crate::{
    block::Block,
    buffer::BufferAccess,
    error::{Error, Result},
    metrics::{measure_span, TabMetrics},
    scan,
};
use smallvec::SmallVec;
use tracing::{trace, warn};

/// One column's worth of text on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub start: usize,
    pub end: usize,
    /// Stretched width (`TabMetrics::cell_width`) for tab-terminated cells, else 0.
    pub text_width_pix: u32,
    pub ends_in_tab: bool,
    /// Index into [`Grid::blocks`] of the column block this cell belongs to.
    pub block: Option<usize>,
}

/// Maximal run of lines whose cell in `column` ends in a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBlock {
    pub column: usize,
    /// Grid row of the first member line.
    pub first_line: usize,
    /// Exclusive.
    pub end_line: usize,
    pub widest_width_pix: u32,
}

#[derive(Debug, Default)]
struct Row {
    cells: SmallVec<[Cell; 8]>,
    num_tabs: usize,
}

#[derive(Debug)]
pub struct Grid {
    /// Buffer line of grid row 0.
    start_line: usize,
    max_tabs: usize,
    rows: Vec<Row>,
    blocks: Vec<ColumnBlock>,
}

impl Grid {
    /// Measure every cell of `block` and stretch its columns.
    pub fn build<B: BufferAccess + ?Sized>(
        buffer: &B,
        metrics: &TabMetrics,
        block: &Block,
    ) -> Result<Self> {
        let rows = block
            .lines()
            .map(|line| build_row(buffer, metrics, line))
            .collect::<Result<Vec<_>>>()?;

        let mut grid = Self {
            start_line: block.start_line,
            max_tabs: block.max_tabs,
            rows,
            blocks: Vec::new(),
        };
        grid.stretch();
        Ok(grid)
    }

    /// Group tab-terminated cells into column blocks, one column at a time.
    fn stretch(&mut self) {
        for column in 0..self.max_tabs {
            let mut current: Option<usize> = None;

            for (row_index, row) in self.rows.iter_mut().enumerate() {
                let Some(cell) = row.cells.get_mut(column).filter(|c| c.ends_in_tab) else {
                    current = None;
                    continue;
                };

                let index = *current.get_or_insert_with(|| {
                    self.blocks.push(ColumnBlock {
                        column,
                        first_line: row_index,
                        end_line: row_index,
                        widest_width_pix: 0,
                    });
                    self.blocks.len() - 1
                });

                let owner = &mut self.blocks[index];
                owner.end_line = row_index + 1;
                owner.widest_width_pix = owner.widest_width_pix.max(cell.text_width_pix);
                cell.block = Some(index);
            }
        }
    }

    pub fn start_line(&self) -> usize {
        self.start_line
    }

    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    pub fn blocks(&self) -> &[ColumnBlock] {
        &self.blocks
    }

    /// Cell at grid row `row`, column `column`.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row)?.cells.get(column)
    }

    /// Stretched width of the column block `(row, column)` belongs to.
    pub fn widest_width(&self, row: usize, column: usize) -> Option<u32> {
        let block = self.cell(row, column)?.block?;
        Some(self.blocks[block].widest_width_pix)
    }

    /// Cumulative tab stops for grid row `row`.
    ///
    /// Emission stops at the first column without a block, so a line never gets a stop
    /// for a column it does not take part in.
    pub fn tab_stops(&self, row: usize) -> SmallVec<[u32; 8]> {
        let mut stops = SmallVec::new();
        let Some(r) = self.rows.get(row) else {
            return stops;
        };

        let mut acc: u32 = 0;
        for column in 0..r.num_tabs {
            match self.widest_width(row, column) {
                Some(width) => {
                    acc = acc.saturating_add(width);
                    stops.push(acc);
                }
                None => break,
            }
        }
        stops
    }

    /// Replace every grid line's tab stops in `buffer`.
    ///
    /// A stale line aborts that line only; it is logged and returned so the caller can
    /// report it. Any other error stops the write-back.
    pub fn apply<B: BufferAccess + ?Sized>(&self, buffer: &mut B) -> Result<Vec<usize>> {
        let mut skipped = Vec::new();

        for row in 0..self.rows.len() {
            let line = self.start_line + row;
            let stops = self.tab_stops(row);
            trace!(line, ?stops, "setting tab stops");

            match write_line(buffer, line, &stops) {
                Ok(()) => {}
                Err(err @ Error::StaleLine { .. }) => {
                    warn!(line, %err, "skipping tab stops for stale line");
                    skipped.push(line);
                }
                Err(err) => return Err(err),
            }
        }

        Ok(skipped)
    }
}

fn write_line<B: BufferAccess + ?Sized>(buffer: &mut B, line: usize, stops: &[u32]) -> Result<()> {
    buffer.clear_tab_stops(line)?;
    for &stop in stops {
        buffer.add_tab_stop(line, stop)?;
    }
    Ok(())
}

fn build_row<B: BufferAccess + ?Sized>(
    buffer: &B,
    metrics: &TabMetrics,
    line: usize,
) -> Result<Row> {
    let mut row = Row::default();
    let end = buffer.line_end(line);
    let mut cell_start = buffer.line_start(line);

    for pos in cell_start..end {
        if buffer.char_at(pos).is_some_and(scan::is_tab) {
            let content = measure_span(buffer, cell_start, pos)?;
            row.cells.push(Cell {
                start: cell_start,
                end: pos,
                text_width_pix: metrics.cell_width(content),
                ends_in_tab: true,
                block: None,
            });
            row.num_tabs += 1;
            cell_start = pos + 1;
        }
    }

    row.cells.push(Cell {
        start: cell_start,
        end,
        text_width_pix: 0,
        ends_in_tab: false,
        block: None,
    });

    Ok(row)
}

/// Recompute and write back the tab stops of every line in `block`.
///
/// Returns the lines skipped because the host reported them stale.
pub fn stretch_tabstops<B: BufferAccess + ?Sized>(
    buffer: &mut B,
    metrics: &TabMetrics,
    block: &Block,
) -> Result<Vec<usize>> {
    let grid = Grid::build(&*buffer, metrics, block)?;
    grid.apply(buffer)
}
