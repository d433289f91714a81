//! Elastic tabstops column alignment.
//!
//! Tab-delimited cells in vertically adjacent lines are stretched to a shared column
//! width, and the widths are recomputed as the text changes. The engine works over a
//! host buffer exposed through [`BufferAccess`] and writes its results back as per-line
//! tab stops in pixels.
//!
//! # Pipeline
//!
//! ```text
//! edit notification
//!   | block::find_block        lines coupled to the edit, column count
//! Block
//!   | grid::Grid::build        measure cells, group column blocks
//! Grid
//!   | grid::Grid::apply        cumulative stops, clear + add per line
//! tab stops on the buffer
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut buffer = TextBuffer::new("a\tbb\nccc\tdd\n");
//! let mut engine = ElasticTabstops::default();
//! engine.attach(BufferId(1), &mut buffer)?;
//!
//! let m = buffer.insert(0, "wider ")?;
//! engine.on_modified(BufferId(1), &mut buffer, m)?;
//! ```
mod block;
mod buffer;
mod config;
mod driver;
mod error;
mod grid;
mod metrics;
mod scan;
mod spaces;
mod text_buffer;

pub use block::{find_block, scan_block_edge, Block, BlockEdge, Direction};
pub use buffer::{BufferAccess, BufferId, Modification, ModificationKind, StyleId};
pub use config::Config;
pub use driver::{ElasticTabstops, Recompute, TrackingState};
pub use error::{Error, Result};
pub use grid::{stretch_tabstops, Cell, ColumnBlock, Grid};
pub use metrics::{measure_span, TabMetrics, MIN_TAB_WIDTH, TAB_PADDING};
pub use scan::{count_tabs, is_line_end, is_tab, line_end, line_start, max_tabs_between, TAB};
pub use spaces::expand_to_spaces;
pub use text_buffer::{TextBuffer, DEFAULT_CHAR_WIDTH};
