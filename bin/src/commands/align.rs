use crate::cli::InputArgs;
use anyhow::Result;
use elastic_tabstops::{expand_to_spaces, Config};
use std::io::Write;

/// Columns a tab without a computed stop advances to: the narrowest elastic cell.
fn fallback_columns(config: &Config) -> usize {
    let floor = config.min_tab_width.saturating_add(config.tab_padding);
    floor.div_ceil(config.char_width.max(1)) as usize
}

pub fn run(args: &InputArgs, out: &mut impl Write) -> Result<()> {
    let (buffer, config) = super::load(args)?;
    out.write_all(expand_to_spaces(&buffer, fallback_columns(&config)).as_bytes())?;
    out.flush()?;
    Ok(())
}
