use crate::cli::InputArgs;
use anyhow::Result;
use elastic_tabstops::{BufferAccess, TextBuffer};
use std::io::Write;

/// Write one line per buffer line: its tab stops separated by spaces.
pub fn write_stops(buffer: &TextBuffer, out: &mut impl Write) -> Result<()> {
    for line in 0..buffer.line_count() {
        let stops: Vec<String> = buffer.tab_stops(line).iter().map(u32::to_string).collect();
        writeln!(out, "{}", stops.join(" "))?;
    }
    Ok(())
}

pub fn run(args: &InputArgs, out: &mut impl Write) -> Result<()> {
    let (buffer, _) = super::load(args)?;
    write_stops(&buffer, out)?;
    out.flush()?;
    Ok(())
}
