pub mod align;
pub mod stops;

use crate::cli::InputArgs;
use anyhow::{Context, Result};
use elastic_tabstops::{BufferAccess, Config, ElasticTabstops, TextBuffer};
use std::io::Read;
use tracing::debug;

/// Resolve the effective config: file (or defaults), then command-line overrides.
pub fn config(args: &InputArgs) -> Result<Config> {
    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(min_tab_width) = args.min_tab_width {
        config.min_tab_width = min_tab_width;
    }
    if let Some(tab_padding) = args.tab_padding {
        config.tab_padding = tab_padding;
    }
    if let Some(char_width) = args.char_width {
        anyhow::ensure!(char_width > 0, "--char-width must be greater than zero");
        config.char_width = char_width;
    }
    Ok(config)
}

fn read_input(args: &InputArgs) -> Result<String> {
    match &args.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Load `text` into a buffer and compute every line's tab stops.
pub fn aligned_buffer(text: &str, config: &Config) -> Result<TextBuffer> {
    let mut buffer = TextBuffer::with_char_width(text, config.char_width);
    let engine = ElasticTabstops::new(config.metrics(), config.enabled);

    if config.enabled {
        let len = buffer.len();
        let recompute = engine
            .recompute(&mut buffer, 0, len)
            .context("Failed to compute tab stops")?;
        debug!(lines = buffer.line_count(), max_tabs = recompute.max_tabs, "computed tab stops");
    }
    Ok(buffer)
}

pub(crate) fn load(args: &InputArgs) -> Result<(TextBuffer, Config)> {
    let config = config(args)?;
    let text = read_input(args)?;
    Ok((aligned_buffer(&text, &config)?, config))
}
