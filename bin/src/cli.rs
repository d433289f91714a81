use clap::Parser;
use std::path::PathBuf;

/// Command-line interface configuration
#[derive(Debug, Parser)]
#[command(name = "elastic-align", author, version, long_about = None)]
#[command(about = "Align tab-separated columns with elastic tabstops")]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Log file, or directory to create one in
    #[arg(long, global = true, env = "ELASTIC_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the input with every tab expanded to spaces at its elastic stop
    Align(InputArgs),
    /// Print the tab stops of every line, in pixels
    Stops(InputArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override `min_tab_width` from the config
    #[arg(long)]
    pub min_tab_width: Option<u32>,

    /// Override `tab_padding` from the config
    #[arg(long)]
    pub tab_padding: Option<u32>,

    /// Override `char_width` from the config
    #[arg(long)]
    pub char_width: Option<u32>,

    /// Input file; reads stdin when omitted
    pub path: Option<PathBuf>,
}
