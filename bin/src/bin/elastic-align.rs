use clap::Parser;
use elastic_bin::{
    cli::{Cli, Command},
    commands,
};
use elastic_log::LogConfig;

fn main() {
    let cli = Cli::parse();

    let log_guard = match elastic_log::init(LogConfig {
        log_file_path: cli.log_file.clone(),
    }) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {e}");
            None
        }
    };

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Command::Align(args) => commands::align::run(args, &mut stdout),
        Command::Stops(args) => commands::stops::run(args, &mut stdout),
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        drop(log_guard);
        std::process::exit(1);
    }
}
