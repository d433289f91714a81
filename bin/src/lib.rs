pub mod cli;
pub mod commands;

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_align_with_overrides() {
        let cli = Cli::try_parse_from([
            "elastic-align",
            "align",
            "--min-tab-width",
            "16",
            "--char-width",
            "10",
            "table.tsv",
        ])
        .unwrap();

        let Command::Align(args) = cli.command else {
            panic!("expected align command");
        };
        assert_eq!(args.min_tab_width, Some(16));
        assert_eq!(args.char_width, Some(10));
        assert_eq!(args.path.as_deref(), Some(std::path::Path::new("table.tsv")));
    }

    #[test]
    fn log_file_is_global() {
        let cli =
            Cli::try_parse_from(["elastic-align", "stops", "--log-file", "/tmp/x.log"]).unwrap();
        assert!(matches!(cli.command, Command::Stops(_)));
        assert!(cli.log_file.is_some());
    }

    #[test]
    fn zero_char_width_is_rejected() {
        let cli = Cli::try_parse_from(["elastic-align", "align", "--char-width", "0"]).unwrap();
        let Command::Align(args) = cli.command else {
            panic!("expected align command");
        };
        assert!(crate::commands::config(&args).is_err());
    }
}
