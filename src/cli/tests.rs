//! Argument parsing and configuration building tests for the CLI.

#[cfg(test)]
mod cli_tests {
    use crate::cli::{Cli, CliConfig, Commands};
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parsing() {
        assert!(Cli::try_parse_from(["nixplat", "--help"]).is_err());
        assert!(Cli::try_parse_from(["nixplat"]).is_err());

        let cli = Cli::try_parse_from(["nixplat", "info"]).unwrap();
        assert!(matches!(cli.command, Commands::Info(_)));

        let cli = Cli::try_parse_from(["nixplat", "info", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Info(_)));

        assert!(Cli::try_parse_from(["nixplat", "info", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_exists_requires_paths() {
        assert!(Cli::try_parse_from(["nixplat", "exists"]).is_err());
        let cli = Cli::try_parse_from(["nixplat", "exists", "/", "/tmp"]).unwrap();
        assert!(matches!(cli.command, Commands::Exists(_)));
    }

    #[test]
    fn test_time_accepts_hyphenated_args() {
        let cli = Cli::try_parse_from(["nixplat", "time", "--", "ls", "-la", "/"]).unwrap();
        assert!(matches!(cli.command, Commands::Time(_)));
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        assert!(Cli::try_parse_from(["nixplat", "-v", "-q", "info"]).is_err());
    }

    #[test]
    fn test_build_config_log_levels() {
        let cli = Cli::try_parse_from(["nixplat", "--verbose", "info"]).unwrap();
        assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));

        let cli = Cli::try_parse_from(["nixplat", "--quiet", "info"]).unwrap();
        assert_eq!(cli.build_config().log_level.as_deref(), Some("error"));

        let cli = Cli::try_parse_from(["nixplat", "info"]).unwrap();
        assert_eq!(cli.build_config().log_level, None);
    }

    #[test]
    fn test_build_config_path() {
        let cli =
            Cli::try_parse_from(["nixplat", "--config", "/tmp/nixplat.toml", "config", "path"])
                .unwrap();
        assert_eq!(
            cli.build_config(),
            CliConfig {
                log_level: None,
                config_path: Some(PathBuf::from("/tmp/nixplat.toml")),
            }
        );
    }

    #[test]
    fn test_config_subcommands() {
        for args in [
            vec!["nixplat", "config"],
            vec!["nixplat", "config", "show"],
            vec!["nixplat", "config", "path"],
            vec!["nixplat", "config", "init", "--force"],
        ] {
            let cli = Cli::try_parse_from(&args).unwrap();
            assert!(matches!(cli.command, Commands::Config(_)), "{args:?}");
        }
    }
}
