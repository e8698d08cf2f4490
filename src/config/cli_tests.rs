//! Tests for CLI argument parsing.

use clap::error::ErrorKind;

use super::ConfigError;
use super::cli::Cli;

fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["notifyourself"];
    full_args.extend(args);
    Cli::try_parse_from_iter(full_args).unwrap()
}

fn parse_err(args: &[&str]) -> clap::Error {
    let mut full_args = vec!["notifyourself"];
    full_args.extend(args);
    Cli::try_parse_from_iter(full_args).unwrap_err()
}

mod parsing {
    use super::*;

    #[test]
    fn title_only_uses_defaults() {
        let cli = cli(&["Build done"]);

        assert_eq!(cli.title, "Build done");
        assert!(cli.body.is_none());
        assert!(cli.token.is_none());
        assert_eq!(cli.target, "DEFAULT");
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn title_and_body() {
        let cli = cli(&["Build done", "All 42 tests passed"]);

        assert_eq!(cli.body.as_deref(), Some("All 42 tests passed"));
    }

    #[test]
    fn token_short_and_long() {
        assert_eq!(cli(&["t", "-T", "abc"]).token.as_deref(), Some("abc"));
        assert_eq!(cli(&["t", "--token", "abc"]).token.as_deref(), Some("abc"));
    }

    #[test]
    fn target_short_and_long() {
        assert_eq!(cli(&["t", "-t", "phone"]).target, "phone");
        assert_eq!(cli(&["t", "--target", "phone"]).target, "phone");
    }

    #[test]
    fn config_and_verbose() {
        let cli = cli(&["t", "--config", "/tmp/n.ini", "-v"]);

        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/n.ini")));
        assert!(cli.verbose);
    }

    #[test]
    fn options_may_precede_positionals() {
        let cli = cli(&["-T", "abc", "Title", "Body"]);

        assert_eq!(cli.title, "Title");
        assert_eq!(cli.body.as_deref(), Some("Body"));
    }
}

mod rejections {
    use super::*;

    #[test]
    fn missing_title_is_rejected() {
        assert_eq!(parse_err(&[]).kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn empty_title_is_rejected() {
        assert_eq!(parse_err(&[""]).kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn token_and_target_conflict() {
        let err = parse_err(&["t", "-T", "abc", "-t", "phone"]);

        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn token_and_explicit_default_target_conflict() {
        let err = parse_err(&["t", "--token", "abc", "--target", "DEFAULT"]);

        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert_eq!(parse_err(&["a", "b", "c"]).kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_and_version_are_errors_without_stderr() {
        let help = parse_err(&["--help"]);
        let version = parse_err(&["--version"]);

        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert!(!help.use_stderr());
        assert_eq!(version.kind(), ErrorKind::DisplayVersion);
    }
}

mod target_validation {
    use super::*;

    #[test]
    fn default_target_is_valid() {
        assert!(cli(&["t"]).validate().is_ok());
    }

    #[test]
    fn underscore_target_is_valid() {
        assert!(cli(&["t", "-t", "work_phone2"]).validate().is_ok());
    }

    #[test]
    fn dashed_target_is_rejected() {
        let err = cli(&["t", "-t", "work-phone"]).validate().unwrap_err();

        assert!(matches!(err, ConfigError::InvalidTarget { ref target } if target == "work-phone"));
        assert_eq!(err.to_string(), "Target must be alphanumerical");
    }

    #[test]
    fn bracketed_target_is_rejected() {
        assert!(cli(&["t", "-t", "[phone]"]).validate().is_err());
    }
}
