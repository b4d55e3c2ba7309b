use crate::cli::{Cli, Command};

use clap::{CommandFactory, Parser};

#[test]
fn given_cli_definition_when_checked_then_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn given_pair_arguments_when_parsed_then_fields_in_order() {
    let cli = Cli::try_parse_from(["popcat", "pair", "drake", "Regular APIs", "Popcat"]).unwrap();

    match cli.command {
        Command::Pair {
            template,
            text1,
            text2,
        } => {
            assert_eq!(template, "drake");
            assert_eq!(text1, "Regular APIs");
            assert_eq!(text2, "Popcat");
        }
        other => panic!("expected pair, got {:?}", other),
    }
}

/// **VALUE**: Global flags work after the subcommand too.
#[test]
fn given_global_flags_after_subcommand_when_parsed_then_applied() {
    let cli = Cli::try_parse_from([
        "popcat",
        "random",
        "joke",
        "-vv",
        "--base-url",
        "http://localhost:3000",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.base_url.as_deref(), Some("http://localhost:3000"));
    assert!(!cli.quiet);
}

#[test]
fn given_quiet_and_verbose_when_parsed_then_rejected() {
    assert!(Cli::try_parse_from(["popcat", "themes", "-q", "-v"]).is_err());
}

#[test]
fn given_paste_without_options_when_parsed_then_defaults_apply() {
    let cli = Cli::try_parse_from(["popcat", "paste", "Title", "Desc"]).unwrap();

    match cli.command {
        Command::Paste {
            theme,
            language,
            file,
            api_key,
            ..
        } => {
            assert_eq!(theme, "GitHub Dark");
            assert_eq!(language, "PlainText");
            assert!(file.is_none());
            assert!(api_key.is_none());
        }
        other => panic!("expected paste, got {:?}", other),
    }
}

#[test]
fn given_kebab_case_subcommands_when_parsed_then_recognised() {
    assert!(matches!(
        Cli::try_parse_from(["popcat", "random-color"]).unwrap().command,
        Command::RandomColor
    ));
    assert!(matches!(
        Cli::try_parse_from(["popcat", "shorten-info", "abc"]).unwrap().command,
        Command::ShortenInfo { .. }
    ));
}
