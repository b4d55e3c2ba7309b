use crate::{Language, ModelError, Theme};

use std::collections::HashSet;

/// **VALUE**: Verifies theme matching is exact and case-sensitive.
///
/// **WHY THIS MATTERS**: The paste service rejects themes it does not know, and it
/// spells some of them in lowercase ("idleFingers") or with underscores
/// ("Xcode_default"). Loosening the match would send names the service refuses.
#[test]
fn given_theme_names_when_parsed_then_only_exact_spelling_matches() {
    assert_eq!("GitHub Dark".parse::<Theme>().unwrap(), Theme::GitHubDark);
    assert_eq!("idleFingers".parse::<Theme>().unwrap(), Theme::IdleFingers);
    assert_eq!("Xcode_default".parse::<Theme>().unwrap(), Theme::XcodeDefault);
    assert_eq!("LAZY".parse::<Theme>().unwrap(), Theme::Lazy);

    assert!("github dark".parse::<Theme>().is_err());
    assert!("Lazy".parse::<Theme>().is_err());
    assert!("Solarized".parse::<Theme>().is_err());
    assert!("".parse::<Theme>().is_err());
}

/// **VALUE**: Verifies language matching ignores case and resolves to the canonical name.
#[test]
fn given_language_in_any_case_when_parsed_then_resolves_canonical_spelling() {
    let language: Language = "python".parse().unwrap();
    assert_eq!(language, Language::Python);
    assert_eq!(language.as_str(), "Python");

    assert_eq!("c++".parse::<Language>().unwrap().as_str(), "C++");
    assert_eq!("vb.net".parse::<Language>().unwrap(), Language::VbNet);
    assert_eq!("JSON".parse::<Language>().unwrap(), Language::Json);
    assert_eq!("json".parse::<Language>().unwrap(), Language::Json);
    assert_eq!("c".parse::<Language>().unwrap(), Language::C);
}

#[test]
fn given_unknown_language_when_parsed_then_reports_value() {
    let err = "Brainfuck".parse::<Language>().unwrap_err();

    assert!(matches!(err, ModelError::UnknownLanguage { ref value, .. } if value == "Brainfuck"));
    assert!(err.to_string().contains("Brainfuck"));
}

/// **VALUE**: Pins the size of both closed sets and checks names are unique.
///
/// **BUG THIS CATCHES**: A duplicated or dropped entry would make the lookup
/// tables silently disagree with `ALL`.
#[test]
fn given_closed_sets_when_listed_then_sizes_match_service_catalogue() {
    assert_eq!(Theme::ALL.len(), 46);
    assert_eq!(Language::ALL.len(), 58);

    let themes: HashSet<_> = Theme::names().into_iter().collect();
    assert_eq!(themes.len(), Theme::ALL.len());

    let languages: HashSet<_> = Language::names()
        .into_iter()
        .map(|name| name.to_lowercase())
        .collect();
    assert_eq!(languages.len(), Language::ALL.len());
}

#[test]
fn given_every_member_when_round_tripped_through_its_name_then_parses_back() {
    for theme in Theme::ALL {
        assert_eq!(theme.as_str().parse::<Theme>().unwrap(), *theme);
    }
    for language in Language::ALL {
        assert_eq!(language.as_str().parse::<Language>().unwrap(), *language);
    }
}

#[test]
fn given_defaults_when_requested_then_match_service_defaults() {
    assert_eq!(Theme::default().as_str(), "GitHub Dark");
    assert_eq!(Language::default().as_str(), "PlainText");
    assert_eq!(Theme::Monokai.to_string(), "Monokai");
}
