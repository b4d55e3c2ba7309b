use crate::PopcatClient;
use crate::endpoints::{
    DataLookup, ImageFilter, PairMeme, RandomData, RandomText, TextMeme, TextTransform,
};
use crate::error::{InputFailure, PopcatError};

use std::collections::HashSet;

/// **VALUE**: Group names parse back to the same variant.
///
/// **BUG THIS CATCHES**: A path typo in the catalogue (e.g. "/greyscale" vs
/// "/grayscale") would break the CLI's name lookup.
#[test]
fn given_group_names_when_parsed_then_resolve_to_same_variant() {
    for filter in ImageFilter::ALL {
        assert_eq!(filter.name().parse::<ImageFilter>().unwrap(), *filter);
    }
    for meme in TextMeme::ALL {
        assert_eq!(meme.name().parse::<TextMeme>().unwrap(), *meme);
    }
    for lookup in DataLookup::ALL {
        assert_eq!(lookup.to_string().parse::<DataLookup>().unwrap(), *lookup);
    }
}

#[test]
fn given_unknown_name_when_parsed_then_invalid_input() {
    let err = "sepia".parse::<ImageFilter>().unwrap_err();

    assert!(matches!(
        err,
        PopcatError::InvalidInput { reason: InputFailure::UnknownEndpoint(ref value), .. }
            if value == "sepia"
    ));
}

#[test]
fn given_groups_when_listed_then_sizes_and_paths_are_stable() {
    assert_eq!(ImageFilter::ALL.len(), 12);
    assert_eq!(TextMeme::ALL.len(), 10);
    assert_eq!(PairMeme::ALL.len(), 3);
    assert_eq!(DataLookup::ALL.len(), 9);
    assert_eq!(TextTransform::ALL.len(), 5);
    assert_eq!(RandomText::ALL.len(), 3);
    assert_eq!(RandomData::ALL.len(), 4);

    assert_eq!(RandomText::EightBall.path(), "/8ball");
    assert_eq!(RandomData::Meme.path(), "/randommeme");
    assert_eq!(ImageFilter::JokeOverHead.name(), "jokeoverhead");
    assert_eq!(DataLookup::PeriodicTable.path(), "/periodic_table");

    let paths: HashSet<&str> = ImageFilter::ALL.iter().map(ImageFilter::path).collect();
    assert_eq!(paths.len(), ImageFilter::ALL.len());
}

#[test]
fn given_data_lookups_when_asked_for_param_then_matches_service_names() {
    assert_eq!(DataLookup::Weather.param(), "q");
    assert_eq!(DataLookup::GitHub.param(), "user");
    assert_eq!(DataLookup::Country.param(), "name");
    assert_eq!(DataLookup::PeriodicTable.param(), "element");
    assert_eq!(DataLookup::ColorInfo.param(), "color");
    assert_eq!(DataLookup::ITunes.param(), "q");
}

#[test]
fn given_random_text_endpoints_when_asked_for_keys_then_each_has_its_own() {
    assert_eq!(RandomText::Joke.keys(), &["joke"]);
    assert_eq!(RandomText::Fact.keys(), &["fact"]);
    assert_eq!(RandomText::EightBall.keys(), &["answer"]);
}

/// **VALUE**: Clients are shareable across tasks.
#[test]
fn given_client_types_then_they_are_send_sync_clone() {
    fn assert_shareable<T: Clone + Send + Sync>() {}

    assert_shareable::<PopcatClient>();
    assert_shareable::<crate::CodeClient>();
    assert_shareable::<crate::Shortener>();
}

#[test]
fn given_base_without_trailing_slash_when_client_built_then_slash_added() {
    let client = PopcatClient::new("http://127.0.0.1:9000/api").unwrap();

    assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9000/api/");
}

#[test]
fn given_unparseable_base_when_client_built_then_url_parse_error() {
    let err = PopcatClient::new("not a url").unwrap_err();

    assert!(matches!(err, PopcatError::UrlParse { .. }));
    assert_eq!(err.error_category(), "url_parse");
}
