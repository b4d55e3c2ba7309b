use crate::helpers::{TEST_API_KEY, client_with_server};

use popcat_core::{CodeClient, InputFailure, Language, NewPaste, PopcatError, Shortener, Theme};

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

// ============================================
// CODE CLIENT
// ============================================

/// **VALUE**: Pastes are POSTed as JSON with the bearer credential.
///
/// **WHY THIS MATTERS**: The language must go out in its canonical spelling;
/// the service rejects "python" but accepts "Python".
#[tokio::test]
async fn given_valid_paste_when_created_then_posts_json_with_bearer() {
    let (client, server) = client_with_server().await;
    Mock::given(method("POST"))
        .and(path("/code"))
        .and(header("authorization", "Bearer test-key-12345"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "title": "Hello",
            "description": "A simple example",
            "code": "print('hi')",
            "theme": "Monokai",
            "language": "Python"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"url": "https://code.popcat.xyz/ABC"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let code_client = CodeClient::with_client(client, TEST_API_KEY).unwrap();

    let value = code_client
        .create_bin("Hello", "A simple example", "print('hi')", "Monokai", "python")
        .await
        .unwrap();

    assert_eq!(value["url"], "https://code.popcat.xyz/ABC");
}

#[tokio::test]
async fn given_typed_paste_when_created_then_defaults_are_sent() {
    let (client, server) = client_with_server().await;
    Mock::given(method("POST"))
        .and(path("/code"))
        .and(body_json(json!({
            "title": "t",
            "description": "d",
            "code": "c",
            "theme": "GitHub Dark",
            "language": "PlainText"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "XYZ"})))
        .expect(1)
        .mount(&server)
        .await;
    let code_client = CodeClient::with_client(client, TEST_API_KEY).unwrap();

    let value = code_client
        .create_bin_typed(&NewPaste::new("t", "d", "c"))
        .await
        .unwrap();

    assert_eq!(value["id"], "XYZ");
}

/// **BUG THIS CATCHES**: An unknown theme reaching the service, which answers
/// with a generic error instead of naming the bad value.
#[tokio::test]
async fn given_unknown_theme_when_created_then_fails_without_request() {
    let (client, server) = client_with_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let code_client = CodeClient::with_client(client, TEST_API_KEY).unwrap();

    let err = code_client
        .create_bin("Hello", "desc", "code", "Solarized", "Python")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PopcatError::InvalidInput { reason: InputFailure::UnknownTheme(ref value), .. }
            if value == "Solarized"
    ));
}

#[test]
fn given_empty_api_key_when_constructed_then_invalid_input() {
    let err = CodeClient::new("").unwrap_err();

    assert!(matches!(
        err,
        PopcatError::InvalidInput {
            field: "api_key",
            reason: InputFailure::Empty,
            ..
        }
    ));
}

#[test]
fn given_code_client_when_debug_printed_then_key_is_redacted() {
    let code_client = CodeClient::new(TEST_API_KEY).unwrap();

    assert!(!format!("{:?}", code_client).contains(TEST_API_KEY));
}

#[test]
fn given_catalogue_when_listed_then_matches_closed_sets() {
    let themes = CodeClient::available_themes();
    let languages = CodeClient::available_languages();

    assert_eq!(themes.len(), Theme::ALL.len());
    assert_eq!(languages.len(), Language::ALL.len());
    assert_eq!(themes[0], "Active4D");
    assert!(languages.contains(&"C++"));
}

// ============================================
// SHORTENER
// ============================================

#[tokio::test]
async fn given_valid_link_when_shortened_then_posts_url_and_extension() {
    let (client, server) = client_with_server().await;
    Mock::given(method("POST"))
        .and(path("/shorten"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"url": "https://example.com", "extension": "example"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"short_url": "https://popcat.xyz/example"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    let shortener = Shortener::with_client(client);

    let value = shortener
        .shorten("https://example.com", "example")
        .await
        .unwrap();

    assert_eq!(value["short_url"], "https://popcat.xyz/example");
}

#[tokio::test]
async fn given_bad_extensions_when_shortened_then_no_request_is_sent() {
    let (client, server) = client_with_server().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let shortener = Shortener::with_client(client);
    let too_long = "x".repeat(21);

    for extension in ["ab", too_long.as_str(), "test-123", ""] {
        let err = shortener
            .shorten("https://example.com", extension)
            .await
            .unwrap_err();
        assert!(err.is_invalid_input(), "{extension:?} should be rejected");
    }

    let err = shortener.shorten("example.com", "example").await.unwrap_err();
    assert!(matches!(
        err,
        PopcatError::InvalidInput {
            field: "url",
            reason: InputFailure::UnsupportedScheme,
            ..
        }
    ));
}

/// **VALUE**: A missing short link is reported as `NotFound`, not a generic failure.
///
/// **WHY THIS MATTERS**: Callers checking whether an extension is free need to
/// tell "does not exist" apart from "service is down".
#[tokio::test]
async fn given_unknown_extension_when_info_requested_then_not_found() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/shorten/notfound"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    let shortener = Shortener::with_client(client);

    let err = shortener.get_info("notfound").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("not found"));
    assert!(err.to_string().contains("notfound"));
}

#[tokio::test]
async fn given_server_error_when_info_requested_then_stays_request_error() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/shorten/example"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    let shortener = Shortener::with_client(client);

    let err = shortener.get_info("example").await.unwrap_err();

    assert!(matches!(err, PopcatError::Request { .. }));
    assert_eq!(err.status_code(), Some(503));
}

#[tokio::test]
async fn given_existing_extension_when_info_requested_then_returns_json() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/shorten/example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "original_url": "https://example.com",
            "clicks": 42
        })))
        .expect(1)
        .mount(&server)
        .await;
    let shortener = Shortener::with_client(client);

    let value = shortener.get_info("example").await.unwrap();

    assert_eq!(value["clicks"], 42);
}
