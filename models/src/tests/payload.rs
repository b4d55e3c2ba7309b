use crate::{Language, NewPaste, ShortenRequest, Theme};

use serde_json::json;

#[test]
fn given_new_paste_when_serialized_then_closed_sets_use_canonical_names() {
    let paste = NewPaste::new("Hello", "Example", "print('hi')")
        .with_theme(Theme::AllHallowsEve)
        .with_language(Language::CSharp);

    let body = serde_json::to_value(&paste).unwrap();

    assert_eq!(
        body,
        json!({
            "title": "Hello",
            "description": "Example",
            "code": "print('hi')",
            "theme": "All Hallows Eve",
            "language": "C#"
        })
    );
}

#[test]
fn given_new_paste_without_overrides_then_uses_defaults() {
    let paste = NewPaste::new("t", "d", "c");

    assert_eq!(paste.theme, Theme::GitHubDark);
    assert_eq!(paste.language, Language::PlainText);
}

#[test]
fn given_shorten_request_when_serialized_then_has_url_and_extension() {
    let request = ShortenRequest {
        url: "https://example.com".to_string(),
        extension: "example".to_string(),
    };

    let body = serde_json::to_value(&request).unwrap();

    assert_eq!(body, json!({"url": "https://example.com", "extension": "example"}));
}
