use crate::request::{EndpointRequest, HttpMethod};

use common::RedactedApiKey;

use serde_json::json;
use url::Url;

fn base() -> Url {
    Url::parse("https://api.popcat.xyz/").unwrap()
}

/// **VALUE**: Query parameters keep their insertion order.
#[test]
fn given_drake_request_when_rendered_then_query_has_text1_then_text2() {
    let request = EndpointRequest::get("/drake")
        .param("text1", "A")
        .param("text2", "B");

    let url = request.url(&base()).unwrap();

    assert_eq!(url.as_str(), "https://api.popcat.xyz/drake?text1=A&text2=B");
    assert_eq!(request.method, HttpMethod::Get);
}

/// **VALUE**: Values are percent-encoded rather than spliced into the URL.
///
/// **BUG THIS CATCHES**: An `&` or `#` in user text would otherwise start a
/// new parameter or fragment.
#[test]
fn given_reserved_characters_when_rendered_then_values_are_encoded() {
    let url = EndpointRequest::get("/reverse")
        .param("text", "a&b=c #d")
        .url(&base())
        .unwrap();

    let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();

    assert_eq!(pairs, vec![("text".to_string(), "a&b=c #d".to_string())]);
    assert!(url.fragment().is_none());
}

/// **VALUE**: Paths join underneath a base URL that has its own path.
///
/// **WHY THIS MATTERS**: Tests and proxies mount the API below a prefix; a
/// leading `/` must not reset the path to the host root.
#[test]
fn given_base_with_path_when_rendered_then_endpoint_joins_under_it() {
    let base = Url::parse("http://127.0.0.1:8080/proxy/").unwrap();

    let url = EndpointRequest::get("/joke").url(&base).unwrap();

    assert_eq!(url.as_str(), "http://127.0.0.1:8080/proxy/joke");
}

#[test]
fn given_optional_params_when_absent_or_empty_then_omitted() {
    let request = EndpointRequest::get("/gun")
        .param("image", "https://x")
        .optional_param("text", None)
        .optional_param("color", Some(""))
        .optional_param("timestamp", Some("12:00"));

    let names: Vec<&str> = request.query.iter().map(|(name, _)| *name).collect();

    assert_eq!(names, vec!["image", "timestamp"]);
}

#[test]
fn given_post_with_bearer_when_built_then_carries_body_and_credential() {
    let request = EndpointRequest::post("/code", json!({"title": "t"}))
        .bearer(RedactedApiKey::new("secret"));

    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.body, Some(json!({"title": "t"})));
    assert_eq!(
        request.bearer.as_ref().map(RedactedApiKey::bearer_value),
        Some("Bearer secret".to_string())
    );
    assert!(!format!("{:?}", request).contains("secret"));
}
