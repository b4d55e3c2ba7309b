use crate::helpers::{TEST_IMAGE, client_with_server};

use popcat_core::{ImageFilter, InputFailure, PopcatError, RandomText, TextMeme};

use serde_json::json;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

// ============================================
// URL-RETURNING ENDPOINTS
// ============================================

/// **VALUE**: `drake` sends exactly one GET with both text parameters.
///
/// **BUG THIS CATCHES**: Swapped or renamed parameters (`top`/`bottom`) that the
/// service silently ignores, rendering an empty template.
#[tokio::test]
async fn given_drake_texts_when_called_then_get_with_text1_and_text2() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/drake"))
        .and(query_param("text1", "A"))
        .and(query_param("text2", "B"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let url = client.drake("A", "B").await.unwrap();

    assert_eq!(url.path(), "/drake");
    assert_eq!(url.query(), Some("text1=A&text2=B"));
}

/// **VALUE**: Image endpoints hand back the URL the service finally served.
///
/// **WHY THIS MATTERS**: Some renders redirect to a CDN; the original request
/// URL would make callers fetch through the redirect every time.
#[tokio::test]
async fn given_redirecting_filter_when_called_then_returns_final_url() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/jail"))
        .and(query_param("image", TEST_IMAGE))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/rendered/jail.png"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rendered/jail.png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let url = client.filter(ImageFilter::Jail, TEST_IMAGE).await.unwrap();

    assert_eq!(url.path(), "/rendered/jail.png");
}

#[tokio::test]
async fn given_gun_without_text_when_called_then_text_param_omitted() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/gun"))
        .and(query_param("image", TEST_IMAGE))
        .and(query_param_is_missing("text"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client.gun(TEST_IMAGE, None).await.unwrap();
}

#[tokio::test]
async fn given_text_meme_by_group_when_called_then_hits_variant_path() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/sadcat"))
        .and(query_param("text", "mondays"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let url = client.text_meme(TextMeme::SadCat, "mondays").await.unwrap();

    assert_eq!(url.path(), "/sadcat");
}

// ============================================
// TEXT AND JSON ENDPOINTS
// ============================================

#[tokio::test]
async fn given_translate_response_when_called_then_returns_translated_text() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/translate"))
        .and(query_param("text", "Hello"))
        .and(query_param("to", "es"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"translated": "Hola"})))
        .expect(1)
        .mount(&server)
        .await;

    let text = client.translate("Hello", "es").await.unwrap();

    assert_eq!(text, "Hola");
}

#[tokio::test]
async fn given_eightball_response_when_called_then_returns_answer() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/8ball"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"answer": "Yes."})))
        .expect(1)
        .mount(&server)
        .await;

    let answer = client.random_text(RandomText::EightBall).await.unwrap();

    assert_eq!(answer, "Yes.");
}

#[tokio::test]
async fn given_weather_response_when_called_then_returns_json_unchanged() {
    let (client, server) = client_with_server().await;
    let body = json!([{"location": {"name": "Paris"}, "current": {"temperature": "21"}}]);
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let value = client.weather("Paris").await.unwrap();

    assert_eq!(value, body);
}

#[tokio::test]
async fn given_prefixed_subreddit_when_called_then_prefix_stripped_on_wire() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/subreddit"))
        .and(query_param("subreddit", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "rust"})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client.subreddit("r/rust").await.unwrap();

    assert_eq!(value["name"], "rust");
}

#[tokio::test]
async fn given_chatbot_when_called_then_message_sent_as_msg() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/chatbot"))
        .and(query_param("msg", "hi"))
        .and(query_param("owner", "Ann"))
        .and(query_param("botname", "Cat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "hello"})))
        .expect(1)
        .mount(&server)
        .await;

    let value = client.chatbot("hi", "Ann", "Cat").await.unwrap();

    assert_eq!(value["response"], "hello");
}

// ============================================
// FAILURES
// ============================================

/// **VALUE**: Server errors surface as `Request` with the status attached.
#[tokio::test]
async fn given_server_error_when_called_then_request_error_with_status() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/joke"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.joke().await.unwrap_err();

    assert!(matches!(err, PopcatError::Request { .. }));
    assert_eq!(err.status_code(), Some(500));
    assert!(err.to_string().contains("upstream down"));
}

#[tokio::test]
async fn given_html_body_on_json_endpoint_when_called_then_decode_error() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/car"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.car().await.unwrap_err();

    assert!(matches!(err, PopcatError::Decode { .. }));
}

/// **VALUE**: Invalid input fails before any request is made.
///
/// **BUG THIS CATCHES**: Validation moved after dispatch would still return an
/// error but would also hit the service; `expect(0)` fails on drop if so.
#[tokio::test]
async fn given_invalid_arguments_when_called_then_no_request_is_sent() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    assert!(client.drake("", "B").await.unwrap_err().is_invalid_input());
    assert!(client.jail("not-a-url").await.unwrap_err().is_invalid_input());
    assert!(client.decode("0102").await.unwrap_err().is_invalid_input());
    assert!(
        client
            .quote(TEST_IMAGE, &"q".repeat(126), "Ann")
            .await
            .unwrap_err()
            .is_invalid_input()
    );

    let err = client
        .welcomecard(
            "http://cdn.example.com/bg.png",
            TEST_IMAGE,
            "Welcome",
            "to the",
            "server",
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PopcatError::InvalidInput {
            field: "background",
            reason: InputFailure::NotHttps,
            ..
        }
    ));
}

// ============================================
// OPTIONAL PARAMETERS AND CHECK ORDER
// ============================================

/// **VALUE**: Empty optional parameters are left off the query entirely.
///
/// **BUG THIS CATCHES**: Sending `avatar=` or `color=` makes the service try to
/// load an empty image URL or parse an empty colour.
#[tokio::test]
async fn given_empty_optionals_when_discord_message_then_omitted_from_query() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/discord"))
        .and(query_param("username", "u"))
        .and(query_param("content", "c"))
        .and(query_param_is_missing("avatar"))
        .and(query_param_is_missing("color"))
        .and(query_param_is_missing("timestamp"))
        .respond_with(ResponseTemplate::new(200).insert_header("content-type", "image/png"))
        .expect(1)
        .mount(&server)
        .await;

    let url = client
        .discord_message("u", "c", Some(""), Some(""), None)
        .await
        .unwrap();

    assert_eq!(url.path(), "/discord");
    assert!(!url.query().unwrap_or_default().contains("avatar"));
}

#[tokio::test]
async fn given_non_http_avatar_when_discord_message_then_rejected_before_dispatch() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/discord"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .discord_message("u", "c", Some("ftp://x"), None, None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PopcatError::InvalidInput {
            field: "avatar",
            ..
        }
    ));
}

/// **VALUE**: Both URLs and all texts are checked before the PNG/HTTPS rules
/// on the background.
///
/// **BUG THIS CATCHES**: Reporting the background format while the avatar is
/// missing hides the more basic mistake.
#[tokio::test]
async fn given_bad_background_and_empty_avatar_when_welcomecard_then_avatar_reported() {
    let (client, server) = client_with_server().await;
    Mock::given(method("GET"))
        .and(path("/welcomecard"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = client
        .welcomecard("http://cdn.example.com/bg.jpg", "", "a", "b", "c")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        PopcatError::InvalidInput {
            field: "avatar",
            reason: InputFailure::Empty,
            ..
        }
    ));
}

/// **BUG THIS CATCHES**: A full HTML error page copied into the message floods
/// logs and terminal output.
#[tokio::test]
async fn given_large_error_page_when_called_then_message_is_capped() {
    let (client, server) = client_with_server().await;
    let page = format!("<html>{}</html>", "x".repeat(5_000));
    Mock::given(method("GET"))
        .and(path("/fact"))
        .respond_with(ResponseTemplate::new(502).set_body_string(page))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.fact().await.unwrap_err();
    let message = err.to_string();

    assert_eq!(err.status_code(), Some(502));
    assert!(message.contains("HTTP 502 - <html>"));
    assert!(message.contains("..."));
    assert!(message.len() < 600);
}
