use crate::output::Output;

use serde_json::json;
use url::Url;

#[test]
fn given_each_output_kind_when_displayed_then_printed_for_terminal() {
    let url = Url::parse("https://api.popcat.xyz/drake?text1=A&text2=B").unwrap();

    assert_eq!(
        Output::from(url).to_string(),
        "https://api.popcat.xyz/drake?text1=A&text2=B"
    );
    assert_eq!(Output::from("Hola".to_string()).to_string(), "Hola");
    assert_eq!(Output::List(vec!["C", "C++"]).to_string(), "C\nC++");
}

/// **VALUE**: JSON is pretty-printed, not a single dense line.
#[test]
fn given_json_output_when_displayed_then_pretty_printed() {
    let rendered = Output::from(json!({"name": "rust"})).to_string();

    assert_eq!(rendered, "{\n  \"name\": \"rust\"\n}");
}
