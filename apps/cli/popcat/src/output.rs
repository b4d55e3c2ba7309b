use std::fmt::{Display, Formatter, Result as FormatResult};

use serde_json::Value;
use url::Url;

/// What a command produced, ready to print on stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Url(Url),
    Text(String),
    Json(Value),
    List(Vec<&'static str>),
}

impl From<Url> for Output {
    fn from(url: Url) -> Self {
        Output::Url(url)
    }
}

impl From<String> for Output {
    fn from(text: String) -> Self {
        Output::Text(text)
    }
}

impl From<Value> for Output {
    fn from(value: Value) -> Self {
        Output::Json(value)
    }
}

impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            Output::Url(url) => write!(f, "{url}"),
            Output::Text(text) => write!(f, "{text}"),
            Output::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| std::fmt::Error)?;
                write!(f, "{pretty}")
            }
            Output::List(items) => write!(f, "{}", items.join("\n")),
        }
    }
}
