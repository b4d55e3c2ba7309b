//! Endpoint descriptors.
//!
//! An [`EndpointRequest`] is plain data: method, path, ordered query
//! parameters, an optional JSON body and an optional bearer credential. It is
//! built fresh for every call and rendered against the client's base URL by
//! [`EndpointRequest::url`]. Keeping it free of I/O lets request shapes be
//! checked without a server.

use crate::error::PopcatError;

use common::RedactedApiKey;

use serde_json::Value;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct EndpointRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    pub bearer: Option<RedactedApiKey>,
}

impl EndpointRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
            bearer: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
            bearer: None,
        }
    }

    /// Append a query parameter. Order is preserved.
    pub fn param(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.query.push((name, value.into()));
        self
    }

    /// Append a query parameter only when a non-empty value is present.
    pub fn optional_param(self, name: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.param(name, value),
            _ => self,
        }
    }

    pub fn bearer(mut self, key: RedactedApiKey) -> Self {
        self.bearer = Some(key);
        self
    }

    /// Resolve the full request URL, query string included.
    ///
    /// `base` must end with `/` for paths to land under it; `PopcatClient`
    /// normalizes its base URL on construction.
    pub fn url(&self, base: &Url) -> Result<Url, PopcatError> {
        let mut url = base.join(self.path.trim_start_matches('/'))?;

        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in &self.query {
                pairs.append_pair(name, value);
            }
        }

        Ok(url)
    }
}
