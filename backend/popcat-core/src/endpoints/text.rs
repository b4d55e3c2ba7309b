use crate::client::PopcatClient;
use crate::decode::TEXT_KEYS;
use crate::error::PopcatError;
use crate::request::EndpointRequest;
use crate::validation;

endpoint_group! {
    /// Text-to-text transforms taking one `text` parameter.
    pub enum TextTransform {
        Reverse => "/reverse",
        Mock => "/mock",
        DoubleStruck => "/doublestruck",
        TextToMorse => "/texttomorse",
        Encode => "/encode",
    }
}

impl PopcatClient {
    pub async fn transform(
        &self,
        transform: TextTransform,
        text: &str,
    ) -> Result<String, PopcatError> {
        validation::text("text", text)?;

        self.fetch_text(
            EndpointRequest::get(transform.path()).param("text", text),
            TEXT_KEYS,
        )
        .await
    }

    /// Translate `text` into the language code `to`.
    pub async fn translate(&self, text: &str, to: &str) -> Result<String, PopcatError> {
        validation::text("text", text)?;
        validation::text("to", to)?;

        self.fetch_text(
            EndpointRequest::get("/translate")
                .param("text", text)
                .param("to", to),
            TEXT_KEYS,
        )
        .await
    }

    pub async fn reverse(&self, text: &str) -> Result<String, PopcatError> {
        self.transform(TextTransform::Reverse, text).await
    }

    pub async fn mock(&self, text: &str) -> Result<String, PopcatError> {
        self.transform(TextTransform::Mock, text).await
    }

    pub async fn doublestruck(&self, text: &str) -> Result<String, PopcatError> {
        self.transform(TextTransform::DoubleStruck, text).await
    }

    pub async fn texttomorse(&self, text: &str) -> Result<String, PopcatError> {
        self.transform(TextTransform::TextToMorse, text).await
    }

    /// Text to space-separated binary octets.
    pub async fn encode(&self, text: &str) -> Result<String, PopcatError> {
        self.transform(TextTransform::Encode, text).await
    }

    /// Binary octets back to text. Only `0`, `1` and spaces are accepted.
    pub async fn decode(&self, binary: &str) -> Result<String, PopcatError> {
        validation::binary("binary", binary)?;

        self.fetch_text(
            EndpointRequest::get("/decode").param("binary", binary),
            TEXT_KEYS,
        )
        .await
    }
}
