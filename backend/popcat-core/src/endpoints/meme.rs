use crate::client::PopcatClient;
use crate::error::PopcatError;
use crate::request::EndpointRequest;
use crate::validation::{self, QUOTE_TEXT_MAX_LENGTH};

use serde_json::Value;
use url::Url;

endpoint_group! {
    /// Meme templates filled from one `text` parameter.
    pub enum TextMeme {
        Supreme => "/supreme",
        Oogway => "/oogway",
        Biden => "/biden",
        Pikachu => "/pikachu",
        SadCat => "/sadcat",
        Unforgivable => "/unforgivable",
        CouldRead => "/couldread",
        Facts => "/facts",
        Alert => "/alert",
        Caution => "/caution",
    }
}

endpoint_group! {
    /// Two-panel templates filled from `text1` and `text2`.
    pub enum PairMeme {
        Drake => "/drake",
        Pooh => "/pooh",
        HappySad => "/happysad",
    }
}

impl PopcatClient {
    pub async fn text_meme(&self, meme: TextMeme, text: &str) -> Result<Url, PopcatError> {
        validation::text("text", text)?;

        self.resolve_url(EndpointRequest::get(meme.path()).param("text", text))
            .await
    }

    pub async fn pair_meme(
        &self,
        meme: PairMeme,
        text1: &str,
        text2: &str,
    ) -> Result<Url, PopcatError> {
        validation::text("text1", text1)?;
        validation::text("text2", text2)?;

        self.resolve_url(
            EndpointRequest::get(meme.path())
                .param("text1", text1)
                .param("text2", text2),
        )
        .await
    }

    // ============================================
    // PAIR TEMPLATES
    // ============================================

    pub async fn drake(&self, text1: &str, text2: &str) -> Result<Url, PopcatError> {
        self.pair_meme(PairMeme::Drake, text1, text2).await
    }

    pub async fn pooh(&self, text1: &str, text2: &str) -> Result<Url, PopcatError> {
        self.pair_meme(PairMeme::Pooh, text1, text2).await
    }

    pub async fn happysad(&self, text1: &str, text2: &str) -> Result<Url, PopcatError> {
        self.pair_meme(PairMeme::HappySad, text1, text2).await
    }

    // ============================================
    // SINGLE TEXT TEMPLATES
    // ============================================

    pub async fn supreme(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Supreme, text).await
    }

    pub async fn oogway(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Oogway, text).await
    }

    pub async fn biden(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Biden, text).await
    }

    pub async fn pikachu(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Pikachu, text).await
    }

    pub async fn sadcat(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::SadCat, text).await
    }

    pub async fn unforgivable(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Unforgivable, text).await
    }

    pub async fn couldread(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::CouldRead, text).await
    }

    pub async fn facts(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Facts, text).await
    }

    pub async fn alert(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Alert, text).await
    }

    pub async fn caution(&self, text: &str) -> Result<Url, PopcatError> {
        self.text_meme(TextMeme::Caution, text).await
    }

    // ============================================
    // OTHER TEMPLATES
    // ============================================

    /// Ship two users; both arguments are avatar image URLs.
    pub async fn ship(&self, user1: &str, user2: &str) -> Result<Url, PopcatError> {
        validation::http_url("user1", user1)?;
        validation::http_url("user2", user2)?;

        self.resolve_url(
            EndpointRequest::get("/ship")
                .param("user1", user1)
                .param("user2", user2),
        )
        .await
    }

    pub async fn opinion(&self, image: &str, text: &str) -> Result<Url, PopcatError> {
        validation::http_url("image", image)?;
        validation::text("text", text)?;

        self.resolve_url(
            EndpointRequest::get("/opinion")
                .param("image", image)
                .param("text", text),
        )
        .await
    }

    /// Render a fake Discord message.
    ///
    /// `avatar` is checked as an image URL only when present. `color` and
    /// `timestamp` are passed through untouched.
    pub async fn discord_message(
        &self,
        username: &str,
        content: &str,
        avatar: Option<&str>,
        color: Option<&str>,
        timestamp: Option<&str>,
    ) -> Result<Url, PopcatError> {
        validation::text("username", username)?;
        validation::text("content", content)?;
        if let Some(avatar) = avatar.filter(|avatar| !avatar.is_empty()) {
            validation::http_url("avatar", avatar)?;
        }

        self.resolve_url(
            EndpointRequest::get("/discord")
                .param("username", username)
                .param("content", content)
                .optional_param("avatar", avatar)
                .optional_param("color", color)
                .optional_param("timestamp", timestamp),
        )
        .await
    }

    /// Quote card. `text` is capped at [`QUOTE_TEXT_MAX_LENGTH`] characters.
    pub async fn quote(&self, image: &str, text: &str, name: &str) -> Result<Url, PopcatError> {
        validation::http_url("image", image)?;
        validation::bounded_text("text", text, Some(QUOTE_TEXT_MAX_LENGTH))?;
        validation::text("name", name)?;

        self.resolve_url(
            EndpointRequest::get("/quote")
                .param("image", image)
                .param("text", text)
                .param("name", name),
        )
        .await
    }

    /// Translate to "lolcat" speak. Returns the service's JSON as-is.
    pub async fn lulcat(&self, text: &str) -> Result<Value, PopcatError> {
        validation::text("text", text)?;

        self.fetch_json(EndpointRequest::get("/lulcat").param("text", text))
            .await
    }
}
