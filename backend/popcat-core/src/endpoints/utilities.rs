use crate::client::PopcatClient;
use crate::error::PopcatError;
use crate::request::EndpointRequest;
use crate::validation;

use serde_json::Value;
use url::Url;

impl PopcatClient {
    pub async fn lyrics(&self, song: &str) -> Result<Value, PopcatError> {
        validation::text("song", song)?;

        self.fetch_json(EndpointRequest::get("/lyrics").param("song", song))
            .await
    }

    /// Screenshot of the page at `url`. The target is fully parsed first.
    pub async fn screenshot(&self, url: &str) -> Result<Url, PopcatError> {
        validation::web_url("url", url)?;

        self.resolve_url(EndpointRequest::get("/screenshot").param("url", url))
            .await
    }

    pub async fn chatbot(
        &self,
        message: &str,
        owner: &str,
        botname: &str,
    ) -> Result<Value, PopcatError> {
        validation::text("message", message)?;
        validation::text("owner", owner)?;
        validation::text("botname", botname)?;

        self.fetch_json(
            EndpointRequest::get("/chatbot")
                .param("msg", message)
                .param("owner", owner)
                .param("botname", botname),
        )
        .await
    }

    /// Welcome card image.
    ///
    /// `background` must be an HTTPS URL ending in `.png`; `avatar` any web URL.
    pub async fn welcomecard(
        &self,
        background: &str,
        avatar: &str,
        text1: &str,
        text2: &str,
        text3: &str,
    ) -> Result<Url, PopcatError> {
        validation::web_url("background", background)?;
        validation::web_url("avatar", avatar)?;
        validation::text("text1", text1)?;
        validation::text("text2", text2)?;
        validation::text("text3", text3)?;
        validation::png_background("background", background)?;

        self.resolve_url(
            EndpointRequest::get("/welcomecard")
                .param("background", background)
                .param("avatar", avatar)
                .param("text1", text1)
                .param("text2", text2)
                .param("text3", text3),
        )
        .await
    }
}
