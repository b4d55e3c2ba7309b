use crate::client::PopcatClient;
use crate::decode::{ANSWER_KEYS, FACT_KEYS, JOKE_KEYS};
use crate::error::PopcatError;
use crate::request::EndpointRequest;

use serde_json::Value;

endpoint_group! {
    /// Parameterless endpoints answering with one line of text.
    pub enum RandomText {
        Joke => "/joke",
        Fact => "/fact",
        EightBall => "/8ball",
    }
}

endpoint_group! {
    /// Parameterless endpoints answering with a JSON object.
    pub enum RandomData {
        Meme => "/randommeme",
        Car => "/car",
        ShowerThought => "/showerthought",
        WouldYouRather => "/wouldyourather",
    }
}

impl RandomText {
    /// Response key holding the text.
    pub const fn keys(&self) -> &'static [&'static str] {
        match self {
            RandomText::Joke => JOKE_KEYS,
            RandomText::Fact => FACT_KEYS,
            RandomText::EightBall => ANSWER_KEYS,
        }
    }
}

impl PopcatClient {
    pub async fn random_text(&self, endpoint: RandomText) -> Result<String, PopcatError> {
        self.fetch_text(EndpointRequest::get(endpoint.path()), endpoint.keys())
            .await
    }

    pub async fn random_data(&self, endpoint: RandomData) -> Result<Value, PopcatError> {
        self.fetch_json(EndpointRequest::get(endpoint.path())).await
    }

    pub async fn joke(&self) -> Result<String, PopcatError> {
        self.random_text(RandomText::Joke).await
    }

    pub async fn fact(&self) -> Result<String, PopcatError> {
        self.random_text(RandomText::Fact).await
    }

    /// Magic 8-ball answer.
    pub async fn eightball(&self) -> Result<String, PopcatError> {
        self.random_text(RandomText::EightBall).await
    }

    pub async fn randommeme(&self) -> Result<Value, PopcatError> {
        self.random_data(RandomData::Meme).await
    }

    pub async fn car(&self) -> Result<Value, PopcatError> {
        self.random_data(RandomData::Car).await
    }

    pub async fn showerthought(&self) -> Result<Value, PopcatError> {
        self.random_data(RandomData::ShowerThought).await
    }

    pub async fn wouldyourather(&self) -> Result<Value, PopcatError> {
        self.random_data(RandomData::WouldYouRather).await
    }
}
