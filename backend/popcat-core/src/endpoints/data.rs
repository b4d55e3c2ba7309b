use crate::client::PopcatClient;
use crate::error::PopcatError;
use crate::request::EndpointRequest;
use crate::validation;

use serde_json::Value;

endpoint_group! {
    /// Lookups that take one text argument and return JSON.
    pub enum DataLookup {
        Weather => "/weather",
        GitHub => "/github",
        Npm => "/npm",
        Steam => "/steam",
        Imdb => "/imdb",
        Country => "/country",
        PeriodicTable => "/periodic_table",
        ColorInfo => "/colorinfo",
        ITunes => "/itunes",
    }
}

impl DataLookup {
    /// Query parameter the lookup value travels in.
    pub const fn param(&self) -> &'static str {
        match self {
            DataLookup::GitHub => "user",
            DataLookup::Country => "name",
            DataLookup::PeriodicTable => "element",
            DataLookup::ColorInfo => "color",
            DataLookup::Weather
            | DataLookup::Npm
            | DataLookup::Steam
            | DataLookup::Imdb
            | DataLookup::ITunes => "q",
        }
    }
}

impl PopcatClient {
    pub async fn lookup(&self, lookup: DataLookup, value: &str) -> Result<Value, PopcatError> {
        validation::text(lookup.param(), value)?;

        self.fetch_json(EndpointRequest::get(lookup.path()).param(lookup.param(), value))
            .await
    }

    pub async fn weather(&self, place: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::Weather, place).await
    }

    pub async fn github(&self, username: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::GitHub, username).await
    }

    pub async fn npm(&self, package: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::Npm, package).await
    }

    pub async fn steam(&self, name: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::Steam, name).await
    }

    pub async fn imdb(&self, name: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::Imdb, name).await
    }

    pub async fn country(&self, name: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::Country, name).await
    }

    pub async fn periodic_table(&self, element: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::PeriodicTable, element).await
    }

    pub async fn colorinfo(&self, color: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::ColorInfo, color).await
    }

    pub async fn itunes(&self, song: &str) -> Result<Value, PopcatError> {
        self.lookup(DataLookup::ITunes, song).await
    }

    pub async fn randomcolor(&self) -> Result<Value, PopcatError> {
        self.fetch_json(EndpointRequest::get("/randomcolor")).await
    }

    /// Subreddit details. A leading `r/` is dropped before sending.
    pub async fn subreddit(&self, name: &str) -> Result<Value, PopcatError> {
        let name = validation::subreddit("subreddit", name)?;

        self.fetch_json(EndpointRequest::get("/subreddit").param("subreddit", name))
            .await
    }
}
