use crate::client::PopcatClient;
use crate::error::PopcatError;
use crate::request::EndpointRequest;
use crate::validation;

use url::Url;

endpoint_group! {
    /// Filters that take a single `image` URL.
    pub enum ImageFilter {
        Jail => "/jail",
        Blur => "/blur",
        Invert => "/invert",
        Greyscale => "/greyscale",
        Drip => "/drip",
        Clown => "/clown",
        Wanted => "/wanted",
        Ad => "/ad",
        Uncover => "/uncover",
        Communism => "/communism",
        JokeOverHead => "/jokeoverhead",
        Mnm => "/mnm",
    }
}

impl PopcatClient {
    /// Apply `filter` to the image at `image` and return the rendered URL.
    pub async fn filter(&self, filter: ImageFilter, image: &str) -> Result<Url, PopcatError> {
        validation::http_url("image", image)?;

        self.resolve_url(EndpointRequest::get(filter.path()).param("image", image))
            .await
    }

    pub async fn jail(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Jail, image).await
    }

    pub async fn blur(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Blur, image).await
    }

    pub async fn invert(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Invert, image).await
    }

    pub async fn greyscale(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Greyscale, image).await
    }

    pub async fn drip(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Drip, image).await
    }

    pub async fn clown(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Clown, image).await
    }

    pub async fn wanted(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Wanted, image).await
    }

    pub async fn ad(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Ad, image).await
    }

    pub async fn uncover(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Uncover, image).await
    }

    pub async fn communism(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Communism, image).await
    }

    pub async fn jokeoverhead(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::JokeOverHead, image).await
    }

    pub async fn mnm(&self, image: &str) -> Result<Url, PopcatError> {
        self.filter(ImageFilter::Mnm, image).await
    }

    /// Tint an image. `color` is passed through as given (hex or name).
    pub async fn colorify(&self, image: &str, color: &str) -> Result<Url, PopcatError> {
        validation::http_url("image", image)?;
        validation::text("color", color)?;

        self.resolve_url(
            EndpointRequest::get("/colorify")
                .param("image", image)
                .param("color", color),
        )
        .await
    }

    /// `text` is optional; `None` or `""` leaves the parameter off.
    pub async fn gun(&self, image: &str, text: Option<&str>) -> Result<Url, PopcatError> {
        validation::http_url("image", image)?;

        self.resolve_url(
            EndpointRequest::get("/gun")
                .param("image", image)
                .optional_param("text", text),
        )
        .await
    }
}
