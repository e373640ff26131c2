use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{FetchedImage, GenerationRequest, ImageLocator, ImageProvider};
use crate::error::ProviderError;

#[derive(Debug, Serialize)]
struct GenerationBody<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u32,
    size: &'a str,
    quality: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    data: Vec<GeneratedImage>,
}

#[derive(Debug, Deserialize)]
struct GeneratedImage {
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// OpenAI images API over a blocking reqwest client, built once and passed to the driver.
pub struct OpenAiProvider {
    client: Client,
    api_base: String,
    api_key: String,
}

impl OpenAiProvider {
    pub fn new(api_base: &str, api_key: &str) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .user_agent(concat!("gallery-fill/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    fn generations_url(&self) -> String {
        format!("{}/images/generations", self.api_base)
    }
}

impl ImageProvider for OpenAiProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<ImageLocator, ProviderError> {
        let body = GenerationBody {
            model: &request.model,
            prompt: &request.prompt,
            n: request.count,
            size: &request.size,
            quality: &request.quality,
        };
        debug!(model = %request.model, size = %request.size, "Requesting image generation");

        let response = self
            .client
            .post(self.generations_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let raw = response.text().unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: api_error_message(&raw),
            });
        }

        let parsed: GenerationResponse = response.json()?;
        locator_from(parsed)
    }

    fn fetch(&self, locator: &ImageLocator) -> Result<FetchedImage, ProviderError> {
        let response = self.client.get(locator.as_str()).send()?;
        let status = response.status().as_u16();
        let bytes = response.bytes()?.to_vec();
        trace!(status, len = bytes.len(), "Fetched generated image");
        Ok(FetchedImage { status, bytes })
    }
}

fn locator_from(response: GenerationResponse) -> Result<ImageLocator, ProviderError> {
    response
        .data
        .into_iter()
        .next()
        .and_then(|image| image.url)
        .map(ImageLocator)
        .ok_or(ProviderError::MissingLocator)
}

fn api_error_message(raw: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(raw) {
        Ok(envelope) => envelope.error.message,
        Err(_) => raw.trim().to_string(),
    }
}
