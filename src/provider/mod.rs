mod openai;

pub use openai::OpenAiProvider;

use crate::error::ProviderError;

/// One text-to-image job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub prompt: String,
    pub model: String,
    pub size: String,
    pub quality: String,
    pub count: u32,
}

/// Transient address of a generated image, valid only for a short while.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLocator(pub String);

impl ImageLocator {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Raw download result. The status is checked by the caller.
#[derive(Debug, Clone)]
pub struct FetchedImage {
    pub status: u16,
    pub bytes: Vec<u8>,
}

impl FetchedImage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// External image service.
///
/// The HTTP implementation is [`OpenAiProvider`]; tests substitute in-memory fakes.
pub trait ImageProvider {
    fn generate(&self, request: &GenerationRequest) -> Result<ImageLocator, ProviderError>;
    fn fetch(&self, locator: &ImageLocator) -> Result<FetchedImage, ProviderError>;
}

impl<P: ImageProvider + ?Sized> ImageProvider for &P {
    fn generate(&self, request: &GenerationRequest) -> Result<ImageLocator, ProviderError> {
        (**self).generate(request)
    }

    fn fetch(&self, locator: &ImageLocator) -> Result<FetchedImage, ProviderError> {
        (**self).fetch(locator)
    }
}
