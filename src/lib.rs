pub mod catalog;
pub mod config;
pub mod error;
pub mod fill;
pub mod progress;
pub mod prompt;
pub mod provider;
pub mod store;

pub use catalog::Entity;
pub use config::AppConfig;
pub use error::{CatalogError, Error, FillError, ProviderError};
pub use fill::{FillDriver, FillOutcome, FillSettings, FillSummary};
pub use progress::{FillReporter, SilentReporter};
pub use provider::{FetchedImage, GenerationRequest, ImageLocator, ImageProvider, OpenAiProvider};
