use config::{Config, Environment, File as ConfigFile};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Error;
use crate::fill::FillSettings;
use crate::prompt::{PromptTemplate, DEFAULT_TEMPLATE};

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub catalog_path: PathBuf,
    pub image_dir: PathBuf,
    pub image_extension: String,
    pub delay_secs: u64,
    pub model: String,
    pub size: String,
    pub quality: String,
    pub api_base: String,
    pub prompt_template: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("src/data/cities.json"),
            image_dir: PathBuf::from("src/assets/images"),
            image_extension: "webp".to_string(),
            delay_secs: 2,
            model: "dall-e-3".to_string(),
            size: "1024x1024".to_string(),
            quality: "standard".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            prompt_template: DEFAULT_TEMPLATE.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then `Config.toml` if present, then `GALLERY_FILL_*` environment variables.
    pub fn load() -> Result<AppConfig, Error> {
        let defaults = AppConfig::default();
        let builder = Config::builder()
            .set_default("catalog_path", defaults.catalog_path.to_string_lossy().into_owned())?
            .set_default("image_dir", defaults.image_dir.to_string_lossy().into_owned())?
            .set_default("image_extension", defaults.image_extension)?
            .set_default("delay_secs", defaults.delay_secs)?
            .set_default("model", defaults.model)?
            .set_default("size", defaults.size)?
            .set_default("quality", defaults.quality)?
            .set_default("api_base", defaults.api_base)?
            .set_default("prompt_template", defaults.prompt_template)?
            .add_source(ConfigFile::with_name("Config").required(false))
            .add_source(Environment::with_prefix("GALLERY_FILL"))
            .build()?;

        Ok(builder.try_deserialize::<AppConfig>()?)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs)
    }

    pub fn fill_settings(&self) -> FillSettings {
        FillSettings {
            image_dir: self.image_dir.clone(),
            extension: self.image_extension.clone(),
            template: PromptTemplate::new(&self.prompt_template),
            model: self.model.clone(),
            size: self.size.clone(),
            quality: self.quality.clone(),
            delay: self.delay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generator_parameters() {
        let config = AppConfig::default();
        assert_eq!(config.image_extension, "webp");
        assert_eq!(config.model, "dall-e-3");
        assert_eq!(config.size, "1024x1024");
        assert_eq!(config.quality, "standard");
        assert_eq!(config.delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_fill_settings_carry_config_values() {
        let config = AppConfig {
            image_dir: PathBuf::from("/tmp/gallery"),
            delay_secs: 0,
            ..AppConfig::default()
        };
        let settings = config.fill_settings();
        assert_eq!(settings.image_dir, PathBuf::from("/tmp/gallery"));
        assert_eq!(settings.extension, "webp");
        assert_eq!(settings.delay, Duration::ZERO);
    }
}
