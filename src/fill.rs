use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;
use tracing::{error, info};

use crate::catalog::{self, Entity};
use crate::error::{Error, FillError};
use crate::progress::FillReporter;
use crate::prompt::PromptTemplate;
use crate::provider::{GenerationRequest, ImageProvider};
use crate::store;

/// Fixed parameters shared by every generation in a run.
#[derive(Debug, Clone)]
pub struct FillSettings {
    pub image_dir: PathBuf,
    pub extension: String,
    pub template: PromptTemplate,
    pub model: String,
    pub size: String,
    pub quality: String,
    /// Pause after each successful fill when another entity is pending.
    pub delay: Duration,
}

/// Result of one per-entity fill attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    Filled { path: PathBuf, bytes: usize },
    Failed { reason: String },
}

impl FillOutcome {
    pub fn is_filled(&self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillSummary {
    pub catalog_size: usize,
    pub attempted: usize,
    pub filled: usize,
    pub failed: Vec<(String, String)>,
}

impl FillSummary {
    /// Nothing was missing at the start of the run.
    pub fn all_present(&self) -> bool {
        self.attempted == 0
    }
}

/// Catalog entities whose image file is not in `existing`, in catalog order.
pub fn compute_missing<'a>(
    catalog: &'a [Entity],
    existing: &HashSet<String>,
    extension: &str,
) -> Vec<&'a Entity> {
    catalog
        .iter()
        .filter(|entity| !existing.contains(&entity.image_filename(extension)))
        .collect()
}

pub struct FillDriver<P> {
    provider: P,
    settings: FillSettings,
}

impl<P: ImageProvider> FillDriver<P> {
    pub fn new(provider: P, settings: FillSettings) -> Self {
        Self { provider, settings }
    }

    /// Check the catalog, rescan the store and return what is still missing.
    pub fn plan<'a>(&self, entities: &'a [Entity]) -> Result<Vec<&'a Entity>, Error> {
        catalog::check_catalog(entities, &self.settings.extension)?;
        let existing =
            store::list_existing_filenames(&self.settings.image_dir, &self.settings.extension)?;
        Ok(compute_missing(entities, &existing, &self.settings.extension))
    }

    /// Generate, download and store the image for every missing entity, one at a time.
    /// Per-entity failures are reported and skipped; the run always finishes.
    pub fn run(
        &self,
        entities: &[Entity],
        reporter: &dyn FillReporter,
    ) -> Result<FillSummary, Error> {
        let missing = self.plan(entities)?;
        reporter.on_plan(missing.len(), entities.len());

        let mut summary = FillSummary {
            catalog_size: entities.len(),
            ..FillSummary::default()
        };

        if missing.is_empty() {
            info!("All {} entities have images", entities.len());
            reporter.on_fill_complete(&summary);
            return Ok(summary);
        }

        info!("Found {} entities missing images", missing.len());

        let total = missing.len();
        for (index, entity) in missing.iter().enumerate() {
            reporter.on_entity_start(&entity.name, index + 1, total);
            summary.attempted += 1;

            match self.fill_one(entity) {
                FillOutcome::Filled { path, bytes } => {
                    summary.filled += 1;
                    reporter.on_entity_filled(&entity.name, &path, bytes);

                    if index + 1 < total {
                        self.pause(reporter);
                    }
                }
                FillOutcome::Failed { reason } => {
                    reporter.on_entity_failed(&entity.name, &reason);
                    summary.failed.push((entity.name.clone(), reason));
                }
            }
        }

        reporter.on_fill_complete(&summary);
        Ok(summary)
    }

    fn pause(&self, reporter: &dyn FillReporter) {
        reporter.on_pause(self.settings.delay);
        if !self.settings.delay.is_zero() {
            thread::sleep(self.settings.delay);
        }
    }

    pub fn fill_one(&self, entity: &Entity) -> FillOutcome {
        info!(entity = %entity.name, "Generating image");
        match self.try_fill(entity) {
            Ok((path, bytes)) => {
                info!(entity = %entity.name, path = %path.display(), bytes, "Saved image");
                FillOutcome::Filled { path, bytes }
            }
            Err(err) => {
                error!(entity = %entity.name, "Error generating image: {}", err);
                FillOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    pub fn request_for(&self, entity: &Entity) -> GenerationRequest {
        GenerationRequest {
            prompt: self
                .settings
                .template
                .render(&entity.name, &entity.description),
            model: self.settings.model.clone(),
            size: self.settings.size.clone(),
            quality: self.settings.quality.clone(),
            count: 1,
        }
    }

    fn try_fill(&self, entity: &Entity) -> Result<(PathBuf, usize), FillError> {
        let request = self.request_for(entity);
        let locator = self.provider.generate(&request)?;
        let image = self.provider.fetch(&locator)?;
        if !image.is_success() {
            return Err(FillError::TransferStatus(image.status));
        }

        let path = store::image_path(
            &self.settings.image_dir,
            &entity.image_filename(&self.settings.extension),
        );
        fs::write(&path, &image.bytes).map_err(|source| FillError::Write {
            path: path.clone(),
            source,
        })?;

        Ok((path, image.bytes.len()))
    }
}
