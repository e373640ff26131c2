use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::CatalogError;

/// A named catalog item that needs an illustration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "text")]
    pub description: String,
}

impl Entity {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn image_filename(&self, extension: &str) -> String {
        image_filename(&self.name, extension)
    }
}

/// `lowercase(name).<extension>`; the only link between an entity and its stored image.
pub fn image_filename(name: &str, extension: &str) -> String {
    format!("{}.{}", name.to_lowercase(), extension)
}

/// Read the ordered entity list from a JSON array of `{ "name", "text" }` records.
/// Extra fields on a record are ignored.
pub fn load_catalog(path: &Path, extension: &str) -> Result<Vec<Entity>, CatalogError> {
    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let entities = parse_catalog(&raw).map_err(|source| CatalogError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    check_catalog(&entities, extension)?;

    debug!("Loaded {} entities from {}", entities.len(), path.display());
    Ok(entities)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<Entity>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Every entity must derive its own plain file name inside the image directory.
pub fn check_catalog(entities: &[Entity], extension: &str) -> Result<(), CatalogError> {
    if let Some(entity) = entities.iter().find(|entity| !is_plain_name(&entity.name)) {
        return Err(CatalogError::InvalidName {
            name: entity.name.clone(),
        });
    }
    check_unique_filenames(entities, extension)
}

/// Separators, NUL, blank names and `.`/`..` would put the image where the flat store scan never looks.
fn is_plain_name(name: &str) -> bool {
    let trimmed = name.trim();
    !trimmed.is_empty()
        && trimmed != "."
        && trimmed != ".."
        && !name.contains(['/', '\\', '\0'])
}

/// Two entities deriving the same filename would silently shadow each other in the store.
pub fn check_unique_filenames(entities: &[Entity], extension: &str) -> Result<(), CatalogError> {
    let mut seen: HashMap<String, &str> = HashMap::with_capacity(entities.len());

    for entity in entities {
        let filename = entity.image_filename(extension);
        if let Some(first) = seen.get(&filename) {
            return Err(CatalogError::DuplicateFilename {
                first: first.to_string(),
                second: entity.name.clone(),
                filename,
            });
        }
        seen.insert(filename, &entity.name);
    }

    Ok(())
}
