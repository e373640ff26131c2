use glob::Pattern;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Filenames (not paths) of every `*.<extension>` file directly inside `image_dir`.
///
/// A missing directory is created and reported as empty. The scan is redone
/// on every call; nothing is remembered between runs.
pub fn list_existing_filenames(image_dir: &Path, extension: &str) -> io::Result<HashSet<String>> {
    if !image_dir.exists() {
        fs::create_dir_all(image_dir)?;
        info!("Created image directory {}", image_dir.display());
        return Ok(HashSet::new());
    }

    let pattern = format!(
        "{}/*.{}",
        Pattern::escape(&image_dir.to_string_lossy()),
        Pattern::escape(extension)
    );
    let paths = glob::glob(&pattern)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let mut existing = HashSet::new();
    for entry in paths {
        match entry {
            Ok(path) if path.is_file() => {
                if let Some(name) = path.file_name() {
                    existing.insert(name.to_string_lossy().into_owned());
                }
            }
            Ok(_) => {}
            Err(err) => warn!("Skipping unreadable store entry: {}", err),
        }
    }

    debug!(
        "{} existing .{} images in {}",
        existing.len(),
        extension,
        image_dir.display()
    );
    Ok(existing)
}

pub fn image_path(image_dir: &Path, filename: &str) -> PathBuf {
    image_dir.join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_directory_is_created_and_empty() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path().join("assets").join("images");

        let existing = list_existing_filenames(&dir, "webp").unwrap();

        assert!(existing.is_empty());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_only_recognized_extension_is_listed() {
        let tmp = tempdir().unwrap();
        fs::write(tmp.path().join("amarina.webp"), b"img").unwrap();
        fs::write(tmp.path().join("serafina.png"), b"img").unwrap();
        fs::write(tmp.path().join("notes.txt"), b"txt").unwrap();
        fs::create_dir(tmp.path().join("folder.webp")).unwrap();

        let existing = list_existing_filenames(tmp.path(), "webp").unwrap();

        assert_eq!(existing.len(), 1);
        assert!(existing.contains("amarina.webp"));
    }
}
