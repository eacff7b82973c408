use std::path::PathBuf;
use std::fs;
use log::{debug, info, warn, error};
use crate::errors::WikiError;
use crate::services::page_service::PAGE_EXTENSION;

/// Service for enumerating pages stored in a directory
#[derive(Clone)]
pub struct FileService {
    base_dir: PathBuf,
}

impl FileService {
    /// Create a new file service
    pub fn new(base_dir: PathBuf) -> Self {
        debug!("Creating FileService with base directory: {:?}", base_dir);
        Self { base_dir }
    }

    /// List page titles: regular `.txt` entries with the extension stripped, sorted by title
    pub fn list_titles(&self) -> Result<Vec<String>, WikiError> {
        debug!("Listing pages in {:?}", self.base_dir);

        let entries = fs::read_dir(&self.base_dir)
            .map_err(|e| {
                error!("Failed to read directory {:?}: {}", self.base_dir, e);
                WikiError::Io(e)
            })?;

        let mut titles = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) => {
                    let is_dir = entry.file_type()
                        .map(|ft| ft.is_dir())
                        .unwrap_or(false);
                    if is_dir {
                        continue;
                    }
                    let name = entry.file_name().to_string_lossy().to_string();
                    if let Some(title) = title_from_file_name(&name) {
                        debug!("Found page: {}", title);
                        titles.push(title.to_string());
                    }
                }
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                }
            }
        }

        titles.sort();
        info!("Listed {:?}, found {} pages", self.base_dir, titles.len());
        Ok(titles)
    }
}

/// Strip the page extension; `None` for non-page files
fn title_from_file_name(name: &str) -> Option<&str> {
    let stem = name.strip_suffix(PAGE_EXTENSION)?.strip_suffix('.')?;
    if stem.is_empty() { None } else { Some(stem) }
}
