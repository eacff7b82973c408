use std::fs;
use std::io::Write;
use std::path::PathBuf;
use log::{debug, info};
use crate::errors::WikiError;
use crate::types::Page;

pub const PAGE_EXTENSION: &str = "txt";

/// Service for storing pages as `<title>.txt` files
#[derive(Clone)]
pub struct PageService {
    base_dir: PathBuf,
}

impl PageService {
    /// Create a new page service rooted at `base_dir`
    pub fn new(base_dir: PathBuf) -> Self {
        debug!("Creating PageService with base directory: {:?}", base_dir);
        Self { base_dir }
    }

    /// Path of the file backing `title`
    pub fn page_path(&self, title: &str) -> PathBuf {
        self.base_dir.join(format!("{}.{}", title, PAGE_EXTENSION))
    }

    /// Write the page body, creating or truncating its file (owner read/write only)
    pub fn save(&self, page: &Page) -> Result<(), WikiError> {
        let path = self.page_path(&page.title);
        debug!("Saving page '{}' to {:?}", page.title, path);

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&path)?;
        file.write_all(&page.body)?;

        info!("Saved page '{}', {} bytes", page.title, page.body.len());
        Ok(())
    }

    /// Read a page; any read failure is reported as `NotFound`
    pub fn load(&self, title: &str) -> Result<Page, WikiError> {
        let path = self.page_path(title);
        match fs::read(&path) {
            Ok(body) => {
                debug!("Loaded page '{}', {} bytes", title, body.len());
                Ok(Page::new(title, body))
            }
            Err(e) => {
                debug!("Failed to read page {:?}: {}", path, e);
                Err(WikiError::NotFound)
            }
        }
    }
}
