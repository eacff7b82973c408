use std::sync::Arc;
use std::path::PathBuf;

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pages_dir: Arc<PathBuf>,
    pub template_dir: Arc<PathBuf>,
}

impl From<&Config> for AppState {
    fn from(config: &Config) -> Self {
        Self {
            pages_dir: config.pages_dir.clone(),
            template_dir: config.template_dir.clone(),
        }
    }
}

/// A wiki page: the title doubles as the file stem, the body is stored verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self { title: title.into(), body: body.into() }
    }

    /// Page with no stored content yet
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Body as text, replacing invalid UTF-8 sequences
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Titles of all stored pages, computed per request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageList {
    pub titles: Vec<String>,
}

/// Data bound to a template at render time
#[derive(Debug, Clone)]
pub enum ViewModel {
    View(Page),
    Edit(Page),
    List(PageList),
}

impl ViewModel {
    /// Name of the template file (without `.html`) this view renders through
    pub fn template_name(&self) -> &'static str {
        match self {
            ViewModel::View(_) => "view",
            ViewModel::Edit(_) => "edit",
            ViewModel::List(_) => "list",
        }
    }
}
