use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{HomeContent, SiteMetadata, SplashContent};

const BUNDLED_SITE: &str = include_str!("../../content/config/site-data.json");
const BUNDLED_HOME: &str = include_str!("../../content/data/home.json");
const BUNDLED_SPLASH: &str = include_str!("../../content/data/splash.json");

/// The three content documents, each at a fixed path inside the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Document {
    Site,
    Home,
    Splash,
}

impl Document {
    pub fn relative_path(self) -> &'static str {
        match self {
            Document::Site => "config/site-data.json",
            Document::Home => "data/home.json",
            Document::Splash => "data/splash.json",
        }
    }

    fn bundled(self) -> &'static str {
        match self {
            Document::Site => BUNDLED_SITE,
            Document::Home => BUNDLED_HOME,
            Document::Splash => BUNDLED_SPLASH,
        }
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.relative_path())
    }
}

#[derive(Debug, Error)]
pub enum ContentLoadError {
    #[error("failed to read {document} from {}: {source}", .path.display())]
    Missing {
        document: Document,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {document}: {source}")]
    Malformed {
        document: Document,
        #[source]
        source: serde_json::Error,
    },
}

impl ContentLoadError {
    pub fn document(&self) -> Document {
        match self {
            ContentLoadError::Missing { document, .. } => *document,
            ContentLoadError::Malformed { document, .. } => *document,
        }
    }
}

/// Where the content documents live.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContentSource {
    /// Copies compiled into the binary.
    #[default]
    Bundled,
    /// A directory laid out like `content/`.
    Directory(PathBuf),
}

/// Reads content documents. Every call goes back to the source.
#[derive(Debug, Clone, Default)]
pub struct ContentLoader {
    source: ContentSource,
}

impl ContentLoader {
    pub fn new(source: ContentSource) -> Self {
        Self { source }
    }

    pub fn bundled() -> Self {
        Self::new(ContentSource::Bundled)
    }

    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(ContentSource::Directory(dir.as_ref().to_path_buf()))
    }

    pub fn load_site(&self) -> Result<SiteMetadata, ContentLoadError> {
        self.load(Document::Site)
    }

    pub fn load_home(&self) -> Result<HomeContent, ContentLoadError> {
        self.load(Document::Home)
    }

    pub fn load_splash(&self) -> Result<SplashContent, ContentLoadError> {
        self.load(Document::Splash)
    }

    fn load<T: DeserializeOwned>(&self, document: Document) -> Result<T, ContentLoadError> {
        let parsed = match &self.source {
            ContentSource::Bundled => serde_json::from_str(document.bundled()),
            ContentSource::Directory(dir) => {
                let path = dir.join(document.relative_path());
                let json_content =
                    fs::read_to_string(&path).map_err(|source| ContentLoadError::Missing {
                        document,
                        path,
                        source,
                    })?;
                serde_json::from_str(&json_content)
            }
        };

        parsed.map_err(|source| ContentLoadError::Malformed { document, source })
    }
}
