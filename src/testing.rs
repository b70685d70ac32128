//! Content directories for unit tests.

use std::fs;

use tempfile::TempDir;

use crate::data::{ContentLoader, Document};

/// A temporary content directory. Documents that are never written are
/// missing, so loading them fails.
pub struct ContentFixture {
    dir: TempDir,
}

impl ContentFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create content dir"),
        }
    }

    pub fn site(self, json: &str) -> Self {
        self.write(Document::Site, json)
    }

    pub fn home(self, json: &str) -> Self {
        self.write(Document::Home, json)
    }

    pub fn splash(self, json: &str) -> Self {
        self.write(Document::Splash, json)
    }

    pub fn loader(&self) -> ContentLoader {
        ContentLoader::from_dir(self.dir.path())
    }

    fn write(self, document: Document, json: &str) -> Self {
        let path = self.dir.path().join(document.relative_path());
        fs::create_dir_all(path.parent().expect("document has a parent dir"))
            .expect("create document dir");
        fs::write(&path, json).expect("write document");
        self
    }
}

pub fn splash_json(title: &str, duration: u64, fade_out: u64) -> String {
    serde_json::json!({
        "title": title,
        "tagline": "Connect. Collaborate. Create.",
        "loading": { "text": "Loading" },
        "animation": { "duration": duration, "fadeOutDuration": fade_out }
    })
    .to_string()
}

pub fn home_json(show_on_load: bool, min_display_time: u64) -> String {
    serde_json::json!({
        "hero": {
            "title": "Find your next collaborator",
            "subtitle": "Build with developers like you",
            "description": "Match on skills and ship together"
        },
        "splash": { "showOnLoad": show_on_load, "minDisplayTime": min_display_time }
    })
    .to_string()
}

pub fn site_json(card: &str) -> String {
    serde_json::json!({
        "siteName": "FinderDev",
        "siteDescription": "Find developers to build with",
        "meta": {
            "ogTitle": "FinderDev - Connect",
            "ogDescription": "Meet developers",
            "twitterCard": card
        }
    })
    .to_string()
}
