//! Top-level layout state: document metadata plus the splash gate.

use std::time::Duration;

use crate::data::ContentLoader;
use crate::models::DocumentMetadata;
use crate::splash::SplashGate;

pub struct PageShell {
    metadata: DocumentMetadata,
    gate: SplashGate,
}

impl PageShell {
    pub fn mount(loader: &ContentLoader) -> Self {
        let metadata = match loader.load_site() {
            Ok(site) => DocumentMetadata::from_site(&site),
            Err(err) => {
                tracing::error!(error = %err, "failed to load site metadata, using defaults");
                DocumentMetadata::fallback()
            }
        };

        Self {
            metadata,
            gate: SplashGate::mount(loader),
        }
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    pub fn gate(&self) -> &SplashGate {
        &self.gate
    }

    pub fn gate_mut(&mut self) -> &mut SplashGate {
        &mut self.gate
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.gate.tick(elapsed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TwitterCard;
    use crate::testing::{ContentFixture, home_json, site_json};

    #[test]
    fn test_metadata_from_site_document() {
        let fixture = ContentFixture::new()
            .site(&site_json("summary_large_image"))
            .home(&home_json(false, 2000));
        let shell = PageShell::mount(&fixture.loader());

        assert_eq!(shell.metadata().title, "FinderDev");
        assert_eq!(shell.metadata().twitter.card, TwitterCard::SummaryLargeImage);
        assert!(!shell.gate().is_showing());
    }

    #[test]
    fn test_missing_site_document_uses_fallback() {
        let fixture = ContentFixture::new();
        let shell = PageShell::mount(&fixture.loader());

        assert_eq!(shell.metadata(), &DocumentMetadata::fallback());
    }
}
