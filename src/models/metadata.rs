//! Document metadata derived from the site document.

use std::fmt;
use std::str::FromStr;

use super::SiteMetadata;

const FALLBACK_TITLE: &str = "FinderDev";
const FALLBACK_DESCRIPTION: &str = "Connect. Collaborate. Create.";
const OPEN_GRAPH_TYPE: &str = "website";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterMeta,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub kind: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitterMeta {
    pub card: TwitterCard,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TwitterCard {
    #[default]
    Summary,
    SummaryLargeImage,
}

impl FromStr for TwitterCard {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(TwitterCard::Summary),
            "summary_large_image" => Ok(TwitterCard::SummaryLargeImage),
            other => Err(format!("unknown twitter card type: {}", other)),
        }
    }
}

impl fmt::Display for TwitterCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwitterCard::Summary => write!(f, "summary"),
            TwitterCard::SummaryLargeImage => write!(f, "summary_large_image"),
        }
    }
}

impl DocumentMetadata {
    /// Derive metadata from the site document.
    ///
    /// An unrecognized card type falls back to [`TwitterCard::Summary`].
    pub fn from_site(site: &SiteMetadata) -> Self {
        let card = site.meta.twitter_card.parse().unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to summary card");
            TwitterCard::default()
        });

        Self {
            title: site.site_name.clone(),
            description: site.site_description.clone(),
            open_graph: OpenGraph {
                title: site.meta.og_title.clone(),
                description: site.meta.og_description.clone(),
                kind: OPEN_GRAPH_TYPE,
            },
            twitter: TwitterMeta {
                card,
                title: site.meta.og_title.clone(),
                description: site.meta.og_description.clone(),
            },
        }
    }

    /// Metadata used when the site document cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            title: FALLBACK_TITLE.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            open_graph: OpenGraph {
                title: FALLBACK_TITLE.to_string(),
                description: FALLBACK_DESCRIPTION.to_string(),
                kind: OPEN_GRAPH_TYPE,
            },
            twitter: TwitterMeta {
                card: TwitterCard::Summary,
                title: FALLBACK_TITLE.to_string(),
                description: FALLBACK_DESCRIPTION.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SiteMeta;

    fn site(card: &str) -> SiteMetadata {
        SiteMetadata {
            site_name: "FinderDev".to_string(),
            site_description: "Find developers".to_string(),
            meta: SiteMeta {
                og_title: "FinderDev - Connect".to_string(),
                og_description: "Meet developers".to_string(),
                twitter_card: card.to_string(),
            },
        }
    }

    #[test]
    fn test_from_site_maps_sharing_fields() {
        let metadata = DocumentMetadata::from_site(&site("summary_large_image"));
        assert_eq!(metadata.title, "FinderDev");
        assert_eq!(metadata.description, "Find developers");
        assert_eq!(metadata.open_graph.title, "FinderDev - Connect");
        assert_eq!(metadata.open_graph.kind, "website");
        assert_eq!(metadata.twitter.card, TwitterCard::SummaryLargeImage);
        assert_eq!(metadata.twitter.description, "Meet developers");
    }

    #[test]
    fn test_unknown_card_falls_back_to_summary() {
        let metadata = DocumentMetadata::from_site(&site("player"));
        assert_eq!(metadata.twitter.card, TwitterCard::Summary);
    }

    #[test]
    fn test_card_display_matches_content_tag() {
        assert_eq!(TwitterCard::SummaryLargeImage.to_string(), "summary_large_image");
        assert_eq!("summary".parse::<TwitterCard>(), Ok(TwitterCard::Summary));
    }
}
