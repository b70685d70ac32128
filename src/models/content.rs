//! Shapes of the JSON content documents.
//!
//! Field names follow the camelCase keys used in the content files. Shape is
//! the only validation applied: any document that deserializes is accepted.

use std::time::Duration;

use serde::Deserialize;

/// `config/site-data.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub site_name: String,
    pub site_description: String,
    pub meta: SiteMeta,
}

/// Social-sharing fields of the site document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    pub og_title: String,
    pub og_description: String,
    pub twitter_card: String,
}

/// `data/home.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HomeContent {
    pub hero: HeroContent,
    pub splash: SplashSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Whether the splash runs for this session, and for how long at minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplashSettings {
    pub show_on_load: bool,
    /// Milliseconds.
    pub min_display_time: u64,
}

impl SplashSettings {
    pub fn min_display(&self) -> Duration {
        Duration::from_millis(self.min_display_time)
    }
}

/// `data/splash.json`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SplashContent {
    pub title: String,
    pub tagline: String,
    #[serde(default)]
    pub description: Option<String>,
    pub loading: LoadingContent,
    pub animation: AnimationTiming,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoadingContent {
    pub text: String,
    #[serde(default)]
    pub subtext: Option<String>,
}

/// Animation timing, both fields in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationTiming {
    pub duration: u64,
    pub fade_out_duration: u64,
}

impl AnimationTiming {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration)
    }

    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splash_content_optional_fields() {
        let json = r#"{
            "title": "FinderDev",
            "tagline": "Connect.",
            "loading": { "text": "Loading" },
            "animation": { "duration": 1500, "fadeOutDuration": 500 }
        }"#;
        let content: SplashContent = serde_json::from_str(json).unwrap();
        assert_eq!(content.description, None);
        assert_eq!(content.loading.subtext, None);
        assert_eq!(content.animation.duration(), Duration::from_millis(1500));
        assert_eq!(content.animation.fade_out(), Duration::from_millis(500));
    }

    #[test]
    fn test_site_metadata_ignores_theme() {
        let json = r#"{
            "siteName": "FinderDev",
            "siteDescription": "Find developers",
            "defaultTheme": "dark",
            "meta": {
                "ogTitle": "FinderDev",
                "ogDescription": "Meet developers",
                "twitterCard": "summary"
            }
        }"#;
        let site: SiteMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(site.site_name, "FinderDev");
        assert_eq!(site.meta.twitter_card, "summary");
    }

    #[test]
    fn test_home_content_requires_splash_settings() {
        let json = r#"{ "hero": { "title": "t", "subtitle": "s" } }"#;
        assert!(serde_json::from_str::<HomeContent>(json).is_err());
    }
}
