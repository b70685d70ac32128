mod content;
mod metadata;

pub use content::{
    AnimationTiming, HeroContent, HomeContent, LoadingContent, SiteMeta, SiteMetadata,
    SplashContent, SplashSettings,
};
pub use metadata::{DocumentMetadata, OpenGraph, TwitterCard, TwitterMeta};
