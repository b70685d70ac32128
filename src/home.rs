use crate::data::ContentLoader;
use crate::models::HeroContent;

/// Hero section of the home page. Empty when home content failed to load.
pub struct HomeView {
    hero: Option<HeroContent>,
}

impl HomeView {
    pub fn mount(loader: &ContentLoader) -> Self {
        let hero = match loader.load_home() {
            Ok(home) => Some(home.hero),
            Err(err) => {
                tracing::error!(error = %err, "failed to load home content");
                None
            }
        };

        Self { hero }
    }

    pub fn hero(&self) -> Option<&HeroContent> {
        self.hero.as_ref()
    }
}
