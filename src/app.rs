use std::time::Duration;

use crossterm::event::KeyCode;

use crate::data::ContentLoader;
use crate::home::HomeView;
use crate::shell::PageShell;

pub struct App {
    loader: ContentLoader,
    shell: PageShell,
    home: HomeView,
    pub should_quit: bool,
}

impl App {
    /// Mount every component. Each one loads its own content.
    pub fn new(loader: ContentLoader) -> Self {
        let shell = PageShell::mount(&loader);
        let home = HomeView::mount(&loader);

        Self {
            loader,
            shell,
            home,
            should_quit: false,
        }
    }

    pub fn shell(&self) -> &PageShell {
        &self.shell
    }

    pub fn home(&self) -> &HomeView {
        &self.home
    }

    pub fn splash_showing(&self) -> bool {
        self.shell.gate().is_showing()
    }

    pub fn tick(&mut self, elapsed: Duration) {
        self.shell.tick(elapsed);
    }

    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') | KeyCode::Char('R') if self.splash_showing() => {
                self.shell.gate_mut().reload(&self.loader);
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(ContentLoader::bundled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ContentFixture, home_json, site_json, splash_json};

    fn fixture(show_on_load: bool) -> ContentFixture {
        ContentFixture::new()
            .site(&site_json("summary"))
            .home(&home_json(show_on_load, 2000))
            .splash(&splash_json("FinderDev", 1500, 500))
    }

    #[test]
    fn test_splash_then_home() {
        let fixture = fixture(true);
        let mut app = App::new(fixture.loader());
        assert!(app.splash_showing());
        assert!(app.home().hero().is_some());

        app.tick(Duration::from_millis(2500));
        assert!(!app.splash_showing());
    }

    #[test]
    fn test_quit_keys() {
        let fixture = fixture(false);
        let mut app = App::new(fixture.loader());

        app.handle_key(KeyCode::Enter);
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_reload_restarts_typewriter_on_new_title() {
        let fixture = fixture(true);
        let mut app = App::new(fixture.loader());
        app.tick(Duration::from_millis(400));

        let typed = |app: &App| {
            app.shell()
                .gate()
                .controller()
                .map(|controller| controller.typed_title().to_string())
        };
        assert_eq!(typed(&app).as_deref(), Some("Finde"));

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(typed(&app).as_deref(), Some("Finde"));

        let _fixture = fixture.splash(&splash_json("Hello", 1500, 500));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(typed(&app).as_deref(), Some(""));
    }

    #[test]
    fn test_bundled_content_mounts() {
        let app = App::default();
        assert!(app.home().hero().is_some());
        assert_eq!(app.shell().metadata().title, "FinderDev");
    }
}
