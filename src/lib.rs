//! # finder-dev
//!
//! Terminal front-end for FinderDev: a timed splash screen followed by the
//! home page, with all copy and timing read from JSON content documents.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use finder_dev::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     finder_dev::run(Config::default()).await
//! }
//! ```

mod app;
mod data;
mod home;
pub mod logging;
mod models;
mod shell;
pub mod splash;
pub mod terminal;
mod ui;

#[cfg(test)]
mod testing;

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use thiserror::Error;
use tokio::time::{Instant, MissedTickBehavior};

pub use app::App;
pub use data::{ContentLoadError, ContentLoader, ContentSource, Document};
pub use home::HomeView;
pub use models::{
    AnimationTiming, DocumentMetadata, HeroContent, HomeContent, LoadingContent, OpenGraph,
    SiteMeta, SiteMetadata, SplashContent, SplashSettings, TwitterCard, TwitterMeta,
};
pub use shell::PageShell;

const DEFAULT_TICK_RATE: Duration = Duration::from_millis(16);

/// Error type for the binary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("content error: {0}")]
    Content(#[from] ContentLoadError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid log file path: {}", .0.display())]
    LogPath(PathBuf),

    #[error("failed to open log file: {0}")]
    LogFile(#[from] tracing_appender::rolling::InitError),

    #[error("failed to install logger: {0}")]
    Logger(#[from] tracing_subscriber::util::TryInitError),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub content: ContentSource,
    /// How often timers are advanced and a frame is drawn.
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: ContentSource::Bundled,
            tick_rate: DEFAULT_TICK_RATE,
        }
    }
}

/// Run the front-end until the user quits.
pub async fn run(config: Config) -> Result<(), AppError> {
    let mut app = App::new(ContentLoader::new(config.content));
    tracing::info!(title = %app.shell().metadata().title, "starting");

    let mut term = terminal::init(&app.shell().metadata().title)?;
    let result = run_event_loop(&mut term, &mut app, config.tick_rate).await;
    terminal::restore()?;
    result
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    tick_rate: Duration,
) -> Result<(), AppError> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let now = Instant::now();
                app.tick(now - last_tick);
                last_tick = now;
            }
            event = events.next() => match event {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key.code);
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
        }
    }

    Ok(())
}

/// All three documents, loaded once for `--check`.
#[derive(Debug, Clone)]
pub struct ContentSummary {
    pub site: SiteMetadata,
    pub home: HomeContent,
    pub splash: SplashContent,
}

impl ContentSummary {
    pub fn load(loader: &ContentLoader) -> Result<Self, ContentLoadError> {
        Ok(Self {
            site: loader.load_site()?,
            home: loader.load_home()?,
            splash: loader.load_splash()?,
        })
    }

    /// How long the splash stays fully visible with this content.
    pub fn splash_hold(&self) -> Duration {
        self.home
            .splash
            .min_display()
            .max(self.splash.animation.duration())
    }
}

impl fmt::Display for ContentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let metadata = DocumentMetadata::from_site(&self.site);
        writeln!(f, "site: {} ({})", metadata.title, metadata.twitter.card)?;
        writeln!(
            f,
            "home: \"{}\" (splash {})",
            self.home.hero.title,
            if self.home.splash.show_on_load { "on" } else { "off" }
        )?;
        write!(
            f,
            "splash: \"{}\" (hold {} ms, fade {} ms)",
            self.splash.title,
            self.splash_hold().as_millis(),
            self.splash.animation.fade_out_duration
        )
    }
}
