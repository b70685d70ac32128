//! The timed splash sequence.
//!
//! `Loading -> Revealing -> HoldingMinimum -> FadingOut -> Completed`
//!
//! Once content is loaded the controller runs three things side by side: a
//! typewriter reveal of the title, a blinking cursor, and a display-time gate
//! of `max(min_display_time, animation.duration)`. When the gate fires the
//! splash turns invisible and a fade-out timer starts; when that fires the
//! completion callback runs, exactly once. A controller whose content fails to
//! load completes immediately.

use std::time::Duration;

use crate::data::ContentLoader;
use crate::models::SplashContent;

use super::scheduler::{Scheduler, TimerHandle};

pub const TYPEWRITER_INTERVAL: Duration = Duration::from_millis(80);
pub const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(530);
pub const DEFAULT_MIN_DISPLAY_TIME: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Loading,
    /// Title is still being typed out.
    Revealing,
    /// Title fully shown, waiting on the display-time gate.
    HoldingMinimum,
    FadingOut,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplashTask {
    TypeNextChar,
    BlinkCursor,
    DisplayElapsed,
    FadeOutElapsed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashOptions {
    pub min_display_time: Duration,
}

impl Default for SplashOptions {
    fn default() -> Self {
        Self {
            min_display_time: DEFAULT_MIN_DISPLAY_TIME,
        }
    }
}

/// What the splash should look like right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashView<'a> {
    pub phase: SplashPhase,
    /// False once fading out.
    pub visible: bool,
    pub typed_title: &'a str,
    pub cursor_visible: bool,
    pub tagline: &'a str,
    pub description: Option<&'a str>,
    pub loading_text: &'a str,
    pub loading_subtext: Option<&'a str>,
}

type CompletionCallback = Box<dyn FnOnce()>;

pub struct SplashController {
    phase: SplashPhase,
    options: SplashOptions,
    content: Option<SplashContent>,
    scheduler: Scheduler<SplashTask>,
    typewriter: Option<TimerHandle>,
    typed_chars: usize,
    cursor_visible: bool,
    visible: bool,
    on_complete: Option<CompletionCallback>,
}

impl SplashController {
    /// Load splash content and start the sequence.
    ///
    /// If the content cannot be loaded the error is logged and `on_complete`
    /// runs before this returns.
    pub fn mount<F>(loader: &ContentLoader, options: SplashOptions, on_complete: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let mut controller = Self {
            phase: SplashPhase::Loading,
            options,
            content: None,
            scheduler: Scheduler::new(),
            typewriter: None,
            typed_chars: 0,
            cursor_visible: true,
            visible: true,
            on_complete: Some(Box::new(on_complete)),
        };

        match loader.load_splash() {
            Ok(content) => controller.start(content),
            Err(err) => {
                tracing::error!(error = %err, "failed to load splash content, skipping splash");
                controller.complete();
            }
        }

        controller
    }

    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Completed
    }

    pub fn is_visible(&self) -> bool {
        self.visible && !self.is_complete()
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn content(&self) -> Option<&SplashContent> {
        self.content.as_ref()
    }

    /// Time since mount, as seen by the controller's timers.
    pub fn elapsed(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn typed_title(&self) -> &str {
        let Some(content) = &self.content else {
            return "";
        };
        let end = content
            .title
            .char_indices()
            .nth(self.typed_chars)
            .map(|(index, _)| index)
            .unwrap_or(content.title.len());
        &content.title[..end]
    }

    /// `None` once completed: a finished splash renders nothing.
    pub fn view(&self) -> Option<SplashView<'_>> {
        if self.is_complete() {
            return None;
        }
        let content = self.content.as_ref()?;

        Some(SplashView {
            phase: self.phase,
            visible: self.visible,
            typed_title: self.typed_title(),
            cursor_visible: self.cursor_visible,
            tagline: &content.tagline,
            description: content.description.as_deref(),
            loading_text: &content.loading.text,
            loading_subtext: content.loading.subtext.as_deref(),
        })
    }

    /// Run every timer that falls due within `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.is_complete() {
            return;
        }

        let deadline = self.scheduler.now() + elapsed;
        while let Some(task) = self.scheduler.poll_until(deadline) {
            self.handle(task);
            if self.is_complete() {
                break;
            }
        }
    }

    /// Swap in new content. The display and fade timers keep running and the
    /// phase never moves backwards.
    ///
    /// A new title mid-reveal restarts the typewriter from empty. A new title
    /// after the reveal is shown in full, and an unchanged title is left alone.
    pub fn replace_content(&mut self, content: SplashContent) {
        if matches!(self.phase, SplashPhase::Loading | SplashPhase::Completed) {
            return;
        }

        let title_changed = self
            .content
            .as_ref()
            .is_none_or(|current| current.title != content.title);
        let revealing = self.typewriter.is_some();
        self.content = Some(content);

        if !title_changed {
            return;
        }
        if revealing {
            self.restart_typewriter();
        } else {
            self.typed_chars = self.title_len();
        }
    }

    /// Re-read splash content from `loader`; on failure the current content stays.
    pub fn reload(&mut self, loader: &ContentLoader) {
        match loader.load_splash() {
            Ok(content) => {
                tracing::debug!("splash content reloaded");
                self.replace_content(content);
            }
            Err(err) => tracing::warn!(error = %err, "failed to reload splash content"),
        }
    }

    /// Tear down. Pending timers are dropped and the completion callback, if
    /// it has not run yet, never will.
    pub fn unmount(mut self) {
        if !self.is_complete() {
            tracing::debug!(phase = ?self.phase, "splash unmounted before completion");
        }
        self.scheduler.clear();
        self.on_complete = None;
    }

    fn start(&mut self, content: SplashContent) {
        let hold = self.options.min_display_time.max(content.animation.duration());
        tracing::debug!(
            title = %content.title,
            hold_ms = u64::try_from(hold.as_millis()).unwrap_or(u64::MAX),
            fade_ms = content.animation.fade_out_duration,
            "splash started"
        );

        self.phase = SplashPhase::Revealing;
        self.content = Some(content);
        self.scheduler.every(CURSOR_BLINK_INTERVAL, SplashTask::BlinkCursor);
        self.scheduler.after(hold, SplashTask::DisplayElapsed);
        self.restart_typewriter();
    }

    fn restart_typewriter(&mut self) {
        if let Some(handle) = self.typewriter.take() {
            self.scheduler.cancel(handle);
        }
        self.typed_chars = 0;

        if self.title_len() == 0 {
            self.finish_reveal();
        } else {
            self.typewriter = Some(
                self.scheduler
                    .every(TYPEWRITER_INTERVAL, SplashTask::TypeNextChar),
            );
        }
    }

    fn finish_reveal(&mut self) {
        if let Some(handle) = self.typewriter.take() {
            self.scheduler.cancel(handle);
        }
        if self.phase == SplashPhase::Revealing {
            self.phase = SplashPhase::HoldingMinimum;
        }
    }

    fn title_len(&self) -> usize {
        self.content
            .as_ref()
            .map(|content| content.title.chars().count())
            .unwrap_or(0)
    }

    fn handle(&mut self, task: SplashTask) {
        match task {
            SplashTask::TypeNextChar => {
                let total = self.title_len();
                if self.typed_chars < total {
                    self.typed_chars += 1;
                }
                if self.typed_chars >= total {
                    self.finish_reveal();
                }
            }
            SplashTask::BlinkCursor => {
                self.cursor_visible = !self.cursor_visible;
            }
            SplashTask::DisplayElapsed => {
                let fade = self
                    .content
                    .as_ref()
                    .map(|content| content.animation.fade_out())
                    .unwrap_or(Duration::ZERO);
                self.visible = false;
                self.phase = SplashPhase::FadingOut;
                self.scheduler.after(fade, SplashTask::FadeOutElapsed);
            }
            SplashTask::FadeOutElapsed => self.complete(),
        }
    }

    fn complete(&mut self) {
        self.phase = SplashPhase::Completed;
        self.scheduler.clear();
        self.typewriter = None;
        tracing::debug!(
            elapsed_ms = u64::try_from(self.scheduler.now().as_millis()).unwrap_or(u64::MAX),
            "splash completed"
        );

        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}
