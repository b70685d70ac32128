use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::data::ContentLoader;

use super::controller::{SplashController, SplashOptions};

/// Decides whether the splash runs and unmounts it once it is done.
pub struct SplashGate {
    show_splash: Rc<Cell<bool>>,
    controller: Option<SplashController>,
}

impl SplashGate {
    pub fn mount(loader: &ContentLoader) -> Self {
        let show_splash = Rc::new(Cell::new(false));

        let settings = match loader.load_home() {
            Ok(home) => Some(home.splash),
            Err(err) => {
                tracing::error!(error = %err, "failed to load home content, splash disabled");
                None
            }
        };

        let mut gate = Self {
            show_splash,
            controller: None,
        };

        let Some(settings) = settings.filter(|settings| settings.show_on_load) else {
            return gate;
        };

        gate.show_splash.set(true);
        let flag = Rc::clone(&gate.show_splash);
        let options = SplashOptions {
            min_display_time: settings.min_display(),
        };
        gate.controller = Some(SplashController::mount(loader, options, move || {
            flag.set(false)
        }));
        gate.unmount_if_done();
        gate
    }

    pub fn is_showing(&self) -> bool {
        self.show_splash.get()
    }

    pub fn controller(&self) -> Option<&SplashController> {
        self.controller.as_ref()
    }

    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(controller) = self.controller.as_mut() {
            controller.advance(elapsed);
        }
        self.unmount_if_done();
    }

    /// Hot-reload splash content, if the splash is still up.
    pub fn reload(&mut self, loader: &ContentLoader) {
        if let Some(controller) = self.controller.as_mut() {
            controller.reload(loader);
        }
    }

    fn unmount_if_done(&mut self) {
        if self.show_splash.get() {
            return;
        }
        if let Some(controller) = self.controller.take() {
            controller.unmount();
            tracing::info!("splash dismissed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::splash::SplashPhase;
    use crate::testing::{ContentFixture, home_json, splash_json};

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_show_on_load_false_never_mounts() {
        let fixture = ContentFixture::new()
            .home(&home_json(false, 2000))
            .splash(&splash_json("FinderDev", 1500, 500));
        let gate = SplashGate::mount(&fixture.loader());

        assert!(!gate.is_showing());
        assert!(gate.controller().is_none());
    }

    #[test]
    fn test_home_load_failure_disables_splash() {
        let fixture = ContentFixture::new().splash(&splash_json("FinderDev", 1500, 500));
        let gate = SplashGate::mount(&fixture.loader());

        assert!(!gate.is_showing());
        assert!(gate.controller().is_none());
    }

    #[test]
    fn test_passes_min_display_time_through() {
        let fixture = ContentFixture::new()
            .home(&home_json(true, 3000))
            .splash(&splash_json("FinderDev", 1000, 500));
        let mut gate = SplashGate::mount(&fixture.loader());
        assert!(gate.is_showing());

        gate.tick(ms(2999));
        assert_eq!(gate.controller().map(|c| c.phase()), Some(SplashPhase::HoldingMinimum));
        gate.tick(ms(1));
        assert_eq!(gate.controller().map(|c| c.phase()), Some(SplashPhase::FadingOut));
    }

    #[test]
    fn test_unmounts_after_completion() {
        let fixture = ContentFixture::new()
            .home(&home_json(true, 2000))
            .splash(&splash_json("FinderDev", 1500, 500));
        let mut gate = SplashGate::mount(&fixture.loader());

        gate.tick(ms(2499));
        assert!(gate.is_showing());
        assert!(gate.controller().is_some());

        gate.tick(ms(1));
        assert!(!gate.is_showing());
        assert!(gate.controller().is_none());
    }

    #[test]
    fn test_splash_load_failure_unmounts_on_mount() {
        let fixture = ContentFixture::new().home(&home_json(true, 2000));
        let gate = SplashGate::mount(&fixture.loader());

        assert!(!gate.is_showing());
        assert!(gate.controller().is_none());
    }
}
