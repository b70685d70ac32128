//! Splash screen orchestration.

mod controller;
mod gate;
mod scheduler;

pub use controller::{
    CURSOR_BLINK_INTERVAL, DEFAULT_MIN_DISPLAY_TIME, SplashController, SplashOptions,
    SplashPhase, SplashView, TYPEWRITER_INTERVAL,
};
pub use gate::SplashGate;
pub use scheduler::{Scheduler, TimerHandle};
