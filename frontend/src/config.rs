use log::Level;

/// Section keys in page order. The first one is shown on load.
pub const SECTIONS: [&str; 5] = ["home", "pillars", "promise", "assurance", "access"];
pub const HOME_SECTION: &str = "home";
pub const ACCESS_SECTION: &str = "access";

pub const SUBMISSION_DELAY_MS: u32 = 2000;
pub const NOTIFICATION_ENTRANCE_MS: u32 = 100;
pub const NOTIFICATION_LIFETIME_MS: u32 = 5000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const MENU_CLOSE_GRACE_MS: u32 = 100;
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Above this viewport width the desktop nav is shown and the mobile menu must be closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const PARALLAX_SPEED_STEP: f64 = 0.1;

pub const SUBMIT_LABEL: &str = "Submit Request";
pub const PROCESSING_LABEL: &str = "Processing Request...";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
