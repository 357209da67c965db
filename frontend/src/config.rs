use log::Level;

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000" // backend when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // same origin in production
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// reveal
pub const REVEAL_THRESHOLD: f64 = 0.05;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -20px 0px";
pub const STAGGER_STEP_MS: u32 = 60;
pub const STAGGER_LEAD_MS: u32 = 80;
pub const STAGGER_TRANSITION: &str =
    "opacity 500ms cubic-bezier(.25,.46,.45,.94), transform 500ms cubic-bezier(.25,.46,.45,.94)";

// typing
pub const TYPING_START_DELAY_MS: u32 = 600;
pub const TYPING_MIN_DELAY_MS: u32 = 80;
pub const TYPING_JITTER_MS: u32 = 40;

// navbar
pub const SHRINK_OFFSET: f64 = 60.0;
pub const ACTIVE_SECTION_THRESHOLD: f64 = 0.4;

// effects
pub const TILT_DEGREES: f64 = 8.0;
pub const PARALLAX_PERCENT: f64 = 20.0;

pub const CONTACT_PENDING_LABEL: &str = "Sending… <span class=\"btn-arrow\">⟳</span>";
