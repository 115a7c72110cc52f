use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing with `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Scroll offset in pixels after which the navbar switches to its solid style.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const FREE_QUERY_ALLOWANCE: u32 = 5;
pub const BONUS_QUERY_GRANT: u32 = 3;
pub const QUERY_CHAR_LIMIT: usize = 500;
pub const SIMULATED_RESPONSE_MS: u32 = 2000;
pub const QUICK_QUESTION_FLASH_MS: u32 = 1000;

pub const NEWSLETTER_CONFIRM_MS: u32 = 3000;

pub const ROLE_CARD_STEP_MS: u32 = 200;
pub const HERO_PARTICLE_COUNT: usize = 50;
pub const STATS_PARTICLE_COUNT: usize = 20;
