//! Timing and layout constants shared by the state machines and the renderer.
//! All durations are milliseconds.

/// Page slide duration; also the navigation lock window.
pub const TRANSITION_MS: u64 = 700;
/// Splash overlay lifetime from mount.
pub const SPLASH_MS: u64 = 7_000;

/// Easing for vertical slides and for everything outside a horizontal pair.
pub const EASE_VERTICAL: &str = "cubic-bezier(0.65, 0, 0.35, 1)";
/// Easing for Work ⇄ SampleWork slides.
pub const EASE_HORIZONTAL: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

// Loading sequence
pub const GRID_SIZE: u32 = 10;
pub const GREETING_GLITCH_TIMES: [u64; 4] = [500, 1_000, 1_500, 2_000];
pub const GREETING_GLITCH_MS: u64 = 100;
pub const GREETING_FADE_AT: u64 = 3_000;
pub const GREETING_FADE_MS: u64 = 500;
pub const BLOCKS_FALL_AT: u64 = GREETING_FADE_AT + GREETING_FADE_MS;
pub const ROW_STAGGER_MS: u64 = 50;
pub const FALL_MIN_MS: f64 = 2_000.0;
pub const FALL_MAX_MS: f64 = 3_000.0;
pub const MAX_ROTATION_DEG: f64 = 360.0;
pub const MAX_DRIFT_PERCENT: f64 = 5.0;
/// Tiles land this far below the top of the viewport.
pub const FALL_TARGET_VH: f64 = 120.0;
pub const FALL_EASING: &str = "cubic-bezier(0.55, 0.085, 0.68, 0.53)";

pub const GRAY_PALETTE: [&str; 10] = [
    "#161618", "#111111", "#131316", "#181818", "#1c1c1c", "#141416", "#131314", "#121212",
    "#0f0f0f", "#141414",
];

// Hero glitch
pub const GLITCH_MIN_DELAY_MS: f64 = 3_000.0;
pub const GLITCH_MAX_DELAY_MS: f64 = 5_000.0;
pub const GLITCH_PULSE_MS: u64 = 200;

// Hero hover grid
pub const HERO_GRID_ROWS: u8 = 4;
pub const HERO_GRID_COLS: u8 = 5;
pub const HERO_HOVER_FILL: &str = "rgba(255, 255, 255, 0.1)";

/// Drag distance to scroll distance ratio on the highlight strip.
pub const DRAG_SCROLL_FACTOR: f64 = 1.5;

pub const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "ogg", "mov"];
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholders/1.jpg";
/// Id of the element `index.html` provides for the site to render into.
pub const MOUNT_POINT: &str = "app";
pub const RESUME_HREF: &str = "/resume.pdf";
