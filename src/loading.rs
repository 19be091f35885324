//! Splash screen: glitching greeting followed by a cascade of falling tiles.

use crate::constants::{
    BLOCKS_FALL_AT, FALL_EASING, FALL_MAX_MS, FALL_MIN_MS, FALL_TARGET_VH, GRAY_PALETTE,
    GREETING_FADE_AT, GREETING_GLITCH_MS, GREETING_GLITCH_TIMES, GRID_SIZE, MAX_DRIFT_PERCENT,
    MAX_ROTATION_DEG, ROW_STAGGER_MS,
};
use crate::rng::RandomSource;
use crate::timer::Timers;

/// One tile of the 10×10 splash grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub row: u32,
    pub col: u32,
    pub color: &'static str,
    pub rotation_deg: f64,
    pub drift_percent: f64,
    pub fall_duration_ms: f64,
    pub stagger_delay_ms: u64,
}

impl Block {
    pub fn key(&self) -> String {
        format!("{}-{}", self.row, self.col)
    }

    pub fn left_percent(&self) -> f64 {
        f64::from(self.col * (100 / GRID_SIZE))
    }

    pub fn top_percent(&self) -> f64 {
        f64::from(self.row * (100 / GRID_SIZE))
    }

    /// Transform the tile animates to once the cascade starts.
    pub fn fallen_transform(&self) -> String {
        format!(
            "translate({}vw, {}vh) rotate({}deg)",
            self.drift_percent, FALL_TARGET_VH, self.rotation_deg
        )
    }

    /// CSS transition applied to the tile, staggered by row.
    pub fn fall_transition(&self) -> String {
        format!(
            "transform {:.0}ms {} {}ms, opacity {:.0}ms {} {}ms",
            self.fall_duration_ms,
            FALL_EASING,
            self.stagger_delay_ms,
            self.fall_duration_ms,
            FALL_EASING,
            self.stagger_delay_ms
        )
    }
}

/// Build the full tile grid, top row first.
pub fn generate_blocks(rng: &mut dyn RandomSource) -> Vec<Block> {
    let mut blocks = Vec::with_capacity((GRID_SIZE * GRID_SIZE) as usize);
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let color = GRAY_PALETTE[rng.index(GRAY_PALETTE.len())];
            let rotation_deg = rng.range(-MAX_ROTATION_DEG, MAX_ROTATION_DEG);
            let drift_percent = rng.range(-MAX_DRIFT_PERCENT, MAX_DRIFT_PERCENT);
            let fall_duration_ms = rng.range(FALL_MIN_MS, FALL_MAX_MS);
            blocks.push(Block {
                row,
                col,
                color,
                rotation_deg,
                drift_percent,
                fall_duration_ms,
                stagger_delay_ms: u64::from(row) * ROW_STAGGER_MS,
            });
        }
    }
    blocks
}

/// Random distortion applied to the greeting for one glitch frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlitchPulse {
    pub skew_deg: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl GlitchPulse {
    fn sample(rng: &mut dyn RandomSource) -> Self {
        Self {
            skew_deg: rng.range(-2.0, 2.0),
            offset_x: rng.range(-8.0, 8.0),
            offset_y: rng.range(-5.0, 5.0),
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "translate({}px, {}px) skewX({}deg)",
            self.offset_x, self.offset_y, self.skew_deg
        )
    }

    pub const TEXT_SHADOW: &'static str =
        "2px 0 #ff0000, -2px 0 #00ffff, 0 0 10px rgba(255,0,0,0.5)";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Visible,
    Fading,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    GlitchOn,
    GlitchOff,
    FadeGreeting,
    Drop,
}

#[derive(Debug)]
pub struct LoadingSequence {
    blocks: Vec<Block>,
    greeting: Greeting,
    glitch: Option<GlitchPulse>,
    falling: bool,
    timers: Timers<Event>,
}

impl LoadingSequence {
    pub fn mount(now_ms: u64, rng: &mut dyn RandomSource) -> Self {
        let mut timers = Timers::new();
        for at in GREETING_GLITCH_TIMES {
            timers.schedule(now_ms, at, Event::GlitchOn);
        }
        timers.schedule(now_ms, GREETING_FADE_AT, Event::FadeGreeting);
        timers.schedule(now_ms, BLOCKS_FALL_AT, Event::Drop);

        Self {
            blocks: generate_blocks(rng),
            greeting: Greeting::Visible,
            glitch: None,
            falling: false,
            timers,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn greeting(&self) -> Greeting {
        self.greeting
    }

    pub fn glitch(&self) -> Option<GlitchPulse> {
        self.glitch
    }

    pub fn blocks_falling(&self) -> bool {
        self.falling
    }

    pub fn advance(&mut self, now_ms: u64, rng: &mut dyn RandomSource) {
        while let Some((due_ms, event)) = self.timers.pop_due(now_ms) {
            match event {
                Event::GlitchOn => {
                    self.glitch = Some(GlitchPulse::sample(rng));
                    self.timers
                        .schedule(due_ms, GREETING_GLITCH_MS, Event::GlitchOff);
                }
                Event::GlitchOff => self.glitch = None,
                Event::FadeGreeting => self.greeting = Greeting::Fading,
                Event::Drop => {
                    log::debug!("splash tiles falling");
                    self.greeting = Greeting::Removed;
                    self.glitch = None;
                    self.falling = true;
                }
            }
        }
    }

    pub fn teardown(&mut self) {
        self.timers.cancel_all();
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
