use crate::constants::{GLITCH_MAX_DELAY_MS, GLITCH_MIN_DELAY_MS, GLITCH_PULSE_MS};
use crate::rng::RandomSource;
use crate::timer::Timers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Pulse,
    Revert,
}

/// Fires a brief glitch at irregular 3–5 s intervals for as long as it is mounted.
#[derive(Debug)]
pub struct GlitchScheduler {
    glitching: bool,
    pulses: u64,
    timers: Timers<Event>,
}

fn next_delay(rng: &mut dyn RandomSource) -> u64 {
    rng.range(GLITCH_MIN_DELAY_MS, GLITCH_MAX_DELAY_MS) as u64
}

impl GlitchScheduler {
    pub fn mount(now_ms: u64, rng: &mut dyn RandomSource) -> Self {
        let mut timers = Timers::new();
        timers.schedule(now_ms, next_delay(rng), Event::Pulse);
        Self {
            glitching: false,
            pulses: 0,
            timers,
        }
    }

    pub fn is_glitching(&self) -> bool {
        self.glitching
    }

    /// Number of pulses fired so far; the renderer restarts the glitch
    /// animation whenever it changes.
    pub fn pulse_count(&self) -> u64 {
        self.pulses
    }

    pub fn next_pulse_at(&self) -> Option<u64> {
        self.timers.next_due()
    }

    pub fn advance(&mut self, now_ms: u64, rng: &mut dyn RandomSource) {
        while let Some((due_ms, event)) = self.timers.pop_due(now_ms) {
            match event {
                Event::Pulse => {
                    self.glitching = true;
                    self.pulses += 1;
                    self.timers.schedule(due_ms, GLITCH_PULSE_MS, Event::Revert);
                    // after a stall (hidden tab), resume from now instead of
                    // replaying every missed pulse
                    let delay = next_delay(rng);
                    let base = if due_ms + delay <= now_ms { now_ms } else { due_ms };
                    self.timers.schedule(base, delay, Event::Pulse);
                }
                Event::Revert => self.glitching = false,
            }
        }
    }

    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.glitching = false;
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
