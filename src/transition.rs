//! Root page-transition state machine.
//!
//! All pages stay mounted; [`TransitionController::offset_for`] decides where
//! each one is parked relative to the viewport. Navigation is locked for
//! [`TRANSITION_MS`] after every accepted request and the lock is released only
//! by the unlock timer.

use crate::constants::{EASE_HORIZONTAL, EASE_VERTICAL, SPLASH_MS, TRANSITION_MS};
use crate::page::PageId;
use crate::timer::Timers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Where a page sits relative to the viewport along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Before,
    Current,
    After,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub axis: Axis,
    pub slot: Slot,
}

impl Offset {
    fn vertical(page: PageId, current: PageId) -> Self {
        Offset {
            axis: Axis::Y,
            slot: slot_by_index(page, current),
        }
    }

    pub fn to_css(self) -> &'static str {
        match (self.axis, self.slot) {
            (Axis::X, Slot::Current) => "translateX(0)",
            (Axis::X, Slot::Before) => "translateX(-100%)",
            (Axis::X, Slot::After) => "translateX(100%)",
            (Axis::Y, Slot::Current) => "translateY(0)",
            (Axis::Y, Slot::Before) => "translateY(-100vh)",
            (Axis::Y, Slot::After) => "translateY(100vh)",
        }
    }
}

fn slot_by_index(page: PageId, current: PageId) -> Slot {
    if page == current {
        Slot::Current
    } else if page.index() < current.index() {
        Slot::Before
    } else {
        Slot::After
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    AlreadyCurrent,
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Started { horizontal: bool },
    Ignored(Ignored),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    /// Carries the generation of the transition that scheduled it.
    Unlock(u64),
    HideSplash,
}

#[derive(Debug)]
pub struct TransitionController {
    current: PageId,
    transitioning: bool,
    horizontal_pair: bool,
    loading_visible: bool,
    generation: u64,
    timers: Timers<Event>,
}

impl TransitionController {
    /// Mount the controller at `now_ms`; the splash overlay starts visible.
    pub fn mount(now_ms: u64) -> Self {
        let mut timers = Timers::new();
        timers.schedule(now_ms, SPLASH_MS, Event::HideSplash);
        Self {
            current: PageId::Hero,
            transitioning: false,
            horizontal_pair: false,
            loading_visible: true,
            generation: 0,
            timers,
        }
    }

    pub fn current_page(&self) -> PageId {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn is_horizontal_pair(&self) -> bool {
        self.horizontal_pair
    }

    pub fn loading_visible(&self) -> bool {
        self.loading_visible
    }

    /// Bumped on every accepted navigation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn navigate(&mut self, target: PageId, now_ms: u64) -> Navigation {
        if target == self.current {
            log::debug!("navigation to {} ignored: already current", target.slug());
            return Navigation::Ignored(Ignored::AlreadyCurrent);
        }
        if self.transitioning {
            log::debug!("navigation to {} ignored: transition in flight", target.slug());
            return Navigation::Ignored(Ignored::Locked);
        }

        let horizontal = PageId::is_horizontal_pair(self.current, target);
        log::info!(
            "navigate {} -> {}{}",
            self.current.slug(),
            target.slug(),
            if horizontal { " (horizontal)" } else { "" }
        );

        self.transitioning = true;
        self.horizontal_pair = horizontal;
        self.current = target;
        self.generation += 1;
        self.timers
            .schedule(now_ms, TRANSITION_MS, Event::Unlock(self.generation));

        Navigation::Started { horizontal }
    }

    /// Fire every timer due at `now_ms`.
    pub fn advance(&mut self, now_ms: u64) {
        while let Some((_, event)) = self.timers.pop_due(now_ms) {
            match event {
                Event::Unlock(generation) if generation == self.generation => {
                    self.transitioning = false;
                    self.horizontal_pair = false;
                }
                Event::Unlock(stale) => {
                    log::warn!("stale unlock for transition {stale} dropped");
                }
                Event::HideSplash => {
                    log::info!("splash overlay hidden");
                    self.loading_visible = false;
                }
            }
        }
    }

    pub fn offset_for(&self, page: PageId) -> Offset {
        if self.horizontal_pair && matches!(page, PageId::Work | PageId::SampleWork) {
            return Offset {
                axis: Axis::X,
                slot: slot_by_index(page, self.current),
            };
        }
        match page {
            PageId::SampleWork => Offset {
                axis: Axis::X,
                slot: if page == self.current {
                    Slot::Current
                } else {
                    Slot::After
                },
            },
            _ => Offset::vertical(page, self.current),
        }
    }

    pub fn easing_for(&self, page: PageId) -> &'static str {
        if self.horizontal_pair && matches!(page, PageId::Work | PageId::SampleWork) {
            EASE_HORIZONTAL
        } else {
            EASE_VERTICAL
        }
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn teardown(&mut self) {
        self.timers.cancel_all();
    }
}
