use portfolio_wasm::constants::{EASE_HORIZONTAL, EASE_VERTICAL, SPLASH_MS, TRANSITION_MS};
use portfolio_wasm::transition::{Axis, Ignored, Navigation, Offset, Slot, TransitionController};
use portfolio_wasm::PageId;

/// Controller sitting idle on `page` at t = 10_000.
fn idle_on(page: PageId) -> (TransitionController, u64) {
    let mut c = TransitionController::mount(0);
    let mut now = 10_000;
    c.advance(now);
    if page != PageId::Hero {
        c.navigate(page, now);
        now += TRANSITION_MS;
        c.advance(now);
    }
    assert!(!c.is_transitioning());
    (c, now)
}

#[test]
fn starts_on_hero_unlocked() {
    let c = TransitionController::mount(0);
    assert_eq!(c.current_page(), PageId::Hero);
    assert!(!c.is_transitioning());
    assert!(!c.is_horizontal_pair());
    assert!(c.loading_visible());
}

#[test]
fn every_distinct_pair_navigates_and_flags_only_work_sample_pair() {
    for a in PageId::ALL {
        for b in PageId::ALL {
            if a == b {
                continue;
            }
            let (mut c, now) = idle_on(a);
            let expected_horizontal = matches!(
                (a, b),
                (PageId::Work, PageId::SampleWork) | (PageId::SampleWork, PageId::Work)
            );
            assert_eq!(
                c.navigate(b, now),
                Navigation::Started {
                    horizontal: expected_horizontal
                }
            );
            assert_eq!(c.current_page(), b);
            assert!(c.is_transitioning());
            assert_eq!(c.is_horizontal_pair(), expected_horizontal, "{a:?} -> {b:?}");
        }
    }
}

#[test]
fn navigation_while_locked_is_dropped() {
    let (mut c, now) = idle_on(PageId::Hero);
    c.navigate(PageId::Work, now);
    for (i, target) in PageId::ALL.into_iter().cycle().take(20).enumerate() {
        let result = c.navigate(target, now + i as u64 * 10);
        assert!(matches!(result, Navigation::Ignored(_)));
        assert_eq!(c.current_page(), PageId::Work);
    }
    assert_eq!(
        c.navigate(PageId::AboutMe, now + 1),
        Navigation::Ignored(Ignored::Locked)
    );
}

#[test]
fn navigation_to_current_page_is_dropped() {
    let (mut c, now) = idle_on(PageId::WorkProcess);
    assert_eq!(
        c.navigate(PageId::WorkProcess, now),
        Navigation::Ignored(Ignored::AlreadyCurrent)
    );
    assert!(!c.is_transitioning());
}

#[test]
fn unlock_fires_after_transition_window() {
    let (mut c, now) = idle_on(PageId::Work);
    c.navigate(PageId::SampleWork, now);
    c.advance(now + TRANSITION_MS - 1);
    assert!(c.is_transitioning());
    assert!(c.is_horizontal_pair());

    c.advance(now + TRANSITION_MS);
    assert!(!c.is_transitioning());
    assert!(!c.is_horizontal_pair());
    assert_eq!(c.current_page(), PageId::SampleWork);

    // Unlocked: the next request goes through.
    assert!(matches!(
        c.navigate(PageId::Work, now + TRANSITION_MS),
        Navigation::Started { horizontal: true }
    ));
}

#[test]
fn late_frame_still_unlocks() {
    let (mut c, now) = idle_on(PageId::Hero);
    c.navigate(PageId::Work, now);
    c.advance(now + 5_000);
    assert!(!c.is_transitioning());
}

#[test]
fn offsets_are_vertical_by_index_outside_horizontal_pair() {
    let (c, _) = idle_on(PageId::WorkProcess);
    assert_eq!(c.offset_for(PageId::Hero).to_css(), "translateY(-100vh)");
    assert_eq!(c.offset_for(PageId::Work).to_css(), "translateY(-100vh)");
    assert_eq!(c.offset_for(PageId::WorkProcess).to_css(), "translateY(0)");
    assert_eq!(c.offset_for(PageId::AboutMe).to_css(), "translateY(100vh)");
}

#[test]
fn sample_work_is_parked_right_unless_current() {
    for current in PageId::ALL {
        if current == PageId::SampleWork {
            continue;
        }
        let (c, _) = idle_on(current);
        assert!(!c.is_horizontal_pair());
        let offset = c.offset_for(PageId::SampleWork);
        assert_eq!(
            offset,
            Offset {
                axis: Axis::X,
                slot: Slot::After
            }
        );
        assert_eq!(offset.to_css(), "translateX(100%)");
        // Pure: asking again changes nothing.
        assert_eq!(c.offset_for(PageId::SampleWork), offset);
    }

    let (c, _) = idle_on(PageId::SampleWork);
    assert_eq!(c.offset_for(PageId::SampleWork).to_css(), "translateX(0)");
}

#[test]
fn horizontal_pair_moves_work_sideways() {
    let (mut c, now) = idle_on(PageId::Work);
    c.navigate(PageId::SampleWork, now);
    assert_eq!(c.offset_for(PageId::Work).to_css(), "translateX(-100%)");
    assert_eq!(c.offset_for(PageId::SampleWork).to_css(), "translateX(0)");
    // Other pages keep vertical stacking.
    assert_eq!(c.offset_for(PageId::Hero).to_css(), "translateY(-100vh)");
    assert_eq!(c.offset_for(PageId::AboutMe).to_css(), "translateY(100vh)");
    assert_eq!(c.easing_for(PageId::Work), EASE_HORIZONTAL);
    assert_eq!(c.easing_for(PageId::Hero), EASE_VERTICAL);

    c.advance(now + TRANSITION_MS);
    c.navigate(PageId::Work, now + TRANSITION_MS);
    assert_eq!(c.offset_for(PageId::Work).to_css(), "translateX(0)");
    assert_eq!(c.offset_for(PageId::SampleWork).to_css(), "translateX(100%)");
}

#[test]
fn after_horizontal_window_work_returns_to_vertical_axis() {
    let (mut c, now) = idle_on(PageId::Work);
    c.navigate(PageId::SampleWork, now);
    c.advance(now + TRANSITION_MS);
    assert_eq!(c.offset_for(PageId::Work).to_css(), "translateY(-100vh)");
    assert_eq!(c.easing_for(PageId::Work), EASE_VERTICAL);
}

#[test]
fn sample_work_to_work_process_is_vertical() {
    let (mut c, now) = idle_on(PageId::SampleWork);
    assert_eq!(
        c.navigate(PageId::WorkProcess, now),
        Navigation::Started { horizontal: false }
    );
    assert!(!c.is_horizontal_pair());
    assert_eq!(c.offset_for(PageId::SampleWork).to_css(), "translateX(100%)");
}

#[test]
fn splash_hides_once_after_seven_seconds() {
    let mut c = TransitionController::mount(1_000);
    c.advance(1_000 + SPLASH_MS - 1);
    assert!(c.loading_visible());
    c.advance(1_000 + SPLASH_MS);
    assert!(!c.loading_visible());
    c.advance(1_000 + SPLASH_MS * 3);
    assert!(!c.loading_visible());
}

#[test]
fn teardown_cancels_pending_unlock() {
    let (mut c, now) = idle_on(PageId::Hero);
    c.navigate(PageId::Work, now);
    assert_eq!(c.pending_timers(), 1);
    c.teardown();
    assert_eq!(c.pending_timers(), 0);
    c.advance(now + TRANSITION_MS * 2);
    assert!(c.is_transitioning());
}

#[test]
fn generation_counts_accepted_navigations() {
    let (mut c, now) = idle_on(PageId::Hero);
    let start = c.generation();
    c.navigate(PageId::Work, now);
    c.navigate(PageId::Hero, now);
    assert_eq!(c.generation(), start + 1);
}
