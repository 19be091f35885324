mod common;

use common::FakeBody;
use portfolio_wasm::constants::{SPLASH_MS, TRANSITION_MS};
use portfolio_wasm::content::Content;
use portfolio_wasm::gallery::Key;
use portfolio_wasm::rng::XorShift;
use portfolio_wasm::scroll_lock::ScrollLock;
use portfolio_wasm::transition::Navigation;
use portfolio_wasm::{PageId, Portfolio};

fn mount() -> (Portfolio, FakeBody) {
    let body = FakeBody::with("visible");
    let app = Portfolio::mount(
        Content::embedded().unwrap(),
        Box::new(XorShift::new(1234)),
        ScrollLock::new(body.clone()),
        0,
    );
    (app, body)
}

#[test]
fn splash_then_navigation_end_to_end() {
    let (mut app, _) = mount();
    app.advance(0);
    assert!(app.controller().loading_visible());
    assert!(app.loading().is_some());
    assert_eq!(app.controller().current_page(), PageId::Hero);

    app.advance(SPLASH_MS);
    assert!(!app.controller().loading_visible());
    assert!(app.loading().is_none());

    let t = SPLASH_MS + 100;
    assert!(matches!(
        app.navigate(PageId::Work, t),
        Navigation::Started { horizontal: false }
    ));
    assert_eq!(app.controller().current_page(), PageId::Work);
    assert!(app.controller().is_transitioning());

    app.advance(t + TRANSITION_MS);
    assert!(!app.controller().is_transitioning());
}

#[test]
fn horizontal_flag_spans_exactly_the_transition_window() {
    let (mut app, _) = mount();
    app.navigate(PageId::Work, 0);
    app.advance(TRANSITION_MS);

    let t = TRANSITION_MS;
    app.navigate(PageId::SampleWork, t);
    for dt in [0, 100, 699] {
        app.advance(t + dt);
        assert!(app.controller().is_horizontal_pair(), "at +{dt}");
    }
    app.advance(t + 700);
    assert!(!app.controller().is_horizontal_pair());

    let t = t + 700;
    app.navigate(PageId::WorkProcess, t);
    assert!(!app.controller().is_horizontal_pair());
    assert_eq!(app.controller().current_page(), PageId::WorkProcess);
}

#[test]
fn project_cards_open_the_viewer_and_lock_scroll() {
    let (mut app, body) = mount();
    let id = app.content().projects[0].id.clone();
    assert!(app.open_project(&id));
    assert!(app.gallery().is_open());
    assert_eq!(body.get(), "hidden");

    assert!(app.key(Key::ArrowRight));
    assert_eq!(app.gallery().slide_index(), 1);
    assert!(app.key(Key::Escape));
    assert!(!app.gallery().is_open());
    assert_eq!(body.get(), "visible");
    assert!(!app.key(Key::Escape));
}

#[test]
fn unknown_project_is_ignored() {
    let (mut app, body) = mount();
    assert!(!app.open_project("nope"));
    assert!(!app.gallery().is_open());
    assert_eq!(body.get(), "visible");
}

#[test]
fn hero_hover_and_strip_state_are_routed() {
    let (mut app, _) = mount();
    app.hero_grid_mut().hover(1, 2);
    assert_eq!(app.hero_grid().hovered(), Some((1, 2)));
    app.strip_mut().press(100.0, 0.0);
    assert_eq!(app.strip().drag_to(80.0), Some(30.0));
}

#[test]
fn teardown_leaves_no_timers_and_releases_scroll() {
    let (mut app, body) = mount();
    app.navigate(PageId::Work, 10);
    let id = app.content().projects[1].id.clone();
    app.open_project(&id);
    assert!(app.pending_timers() > 0);

    app.teardown();
    assert_eq!(app.pending_timers(), 0);
    assert!(app.loading().is_none());
    assert_eq!(body.get(), "visible");

    app.advance(1_000_000);
    assert!(!app.hero_glitch().is_glitching());
    assert_eq!(app.hero_glitch().pulse_count(), 0);
}
