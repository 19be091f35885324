mod common;

use common::{project, FakeBody};
use portfolio_wasm::gallery::{is_video, slides_of, GalleryViewer, Key, SlideKind};
use portfolio_wasm::scroll_lock::ScrollLock;

fn viewer() -> (GalleryViewer, FakeBody) {
    let body = FakeBody::with("auto");
    (GalleryViewer::new(ScrollLock::new(body.clone())), body)
}

#[test]
fn scroll_images_already_in_images_are_not_repeated() {
    let p = project("p", &["A.png", "B.png"], &["B.png", "C.svg"]);
    assert_eq!(slides_of(&p), vec!["A.png", "B.png", "C.svg"]);
}

#[test]
fn next_and_prev_wrap_around() {
    let (mut g, _) = viewer();
    g.open(project("p", &["A.png", "B.png"], &["B.png", "C.svg"]));
    assert_eq!(g.slide_count(), 3);
    assert_eq!(g.slide_index(), 0);

    g.prev();
    assert_eq!(g.slide_index(), 2);
    g.next();
    assert_eq!(g.slide_index(), 0);
    g.next();
    g.next();
    assert_eq!(g.slide_index(), 2);
    g.next();
    assert_eq!(g.slide_index(), 0);
}

#[test]
fn reopening_resets_to_first_slide() {
    let (mut g, _) = viewer();
    let p = project("p", &["A.png", "B.png", "C.png"], &[]);
    g.open(p.clone());
    g.next();
    g.next();
    g.close();
    assert!(!g.is_open());
    assert_eq!(g.slide_index(), 0);
    g.open(p);
    assert_eq!(g.slide_index(), 0);
}

#[test]
fn navigation_is_inert_while_closed() {
    let (mut g, _) = viewer();
    g.next();
    g.prev();
    g.click_slide();
    assert!(!g.handle_key(Key::ArrowRight));
    assert!(!g.handle_key(Key::Escape));
    assert!(g.current_slide().is_none());
    assert!(g.indicator().is_none());
}

#[test]
fn keyboard_drives_open_viewer() {
    let (mut g, _) = viewer();
    g.open(project("p", &["A.png", "B.png"], &[]));
    assert!(g.handle_key(Key::from_dom("ArrowRight")));
    assert_eq!(g.slide_index(), 1);
    assert!(g.handle_key(Key::from_dom("ArrowLeft")));
    assert_eq!(g.slide_index(), 0);
    assert!(!g.handle_key(Key::from_dom("a")));
    assert!(g.handle_key(Key::from_dom("Escape")));
    assert!(!g.is_open());
}

#[test]
fn slides_are_classified_by_extension_and_membership() {
    let (mut g, _) = viewer();
    g.open(project("p", &["a.png", "clip.MP4"], &["wide.svg"]));
    assert_eq!(g.current_slide().unwrap().kind, SlideKind::Image);
    g.next();
    assert_eq!(g.current_slide().unwrap().kind, SlideKind::Video);
    g.next();
    let slide = g.current_slide().unwrap();
    assert_eq!(slide.src, "wide.svg");
    assert_eq!(slide.kind, SlideKind::Pannable);
}

#[test]
fn video_extensions() {
    for src in ["a.mp4", "b.webm", "c.ogg", "d.MOV"] {
        assert!(is_video(src), "{src}");
    }
    for src in ["a.gif", "mp4.png", "movie", "a.mp4.jpg"] {
        assert!(!is_video(src), "{src}");
    }
}

#[test]
fn click_advances_only_plain_images() {
    let (mut g, _) = viewer();
    g.open(project("p", &["a.png", "clip.webm"], &["wide.svg"]));
    g.click_slide();
    assert_eq!(g.slide_index(), 1);
    // Video: click does nothing.
    g.click_slide();
    assert_eq!(g.slide_index(), 1);
    g.next();
    // Pannable: click does nothing.
    g.click_slide();
    assert_eq!(g.slide_index(), 2);
}

#[test]
fn click_on_single_slide_is_a_no_op() {
    let (mut g, _) = viewer();
    g.open(project("p", &["only.png"], &[]));
    g.click_slide();
    assert_eq!(g.slide_index(), 0);
    assert!(g.indicator().is_none());
}

#[test]
fn indicator_counts_from_one() {
    let (mut g, _) = viewer();
    g.open(project("p", &["a.png", "b.png", "c.png"], &[]));
    assert_eq!(g.indicator().as_deref(), Some("1 / 3"));
    g.prev();
    assert_eq!(g.indicator().as_deref(), Some("3 / 3"));
}

#[test]
fn empty_project_never_panics() {
    let (mut g, _) = viewer();
    g.open(project("p", &[], &[]));
    g.next();
    g.prev();
    g.click_slide();
    assert_eq!(g.slide_index(), 0);
    assert!(g.current_slide().is_none());
}

#[test]
fn scroll_is_locked_while_open_and_restored_on_close() {
    let (mut g, body) = viewer();
    g.open(project("p", &["a.png"], &[]));
    assert_eq!(body.get(), "hidden");
    // Switching projects keeps the lock held once.
    g.open(project("q", &["b.png"], &[]));
    assert_eq!(body.get(), "hidden");
    g.close();
    assert_eq!(body.get(), "auto");
}

#[test]
fn dropping_open_viewer_releases_scroll() {
    let (mut g, body) = viewer();
    g.open(project("p", &["a.png"], &[]));
    drop(g);
    assert_eq!(body.get(), "auto");
}
