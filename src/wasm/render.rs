use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlElement};

use crate::app::Portfolio;
use crate::gallery::{GalleryViewer, SlideKind};
use crate::loading::{GlitchPulse, Greeting, LoadingSequence};
use crate::wasm::dom::{el, GalleryView, LoadingView, View};

type RafClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// What was last written to the DOM, so each frame only touches what changed.
#[derive(Default)]
struct Applied {
    pages: Vec<(&'static str, &'static str)>,
    greeting: Option<Greeting>,
    greeting_glitch: Option<bool>,
    falling: bool,
    hero_pulse: (bool, u64),
    hovered: Option<(u8, u8)>,
    gallery: Option<(String, usize)>,
}

/// Start the animation-frame loop: advance timers to the frame timestamp,
/// then bring the DOM in line with the new state.
pub fn start(app: Rc<RefCell<Portfolio>>, view: Rc<RefCell<View>>) -> Result<(), JsValue> {
    // `f` holds the animation-frame closure so that we can keep calling
    // `request_animation_frame` recursively.
    let f: RafClosure = Rc::new(RefCell::new(None));
    let g = f.clone();
    let mut applied = Applied::default();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        {
            let mut app = app.borrow_mut();
            app.advance(timestamp as u64);
            if let Err(e) = sync(&app, &mut view.borrow_mut(), &mut applied) {
                log::error!("render failed: {e:?}");
            }
        }

        // schedule next
        if let Err(e) = request_frame(&f) {
            log::error!("rAF registration failed: {e:?}");
        }
    }) as Box<dyn FnMut(f64)>));

    request_frame(&g)
}

fn request_frame(closure: &RafClosure) -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let borrowed = closure.borrow();
    let callback = borrowed.as_ref().ok_or("rAF closure missing")?;
    window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    Ok(())
}

fn sync(app: &Portfolio, view: &mut View, applied: &mut Applied) -> Result<(), JsValue> {
    sync_pages(app, view, applied)?;
    sync_loading(app.loading(), view, applied)?;

    let hero = app.hero_glitch();
    let pulse = (hero.is_glitching(), hero.pulse_count());
    if pulse != applied.hero_pulse {
        let classes = view.hero_title.class_list();
        classes.remove_1("glitching")?;
        if pulse.0 {
            // force a reflow so a fresh pulse replays the animation from the start
            let _ = view.hero_title.offset_width();
            classes.add_1("glitching")?;
        }
        applied.hero_pulse = pulse;
    }

    let hovered = app.hero_grid().hovered();
    if hovered != applied.hovered {
        for ((row, col), cell) in &view.hero_cells {
            cell.style()
                .set_property("background-color", app.hero_grid().fill(*row, *col))?;
        }
        applied.hovered = hovered;
    }

    sync_gallery(app.gallery(), &view.document, &view.gallery, applied)
}

fn sync_pages(app: &Portfolio, view: &View, applied: &mut Applied) -> Result<(), JsValue> {
    let controller = app.controller();
    let wanted: Vec<_> = view
        .pages
        .iter()
        .map(|(page, _)| {
            (
                controller.offset_for(*page).to_css(),
                controller.easing_for(*page),
            )
        })
        .collect();
    if wanted == applied.pages {
        return Ok(());
    }
    for ((_, section), (transform, easing)) in view.pages.iter().zip(&wanted) {
        let style = section.style();
        style.set_property("transform", transform)?;
        style.set_property("transition-timing-function", easing)?;
    }
    applied.pages = wanted;
    Ok(())
}

fn sync_loading(
    seq: Option<&LoadingSequence>,
    view: &mut View,
    applied: &mut Applied,
) -> Result<(), JsValue> {
    let Some(seq) = seq else {
        if let Some(loading) = view.loading.take() {
            loading.overlay.remove();
        }
        return Ok(());
    };
    let Some(loading) = view.loading.as_mut() else {
        return Ok(());
    };

    if applied.greeting != Some(seq.greeting()) {
        apply_greeting(loading, seq.greeting())?;
        applied.greeting = Some(seq.greeting());
    }

    let pulse = seq.glitch();
    if applied.greeting_glitch != Some(pulse.is_some()) {
        if let Some(greeting) = &loading.greeting {
            apply_glitch(greeting, pulse, seq.greeting())?;
        }
        applied.greeting_glitch = Some(pulse.is_some());
    }

    if seq.blocks_falling() && !applied.falling {
        for (tile, block) in loading.blocks.iter().zip(seq.blocks()) {
            let style = tile.style();
            style.set_property("transition", &block.fall_transition())?;
            style.set_property("transform", &block.fallen_transform())?;
            style.set_property("opacity", "0")?;
        }
        applied.falling = true;
    }
    Ok(())
}

fn apply_greeting(loading: &mut LoadingView, greeting: Greeting) -> Result<(), JsValue> {
    match greeting {
        Greeting::Visible => {}
        Greeting::Fading => {
            if let Some(node) = &loading.greeting {
                let style = node.style();
                style.set_property("transition", "all 0.5s ease-in-out")?;
                style.set_property("opacity", "0")?;
                style.set_property("transform", "translateY(50px)")?;
            }
        }
        Greeting::Removed => {
            if let Some(node) = loading.greeting.take() {
                node.remove();
            }
        }
    }
    Ok(())
}

fn apply_glitch(
    node: &HtmlElement,
    pulse: Option<GlitchPulse>,
    greeting: Greeting,
) -> Result<(), JsValue> {
    let style = node.style();
    match pulse {
        Some(pulse) => {
            style.set_property("transition", "none")?;
            style.set_property("transform", &pulse.transform())?;
            style.set_property("text-shadow", GlitchPulse::TEXT_SHADOW)?;
            style.set_property("opacity", "0.7")?;
        }
        None if greeting == Greeting::Visible => {
            style.set_property("transition", "all 0.5s ease-in-out")?;
            style.set_property("transform", "translate(0px, 0px) skewX(0deg)")?;
            style.set_property("text-shadow", "none")?;
            style.set_property("opacity", "1")?;
        }
        None => {
            style.set_property("text-shadow", "none")?;
        }
    }
    Ok(())
}

fn sync_gallery(
    gallery: &GalleryViewer,
    document: &web_sys::Document,
    view: &GalleryView,
    applied: &mut Applied,
) -> Result<(), JsValue> {
    let key = gallery
        .project()
        .map(|p| (p.id.clone(), gallery.slide_index()));
    if key == applied.gallery {
        return Ok(());
    }
    applied.gallery = key;

    let Some(project) = gallery.project() else {
        view.root.set_hidden(true);
        view.root.set_attribute("aria-hidden", "true")?;
        view.stage.set_inner_html("");
        return Ok(());
    };

    view.root.set_hidden(false);
    view.root.set_attribute("aria-hidden", "false")?;
    view.title.set_text_content(Some(&project.title));
    view.description.set_text_content(Some(&project.description));

    let multi = gallery.slide_count() > 1;
    view.prev.set_hidden(!multi);
    view.next.set_hidden(!multi);
    view.indicator.set_hidden(!multi);
    view.indicator.set_text_content(gallery.indicator().as_deref());

    view.stage.set_inner_html("");
    let Some(slide) = gallery.current_slide() else {
        view.stage.set_text_content(Some("No Image"));
        return Ok(());
    };
    let node = match slide.kind {
        SlideKind::Video => {
            let video = el(document, "video", "slide-video")?;
            for flag in ["controls", "autoplay", "loop", "muted", "playsinline"] {
                video.set_attribute(flag, "")?;
            }
            video.set_attribute("src", slide.src)?;
            video
        }
        SlideKind::Pannable => {
            let pane = el(document, "div", "slide-pannable")?;
            let img = el(document, "img", "")?;
            img.set_attribute("src", slide.src)?;
            img.set_attribute("alt", "project image")?;
            img.set_attribute("draggable", "false")?;
            pane.append_child(&img)?;
            let hint = el(document, "div", "scroll-hint")?;
            hint.set_text_content(Some("Scroll to view"));
            pane.append_child(&hint)?;
            pane
        }
        SlideKind::Image => {
            let img = el(document, "img", "slide-image")?;
            img.set_attribute("src", slide.src)?;
            img.set_attribute("alt", "project image")?;
            img.set_attribute("draggable", "false")?;
            img
        }
    };
    view.stage.append_child(&node)?;
    Ok(())
}
