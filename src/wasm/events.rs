use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, Event, HtmlElement, KeyboardEvent, MouseEvent, WheelEvent, Window,
};

use crate::app::Portfolio;
use crate::constants::RESUME_HREF;
use crate::gallery::Key;
use crate::page::PageId;
use crate::wasm::dom::apply_fallback;

/// Milliseconds on the same clock as the rAF timestamp.
pub fn now_ms(window: &Window) -> u64 {
    window.performance().map_or(0.0, |p| p.now()) as u64
}

fn closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    target.closest(selector).ok().flatten()
}

fn listen(
    target: &web_sys::EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // Listeners live for the whole page lifetime.
    closure.forget();
    Ok(())
}

/// Register document-level listeners ONCE at start-up. Clicks, keys and hover
/// are delegated through `data-*` attributes on the rendered markup.
pub fn register(
    window: &Window,
    document: &Document,
    strip: &HtmlElement,
    app: Rc<RefCell<Portfolio>>,
) -> Result<(), JsValue> {
    // click
    {
        let app = app.clone();
        let window = window.clone();
        listen(document, "click", move |e: Event| {
            on_click(&window, &app, &e);
        })?;
    }

    // keydown
    {
        let app = app.clone();
        listen(window, "keydown", move |e: Event| {
            let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            if app.borrow_mut().key(Key::from_dom(&key)) {
                e.prevent_default();
            }
        })?;
    }

    // hero hover grid
    {
        let app = app.clone();
        listen(document, "mouseover", move |e: Event| {
            let cell = closest(&e, "[data-cell]").and_then(|c| c.get_attribute("data-cell"));
            let mut app = app.borrow_mut();
            match cell.as_deref().and_then(parse_cell) {
                Some((row, col)) => app.hero_grid_mut().hover(row, col),
                None => app.hero_grid_mut().leave(),
            }
        })?;
    }

    // broken card images fall back to the placeholder; error does not bubble,
    // so listen in the capture phase
    {
        let closure = Closure::<dyn FnMut(Event)>::new(move |e: Event| {
            let Some(img) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };
            if apply_fallback(&img) {
                log::warn!("image failed to load, using placeholder");
            }
        });
        document.add_event_listener_with_callback_and_bool(
            "error",
            closure.as_ref().unchecked_ref(),
            true,
        )?;
        closure.forget();
    }

    register_strip(strip, app)
}

fn on_click(window: &Window, app: &Rc<RefCell<Portfolio>>, e: &Event) {
    let attr = |selector: &str, name: &str| {
        closest(e, selector).and_then(|el| el.get_attribute(name))
    };

    if let Some(action) = attr("[data-gallery]", "data-gallery") {
        let mut app = app.borrow_mut();
        let gallery = app.gallery_mut();
        match action.as_str() {
            "close" => gallery.close(),
            "prev" => gallery.prev(),
            "next" => gallery.next(),
            "stage" => gallery.click_slide(),
            other => log::warn!("unknown gallery action {other}"),
        }
        return;
    }

    if let Some(id) = attr("[data-project]", "data-project") {
        app.borrow_mut().open_project(&id);
        return;
    }

    if let Some(slug) = attr("[data-nav]", "data-nav") {
        match PageId::from_slug(&slug) {
            Some(page) => {
                app.borrow_mut().navigate(page, now_ms(window));
            }
            None => log::warn!("unknown page {slug}"),
        }
        return;
    }

    if closest(e, "[data-action='resume']").is_some() {
        // Fire and forget; a blocked popup is not an error for us.
        if let Err(err) = window.open_with_url_and_target(RESUME_HREF, "_blank") {
            log::warn!("resume open failed: {err:?}");
        }
    }
}

fn parse_cell(value: &str) -> Option<(u8, u8)> {
    let (row, col) = value.split_once('-')?;
    Some((row.parse().ok()?, col.parse().ok()?))
}

fn register_strip(strip: &HtmlElement, app: Rc<RefCell<Portfolio>>) -> Result<(), JsValue> {
    let target: &web_sys::EventTarget = strip.as_ref();

    // wheel scrolls sideways; non-passive so preventDefault works
    {
        let app = app.clone();
        let strip = strip.clone();
        let closure = Closure::<dyn FnMut(WheelEvent)>::new(move |e: WheelEvent| {
            let next = app
                .borrow()
                .strip()
                .wheel(f64::from(strip.scroll_left()), e.delta_x(), e.delta_y());
            if let Some(left) = next {
                e.prevent_default();
                strip.set_scroll_left(left as i32);
            }
        });
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            "wheel",
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
    }

    // mousedown
    {
        let app = app.clone();
        let strip = strip.clone();
        listen(target, "mousedown", move |e: Event| {
            let Some(x) = strip_x(&strip, &e) else {
                return;
            };
            app.borrow_mut()
                .strip_mut()
                .press(x, f64::from(strip.scroll_left()));
            strip.style().set_property("cursor", "grabbing").ok();
        })?;
    }

    // mousemove
    {
        let app = app.clone();
        let strip = strip.clone();
        listen(target, "mousemove", move |e: Event| {
            let Some(x) = strip_x(&strip, &e) else {
                return;
            };
            if let Some(left) = app.borrow().strip().drag_to(x) {
                e.prevent_default();
                strip.set_scroll_left(left as i32);
            }
        })?;
    }

    // mouseup / mouseleave end the drag
    for kind in ["mouseup", "mouseleave"] {
        let app = app.clone();
        let strip = strip.clone();
        listen(target, kind, move |_: Event| {
            app.borrow_mut().strip_mut().release();
            strip.style().set_property("cursor", "grab").ok();
        })?;
    }

    Ok(())
}

/// Pointer x relative to the strip's left edge.
fn strip_x(strip: &HtmlElement, e: &Event) -> Option<f64> {
    let e = e.dyn_ref::<MouseEvent>()?;
    Some(f64::from(e.page_x() - strip.offset_left()))
}
