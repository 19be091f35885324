//! Builds the static page markup under the `#app` mount point and keeps
//! handles to every element the renderer touches.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

use crate::app::Portfolio;
use crate::constants::{PLACEHOLDER_IMAGE, TRANSITION_MS};
use crate::content::{Content, Project};
use crate::gallery::is_video;
use crate::hero::HeroGrid;
use crate::loading::LoadingSequence;
use crate::page::PageId;

pub struct LoadingView {
    pub overlay: HtmlElement,
    pub greeting: Option<HtmlElement>,
    pub blocks: Vec<HtmlElement>,
}

pub struct GalleryView {
    pub root: HtmlElement,
    pub title: HtmlElement,
    pub description: HtmlElement,
    pub stage: HtmlElement,
    pub prev: HtmlElement,
    pub next: HtmlElement,
    pub indicator: HtmlElement,
}

pub struct View {
    pub document: Document,
    pub pages: Vec<(PageId, HtmlElement)>,
    pub loading: Option<LoadingView>,
    pub hero_title: HtmlElement,
    pub hero_cells: Vec<((u8, u8), HtmlElement)>,
    pub strip: HtmlElement,
    pub gallery: GalleryView,
}

pub fn el(document: &Document, tag: &str, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element(tag)?.dyn_into::<HtmlElement>()?;
    if !class.is_empty() {
        element.set_class_name(class);
    }
    Ok(element)
}

/// Point a broken image at its `data-fallback` source. The attribute is
/// consumed so a broken placeholder cannot swap again.
pub fn apply_fallback(img: &Element) -> bool {
    let Some(fallback) = img.get_attribute("data-fallback") else {
        return false;
    };
    if img.remove_attribute("data-fallback").is_err() {
        return false;
    }
    img.set_attribute("src", &fallback).is_ok()
}

fn text(document: &Document, tag: &str, class: &str, body: &str) -> Result<HtmlElement, JsValue> {
    let element = el(document, tag, class)?;
    element.set_text_content(Some(body));
    Ok(element)
}

fn nav_buttons(document: &Document, page: PageId) -> Result<HtmlElement, JsValue> {
    let bar = el(document, "nav", "page-nav")?;
    for (target, label) in page.links() {
        let button = text(document, "button", "nav-button", label)?;
        button.set_attribute("type", "button")?;
        button.set_attribute("data-nav", target.slug())?;
        button.set_attribute("aria-label", label)?;
        bar.append_child(&button)?;
    }
    Ok(bar)
}

/// Build every page plus the splash overlay and return handles into them.
pub fn build(document: &Document, root: &Element, app: &Portfolio) -> Result<View, JsValue> {
    let content = app.content();
    let mut pages = Vec::with_capacity(PageId::ALL.len());

    let (hero, hero_title, hero_cells) = hero_page(document)?;
    let (work, strip) = work_page(document, content)?;
    let (samples, gallery) = sample_work_page(document, content)?;
    let process = process_page(document, content)?;
    let about = about_page(document)?;

    for (page, body) in PageId::ALL.into_iter().zip([hero, work, samples, process, about]) {
        let section = el(document, "div", "page")?;
        section.set_id(&format!("page-{}", page.slug()));
        let style = section.style();
        style.set_property("transition", &format!("transform {TRANSITION_MS}ms"))?;
        style.set_property("transform", app.controller().offset_for(page).to_css())?;
        section.append_child(&body)?;
        section.append_child(&nav_buttons(document, page)?)?;
        root.append_child(&section)?;
        pages.push((page, section));
    }

    let loading = match app.loading() {
        Some(seq) => {
            let view = loading_overlay(document, seq)?;
            root.append_child(&view.overlay)?;
            Some(view)
        }
        None => None,
    };

    Ok(View {
        document: document.clone(),
        pages,
        loading,
        hero_title,
        hero_cells,
        strip,
        gallery,
    })
}

fn loading_overlay(document: &Document, seq: &LoadingSequence) -> Result<LoadingView, JsValue> {
    let overlay = el(document, "div", "loading")?;
    let mut blocks = Vec::with_capacity(seq.blocks().len());
    for block in seq.blocks() {
        let tile = el(document, "div", "loading-block")?;
        tile.set_attribute("data-block", &block.key())?;
        let style = tile.style();
        style.set_property("left", &format!("{}%", block.left_percent()))?;
        style.set_property("top", &format!("{}%", block.top_percent()))?;
        style.set_property("background-color", block.color)?;
        overlay.append_child(&tile)?;
        blocks.push(tile);
    }
    let greeting = text(document, "div", "loading-greeting", "Hello")?;
    overlay.append_child(&greeting)?;
    Ok(LoadingView {
        overlay,
        greeting: Some(greeting),
        blocks,
    })
}

type HeroParts = (HtmlElement, HtmlElement, Vec<((u8, u8), HtmlElement)>);

fn hero_page(document: &Document) -> Result<HeroParts, JsValue> {
    let page = el(document, "section", "hero")?;

    let grid = el(document, "div", "hero-grid")?;
    let mut cells = Vec::new();
    for (row, col) in HeroGrid::cells() {
        let cell = el(document, "div", "hero-cell")?;
        cell.set_attribute("data-cell", &format!("{row}-{col}"))?;
        let style = cell.style();
        style.set_property("left", &format!("{}%", u32::from(col) * 20))?;
        style.set_property("top", &format!("{}%", u32::from(row) * 25))?;
        grid.append_child(&cell)?;
        cells.push(((row, col), cell));
    }
    page.append_child(&grid)?;

    let title = text(document, "h1", "hero-title", "PORTFOLIO")?;
    title.set_attribute("data-text", "PORTFOLIO")?;
    page.append_child(&title)?;

    page.append_child(&text(
        document,
        "p",
        "hero-tagline",
        "NO PIXEL WITHOUT PURPOSE, CRAFTED INTERFACE LANGUAGE THAT RESONATES.",
    )?)?;
    let resume = text(document, "button", "resume-button", "RESUME ↗")?;
    resume.set_attribute("type", "button")?;
    resume.set_attribute("data-action", "resume")?;
    page.append_child(&resume)?;

    Ok((page, title, cells))
}

fn work_page(
    document: &Document,
    content: &Content,
) -> Result<(HtmlElement, HtmlElement), JsValue> {
    let page = el(document, "section", "work")?;
    page.append_child(&text(document, "h1", "page-title", "WORK")?)?;
    page.append_child(&text(document, "span", "pill", "HIGHLIGHTS")?)?;

    let strip = el(document, "div", "strip")?;
    for highlight in &content.highlights {
        let card = el(document, "a", "strip-card")?;
        card.set_attribute("href", &highlight.link)?;
        card.set_attribute("target", "_blank")?;
        card.set_attribute("rel", "noopener noreferrer")?;
        card.append_child(&media(document, &highlight.media, &highlight.title)?)?;
        card.append_child(&text(document, "h3", "", &highlight.title)?)?;
        strip.append_child(&card)?;
    }
    page.append_child(&strip)?;
    Ok((page, strip))
}

fn media(document: &Document, src: &str, alt: &str) -> Result<HtmlElement, JsValue> {
    if is_video(src) {
        let video = el(document, "video", "media")?;
        for flag in ["muted", "loop", "autoplay", "playsinline"] {
            video.set_attribute(flag, "")?;
        }
        video.set_attribute("src", src)?;
        Ok(video)
    } else {
        let img = el(document, "img", "media")?;
        img.set_attribute("src", src)?;
        img.set_attribute("alt", alt)?;
        img.set_attribute("draggable", "false")?;
        Ok(img)
    }
}

fn project_card(document: &Document, project: &Project) -> Result<HtmlElement, JsValue> {
    let card = el(document, "article", "card")?;
    card.set_attribute("data-project", &project.id)?;

    let frame = el(document, "div", "card-media")?;
    match project.preview() {
        Some(src) => {
            let preview = media(document, src, &project.title)?;
            if !is_video(src) {
                preview.set_attribute("data-fallback", PLACEHOLDER_IMAGE)?;
            }
            frame.append_child(&preview)?;
        }
        None => {
            frame.append_child(&text(document, "div", "no-image", "No Image")?)?;
        }
    }
    card.append_child(&frame)?;
    card.append_child(&text(document, "h3", "", &project.title)?)?;
    card.append_child(&text(document, "p", "card-desc", &project.description)?)?;
    Ok(card)
}

fn sample_work_page(
    document: &Document,
    content: &Content,
) -> Result<(HtmlElement, GalleryView), JsValue> {
    let page = el(document, "section", "sample-work")?;
    page.append_child(&text(document, "h1", "page-title", "SAMPLE WORK")?)?;

    let grid = el(document, "div", "cards")?;
    for project in &content.projects {
        grid.append_child(&project_card(document, project)?)?;
    }
    page.append_child(&grid)?;

    let gallery = gallery_sheet(document)?;
    page.append_child(&gallery.root)?;
    Ok((page, gallery))
}

fn gallery_sheet(document: &Document) -> Result<GalleryView, JsValue> {
    let root = el(document, "div", "gallery")?;
    root.set_attribute("aria-hidden", "true")?;
    root.set_hidden(true);

    let backdrop = el(document, "div", "gallery-backdrop")?;
    backdrop.set_attribute("data-gallery", "close")?;
    root.append_child(&backdrop)?;

    let sheet = el(document, "div", "gallery-sheet")?;
    let title = el(document, "h2", "gallery-title")?;
    let description = el(document, "p", "gallery-desc")?;
    let close = text(document, "button", "gallery-close", "✕")?;
    close.set_attribute("data-gallery", "close")?;
    let prev = text(document, "button", "gallery-prev", "‹")?;
    prev.set_attribute("data-gallery", "prev")?;
    prev.set_attribute("aria-label", "Previous image")?;
    let next = text(document, "button", "gallery-next", "›")?;
    next.set_attribute("data-gallery", "next")?;
    next.set_attribute("aria-label", "Next image")?;
    let stage = el(document, "div", "gallery-stage")?;
    stage.set_attribute("data-gallery", "stage")?;
    let indicator = el(document, "div", "gallery-indicator")?;

    for child in [&title, &description, &close, &prev, &stage, &next, &indicator] {
        sheet.append_child(child)?;
    }
    root.append_child(&sheet)?;

    Ok(GalleryView {
        root,
        title,
        description,
        stage,
        prev,
        next,
        indicator,
    })
}

fn process_page(document: &Document, content: &Content) -> Result<HtmlElement, JsValue> {
    let page = el(document, "section", "work-process")?;
    page.append_child(&text(document, "h1", "page-title", "WORK PROCESS")?)?;
    let steps = el(document, "div", "steps")?;
    for step in &content.steps {
        let item = el(document, "div", "step")?;
        item.append_child(&text(document, "span", "step-number", &step.number)?)?;
        item.append_child(&text(document, "h2", "step-title", &step.title)?)?;
        item.append_child(&text(document, "p", "step-desc", &step.description)?)?;
        steps.append_child(&item)?;
    }
    page.append_child(&steps)?;
    Ok(page)
}

fn about_page(document: &Document) -> Result<HtmlElement, JsValue> {
    let page = el(document, "section", "about-me")?;
    page.append_child(&text(document, "h1", "page-title", "ABOUT ME")?)?;
    page.append_child(&text(
        document,
        "p",
        "about-text",
        "UI designer shaping interfaces from research to final pixels.",
    )?)?;
    let links = el(document, "div", "about-links")?;
    for (label, href) in [
        ("Behance", "https://www.behance.net/"),
        ("Dribbble", "https://dribbble.com/"),
    ] {
        let link = text(document, "a", "about-link", label)?;
        link.set_attribute("href", href)?;
        link.set_attribute("target", "_blank")?;
        link.set_attribute("rel", "noopener noreferrer")?;
        links.append_child(&link)?;
    }
    page.append_child(&links)?;
    Ok(page)
}
