//! Bottom-sheet viewer for a sample-work project.

use crate::constants::VIDEO_EXTENSIONS;
use crate::content::Project;
use crate::scroll_lock::{ScrollGuard, ScrollLock};

/// Video by file extension, case-insensitive.
pub fn is_video(src: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    VIDEO_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Image,
    Video,
    /// Wide media rendered with internal scrolling.
    Pannable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide<'a> {
    pub src: &'a str,
    pub kind: SlideKind,
}

/// Regular images followed by any scroll images not already among them.
pub fn slides_of(project: &Project) -> Vec<&str> {
    let mut slides: Vec<&str> = project.images.iter().map(String::as_str).collect();
    slides.extend(
        project
            .scroll_images
            .iter()
            .filter(|s| !project.images.contains(*s))
            .map(String::as_str),
    );
    slides
}

fn classify(project: &Project, src: &str) -> SlideKind {
    if is_video(src) {
        SlideKind::Video
    } else if project.scroll_images.iter().any(|s| s == src) {
        SlideKind::Pannable
    } else {
        SlideKind::Image
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug)]
struct OpenState {
    project: Project,
    slides: usize,
    index: usize,
    _scroll: ScrollGuard,
}

#[derive(Debug)]
pub struct GalleryViewer {
    lock: ScrollLock,
    open: Option<OpenState>,
}

impl GalleryViewer {
    pub fn new(lock: ScrollLock) -> Self {
        Self { lock, open: None }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn project(&self) -> Option<&Project> {
        self.open.as_ref().map(|o| &o.project)
    }

    pub fn slide_index(&self) -> usize {
        self.open.as_ref().map_or(0, |o| o.index)
    }

    pub fn slide_count(&self) -> usize {
        self.open.as_ref().map_or(0, |o| o.slides)
    }

    pub fn open(&mut self, project: Project) {
        log::info!("gallery open: {}", project.id);
        let slides = slides_of(&project).len();
        // Replace first so a re-open releases the previous guard before acquiring.
        self.open = None;
        self.open = Some(OpenState {
            project,
            slides,
            index: 0,
            _scroll: self.lock.acquire(),
        });
    }

    pub fn close(&mut self) {
        if self.open.take().is_some() {
            log::info!("gallery closed");
        }
    }

    pub fn next(&mut self) {
        if let Some(o) = self.open.as_mut() {
            if o.slides > 0 {
                o.index = (o.index + 1) % o.slides;
            }
        }
    }

    pub fn prev(&mut self) {
        if let Some(o) = self.open.as_mut() {
            if o.slides > 0 {
                o.index = (o.index + o.slides - 1) % o.slides;
            }
        }
    }

    /// Returns true if the key was consumed by the viewer.
    pub fn handle_key(&mut self, key: Key) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            Key::ArrowLeft => self.prev(),
            Key::ArrowRight => self.next(),
            Key::Escape => self.close(),
            Key::Other => return false,
        }
        true
    }

    pub fn current_slide(&self) -> Option<Slide<'_>> {
        let o = self.open.as_ref()?;
        let src = *slides_of(&o.project).get(o.index)?;
        Some(Slide {
            src,
            kind: classify(&o.project, src),
        })
    }

    /// Click on the slide area: only plain images advance.
    pub fn click_slide(&mut self) {
        let advance = matches!(
            self.current_slide(),
            Some(Slide {
                kind: SlideKind::Image,
                ..
            })
        ) && self.slide_count() > 1;
        if advance {
            self.next();
        }
    }

    /// "n / total" badge, shown only when there is more than one slide.
    pub fn indicator(&self) -> Option<String> {
        let o = self.open.as_ref()?;
        (o.slides > 1).then(|| format!("{} / {}", o.index + 1, o.slides))
    }
}
