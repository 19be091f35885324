use crate::content::Content;
use crate::gallery::{GalleryViewer, Key};
use crate::glitch::GlitchScheduler;
use crate::hero::HeroGrid;
use crate::loading::LoadingSequence;
use crate::page::PageId;
use crate::rng::RandomSource;
use crate::scroll_lock::ScrollLock;
use crate::strip::DragScroll;
use crate::transition::{Navigation, TransitionController};

/// The whole site's state. Owns every component and routes input and time
/// into them; the browser layer only renders from it.
pub struct Portfolio {
    content: Content,
    rng: Box<dyn RandomSource>,
    controller: TransitionController,
    loading: Option<LoadingSequence>,
    hero_glitch: GlitchScheduler,
    hero_grid: HeroGrid,
    strip: DragScroll,
    gallery: GalleryViewer,
}

impl Portfolio {
    pub fn mount(
        content: Content,
        mut rng: Box<dyn RandomSource>,
        scroll_lock: ScrollLock,
        now_ms: u64,
    ) -> Self {
        let loading = LoadingSequence::mount(now_ms, rng.as_mut());
        let hero_glitch = GlitchScheduler::mount(now_ms, rng.as_mut());
        Self {
            content,
            rng,
            controller: TransitionController::mount(now_ms),
            loading: Some(loading),
            hero_glitch,
            hero_grid: HeroGrid::default(),
            strip: DragScroll::default(),
            gallery: GalleryViewer::new(scroll_lock),
        }
    }

    /// Fire every timer due at `now_ms`, across all components.
    pub fn advance(&mut self, now_ms: u64) {
        self.controller.advance(now_ms);

        if let Some(loading) = self.loading.as_mut() {
            loading.advance(now_ms, self.rng.as_mut());
        }
        if !self.controller.loading_visible() {
            if let Some(mut loading) = self.loading.take() {
                loading.teardown();
            }
        }

        self.hero_glitch.advance(now_ms, self.rng.as_mut());
    }

    pub fn navigate(&mut self, target: PageId, now_ms: u64) -> Navigation {
        self.controller.navigate(target, now_ms)
    }

    /// Open the viewer on a project by id; unknown ids are ignored.
    pub fn open_project(&mut self, id: &str) -> bool {
        match self.content.project(id) {
            Some(project) => {
                self.gallery.open(project.clone());
                true
            }
            None => {
                log::warn!("no project with id {id}");
                false
            }
        }
    }

    pub fn key(&mut self, key: Key) -> bool {
        self.gallery.handle_key(key)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn controller(&self) -> &TransitionController {
        &self.controller
    }

    /// Present until the splash overlay is removed.
    pub fn loading(&self) -> Option<&LoadingSequence> {
        self.loading.as_ref()
    }

    pub fn hero_glitch(&self) -> &GlitchScheduler {
        &self.hero_glitch
    }

    pub fn hero_grid(&self) -> &HeroGrid {
        &self.hero_grid
    }

    pub fn hero_grid_mut(&mut self) -> &mut HeroGrid {
        &mut self.hero_grid
    }

    pub fn strip(&self) -> &DragScroll {
        &self.strip
    }

    pub fn strip_mut(&mut self) -> &mut DragScroll {
        &mut self.strip
    }

    pub fn gallery(&self) -> &GalleryViewer {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut GalleryViewer {
        &mut self.gallery
    }

    /// Cancel every pending timer and release the scroll lock.
    pub fn teardown(&mut self) {
        self.controller.teardown();
        if let Some(mut loading) = self.loading.take() {
            loading.teardown();
        }
        self.hero_glitch.teardown();
        self.gallery.close();
    }

    pub fn pending_timers(&self) -> usize {
        self.controller.pending_timers()
            + self.loading.as_ref().map_or(0, LoadingSequence::pending_timers)
            + self.hero_glitch.pending_timers()
    }
}
