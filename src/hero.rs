use crate::constants::{HERO_GRID_COLS, HERO_GRID_ROWS, HERO_HOVER_FILL};

/// Hover highlight over the hero page's 4×5 layout grid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeroGrid {
    hovered: Option<(u8, u8)>,
}

impl HeroGrid {
    pub fn cells() -> impl Iterator<Item = (u8, u8)> {
        (0..HERO_GRID_ROWS).flat_map(|row| (0..HERO_GRID_COLS).map(move |col| (row, col)))
    }

    pub fn hover(&mut self, row: u8, col: u8) {
        if row < HERO_GRID_ROWS && col < HERO_GRID_COLS {
            self.hovered = Some((row, col));
        }
    }

    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<(u8, u8)> {
        self.hovered
    }

    pub fn fill(&self, row: u8, col: u8) -> &'static str {
        if self.hovered == Some((row, col)) {
            HERO_HOVER_FILL
        } else {
            "transparent"
        }
    }
}
