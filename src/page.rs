/// The five stacked full-screen pages, in vertical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Hero,
    Work,
    SampleWork,
    WorkProcess,
    AboutMe,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Hero,
        PageId::Work,
        PageId::SampleWork,
        PageId::WorkProcess,
        PageId::AboutMe,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<PageId> {
        Self::ALL.get(index).copied()
    }

    /// Stable identifier used in DOM ids and `data-nav` attributes.
    pub fn slug(self) -> &'static str {
        match self {
            PageId::Hero => "hero",
            PageId::Work => "work",
            PageId::SampleWork => "sample-work",
            PageId::WorkProcess => "work-process",
            PageId::AboutMe => "about-me",
        }
    }

    pub fn from_slug(slug: &str) -> Option<PageId> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }

    /// Work and SampleWork sit side by side rather than above/below each other.
    pub fn is_horizontal_pair(a: PageId, b: PageId) -> bool {
        matches!(
            (a, b),
            (PageId::Work, PageId::SampleWork) | (PageId::SampleWork, PageId::Work)
        )
    }

    /// Navigation buttons each page offers, with their labels.
    pub fn links(self) -> &'static [(PageId, &'static str)] {
        match self {
            PageId::Hero => &[(PageId::Work, "Go to work section")],
            PageId::Work => &[
                (PageId::Hero, "Back to top"),
                (PageId::WorkProcess, "Go to work process"),
                (PageId::SampleWork, "See sample work"),
            ],
            PageId::SampleWork => &[(PageId::Work, "Back to Work")],
            PageId::WorkProcess => &[
                (PageId::Work, "Back to work"),
                (PageId::AboutMe, "Go to about me"),
            ],
            PageId::AboutMe => &[
                (PageId::WorkProcess, "Back to work process"),
                (PageId::Hero, "Back to home"),
            ],
        }
    }
}
