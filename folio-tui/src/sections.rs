//! Page sections and the scroll-driven active-section tracker.

/// Named region of the page, in top-to-bottom order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Education,
    Experience,
    Projects,
    Skills,
    Contact,
}

impl Section {
    /// Declaration order; also the tracker's iteration order
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Education,
        Section::Experience,
        Section::Projects,
        Section::Skills,
        Section::Contact,
    ];

    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }

    /// Nav label (capitalized id)
    pub fn name(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Education => "Education",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next section, stopping at the last one
    pub fn next(&self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(*self)
    }

    /// Previous section, stopping at the first one
    pub fn previous(&self) -> Self {
        self.index()
            .checked_sub(1)
            .and_then(Self::from_index)
            .unwrap_or(*self)
    }
}

/// Vertical extent of a rendered section, in rows: `[top, top + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGeometry {
    pub top: u32,
    pub height: u32,
}

impl SectionGeometry {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    pub fn contains(&self, offset: u32) -> bool {
        offset >= self.top && offset < self.bottom()
    }
}

/// Anything that can answer "where is this section right now"
pub trait SectionLayout {
    /// `None` when the section is not part of the rendered page
    fn geometry(&self, section: Section) -> Option<SectionGeometry>;
}

/// Geometry of every section as laid out for one terminal width
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    slots: [Option<SectionGeometry>; 7],
}

impl PageLayout {
    pub fn set(&mut self, section: Section, geometry: SectionGeometry) {
        self.slots[section.index()] = Some(geometry);
    }

    #[cfg(test)]
    pub fn remove(&mut self, section: Section) {
        self.slots[section.index()] = None;
    }

    /// Total rows covered by the laid-out sections
    #[cfg(test)]
    pub fn total_rows(&self) -> u32 {
        self.slots
            .iter()
            .flatten()
            .map(SectionGeometry::bottom)
            .max()
            .unwrap_or(0)
    }
}

impl SectionLayout for PageLayout {
    fn geometry(&self, section: Section) -> Option<SectionGeometry> {
        self.slots[section.index()]
    }
}

/// Keeps the active section in step with the scroll offset.
///
/// The look-ahead bias switches the highlight slightly before a section's
/// top edge reaches the top of the viewport.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    active: Section,
    lookahead: u32,
}

impl SectionTracker {
    pub fn new(lookahead: u32) -> Self {
        Self {
            active: Section::Home,
            lookahead,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    /// Recompute the active section for a scroll offset.
    ///
    /// The first section in declaration order whose range contains
    /// `offset + lookahead` wins. With no match the previous value stays.
    pub fn on_scroll(&mut self, offset: u32, layout: &dyn SectionLayout) -> Section {
        let effective = offset.saturating_add(self.lookahead);

        let hit = Section::ALL.iter().copied().find(|section| {
            layout
                .geometry(*section)
                .is_some_and(|g| g.contains(effective))
        });

        if let Some(section) = hit {
            if section != self.active {
                tracing::debug!(from = self.active.id(), to = section.id(), offset, "active section changed");
            }
            self.active = section;
        }
        self.active
    }
}
