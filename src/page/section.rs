use std::{fmt, str::FromStr};

use thiserror::Error;

/// One of the four page regions, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM id of the `<section>` element.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open: the top edge belongs to this extent, the bottom edge to the next.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.bottom()
    }
}

/// Measured extents of whichever sections are currently rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionLayout {
    extents: [Option<Extent>; 4],
}

impl SectionLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a layout by asking `measure` for each section; `None` means the
    /// section is not rendered.
    pub fn measure<F>(mut measure: F) -> Self
    where
        F: FnMut(Section) -> Option<Extent>,
    {
        let mut layout = Self::new();
        for section in Section::ALL {
            if let Some(extent) = measure(section) {
                layout.set(section, extent);
            }
        }
        layout
    }

    pub fn set(&mut self, section: Section, extent: Extent) {
        self.extents[section as usize] = Some(extent);
    }

    #[cfg(test)]
    pub fn with(mut self, section: Section, extent: Extent) -> Self {
        self.set(section, extent);
        self
    }

    pub fn get(&self, section: Section) -> Option<Extent> {
        self.extents[section as usize]
    }
}

/// First section, in layout order, whose extent contains `position`.
///
/// Sections missing from the layout are skipped. Returns `None` when the
/// position is outside every rendered section.
pub fn section_at(position: f64, layout: &SectionLayout) -> Option<Section> {
    Section::ALL.into_iter().find(|&section| {
        layout
            .get(section)
            .is_some_and(|extent| extent.contains(position))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked_layout() -> SectionLayout {
        SectionLayout::new()
            .with(Section::Home, Extent::new(0.0, 600.0))
            .with(Section::About, Extent::new(600.0, 900.0))
            .with(Section::Projects, Extent::new(1500.0, 700.0))
            .with(Section::Contact, Extent::new(2200.0, 800.0))
    }

    #[test]
    fn parse_and_display() {
        for section in Section::ALL {
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
        assert_eq!(
            "blog".parse::<Section>(),
            Err(UnknownSection("blog".to_string()))
        );
    }

    #[test]
    fn default_is_home() {
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn boundaries_are_half_open() {
        let layout = stacked_layout();
        assert_eq!(section_at(0.0, &layout), Some(Section::Home));
        assert_eq!(section_at(599.9, &layout), Some(Section::Home));
        assert_eq!(section_at(600.0, &layout), Some(Section::About));
        assert_eq!(section_at(2999.0, &layout), Some(Section::Contact));
        assert_eq!(section_at(3000.0, &layout), None);
        assert_eq!(section_at(-1.0, &layout), None);
    }

    #[test]
    fn every_position_maps_to_its_unique_section() {
        let layout = stacked_layout();
        let mut position = -50.0;
        while position < 3100.0 {
            let containing = Section::ALL
                .into_iter()
                .filter(|&s| layout.get(s).is_some_and(|e| e.contains(position)))
                .collect::<Vec<_>>();
            assert!(containing.len() <= 1, "overlap at {position}");
            assert_eq!(section_at(position, &layout), containing.first().copied());
            position += 25.0;
        }
    }

    #[test]
    fn missing_sections_are_skipped() {
        let layout = SectionLayout::measure(|section| match section {
            Section::Home => Some(Extent::new(0.0, 500.0)),
            Section::About => None,
            Section::Projects => Some(Extent::new(500.0, 500.0)),
            Section::Contact => None,
        });
        assert_eq!(layout.get(Section::About), None);
        assert_eq!(section_at(700.0, &layout), Some(Section::Projects));
        assert_eq!(section_at(1200.0, &layout), None);
    }

    #[test]
    fn empty_layout_matches_nothing() {
        assert_eq!(section_at(10.0, &SectionLayout::new()), None);
    }
}
