//! Synthetic page model.
//!
//! There is no DOM here: the page is a vertical strip of named sections, each
//! a whole number of viewports tall, carrying repeated reveal elements
//! (cards, list items, gallery tiles). The model's only job is to generate
//! trigger regions with deterministic geometry so the timeline has something
//! to measure scroll against. The demo builds the full page; tests build
//! one-section pages.

use crate::scroll::TriggerRegion;

/// Kind of repeated page element. Determines which reveal pose the
/// choreography assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemClass {
    /// The main text card of a section.
    ContentCard,
    /// Timeline entries in the story section.
    StoryItem,
    /// The four unit boxes of the countdown.
    CountdownBox,
    /// Rows of the day's schedule.
    ScheduleItem,
    /// Dress-code cards.
    DressCard,
    /// Photo tiles.
    GalleryItem,
}

impl ItemClass {
    /// Stable kind name, used as the region name prefix.
    pub fn name(self) -> &'static str {
        match self {
            ItemClass::ContentCard => "content-card",
            ItemClass::StoryItem => "story-item",
            ItemClass::CountdownBox => "countdown-box",
            ItemClass::ScheduleItem => "schedule-item",
            ItemClass::DressCard => "dress-card",
            ItemClass::GalleryItem => "gallery-item",
        }
    }
}

/// A named section of the page.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    /// Page offset of the section top.
    pub top: f32,
    pub height: f32,
}

/// One reveal element with its own trigger box on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageItem {
    pub class: ItemClass,
    /// Index within the class across the whole page (drives parity poses).
    pub index: usize,
    pub region: TriggerRegion,
}

/// Ordered sections plus their reveal elements.
///
/// ```ignore
/// let page = Page::new(1000.0)
///     .with_section("hero", 1.0)
///     .with_items(ItemClass::ContentCard, 1);
/// ```
#[derive(Debug, Clone)]
pub struct Page {
    viewport_height: f32,
    sections: Vec<Section>,
    items: Vec<PageItem>,
}

impl Page {
    /// An empty page scrolled in viewports of the given height (page units).
    pub fn new(viewport_height: f32) -> Self {
        Self {
            viewport_height,
            sections: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Append a section `viewports` viewport-heights tall.
    pub fn with_section(mut self, name: impl Into<String>, viewports: f32) -> Self {
        let top = self.height();
        self.sections.push(Section {
            name: name.into(),
            top,
            height: viewports * self.viewport_height,
        });
        self
    }

    /// Add `count` elements of `class` to the most recently added section.
    ///
    /// Elements are stacked evenly down the section, each occupying the
    /// middle half of its slot. Without a section this is a no-op.
    pub fn with_items(mut self, class: ItemClass, count: usize) -> Self {
        let Some(section) = self.sections.last() else {
            return self;
        };

        let base = self.items.iter().filter(|i| i.class == class).count();
        let slot = section.height / count as f32;

        for i in 0..count {
            let index = base + i;
            let top = section.top + slot * i as f32 + slot * 0.25;
            self.items.push(PageItem {
                class,
                index,
                region: TriggerRegion::new(
                    format!("{}-{}", class.name(), index),
                    top,
                    slot * 0.5,
                ),
            });
        }
        self
    }

    /// Total page height in page units.
    pub fn height(&self) -> f32 {
        self.sections
            .last()
            .map(|s| s.top + s.height)
            .unwrap_or(0.0)
    }

    #[inline]
    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.height() - self.viewport_height).max(0.0)
    }

    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[inline]
    pub fn items(&self) -> &[PageItem] {
        &self.items
    }

    /// All trigger regions on the page: one per section, one per item.
    pub fn regions(&self) -> Vec<TriggerRegion> {
        let mut regions: Vec<TriggerRegion> = self
            .sections
            .iter()
            .map(|s| TriggerRegion::new(s.name.clone(), s.top, s.height))
            .collect();
        regions.extend(self.items.iter().map(|i| i.region.clone()));
        regions
    }

    /// The demo page: seven sections in reading order with their repeated
    /// elements.
    pub fn standard() -> Self {
        Page::new(1000.0)
            .with_section("hero", 1.0)
            .with_items(ItemClass::ContentCard, 1)
            .with_section("datetime", 1.0)
            .with_items(ItemClass::ContentCard, 1)
            .with_items(ItemClass::CountdownBox, 4)
            .with_section("story", 2.0)
            .with_items(ItemClass::ContentCard, 1)
            .with_items(ItemClass::StoryItem, 3)
            .with_section("schedule", 1.0)
            .with_items(ItemClass::ContentCard, 1)
            .with_items(ItemClass::ScheduleItem, 4)
            .with_section("dress", 1.0)
            .with_items(ItemClass::ContentCard, 1)
            .with_items(ItemClass::DressCard, 2)
            .with_section("gallery", 1.0)
            .with_items(ItemClass::ContentCard, 1)
            .with_items(ItemClass::GalleryItem, 6)
            .with_section("rsvp", 1.0)
            .with_items(ItemClass::ContentCard, 1)
    }
}
