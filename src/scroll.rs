//! Scroll progress geometry.
//!
//! Page coordinates: y grows downward, the viewport shows
//! `[scroll_y, scroll_y + height]`. A [`Band`] pairs two trigger edges and
//! maps the current scroll offset to a progress fraction in [0, 1]; the
//! timeline turns that fraction into object transforms.
//!
//! Progress is a pure function of `(region, viewport)`. Anything that can
//! produce a viewport can drive the timeline, so tests feed synthetic scroll
//! offsets without a window.

/// The visible slice of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Page offset of the viewport top.
    pub scroll_y: f32,
    /// Viewport height in page units.
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_y: f32, height: f32) -> Self {
        Self { scroll_y, height }
    }

    /// Page offset of the viewport bottom.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }
}

/// A named rectangular slice of the page that drives bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerRegion {
    pub name: String,
    /// Page offset of the region top.
    pub top: f32,
    pub height: f32,
}

impl TriggerRegion {
    pub fn new(name: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            top,
            height,
        }
    }

    /// Page offset of the given region edge.
    #[inline]
    fn edge_offset(&self, edge: RegionEdge) -> f32 {
        match edge {
            RegionEdge::Top => self.top,
            RegionEdge::Center => self.top + self.height * 0.5,
            RegionEdge::Bottom => self.top + self.height,
        }
    }
}

/// Which horizontal line of a trigger region an edge refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionEdge {
    Top,
    Center,
    Bottom,
}

/// A region edge paired with the viewport anchor it meets.
///
/// `anchor` is a fraction of the viewport height: 0.0 is the viewport top,
/// 0.5 its center, 1.0 its bottom. `Edge::top(0.8)` fires when the region's
/// top line scrolls up to 80% of the way down the screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub region_edge: RegionEdge,
    pub anchor: f32,
}

impl Edge {
    pub fn top(anchor: f32) -> Self {
        Self {
            region_edge: RegionEdge::Top,
            anchor,
        }
    }

    pub fn center(anchor: f32) -> Self {
        Self {
            region_edge: RegionEdge::Center,
            anchor,
        }
    }

    pub fn bottom(anchor: f32) -> Self {
        Self {
            region_edge: RegionEdge::Bottom,
            anchor,
        }
    }

    /// Scroll offset at which this edge meets its viewport anchor.
    fn scroll_at(&self, region: &TriggerRegion, viewport_height: f32) -> f32 {
        region.edge_offset(self.region_edge) - self.anchor * viewport_height
    }
}

/// Start and end edges of a scroll-driven animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub start: Edge,
    pub end: Edge,
}

impl Band {
    pub fn new(start: Edge, end: Edge) -> Self {
        Self { start, end }
    }

    /// Progress of the viewport through this band, clamped to [0, 1].
    ///
    /// Linear in `scroll_y` between the two edge offsets, 0 before the start,
    /// 1 after the end. Monotonic in scroll for any band whose end lies at or
    /// after its start; a zero-length band degenerates to a step at the start
    /// offset.
    pub fn progress(&self, region: &TriggerRegion, viewport: &Viewport) -> f32 {
        let start = self.start.scroll_at(region, viewport.height);
        let end = self.end.scroll_at(region, viewport.height);

        let span = end - start;
        if span.abs() < f32::EPSILON {
            return if viewport.scroll_y >= start { 1.0 } else { 0.0 };
        }

        ((viewport.scroll_y - start) / span).clamp(0.0, 1.0)
    }
}
