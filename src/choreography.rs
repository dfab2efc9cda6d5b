//! The stock choreography: ring bindings and per-class reveal poses.
//!
//! These constants are the heart of the piece. As the page scrolls, the rings
//! first drift together over the hero, counter-rotate a full turn through the
//! date section, sweep apart across the story, and swell over the RSVP.
//! Repeated page elements fade or slide in as their own boxes cross the
//! lower part of the viewport, alternating direction by index parity where
//! the layout zig-zags.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::page::{ItemClass, Page};
use crate::scene::ObjectId;
use crate::scroll::{Band, Edge};
use crate::timeline::{Binding, Channel, RevealItem, RevealSpec, ScrollTimeline};

/// Lag time constant shared by all reveals, in seconds.
const REVEAL_SMOOTHING: f32 = 1.0;

/// The four scroll movements of the ring pair.
///
/// `from` values continue where the previous movement left the channel, so
/// consecutive movements hand the rings to each other without jumps.
pub fn ring_bindings() -> Vec<Binding> {
    let mut bindings = Vec::new();

    // Hero: the rings come together while the hero scrolls off the top.
    let hero = Band::new(Edge::top(0.0), Edge::bottom(0.0));
    bindings.push(Binding {
        region: "hero".into(),
        target: ObjectId::Ring(0),
        channel: Channel::PositionX,
        from: -0.6,
        to: 0.3,
        band: hero,
    });
    bindings.push(Binding {
        region: "hero".into(),
        target: ObjectId::Ring(1),
        channel: Channel::PositionX,
        from: 0.6,
        to: -0.3,
        band: hero,
    });

    // Date: a full counter-rotation as the section rises to center screen.
    let date = Band::new(Edge::top(1.0), Edge::center(0.5));
    bindings.push(Binding {
        region: "datetime".into(),
        target: ObjectId::Ring(0),
        channel: Channel::RotationZ,
        from: 0.0,
        to: TAU,
        band: date,
    });
    bindings.push(Binding {
        region: "datetime".into(),
        target: ObjectId::Ring(1),
        channel: Channel::RotationZ,
        from: 0.0,
        to: -TAU,
        band: date,
    });

    // Story: the rings orbit apart, picking up from the hero's end positions.
    let story = Band::new(Edge::top(0.5), Edge::bottom(0.5));
    bindings.push(Binding {
        region: "story".into(),
        target: ObjectId::Ring(0),
        channel: Channel::PositionX,
        from: 0.3,
        to: -1.5,
        band: story,
    });
    bindings.push(Binding {
        region: "story".into(),
        target: ObjectId::Ring(0),
        channel: Channel::PositionY,
        from: 0.0,
        to: 1.0,
        band: story,
    });
    bindings.push(Binding {
        region: "story".into(),
        target: ObjectId::Ring(1),
        channel: Channel::PositionX,
        from: -0.3,
        to: 1.5,
        band: story,
    });
    bindings.push(Binding {
        region: "story".into(),
        target: ObjectId::Ring(1),
        channel: Channel::PositionY,
        from: 0.0,
        to: -1.0,
        band: story,
    });

    // RSVP: both rings swell to one and a half size.
    let rsvp = Band::new(Edge::top(0.5), Edge::center(0.5));
    for ring in 0..2 {
        bindings.push(Binding {
            region: "rsvp".into(),
            target: ObjectId::Ring(ring),
            channel: Channel::ScaleUniform,
            from: 1.0,
            to: 1.5,
            band: rsvp,
        });
    }

    bindings
}

/// Hidden pose, band and smoothing for one reveal element.
///
/// `index` is the element's index within its class; classes that zig-zag
/// alternate sign on even/odd indices.
pub fn reveal_for(class: ItemClass, index: usize) -> (RevealSpec, Band, f32) {
    let even = index % 2 == 0;
    let (spec, band) = match class {
        ItemClass::ContentCard => (
            RevealSpec {
                opacity: 0.0,
                offset: Vec2::new(0.0, 50.0),
                rotation: 0.0,
                scale: 0.95,
            },
            Band::new(Edge::top(0.8), Edge::top(0.5)),
        ),
        ItemClass::StoryItem => (
            RevealSpec {
                opacity: 0.0,
                offset: Vec2::new(-30.0, 0.0),
                rotation: 0.0,
                scale: 1.0,
            },
            Band::new(Edge::top(0.85), Edge::top(0.65)),
        ),
        ItemClass::CountdownBox => (
            RevealSpec {
                opacity: 0.0,
                offset: Vec2::new(0.0, 30.0),
                rotation: 0.0,
                scale: 0.8,
            },
            Band::new(Edge::top(0.85), Edge::top(0.65)),
        ),
        ItemClass::ScheduleItem => (
            RevealSpec {
                opacity: 0.0,
                offset: Vec2::new(if even { -50.0 } else { 50.0 }, 0.0),
                rotation: 0.0,
                scale: 1.0,
            },
            Band::new(Edge::top(0.85), Edge::top(0.65)),
        ),
        ItemClass::DressCard => (
            RevealSpec {
                opacity: 0.0,
                offset: Vec2::new(0.0, 50.0),
                rotation: if even { -5.0 } else { 5.0 },
                scale: 1.0,
            },
            Band::new(Edge::top(0.85), Edge::top(0.65)),
        ),
        ItemClass::GalleryItem => (
            RevealSpec {
                opacity: 0.0,
                offset: Vec2::ZERO,
                rotation: if even { 10.0 } else { -10.0 },
                scale: 0.5,
            },
            Band::new(Edge::top(0.9), Edge::top(0.7)),
        ),
    };
    (spec, band, REVEAL_SMOOTHING)
}

/// Register the page's regions, the ring bindings and one reveal per page
/// item on the timeline.
pub fn install(timeline: &mut ScrollTimeline, page: &Page) {
    for region in page.regions() {
        timeline.add_region(region);
    }
    for binding in ring_bindings() {
        timeline.register(binding);
    }
    for item in page.items() {
        let (spec, band, smoothing) = reveal_for(item.class, item.index);
        timeline.add_reveal(RevealItem::new(item.region.name.clone(), band, spec, smoothing));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_bindings_mirror() {
        let bindings = ring_bindings();
        // Hero x targets are opposite.
        let hero: Vec<_> = bindings.iter().filter(|b| b.region == "hero").collect();
        assert_eq!(hero.len(), 2);
        assert_eq!(hero[0].to, -hero[1].to);
        // Date rotations are opposite full turns.
        let date: Vec<_> = bindings.iter().filter(|b| b.region == "datetime").collect();
        assert_eq!(date[0].to, TAU);
        assert_eq!(date[1].to, -TAU);
    }

    #[test]
    fn test_story_continues_from_hero() {
        let bindings = ring_bindings();
        let hero_x0 = bindings
            .iter()
            .find(|b| b.region == "hero" && b.target == ObjectId::Ring(0))
            .map(|b| b.to);
        let story_x0 = bindings
            .iter()
            .find(|b| {
                b.region == "story"
                    && b.target == ObjectId::Ring(0)
                    && b.channel == Channel::PositionX
            })
            .map(|b| b.from);
        assert_eq!(hero_x0, story_x0);
    }

    #[test]
    fn test_parity_alternation() {
        let (even, _, _) = reveal_for(ItemClass::ScheduleItem, 0);
        let (odd, _, _) = reveal_for(ItemClass::ScheduleItem, 1);
        assert_eq!(even.offset.x, -50.0);
        assert_eq!(odd.offset.x, 50.0);

        let (even, _, _) = reveal_for(ItemClass::GalleryItem, 2);
        let (odd, _, _) = reveal_for(ItemClass::GalleryItem, 3);
        assert_eq!(even.rotation, 10.0);
        assert_eq!(odd.rotation, -10.0);
    }

    #[test]
    fn test_install_wires_page() {
        let page = Page::standard();
        let mut timeline = ScrollTimeline::new();
        install(&mut timeline, &page);

        assert_eq!(timeline.reveals().len(), page.items().len());
        assert!(timeline.region("hero").is_some());
        assert!(timeline.region("rsvp").is_some());
        // Every binding's region exists.
        for binding in timeline.bindings() {
            assert!(timeline.region(&binding.region).is_some());
        }
        // Every reveal's region exists.
        for reveal in timeline.reveals() {
            assert!(timeline.region(&reveal.region).is_some());
        }
    }
}
