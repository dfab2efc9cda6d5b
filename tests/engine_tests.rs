//! Integration tests for the wired scene.
//!
//! These drive a fully assembled engine (standard page plus stock
//! choreography) through synthetic time and scroll sequences and check the
//! scene state the renderer would draw.

use ringlet::choreography;
use ringlet::engine::Engine;
use ringlet::page::Page;
use ringlet::scene::ObjectId;
use ringlet::scroll::{Band, Edge};
use ringlet::timeline::{Binding, Channel};

const DT: f32 = 1.0 / 60.0;

fn wired_engine(seed: u64) -> Engine {
    let page = Page::standard();
    let mut engine = Engine::new().with_seed(seed).with_page(&page);
    choreography::install(engine.timeline_mut(), &page);
    engine
}

// ============================================================================
// Particle field
// ============================================================================

#[test]
fn test_particles_wrap_and_stay_bounded() {
    let mut engine = wired_engine(3);
    let mut wraps = 0;
    let mut last_y: Vec<f32> = engine
        .particles()
        .iter()
        .map(|p| p.transform.position.y)
        .collect();

    for i in 0..1000 {
        engine.tick(i as f32 * DT);
        for (particle, last) in engine.particles().iter().zip(&mut last_y) {
            let pos = particle.transform.position;
            assert!(pos.x >= -15.0 && pos.x <= 15.0);
            assert!(pos.y >= -15.0 && pos.y <= 15.0);
            assert!(pos.z >= -10.0 && pos.z <= 10.0);
            // Vertical velocity is always upward, so a drop in y means the
            // particle wrapped through the top of the field.
            if pos.y < *last {
                wraps += 1;
            }
            *last = pos.y;
        }
    }

    assert!(wraps > 0, "no particle wrapped in 1000 ticks");
}

// ============================================================================
// Ring choreography
// ============================================================================

#[test]
fn test_hero_rings_retrace() {
    let mut engine = wired_engine(1);

    engine.set_scroll(0.0);
    engine.tick(0.0);
    assert!((engine.rings()[0].transform.position.x - -0.6).abs() < 1e-6);
    assert!((engine.rings()[1].transform.position.x - 0.6).abs() < 1e-6);

    engine.set_scroll(500.0);
    engine.tick(DT);
    assert!((engine.rings()[0].transform.position.x - -0.15).abs() < 1e-6);
    assert!((engine.rings()[1].transform.position.x - 0.15).abs() < 1e-6);

    engine.set_scroll(1000.0);
    engine.tick(2.0 * DT);
    assert!((engine.rings()[0].transform.position.x - 0.3).abs() < 1e-6);

    // Scrolling back retraces the same positions.
    engine.set_scroll(0.0);
    engine.tick(3.0 * DT);
    assert!((engine.rings()[0].transform.position.x - -0.6).abs() < 1e-6);
    assert!((engine.rings()[1].transform.position.x - 0.6).abs() < 1e-6);
}

#[test]
fn test_date_rotation_monotonic_and_clamped() {
    use std::f32::consts::TAU;

    let mut engine = wired_engine(1);
    let mut previous = f32::NEG_INFINITY;

    for step in 0..=12 {
        let scroll = step as f32 * 100.0;
        engine.set_scroll(scroll);
        engine.tick(step as f32 * DT);

        let z = engine.rings()[0].transform.rotation.z;
        assert!(z >= previous - 1e-6, "rotation regressed at scroll {scroll}");
        assert!(z >= 0.0 && z <= TAU + 1e-6);
        previous = z;
    }

    // Past the band's end the rotation holds the full turn.
    assert!((previous - TAU).abs() < 1e-5);
    assert!((engine.rings()[1].transform.rotation.z + TAU).abs() < 1e-5);
}

#[test]
fn test_rings_hold_between_hero_and_story() {
    let mut engine = wired_engine(1);

    // The hero movement has finished and the story movement has not begun,
    // so x holds the handoff value through the gap.
    for (i, scroll) in [1000.0_f32, 1200.0, 1400.0, 1500.0].iter().enumerate() {
        engine.set_scroll(*scroll);
        engine.tick(i as f32 * DT);
        assert!((engine.rings()[0].transform.position.x - 0.3).abs() < 1e-6);
        assert!((engine.rings()[1].transform.position.x - -0.3).abs() < 1e-6);
    }
}

#[test]
fn test_rsvp_scale_midpoint() {
    let mut engine = wired_engine(1);

    engine.set_scroll(6750.0);
    engine.tick(0.0);
    for ring in engine.rings() {
        assert!((ring.transform.scale.x - 1.25).abs() < 1e-6);
        assert!((ring.transform.scale.y - 1.25).abs() < 1e-6);
        assert!((ring.transform.scale.z - 1.25).abs() < 1e-6);
    }

    engine.set_scroll(7000.0);
    engine.tick(DT);
    for ring in engine.rings() {
        assert!((ring.transform.scale.x - 1.5).abs() < 1e-6);
    }
}

#[test]
fn test_binding_apply_is_idempotent() {
    let mut engine = wired_engine(1);
    engine.set_scroll(500.0);

    let viewport = engine.viewport();
    let mut once = engine.rings().clone();
    let mut twice = engine.rings().clone();

    engine.timeline().apply(&viewport, &mut once);
    engine.timeline().apply(&viewport, &mut twice);
    engine.timeline().apply(&viewport, &mut twice);

    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.transform, b.transform);
    }
}

#[test]
fn test_missing_region_is_isolated() {
    let mut engine = wired_engine(1);
    engine.timeline_mut().register(Binding {
        region: "ghost".into(),
        target: ObjectId::Ring(0),
        channel: Channel::PositionX,
        from: 100.0,
        to: 200.0,
        band: Band::new(Edge::top(0.0), Edge::bottom(0.0)),
    });

    engine.set_scroll(500.0);
    engine.tick(0.0);

    // The dangling binding is skipped; the hero binding still runs.
    assert!((engine.rings()[0].transform.position.x - -0.15).abs() < 1e-6);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_seeded_runs_identical() {
    let mut a = wired_engine(7);
    let mut b = wired_engine(7);

    for i in 0..120 {
        let scroll = (i * 37 % 7000) as f32;
        a.set_scroll(scroll);
        b.set_scroll(scroll);
        a.tick(i as f32 * DT);
        b.tick(i as f32 * DT);
    }

    for (ra, rb) in a.rings().iter().zip(b.rings().iter()) {
        assert_eq!(ra.transform, rb.transform);
    }
    for (pa, pb) in a.particles().iter().zip(b.particles().iter()) {
        assert_eq!(pa.transform.position, pb.transform.position);
        assert_eq!(pa.tone, pb.tone);
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = wired_engine(1);
    let b = wired_engine(2);

    let same = a
        .particles()
        .iter()
        .zip(b.particles().iter())
        .all(|(pa, pb)| pa.transform.position == pb.transform.position);
    assert!(!same);
}

// ============================================================================
// Reveals
// ============================================================================

#[test]
fn test_reveals_converge_when_parked() {
    let mut engine = wired_engine(1);

    // Park deep in the story section so its items' bands are fully crossed.
    engine.set_scroll(2500.0);
    for i in 0..600 {
        engine.tick(i as f32 * DT);
    }

    let reveal = engine
        .timeline()
        .reveals()
        .iter()
        .find(|r| r.region == "story-item-0")
        .expect("story item reveal registered");
    let state = reveal.state();
    assert!(state.opacity > 0.999);
    assert!(state.offset.x.abs() < 0.1);
}

#[test]
fn test_reveals_start_hidden() {
    let engine = wired_engine(1);

    // Before any tick, a gallery item far down the page sits at its hidden
    // pose.
    let reveal = engine
        .timeline()
        .reveals()
        .iter()
        .find(|r| r.region == "gallery-item-0")
        .expect("gallery item reveal registered");
    let state = reveal.state();
    assert_eq!(state.opacity, 0.0);
    assert_eq!(state.scale, 0.5);
}
