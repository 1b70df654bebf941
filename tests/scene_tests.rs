// Host-side tests for scene presets, the animator and event dispatch.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod assets {
    include!("../src/core/assets.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}
mod clock {
    include!("../src/core/clock.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod controller {
    include!("../src/core/controller.rs");
}
mod controls {
    include!("../src/core/controls.rs");
}
mod model {
    include!("../src/core/model.rs");
}
mod scene {
    include!("../src/core/scene.rs");
}
mod scroll {
    include!("../src/core/scroll.rs");
}
mod starfield {
    include!("../src/core/starfield.rs");
}

use camera::Viewport;
use config::*;
use constants::*;
use controller::*;
use glam::Vec3;
use model::MaterialChannel;
use scene::SceneState;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn presets_by_name_and_fallback() {
    assert_eq!(ScenePreset::from_name(" Orbit "), Some(ScenePreset::Orbit));
    assert_eq!(ScenePreset::from_name("dolly"), Some(ScenePreset::Dolly));
    assert_eq!(ScenePreset::from_name("warp"), None);
    assert_eq!(SceneConfig::from_attrs(Some("warp"), None).preset, ScenePreset::Board);
    assert_eq!(SceneConfig::from_attrs(None, None).preset, ScenePreset::Board);
    for p in [ScenePreset::Board, ScenePreset::Orbit, ScenePreset::Dolly] {
        assert_eq!(ScenePreset::from_name(p.name()), Some(p));
    }
}

#[test]
fn seed_attribute_overrides_default() {
    assert_eq!(SceneConfig::from_attrs(Some("board"), Some("42")).seed, 42);
    assert_eq!(
        SceneConfig::from_attrs(Some("board"), Some("nope")).seed,
        DEFAULT_STAR_SEED
    );
}

#[test]
fn preset_star_counts() {
    assert_eq!(SceneConfig::for_preset(ScenePreset::Board).starfield.count, 8000);
    assert_eq!(SceneConfig::for_preset(ScenePreset::Orbit).starfield.count, 5000);
    let dolly = SceneConfig::for_preset(ScenePreset::Dolly);
    assert_eq!(dolly.starfield.count, 500);
    assert_eq!(dolly.starfield.radius.min, 50.0);
    assert_eq!(dolly.starfield.radius.max, 250.0);
}

#[test]
fn scene_generates_starfield_from_config() {
    let state = SceneState::new(SceneConfig::for_preset(ScenePreset::Dolly));
    assert_eq!(state.starfield().len(), 500);
    for s in state.starfield().stars() {
        assert!((50.0..=250.0).contains(&s.orbital_radius()));
        assert!((-50.0..=50.0).contains(&s.fixed_height()));
    }
    assert_eq!(state.clock().elapsed(), 0.0);
}

#[test]
fn advance_frame_steps_clock_and_twinkles() {
    let mut state = SceneState::new(SceneConfig::for_preset(ScenePreset::Dolly));
    let mut last = 0.0;
    for _ in 0..5 {
        last = state.advance_frame();
    }
    assert!((last - 5.0 * CLOCK_STEP).abs() < 1e-6);
    for s in state.starfield().stars() {
        assert!(s.brightness() >= TWINKLE_FLOOR - 1e-6);
        assert!(s.brightness() <= TWINKLE_FLOOR + TWINKLE_GAIN + 1e-6);
    }
}

#[test]
fn scroll_is_ignored_until_intro_completes() {
    let mut state = SceneState::new(SceneConfig::for_preset(ScenePreset::Dolly));
    let base = *state.camera();
    assert!(!state.on_scroll(400.0));
    assert_eq!(*state.camera(), base);
    assert_eq!(state.scroll().offset(), 400.0);

    assert!(state.complete_intro());
    assert!(!state.complete_intro());
    // Unlocking alone doesn't replay the stored offset
    assert_eq!(*state.camera(), base);

    assert!(state.on_scroll(400.0));
    assert!((state.camera().position.z - (100.0 - 400.0 * DOLLY_UNITS_PER_PX)).abs() < 1e-4);
    assert!(state.on_scroll(0.0));
    assert!(state.camera().position.abs_diff_eq(base.position, 1e-5));
    assert!(state.camera().rotation.abs_diff_eq(base.rotation, 1e-6));
}

#[test]
fn board_scroll_moves_layer_not_camera() {
    let mut state = SceneState::new(SceneConfig::default());
    state.complete_intro();
    let base = *state.camera();
    state.on_scroll(1200.0);
    assert_eq!(*state.camera(), base);
    assert!((state.layer().translate_y_percent - 12.0).abs() < 1e-4);
}

#[test]
fn resize_updates_aspect_and_returns_surface_size() {
    let mut state = SceneState::new(SceneConfig::default());
    let size = state.on_resize(Viewport::new(1280.0, 720.0, 2.0));
    assert_eq!(size, (2560, 1440));
    assert!((state.projection().aspect - 1280.0 / 720.0).abs() < 1e-6);
    assert!(state.viewport().is_some());
}

#[test]
fn orbit_preset_drags_camera_around_target() {
    let mut state = SceneState::new(SceneConfig::for_preset(ScenePreset::Orbit));
    state.on_resize(Viewport::new(800.0, 600.0, 1.0));
    let before = state.camera().position;
    state.drag_camera(120.0, 0.0);
    for _ in 0..10 {
        state.advance_frame();
    }
    let after = state.camera().position;
    assert!(!after.abs_diff_eq(before, 1e-3));
    assert!((after.length() - before.length()).abs() < 1e-2);
}

#[test]
fn drag_without_controls_is_a_no_op() {
    let mut state = SceneState::new(SceneConfig::default());
    let base = *state.camera();
    state.drag_camera(50.0, 50.0);
    state.advance_frame();
    assert_eq!(*state.camera(), base);
}

#[test]
fn orbit_planet_moves_with_elapsed_time() {
    let mut state = SceneState::new(SceneConfig::for_preset(ScenePreset::Orbit));
    let start = state.models()[0].position;
    assert!(start.abs_diff_eq(Vec3::new(PLANET_ORBIT_RADIUS, 0.0, 0.0), 1e-4));
    for _ in 0..100 {
        state.advance_frame();
    }
    let m = &state.models()[0];
    assert!((m.rotation_y - 100.0 * PLANET_SPIN_PER_FRAME).abs() < 1e-4);
    assert!((m.position.length() - PLANET_ORBIT_RADIUS).abs() < 1e-3);
}

#[test]
fn texture_requests_follow_models() {
    let state = SceneState::new(SceneConfig::for_preset(ScenePreset::Dolly));
    let reqs = state.texture_requests();
    assert_eq!(reqs.len(), 4);
    assert!(reqs[..3].iter().all(|r| r.model == 0));
    assert_eq!(reqs[1].channel, MaterialChannel::Normal);
    assert_eq!(reqs[3].model, 1);
    assert!(SceneState::new(SceneConfig::default())
        .texture_requests()
        .is_empty());
}

#[test]
fn controller_drives_scene_without_a_document() {
    let mut state = SceneState::new(SceneConfig::for_preset(ScenePreset::Dolly));
    let mut ctl = SceneController::with_scene_handlers();
    ctl.dispatch(&SceneEvent::Scroll { offset: 300.0 }, &mut state);
    assert!(!state.scroll().is_unlocked());
    ctl.dispatch(&SceneEvent::IntroComplete, &mut state);
    ctl.dispatch(&SceneEvent::Scroll { offset: 300.0 }, &mut state);
    assert!(state.camera().position.z < 100.0);
    ctl.dispatch(&SceneEvent::Resize(Viewport::new(400.0, 200.0, 1.0)), &mut state);
    assert!((state.projection().aspect - 2.0).abs() < 1e-6);
}

#[test]
fn subscribe_unsubscribe_and_order() {
    let mut state = SceneState::new(SceneConfig::for_preset(ScenePreset::Dolly));
    let mut ctl = SceneController::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let l1 = log.clone();
    let first = ctl.subscribe(EventKind::Scroll, move |_, _| l1.borrow_mut().push(1));
    let l2 = log.clone();
    ctl.subscribe(EventKind::Scroll, move |_, _| l2.borrow_mut().push(2));
    assert_eq!(ctl.subscriber_count(EventKind::Scroll), 2);
    assert_eq!(ctl.subscriber_count(EventKind::Resize), 0);

    assert_eq!(ctl.dispatch(&SceneEvent::Scroll { offset: 1.0 }, &mut state), 2);
    assert_eq!(*log.borrow(), vec![1, 2]);

    assert!(ctl.unsubscribe(first));
    assert!(!ctl.unsubscribe(first));
    ctl.dispatch(&SceneEvent::Scroll { offset: 2.0 }, &mut state);
    assert_eq!(*log.borrow(), vec![1, 2, 2]);

    assert_eq!(ctl.dispatch(&SceneEvent::IntroComplete, &mut state), 0);
    ctl.clear();
    assert_eq!(ctl.dispatch(&SceneEvent::Scroll { offset: 3.0 }, &mut state), 0);
}

#[test]
fn handlers_see_state_after_earlier_handlers() {
    let mut state = SceneState::new(SceneConfig::default());
    let mut ctl = SceneController::with_scene_handlers();
    let seen = Rc::new(RefCell::new(None));
    let seen_in = seen.clone();
    ctl.subscribe(EventKind::Scroll, move |_, s| {
        *seen_in.borrow_mut() = Some(s.layer().translate_y_percent);
    });
    state.complete_intro();
    ctl.dispatch(&SceneEvent::Scroll { offset: 500.0 }, &mut state);
    let v = seen.borrow().expect("handler ran");
    assert!((v - 5.0).abs() < 1e-5);
}

#[test]
fn resize_is_idempotent() {
    let mut state = SceneState::new(SceneConfig::default());
    let v = Viewport::new(1024.0, 768.0, 1.25);
    let a = state.on_resize(v);
    let proj = *state.projection();
    let b = state.on_resize(v);
    assert_eq!(a, b);
    assert_eq!(*state.projection(), proj);
}

#[test]
fn locked_scroll_leaves_layer_alone() {
    let mut state = SceneState::new(SceneConfig::default());
    state.on_scroll(900.0);
    assert_eq!(state.layer().translate_y_percent, 0.0);
}

#[test]
fn sync_intro_opens_gate_for_a_page_that_already_finished() {
    let mut state = SceneState::new(SceneConfig::for_preset(ScenePreset::Dolly));
    assert!(!state.sync_intro(false));
    assert!(!state.on_scroll(200.0));

    assert!(state.sync_intro(true));
    assert!(state.on_scroll(200.0));
    assert!(state.camera().position.z < 100.0);
    // Stays open; a late animationend is harmless
    assert!(state.sync_intro(false));
    assert!(!state.complete_intro());
}

#[test]
fn wheel_zooms_orbit_scene_only() {
    let mut orbit = SceneState::new(SceneConfig::for_preset(ScenePreset::Orbit));
    let before = orbit.controls().expect("controls").spherical().radius;
    orbit.zoom_camera(-100.0);
    orbit.advance_frame();
    assert!(orbit.camera().position.length() < before);

    let mut board = SceneState::new(SceneConfig::default());
    let base = *board.camera();
    board.zoom_camera(-100.0);
    board.advance_frame();
    assert_eq!(*board.camera(), base);
}
