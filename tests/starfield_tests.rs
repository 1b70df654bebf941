// Host-side tests for starfield generation and the per-frame star update.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod starfield {
    include!("../src/core/starfield.rs");
}

use constants::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use starfield::*;

fn dolly_params(count: usize) -> StarfieldParams {
    StarfieldParams {
        count,
        radius: SampleRange::new(50.0, 250.0),
        height: SampleRange::new(-50.0, 50.0),
        speed_cap: STAR_SPEED_CAP,
    }
}

#[test]
fn generate_respects_count_and_ranges() {
    let params = dolly_params(500);
    let mut rng = StdRng::seed_from_u64(7);
    let stars = generate(&params, &mut rng);
    assert_eq!(stars.len(), 500);
    for s in &stars {
        assert!(
            (50.0..=250.0).contains(&s.orbital_radius()),
            "radius {} out of range",
            s.orbital_radius()
        );
        assert!((-50.0..=50.0).contains(&s.fixed_height()));
        assert!((-50.0..=50.0).contains(&s.position().y));
        assert!(s.angular_speed() >= 0.0 && s.angular_speed() < STAR_SPEED_CAP);
        assert!(s.angular_position() >= 0.0 && s.angular_position() <= std::f32::consts::TAU);
    }
}

#[test]
fn generate_zero_count_is_empty() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = Starfield::generate(&dolly_params(0), &mut rng);
    assert!(field.is_empty());
    assert_eq!(field.len(), 0);
}

#[test]
fn same_seed_same_field() {
    let params = dolly_params(64);
    let a = generate(&params, &mut StdRng::seed_from_u64(99));
    let b = generate(&params, &mut StdRng::seed_from_u64(99));
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.position(), y.position());
        assert_eq!(x.angular_speed(), y.angular_speed());
    }
    let c = generate(&params, &mut StdRng::seed_from_u64(100));
    assert!(a.iter().zip(&c).any(|(x, y)| x.position() != y.position()));
}

#[test]
fn centered_range_spans_half_extent_each_side() {
    let r = SampleRange::centered(STAR_FIELD_RADIUS);
    assert_eq!(r.min, -350.0);
    assert_eq!(r.max, 350.0);
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..1000 {
        assert!(r.contains(r.sample(&mut rng)));
    }
}

#[test]
fn new_star_sits_on_its_circle_at_full_brightness() {
    let s = StarParticle::new(10.0, std::f32::consts::FRAC_PI_2, 4.0, 0.001);
    let p = s.position();
    assert!(p.x.abs() < 1e-5);
    assert_eq!(p.y, 4.0);
    assert!((p.z - 10.0).abs() < 1e-5);
    assert_eq!(s.brightness(), 1.0);
}

#[test]
fn negative_radius_mirrors_across_axis() {
    let s = StarParticle::new(-10.0, 0.0, 0.0, 0.0);
    assert!((s.position().x + 10.0).abs() < 1e-6);
}

#[test]
fn display_angle_and_twinkle_worked_values() {
    // elapsed 0.1, speed 0.003, index 2
    let a = display_angle(0.1, 0.003, 2);
    assert!((a - 0.1003).abs() < 1e-6);
    let b = twinkle(0.1, 2);
    let expected = 0.3f32.sin() * TWINKLE_GAIN + TWINKLE_FLOOR;
    assert!((b - expected).abs() < 1e-6);
}

#[test]
fn twinkle_stays_within_floor_and_peak() {
    let lo = TWINKLE_FLOOR;
    let hi = TWINKLE_FLOOR + TWINKLE_GAIN;
    for step in 0..2000 {
        let t = step as f32 * CLOCK_STEP;
        for i in [0usize, 1, 17, 499, 7999] {
            let b = twinkle(t, i);
            assert!(b >= lo - 1e-6 && b <= hi + 1e-6, "brightness {b} at t={t} i={i}");
        }
    }
}

#[test]
fn update_places_each_star_at_its_display_angle() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = Starfield::generate(&dolly_params(32), &mut rng);
    let before: Vec<_> = field.stars().iter().map(|s| s.orbital_radius()).collect();
    field.update(2.5);
    for (i, s) in field.stars().iter().enumerate() {
        let theta = display_angle(2.5, s.angular_speed(), i);
        assert!((s.angular_position() - theta).abs() < 1e-6);
        let r = before[i];
        assert!((s.position().x - r * theta.cos()).abs() < 1e-3);
        assert!((s.position().z - r * theta.sin()).abs() < 1e-3);
        assert_eq!(s.position().y, s.fixed_height());
        assert!((s.brightness() - twinkle(2.5, i)).abs() < 1e-6);
        assert_eq!(s.orbital_radius(), r);
    }
}

#[test]
fn update_depends_only_on_elapsed() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut a = Starfield::generate(&dolly_params(16), &mut rng);
    let mut b = a.clone();
    a.update(1.0);
    a.update(3.0);
    b.update(3.0);
    for (x, y) in a.stars().iter().zip(b.stars()) {
        assert_eq!(x.position(), y.position());
        assert_eq!(x.brightness(), y.brightness());
    }
}
