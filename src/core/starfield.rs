// Ambient starfield: a fixed batch of point-like stars revolving around the
// vertical axis and twinkling over time.
//
// Kept free of platform APIs so the host test suite can include it directly.

use glam::Vec3;
use rand::Rng;

use super::constants::{STAR_PHASE_OFFSET, TWINKLE_FLOOR, TWINKLE_GAIN, TWINKLE_PHASE_K};

/// Closed sampling interval `[min, max]`.
///
/// Every random star attribute is drawn as `min + u * (max - min)` with
/// `u` uniform in `[0, 1)`. A field of extent `R` centred on the axis is
/// `SampleRange::centered(R)`, i.e. `[-R/2, R/2]`; negative radii simply
/// place the star on the opposite side of the axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleRange {
    pub min: f32,
    pub max: f32,
}

impl SampleRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn centered(extent: f32) -> Self {
        Self::new(-extent * 0.5, extent * 0.5)
    }

    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.min + rng.gen::<f32>() * (self.max - self.min)
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarfieldParams {
    pub count: usize,
    pub radius: SampleRange,
    pub height: SampleRange,
    pub speed_cap: f32,
}

#[derive(Clone, Debug)]
pub struct StarParticle {
    position: Vec3,
    orbital_radius: f32,
    angular_position: f32,
    fixed_height: f32,
    angular_speed: f32,
    brightness: f32,
}

impl StarParticle {
    pub fn new(orbital_radius: f32, theta: f32, fixed_height: f32, angular_speed: f32) -> Self {
        let mut star = Self {
            position: Vec3::ZERO,
            orbital_radius,
            angular_position: theta,
            fixed_height,
            angular_speed,
            brightness: 1.0,
        };
        star.set_angle(theta);
        star
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
    pub fn orbital_radius(&self) -> f32 {
        self.orbital_radius
    }
    pub fn angular_position(&self) -> f32 {
        self.angular_position
    }
    pub fn fixed_height(&self) -> f32 {
        self.fixed_height
    }
    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    #[inline]
    fn set_angle(&mut self, theta: f32) {
        self.angular_position = theta;
        self.position = Vec3::new(
            self.orbital_radius * theta.cos(),
            self.fixed_height,
            self.orbital_radius * theta.sin(),
        );
    }
}

/// Angle of star `index` at `elapsed` time.
#[inline]
pub fn display_angle(elapsed: f32, speed: f32, index: usize) -> f32 {
    elapsed * speed + index as f32 * STAR_PHASE_OFFSET
}

/// Brightness of star `index` at `elapsed` time, always within
/// `[TWINKLE_FLOOR, TWINKLE_FLOOR + TWINKLE_GAIN]`.
#[inline]
pub fn twinkle(elapsed: f32, index: usize) -> f32 {
    (elapsed + index as f32 * TWINKLE_PHASE_K).sin().abs() * TWINKLE_GAIN + TWINKLE_FLOOR
}

pub fn generate<R: Rng + ?Sized>(params: &StarfieldParams, rng: &mut R) -> Vec<StarParticle> {
    let mut stars = Vec::with_capacity(params.count);
    for _ in 0..params.count {
        let radius = params.radius.sample(rng);
        let theta = rng.gen::<f32>() * std::f32::consts::TAU;
        let height = params.height.sample(rng);
        let speed = rng.gen::<f32>() * params.speed_cap;
        stars.push(StarParticle::new(radius, theta, height, speed));
    }
    stars
}

#[derive(Clone, Debug, Default)]
pub struct Starfield {
    stars: Vec<StarParticle>,
}

impl Starfield {
    pub fn generate<R: Rng + ?Sized>(params: &StarfieldParams, rng: &mut R) -> Self {
        Self {
            stars: generate(params, rng),
        }
    }

    /// Move every star to its angle at `elapsed` and refresh its brightness.
    pub fn update(&mut self, elapsed: f32) {
        for (i, star) in self.stars.iter_mut().enumerate() {
            let theta = display_angle(elapsed, star.angular_speed, i);
            star.set_angle(theta);
            star.brightness = twinkle(elapsed, i);
        }
    }

    pub fn stars(&self) -> &[StarParticle] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
