// Shared scene tuning constants used by the web frontend and host tests.

// Scene clock
pub const CLOCK_STEP: f32 = 0.1; // elapsed-time units added per frame

// Starfield motion
pub const STAR_PHASE_OFFSET: f32 = 0.05; // per-index angle offset so stars don't move in lockstep
pub const STAR_SPEED_CAP: f32 = 0.005; // exclusive upper bound for angular speed

// Twinkle: brightness = |sin(t + i * k)| * gain + floor
pub const TWINKLE_PHASE_K: f32 = 0.1;
pub const TWINKLE_GAIN: f32 = 1.2;
pub const TWINKLE_FLOOR: f32 = 0.3;

// Default field extents (a field of "radius" R spans [-R/2, R/2])
pub const STAR_FIELD_RADIUS: f32 = 700.0;
pub const STAR_COUNT_BOARD: usize = 8000;
pub const STAR_COUNT_ORBIT: usize = 5000;
pub const STAR_COUNT_DOLLY: usize = 500;

// Star billboard sizing
pub const STAR_RADIUS_BOARD: f32 = 0.1; // world units
pub const STAR_RADIUS_ORBIT: f32 = 0.2;
pub const STAR_MIN_RADIUS_PX: f32 = 0.75; // keeps far stars from vanishing between pixels

// Perspective projection
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Orbit controls
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-6;
pub const ORBIT_ZOOM_STEP: f32 = 0.95; // radius factor per wheel notch towards the target
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 15.0; // stays outside the largest planet
pub const ORBIT_MAX_DISTANCE: f32 = 600.0; // keeps the field inside the far plane

// Planets
pub const PLANET_SPIN_PER_FRAME: f32 = 0.002; // radians
pub const PLANET_ORBIT_RADIUS: f32 = 50.0;
pub const PLANET_ORBIT_RATE: f32 = 0.002; // radians per elapsed-time unit
pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;

// Lighting
pub const POINT_LIGHT_POSITION: [f32; 3] = [50.0, 50.0, 50.0];
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_RANGE: f32 = 500.0;

// Scroll mapping rates
pub const LAYER_PERCENT_PER_PX: f32 = 0.01;
pub const DOLLY_UNITS_PER_PX: f32 = 0.05;
pub const YAW_RADIANS_PER_PX: f32 = 0.0005;

// Seed used when the page does not supply one
pub const DEFAULT_STAR_SEED: u64 = 0x5EED_57A2;
