// Damped orbit camera: pointer drags queue rotation which is bled into the
// spherical coordinates a little every frame.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

use super::camera::CameraPose;
use super::constants::{
    ORBIT_DAMPING_FACTOR, ORBIT_MAX_DISTANCE, ORBIT_MIN_DISTANCE, ORBIT_POLAR_EPSILON,
    ORBIT_ROTATE_SPEED, ORBIT_ZOOM_SPEED, ORBIT_ZOOM_STEP,
};

/// Spherical coordinates around a target, Y up.
///
/// `theta` is the azimuth measured from +Z towards +X, `phi` the polar angle
/// from +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,
}

impl Spherical {
    pub fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius <= f32::EPSILON {
            return Self {
                radius: 0.0,
                theta: 0.0,
                phi: 0.0,
            };
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_offset(&self) -> Vec3 {
        let sin_phi_r = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_r * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_r * self.theta.cos(),
        )
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    target: Vec3,
    spherical: Spherical,
    delta_theta: f32,
    delta_phi: f32,
    zoom_scale: f32,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitControls {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        let mut spherical = Spherical::from_offset(eye - target);
        spherical.phi = clamp_polar(spherical.phi);
        Self {
            target,
            spherical,
            delta_theta: 0.0,
            delta_phi: 0.0,
            zoom_scale: 1.0,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            zoom_speed: ORBIT_ZOOM_SPEED,
            min_distance: ORBIT_MIN_DISTANCE,
            max_distance: ORBIT_MAX_DISTANCE,
        }
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    pub fn spherical(&self) -> Spherical {
        self.spherical
    }

    /// Queue rotation for a pointer drag of `(dx, dy)` pixels on a surface
    /// `viewport_height` pixels tall. A full-height drag turns one revolution.
    pub fn rotate_by_pixels(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        self.delta_theta -= TAU * dx / h * self.rotate_speed;
        self.delta_phi -= TAU * dy / h * self.rotate_speed;
    }

    /// Queue a zoom for one wheel event. Negative `delta_y` (wheel away from
    /// the user) moves towards the target.
    pub fn zoom_by_wheel(&mut self, delta_y: f32) {
        let step = ORBIT_ZOOM_STEP.powf(self.zoom_speed);
        if delta_y < 0.0 {
            self.zoom_scale *= step;
        } else if delta_y > 0.0 {
            self.zoom_scale /= step;
        }
    }

    /// Whether queued rotation or zoom is still being applied.
    pub fn is_settling(&self) -> bool {
        self.delta_theta.abs() > 1e-6
            || self.delta_phi.abs() > 1e-6
            || (self.zoom_scale - 1.0).abs() > 1e-6
    }

    /// Apply one frame of damped rotation and return the camera pose.
    pub fn update(&mut self) -> CameraPose {
        let d = self.damping_factor.clamp(0.0, 1.0);
        self.spherical.theta += self.delta_theta * d;
        self.spherical.phi = clamp_polar(self.spherical.phi + self.delta_phi * d);
        self.delta_theta *= 1.0 - d;
        self.delta_phi *= 1.0 - d;
        // Zoom lands in one frame; only a zoom is held to the distance limits
        if self.zoom_scale != 1.0 {
            let lo = self.min_distance.min(self.max_distance);
            self.spherical.radius =
                (self.spherical.radius * self.zoom_scale).clamp(lo, self.max_distance);
            self.zoom_scale = 1.0;
        }
        self.pose()
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose::looking_at(self.target + self.spherical.to_offset(), self.target)
    }
}

#[inline]
fn clamp_polar(phi: f32) -> f32 {
    phi.clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON)
}

/// Pointer drag bookkeeping for the controls.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    pub last: [f32; 2],
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, at: [f32; 2]) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.last = at;
    }

    /// Movement since the last call for the dragging pointer.
    pub fn advance(&mut self, pointer_id: i32, at: [f32; 2]) -> Option<[f32; 2]> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        let delta = [at[0] - self.last[0], at[1] - self.last[1]];
        self.last = at;
        Some(delta)
    }

    pub fn end(&mut self, pointer_id: i32) {
        if pointer_id == self.pointer_id {
            self.active = false;
        }
    }
}
