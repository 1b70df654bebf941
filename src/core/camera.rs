// Camera pose, perspective projection and viewport sizing.
//
// These types avoid referencing platform APIs; the web frontend consumes
// them to build the per-frame view/projection uniforms.

use glam::{Mat4, Quat, Vec3};

use super::constants::{CAMERA_FAR, CAMERA_FOVY_DEG, CAMERA_NEAR};

/// Rigid camera transform. With an identity rotation the camera looks down -Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CameraPose {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Pose at `eye` oriented towards `target` with +Y up.
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        if (target - eye).length_squared() < f32::EPSILON {
            return Self::at(eye);
        }
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        Self {
            position: eye,
            rotation: Quat::from_mat4(&view.inverse()).normalize(),
        }
    }

    /// World-to-view transform.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }
}

/// CSS-pixel viewport plus device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub pixel_ratio: f32,
}

impl Viewport {
    pub fn new(css_width: f32, css_height: f32, pixel_ratio: f32) -> Self {
        Self {
            css_width,
            css_height,
            pixel_ratio,
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.css_width.max(1.0) / self.css_height.max(1.0)
    }

    /// Backing-store size in physical pixels, never zero.
    pub fn surface_size(&self) -> (u32, u32) {
        let dpr = if self.pixel_ratio > 0.0 { self.pixel_ratio } else { 1.0 };
        let w = (self.css_width * dpr).round().max(1.0) as u32;
        let h = (self.css_height * dpr).round().max(1.0) as u32;
        (w, h)
    }
}

/// Right-handed perspective projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub fovy_deg: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            fovy_deg: CAMERA_FOVY_DEG,
            aspect: 1.0,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Projection {
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_deg.to_radians(), self.aspect, self.znear, self.zfar)
    }

    pub fn resize(&mut self, viewport: &Viewport) {
        self.aspect = viewport.aspect();
    }

    /// Pixels covered by one world unit at view depth 1 on a surface
    /// `surface_height` pixels tall.
    pub fn focal_length_px(&self, surface_height: f32) -> f32 {
        0.5 * surface_height / (self.fovy_deg.to_radians() * 0.5).tan()
    }
}
