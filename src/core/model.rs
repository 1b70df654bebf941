// Planet models placed in the scene.

use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

/// Material slot a loaded texture is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialChannel {
    Color,
    Normal,
    Roughness,
    Metallic,
}

impl MaterialChannel {
    pub const ALL: [MaterialChannel; 4] = [
        MaterialChannel::Color,
        MaterialChannel::Normal,
        MaterialChannel::Roughness,
        MaterialChannel::Metallic,
    ];

    /// Slot index used by the renderer's material bind group.
    pub fn slot(self) -> usize {
        match self {
            MaterialChannel::Color => 0,
            MaterialChannel::Normal => 1,
            MaterialChannel::Roughness => 2,
            MaterialChannel::Metallic => 3,
        }
    }

    /// RGBA texel used until (or unless) a texture is loaded.
    pub fn neutral_texel(self) -> [u8; 4] {
        match self {
            MaterialChannel::Color => [255, 255, 255, 255],
            MaterialChannel::Normal => [128, 128, 255, 255],
            MaterialChannel::Roughness => [255, 255, 255, 255],
            MaterialChannel::Metallic => [0, 0, 0, 255],
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextureMap {
    pub channel: MaterialChannel,
    pub path: String,
}

/// Circular orbit in the XZ plane around the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Orbit {
    pub radius: f32,
    /// Radians per elapsed-time unit.
    pub angular_rate: f32,
}

impl Orbit {
    #[inline]
    pub fn position_at(&self, elapsed: f32, height: f32) -> Vec3 {
        let a = elapsed * self.angular_rate;
        Vec3::new(self.radius * a.cos(), height, self.radius * a.sin())
    }
}

#[derive(Clone, Debug)]
pub struct ModelDesc {
    pub name: &'static str,
    pub radius: f32,
    pub position: Vec3,
    pub spin_per_frame: f32,
    pub orbit: Option<Orbit>,
    pub textures: SmallVec<[TextureMap; 4]>,
}

#[derive(Clone, Debug)]
pub struct SceneModel {
    pub desc: ModelDesc,
    pub position: Vec3,
    pub rotation_y: f32,
}

impl SceneModel {
    pub fn new(desc: ModelDesc) -> Self {
        let position = match desc.orbit {
            Some(orbit) => orbit.position_at(0.0, desc.position.y),
            None => desc.position,
        };
        Self {
            desc,
            position,
            rotation_y: 0.0,
        }
    }

    /// Advance spin by one frame and place the model on its orbit.
    pub fn update(&mut self, elapsed: f32) {
        self.rotation_y += self.desc.spin_per_frame;
        if let Some(orbit) = self.desc.orbit {
            self.position = orbit.position_at(elapsed, self.desc.position.y);
        }
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.rotation_y), self.position)
    }
}
