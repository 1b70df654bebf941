// Intro gate and scroll-to-scene mappings.
//
// Scroll effects stay locked until the page's intro animation reports
// completion. Once unlocked, every mapping is a pure function of the
// current offset relative to the scene's base pose, so scrolling back
// restores the earlier pose exactly.

use glam::{Quat, Vec3};

use super::camera::CameraPose;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IntroGate {
    #[default]
    Locked,
    Unlocked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    gate: IntroGate,
}

impl ScrollState {
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn gate(&self) -> IntroGate {
        self.gate
    }

    pub fn is_unlocked(&self) -> bool {
        self.gate == IntroGate::Unlocked
    }

    /// Record the latest offset. Returns whether scroll effects may run.
    pub fn record(&mut self, offset: f32) -> bool {
        self.offset = offset;
        self.is_unlocked()
    }

    /// Returns true only for the Locked -> Unlocked transition.
    pub fn unlock(&mut self) -> bool {
        let was_locked = self.gate == IntroGate::Locked;
        self.gate = IntroGate::Unlocked;
        was_locked
    }
}

/// Whether an element's animations, given by their `playState`s, have all
/// run out. No animations at all counts as finished.
pub fn animations_finished<'a>(play_states: impl IntoIterator<Item = &'a str>) -> bool {
    play_states.into_iter().all(|s| s == "finished")
}

/// Vertical translation of the page's content layer, in percent of its height.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LayerTransform {
    pub translate_y_percent: f32,
}

impl LayerTransform {
    pub fn css(&self) -> String {
        format!("translateY({}%)", self.translate_y_percent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMapping {
    /// Pull the camera along -Z as the page scrolls down.
    CameraDolly { units_per_px: f32 },
    /// Turn the camera in place around the world Y axis.
    CameraYaw { radians_per_px: f32 },
    /// Slide the content layer down.
    LayerTranslate { percent_per_px: f32 },
}

/// Scene outputs driven by scroll. `None` means no mapping targets that output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollPose {
    pub camera: Option<CameraPose>,
    pub layer: Option<LayerTransform>,
}

/// Apply `mappings` in order to the base pose for `offset`.
pub fn map_scroll(mappings: &[ScrollMapping], base: &CameraPose, offset: f32) -> ScrollPose {
    let mut pose = ScrollPose::default();
    for mapping in mappings {
        match *mapping {
            ScrollMapping::CameraDolly { units_per_px } => {
                let camera = pose.camera.get_or_insert(*base);
                camera.position += Vec3::new(0.0, 0.0, -offset * units_per_px);
            }
            ScrollMapping::CameraYaw { radians_per_px } => {
                let camera = pose.camera.get_or_insert(*base);
                camera.rotation = (Quat::from_rotation_y(offset * radians_per_px) * camera.rotation)
                    .normalize();
            }
            ScrollMapping::LayerTranslate { percent_per_px } => {
                pose.layer = Some(LayerTransform {
                    translate_y_percent: offset * percent_per_px,
                });
            }
        }
    }
    pose
}
