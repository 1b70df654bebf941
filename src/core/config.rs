// Scene presets. Each preset reproduces one page variant by constants only.

use glam::Vec3;
use smallvec::{smallvec, SmallVec};

use super::camera::{CameraPose, Projection};
use super::constants::*;
use super::model::{MaterialChannel, ModelDesc, Orbit, TextureMap};
use super::scroll::ScrollMapping;
use super::starfield::{SampleRange, StarfieldParams};

pub const EARTH_COLOR_MAP: &str = "assets/earth/earth_color_8k.jpg";
pub const ROCKY_COLOR_MAP: &str = "assets/planets/rocky_color.jpg";
pub const ROCKY_NORMAL_MAP: &str = "assets/planets/rocky_normal.png";
pub const ROCKY_ROUGHNESS_MAP: &str = "assets/planets/rocky_roughness.png";
pub const GAS_COLOR_MAP: &str = "assets/planets/gas_color.jpg";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScenePreset {
    /// Starfield behind a content board that slides with scroll.
    #[default]
    Board,
    /// Textured Earth orbiting the origin, camera under pointer control.
    Orbit,
    /// Compact starfield with planets; scroll dollies and turns the camera.
    Dolly,
}

impl ScenePreset {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "board" => Some(Self::Board),
            "orbit" => Some(Self::Orbit),
            "dolly" => Some(Self::Dolly),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Orbit => "orbit",
            Self::Dolly => "dolly",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    pub ambient: f32,
    pub point_position: Vec3,
    pub point_intensity: f32,
    pub point_range: f32,
}

impl Lighting {
    fn with_ambient(ambient: f32) -> Self {
        Self {
            ambient,
            point_position: Vec3::from_array(POINT_LIGHT_POSITION),
            point_intensity: POINT_LIGHT_INTENSITY,
            point_range: POINT_LIGHT_RANGE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub preset: ScenePreset,
    pub seed: u64,
    pub starfield: StarfieldParams,
    pub star_radius: f32,
    pub camera: CameraPose,
    pub projection: Projection,
    pub orbit_controls: bool,
    pub scroll_mappings: SmallVec<[ScrollMapping; 2]>,
    pub models: Vec<ModelDesc>,
    pub lighting: Lighting,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_preset(ScenePreset::default())
    }
}

impl SceneConfig {
    pub fn for_preset(preset: ScenePreset) -> Self {
        match preset {
            ScenePreset::Board => Self::board(),
            ScenePreset::Orbit => Self::orbit(),
            ScenePreset::Dolly => Self::dolly(),
        }
    }

    /// Build from the canvas' `data-scene` / `data-seed` values. Unknown or
    /// missing preset names fall back to the board scene.
    pub fn from_attrs(scene: Option<&str>, seed: Option<&str>) -> Self {
        let preset = match scene {
            Some(name) => ScenePreset::from_name(name).unwrap_or_else(|| {
                log::warn!("[config] unknown scene {:?}, using board", name);
                ScenePreset::Board
            }),
            None => ScenePreset::Board,
        };
        let mut config = Self::for_preset(preset);
        if let Some(raw) = seed {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = seed,
                Err(_) => log::warn!("[config] ignoring bad seed {:?}", raw),
            }
        }
        config
    }

    fn board() -> Self {
        Self {
            preset: ScenePreset::Board,
            seed: DEFAULT_STAR_SEED,
            starfield: StarfieldParams {
                count: STAR_COUNT_BOARD,
                radius: SampleRange::centered(STAR_FIELD_RADIUS),
                height: SampleRange::centered(STAR_FIELD_RADIUS),
                speed_cap: STAR_SPEED_CAP,
            },
            star_radius: STAR_RADIUS_BOARD,
            camera: CameraPose::at(Vec3::new(0.0, 0.0, 100.0)),
            projection: Projection::default(),
            orbit_controls: false,
            scroll_mappings: smallvec![ScrollMapping::LayerTranslate {
                percent_per_px: LAYER_PERCENT_PER_PX,
            }],
            models: Vec::new(),
            lighting: Lighting::with_ambient(0.5),
        }
    }

    fn orbit() -> Self {
        let earth = ModelDesc {
            name: "earth",
            radius: 10.0,
            position: Vec3::ZERO,
            spin_per_frame: PLANET_SPIN_PER_FRAME,
            orbit: Some(Orbit {
                radius: PLANET_ORBIT_RADIUS,
                angular_rate: PLANET_ORBIT_RATE,
            }),
            textures: smallvec![TextureMap {
                channel: MaterialChannel::Color,
                path: EARTH_COLOR_MAP.to_string(),
            }],
        };
        Self {
            preset: ScenePreset::Orbit,
            seed: DEFAULT_STAR_SEED,
            starfield: StarfieldParams {
                count: STAR_COUNT_ORBIT,
                radius: SampleRange::centered(STAR_FIELD_RADIUS),
                height: SampleRange::centered(STAR_FIELD_RADIUS),
                speed_cap: STAR_SPEED_CAP,
            },
            star_radius: STAR_RADIUS_ORBIT,
            camera: CameraPose::looking_at(Vec3::new(0.0, 50.0, 150.0), Vec3::ZERO),
            projection: Projection::default(),
            orbit_controls: true,
            scroll_mappings: SmallVec::new(),
            models: vec![earth],
            lighting: Lighting::with_ambient(0.7),
        }
    }

    fn dolly() -> Self {
        let rocky = ModelDesc {
            name: "rocky",
            radius: 6.0,
            position: Vec3::new(-18.0, 4.0, 20.0),
            spin_per_frame: PLANET_SPIN_PER_FRAME,
            orbit: None,
            textures: smallvec![
                TextureMap {
                    channel: MaterialChannel::Color,
                    path: ROCKY_COLOR_MAP.to_string(),
                },
                TextureMap {
                    channel: MaterialChannel::Normal,
                    path: ROCKY_NORMAL_MAP.to_string(),
                },
                TextureMap {
                    channel: MaterialChannel::Roughness,
                    path: ROCKY_ROUGHNESS_MAP.to_string(),
                },
            ],
        };
        let gas = ModelDesc {
            name: "gas",
            radius: 14.0,
            position: Vec3::new(26.0, -6.0, -40.0),
            spin_per_frame: PLANET_SPIN_PER_FRAME * 0.5,
            orbit: None,
            textures: smallvec![TextureMap {
                channel: MaterialChannel::Color,
                path: GAS_COLOR_MAP.to_string(),
            }],
        };
        Self {
            preset: ScenePreset::Dolly,
            seed: DEFAULT_STAR_SEED,
            starfield: StarfieldParams {
                count: STAR_COUNT_DOLLY,
                radius: SampleRange::new(50.0, 250.0),
                height: SampleRange::new(-50.0, 50.0),
                speed_cap: STAR_SPEED_CAP,
            },
            star_radius: STAR_RADIUS_ORBIT,
            camera: CameraPose::at(Vec3::new(0.0, 0.0, 100.0)),
            projection: Projection::default(),
            orbit_controls: false,
            scroll_mappings: smallvec![
                ScrollMapping::CameraDolly {
                    units_per_px: DOLLY_UNITS_PER_PX,
                },
                ScrollMapping::CameraYaw {
                    radians_per_px: YAW_RADIANS_PER_PX,
                },
            ],
            models: vec![rocky, gas],
            lighting: Lighting::with_ambient(0.5),
        }
    }
}
