// Texture asset bookkeeping and decoding.
//
// Loading is best-effort: a failed request is logged and the material keeps
// its neutral texel, so the scene renders without the texture.

use thiserror::Error;

use super::model::MaterialChannel;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("fetch {path} failed: {reason}")]
    Fetch { path: String, reason: String },
    #[error("fetch {path} returned HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("unsupported asset format: {0}")]
    Unsupported(String),
    #[error("decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Decoded RGBA8 texture.
#[derive(Clone, Debug)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    pub fn solid(texel: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: texel.to_vec(),
        }
    }
}

/// Only raster formats the decoder was built with are accepted.
pub fn check_format(path: &str) -> Result<(), AssetError> {
    let ext = path
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" | "jpg" | "jpeg" => Ok(()),
        _ => Err(AssetError::Unsupported(path.to_string())),
    }
}

/// Decode PNG/JPEG bytes into RGBA8, downscaling so neither side exceeds
/// `max_dim` (the device's 2D texture limit).
pub fn decode_texture(bytes: &[u8], max_dim: u32) -> Result<TextureData, AssetError> {
    let mut img = image::load_from_memory(bytes)?;
    let max_dim = max_dim.max(1);
    if img.width() > max_dim || img.height() > max_dim {
        img = img.resize(max_dim, max_dim, image::imageops::FilterType::Triangle);
    }
    let rgba = img.to_rgba8();
    Ok(TextureData {
        width: rgba.width(),
        height: rgba.height(),
        rgba: rgba.into_raw(),
    })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetStatus {
    Pending,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AssetRequest {
    pub model: usize,
    pub channel: MaterialChannel,
    pub path: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssetHandle(usize);

#[derive(Debug, Default)]
pub struct AssetTracker {
    entries: Vec<(AssetRequest, AssetStatus)>,
}

impl AssetTracker {
    pub fn request(&mut self, request: AssetRequest) -> AssetHandle {
        self.entries.push((request, AssetStatus::Pending));
        AssetHandle(self.entries.len() - 1)
    }

    pub fn get(&self, handle: AssetHandle) -> Option<&AssetRequest> {
        self.entries.get(handle.0).map(|(r, _)| r)
    }

    pub fn status(&self, handle: AssetHandle) -> Option<AssetStatus> {
        self.entries.get(handle.0).map(|(_, s)| *s)
    }

    pub fn mark_ready(&mut self, handle: AssetHandle) {
        if let Some((req, status)) = self.entries.get_mut(handle.0) {
            *status = AssetStatus::Ready;
            log::info!("[assets] attached {} ({:?})", req.path, req.channel);
        }
    }

    /// Record a failure. The asset simply never appears.
    pub fn mark_failed(&mut self, handle: AssetHandle, err: &AssetError) {
        if let Some((req, status)) = self.entries.get_mut(handle.0) {
            *status = AssetStatus::Failed;
            log::warn!("[assets] {} not loaded: {}", req.path, err);
        }
    }

    pub fn count(&self, status: AssetStatus) -> usize {
        self.entries.iter().filter(|(_, s)| *s == status).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
