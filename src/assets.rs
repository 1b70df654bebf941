use crate::core::{check_format, decode_texture, AssetError, AssetRequest, SceneState, TextureData};
use crate::frame::SharedGpu;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Fetch every model texture in the background and attach each one as it
/// arrives. Failures are logged and leave the neutral material in place.
pub fn load_scene_textures(scene: Rc<RefCell<SceneState>>, gpu: SharedGpu) {
    let requests = scene.borrow().texture_requests();
    for request in requests {
        let handle = scene.borrow_mut().assets.request(request.clone());
        if let Err(e) = check_format(&request.path) {
            scene.borrow_mut().assets.mark_failed(handle, &e);
            continue;
        }
        let scene = scene.clone();
        let gpu = gpu.clone();
        spawn_local(async move {
            let max_dim = gpu
                .borrow()
                .as_ref()
                .map(|g| g.max_texture_dim())
                .unwrap_or(wgpu::Limits::default().max_texture_dimension_2d);
            match fetch_texture(&request, max_dim).await {
                Ok(data) => {
                    if let Some(g) = gpu.borrow_mut().as_mut() {
                        g.set_texture(request.model, request.channel, &data);
                    }
                    scene.borrow_mut().assets.mark_ready(handle);
                }
                Err(e) => scene.borrow_mut().assets.mark_failed(handle, &e),
            }
        });
    }
}

async fn fetch_texture(request: &AssetRequest, max_dim: u32) -> Result<TextureData, AssetError> {
    let bytes = fetch_bytes(&request.path).await?;
    decode_texture(&bytes, max_dim)
}

async fn fetch_bytes(path: &str) -> Result<Vec<u8>, AssetError> {
    let fetch_err = |e: wasm_bindgen::JsValue| AssetError::Fetch {
        path: path.to_string(),
        reason: format!("{:?}", e),
    };
    let window = web::window().ok_or_else(|| AssetError::Fetch {
        path: path.to_string(),
        reason: "no window".to_string(),
    })?;
    let resp = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(fetch_err)?;
    let resp: web::Response = resp.dyn_into().map_err(fetch_err)?;
    if !resp.ok() {
        return Err(AssetError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(fetch_err)?)
        .await
        .map_err(fetch_err)?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}
