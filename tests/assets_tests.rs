// Host-side tests for texture decoding and asset bookkeeping.

#![allow(dead_code)]
mod model {
    include!("../src/core/model.rs");
}
mod assets {
    include!("../src/core/assets.rs");
}
mod mesh {
    include!("../src/core/mesh.rs");
}

use assets::*;
use model::MaterialChannel;
use std::io::Cursor;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(w, h, |x, y| image::Rgba([x as u8, y as u8, 7, 255]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}

fn request(path: &str) -> AssetRequest {
    AssetRequest {
        model: 0,
        channel: MaterialChannel::Color,
        path: path.to_string(),
    }
}

#[test]
fn check_format_accepts_raster_images_only() {
    assert!(check_format("assets/earth/earth_color_8k.jpg").is_ok());
    assert!(check_format("a/b.JPEG").is_ok());
    assert!(check_format("x.png").is_ok());
    assert!(matches!(
        check_format("models/planet.fbx"),
        Err(AssetError::Unsupported(_))
    ));
    assert!(check_format("no_extension").is_err());
}

#[test]
fn decode_png_to_rgba() {
    let tex = decode_texture(&png_bytes(4, 2), 4096).expect("decode");
    assert_eq!((tex.width, tex.height), (4, 2));
    assert_eq!(tex.rgba.len(), 4 * 2 * 4);
    // pixel (3, 1)
    let i = (1 * 4 + 3) * 4;
    assert_eq!(&tex.rgba[i..i + 4], &[3, 1, 7, 255]);
}

#[test]
fn decode_downscales_to_device_limit() {
    let tex = decode_texture(&png_bytes(64, 16), 32).expect("decode");
    assert!(tex.width <= 32 && tex.height <= 32);
    assert_eq!(tex.width, 32);
    assert_eq!(tex.rgba.len() as u32, tex.width * tex.height * 4);
}

#[test]
fn junk_bytes_fail_to_decode() {
    let err = decode_texture(b"definitely not an image", 1024).unwrap_err();
    assert!(matches!(err, AssetError::Decode(_)));
}

#[test]
fn solid_texture_is_one_texel() {
    let t = TextureData::solid([1, 2, 3, 4]);
    assert_eq!((t.width, t.height), (1, 1));
    assert_eq!(t.rgba, vec![1, 2, 3, 4]);
}

#[test]
fn tracker_counts_by_status() {
    let mut tracker = AssetTracker::default();
    assert!(tracker.is_empty());
    let a = tracker.request(request("a.png"));
    let b = tracker.request(request("b.jpg"));
    assert_eq!(tracker.count(AssetStatus::Pending), 2);
    tracker.mark_ready(a);
    tracker.mark_failed(
        b,
        &AssetError::Status {
            path: "b.jpg".into(),
            status: 404,
        },
    );
    assert_eq!(tracker.status(a), Some(AssetStatus::Ready));
    assert_eq!(tracker.status(b), Some(AssetStatus::Failed));
    assert_eq!(tracker.count(AssetStatus::Pending), 0);
    assert_eq!(tracker.get(b).map(|r| r.path.as_str()), Some("b.jpg"));
    assert_eq!(tracker.len(), 2);
}

#[test]
fn error_messages_name_the_asset() {
    let e = AssetError::Status {
        path: "p.png".into(),
        status: 500,
    };
    assert_eq!(e.to_string(), "fetch p.png returned HTTP 500");
}

#[test]
fn north_pole_samples_top_image_row() {
    // Red top row, blue bottom row
    let img = image::RgbaImage::from_fn(1, 2, |_, y| {
        if y == 0 {
            image::Rgba([255, 0, 0, 255])
        } else {
            image::Rgba([0, 0, 255, 255])
        }
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    let tex = decode_texture(&out.into_inner(), 64).expect("decode");

    let sphere = mesh::uv_sphere(1.0, 8, 6);
    let sample_row = |v: f32| ((v * tex.height as f32) as u32).min(tex.height - 1) as usize;
    let texel = |row: usize| &tex.rgba[row * 4 * tex.width as usize..][..4];

    let north = sphere
        .vertices
        .iter()
        .find(|v| (v.position[1] - 1.0).abs() < 1e-6)
        .expect("north pole");
    assert_eq!(texel(sample_row(north.uv[1])), &[255, 0, 0, 255]);

    let south = sphere.vertices.last().expect("south pole");
    assert!(south.position[1] < -0.99);
    assert_eq!(texel(sample_row(south.uv[1])), &[0, 0, 255, 255]);
}
