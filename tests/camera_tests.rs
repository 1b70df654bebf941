// Host-side tests for camera pose, projection and viewport sizing.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod camera {
    include!("../src/core/camera.rs");
}

use camera::*;
use glam::{Vec3, Vec4Swizzles};

#[test]
fn default_projection_matches_scene_constants() {
    let p = Projection::default();
    assert_eq!(p.fovy_deg, 75.0);
    assert_eq!(p.znear, 0.1);
    assert_eq!(p.zfar, 1000.0);
}

#[test]
fn resize_sets_aspect_from_css_size() {
    let mut p = Projection::default();
    p.resize(&Viewport::new(1600.0, 900.0, 2.0));
    assert!((p.aspect - 16.0 / 9.0).abs() < 1e-6);
}

#[test]
fn zero_height_viewport_keeps_aspect_finite() {
    let v = Viewport::new(800.0, 0.0, 1.0);
    assert!(v.aspect().is_finite());
    assert!(v.aspect() > 0.0);
    assert_eq!(v.surface_size(), (800, 1));
}

#[test]
fn surface_size_scales_by_pixel_ratio() {
    assert_eq!(Viewport::new(640.0, 480.0, 1.5).surface_size(), (960, 720));
    // Non-positive ratios fall back to 1
    assert_eq!(Viewport::new(640.0, 480.0, 0.0).surface_size(), (640, 480));
}

#[test]
fn identity_pose_looks_down_negative_z() {
    let pose = CameraPose::at(Vec3::new(0.0, 0.0, 100.0));
    assert!(pose.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    let view = pose.view_matrix();
    let origin_in_view = view * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(origin_in_view.xyz().abs_diff_eq(Vec3::new(0.0, 0.0, -100.0), 1e-4));
}

#[test]
fn looking_at_faces_target() {
    let eye = Vec3::new(0.0, 50.0, 150.0);
    let pose = CameraPose::looking_at(eye, Vec3::ZERO);
    let dir = (Vec3::ZERO - eye).normalize();
    assert!(pose.forward().abs_diff_eq(dir, 1e-4));
    assert!(pose.up().y > 0.0);
    assert!(pose.right().y.abs() < 1e-4);
}

#[test]
fn looking_at_own_position_is_identity() {
    let pose = CameraPose::looking_at(Vec3::ONE, Vec3::ONE);
    assert_eq!(pose.rotation, glam::Quat::IDENTITY);
}

#[test]
fn focal_length_matches_fov() {
    let p = Projection {
        fovy_deg: 90.0,
        ..Projection::default()
    };
    assert!((p.focal_length_px(600.0) - 300.0).abs() < 1e-3);
}
