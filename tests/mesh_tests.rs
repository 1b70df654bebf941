// Host-side tests for planet sphere geometry.

#![allow(dead_code)]
mod mesh {
    include!("../src/core/mesh.rs");
}

use mesh::*;

#[test]
fn sphere_vertex_and_triangle_counts() {
    let m = uv_sphere(1.0, 32, 32);
    assert_eq!(m.vertices.len(), 33 * 33);
    // Each pole row loses one triangle per column
    assert_eq!(m.triangle_count(), 2 * 32 * 31);
    assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
}

#[test]
fn vertices_lie_on_the_radius_with_unit_normals() {
    let r = 10.0;
    let m = uv_sphere(r, 16, 12);
    for v in &m.vertices {
        let p = glam::Vec3::from_array(v.position);
        let n = glam::Vec3::from_array(v.normal);
        assert!((p.length() - r).abs() < 1e-4);
        assert!((n.length() - 1.0).abs() < 1e-5);
        assert!(p.abs_diff_eq(n * r, 1e-4));
        assert!((0.0..=1.0).contains(&v.uv[0]) && (0.0..=1.0).contains(&v.uv[1]));
    }
}

#[test]
fn poles_are_at_plus_and_minus_y() {
    let m = uv_sphere(2.0, 8, 6);
    assert!((m.vertices[0].position[1] - 2.0).abs() < 1e-6);
    assert_eq!(m.vertices[0].uv[1], 0.0);
    let last = m.vertices.last().expect("vertices");
    assert!((last.position[1] + 2.0).abs() < 1e-5);
    assert_eq!(last.uv[1], 1.0);
}

#[test]
fn degenerate_segment_counts_are_raised() {
    let m = uv_sphere(1.0, 0, 0);
    assert_eq!(m.vertices.len(), 4 * 3);
    assert_eq!(m.triangle_count(), 2 * 3 * 1);
}
