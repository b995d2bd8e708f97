//! Primitive shape generators
//!
//! Spheres and rings are built on the lathe; the unit cube is assembled
//! directly from six transformed quads. All of them emit the same
//! [`SurfaceGeometry`] triangle contract as the revolution tessellator.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use crate::{lathe, mat4, SurfaceGeometry, Vec3};

const SURFACE_COLOR: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// Semicircular profile from the top pole to the bottom pole, sampled at
/// `pi / stacks` steps. The float loop may stop short of pi, so the
/// bottom pole is always emitted explicitly, pinned exactly on the axis.
fn semicircle_profile(radius: f32, stacks: u32) -> Vec<Vec3> {
    let stacks = stacks.max(1);
    let step = PI / stacks as f32;

    let mut profile = Vec::with_capacity(stacks as usize + 2);
    let mut u = 0.0f32;
    while u < PI {
        profile.push(Vec3::new(radius * u.sin(), radius * u.cos(), 0.0));
        u += step;
    }
    profile.push(Vec3::new(0.0, -radius, 0.0));
    profile
}

/// Sphere built by revolving a semicircular profile through `slices`
/// angular sections with `stacks` samples from pole to pole.
pub fn sphere(radius: f32, slices: u32, stacks: u32) -> SurfaceGeometry {
    lathe::revolve(&semicircle_profile(radius, stacks), slices, SURFACE_COLOR)
}

/// Sphere with mirrored winding and inward normals, for use as a
/// surrounding backdrop viewed from the inside.
pub fn background_sphere(radius: f32, slices: u32, stacks: u32) -> SurfaceGeometry {
    lathe::revolve_inward(&semicircle_profile(radius, stacks), slices, SURFACE_COLOR)
}

/// Flat annulus in the y = 0 plane from `inner_radius` to
/// `inner_radius + width`, facing +Y.
///
/// Texture u runs radially (0 inner, 1 outer), v runs around the ring.
/// As with the lathe, the angular sweep emits an explicit closing section
/// at exactly 2 pi so the seam is closed. `resolution` is clamped to at
/// least 1.
pub fn ring(inner_radius: f32, width: f32, resolution: u32) -> SurfaceGeometry {
    let resolution = resolution.max(1);
    let outer_radius = inner_radius + width;
    let step = TAU / resolution as f32;

    let mut angles = Vec::with_capacity(resolution as usize + 2);
    let mut u = 0.0f32;
    while u < TAU {
        angles.push(u);
        u += step;
    }
    angles.push(TAU);

    let mut mesh = SurfaceGeometry::new();
    let normal = Vec3::Y;
    for i in 0..angles.len() - 1 {
        let (a0, a1) = (angles[i], angles[i + 1]);
        let (v0, v1) = (a0 / TAU, a1 / TAU);

        let inner0 = Vec3::new(inner_radius * a0.cos(), 0.0, inner_radius * a0.sin());
        let inner1 = Vec3::new(inner_radius * a1.cos(), 0.0, inner_radius * a1.sin());
        let outer0 = Vec3::new(outer_radius * a0.cos(), 0.0, outer_radius * a0.sin());
        let outer1 = Vec3::new(outer_radius * a1.cos(), 0.0, outer_radius * a1.sin());

        mesh.push_vertex(outer0, SURFACE_COLOR, normal, [1.0, v0]);
        mesh.push_vertex(inner0, SURFACE_COLOR, normal, [0.0, v0]);
        mesh.push_vertex(outer1, SURFACE_COLOR, normal, [1.0, v1]);

        mesh.push_vertex(outer1, SURFACE_COLOR, normal, [1.0, v1]);
        mesh.push_vertex(inner0, SURFACE_COLOR, normal, [0.0, v0]);
        mesh.push_vertex(inner1, SURFACE_COLOR, normal, [0.0, v1]);
    }

    mesh
}

// One quad centered at the origin in the z = 0 plane, as two triangles
const QUAD: [Vec3; 6] = [
    Vec3::new(-0.5, 0.5, 0.0),  // top-left
    Vec3::new(-0.5, -0.5, 0.0), // bottom-left
    Vec3::new(0.5, 0.5, 0.0),   // top-right
    Vec3::new(-0.5, -0.5, 0.0), // bottom-left
    Vec3::new(0.5, -0.5, 0.0),  // bottom-right
    Vec3::new(0.5, 0.5, 0.0),   // top-right
];

const QUAD_UVS: [[f32; 2]; 6] = [
    [0.0, 1.0],
    [0.0, 0.0],
    [1.0, 1.0],
    [0.0, 0.0],
    [1.0, 0.0],
    [1.0, 1.0],
];

/// Axis-aligned unit cube centered at the origin, one color per face.
pub fn unit_cube() -> SurfaceGeometry {
    let faces = [
        (
            mat4::translation(Vec3::new(0.0, 0.0, 0.5)),
            Vec3::Z,
            Vec3::new(1.0, 1.0, 0.0),
        ),
        (
            mat4::mul(
                mat4::translation(Vec3::new(0.5, 0.0, 0.0)),
                mat4::rotation_y(FRAC_PI_2),
            ),
            Vec3::X,
            Vec3::new(1.0, 0.0, 0.0),
        ),
        (
            mat4::mul(
                mat4::translation(Vec3::new(0.0, 0.0, -0.5)),
                mat4::rotation_y(PI),
            ),
            -Vec3::Z,
            Vec3::new(0.0, 1.0, 0.0),
        ),
        (
            mat4::mul(
                mat4::translation(Vec3::new(-0.5, 0.0, 0.0)),
                mat4::rotation_y(-FRAC_PI_2),
            ),
            -Vec3::X,
            Vec3::new(0.0, 0.0, 1.0),
        ),
        (
            mat4::mul(
                mat4::translation(Vec3::new(0.0, 0.5, 0.0)),
                mat4::rotation_x(-FRAC_PI_2),
            ),
            Vec3::Y,
            Vec3::new(1.0, 0.0, 1.0),
        ),
        (
            mat4::mul(
                mat4::translation(Vec3::new(0.0, -0.5, 0.0)),
                mat4::rotation_x(FRAC_PI_2),
            ),
            -Vec3::Y,
            Vec3::new(0.0, 1.0, 1.0),
        ),
    ];

    let mut mesh = SurfaceGeometry::new();
    for (transform, normal, color) in faces {
        for (corner, uv) in QUAD.iter().zip(QUAD_UVS) {
            mesh.push_vertex(mat4::transform_point(transform, *corner), color, normal, uv);
        }
    }
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_sphere_vertices_on_shell() {
        // Every vertex of a radius-1 sphere sits at distance 1 from the origin
        let mesh = sphere(1.0, 4, 2);
        assert!(!mesh.is_empty());
        for p in &mesh.positions {
            assert!((p.length() - 1.0).abs() < EPSILON, "vertex {:?} off the shell", p);
        }
    }

    #[test]
    fn test_sphere_radius_scales() {
        let mesh = sphere(2.5, 8, 6);
        for p in &mesh.positions {
            assert!((p.length() - 2.5).abs() < 0.001);
        }
    }

    #[test]
    fn test_sphere_interior_normals_match_positions() {
        // Away from the poles, the unit-sphere normal is the position itself
        let mesh = sphere(1.0, 8, 8);
        for i in 0..mesh.vertex_count() {
            let p = mesh.positions[i];
            if p.y.abs() < 0.9 {
                assert!(
                    mesh.normals[i].distance(p) < 0.01,
                    "normal {:?} diverges from position {:?}",
                    mesh.normals[i],
                    p
                );
            }
        }
    }

    #[test]
    fn test_background_sphere_faces_inward() {
        let outward = sphere(1.0, 6, 4);
        let inward = background_sphere(1.0, 6, 4);
        assert_eq!(outward.vertex_count(), inward.vertex_count());
        for i in 0..inward.vertex_count() {
            assert!(
                inward.normals[i].dot(inward.positions[i]) < 0.0,
                "normal {:?} at {:?} does not face the axis",
                inward.normals[i],
                inward.positions[i]
            );
        }
    }

    #[test]
    fn test_sphere_clamps_zero_divisions() {
        let mesh = sphere(1.0, 0, 0);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_ring_is_flat_annulus() {
        let mesh = ring(2.0, 1.0, 16);
        assert!(!mesh.is_empty());
        for i in 0..mesh.vertex_count() {
            let p = mesh.positions[i];
            assert!(p.y.abs() < EPSILON, "ring vertex {:?} off the plane", p);
            let radial = (p.x * p.x + p.z * p.z).sqrt();
            assert!(radial >= 2.0 - EPSILON && radial <= 3.0 + EPSILON);
            assert_eq!(mesh.normals[i], Vec3::Y);
        }
    }

    #[test]
    fn test_ring_uv_tracks_radius() {
        let mesh = ring(1.0, 1.0, 8);
        for i in 0..mesh.vertex_count() {
            let radial = (mesh.positions[i].x.powi(2) + mesh.positions[i].z.powi(2)).sqrt();
            let expected = if mesh.uvs[i][0] == 0.0 { 1.0 } else { 2.0 };
            assert!((radial - expected).abs() < EPSILON);
        }
    }

    #[test]
    fn test_ring_seam_closes() {
        let mesh = ring(1.0, 0.5, 6);
        // The closing section lands exactly on the +X axis start
        let start = Vec3::new(1.5, 0.0, 0.0);
        let closing = mesh
            .positions
            .iter()
            .filter(|p| p.distance(start) < 0.001)
            .count();
        assert!(closing >= 2, "expected seam vertices at both ends, found {}", closing);
    }

    #[test]
    fn test_unit_cube_shape() {
        let mesh = unit_cube();
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        for p in &mesh.positions {
            assert!(p.x.abs() <= 0.5 + EPSILON);
            assert!(p.y.abs() <= 0.5 + EPSILON);
            assert!(p.z.abs() <= 0.5 + EPSILON);
        }
    }

    #[test]
    fn test_unit_cube_face_normals_point_out() {
        let mesh = unit_cube();
        for face in 0..6 {
            let base = face * 6;
            let normal = mesh.normals[base];
            let mut centroid = Vec3::ZERO;
            for i in base..base + 6 {
                assert_eq!(mesh.normals[i], normal);
                centroid += mesh.positions[i];
            }
            centroid = centroid / 6.0;
            assert!(normal.dot(centroid) > 0.0, "face {} normal {:?} points inward", face, normal);
        }
    }

    #[test]
    fn test_unit_cube_has_six_face_colors() {
        let mesh = unit_cube();
        let mut colors: Vec<Vec3> = Vec::new();
        for face in 0..6 {
            let color = mesh.colors[face * 6];
            assert!(!colors.contains(&color), "face color {:?} repeated", color);
            colors.push(color);
        }
    }
}
