//! Surface of revolution tessellation
//!
//! A 2D profile curve (x = radius, y = height, z = 0) is swept around the
//! Y axis into a triangle mesh. Adjacent angular sections and adjacent
//! profile samples form quads, each split into two triangles with
//! consistent winding.
//!
//! The sweep walks from 0 to 2π by `2π / sections`; because the
//! accumulating float may stop short of 2π, one closing section is always
//! emitted at exactly 2π so the seam vertices coincide with the angle-0
//! section.

use std::f32::consts::TAU;

use crate::{SurfaceGeometry, Vec3};

/// Revolve `profile` around the Y axis with outward-facing winding.
///
/// Normals come from the profile tangent (finite differences, one-sided
/// at the endpoints) rotated into each section, which reduces to
/// "normal equals position" for a unit-radius circular profile. Texture
/// coordinates are `(angular fraction, 1 - profile fraction)`. An empty
/// or single-point profile yields an empty mesh; `sections` is clamped
/// to at least 1.
pub fn revolve(profile: &[Vec3], sections: u32, color: Vec3) -> SurfaceGeometry {
    revolve_impl(profile, sections, color, false)
}

/// Mirrored-winding variant of [`revolve`] for geometry viewed from the
/// inside (e.g. a background sphere). Triangle order is swapped and the
/// normals are negated so lighting is not reversed.
pub fn revolve_inward(profile: &[Vec3], sections: u32, color: Vec3) -> SurfaceGeometry {
    revolve_impl(profile, sections, color, true)
}

/// Rotate a profile-plane vector into the section at `angle`.
///
/// The x component is treated as the radial distance from the axis.
#[inline]
fn spin(p: Vec3, angle: f32) -> Vec3 {
    Vec3::new(p.x * angle.cos(), p.y, p.x * angle.sin())
}

/// Section angles from 0 to 2π inclusive, with the closing section pinned
/// to exactly 2π.
fn section_angles(sections: u32) -> Vec<f32> {
    let step = TAU / sections as f32;
    let mut angles = Vec::with_capacity(sections as usize + 2);
    let mut u = 0.0f32;
    while u < TAU {
        angles.push(u);
        u += step;
    }
    angles.push(TAU);
    angles
}

/// Per-sample outward normals in the profile plane: the tangent rotated a
/// quarter turn. Degenerate tangents (coincident samples) fall back to
/// the radial direction.
fn profile_normals(profile: &[Vec3]) -> Vec<Vec3> {
    let n = profile.len();
    (0..n)
        .map(|j| {
            let prev = profile[j.saturating_sub(1)];
            let next = profile[(j + 1).min(n - 1)];
            let tangent = next - prev;
            let normal = Vec3::new(-tangent.y, tangent.x, 0.0);
            let len = normal.length();
            if len > 0.0 {
                normal / len
            } else {
                Vec3::X
            }
        })
        .collect()
}

fn revolve_impl(profile: &[Vec3], sections: u32, color: Vec3, inward: bool) -> SurfaceGeometry {
    let mut mesh = SurfaceGeometry::new();
    if profile.len() < 2 {
        return mesh;
    }

    let sections = sections.max(1);
    let angles = section_angles(sections);
    let flat_normals = profile_normals(profile);

    // Positions and normals for every angular section
    let rings: Vec<Vec<Vec3>> = angles
        .iter()
        .map(|&a| profile.iter().map(|&p| spin(p, a)).collect())
        .collect();
    let ring_normals: Vec<Vec<Vec3>> = angles
        .iter()
        .map(|&a| flat_normals.iter().map(|&n| spin(n, a)).collect())
        .collect();

    let last_sample = (profile.len() - 1) as f32;
    for i in 0..rings.len() - 1 {
        let (u0, u1) = (angles[i] / TAU, angles[i + 1] / TAU);
        for j in 0..profile.len() - 1 {
            let (v0, v1) = (
                1.0 - j as f32 / last_sample,
                1.0 - (j + 1) as f32 / last_sample,
            );

            // Quad corners: near/far section x upper/lower profile sample
            let near_top = (rings[i][j], ring_normals[i][j], [u0, v0]);
            let near_bot = (rings[i][j + 1], ring_normals[i][j + 1], [u0, v1]);
            let far_bot = (rings[i + 1][j + 1], ring_normals[i + 1][j + 1], [u1, v1]);
            let far_top = (rings[i + 1][j], ring_normals[i + 1][j], [u1, v0]);

            let triangles = if inward {
                [
                    [far_bot, near_top, near_bot],
                    [far_top, near_top, far_bot],
                ]
            } else {
                [
                    [near_top, far_bot, near_bot],
                    [near_top, far_top, far_bot],
                ]
            };

            for triangle in triangles {
                for (position, normal, uv) in triangle {
                    let normal = if inward { -normal } else { normal };
                    mesh.push_vertex(position, color, normal, uv);
                }
            }
        }
    }

    mesh
}
