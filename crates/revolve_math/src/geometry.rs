//! CPU-side geometry buffers
//!
//! Parallel-array buffers in the format the host rendering backend
//! consumes: `ColorGeometry` for point lists and line strips,
//! `SurfaceGeometry` for triangle lists. Both offer an interleaved Pod
//! vertex view for direct GPU upload.
//!
//! These buffers are values: they are rebuilt wholesale from the editor
//! document every frame and never patched in place.

use bytemuck::{Pod, Zeroable};

use crate::Vec3;

/// Interleaved vertex for point/line geometry
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Interleaved vertex for surface geometry
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Positions plus per-vertex colors, drawn as points or a line strip
#[derive(Clone, Debug, Default)]
pub struct ColorGeometry {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

impl ColorGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from positions with a single uniform color
    pub fn uniform(positions: Vec<Vec3>, color: Vec3) -> Self {
        let colors = vec![color; positions.len()];
        Self { positions, colors }
    }

    pub fn push(&mut self, position: Vec3, color: Vec3) {
        self.positions.push(position);
        self.colors.push(color);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    /// Interleaved vertex stream for buffer upload
    pub fn interleaved(&self) -> Vec<ColorVertex> {
        self.positions
            .iter()
            .zip(&self.colors)
            .map(|(p, c)| ColorVertex {
                position: p.to_array(),
                color: c.to_array(),
            })
            .collect()
    }
}

/// Triangle-list geometry with per-vertex color, normal and texture coordinates
///
/// Vertices are stored unindexed, three per triangle, in the winding order
/// the generator emitted them.
#[derive(Clone, Debug, Default)]
pub struct SurfaceGeometry {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<[f32; 2]>,
}

impl SurfaceGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_vertex(&mut self, position: Vec3, color: Vec3, normal: Vec3, uv: [f32; 2]) {
        self.positions.push(position);
        self.colors.push(color);
        self.normals.push(normal);
        self.uvs.push(uv);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Interleaved vertex stream for buffer upload
    pub fn interleaved(&self) -> Vec<SurfaceVertex> {
        (0..self.positions.len())
            .map(|i| SurfaceVertex {
                position: self.positions[i].to_array(),
                color: self.colors[i].to_array(),
                normal: self.normals[i].to_array(),
                uv: self.uvs[i],
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_color() {
        let geom = ColorGeometry::uniform(
            vec![Vec3::ZERO, Vec3::X, Vec3::Y],
            Vec3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(geom.len(), 3);
        assert!(geom.colors.iter().all(|c| *c == Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_interleaved_matches_parallel_arrays() {
        let mut geom = ColorGeometry::new();
        geom.push(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        let verts = geom.interleaved();
        assert_eq!(verts.len(), 1);
        assert_eq!(verts[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(verts[0].color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_surface_counts() {
        let mut mesh = SurfaceGeometry::new();
        for _ in 0..6 {
            mesh.push_vertex(Vec3::ZERO, Vec3::X, Vec3::Y, [0.0, 0.0]);
        }
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_vertex_layout_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 24);
        assert_eq!(std::mem::size_of::<SurfaceVertex>(), 44);
    }
}
