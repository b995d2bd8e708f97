//! Ordered control point storage
//!
//! Insertion order defines the curve parametrization, so every mutation
//! must preserve the order of the surviving points. The set has exactly
//! one writer per frame: the editor state machine.

use revolve_math::{ColorGeometry, Vec3};

/// Color of an editable control point
pub const ACTIVE_COLOR: Vec3 = Vec3::new(0.0, 1.0, 0.0);
/// Highlight color of the point currently being dragged
pub const DRAG_COLOR: Vec3 = Vec3::new(0.0, 0.0, 1.0);

/// A user-placed curve anchor
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlPoint {
    /// Position in normalized viewport coordinates (z = 0 for 2D curves)
    pub position: Vec3,
    pub color: Vec3,
    pub selected: bool,
}

impl ControlPoint {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color, selected: false }
    }
}

/// Ordered sequence of control points
#[derive(Clone, Debug, Default)]
pub struct ControlPointSet {
    points: Vec<ControlPoint>,
}

impl ControlPointSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed geometry: a centered quad so a fresh editor shows a curve
    pub fn default_quad() -> Self {
        let corners = [
            Vec3::new(-0.5, -0.5, 0.0),
            Vec3::new(0.5, -0.5, 0.0),
            Vec3::new(0.5, 0.5, 0.0),
            Vec3::new(-0.5, 0.5, 0.0),
        ];
        Self {
            points: corners
                .iter()
                .map(|&p| ControlPoint::new(p, ACTIVE_COLOR))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    /// Positions in curve order
    pub fn positions(&self) -> Vec<Vec3> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Append a point at the end, extending the curve
    pub fn push(&mut self, position: Vec3, color: Vec3) {
        self.points.push(ControlPoint::new(position, color));
    }

    /// Remove the point at `index`, preserving the order of the rest
    pub fn remove(&mut self, index: usize) -> ControlPoint {
        self.points.remove(index)
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn set_position(&mut self, index: usize, position: Vec3) {
        if let Some(point) = self.points.get_mut(index) {
            point.position = position;
        }
    }

    pub fn set_color(&mut self, index: usize, color: Vec3) {
        if let Some(point) = self.points.get_mut(index) {
            point.color = color;
        }
    }

    pub fn set_selected(&mut self, index: usize, selected: bool) {
        if let Some(point) = self.points.get_mut(index) {
            point.selected = selected;
        }
    }

    /// Index of the nearest point within `radius` of `target`, if any
    pub fn nearest_within(&self, target: Vec3, radius: f32) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        for (index, point) in self.points.iter().enumerate() {
            let distance = point.position.distance(target);
            if distance <= radius && best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Point list with per-point colors, for rendering the control points
    pub fn point_geometry(&self) -> ColorGeometry {
        let mut geometry = ColorGeometry::new();
        for point in &self.points {
            geometry.push(point.position, point.color);
        }
        geometry
    }

    /// Line strip connecting the points in curve order
    pub fn polygon_geometry(&self, color: Vec3) -> ColorGeometry {
        ColorGeometry::uniform(self.positions(), color)
    }
}
