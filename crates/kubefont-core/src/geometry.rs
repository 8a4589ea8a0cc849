//! Triangle meshes: extruded text and boxes.

use crate::font::Font;
use crate::shape::Shape;
use crate::triangulate::triangulate;
use glam::{Vec2, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
        }
    }
}

/// Indexed triangle list with counter-clockwise front faces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_triangle(&mut self, a: Vertex, b: Vertex, c: Vertex) {
        let base = self.vertices.len() as u32;
        self.vertices.extend([a, b, c]);
        self.indices.extend([base, base + 1, base + 2]);
    }

    fn push_quad(&mut self, corners: [Vec3; 4], normal: Vec3) {
        let base = self.vertices.len() as u32;
        self.vertices
            .extend(corners.iter().map(|&p| Vertex::new(p, normal)));
        self.indices
            .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Axis-aligned bounds, or `None` for an empty mesh.
    pub fn bounding_box(&self) -> Option<(Vec3, Vec3)> {
        let mut it = self.vertices.iter().map(|v| Vec3::from(v.position));
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    pub fn translate(&mut self, offset: Vec3) {
        for v in &mut self.vertices {
            v.position = (Vec3::from(v.position) + offset).to_array();
        }
    }

    /// Move the mesh so its bounding box is centered on the origin.
    /// Returns the applied offset.
    pub fn center(&mut self) -> Vec3 {
        let Some((lo, hi)) = self.bounding_box() else {
            return Vec3::ZERO;
        };
        let offset = -(lo + hi) * 0.5;
        self.translate(offset);
        offset
    }
}

/// Box centered on the origin, four vertices per face.
pub fn box_geometry(width: f32, height: f32, depth: f32) -> MeshData {
    let h = Vec3::new(width, height, depth) * 0.5;
    let mut mesh = MeshData::default();
    // (normal, u axis, v axis) with u x v == normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    for (n, u, v) in faces {
        let c = n * h;
        let du = u * h;
        let dv = v * h;
        mesh.push_quad([c - du - dv, c + du - dv, c + du + dv, c - du + dv], n);
    }
    mesh
}

/// Extrude flat shapes along +z from `z = 0` to `z = depth`, without bevel.
pub fn extrude(shapes: &[Shape], depth: f32) -> MeshData {
    let mut mesh = MeshData::default();
    let front = Vec3::Z;
    let back = Vec3::NEG_Z;
    for shape in shapes {
        let tri = triangulate(shape);
        let at = |p: Vec2, z: f32| Vec3::new(p.x, p.y, z);

        for t in &tri.triangles {
            let [a, b, c] = t.map(|i| tri.points[i as usize]);
            mesh.push_triangle(
                Vertex::new(at(a, depth), front),
                Vertex::new(at(b, depth), front),
                Vertex::new(at(c, depth), front),
            );
            mesh.push_triangle(
                Vertex::new(at(a, 0.0), back),
                Vertex::new(at(c, 0.0), back),
                Vertex::new(at(b, 0.0), back),
            );
        }

        // Outer runs counter-clockwise and holes clockwise, so the right-hand
        // side of every edge faces away from the filled region.
        for &(start, len) in &tri.contours {
            for i in 0..len {
                let p0 = tri.points[start + i];
                let p1 = tri.points[start + (i + 1) % len];
                let d = p1 - p0;
                if d.length_squared() <= f32::EPSILON {
                    continue;
                }
                let n = Vec3::new(d.y, -d.x, 0.0).normalize();
                mesh.push_quad(
                    [at(p0, 0.0), at(p1, 0.0), at(p1, depth), at(p0, depth)],
                    n,
                );
            }
        }
    }
    mesh
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextGeometryOptions {
    pub size: f32,
    pub depth: f32,
    pub curve_segments: usize,
}

impl Default for TextGeometryOptions {
    fn default() -> Self {
        use crate::constants::{TEXT_CURVE_SEGMENTS, TEXT_DEPTH, TEXT_SIZE};
        Self {
            size: TEXT_SIZE,
            depth: TEXT_DEPTH,
            curve_segments: TEXT_CURVE_SEGMENTS,
        }
    }
}

pub fn text_geometry(font: &Font, text: &str, options: TextGeometryOptions) -> MeshData {
    let shapes = font.generate_shapes(text, options.size, options.curve_segments);
    extrude(&shapes, options.depth)
}
