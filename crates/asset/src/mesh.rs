//! CPU-side mesh representation produced by the OBJ loader.

use corelib::{Vec2, Vec3};

/// Vertex with position/normal/uv in object space.
///
/// `normal` is unit length, or zero when the source gave none.
/// `uv` is zero when the face vertex had no texture coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub normal: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    #[inline]
    pub fn has_normal(&self) -> bool {
        self.normal != Vec3::ZERO
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    pub fn extent(&self) -> Vec3 {
        self.max - self.min
    }
}

/// Unindexed triangle list: every three vertices form one triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    /// Empty for the implicit default mesh.
    pub name: String,
    pub vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new(name: impl Into<String>, vertices: Vec<Vertex>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns `None` for a mesh without vertices.
    pub fn bounds(&self) -> Option<Aabb> {
        let first = self.vertices.first()?.position;
        let (min, max) = self
            .vertices
            .iter()
            .fold((first, first), |(min, max), v| {
                (min.min(v.position), max.max(v.position))
            });
        Some(Aabb { min, max })
    }

    pub fn has_missing_normals(&self) -> bool {
        self.vertices.iter().any(|v| !v.has_normal())
    }

    /// Copy of the mesh where vertices without a normal take the normal of
    /// their triangle (counter-clockwise winding). Degenerate triangles keep
    /// zero normals.
    pub fn with_flat_normals(&self) -> Mesh {
        let mut vertices = self.vertices.clone();
        for tri in vertices.chunks_exact_mut(3) {
            if tri.iter().all(Vertex::has_normal) {
                continue;
            }
            let face = (tri[1].position - tri[0].position)
                .cross(tri[2].position - tri[0].position)
                .normalize_or_zero();
            for v in tri.iter_mut().filter(|v| !v.has_normal()) {
                v.normal = face;
            }
        }
        Mesh::new(self.name.clone(), vertices)
    }
}
