//! Interleaved vertex buffer packing.

use corelib::placement::Placement;

use crate::mesh::Mesh;

/// Attribute layout of a packed vertex.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum VertexLayout {
    /// `px py pz nx ny nz`
    #[default]
    PositionNormal,
    /// `px py pz nx ny nz u v`
    PositionNormalUv,
}

impl VertexLayout {
    /// Floats per vertex.
    pub const fn stride(self) -> usize {
        match self {
            VertexLayout::PositionNormal => 6,
            VertexLayout::PositionNormalUv => 8,
        }
    }

    pub const fn stride_bytes(self) -> usize {
        self.stride() * size_of::<f32>()
    }

    /// Byte offsets of position and normal inside one vertex.
    pub const fn attribute_offsets(self) -> [usize; 2] {
        [0, 3 * size_of::<f32>()]
    }
}

/// Flat float buffer ready for upload plus the count needed for draws.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedMesh {
    pub data: Vec<f32>,
    pub vertex_count: usize,
    pub layout: VertexLayout,
}

impl PackedMesh {
    /// Raw bytes of `data` in native endianness.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count == 0
    }
}

/// Pack `mesh` as `[p * scale + offset, n]` per vertex. Normals are copied
/// unchanged.
pub fn pack_mesh(mesh: &Mesh, placement: &Placement) -> PackedMesh {
    pack_mesh_with_layout(mesh, placement, VertexLayout::PositionNormal)
}

pub fn pack_mesh_with_layout(
    mesh: &Mesh,
    placement: &Placement,
    layout: VertexLayout,
) -> PackedMesh {
    let mut data = Vec::with_capacity(mesh.vertex_count() * layout.stride());
    for v in &mesh.vertices {
        data.extend_from_slice(&placement.apply(v.position).to_array());
        data.extend_from_slice(&v.normal.to_array());
        if layout == VertexLayout::PositionNormalUv {
            data.extend_from_slice(&v.uv.to_array());
        }
    }
    PackedMesh {
        data,
        vertex_count: mesh.vertex_count(),
        layout,
    }
}
