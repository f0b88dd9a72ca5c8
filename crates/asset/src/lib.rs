//! Asset loading and GPU-ready packing.
//! OBJ meshes are loaded unindexed, then flattened into interleaved
//! float buffers for direct triangle-list draws.

pub mod mesh;
pub mod obj;
pub mod pack;
