//! Interleaved vertex record shared by every body in a sphere batch.
//!
//! [`SphereVertex`] is the 32-byte GPU-facing layout: position, normal and
//! texture coordinate packed back to back as eight `f32`s.

use glam::{Vec2, Vec3};

/// Number of `f32` components in one interleaved vertex.
pub const FLOATS_PER_VERTEX: usize = 8;

/// A single interleaved sphere vertex.
///
/// Layout (32 bytes total):
///   - `[0..12]`  position `[f32; 3]` in body-local space
///   - `[12..24]` normal `[f32; 3]`, unit length
///   - `[24..32]` uv `[f32; 2]`, both components in `0.0..=1.0`
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SphereVertex {
    /// Position relative to the body centre.
    pub position: [f32; 3],
    /// Outward surface normal.
    pub normal: [f32; 3],
    /// Equirectangular texture coordinates.
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(SphereVertex, [f32; FLOATS_PER_VERTEX]);

impl SphereVertex {
    /// Byte stride of one vertex in the shared buffer.
    pub const STRIDE: usize = std::mem::size_of::<SphereVertex>();

    /// Pack the three parallel attributes of one grid vertex.
    pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            uv: uv.to_array(),
        }
    }

    /// Position as a `glam` vector.
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a `glam` vector.
    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Texture coordinate as a `glam` vector.
    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.uv)
    }
}
