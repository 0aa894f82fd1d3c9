//! Shared vertex/index buffer for many bodies drawn with one call.
//!
//! [`SphereBatch`] owns the accumulating buffers. Each [`SphereBatch::add_body`]
//! tessellates one body, appends it, and records where its vertices and
//! indices landed. Offsets are derived from what was actually written, so
//! bodies may use different tessellation resolutions.

use std::ops::Range;

use crate::sphere::SphereMesh;
use crate::vertex::SphereVertex;

/// Where one body's geometry lives inside the batch buffers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyRange {
    /// Ordinal position of the body in the batch.
    pub body_index: u32,
    /// First vertex of the body in the shared vertex buffer.
    pub vertex_offset: u32,
    /// Number of vertices the body contributed.
    pub vertex_count: u32,
    /// First index of the body in the shared triangle index buffer.
    pub index_offset: u32,
    /// Number of triangle indices the body contributed.
    pub index_count: u32,
    /// First index of the body in the shared line index buffer.
    pub line_index_offset: u32,
    /// Number of line indices the body contributed.
    pub line_index_count: u32,
}

impl BodyRange {
    pub fn vertex_range(&self) -> Range<u32> {
        self.vertex_offset..self.vertex_offset + self.vertex_count
    }

    /// Index sub-range to pass to an indexed draw for this body alone.
    pub fn index_range(&self) -> Range<u32> {
        self.index_offset..self.index_offset + self.index_count
    }

    pub fn line_index_range(&self) -> Range<u32> {
        self.line_index_offset..self.line_index_offset + self.line_index_count
    }
}

/// Body index to buffer sub-range table, computed from a finished batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchLayout {
    ranges: Vec<BodyRange>,
}

impl BatchLayout {
    /// Range for `body_index`, if the body exists.
    pub fn get(&self, body_index: u32) -> Option<&BodyRange> {
        self.ranges.get(body_index as usize)
    }

    /// Index sub-range for one body.
    pub fn index_range(&self, body_index: u32) -> Option<Range<u32>> {
        self.get(body_index).map(BodyRange::index_range)
    }

    /// Find the body owning a vertex of the shared buffer.
    pub fn body_for_vertex(&self, vertex: u32) -> Option<u32> {
        let pos = self
            .ranges
            .partition_point(|r| r.vertex_offset + r.vertex_count <= vertex);
        self.ranges
            .get(pos)
            .filter(|r| r.vertex_range().contains(&vertex))
            .map(|r| r.body_index)
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BodyRange> {
        self.ranges.iter()
    }

    /// Total vertices across all bodies.
    pub fn total_vertices(&self) -> u32 {
        self.ranges.iter().map(|r| r.vertex_count).sum()
    }

    /// Total triangle indices across all bodies.
    pub fn total_indices(&self) -> u32 {
        self.ranges.iter().map(|r| r.index_count).sum()
    }
}

impl<'a> IntoIterator for &'a BatchLayout {
    type Item = &'a BodyRange;
    type IntoIter = std::slice::Iter<'a, BodyRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}

/// Accumulates sphere bodies into one interleaved vertex buffer and one
/// global index buffer, ready for a single upload.
#[derive(Clone, Debug, Default)]
pub struct SphereBatch {
    vertices: Vec<SphereVertex>,
    indices: Vec<u32>,
    line_indices: Vec<u32>,
    ranges: Vec<BodyRange>,
}

impl SphereBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty batch with room for `bodies` spheres at the given
    /// resolution.
    pub fn with_capacity(bodies: usize, sector_count: u32, stack_count: u32) -> Self {
        let sectors = crate::sphere::coerce_sector_count(sector_count) as usize;
        let stacks = crate::sphere::coerce_stack_count(stack_count) as usize;
        Self {
            vertices: Vec::with_capacity(bodies * (sectors + 1) * (stacks + 1)),
            indices: Vec::with_capacity(bodies * 6 * sectors * (stacks - 1)),
            line_indices: Vec::with_capacity(bodies * 2 * sectors * (2 * stacks - 1)),
            ranges: Vec::with_capacity(bodies),
        }
    }

    /// Tessellate the next body and append it to the shared buffers.
    ///
    /// The body index is the number of bodies added before it. Returns the
    /// sub-ranges the body occupies.
    pub fn add_body(&mut self, radius: f32, sector_count: u32, stack_count: u32) -> BodyRange {
        let body_index = self.ranges.len() as u32;
        let vertex_offset = self.vertices.len() as u32;
        let mesh =
            SphereMesh::with_offset(radius, sector_count, stack_count, body_index, vertex_offset);

        let range = BodyRange {
            body_index,
            vertex_offset,
            vertex_count: mesh.vertex_count() as u32,
            index_offset: self.indices.len() as u32,
            index_count: mesh.index_count() as u32,
            line_index_offset: self.line_indices.len() as u32,
            line_index_count: mesh.line_index_count() as u32,
        };

        self.indices.extend_from_slice(mesh.global_indices());
        self.line_indices
            .extend(mesh.line_indices().iter().map(|&i| i.wrapping_add(vertex_offset)));
        mesh.append_interleaved(&mut self.vertices);
        self.ranges.push(range);

        log::debug!("Batched {mesh}");
        range
    }

    /// Snapshot of the body to sub-range table.
    pub fn layout(&self) -> BatchLayout {
        BatchLayout {
            ranges: self.ranges.clone(),
        }
    }

    /// Sub-range of one body.
    pub fn range(&self, body_index: u32) -> Option<&BodyRange> {
        self.ranges.get(body_index as usize)
    }

    /// Vertices per body when every body shares one resolution.
    ///
    /// When this is `Some(n)`, body `k` starts at vertex `k * n`.
    pub fn uniform_vertex_stride(&self) -> Option<u32> {
        let first = self.ranges.first()?.vertex_count;
        self.ranges
            .iter()
            .all(|r| r.vertex_count == first)
            .then_some(first)
    }

    pub fn body_count(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if no body has been added.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn vertices(&self) -> &[SphereVertex] {
        &self.vertices
    }

    /// The vertex buffer as a flat run of `f32`, eight per vertex.
    pub fn vertex_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Returns the vertex data as a byte slice for GPU upload (zero-copy).
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Global triangle indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns the index data as a byte slice for GPU upload (zero-copy).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Global line indices for wireframe rendering.
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    pub fn line_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.line_indices)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
