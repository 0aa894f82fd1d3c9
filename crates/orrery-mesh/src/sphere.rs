//! UV sphere tessellation for celestial bodies.
//!
//! A sphere is a regular grid of `stack_count + 1` latitude rings by
//! `sector_count + 1` longitude columns. The seam column is duplicated so the
//! texture wraps cleanly, and the pole rings collapse to a single point each.
//! Triangles touching a pole are emitted once per sector instead of twice.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::fmt;

use glam::{Vec2, Vec3};

use crate::vertex::SphereVertex;

/// Smallest radius a sphere is built with.
pub const MIN_RADIUS: f32 = 1.0e-3;
/// Fewest longitude slices a sphere is built with.
pub const MIN_SECTOR_COUNT: u32 = 3;
/// Fewest latitude bands a sphere is built with.
pub const MIN_STACK_COUNT: u32 = 2;

/// Coerce a requested radius into the valid range.
///
/// Non-positive and non-finite radii become [`MIN_RADIUS`]; positive radii are
/// raised to at least [`MIN_RADIUS`].
pub fn coerce_radius(radius: f32) -> f32 {
    if !radius.is_finite() || radius <= 0.0 {
        MIN_RADIUS
    } else {
        radius.max(MIN_RADIUS)
    }
}

/// Coerce a requested sector count to at least [`MIN_SECTOR_COUNT`].
pub fn coerce_sector_count(sector_count: u32) -> u32 {
    sector_count.max(MIN_SECTOR_COUNT)
}

/// Coerce a requested stack count to at least [`MIN_STACK_COUNT`].
pub fn coerce_stack_count(stack_count: u32) -> u32 {
    stack_count.max(MIN_STACK_COUNT)
}

/// One tessellated body.
///
/// Attributes are stored as parallel arrays (one entry per grid vertex, in
/// stack-major order). `local_indices` reference this body's own vertices;
/// `global_indices` are the same triangles shifted by the body's vertex
/// offset inside the shared batch buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct SphereMesh {
    radius: f32,
    sector_count: u32,
    stack_count: u32,
    body_index: u32,
    vertex_offset: u32,
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    tex_coords: Vec<Vec2>,
    local_indices: Vec<u32>,
    global_indices: Vec<u32>,
    line_indices: Vec<u32>,
}

impl SphereMesh {
    /// Build a standalone sphere (body 0, no vertex offset).
    pub fn new(radius: f32, sector_count: u32, stack_count: u32) -> Self {
        Self::with_offset(radius, sector_count, stack_count, 0, 0)
    }

    /// Build a sphere whose global indices start at `vertex_offset`.
    ///
    /// Out-of-range parameters are coerced, never rejected.
    pub fn with_offset(
        radius: f32,
        sector_count: u32,
        stack_count: u32,
        body_index: u32,
        vertex_offset: u32,
    ) -> Self {
        let coerced_radius = coerce_radius(radius);
        let sectors = coerce_sector_count(sector_count);
        let stacks = coerce_stack_count(stack_count);

        if coerced_radius != radius || sectors != sector_count || stacks != stack_count {
            log::debug!(
                "Body {body_index}: sphere parameters clamped from \
                 (radius {radius}, {sector_count} sectors, {stack_count} stacks) to \
                 (radius {coerced_radius}, {sectors} sectors, {stacks} stacks)"
            );
        }

        let (positions, normals, tex_coords) = generate_grid(coerced_radius, sectors, stacks);
        let local_indices = triangle_indices(sectors, stacks);
        let last_vertex = (sectors + 1) * (stacks + 1) - 1;
        if vertex_offset.checked_add(last_vertex).is_none() {
            log::warn!(
                "Body {body_index}: vertex offset {vertex_offset} overflows the u32 index \
                 range; global indices wrap"
            );
        }
        let global_indices = local_indices
            .iter()
            .map(|&i| i.wrapping_add(vertex_offset))
            .collect();
        let line_indices = line_indices(sectors, stacks);

        Self {
            radius: coerced_radius,
            sector_count: sectors,
            stack_count: stacks,
            body_index,
            vertex_offset,
            positions,
            normals,
            tex_coords,
            local_indices,
            global_indices,
            line_indices,
        }
    }

    /// Effective (coerced) radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Effective (coerced) number of longitude slices.
    pub fn sector_count(&self) -> u32 {
        self.sector_count
    }

    /// Effective (coerced) number of latitude bands.
    pub fn stack_count(&self) -> u32 {
        self.stack_count
    }

    /// Ordinal position of this body in its batch.
    pub fn body_index(&self) -> u32 {
        self.body_index
    }

    /// Offset added to every local index to form the global indices.
    pub fn vertex_offset(&self) -> u32 {
        self.vertex_offset
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn tex_coords(&self) -> &[Vec2] {
        &self.tex_coords
    }

    /// Triangle list over this body's own vertices.
    pub fn local_indices(&self) -> &[u32] {
        &self.local_indices
    }

    /// Triangle list over the shared batch vertex buffer.
    pub fn global_indices(&self) -> &[u32] {
        &self.global_indices
    }

    /// Line list over this body's own vertices, for wireframe rendering.
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    pub fn index_count(&self) -> usize {
        self.local_indices.len()
    }

    pub fn line_index_count(&self) -> usize {
        self.line_indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.local_indices.len() / 3
    }

    /// Byte stride of one interleaved vertex (always 32).
    pub fn interleaved_stride(&self) -> usize {
        SphereVertex::STRIDE
    }

    /// Size of this body's interleaved vertex block in bytes.
    pub fn interleaved_size(&self) -> usize {
        self.vertex_count() * SphereVertex::STRIDE
    }

    /// Size of this body's index list in bytes.
    pub fn index_size(&self) -> usize {
        self.index_count() * std::mem::size_of::<u32>()
    }

    /// Walk the three attribute arrays in lockstep, yielding packed vertices.
    pub fn interleaved(&self) -> impl Iterator<Item = SphereVertex> + '_ {
        self.positions
            .iter()
            .zip(&self.normals)
            .zip(&self.tex_coords)
            .map(|((&p, &n), &uv)| SphereVertex::new(p, n, uv))
    }

    /// Append this body's interleaved vertices to a shared buffer.
    pub fn append_interleaved(&self, out: &mut Vec<SphereVertex>) {
        out.reserve(self.vertex_count());
        out.extend(self.interleaved());
    }
}

impl fmt::Display for SphereMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sphere #{}: radius {}, {}x{} grid, {} vertices, {} triangles, {} indices, {} line indices",
            self.body_index,
            self.radius,
            self.sector_count,
            self.stack_count,
            self.vertex_count(),
            self.triangle_count(),
            self.index_count(),
            self.line_index_count(),
        )
    }
}

/// Build one body and append it to the shared batch sequences.
///
/// Global indices are offset by `body_index * batch_vertex_stride`, so the
/// stride must equal `(sector_count + 1) * (stack_count + 1)` for the
/// resolution used by every body in the batch. A mismatch is logged; the
/// geometry is still appended. Prefer [`crate::SphereBatch`], which derives
/// offsets from the vertices actually written.
pub fn build_sphere(
    radius: f32,
    sector_count: u32,
    stack_count: u32,
    body_index: u32,
    batch_vertex_stride: u32,
    shared_indices: &mut Vec<u32>,
    shared_vertices: &mut Vec<SphereVertex>,
) -> SphereMesh {
    let vertex_offset = body_index
        .checked_mul(batch_vertex_stride)
        .unwrap_or_else(|| {
            log::warn!(
                "Body {body_index}: offset {body_index} * {batch_vertex_stride} overflows \
                 the u32 index range; wrapping"
            );
            body_index.wrapping_mul(batch_vertex_stride)
        });
    let mesh = SphereMesh::with_offset(radius, sector_count, stack_count, body_index, vertex_offset);

    if mesh.vertex_count() != batch_vertex_stride as usize {
        log::warn!(
            "Body {body_index}: batch vertex stride {batch_vertex_stride} does not match \
             {} generated vertices; global indices will address the wrong body",
            mesh.vertex_count()
        );
    }

    shared_indices.extend_from_slice(&mesh.global_indices);
    mesh.append_interleaved(shared_vertices);
    mesh
}

/// Generate positions, normals and texture coordinates in stack-major order.
fn generate_grid(radius: f32, sectors: u32, stacks: u32) -> (Vec<Vec3>, Vec<Vec3>, Vec<Vec2>) {
    let count = ((sectors + 1) * (stacks + 1)) as usize;
    let mut positions = Vec::with_capacity(count);
    let mut normals = Vec::with_capacity(count);
    let mut tex_coords = Vec::with_capacity(count);

    let sector_step = TAU / sectors as f32;
    let stack_step = PI / stacks as f32;
    let length_inv = 1.0 / radius;

    for i in 0..=stacks {
        // phi runs from pi/2 down to -pi/2
        let phi = FRAC_PI_2 - i as f32 * stack_step;
        let xz = radius * phi.cos();
        let y = -radius * phi.sin();

        for j in 0..=sectors {
            let theta = j as f32 * sector_step;
            let position = Vec3::new(-xz * theta.cos(), y, xz * theta.sin());

            positions.push(position);
            normals.push(position * length_inv);
            tex_coords.push(Vec2::new(
                j as f32 / sectors as f32,
                i as f32 / stacks as f32,
            ));
        }
    }

    (positions, normals, tex_coords)
}

/// Triangle list over the grid, skipping the degenerate half of each pole quad.
fn triangle_indices(sectors: u32, stacks: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity((6 * sectors * (stacks - 1)) as usize);

    for i in 0..stacks {
        let mut k1 = i * (sectors + 1);
        let mut k2 = k1 + sectors + 1;

        for _ in 0..sectors {
            if i != 0 {
                indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    indices
}

/// Line list: a meridian segment per cell, plus a parallel segment per cell
/// on every ring below the top pole.
fn line_indices(sectors: u32, stacks: u32) -> Vec<u32> {
    let mut indices = Vec::with_capacity((2 * sectors * (2 * stacks - 1)) as usize);

    for i in 0..stacks {
        let mut k1 = i * (sectors + 1);
        let mut k2 = k1 + sectors + 1;

        for _ in 0..sectors {
            indices.extend_from_slice(&[k1, k2]);
            if i != 0 {
                indices.extend_from_slice(&[k1, k1 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    indices
}
