//! Sphere meshing: UV sphere tessellation, interleaved vertex packing, and
//! batching of many bodies into one shared vertex/index buffer pair.

pub mod batch;
pub mod sphere;
pub mod vertex;
pub mod vertex_format;

pub use batch::{BatchLayout, BodyRange, SphereBatch};
pub use sphere::{
    MIN_RADIUS, MIN_SECTOR_COUNT, MIN_STACK_COUNT, SphereMesh, build_sphere, coerce_radius,
    coerce_sector_count, coerce_stack_count,
};
pub use vertex::{FLOATS_PER_VERTEX, SphereVertex};
pub use vertex_format::{SPHERE_VERTEX_ATTRIBUTES, SPHERE_VERTEX_LAYOUT, sphere_vertex_buffer_layout};
