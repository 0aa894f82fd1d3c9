//! Celestial body placement: the body table, static alignment, circular
//! orbits, and the per-instance model matrix buffer consumed by the
//! instanced draw.

pub mod alignment;
pub mod bodies;
pub mod instance;
pub mod orbit;
pub mod transforms;

pub use alignment::{DEFAULT_ALIGN_AXIS, align_bodies, aligned_matrix, apply_scale};
pub use bodies::{BodyTable, CelestialBody, DEFAULT_CLEARANCE};
pub use instance::{
    MODEL_COLUMN_BASE_LOCATION, MODEL_INSTANCE_ATTRIBUTES, MODEL_INSTANCE_LAYOUT, ModelInstance,
};
pub use orbit::{compute_orbit, orbit_direction, orbit_matrix};
pub use transforms::{BodyTransforms, MotionMode};
