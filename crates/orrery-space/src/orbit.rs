//! Circular orbits in the XZ plane.
//!
//! All bodies share one angular phase: at time `t` every orbiting body sits
//! on the ray `(sin t, 0, cos t)` at its own distance, so the bodies stay
//! collinear with the origin. There is no per-body period and no integrated
//! state; each frame is a pure function of `t`.

use glam::{Mat4, Vec3};

use crate::alignment::apply_scale;

/// Unit direction of the shared orbital phase at time `t` (seconds).
pub fn orbit_direction(t: f64) -> Vec3 {
    Vec3::new(t.sin() as f32, 0.0, t.cos() as f32)
}

/// Model matrix of one orbiting body at time `t`.
pub fn orbit_matrix(t: f64, distance: f32, scale: f32) -> Mat4 {
    let dir = orbit_direction(t);
    let translation = Vec3::new(dir.x * distance, 0.0, dir.z * distance);
    apply_scale(Mat4::from_translation(translation), scale)
}

/// Model matrices of every body at time `t`.
///
/// Body 0 gets the identity. Body `k` orbits at `distances[k]` and is scaled
/// by `scales[k]` (1 when the scale table is shorter).
pub fn compute_orbit(t: f64, distances: &[f32], scales: &[f32]) -> Vec<Mat4> {
    distances
        .iter()
        .enumerate()
        .map(|(k, &distance)| {
            if k == 0 {
                Mat4::IDENTITY
            } else {
                orbit_matrix(t, distance, scales.get(k).copied().unwrap_or(1.0))
            }
        })
        .collect()
}
