//! Static alignment: every body laid out along one fixed direction.

use glam::{Mat4, Vec3};

/// Default layout direction: the XZ diagonal.
///
/// Used as-is (not normalized), so a body at distance `d` lands at `(d, 0, d)`.
pub const DEFAULT_ALIGN_AXIS: Vec3 = Vec3::new(1.0, 0.0, 1.0);

/// Right-multiply a uniform scale onto `matrix`.
pub fn apply_scale(matrix: Mat4, factor: f32) -> Mat4 {
    matrix * Mat4::from_scale(Vec3::splat(factor))
}

/// Model matrix of one aligned body: `translate(axis * distance) * scale`.
pub fn aligned_matrix(axis: Vec3, distance: f32, scale: f32) -> Mat4 {
    apply_scale(Mat4::from_translation(axis * distance), scale)
}

/// Lay bodies out along `axis`.
///
/// Body 0 gets the identity. Body `k` is translated by `axis * distances[k]`
/// and scaled by `scales[k]` (1 when the scale table is shorter). The result
/// has one matrix per distance entry and depends only on the inputs.
pub fn align_bodies(distances: &[f32], scales: &[f32], axis: Vec3) -> Vec<Mat4> {
    distances
        .iter()
        .enumerate()
        .map(|(k, &distance)| {
            if k == 0 {
                Mat4::IDENTITY
            } else {
                aligned_matrix(axis, distance, scales.get(k).copied().unwrap_or(1.0))
            }
        })
        .collect()
}
