//! Frame-to-frame owner of the body matrix array.
//!
//! [`BodyTransforms`] keeps the matrices for the current frame plus a dirty
//! flag per body. A body is recomputed only when its parameters changed, the
//! motion mode changed, or (in orbit mode) the frame time advanced. The
//! result is always identical to a full rebuild with [`align_bodies`] or
//! [`compute_orbit`].
//!
//! [`align_bodies`]: crate::align_bodies
//! [`compute_orbit`]: crate::compute_orbit

use glam::{Mat4, Vec3};

use crate::alignment::aligned_matrix;
use crate::bodies::BodyTable;
use crate::instance::ModelInstance;
use crate::orbit::orbit_matrix;

/// How non-central bodies are placed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MotionMode {
    /// Fixed layout along `axis`, computed once.
    Static { axis: Vec3 },
    /// Circular orbit driven by frame time.
    Orbit,
}

impl Default for MotionMode {
    fn default() -> Self {
        MotionMode::Static {
            axis: crate::alignment::DEFAULT_ALIGN_AXIS,
        }
    }
}

/// Matrix array for the current frame, with per-body change tracking.
#[derive(Clone, Debug)]
pub struct BodyTransforms {
    mode: MotionMode,
    distances: Vec<f32>,
    scales: Vec<f32>,
    instances: Vec<ModelInstance>,
    dirty: Vec<bool>,
    last_time: Option<f64>,
}

impl BodyTransforms {
    /// Track every body of `table`. Nothing is computed until the first
    /// [`update`](Self::update).
    pub fn new(table: &BodyTable, mode: MotionMode) -> Self {
        Self::from_tables(table.distances(), table.scales(), mode)
    }

    /// Track bodies given directly as distance and scale tables.
    ///
    /// The body count is `distances.len()`; missing scales default to 1.
    pub fn from_tables(distances: Vec<f32>, mut scales: Vec<f32>, mode: MotionMode) -> Self {
        let count = distances.len();
        scales.resize(count, 1.0);
        Self {
            mode,
            distances,
            scales,
            instances: vec![ModelInstance::default(); count],
            dirty: vec![true; count],
            last_time: None,
        }
    }

    pub fn mode(&self) -> MotionMode {
        self.mode
    }

    /// Switch placement mode. Every body is recomputed on the next update.
    pub fn set_mode(&mut self, mode: MotionMode) {
        if mode != self.mode {
            self.mode = mode;
            self.mark_all_dirty();
        }
    }

    /// Change one body's orbital distance. Returns `false` for unknown bodies.
    pub fn set_distance(&mut self, body: usize, distance: f32) -> bool {
        match self.distances.get_mut(body) {
            Some(d) => {
                *d = distance;
                self.dirty[body] = true;
                true
            }
            None => false,
        }
    }

    /// Change one body's scale. Returns `false` for unknown bodies.
    pub fn set_scale(&mut self, body: usize, scale: f32) -> bool {
        match self.scales.get_mut(body) {
            Some(s) => {
                *s = scale;
                self.dirty[body] = true;
                true
            }
            None => false,
        }
    }

    /// Bring the matrices up to date for frame time `t` (seconds).
    ///
    /// Static mode ignores `t`. Returns the number of bodies recomputed.
    pub fn update(&mut self, t: f64) -> usize {
        if self.mode == MotionMode::Orbit && self.last_time != Some(t) {
            // The central body never moves.
            for flag in self.dirty.iter_mut().skip(1) {
                *flag = true;
            }
        }
        self.last_time = Some(t);

        let mut recomputed = 0;
        for k in 0..self.instances.len() {
            if !self.dirty[k] {
                continue;
            }
            let matrix = self.body_matrix(k, t);
            self.instances[k] = ModelInstance::new(matrix);
            self.dirty[k] = false;
            recomputed += 1;
        }

        if recomputed > 0 {
            log::trace!("Recomputed {recomputed} body transforms at t={t:.3}");
        }
        recomputed
    }

    /// Whether `body` will be recomputed on the next update.
    pub fn is_dirty(&self, body: usize) -> bool {
        self.dirty.get(body).copied().unwrap_or(false)
    }

    pub fn body_count(&self) -> usize {
        self.instances.len()
    }

    pub fn matrix(&self, body: usize) -> Option<Mat4> {
        self.instances.get(body).map(ModelInstance::matrix)
    }

    /// The matrices for this frame, in body order.
    pub fn matrices(&self) -> Vec<Mat4> {
        self.instances.iter().map(ModelInstance::matrix).collect()
    }

    /// Per-instance records for this frame, in body order.
    pub fn instances(&self) -> &[ModelInstance] {
        &self.instances
    }

    /// Returns the instance data as a byte slice for GPU upload (zero-copy).
    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    fn body_matrix(&self, k: usize, t: f64) -> Mat4 {
        if k == 0 {
            return Mat4::IDENTITY;
        }
        let (distance, scale) = (self.distances[k], self.scales[k]);
        match self.mode {
            MotionMode::Static { axis } => aligned_matrix(axis, distance, scale),
            MotionMode::Orbit => orbit_matrix(t, distance, scale),
        }
    }

    fn mark_all_dirty(&mut self) {
        self.dirty.iter_mut().for_each(|d| *d = true);
    }
}
