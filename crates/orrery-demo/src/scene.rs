//! Builds the body table, sphere batch, and transform tracker from config.

use glam::Vec3;
use orrery_config::{BodyConfig, Config, MotionConfig, MotionKind};
use orrery_mesh::SphereBatch;
use orrery_space::{BodyTable, BodyTransforms, CelestialBody, MotionMode};
use tracing::info;

/// Everything a renderer needs to draw one frame of the system.
pub struct Scene {
    pub table: BodyTable,
    pub batch: SphereBatch,
    pub transforms: BodyTransforms,
}

impl Scene {
    pub fn from_config(config: &Config) -> Self {
        let table = body_table(&config.bodies);
        let batch = build_batch(&table, config);
        let transforms = BodyTransforms::new(&table, motion_mode(&config.motion));
        Self {
            table,
            batch,
            transforms,
        }
    }
}

/// Body table from config entries, or the solar system when none are given.
pub fn body_table(bodies: &[BodyConfig]) -> BodyTable {
    if bodies.is_empty() {
        return BodyTable::solar_system();
    }
    bodies
        .iter()
        .map(|b| CelestialBody {
            name: b.name.clone(),
            radius: b.radius,
            gap: b.gap,
            clearance: b.clearance,
            scale: b.scale,
        })
        .collect()
}

pub fn motion_mode(motion: &MotionConfig) -> MotionMode {
    match motion.mode {
        MotionKind::Static => MotionMode::Static {
            axis: Vec3::from_array(motion.align_axis),
        },
        MotionKind::Orbit => MotionMode::Orbit,
    }
}

/// One sphere per body, all tessellated at the central body's radius.
///
/// Each body's model scale sets its on-screen size, so body `k` is drawn
/// with its batch index range and instance `k`.
pub fn build_batch(table: &BodyTable, config: &Config) -> SphereBatch {
    let radius = table.central().map_or(1.0, |c| c.radius as f32);
    let (sectors, stacks) = (config.mesh.sector_count, config.mesh.stack_count);

    let mut batch = SphereBatch::with_capacity(table.len(), sectors, stacks);
    for body in table {
        let range = batch.add_body(radius, sectors, stacks);
        if config.debug.print_mesh_info {
            info!(
                body = %body.name,
                vertices = range.vertex_count,
                indices = range.index_count,
                first_index = range.index_offset,
                "Body mesh"
            );
        }
    }

    info!(
        bodies = batch.body_count(),
        vertices = batch.vertex_count(),
        triangles = batch.triangle_count(),
        vertex_bytes = batch.vertex_bytes().len(),
        index_bytes = batch.index_bytes().len(),
        "Sphere batch built"
    );
    batch
}
