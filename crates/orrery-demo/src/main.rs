//! Headless driver for the orrery.
//!
//! Loads `config.ron`, builds the sphere batch for every body, then steps the
//! body transforms for a fixed number of frames and logs what a renderer
//! would upload. Run with `cargo run -p orrery-demo -- --mode orbit`.

mod clock;
mod live_config;
mod scene;

use clap::Parser;
use clock::FrameClock;
use live_config::LiveConfig;
use orrery_config::{CliArgs, Config};
use scene::{Scene, motion_mode};
use tracing::{debug, info, warn};

/// Frames between config hot-reload checks.
const RELOAD_INTERVAL: u32 = 120;

fn main() {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => Config::default_dir().unwrap_or_else(|_| std::path::PathBuf::from(".")),
    };

    let file_config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    let mut live = LiveConfig::new(file_config, &args);
    let config = live.effective();

    let log_dir = config_dir.join("logs");
    orrery_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(config));

    info!(
        config_dir = %config_dir.display(),
        mode = ?config.motion.mode,
        frames = config.debug.frames,
        "Orrery starting"
    );

    let mut scene = Scene::from_config(config);
    let mut clock = FrameClock::new();
    let frames = config.debug.frames;

    for frame in 0..frames {
        let t = if frame == 0 {
            clock.time()
        } else {
            clock.tick(live.effective().motion.time_scale)
        };
        let recomputed = scene.transforms.update(t);

        if recomputed > 0 {
            debug!(
                frame,
                t,
                recomputed,
                instance_bytes = scene.transforms.instance_bytes().len(),
                "Transforms updated"
            );
        }

        if frame > 0 && frame % RELOAD_INTERVAL == 0 {
            reload_motion(&mut live, &config_dir, &args, &mut scene);
        }
    }

    for (k, (body, matrix)) in scene
        .table
        .iter()
        .zip(scene.transforms.matrices())
        .enumerate()
    {
        let position = matrix.transform_point3(glam::Vec3::ZERO);
        let range = scene.batch.range(k as u32);
        info!(
            body = %body.name,
            x = position.x,
            y = position.y,
            z = position.z,
            indices = ?range.map(|r| r.index_range()),
            "Final placement"
        );
    }

    info!("Orrery finished");
}

/// Pick up motion changes from `config.ron` without rebuilding the batch.
fn reload_motion(
    live: &mut LiveConfig,
    config_dir: &std::path::Path,
    args: &CliArgs,
    scene: &mut Scene,
) {
    match live.poll(config_dir, args) {
        Ok(Some(previous)) => {
            let motion = &live.effective().motion;
            if *motion != previous.motion {
                info!(
                    mode = ?motion.mode,
                    time_scale = motion.time_scale,
                    "Motion settings changed"
                );
                scene.transforms.set_mode(motion_mode(motion));
            }
        }
        Ok(None) => {}
        Err(e) => warn!("Config reload failed: {e}"),
    }
}
