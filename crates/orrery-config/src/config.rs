//! Configuration structs with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Sphere tessellation settings.
    pub mesh: MeshConfig,
    /// Body placement settings.
    pub motion: MotionConfig,
    /// Body table. Empty means the built-in solar system.
    pub bodies: Vec<BodyConfig>,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Tessellation shared by every body in the batch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MeshConfig {
    /// Longitude slices per sphere (minimum 3).
    pub sector_count: u32,
    /// Latitude bands per sphere (minimum 2).
    pub stack_count: u32,
}

/// How bodies are placed each frame.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum,
)]
pub enum MotionKind {
    /// Bodies lined up along `align_axis`, computed once.
    #[default]
    Static,
    /// Bodies on circular orbits driven by elapsed time.
    Orbit,
}

/// Body placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionConfig {
    /// Static layout or orbit.
    pub mode: MotionKind,
    /// Direction bodies are laid out along in static mode.
    pub align_axis: [f32; 3],
    /// Multiplier from elapsed seconds to orbit time.
    pub time_scale: f64,
}

/// One body of the table. The first entry is the central body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BodyConfig {
    /// Display name.
    pub name: String,
    /// Body radius in scene units.
    pub radius: f64,
    /// Gap between the central body's surface and this body.
    pub gap: f64,
    /// Clearance added on top of the gap.
    pub clearance: f64,
    /// Uniform model scale.
    pub scale: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Frames to simulate in a headless run.
    pub frames: u32,
    /// Log a summary line for every tessellated body.
    pub print_mesh_info: bool,
}

// --- Default implementations ---

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            sector_count: 36,
            stack_count: 18,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            mode: MotionKind::Static,
            align_axis: [1.0, 0.0, 1.0],
            time_scale: 1.0,
        }
    }
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            radius: 1.0,
            gap: 0.0,
            clearance: 25.0,
            scale: 1.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            frames: 600,
            print_mesh_info: false,
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Default per-user config directory (`<config_dir>/orrery`).
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|d| d.join("orrery"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if new_config != *self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
