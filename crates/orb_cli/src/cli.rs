use clap::{Parser, ValueEnum};
use log::LevelFilter;
use orb_renderer::SceneKind;

/// Log levels selectable on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SceneArg {
    /// Ground, three feature spheres and a field of small random spheres
    Cover,
    /// Ground and the three feature spheres only
    Showcase,
}

impl From<SceneArg> for SceneKind {
    fn from(scene: SceneArg) -> Self {
        match scene {
            SceneArg::Cover => SceneKind::Cover,
            SceneArg::Showcase => SceneKind::Showcase,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "orb")]
#[command(about = "Render a sphere scene with a Monte Carlo path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Image width divided by height
    #[arg(long, default_value_t = 16.0 / 9.0)]
    pub aspect_ratio: f64,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value_t = 500)]
    pub samples_per_pixel: u32,

    /// Maximum number of bounces per path
    #[arg(long, default_value_t = 50)]
    pub max_depth: u32,

    /// Fixed seed for scene layout and sampling
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = SceneArg::Cover)]
    pub scene: SceneArg,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    pub vfov: f64,

    /// Lens diameter; 0 disables depth of field
    #[arg(long, default_value_t = 0.1)]
    pub aperture: f64,

    /// Distance to the plane of perfect focus
    #[arg(long, default_value_t = 10.0)]
    pub focus_dist: f64,

    /// Output PNG path
    #[arg(short, long, default_value = "image.png")]
    pub output: String,

    /// Logging level (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}
