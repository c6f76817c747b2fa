use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use foundation::math::DEFAULT_GLOBE_RADIUS;
use formats::DEFAULT_SCENE_FILE_NAME;
use runtime::{ControllerConfig, DEFAULT_DRAG_SENSITIVITY, DEFAULT_ZOOM_STEP, SessionConfig};
use scene::CameraLimits;
use streaming::{DEFAULT_TILE_ZOOM, OSM_TILE_URL_TEMPLATE};

#[derive(Parser, Debug)]
#[command(author, version, about = "Place markers, routes and annotations on a 3D globe")]
pub struct Args {
    /// Scene file (default: $GLOBE_DATA_FILE, then globe_scene.json)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Keep the scene in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drive an interactive session from an input script (stdin by default)
    Run(RunArgs),

    /// Print the scene-space position of a coordinate
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long, default_value_t = DEFAULT_GLOBE_RADIUS)]
        radius: f64,
    },

    /// Fetch the map tile containing a coordinate
    Tile {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,

        #[arg(long, default_value_t = DEFAULT_TILE_ZOOM)]
        zoom: u8,

        /// Output image (default: tile_{z}_{x}_{y}.png)
        #[arg(long)]
        out: Option<PathBuf>,

        /// URL template with {z}/{x}/{y} (default: $GLOBE_TILE_URL, then OpenStreetMap)
        #[arg(long)]
        url_template: Option<String>,
    },
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Input script; one event per line
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Zoom change per scroll step
    #[arg(long, default_value_t = DEFAULT_ZOOM_STEP)]
    pub zoom_step: f64,

    /// Camera degrees per dragged pixel
    #[arg(long, default_value_t = DEFAULT_DRAG_SENSITIVITY)]
    pub drag_sensitivity: f64,

    /// Clamp zoom from below (unbounded if unset)
    #[arg(long, allow_hyphen_values = true)]
    pub min_zoom: Option<f64>,

    /// Clamp zoom from above (unbounded if unset)
    #[arg(long, allow_hyphen_values = true)]
    pub max_zoom: Option<f64>,

    /// Clamp pitch to [-MAX_PITCH, MAX_PITCH] degrees
    #[arg(long)]
    pub max_pitch: Option<f64>,
}

impl Args {
    pub fn data_file(&self) -> PathBuf {
        self.data_file.clone().unwrap_or_else(|| {
            env::var("GLOBE_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCENE_FILE_NAME))
        })
    }
}

pub fn tile_url_template(arg: Option<String>) -> String {
    arg.unwrap_or_else(|| {
        env::var("GLOBE_TILE_URL").unwrap_or_else(|_| OSM_TILE_URL_TEMPLATE.to_string())
    })
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            script: None,
            zoom_step: DEFAULT_ZOOM_STEP,
            drag_sensitivity: DEFAULT_DRAG_SENSITIVITY,
            min_zoom: None,
            max_zoom: None,
            max_pitch: None,
        }
    }
}

impl RunArgs {
    pub fn session_config(&self) -> SessionConfig {
        let zoom = match (self.min_zoom, self.max_zoom) {
            (None, None) => None,
            (min, max) => Some((
                min.unwrap_or(f64::NEG_INFINITY),
                max.unwrap_or(f64::INFINITY),
            )),
        };
        let pitch_deg = self.max_pitch.map(|p| (-p.abs(), p.abs()));

        SessionConfig {
            controller: ControllerConfig {
                zoom_step: self.zoom_step,
                drag_sensitivity: self.drag_sensitivity,
                limits: CameraLimits { pitch_deg, zoom },
                ..ControllerConfig::default()
            },
            ..SessionConfig::default()
        }
    }
}
