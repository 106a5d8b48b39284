//! Align Layout CLI
//!
//! Usage:
//!   align-layout [OPTIONS] [SCENE]
//!
//! Options:
//!   -l, --list               List available scenes
//!   -s, --stylesheet <FILE>  Stylesheet file for fill colors (TOML format)
//!   -c, --config <FILE>      Layout configuration file (TOML format)
//!   -d, --debug              Log the computed layout
//!   -h, --help               Print help

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{error, LevelFilter};

use align_layout::{render_scene, scene_names, LayoutConfig, RenderConfig, Stylesheet};

#[derive(Parser)]
#[command(name = "align-layout")]
#[command(about = "Render relative-alignment layout scenes to SVG")]
struct Cli {
    /// Scene to render
    scene: Option<String>,

    /// List available scenes
    #[arg(short, long)]
    list: bool,

    /// Stylesheet file for fill colors (TOML format)
    #[arg(short, long)]
    stylesheet: Option<PathBuf>,

    /// Layout configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Debug mode: log every placed box
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.debug {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    if cli.list {
        for name in scene_names() {
            println!("{}", name);
        }
        return;
    }

    let Some(scene) = cli.scene else {
        eprintln!(
            "Usage: align-layout [OPTIONS] <SCENE>\nScenes: {}",
            scene_names().join(", ")
        );
        process::exit(2);
    };

    let stylesheet = match &cli.stylesheet {
        Some(path) => match Stylesheet::from_file(path) {
            Ok(s) => s,
            Err(e) => {
                error!("Error loading stylesheet '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => Stylesheet::default(),
    };

    let layout = match &cli.config {
        Some(path) => match LayoutConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                error!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => LayoutConfig::default(),
    };

    let config = RenderConfig::new()
        .with_layout(layout)
        .with_stylesheet(stylesheet)
        .with_debug(cli.debug);
    match render_scene(&scene, &config) {
        Ok(svg) => {
            println!("{}", svg);
        }
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
