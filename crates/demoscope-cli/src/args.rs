use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "demoscope")]
#[command(about = "Explore democratic-health indicators in a terminal dashboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the dataset snapshot (JSON document with a "countries" array)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// URL of the world-geometry document used by the map view
    #[arg(long)]
    pub geometry_url: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(long, default_value = "demoscope.toml")]
    pub config: PathBuf,
}
