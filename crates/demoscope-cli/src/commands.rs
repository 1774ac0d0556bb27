use anyhow::{bail, Context, Result};
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use demoscope_runtime::Config;

use crate::args::Cli;
use crate::tui;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;

    let data_path = config.resolve_data_path(cli.data.as_deref());
    let geometry_url = config.resolve_geometry_url(cli.geometry_url.as_deref());

    if !std::io::stdout().is_terminal() {
        bail!("demoscope is interactive and needs a terminal (stdout is not a tty)");
    }

    if !data_path.exists() {
        eprintln!(
            "{} dataset not found at {}; the dashboard will show the load failure inline",
            "warning:".yellow().bold(),
            data_path.display()
        );
    }

    tui::run(data_path, geometry_url)
}
