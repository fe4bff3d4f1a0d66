use std::path::PathBuf;

use crate::prelude::{eprintln, *};
use clap::Parser;
use namescan_core::ScanConfig;

mod config;
mod error;
mod input;
mod lines;
mod name;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Rebuild the reading order of OCR word boxes and find the patient name that follows a title marker"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, Default, clap::Args)]
pub struct Global {
    /// TOML file providing `y_tol` and `markers`
    #[clap(long, env = "NAMESCAN_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Line bucket height, in page-relative units [default: 0.005]
    #[clap(long, env = "NAMESCAN_Y_TOL", global = true)]
    y_tol: Option<f64>,

    /// Title marker, highest priority first (repeat or comma-separate)
    #[clap(
        long = "marker",
        env = "NAMESCAN_MARKERS",
        global = true,
        value_delimiter = ','
    )]
    markers: Vec<String>,

    /// Whether to display additional information.
    #[clap(long, env = "NAMESCAN_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

impl Global {
    /// The effective scan configuration for this invocation.
    pub fn scan_config(&self) -> Result<ScanConfig> {
        let config = crate::config::resolve(self.config.as_deref(), self.y_tol, &self.markers)
            .wrap_err("Invalid configuration")?;

        log::debug!("Effective configuration: {config:?}");
        if self.verbose {
            eprintln!("y_tol: {}", config.y_tol);
            eprintln!("markers: {}", config.markers.join(", "));
        }

        Ok(config)
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Extract the patient name from an OCR document
    Name(crate::name::App),

    /// Print the reconstructed text lines of an OCR document
    Lines(crate::lines::App),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Name(sub_app) => crate::name::run(sub_app, app.global),
        SubCommands::Lines(sub_app) => crate::lines::run(sub_app, app.global),
    }
}
