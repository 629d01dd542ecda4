use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use eatery::core::catalog::catalog;
use eatery::core::config::{self, CliOverrides};
use eatery::core::deep_link::DeepLink;
use eatery::core::state::App;
use eatery::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "eatery", about = "Browse restaurants and their menus in the terminal")]
struct Args {
    /// Config file to use instead of ~/.eatery/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Screen to open on startup: restaurants, menu/<r> or details/<r>/<i>
    #[arg(short, long)]
    start: Option<DeepLink>,

    /// Resolve images against files in this directory
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, value_parser = parse_level)]
    log_level: Option<LevelFilter>,

    /// Hide image placeholders
    #[arg(long)]
    no_images: bool,

    /// Print the catalog as JSON and exit
    #[arg(long)]
    dump_catalog: bool,
}

fn parse_level(s: &str) -> Result<LevelFilter, String> {
    s.parse().map_err(|_| format!("'{s}' is not a log level"))
}

fn main() -> Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    if args.dump_catalog {
        let json = serde_json::to_string_pretty(catalog()).context("serializing catalog")?;
        println!("{json}");
        return Ok(());
    }

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => config::load_config().context("loading config")?,
    };
    let overrides = CliOverrides {
        start: args.start,
        assets_dir: args.assets_dir,
        log_level: args.log_level,
        no_images: args.no_images,
    };
    let config = config::resolve(&file_config, &overrides).context("resolving config")?;

    // File logger: the TUI owns stdout
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    log::info!("Eatery starting up at '{}'", config.start);

    let mut app = App::new(catalog());
    app.open(&config.start)
        .with_context(|| format!("opening '{}'", config.start))?;

    tui::run(app, &config).context("running terminal UI")
}
