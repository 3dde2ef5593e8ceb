//! Folio: single-page developer portfolio.
//!
//! Usage:
//!   folio [--config folio.toml] [--content content.toml]
//!   folio --export site/index.html

use std::path::PathBuf;

use chrono::Datelike;
use clap::Parser;
use eframe::egui;

use folio::{FolioConfig, FolioError, Portfolio, Result};

mod app;

use app::PortfolioApp;

#[derive(Parser, Debug)]
#[command(name = "folio", about = "Single-page developer portfolio", version)]
struct Cli {
    /// TOML config file (window, scene and site settings)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TOML content file; overrides `site.content` from the config
    #[arg(long)]
    content: Option<PathBuf>,

    /// Write a static HTML page to this path instead of opening a window
    #[arg(long)]
    export: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match FolioConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            init_logger(cli.verbose, "info");
            log::error!("failed to load config: {e}");
            eprintln!("{e}");
            std::process::exit(2);
        }
    };
    init_logger(cli.verbose, &config.site.log_level);
    log::debug!("cli: {cli:?}");

    if let Err(e) = run(&cli, config) {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// RUST_LOG wins over the configured default.
fn init_logger(verbose: bool, default_level: &str) {
    let level = if verbose { "debug" } else { default_level };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .try_init();
}

fn run(cli: &Cli, config: FolioConfig) -> Result<()> {
    let content_path = cli.content.as_deref().or(config.site.content.as_deref());
    let portfolio = Portfolio::load(content_path)?;
    log::info!(
        "loaded portfolio for {}: {} projects, {} skills, {} roles",
        portfolio.profile.name,
        portfolio.projects.len(),
        portfolio.skills.len(),
        portfolio.roles.len()
    );

    let year = chrono::Local::now().year();

    if let Some(out) = &cli.export {
        let html = folio::render::html::render_document(&portfolio, &config.site.resume_href()?, year);
        if let Some(dir) = out.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(out, html)?;
        log::info!("exported static page to {}", out.display());
        println!("Exported {}", out.display());
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&config.window.title)
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let title = config.window.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(PortfolioApp::new(cc, portfolio, config, year)))),
    )
    .map_err(|e| FolioError::Window {
        message: e.to_string(),
    })
}
