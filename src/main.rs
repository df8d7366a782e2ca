use clap::Parser;
use glance::core::config::{self, CliOverrides, ResolvedConfig};
use glance::core::document::Document;
use glance::core::state::App;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "glance", about = "Read-only terminal text viewer")]
struct Args {
    /// File to view
    file: PathBuf,

    /// Read settings from this file instead of ~/.glance/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the debug log here
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Lines scrolled per mouse wheel notch
    #[arg(long)]
    wheel_lines: Option<usize>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    }
    .unwrap_or_else(|e| {
        eprintln!("glance: {e}, using defaults");
        config::GlanceConfig::default()
    });
    let cli = CliOverrides {
        wheel_lines: args.wheel_lines,
        log_file: args.log_file.clone(),
    };
    let resolved = config::resolve(&file_config, &cli);

    init_logging(&resolved);
    log::info!("Glance starting up on {}", args.file.display());
    log::debug!("Resolved config: {:?}", resolved);

    let document = match Document::load(&args.file) {
        Ok(document) => document,
        Err(e) => {
            log::error!("{e}");
            eprintln!("glance: {e}");
            return ExitCode::FAILURE;
        }
    };

    let app = App::new(document, args.file.display().to_string());
    if let Err(e) = glance::tui::run(app, &resolved) {
        log::error!("Terminal error: {e}");
        eprintln!("glance: terminal error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// File logger; the terminal itself belongs to the TUI while running.
fn init_logging(resolved: &ResolvedConfig) {
    let Some(path) = &resolved.log_file else {
        return;
    };
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }
}
