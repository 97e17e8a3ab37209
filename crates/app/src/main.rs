//! CinePrompt - compose cinematic image-generator prompts from a shot description

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use cineprompt_config::OutputFormat;
use cineprompt_engine::{Catalog, PromptEngine, ShotSession, angle_display_string};
use cineprompt_ipc::{PromptOutput, ShotConfig};
use clap::{Parser, Subcommand};
use tracing::{debug, error, info};

mod config;
mod error;

use config::RunConfig;
use error::AppError;

#[derive(Parser)]
#[command(name = "cineprompt")]
#[command(about = "Compose cinematic image-generator prompts", long_about = None)]
struct Cli {
    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a prompt from a shot snapshot (JSON)
    Compose {
        /// Snapshot file; stdin when omitted. Missing fields take defaults
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Replacement reference tables (JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Print the tagged segments, one per line, after the prompt
        #[arg(long)]
        segments: bool,
    },

    /// List the camera presets
    Presets {
        /// Replacement reference tables (JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Print the default shot snapshot as JSON
    Defaults,

    /// Run an interactive session: one UI message (JSON) per stdin line,
    /// one reply per stdout line
    Session {
        /// Replacement reference tables (JSON)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let config = RunConfig::from_env(cli.json);

    match run(cli.command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so stdout carries only the prompt
fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cineprompt=info,cineprompt_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands, config: &RunConfig) -> Result<(), AppError> {
    match command {
        Commands::Compose {
            input,
            catalog,
            segments,
        } => {
            let custom = load_engine(catalog.as_deref())?;
            let engine = custom.as_ref().unwrap_or_else(|| PromptEngine::builtin());

            let mut shot = read_shot(input.as_deref())?;
            config.apply_to(&mut shot);
            info!(
                "Composing prompt ({})",
                angle_display_string(shot.camera.azimuth, shot.camera.elevation, shot.camera.roll)
            );

            match engine.catalog().aspect_ratio(&shot.scene.aspect_ratio) {
                Some(ratio) => debug!("Framing {} ({}x{})", ratio.name, ratio.width, ratio.height),
                None => debug!("Aspect ratio '{}' is not a catalog entry", shot.scene.aspect_ratio),
            }

            let output = engine.compose(&shot);
            print_output(&output, config.output, segments)
        }
        Commands::Presets { catalog } => {
            let custom = load_engine(catalog.as_deref())?;
            let engine = custom.as_ref().unwrap_or_else(|| PromptEngine::builtin());
            let presets = &engine.catalog().camera_presets;

            let mut stdout = std::io::stdout().lock();
            match config.output {
                OutputFormat::Json => {
                    writeln!(stdout, "{}", serde_json::to_string_pretty(presets)?)?;
                }
                OutputFormat::Text => {
                    for preset in presets {
                        let angles = preset.angles;
                        writeln!(
                            stdout,
                            "{:<14} {:<22} {}",
                            preset.id,
                            preset.name,
                            angle_display_string(angles.azimuth, angles.elevation, angles.roll)
                        )?;
                    }
                }
            }
            Ok(())
        }
        Commands::Defaults => {
            let shot = ShotConfig::default();
            writeln!(std::io::stdout(), "{}", serde_json::to_string_pretty(&shot)?)?;
            Ok(())
        }
        Commands::Session { catalog } => {
            let custom = load_engine(catalog.as_deref())?;
            let engine = custom.as_ref().unwrap_or_else(|| PromptEngine::builtin());
            run_session(engine, config)
        }
    }
}

/// Build an engine over replacement tables, `None` for the built-in ones
fn load_engine(path: Option<&Path>) -> Result<Option<PromptEngine>, AppError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text = read_file(path)?;
    let catalog = Catalog::from_json(&text)?;
    info!("Loaded reference tables from {}", path.display());
    Ok(Some(PromptEngine::with_catalog(catalog)?))
}

fn read_file(path: &Path) -> Result<String, AppError> {
    std::fs::read_to_string(path).map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_shot(path: Option<&Path>) -> Result<ShotConfig, AppError> {
    let text = match path {
        Some(path) => read_file(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    if text.trim().is_empty() {
        debug!("Empty snapshot, using defaults");
        return Ok(ShotConfig::default());
    }
    Ok(serde_json::from_str(&text)?)
}

fn print_output(
    output: &PromptOutput,
    format: OutputFormat,
    with_segments: bool,
) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    match format {
        OutputFormat::Json => {
            writeln!(stdout, "{}", serde_json::to_string_pretty(output)?)?;
        }
        OutputFormat::Text => {
            writeln!(stdout, "{}", output.prompt)?;
            if with_segments {
                writeln!(stdout)?;
                for segment in &output.segments {
                    writeln!(stdout, "[{}] {}", segment.segment_type.as_str(), segment.content)?;
                }
            }
        }
    }
    Ok(())
}

fn run_session(engine: &PromptEngine, config: &RunConfig) -> Result<(), AppError> {
    let mut shot = ShotConfig::default();
    config.apply_to(&mut shot);
    let mut session = ShotSession::with_shot(engine, shot);
    info!("Session started, reading messages from stdin");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = session.handle_json(&line)?;
        writeln!(stdout, "{}", reply)?;
        stdout.flush()?;
    }
    info!("Session closed");
    Ok(())
}
