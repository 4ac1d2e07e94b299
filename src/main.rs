mod error;
mod output;
mod prompt;
mod scene;

use clap::{Parser, Subcommand};
use error::Result;
use output::Emitter;
use scene::{Bindings, ScheduleRecord, ValidationConfig, SCHEDULE_BINDING};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scene-schedule")]
#[command(about = "Scene schedule contract for AI short-video generation", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit the example schedule as JSON
    Print {
        /// Binding to emit
        #[arg(short, long, default_value = SCHEDULE_BINDING)]
        name: String,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the scene-generation prompt
    Instructions {
        /// Voiceover text file to append to the prompt
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Parse and validate a schedule file
    Validate {
        /// Schedule JSON, optionally wrapped in a Markdown code fence
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Log the scene timeline of a schedule
    Summary {
        /// Schedule JSON; the example schedule when omitted
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the schedule, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Print {
        name: SCHEDULE_BINDING.to_string(),
        output: None,
        compact: false,
    });

    // built once, read-only afterwards
    let bindings = Bindings::new(scene::example_schedule());

    if let Err(e) = run(command, &bindings, ValidationConfig::from_env).await {
        error!("{}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Runs one subcommand. Validation settings are only loaded by the commands
/// that validate.
async fn run<F>(command: Command, bindings: &Bindings, load_config: F) -> Result<()>
where
    F: FnOnce() -> Result<ValidationConfig>,
{
    match command {
        Command::Print {
            name,
            output,
            compact,
        } => {
            // no inputs: resolve the binding and write it out
            let emitter = Emitter::new(!compact);
            match output {
                Some(path) => emitter.emit_to_file(&name, bindings, &path).await?,
                None => emitter.emit(&name, bindings, &mut std::io::stdout().lock())?,
            }
        }
        Command::Instructions { file } => {
            // optional voiceover goes after the example scene
            let voiceover = match file {
                Some(path) => Some(tokio::fs::read_to_string(&path).await?),
                None => None,
            };
            println!("{}", prompt::build_prompt(voiceover.as_deref())?);
        }
        Command::Validate { file } => {
            let config = load_config()?;
            let record = load_schedule(&file).await?;
            let report = scene::validate(&record, &config);

            // errors last
            for issue in report.warnings() {
                warn!("{}", issue);
            }
            for issue in report.errors() {
                error!("{}", issue);
            }

            let report = report.into_result()?;
            info!(
                "{} is valid: {} scenes, {} warning(s)",
                file.display(),
                record.scenes.len(),
                report.warnings().count()
            );
        }
        Command::Summary { file } => {
            // fall back to the bound example
            let record = match file {
                Some(path) => load_schedule(&path).await?,
                None => bindings.resolve(SCHEDULE_BINDING)?.clone(),
            };

            for line in output::timeline_lines(&record) {
                info!("{}", line);
            }
            let (half, full) = output::visual_mix(&record);
            if half + full > 0 {
                info!("Visual mix: {} halfHalf, {} fullImage", half, full);
            }
            if record.music_prompt.is_empty() {
                info!("No music prompt");
            } else {
                info!("Music prompt: {}", record.music_prompt);
            }
        }
    }

    Ok(())
}

async fn load_schedule(path: &Path) -> Result<ScheduleRecord> {
    info!("Loading schedule from: {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    prompt::parse_schedule_reply(&text)
}
