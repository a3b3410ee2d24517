//! Lingo - cloud language analysis from the command line
//!
//! `lingo <command> --content <text-or-gs-uri>` or
//! `lingo synthesize --path <file>`.

use clap::Parser;
use lingo::config::Config;
use lingo::content::{ContentKind, ContentSource};
use lingo::language::RestLanguageClient;
use lingo::storage::GcsObjectStore;
use lingo::tts::{self, AudioConfig, VoiceSelection};
use lingo::{Command, Dispatcher, LingoError, LingoResult};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

const SYNTHESIZE: &str = "synthesize";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// all, entities, sentiment, syntax, entity-sentiment, classify or synthesize
    command: String,

    /// Text to analyse, or a gs://bucket/object reference
    #[arg(long)]
    content: Option<String>,

    /// How to interpret --content
    #[arg(long, value_enum, default_value_t = ContentKind::Auto)]
    content_kind: ContentKind,

    /// Text file to synthesize (synthesize only)
    #[arg(long)]
    path: Option<PathBuf>,

    /// Audio output file (synthesize only)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Config file (defaults to the user config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// What the binary was asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    Analyze(Command),
    Synthesize,
}

impl Task {
    fn parse(name: &str) -> LingoResult<Self> {
        if name == SYNTHESIZE {
            return Ok(Task::Synthesize);
        }
        name.parse().map(Task::Analyze).map_err(|_| {
            let known: Vec<&str> = Command::VARIANTS
                .iter()
                .map(Command::name)
                .chain(std::iter::once(SYNTHESIZE))
                .collect();
            LingoError::InvalidCommand(format!(
                "'{}' (expected one of: {})",
                name,
                known.join(", ")
            ))
        })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // An unknown command fails before any config or network work
    let task = match Task::parse(&args.command) {
        Ok(task) => task,
        Err(e) => return fail(&e),
    };

    let loaded = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let (config, config_warning) = match loaded {
        Ok(loaded) => loaded,
        Err(e) => return fail(&e),
    };

    if let Err(e) = init_logging(args.verbose, &config.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }
    if let Some(warning) = config_warning {
        warn!("{}", warning);
    }

    debug!("🔤 Lingo v{} starting", env!("CARGO_PKG_VERSION"));

    match run(task, &args, &config).await {
        Ok(lines) => {
            // Nothing is printed until the whole command succeeded
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

async fn run(task: Task, args: &Args, config: &Config) -> LingoResult<Vec<String>> {
    let command = match task {
        Task::Synthesize => return synthesize(args, config).await.map(|line| vec![line]),
        Task::Analyze(command) => command,
    };

    let raw = args
        .content
        .as_deref()
        .ok_or_else(|| LingoError::Resolution("--content is required".to_string()))?;
    let source = ContentSource::from_arg(raw, args.content_kind)?;

    let dispatcher = Dispatcher::new(
        Arc::new(RestLanguageClient::new(config)?),
        Arc::new(GcsObjectStore::new(config)?),
    );
    dispatcher.run(command, &source).await
}

async fn synthesize(args: &Args, config: &Config) -> LingoResult<String> {
    let path = args
        .path
        .as_deref()
        .ok_or_else(|| LingoError::Resolution("--path is required".to_string()))?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output_path));

    let synth = tts::create_synthesizer(config)?;
    tts::synthesize_text_file(
        synth.as_ref(),
        path,
        &output,
        &VoiceSelection::from_config(config),
        &AudioConfig::from_config(config),
    )
    .await
}

fn init_logging(verbose: bool, config_level: &str) -> anyhow::Result<()> {
    let default_level = if verbose {
        "debug".to_string()
    } else {
        config_level.to_lowercase()
    };
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&default_level))?;

    // stdout carries the rendered lines only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;

    debug!("Log level: {}", default_level);
    Ok(())
}

fn fail(err: &LingoError) -> ExitCode {
    debug!("❌ {:?}", err);
    eprintln!("Error: {}", err);
    ExitCode::from(err.exit_code() as u8)
}
