//! Brandgen - Brand asset generator CLI
//!
//! Generates the project's branded images through the Imagen API, one
//! request at a time with a cooldown in between. Task failures never abort
//! the run; a missing credential aborts before the first request.

use brandgen::config::AppConfig;
use brandgen::generator::{default_tasks, ImagenProvider, TaskRunner};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// List the tasks a run would execute, in order
    List,
}

#[derive(Parser, Debug)]
#[command(name = "brandgen")]
#[command(author = "MadKoding")]
#[command(version = "0.1.0")]
#[command(about = "Sequential, rate-limited brand image generation", long_about = None)]
struct Args {
    /// Configuration file path (overrides defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for generated images
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Cooldown between requests in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[tokio::main]
async fn main() {
    // Setup failures (bad config, missing credential) exit 1; task failures
    // during the run do not affect the exit code.
    if let Err(err) = run(Args::parse()).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> anyhow::Result<()> {
    // Load configuration
    let mut config = AppConfig::load(args.config.as_deref())?;

    // Initialize logging (now that we have config)
    init_logging(args.verbose, config.debug);

    // Apply CLI overrides
    if let Some(dir) = args.output_dir {
        config.runner.output_dir = dir;
    }
    if let Some(delay) = args.delay_ms {
        config.runner.inter_delay_ms = delay;
    }

    // Validate configuration
    config.validate()?;

    let tasks = default_tasks();

    if let Some(Command::List) = args.command {
        for task in &tasks {
            let subject = task.prompt.lines().next().unwrap_or("");
            println!("{:<14} {}", task.name, subject);
        }
        return Ok(());
    }

    // Resolve the credential before anything else; without it no request is
    // ever attempted.
    let provider = ImagenProvider::new(&config)?;

    tracing::info!("Starting image generation ({} tasks)", tasks.len());
    tracing::info!("Output directory: {}", config.runner.output_dir.display());

    let runner = TaskRunner::new(&config.runner);
    let summary = runner.run(&tasks, &provider).await;

    tracing::info!("Image generation complete: {}", summary);
    println!("Done: {}", summary);

    Ok(())
}

/// Initialize logging
fn init_logging(verbose: bool, debug_mode: bool) {
    let filter = if verbose || debug_mode {
        "brandgen=debug,info"
    } else {
        "brandgen=info,warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
