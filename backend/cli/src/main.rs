mod config;
mod render;

use std::io::Read;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use wildlens_analysis::analyze_reply;
use wildlens_gateway::{start_server, GatewayState};
use wildlens_media::{detect_mime_type, sniff_image_mime};
use wildlens_vision::{analyze_image, inventory_prompt};

use config::Config;
use render::{note_error, note_info, render_inventory};

#[derive(Parser)]
#[command(name = "wildlens")]
#[command(about = "WildLens — image in, species inventory out")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the WildLens HTTP server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Analyze a single image file and print the inventory
    Analyze {
        /// Path to the image
        image: PathBuf,
        /// Print the raw model reply instead of the parsed inventory
        #[arg(long)]
        raw: bool,
    },
    /// Run the pipeline on a saved raw reply (stdin when no file is given)
    Parse {
        /// Path to a file containing the raw model reply
        file: Option<PathBuf>,
    },
    /// Show the running server's health
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            wildlens_logging::init_logger(&config.log_dir, &config.log_level);
            let config = Config {
                port: port.unwrap_or(config.port),
                ..config
            };
            run_server(config).await?;
        }
        Commands::Analyze { image, raw } => {
            init_oneshot_logging(&config.log_level);
            run_analyze(&config, &image, raw).await;
        }
        Commands::Parse { file } => {
            init_oneshot_logging(&config.log_level);
            run_parse(file.as_deref());
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/api/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("WildLens is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}

/// One-shot commands log to stderr so stdout stays clean for results.
fn init_oneshot_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_server(config: Config) -> Result<()> {
    info!(
        port = config.port,
        bind = %config.bind_address,
        model = %config.vision_model,
        "Starting WildLens gateway"
    );

    let provider = config.provider()?;
    let state = GatewayState {
        provider: Arc::new(provider),
    };

    let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port)
        .parse()
        .context("invalid bind address")?;
    start_server(addr, state).await
}

async fn run_analyze(config: &Config, image: &Path, raw: bool) {
    let provider = match config.provider() {
        Ok(p) => p,
        Err(e) => {
            note_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let bytes = match std::fs::read(image) {
        Ok(bytes) => bytes,
        Err(e) => {
            note_error(&format!("could not read {}: {e}", image.display()));
            std::process::exit(1);
        }
    };

    let mime = sniff_image_mime(&bytes)
        .map(str::to_owned)
        .unwrap_or_else(|| detect_mime_type(image).to_owned());

    note_info(&format!("Analyzing {} ({mime})...", image.display()));
    let reply = match analyze_image(&provider, &bytes, &mime, inventory_prompt()).await {
        Ok(reply) => reply,
        Err(e) => {
            note_error(&format!("vision provider call failed: {e}"));
            std::process::exit(1);
        }
    };

    if raw {
        println!("{reply}");
        return;
    }

    match analyze_reply(&reply) {
        Ok(result) => render_inventory(&result),
        Err(e) => {
            note_error(&format!("could not interpret the model reply: {e}"));
            std::process::exit(1);
        }
    }
}

fn run_parse(file: Option<&Path>) {
    let reply = match file {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                note_error(&format!("could not read {}: {e}", path.display()));
                std::process::exit(1);
            }
        },
        None => {
            let mut buf = String::new();
            if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
                note_error(&format!("could not read stdin: {e}"));
                std::process::exit(1);
            }
            buf
        }
    };

    match analyze_reply(&reply) {
        Ok(result) => {
            // Machine-readable on purpose: `parse` exists for offline and
            // batch use of the pipeline.
            println!(
                "{}",
                serde_json::to_string_pretty(&result).expect("result serializes")
            );
        }
        Err(e) => {
            note_error(&format!("could not interpret the reply: {e}"));
            std::process::exit(1);
        }
    }
}
