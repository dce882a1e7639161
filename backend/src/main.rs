//! Deepfake Detector server CLI
//!
//! ```bash
//! detector serve                   # Start HTTP server (port 5000 or $PORT)
//! detector analyze clip.mp4        # Print the reply /upload would send
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use detector::config::{DEFAULT_DELAY_MS, DEFAULT_PORT, DEFAULT_STATIC_DIR, MAX_UPLOAD_BYTES};
use detector::{analyze_upload, start_server, ServerConfig};

#[derive(Parser)]
#[command(name = "detector")]
#[command(about = "Upload server for the Deepfake Detector", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory with the built frontend
        #[arg(long, default_value = DEFAULT_STATIC_DIR)]
        static_dir: PathBuf,

        /// Simulated processing time per upload, in milliseconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
        delay_ms: u64,
    },

    /// Analyze a local file and print the JSON reply
    Analyze {
        /// Input file
        input: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            static_dir,
            delay_ms,
        } => cmd_serve(port, static_dir, delay_ms).await,

        Commands::Analyze { input } => cmd_analyze(&input),
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(port: u16, static_dir: PathBuf, delay_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig {
        port,
        static_dir,
        processing_delay: Duration::from_millis(delay_ms),
        ..ServerConfig::default()
    };

    start_server(config).await?;
    Ok(())
}

fn cmd_analyze(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = fs::metadata(input)?;
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
    let response = analyze_upload(&name, size, MAX_UPLOAD_BYTES)?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
