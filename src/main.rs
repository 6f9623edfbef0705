//! `wado-frame` command line tool.
//!
//! ```text
//! wado-frame [--config PATH] fetch <URI> [--accept TYPE] [--correlation-id ID] [--output FILE]
//! wado-frame [--config PATH] decode <FILE> [--output FILE]
//! ```
//!
//! Prints a JSON summary of the decoded frame to stdout. Logs go to stderr.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;

use wado_frame::config::load_or_default;
use wado_frame::observability::logging;
use wado_frame::FrameRetriever;

#[derive(Parser)]
#[command(name = "wado-frame")]
#[command(about = "Fetch and decode WADO-RS pixel frames", long_about = None)]
struct Cli {
    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Retrieve one frame from a WADO-RS endpoint
    Fetch {
        /// Frame URI
        uri: String,

        /// Accept header (defaults to the configured media type)
        #[arg(short, long)]
        accept: Option<String>,

        /// Correlation ID forwarded to the server (random if omitted)
        #[arg(long)]
        correlation_id: Option<String>,

        /// Write pixel data to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decode a saved multipart response body
    Decode {
        /// File containing the raw response body
        input: PathBuf,

        /// Write pixel data to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;
    logging::init(&config.observability)?;

    tracing::debug!(
        request_timeout_secs = config.transport.request_timeout_secs,
        default_media_type = %config.retrieval.default_media_type,
        "Configuration loaded"
    );

    let (frame, source, output) = match cli.command {
        Commands::Fetch {
            uri,
            accept,
            correlation_id,
            output,
        } => {
            let correlation_id =
                correlation_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
            let retriever = FrameRetriever::from_config(&config)?;
            let frame = retriever
                .fetch_pixel_frame(&uri, &correlation_id, accept.as_deref())
                .await?;
            (frame, uri, output)
        }
        Commands::Decode { input, output } => {
            let body = tokio::fs::read(&input).await?;
            let frame = wado_frame::decode_response(body.into())?;
            (frame, input.display().to_string(), output)
        }
    };

    let pixel_data = &frame.image_frame.pixel_data;
    if let Some(path) = &output {
        tokio::fs::write(path, pixel_data.as_ref()).await?;
        tracing::info!(path = %path.display(), bytes = pixel_data.len(), "Pixel data written");
    }

    let summary = json!({
        "source": source,
        "content_type": frame.content_type,
        "pixel_bytes": pixel_data.len(),
        "inflated": pixel_data.is_inflated(),
        "output": output.as_ref().map(|p| p.display().to_string()),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
