//! Exam seating HTTP server.
//!
//! ```sh
//! exam-seating --data-file classrooms.json --port 5000
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use exam_seating::{service, JsonFileRoomStore, SeatingService};

/// Default HTTP port.
const DEFAULT_PORT: u16 = 5000;

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "exam-seating")]
#[command(about = "Classroom registry and exam seat allocation service")]
struct Args {
    /// JSON file holding the classroom collection.
    #[arg(short, long, default_value = "classrooms.json", env = "EXAM_SEATING_DATA_FILE")]
    data_file: PathBuf,

    /// Bind address for the HTTP server.
    #[arg(short, long, default_value = "127.0.0.1", env = "EXAM_SEATING_BIND")]
    bind: String,

    /// HTTP port to listen on.
    #[arg(short, long, default_value_t = DEFAULT_PORT, env = "EXAM_SEATING_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("exam_seating=info")),
        )
        .init();

    let args = Args::parse();

    let store = JsonFileRoomStore::open(&args.data_file)
        .with_context(|| format!("failed to open {}", args.data_file.display()))?;
    info!(path = %args.data_file.display(), "classroom store opened");

    let service = Arc::new(SeatingService::new(store));
    let addr = format!("{}:{}", args.bind, args.port);
    service::serve(service, &addr)
        .await
        .with_context(|| format!("server on {addr} failed"))?;

    Ok(())
}
