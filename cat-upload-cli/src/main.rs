mod commands;
mod file_select;
mod terminal;

use anyhow::Result;
use cat_upload_core::{ClientConfig, GalleryClient, StatusKind};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::terminal::{render_tiles, TerminalSurface};

#[derive(Parser)]
#[command(name = "cat-upload")]
#[command(about = "List a cat gallery and upload images through presigned URLs", long_about = None)]
struct Cli {
    /// Backend endpoint that lists images and issues upload URLs
    #[arg(long, global = true, env = "CAT_UPLOAD_API_BASE_URL", default_value = "")]
    api_base_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the current gallery
    List,

    /// Upload one image, then show the refreshed gallery
    Upload {
        /// Image to upload
        path: Option<PathBuf>,

        /// Content type to send instead of the one detected from the extension
        #[arg(short = 't', long)]
        content_type: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cat_upload_cli=info,cat_upload_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ClientConfig::new(cli.api_base_url);
    let client = GalleryClient::new(config, TerminalSurface::new());

    match cli.command {
        Commands::List => {
            commands::list::execute(&client).await;
        }
        Commands::Upload { path, content_type } => {
            commands::upload::execute(&client, path, content_type).await;
        }
    }

    let snapshot = client.surface().finish();
    if !snapshot.tiles.is_empty() {
        println!("{}", render_tiles(&snapshot.tiles));
    }

    Ok(match snapshot.status.kind {
        StatusKind::Err => ExitCode::FAILURE,
        StatusKind::Ok | StatusKind::Info => ExitCode::SUCCESS,
    })
}
