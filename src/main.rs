use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod cli;
mod common;
mod config;
mod infrastructure;
mod modules;
mod state;
mod workers;

use config::settings::TranscoderConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Logs on stderr, confirmations on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::Args::parse();
    let state = app::create_app(TranscoderConfig::new());

    let outputs = workers::transcoder::run(&state, &args.input_file, &args.output_dir)
        .await
        .with_context(|| format!("transcoding {} failed", args.input_file.display()))?;

    info!("🏁 Transcoding finished");
    println!("All done. Outputs:");
    for output in &outputs {
        println!(" - {}", output.display());
    }

    Ok(())
}
