mod input;
mod run;

use std::path::PathBuf;

use clap::Parser;
use creatorscan_scraper::HttpSnapshotSource;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "creatorscan")]
#[command(about = "Extracts creator profile metrics into a flat report")]
struct Cli {
    /// Path to the JSON run input (platform links + operator context).
    #[arg(long)]
    input: PathBuf,

    /// Where to write the JSON report; stdout when omitted.
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = creatorscan_core::load_app_config()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    let cli = Cli::parse();
    let run_input = input::load_run_input(&cli.input)?;

    let source = HttpSnapshotSource::new(config.request_timeout_secs, &config.user_agent)?;
    let records = run::scan_all(
        &source,
        &run_input.platform_links,
        &run_input.context,
        config.max_view_samples,
    )
    .await;

    let report = serde_json::to_string_pretty(&records)?;
    match cli.output {
        Some(path) => std::fs::write(&path, report)?,
        None => println!("{report}"),
    }

    Ok(())
}
