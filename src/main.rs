use anyhow::Context;
use clap::Parser;
use livechat_parser::{parse_feed, ParserConfig, DEFAULT_BASE_URL, DEFAULT_IMAGE_TIMEOUT};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

/// Extract live chat entries from a saved chat page as JSON
#[derive(Parser, Debug)]
#[command(name = "livechat-parse", version, about)]
struct Cli {
    /// HTML file to read, or `-` for stdin
    input: PathBuf,

    /// URL relative image sources are resolved against
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Give up on an image source after this many milliseconds
    #[arg(long, default_value_t = DEFAULT_IMAGE_TIMEOUT.as_millis() as u64)]
    image_timeout_ms: u64,

    /// Print a JSON array instead of one object per line
    #[arg(long)]
    pretty: bool,
}

async fn read_input(input: &Path) -> std::io::Result<String> {
    if input.as_os_str() == "-" {
        let mut html = String::new();
        tokio::io::stdin().read_to_string(&mut html).await?;
        Ok(html)
    } else {
        tokio::fs::read_to_string(input).await
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = ParserConfig::new()
        .base_url(&cli.base_url)?
        .image_timeout(Duration::from_millis(cli.image_timeout_ms));
    let parser = config.build();

    let html = read_input(&cli.input)
        .await
        .with_context(|| format!("reading {}", cli.input.display()))?;

    let report = parse_feed(&html, parser.resolver()).await;

    let output = if cli.pretty {
        report.to_json_pretty()?
    } else {
        report.to_json_lines()?
    };
    if !output.is_empty() {
        println!("{output}");
    }

    tracing::info!(
        parsed = report.messages.len(),
        skipped = report.skipped_count(),
        "done"
    );
    Ok(())
}
