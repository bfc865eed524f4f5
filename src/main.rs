use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use sentiview::analysis::{AnalysisService, HttpAnalysisClient};
use sentiview::config::Config;
use sentiview::logging::init_tracing;
use sentiview::oneshot::run_once;

#[derive(Debug, Parser)]
#[command(name = "sentiview", version, about = "Terminal client for a sentiment-analysis webhook")]
struct Cli {
    /// Override the analysis endpoint URL
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Analyze TEXT once, print the result and exit ('-' reads stdin)
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    text: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }?;
    config.apply_endpoint_override(cli.endpoint.clone());
    config.validate()?;

    let client = HttpAnalysisClient::new(config.endpoint_url()?)
        .context("Failed to build HTTP client")?;
    let service: Arc<dyn AnalysisService> = Arc::new(client);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.text {
        Some(text) => {
            let text = if text == "-" { read_stdin()? } else { text };
            let mut stdout = io::stdout();
            let succeeded = runtime.block_on(run_once(text, service.as_ref(), &mut stdout))?;
            if !succeeded {
                std::process::exit(1);
            }
            Ok(())
        }
        None => {
            sentiview::ui::runtime::run(&config, service, runtime.handle().clone())?;
            Ok(())
        }
    }
}

fn read_stdin() -> anyhow::Result<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}
