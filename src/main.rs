use anyhow::Result;
use clap::Parser;
use log::info;
use std::process::ExitCode;

use dex_pair_notifier::api::DexScreenerClient;
use dex_pair_notifier::cli::Cli;
use dex_pair_notifier::config::{Config, Credentials};
use dex_pair_notifier::logging;
use dex_pair_notifier::pipeline::{Pipeline, Status};
use dex_pair_notifier::shell::{self, TerminalView};
use dex_pair_notifier::telegram::TelegramNotifier;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::load_or_default(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration from {:?}: {}", cli.config, e);
            return Err(anyhow::anyhow!("Configuration loading failed: {}", e));
        }
    };
    logging::init(config.logging.file.as_deref(), cli.debug)?;
    info!("Configuration loaded; endpoint {}", config.dexscreener.url);

    let source = DexScreenerClient::from_config(&config.dexscreener)?;
    let notifier = TelegramNotifier::new(Credentials::from_env(), &config.telegram)?;
    let pipeline = Pipeline::new(source, notifier);
    let mut view = TerminalView::new(std::io::stdout());

    if cli.once {
        let status = shell::run_once(&pipeline, &mut view).await;
        return Ok(if status == Status::Error {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    shell::run_interactive(&pipeline, &mut view).await?;
    info!("Shell closed");
    Ok(ExitCode::SUCCESS)
}
