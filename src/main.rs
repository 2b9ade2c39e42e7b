mod config;
mod github;
mod http;
mod logger;
mod publish;

use anyhow::Result;
use clap::Parser;
use config::Config;
use github::GithubClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::parse();
    logger::init(config.log_level)?;

    log::info!("Starting");
    let github = GithubClient::new(http::Client::new(), &config.api_url, &config.pat);

    let report = publish::run(&config, &github).await?;

    log::info!(
        "{} asset(s) uploaded, {} failed",
        report.uploaded.len(),
        report.failed.len()
    );

    Ok(())
}
