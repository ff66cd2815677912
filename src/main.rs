use anyhow::Context;
use apt_forwarder::cli::{dispatch, resolve_config, Cli};
use apt_forwarder::{HttpTransport, RequestForwarder};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = resolve_config(cli.endpoint, |key| std::env::var(key).ok())?;
    let forwarder = RequestForwarder::from_config(HttpTransport::new(), config);

    let response = dispatch(&forwarder, cli.command, std::io::stdin()).await?;

    eprintln!("HTTP {}", response.status());
    let body = response.text().await.context("failed to read response body")?;
    println!("{}", body);

    Ok(())
}
