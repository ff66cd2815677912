// src/cli.rs

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::config::{Endpoint, ForwarderConfig};
use crate::error::ConfigError;
use crate::forwarder::RequestForwarder;
use crate::transport::Transport;

/// Send analysis requests to an APT server and print the raw response.
#[derive(Debug, Parser)]
#[command(name = "apt-forward", version)]
pub struct Cli {
    /// Base endpoint; falls back to APT_SERVER_ENDPOINT, then the public server
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Coverability graph of a Petri net
    CoverabilityGraph { pn: PathBuf },
    /// Synthesize a Petri net from an LTS
    Synthesize {
        lts: PathBuf,
        /// Omitted from the request when not given
        #[arg(long)]
        options: Option<String>,
    },
    /// Examine a Petri net
    ExaminePn { pn: PathBuf },
    /// Examine a labelled transition system
    ExamineLts { lts: PathBuf },
    /// Normalize APT source
    Normalize { apt: PathBuf },
    /// List modules, or describe one with --name
    Modules {
        #[arg(long)]
        name: Option<String>,
    },
    /// Run any module with a JSON parameter object
    Invoke { module: String, params: String },
}

/// `--endpoint` wins over the environment, which wins over the default.
pub fn resolve_config<F>(
    endpoint_flag: Option<String>,
    lookup: F,
) -> Result<ForwarderConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match endpoint_flag {
        Some(raw) => Ok(ForwarderConfig::default().with_endpoint(Endpoint::new(raw)?)),
        None => ForwarderConfig::from_lookup(lookup),
    }
}

/// Reads a file, or `stdin` when the path is `-`.
pub fn read_input<R: Read>(path: &Path, mut stdin: R) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Maps a subcommand onto a forwarder call. Net and LTS sources travel as
/// JSON strings. Any HTTP status is `Ok`; only local and transport failures
/// are errors.
pub async fn dispatch<T, R>(
    forwarder: &RequestForwarder<T>,
    command: Command,
    stdin: R,
) -> anyhow::Result<T::Response>
where
    T: Transport,
    R: Read,
{
    let result = match command {
        Command::CoverabilityGraph { pn } => {
            let pn = Value::String(read_input(&pn, stdin)?);
            forwarder.get_coverability_graph(&pn).await
        }
        Command::Synthesize { lts, options } => {
            let lts = Value::String(read_input(&lts, stdin)?);
            let options = options.map(Value::String);
            forwarder.get_synthesized_net(&lts, options.as_ref()).await
        }
        Command::ExaminePn { pn } => {
            let pn = Value::String(read_input(&pn, stdin)?);
            forwarder.examine_pn(&pn).await
        }
        Command::ExamineLts { lts } => {
            let lts = Value::String(read_input(&lts, stdin)?);
            forwarder.examine_lts(&lts).await
        }
        Command::Normalize { apt } => {
            let apt = read_input(&apt, stdin)?;
            forwarder.normalize_apt(&apt).await
        }
        Command::Modules { name } => match name {
            Some(name) => forwarder.describe_module(&name).await,
            None => forwarder.list_modules().await,
        },
        Command::Invoke { module, params } => {
            let params: Value =
                serde_json::from_str(&params).context("params must be valid JSON")?;
            forwarder.invoke(&module, params).await
        }
    };

    result.with_context(|| format!("request to {} failed", forwarder.endpoint()))
}
