//! Hiero file command line interface
//!
//! Stores, inspects and removes ledger files through a node relay.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use hiero_files::{FileClient, FileId};
use hiero_sdk::{HttpProtocolClient, NetworkSettings};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hiero-cli")]
#[command(about = "Store and inspect files on a Hiero network", long_about = None)]
#[command(version)]
struct Cli {
    /// Network configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Talk to this relay directly instead of the configured nodes
    #[arg(long, value_name = "URL")]
    relay_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// File operations
    File {
        #[command(subcommand)]
        action: FileCommands,
    },
    /// Network configuration
    Network {
        #[command(subcommand)]
        action: NetworkCommands,
    },
}

#[derive(Subcommand)]
enum FileCommands {
    /// Upload a local file and print the new file id
    Create {
        path: PathBuf,
        /// Expiration time (RFC 3339)
        #[arg(long, value_parser = parse_timestamp)]
        expiration: Option<DateTime<Utc>>,
    },
    /// Append a local file to an existing file
    Append { file_id: FileId, path: PathBuf },
    /// Replace the contents of an existing file
    Update { file_id: FileId, path: PathBuf },
    /// Download file contents
    Read {
        file_id: FileId,
        /// Write to this path instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the stored size in bytes
    Size { file_id: FileId },
    /// Print size, expiration and deletion status
    Info { file_id: FileId },
    /// Delete a file
    Delete { file_id: FileId },
    /// Move the expiration time of a file
    Expire {
        file_id: FileId,
        #[arg(value_parser = parse_timestamp)]
        expiration: DateTime<Utc>,
    },
}

#[derive(Subcommand)]
enum NetworkCommands {
    /// Print the resolved network settings
    Show,
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|err| format!("invalid RFC 3339 timestamp `{raw}`: {err}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::File { action } => {
            let client = build_client(cli.config.as_ref(), cli.relay_url.as_deref())?;
            handle_file_commands(action, &FileClient::new(client)).await
        }
        Commands::Network { action } => handle_network_commands(action, cli.config.as_ref()),
    }
}

fn load_settings(config: Option<&PathBuf>) -> Result<NetworkSettings> {
    NetworkSettings::load(config.map(|p| p.as_path())).context("failed to load network settings")
}

fn build_client(config: Option<&PathBuf>, relay_url: Option<&str>) -> Result<HttpProtocolClient> {
    if let Some(url) = relay_url {
        return HttpProtocolClient::new(url).with_context(|| format!("invalid relay URL {url}"));
    }
    let settings = load_settings(config)?;
    info!(network = %settings.network(), nodes = settings.nodes.len(), "using configured network");
    HttpProtocolClient::from_settings(&settings).context("failed to build protocol client")
}

fn read_input(path: &PathBuf) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

async fn handle_file_commands(
    cmd: FileCommands,
    client: &FileClient<HttpProtocolClient>,
) -> Result<()> {
    match cmd {
        FileCommands::Create { path, expiration } => {
            let contents = read_input(&path)?;
            let file_id = match expiration {
                Some(expiration) => client.create_file_with_expiration(&contents, expiration).await,
                None => client.create_file(&contents).await,
            }
            .context("failed to create file")?;
            info!(%file_id, bytes = contents.len(), "file stored");
            println!("{file_id}");
        }
        FileCommands::Append { file_id, path } => {
            let contents = read_input(&path)?;
            client
                .append_file(&file_id, &contents)
                .await
                .with_context(|| format!("failed to append to {file_id}"))?;
        }
        FileCommands::Update { file_id, path } => {
            let contents = read_input(&path)?;
            client
                .update_file(&file_id, &contents)
                .await
                .with_context(|| format!("failed to update {file_id}"))?;
        }
        FileCommands::Read { file_id, output } => {
            let contents = client
                .read_file(&file_id)
                .await
                .with_context(|| format!("failed to read {file_id}"))?;
            match output {
                Some(path) => fs::write(&path, &contents)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => std::io::stdout().write_all(&contents)?,
            }
        }
        FileCommands::Size { file_id } => {
            let size = client
                .get_size(&file_id)
                .await
                .with_context(|| format!("failed to query size of {file_id}"))?;
            println!("{size}");
        }
        FileCommands::Info { file_id } => {
            let info = client
                .get_info(&file_id)
                .await
                .with_context(|| format!("failed to query {file_id}"))?;
            let json = serde_json::json!({
                "file_id": info.file_id,
                "size": info.size,
                "expiration_time": info.expiration_time,
                "deleted": info.deleted,
            });
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        FileCommands::Delete { file_id } => {
            client
                .delete_file(&file_id)
                .await
                .with_context(|| format!("failed to delete {file_id}"))?;
            println!("deleted {file_id}");
        }
        FileCommands::Expire {
            file_id,
            expiration,
        } => {
            client
                .update_expiration_time(&file_id, expiration)
                .await
                .with_context(|| format!("failed to update expiration of {file_id}"))?;
        }
    }

    Ok(())
}

fn handle_network_commands(cmd: NetworkCommands, config: Option<&PathBuf>) -> Result<()> {
    match cmd {
        NetworkCommands::Show => {
            let settings = load_settings(config)?;
            let mut json = serde_json::to_value(&settings)?;
            json["mirror_node"] = serde_json::json!(settings.mirror_node_url());
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_create_with_expiration() {
        let cli = Cli::try_parse_from([
            "hiero-cli",
            "--relay-url",
            "http://127.0.0.1:8080",
            "file",
            "create",
            "notes.txt",
            "--expiration",
            "2031-05-01T00:00:00Z",
        ])
        .unwrap();

        assert_eq!(cli.relay_url.as_deref(), Some("http://127.0.0.1:8080"));
        match cli.command {
            Commands::File {
                action: FileCommands::Create { path, expiration },
            } => {
                assert_eq!(path, PathBuf::from("notes.txt"));
                assert_eq!(expiration.unwrap().to_rfc3339(), "2031-05-01T00:00:00+00:00");
            }
            _ => panic!("expected file create"),
        }
    }

    #[test]
    fn file_id_arguments_are_validated() {
        let cli = Cli::try_parse_from(["hiero-cli", "file", "size", "0.0.42"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::File {
                action: FileCommands::Size { file_id }
            } if file_id == FileId::from_num(42)
        ));

        assert!(Cli::try_parse_from(["hiero-cli", "file", "size", "42"]).is_err());
        assert!(Cli::try_parse_from(["hiero-cli", "file", "expire", "0.0.1", "tomorrow"]).is_err());
    }
}
