//! Network configuration consumed by the protocol layer client.
//!
//! Settings are read from an optional TOML file and then overridden by
//! `HIERO_NETWORK_*` environment variables, e.g. `HIERO_NETWORK_NAME=testnet`
//! or `HIERO_NETWORK_MIRROR_NODE=https://mirror.example`.

use std::fmt;
use std::path::Path;

use config::{Config, Environment, File as ConfigFile};
use hiero_types::AccountId;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::SdkError;

pub const ENV_PREFIX: &str = "HIERO_NETWORK";

const DEFAULT_NETWORK_NAME: &str = "mainnet";

/// Networks with well-known public endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HieroNetwork {
    Mainnet,
    Testnet,
    Previewnet,
    Custom,
}

impl HieroNetwork {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "mainnet" => HieroNetwork::Mainnet,
            "testnet" => HieroNetwork::Testnet,
            "previewnet" => HieroNetwork::Previewnet,
            _ => HieroNetwork::Custom,
        }
    }

    pub fn default_mirror_node(&self) -> Option<&'static str> {
        match self {
            HieroNetwork::Mainnet => Some("https://mainnet-public.mirrornode.hedera.com"),
            HieroNetwork::Testnet => Some("https://testnet.mirrornode.hedera.com"),
            HieroNetwork::Previewnet => Some("https://previewnet.mirrornode.hedera.com"),
            HieroNetwork::Custom => None,
        }
    }
}

impl fmt::Display for HieroNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HieroNetwork::Mainnet => "mainnet",
            HieroNetwork::Testnet => "testnet",
            HieroNetwork::Previewnet => "previewnet",
            HieroNetwork::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A consensus node reachable by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkNode {
    pub ip: String,
    pub port: u16,
    pub account: AccountId,
}

impl NetworkNode {
    pub fn address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }

    /// Base URL of the node's relay endpoint.
    pub fn relay_url(&self) -> String {
        format!("http://{}/", self.address())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSettings {
    #[serde(default = "default_network_name")]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<NetworkNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror_node: Option<String>,
}

fn default_network_name() -> String {
    DEFAULT_NETWORK_NAME.to_string()
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            name: default_network_name(),
            nodes: Vec::new(),
            mirror_node: None,
        }
    }
}

impl NetworkSettings {
    /// Load settings from an optional file plus `HIERO_NETWORK_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, SdkError> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    pub(crate) fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self, SdkError> {
        let mut builder = Config::builder().set_default("name", DEFAULT_NETWORK_NAME)?;

        if let Some(path) = path {
            if !path.exists() {
                return Err(SdkError::config_error(format!(
                    "network configuration file {} not found",
                    path.display()
                )));
            }
            builder = builder.add_source(ConfigFile::from(path));
        }

        builder = builder.add_source(env.prefix_separator("_").separator("__"));

        let settings: NetworkSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn network(&self) -> HieroNetwork {
        HieroNetwork::from_name(&self.name)
    }

    /// Configured mirror node, falling back to the public one of a known network.
    ///
    /// Informational only: [`crate::HttpProtocolClient::from_settings`] routes
    /// queries to `mirror_node` when it is set and to the relay otherwise.
    pub fn mirror_node_url(&self) -> Option<String> {
        self.mirror_node
            .clone()
            .or_else(|| self.network().default_mirror_node().map(str::to_string))
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        if self.name.trim().is_empty() {
            return Err(SdkError::config_error("network name must not be empty"));
        }

        if self.nodes.is_empty() {
            return Err(SdkError::config_error(format!(
                "network `{}` has no nodes configured",
                self.name
            )));
        }

        for node in &self.nodes {
            if node.ip.trim().is_empty() {
                return Err(SdkError::config_error(format!(
                    "node {} has an empty ip",
                    node.account
                )));
            }
            if node.port == 0 {
                return Err(SdkError::config_error(format!(
                    "node {} has port 0",
                    node.account
                )));
            }
        }

        if let Some(mirror) = &self.mirror_node {
            Url::parse(mirror).map_err(|err| {
                SdkError::config_error(format!("invalid mirror node URL `{mirror}`: {err}"))
            })?;
        }

        Ok(())
    }
}
