use std::fs;
use std::path::Path;

use anyhow::Context;
use dsep_graph::LoaderConfig;
use serde::{Deserialize, Serialize};

/// Settings read from the `--config` file.
///
/// ```toml
/// one_based = true
///
/// [loader]
/// header_rows = 1
/// label_columns = 1
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub loader: LoaderConfig,
    /// Node numbers on the command line start at 1.
    pub one_based: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            one_based: true,
        }
    }
}

impl CliConfig {
    /// Load from `path`, or fall back to defaults when no file is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}
