use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::mst::EngineKind;
use crate::options::Options;
use crate::report::ReportFormat;

pub const DEFAULT_CONFIG_FILE: &str = "edgeprune.toml";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EdgeConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default)]
    pub engine: EngineKind,
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default = "default_placeholders")]
    pub placeholders: Vec<String>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default)]
    pub print_matrix: bool,
    #[serde(default)]
    pub trace: bool,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            engine: EngineKind::default(),
            format: ReportFormat::default(),
            placeholders: default_placeholders(),
            strict: false,
            print_matrix: false,
            trace: false,
        }
    }
}

impl EdgeConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: EdgeConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Like [`EdgeConfig::load_from_file`], but a file the user named
    /// explicitly has to exist.
    pub fn load_required<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Config file {:?} does not exist", path);
        }
        Self::load_from_file(path)
    }

    /// Command-line options win over the file.
    pub fn apply(&mut self, options: &Options) {
        if let Some(input) = &options.input {
            self.input = input.clone();
        }
        if let Some(engine) = options.engine {
            self.engine = engine;
        }
        if let Some(format) = options.format {
            self.format = format;
        }
        self.strict |= options.strict;
        self.print_matrix |= options.print_matrix;
        self.trace |= options.trace;
    }
}

// The Project Euler 107 network file name.
fn default_input() -> PathBuf {
    PathBuf::from("p107_network.txt")
}

fn default_placeholders() -> Vec<String> {
    vec!["-".to_string()]
}
