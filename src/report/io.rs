//! Report serialization: plain text, JSON and RON.
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::report::Reduction;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Ron,
}

impl ReportFormat {
    pub const NAMES: [&'static str; 3] = ["text", "json", "ron"];

    pub fn render(self, reduction: &Reduction) -> Result<String, ReportError> {
        match self {
            ReportFormat::Text => Ok(reduction.to_string()),
            ReportFormat::Json => to_json_string(reduction),
            ReportFormat::Ron => to_ron_string(reduction),
        }
    }

    pub fn write<P: AsRef<Path>>(self, path: P, reduction: &Reduction) -> Result<(), ReportError> {
        let mut file = File::create(path)?;
        let content = self.render(reduction)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportFormat::Text => "text",
            ReportFormat::Json => "json",
            ReportFormat::Ron => "ron",
        };
        f.write_str(name)
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "ron" => Ok(ReportFormat::Ron),
            other => Err(format!("unknown report format {other:?}")),
        }
    }
}

pub fn to_json_string<T>(value: &T) -> Result<String, ReportError>
where
    T: Serialize,
{
    let mut content = serde_json::to_string_pretty(value)?;
    content.push('\n');
    Ok(content)
}

pub fn to_ron_string<T>(value: &T) -> Result<String, ReportError>
where
    T: Serialize,
{
    let mut pretty = PrettyConfig::default();
    pretty.new_line = "\n".into();
    let mut content = ron::ser::to_string_pretty(value, pretty)?;
    content.push('\n');
    Ok(content)
}
