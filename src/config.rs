use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: Api,
    #[serde(default)]
    pub output: Output,
    #[serde(default)]
    pub limits: Limits,
    #[serde(default)]
    pub logging: Logging,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config: {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| "parsing TOML")?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: Default::default(),
            output: Default::default(),
            limits: Default::default(),
            logging: Default::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Api {
    pub base_url: String,
    /// Environment variable holding the API key.
    pub key_env: String,
    pub mode: String,
    pub output_mode: String,
    pub mark_vertical_lines: bool,
    pub mark_horizontal_lines: bool,
    pub wait_timeout_seconds: u64,
    pub poll_interval_seconds: u64,
    pub request_timeout_seconds: u64,
}
impl Default for Api {
    fn default() -> Self {
        Self {
            base_url: "https://llmwhisperer-api.us-central.unstract.com/api/v2".into(),
            key_env: "LLMWHISPERER_API_KEY".into(),
            mode: "high_quality".into(),
            output_mode: "layout_preserving".into(),
            mark_vertical_lines: true,
            mark_horizontal_lines: true,
            wait_timeout_seconds: 600,
            poll_interval_seconds: 5,
            request_timeout_seconds: 120,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Output {
    /// Subdirectory created next to each input file.
    pub dir_name: String,
    /// Appended to the full input file name, e.g. "paper.pdf" -> "paper.pdf.txt".
    pub suffix: String,
    pub overwrite: bool,
    pub write_report_json: bool,
    pub report_filename: String,
}
impl Default for Output {
    fn default() -> Self {
        Self {
            dir_name: "extracted_text".into(),
            suffix: ".txt".into(),
            overwrite: true,
            write_report_json: false,
            report_filename: "report.json".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_input_file_bytes: u64,
}
impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_file_bytes: 2 * 1024 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub level: String,
    pub json: bool,
    pub write_to_file: bool,
    pub file_path: String,
}
impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".into(),
            json: false,
            write_to_file: false,
            file_path: "".into(),
        }
    }
}
