use super::{Extractor, types::*};
use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client as HttpClient;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::debug;

/// Blocking client for the LLMWhisperer V2 API.
///
/// One extraction is a submit / poll / retrieve exchange: the PDF bytes are
/// posted, the returned `whisper_hash` is polled until the service reports
/// the document processed, then the text is fetched.
pub struct WhispererClient {
    cfg: Config,
    http: HttpClient,
    api_key: String,
}

impl WhispererClient {
    pub fn new(cfg: &Config, api_key: String) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(cfg.api.request_timeout_seconds))
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            cfg: cfg.clone(),
            http,
            api_key,
        })
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/{}", self.cfg.api.base_url.trim_end_matches('/'), name)
    }

    fn submit(&self, input: &Path) -> Result<SubmitOut> {
        let bytes = std::fs::read(input)
            .with_context(|| format!("reading input: {}", input.display()))?;
        let file_name = input
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("input.pdf")
            .to_string();

        let resp = self
            .http
            .post(self.endpoint("whisper"))
            .header("unstract-key", &self.api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .query(&[
                ("mode", self.cfg.api.mode.as_str()),
                ("output_mode", self.cfg.api.output_mode.as_str()),
                (
                    "mark_vertical_lines",
                    bool_param(self.cfg.api.mark_vertical_lines),
                ),
                (
                    "mark_horizontal_lines",
                    bool_param(self.cfg.api.mark_horizontal_lines),
                ),
                ("file_name", file_name.as_str()),
            ])
            .body(bytes)
            .send()
            .with_context(|| format!("submitting whisper request: {}", input.display()))?;

        let status = resp.status();
        if status != reqwest::StatusCode::ACCEPTED {
            let body = resp.text().unwrap_or_default();
            return Err(anyhow!("whisper submit returned {status}: {body}"));
        }
        let out: SubmitOut = resp.json().context("parsing whisper submit response")?;
        Ok(out)
    }

    /// Poll until the document is processed or the configured wait deadline
    /// expires. The deadline bounds the whole wait, not a single request.
    fn wait_processed(&self, whisper_hash: &str) -> Result<()> {
        let deadline = Instant::now() + Duration::from_secs(self.cfg.api.wait_timeout_seconds);
        loop {
            let out: StatusOut = self
                .http
                .get(self.endpoint("whisper-status"))
                .header("unstract-key", &self.api_key)
                .query(&[("whisper_hash", whisper_hash)])
                .send()
                .context("polling whisper status")?
                .error_for_status()
                .context("whisper status returned an error status")?
                .json()
                .context("parsing whisper status response")?;

            match out.status.as_str() {
                "processed" | "delivered" => return Ok(()),
                "error" | "failed" => {
                    return Err(anyhow!(
                        "extraction failed remotely: {}",
                        out.message.unwrap_or_default()
                    ));
                }
                other => debug!("whisper {whisper_hash} status={other}"),
            }

            if Instant::now() >= deadline {
                return Err(anyhow!(
                    "extraction did not complete within {}s",
                    self.cfg.api.wait_timeout_seconds
                ));
            }
            std::thread::sleep(Duration::from_secs(self.cfg.api.poll_interval_seconds));
        }
    }

    fn retrieve(&self, whisper_hash: &str) -> Result<Extraction> {
        let out: Extraction = self
            .http
            .get(self.endpoint("whisper-retrieve"))
            .header("unstract-key", &self.api_key)
            .query(&[("whisper_hash", whisper_hash)])
            .send()
            .context("retrieving whisper result")?
            .error_for_status()
            .context("whisper retrieve returned an error status")?
            .json()
            .context("parsing whisper retrieve response")?;
        Ok(out)
    }
}

impl Extractor for WhispererClient {
    fn extract(&self, input: &Path) -> Result<Extraction> {
        let submitted = self.submit(input)?;
        debug!(
            "submitted {} whisper_hash={}",
            input.display(),
            submitted.whisper_hash
        );
        self.wait_processed(&submitted.whisper_hash)?;
        self.retrieve(&submitted.whisper_hash)
    }
}

fn bool_param(v: bool) -> &'static str {
    if v { "true" } else { "false" }
}
