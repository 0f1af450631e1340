use crate::{
    client::Extractor,
    config::Config,
    report::{BatchSummary, FileOutcome},
    util::ensure_dir,
};
use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Strictly sequential batch runner: one blocking extraction at a time.
/// A failed file is logged and recorded; it never aborts the batch.
pub struct Batch<C: Extractor> {
    cfg: Config,
    client: C,
}

impl<C: Extractor> Batch<C> {
    pub fn new(cfg: &Config, client: C) -> Self {
        Self {
            cfg: cfg.clone(),
            client,
        }
    }

    pub fn run(&self, files: &[PathBuf]) -> Result<BatchSummary> {
        let mut outcomes = Vec::with_capacity(files.len());
        let mut successful = 0usize;

        for input in files {
            info!("processing {}", input.display());
            let outcome = self.process_file(input);
            if outcome.ok {
                successful += 1;
            }
            outcomes.push(outcome);
        }

        Ok(BatchSummary {
            attempted: files.len(),
            successful,
            outcomes,
        })
    }

    fn process_file(&self, input: &Path) -> FileOutcome {
        let mut outcome = FileOutcome {
            input: input.display().to_string(),
            output: None,
            ok: false,
            error: None,
        };

        match self.try_file(input) {
            Ok(Some(output)) => {
                info!("saved {} -> {}", input.display(), output.display());
                outcome.ok = true;
                outcome.output = Some(output.display().to_string());
            }
            Ok(None) => {
                warn!("no text extracted from {}", input.display());
                outcome.error = Some("no text extracted".to_string());
            }
            Err(err) => {
                warn!("failed to process {}: {:#}", input.display(), err);
                outcome.error = Some(format!("{err:#}"));
            }
        }
        outcome
    }

    /// `Ok(None)` means the remote call completed but returned no text.
    fn try_file(&self, input: &Path) -> Result<Option<PathBuf>> {
        let meta = std::fs::metadata(input).with_context(|| "stat input")?;
        if meta.len() > self.cfg.limits.max_input_file_bytes {
            return Err(anyhow!("input exceeds max_input_file_bytes: {}", meta.len()));
        }

        let extraction = self.client.extract(input)?;
        if extraction.result_text.is_empty() {
            return Ok(None);
        }

        let output = output_path(&self.cfg, input)?;
        let parent = output
            .parent()
            .ok_or_else(|| anyhow!("output path has no parent: {}", output.display()))?;
        ensure_dir(parent)?;

        if output.exists() && !self.cfg.output.overwrite {
            return Err(anyhow!(
                "output already exists and overwrite=false: {}",
                output.display()
            ));
        }

        std::fs::write(&output, &extraction.result_text)
            .with_context(|| format!("writing {}", output.display()))?;
        Ok(Some(output))
    }
}

/// Sibling output location: `<parent>/<dir_name>/<file name><suffix>`.
pub fn output_path(cfg: &Config, input: &Path) -> Result<PathBuf> {
    let parent = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = input
        .file_name()
        .ok_or_else(|| anyhow!("input has no file name: {}", input.display()))?;
    let mut file = name.to_os_string();
    file.push(&cfg.output.suffix);
    Ok(parent.join(&cfg.output.dir_name).join(file))
}
