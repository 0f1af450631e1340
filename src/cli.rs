use crate::{
    client::WhispererClient, config::Config, discover::discover_pdfs, pipeline::Batch,
    util::now_rfc3339,
};
use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "whisper-batch")]
#[command(about = "Batch PDF-to-text extractor (LLMWhisperer V2)")]
pub struct Args {
    /// Path to a PDF file or a directory of PDFs.
    pub input: PathBuf,

    /// Path to config TOML. If omitted, uses ./whisper-batch.toml if present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn dispatch(args: Args) -> Result<()> {
    let cfg = resolve_config(args.config.as_deref())?;
    let _guard = init_logging(&args, &cfg)?;

    dotenvy::dotenv().ok();
    let api_key = resolve_api_key(&cfg)?;

    let files = discover_pdfs(&args.input)?;
    println!("Found {} PDF files to process", files.len());

    let client = WhispererClient::new(&cfg, api_key)?;
    let batch = Batch::new(&cfg, client);

    let started = now_rfc3339();
    let summary = batch.run(&files)?;

    if cfg.output.write_report_json {
        let report = serde_json::json!({
            "started": started,
            "finished": now_rfc3339(),
            "summary": &summary,
        });
        let path = PathBuf::from(&cfg.output.report_filename);
        std::fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        info!("report written to {}", path.display());
    }

    println!(
        "Processing complete: {}/{} files successful",
        summary.successful, summary.attempted
    );
    Ok(())
}

fn resolve_config(user: Option<&Path>) -> Result<Config> {
    if let Some(p) = user {
        return Config::load(p);
    }
    for candidate in ["whisper-batch.toml", "whisper-batch.example.toml"] {
        let p = Path::new(candidate);
        if p.exists() {
            return Config::load(p);
        }
    }
    Ok(Config::default())
}

fn resolve_api_key(cfg: &Config) -> Result<String> {
    match std::env::var(&cfg.api.key_env) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(anyhow!("{} not found in environment", cfg.api.key_env)),
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<Option<WorkerGuard>> {
    let level = args
        .log_level
        .as_deref()
        .unwrap_or(cfg.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .boxed()
    };

    let (file_layer, guard) = if let Some(path) = resolve_log_path(cfg) {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        crate::util::ensure_dir(parent)?;
        let file = std::fs::File::create(&path)
            .with_context(|| format!("create log file: {}", path.display()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .boxed();
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    Ok(guard)
}

fn resolve_log_path(cfg: &Config) -> Option<PathBuf> {
    if !cfg.logging.write_to_file {
        return None;
    }
    if !cfg.logging.file_path.is_empty() {
        return Some(PathBuf::from(&cfg.logging.file_path));
    }
    Some(PathBuf::from("whisper-batch.log"))
}
