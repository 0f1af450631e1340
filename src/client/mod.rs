pub mod mock;
pub mod types;
pub mod whisperer;

use anyhow::Result;
use std::path::Path;

pub use types::{Extraction, StatusOut, SubmitOut};
pub use whisperer::WhispererClient;

/// Seam between the batch pipeline and the remote extraction service.
pub trait Extractor {
    fn extract(&self, input: &Path) -> Result<Extraction>;
}
