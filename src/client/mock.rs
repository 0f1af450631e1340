//! Mock extraction client for tests.

use super::{Extraction, Extractor};
use anyhow::{Result, anyhow};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Extraction succeeded with this text (may be empty).
    Text(String),
    /// Simulate a remote or I/O failure.
    Error(String),
}

/// Queued-response mock implementing [`Extractor`]. Records every call so
/// tests can assert exactly how many extractions were attempted.
#[derive(Clone, Default)]
pub struct MockExtractor {
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockExtractor {
    pub fn push_response(&self, response: MockResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }
}

impl Extractor for MockExtractor {
    fn extract(&self, input: &Path) -> Result<Extraction> {
        self.calls.lock().unwrap().push(input.to_path_buf());
        match self.responses.lock().unwrap().pop_front() {
            Some(MockResponse::Text(result_text)) => Ok(Extraction { result_text }),
            Some(MockResponse::Error(msg)) => Err(anyhow!(msg)),
            None => Err(anyhow!("mock has no response queued")),
        }
    }
}
