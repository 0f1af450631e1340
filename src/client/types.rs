use serde::{Deserialize, Serialize};

/// Final payload of a completed extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Extraction {
    #[serde(default)]
    pub result_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOut {
    pub whisper_hash: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusOut {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
