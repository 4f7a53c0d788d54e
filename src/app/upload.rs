//! Upload submission for the App.
//!
//! Reads the chosen file off the event loop, runs the single upload
//! attempt, and reports the outcome back over the app channel.

use std::path::Path;

use tokio::sync::mpsc;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::upload::{UploadClient, UploadConfig};

use super::AppMessage;

/// Outcome of a completed upload, ready to append to the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadOutcome {
    pub file_name: String,
    pub size_bytes: u64,
    pub message: String,
}

/// Spawn the upload task for the given path.
pub fn spawn_upload(
    config: UploadConfig,
    path: String,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) {
    tokio::spawn(async move {
        let msg = match run_upload(config, &path).await {
            Ok(outcome) => AppMessage::UploadFinished {
                file_name: outcome.file_name,
                size_bytes: outcome.size_bytes,
                message: outcome.message,
            },
            Err(error) => AppMessage::UploadFailed { error },
        };
        let _ = message_tx.send(msg);
    });
}

/// Read the file and perform one upload attempt.
///
/// Errors come back as display strings since their only consumer is the
/// notice bar.
pub async fn run_upload(config: UploadConfig, path: &str) -> Result<UploadOutcome, String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| format!("Could not read {}: {}", path, e))?;

    let file_name = Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string());
    let size_bytes = bytes.len() as u64;

    debug!("Read {} ({} bytes) for upload", file_name, size_bytes);

    let transport = ReqwestHttpClient::with_timeout(config.timeout);
    let client = UploadClient::with_config(transport, config);
    let response = client
        .upload(&file_name, bytes)
        .await
        .map_err(|e| e.to_string())?;

    Ok(UploadOutcome {
        file_name,
        size_bytes,
        message: response.message,
    })
}
