use anyhow::anyhow;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;

use prdscore_payloads::ScoreRecord;

use crate::config::SubmitConfig;

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("server answered with status {0}")]
    Status(u16),

    /// Connection refused, DNS failure, timeout.
    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("encoding error: {0:#}")]
    Encoding(anyhow::Error),

    #[error("unexpected error: {0:#}")]
    Other(anyhow::Error),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            SubmissionError::Other(e.into())
        } else if e.is_timeout() || e.is_connect() || e.is_request() {
            SubmissionError::Network(e)
        } else if e.is_body() || e.is_decode() {
            SubmissionError::Encoding(e.into())
        } else {
            SubmissionError::Other(e.into())
        }
    }
}

impl From<serde_json::Error> for SubmissionError {
    fn from(e: serde_json::Error) -> Self {
        SubmissionError::Encoding(e.into())
    }
}

fn attempt_sending(
    client: &Client,
    config: &SubmitConfig,
    record: &ScoreRecord,
) -> Result<(), SubmissionError> {
    let url = reqwest::Url::parse(&config.url)
        .map_err(|e| SubmissionError::Other(anyhow!("invalid endpoint {:?}: {}", config.url, e)))?;
    let serialized = serde_json::to_string(record)?;

    let resp = client
        .post(url)
        .header(CONTENT_TYPE, "application/json")
        .body(serialized)
        .timeout(config.timeout)
        .send()?;

    let status = resp.status();
    if status != StatusCode::OK {
        return Err(SubmissionError::Status(status.as_u16()));
    }

    Ok(())
}

/// Make exactly one attempt at submitting `record`. Nothing is retried.
pub fn submit(config: &SubmitConfig, record: &ScoreRecord) -> Result<(), SubmissionError> {
    let client = Client::builder().build()?;
    attempt_sending(&client, config, record)
}

/// Submit and log the outcome: one info line on success, one warning otherwise.
///
/// Never fails; the return value only says whether the server took the record.
pub fn send_synchronously(config: &SubmitConfig, record: &ScoreRecord) -> bool {
    match submit(config, record) {
        Ok(()) => {
            log::info!("Submitted PRD score for {}", record.document_name);
            true
        }
        Err(e) => {
            log::warn!("Unable to submit PRD score for {}: {}", record.document_name, e);
            false
        }
    }
}
