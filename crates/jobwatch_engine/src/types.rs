use jobwatch_core::JobRecord;
use thiserror::Error;

use crate::inference::API_KEY_VAR;

/// What the inference collaborator is asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanMode {
    /// Request a batch of synthetic current-month postings.
    Simulate,
    /// Request extraction and scoring of one supplied job-description text.
    /// The collaborator returns zero or one record; array semantics apply.
    Analyze(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Terminal outcome of one invocation. No retries, no partial batches:
    /// either the whole batch parsed or the invocation failed.
    InvocationFinished {
        mode: ScanMode,
        result: Result<Vec<JobRecord>, InvokeError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// No API credential configured; reported before any call is attempted.
    #[error("no API key configured (set {API_KEY_VAR})")]
    MissingCredential,
    /// The outbound call failed: network, quota, or an HTTP error status.
    #[error("inference request failed: {0}")]
    Invocation(String),
    /// The collaborator returned text that is not a valid record array.
    #[error("malformed model response: {0}")]
    MalformedResponse(String),
}
