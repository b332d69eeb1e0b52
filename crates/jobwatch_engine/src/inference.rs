use std::time::Duration;

use jobwatch_core::JobRecord;
use jobwatch_logging::watch_debug;
use serde_json::{json, Value};

use crate::prompt;
use crate::types::{InvokeError, ScanMode};

/// Environment variable holding the API credential, read at call time.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone)]
pub struct InferenceSettings {
    pub base_url: String,
    pub model: String,
    pub request_timeout: Duration,
    /// Overrides the process environment; used by tests.
    pub api_key: Option<String>,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            request_timeout: Duration::from_secs(90),
            api_key: None,
        }
    }
}

/// Narrow capability seam over the inference collaborator, so the state
/// machine and app loop can be exercised with deterministic stubs.
#[async_trait::async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(&self, mode: &ScanMode) -> Result<Vec<JobRecord>, InvokeError>;
}

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: InferenceSettings,
}

impl GeminiClient {
    pub fn new(settings: InferenceSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, InvokeError> {
        reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| InvokeError::Invocation(err.to_string()))
    }

    // Read at call time so a key exported after startup is still picked up.
    fn api_key(&self) -> Result<String, InvokeError> {
        if let Some(key) = &self.settings.api_key {
            return Ok(key.clone());
        }
        std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(InvokeError::MissingCredential)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            self.settings.model
        )
    }

    fn request_body(mode: &ScanMode) -> Value {
        let prompt = match mode {
            ScanMode::Simulate => prompt::simulate_prompt(),
            ScanMode::Analyze(text) => prompt::analyze_prompt(text),
        };
        json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": prompt::response_schema(),
            },
        })
    }
}

#[async_trait::async_trait]
impl InferenceClient for GeminiClient {
    async fn invoke(&self, mode: &ScanMode) -> Result<Vec<JobRecord>, InvokeError> {
        let key = self.api_key()?;
        let client = self.build_client()?;

        watch_debug!("invoking {} mode={}", self.endpoint(), mode_label(mode));
        let response = client
            .post(self.endpoint())
            .header("x-goog-api-key", key)
            .json(&Self::request_body(mode))
            .send()
            .await
            .map_err(|err| InvokeError::Invocation(err.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| InvokeError::Invocation(err.to_string()))?;
        if !status.is_success() {
            return Err(InvokeError::Invocation(format!(
                "http status {}: {}",
                status.as_u16(),
                text.trim()
            )));
        }

        parse_records(&text)
    }
}

fn mode_label(mode: &ScanMode) -> &'static str {
    match mode {
        ScanMode::Simulate => "simulate",
        ScanMode::Analyze(_) => "analyze",
    }
}

/// Unwraps the candidate text from the response envelope and parses it as an
/// array of records. Any shape mismatch rejects the whole batch.
fn parse_records(envelope: &str) -> Result<Vec<JobRecord>, InvokeError> {
    let envelope: Value = serde_json::from_str(envelope)
        .map_err(|err| InvokeError::MalformedResponse(err.to_string()))?;
    let text = envelope
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            InvokeError::MalformedResponse("no candidate text in response".to_string())
        })?;
    serde_json::from_str(text).map_err(|err| InvokeError::MalformedResponse(err.to_string()))
}
