//! Jobwatch engine: inference collaborator client and effect execution.
mod engine;
mod inference;
mod prompt;
mod types;

pub use engine::EngineHandle;
pub use inference::{GeminiClient, InferenceClient, InferenceSettings, API_KEY_VAR};
pub use prompt::{analyze_prompt, response_schema, simulate_prompt};
pub use types::{EngineEvent, InvokeError, ScanMode};
