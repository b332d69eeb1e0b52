use std::sync::{mpsc, Arc};
use std::thread;

use chrono::Utc;
use jobwatch_core::{Effect, Msg};
use jobwatch_engine::{
    EngineEvent, EngineHandle, GeminiClient, InferenceSettings, ScanMode,
};
use jobwatch_logging::{watch_info, watch_warn};

use super::app::Input;

/// Bridges the state machine's effects to the engine, and engine events back
/// into timestamped messages for the main loop.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(input_tx: mpsc::Sender<Input>) -> Self {
        let client = Arc::new(GeminiClient::new(InferenceSettings::default()));
        let (engine, events) = EngineHandle::spawn(client);
        spawn_event_loop(events, input_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartScan => {
                    watch_info!("StartScan");
                    self.engine.invoke(ScanMode::Simulate);
                }
                Effect::StartAnalysis { text } => {
                    watch_info!("StartAnalysis text_len={}", text.len());
                    self.engine.invoke(ScanMode::Analyze(text));
                }
            }
        }
    }
}

fn spawn_event_loop(events: mpsc::Receiver<EngineEvent>, input_tx: mpsc::Sender<Input>) {
    thread::spawn(move || {
        while let Ok(event) = events.recv() {
            let EngineEvent::InvocationFinished { result, .. } = event;
            let at = Utc::now();
            let msg = match result {
                Ok(records) => {
                    watch_info!("invocation finished with {} record(s)", records.len());
                    Msg::InvocationSucceeded { records, at }
                }
                Err(err) => {
                    watch_warn!("invocation failed: {err}");
                    Msg::InvocationFailed {
                        error: err.to_string(),
                        at,
                    }
                }
            };
            if input_tx.send(Input::Core(msg)).is_err() {
                break;
            }
        }
    });
}
