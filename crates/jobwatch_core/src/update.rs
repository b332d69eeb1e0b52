use crate::reconcile::reconcile;
use crate::state::{Activity, AppState};
use crate::{Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::ScanClicked { at } => {
            // A scan or analysis already in flight blocks new triggers.
            if state.activity() != Activity::Idle {
                return (state, Vec::new());
            }
            state.begin(Activity::Scanning);
            state.push_log(at, "Scanning the market for fresh postings...".to_string());
            vec![Effect::StartScan]
        }
        Msg::AnalyzeClicked { at } => {
            if state.activity() != Activity::Idle {
                return (state, Vec::new());
            }
            let text = state.input().trim().to_string();
            if text.is_empty() {
                state.push_log(
                    at,
                    "Nothing to analyze: paste a job description first.".to_string(),
                );
                return (state, Vec::new());
            }
            state.begin(Activity::Analyzing);
            state.push_log(at, "Analyzing the pasted job description...".to_string());
            vec![Effect::StartAnalysis { text }]
        }
        Msg::InvocationSucceeded { records, at } => {
            state.finish();
            if records.is_empty() {
                // A legitimate outcome, not an error.
                state.push_log(at, "No matching postings this time.".to_string());
            } else {
                state.push_log(at, format!("Received {} job alert(s).", records.len()));
                let existing = state.take_records();
                state.replace_records(reconcile(records, existing));
            }
            Vec::new()
        }
        Msg::InvocationFailed { error, at } => {
            state.finish();
            state.push_log(at, format!("Request failed: {error}"));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
