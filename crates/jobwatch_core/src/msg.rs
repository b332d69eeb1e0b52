use chrono::{DateTime, Utc};

use crate::record::JobRecord;

/// Messages carry their own timestamps so `update` stays a pure function;
/// the hosting loop stamps them on the way in.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// User edited the analysis input box.
    InputChanged(String),
    /// User triggered a simulated market scan.
    ScanClicked { at: DateTime<Utc> },
    /// User submitted the current input text for analysis.
    AnalyzeClicked { at: DateTime<Utc> },
    /// The inference engine returned a batch of records (possibly empty).
    InvocationSucceeded {
        records: Vec<JobRecord>,
        at: DateTime<Utc>,
    },
    /// The inference engine failed; the collection stays untouched.
    InvocationFailed { error: String, at: DateTime<Utc> },
    /// Fallback for placeholder wiring.
    NoOp,
}
