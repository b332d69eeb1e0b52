#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the engine for a batch of synthetic current-month postings.
    StartScan,
    /// Ask the engine to extract and score one pasted job description.
    StartAnalysis { text: String },
}
