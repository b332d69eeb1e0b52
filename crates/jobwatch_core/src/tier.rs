/// Coarse relevance bucket for a match score. Display categorization only;
/// never part of the collection order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: i32) -> Self {
        if score >= 90 {
            ScoreTier::High
        } else if score >= 75 {
            ScoreTier::Medium
        } else {
            ScoreTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Medium => "medium",
            ScoreTier::Low => "low",
        }
    }
}

/// Coarse freshness bucket for a record's age in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeTier {
    /// At most 24 hours old.
    New,
    /// At most 48 hours old.
    Recent,
    /// Older than 48 hours; displayed as whole days.
    Aged,
}

impl AgeTier {
    pub fn from_hours(age_hours: f64) -> Self {
        if age_hours <= 24.0 {
            AgeTier::New
        } else if age_hours <= 48.0 {
            AgeTier::Recent
        } else {
            AgeTier::Aged
        }
    }
}

/// Human-readable age: whole hours up to the `Recent` tier, whole days
/// (floor division by 24) beyond it. Total over the numeric domain; negative
/// values land in `New` via the same threshold comparisons.
pub fn age_label(age_hours: f64) -> String {
    match AgeTier::from_hours(age_hours) {
        AgeTier::New | AgeTier::Recent => format!("{}h ago", age_hours.max(0.0) as u64),
        AgeTier::Aged => {
            let days = (age_hours / 24.0).floor() as u64;
            if days == 1 {
                "1 day ago".to_string()
            } else {
                format!("{days} days ago")
            }
        }
    }
}
