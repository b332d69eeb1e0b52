use crate::record::JobRecord;
use crate::resolve::resolve_apply_url;
use crate::state::{Activity, AppState};
use crate::tier::{age_label, ScoreTier};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub activity: Activity,
    /// One card per record, in collection (display) order.
    pub cards: Vec<JobCardView>,
    /// Status lines, oldest first.
    pub log: Vec<LogLineView>,
    pub input: String,
    pub job_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobCardView {
    pub title: String,
    pub company: String,
    pub primary_role: String,
    pub location: String,
    pub employment_label: &'static str,
    pub seniority_label: &'static str,
    pub match_score: i32,
    pub score_tier: ScoreTier,
    pub age_label: String,
    pub skills: Vec<String>,
    pub source: String,
    /// Always usable: supplied URL or the resolver's fallback.
    pub apply_url: String,
    pub alert_en: String,
    pub alert_sv: String,
}

impl JobCardView {
    fn from_record(record: &JobRecord) -> Self {
        Self {
            title: record.title.clone(),
            company: record.company.clone(),
            primary_role: record.primary_role.clone(),
            location: record.location.clone(),
            employment_label: record.employment_type.label(),
            seniority_label: record.seniority.label(),
            match_score: record.match_score,
            score_tier: ScoreTier::from_score(record.match_score),
            age_label: age_label(record.age_hours),
            skills: record.skills.clone(),
            source: record.source.clone(),
            apply_url: resolve_apply_url(record),
            alert_en: record.alert_message_en.clone(),
            alert_sv: record.alert_message_sv.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLineView {
    pub timestamp: String,
    pub text: String,
}

pub(crate) fn build(state: &AppState) -> AppViewModel {
    AppViewModel {
        activity: state.activity(),
        cards: state.records().iter().map(JobCardView::from_record).collect(),
        log: state
            .log_entries()
            .map(|entry| LogLineView {
                timestamp: entry.at.format("%H:%M:%S").to_string(),
                text: entry.text.clone(),
            })
            .collect(),
        input: state.input().to_string(),
        job_count: state.records().len(),
    }
}
