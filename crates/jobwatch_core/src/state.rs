use std::collections::VecDeque;

use chrono::{DateTime, Utc};

use crate::record::JobRecord;
use crate::view_model::AppViewModel;

/// The log keeps the most recent entries only; the oldest is discarded first.
pub const LOG_CAPACITY: usize = 50;

/// The busy flag: at most one invocation is in flight at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Scanning,
    Analyzing,
}

/// One timestamped status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub at: DateTime<Utc>,
    pub text: String,
}

/// All mutable session state, owned here rather than living as ambient
/// globals. Transitions happen only inside `update`: trigger-start,
/// response-received, response-failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    activity: Activity,
    records: Vec<JobRecord>,
    log: VecDeque<LogEntry>,
    input: String,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        crate::view_model::build(self)
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn log_entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.iter()
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.input = text;
        self.dirty = true;
    }

    pub(crate) fn begin(&mut self, activity: Activity) {
        self.activity = activity;
        self.dirty = true;
    }

    pub(crate) fn finish(&mut self) {
        self.activity = Activity::Idle;
        self.dirty = true;
    }

    pub(crate) fn push_log(&mut self, at: DateTime<Utc>, text: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(LogEntry { at, text });
        self.dirty = true;
    }

    /// Hands the collection to the reconciler; the caller puts back the
    /// merged result via `replace_records`.
    pub(crate) fn take_records(&mut self) -> Vec<JobRecord> {
        std::mem::take(&mut self.records)
    }

    pub(crate) fn replace_records(&mut self, records: Vec<JobRecord>) {
        self.records = records;
        self.dirty = true;
    }
}
