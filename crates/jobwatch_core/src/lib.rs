//! Jobwatch core: pure domain logic and the application state machine.
mod effect;
mod msg;
mod reconcile;
mod record;
mod resolve;
mod state;
mod tier;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use reconcile::reconcile;
pub use record::{EmploymentType, JobRecord, Seniority};
pub use resolve::resolve_apply_url;
pub use state::{Activity, AppState, LogEntry, LOG_CAPACITY};
pub use tier::{age_label, AgeTier, ScoreTier};
pub use update::update;
pub use view_model::{AppViewModel, JobCardView, LogLineView};
