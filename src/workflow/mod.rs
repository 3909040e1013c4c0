// Job workflow: eligibility table, dialog forms, handler lifecycle

pub mod eligibility;
pub mod forms;
pub mod handler;
pub mod types;

pub use eligibility::{eligible_actions, resolve, revert_permitted};
pub use forms::{ActionForm, ActionRequest, FormError};
pub use handler::{ActionHandler, ActionLifecycle, HandlerEvent};
pub use types::{ActionKind, Job, JobStatus, Role, User};
