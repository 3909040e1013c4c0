// drillflow - job workflow action controller for borehole field operations
// Exposes the core components for the CLI, testing and integration

pub mod api;
pub mod cli;
pub mod config;
pub mod controller;
pub mod directory;
pub mod telemetry;
pub mod workflow;

// Re-export key types for easy access
pub use api::{ApiError, HttpJobsApi, JobsApi};
pub use config::{config, DrillflowConfig};
pub use controller::{DispatchError, WorkflowController, WorkflowView};
pub use directory::{users_with_role, Personnel};
pub use telemetry::{create_action_span, generate_correlation_id, init_telemetry};
pub use workflow::{
    eligible_actions, ActionForm, ActionKind, ActionLifecycle, ActionRequest, FormError, Job,
    JobStatus, Role, User,
};
