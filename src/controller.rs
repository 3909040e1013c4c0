// Workflow controller
//
// Data flows one way: the caller owns the job and hands it in on every call.
// Nothing here caches a job; after a successful action the caller's refresh
// callback decides what the next job looks like.

use crate::api::{ApiError, JobsApi};
use crate::directory::Personnel;
use crate::telemetry::{create_action_span, generate_correlation_id};
use crate::workflow::{
    eligible_actions, ActionForm, ActionKind, ActionLifecycle, FormError, Job, JobStatus, User,
};
use std::future::Future;
use thiserror::Error;
use tracing::{info, warn, Instrument};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("'{}' is not available for this job", .action.label())]
    NotEligible { action: ActionKind },
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl DispatchError {
    /// True when a request actually reached (or tried to reach) the backend.
    pub fn was_sent(&self) -> bool {
        matches!(self, DispatchError::Api(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            DispatchError::Api(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}

/// Everything a job view renders from one (job, user, personnel) snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowView {
    pub job_id: String,
    pub status: Option<JobStatus>,
    pub actions: Vec<ActionKind>,
    pub surveyors: Vec<User>,
    pub drillers: Vec<User>,
}

impl WorkflowView {
    pub fn build(job: &Job, user: &User, personnel: &Personnel) -> Self {
        Self {
            job_id: job.id.clone(),
            status: job.status(),
            actions: eligible_actions(job, user),
            surveyors: personnel.surveyors(),
            drillers: personnel.drillers(),
        }
    }

    pub fn allows(&self, action: ActionKind) -> bool {
        self.actions.contains(&action)
    }
}

pub struct WorkflowController<A: JobsApi> {
    api: A,
    lifecycle: ActionLifecycle,
}

impl<A: JobsApi> WorkflowController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            lifecycle: ActionLifecycle::new(),
        }
    }

    pub fn lifecycle(&self) -> &ActionLifecycle {
        &self.lifecycle
    }

    pub fn dismiss_banner(&mut self) {
        self.lifecycle.dismiss();
    }

    /// Sends one action request for `job` on behalf of `user`.
    ///
    /// The action must be eligible and the form valid, otherwise nothing is
    /// sent. On success `refresh` runs and its output is returned. On failure
    /// the banner carries the backend message and `refresh` is not called.
    pub async fn submit<F, Fut, R>(
        &mut self,
        job: &Job,
        user: &User,
        form: &ActionForm,
        refresh: F,
    ) -> Result<R, DispatchError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = R>,
    {
        let action = form.kind();
        if !eligible_actions(job, user).contains(&action) {
            return Err(DispatchError::NotEligible { action });
        }
        let request = form.validate()?;

        let correlation_id = generate_correlation_id();
        let span = create_action_span(action, &job.id, &correlation_id);

        self.lifecycle.begin(action);
        let result = self
            .api
            .submit_action(&job.id, &request)
            .instrument(span.clone())
            .await;

        match result {
            Ok(()) => {
                self.lifecycle.succeed();
                span.in_scope(|| info!(user.id = %user.id, "Action accepted, refreshing job"));
                Ok(refresh().instrument(span).await)
            }
            Err(err) => {
                let message = err.user_message();
                self.lifecycle.fail(message.as_str());
                span.in_scope(|| warn!(error = %err, banner = %message, "Action failed"));
                Err(DispatchError::Api(err))
            }
        }
    }
}
