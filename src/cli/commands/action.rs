use crate::api::JobsApi;
use crate::cli::commands::{api_failure, AppContext, Command};
use crate::controller::{DispatchError, WorkflowController};
use crate::workflow::{eligible_actions, ActionForm};
use anyhow::{anyhow, bail, Result};

/// Runs one workflow action: fetch job, check eligibility, send, refresh.
pub struct ActionCommand {
    pub job_id: String,
    pub form: ActionForm,
}

impl ActionCommand {
    pub fn new(job_id: String, form: ActionForm) -> Self {
        Self { job_id, form }
    }
}

impl Command for ActionCommand {
    async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let user = ctx.current_user()?;
        let job = ctx
            .api
            .fetch_job(&self.job_id)
            .await
            .map_err(api_failure)?;

        let action = self.form.kind();
        println!("🔧 {} on job {} ({})", action.label(), job.id, job.status);

        let mut controller = WorkflowController::new(ctx.api.clone());
        let outcome = controller
            .submit(&job, &user, &self.form, || ctx.api.fetch_job(&self.job_id))
            .await;

        match outcome {
            Ok(Ok(updated)) => {
                println!("✅ Done. Job {} is now {}", updated.id, updated.status);
                Ok(())
            }
            Ok(Err(refresh_err)) => {
                println!("✅ Action accepted");
                println!("⚠️  Could not reload the job: {}", refresh_err.user_message());
                Ok(())
            }
            Err(DispatchError::NotEligible { .. }) => {
                let available: Vec<&str> = eligible_actions(&job, &user)
                    .iter()
                    .map(|a| a.label())
                    .collect();
                if available.is_empty() {
                    bail!("{} is not available: no actions open to {} on this job", action.label(), user.role);
                }
                bail!("{} is not available. Available: {}", action.label(), available.join(", "));
            }
            Err(DispatchError::Api(err)) => Err(api_failure(err)),
            Err(err) => Err(anyhow!(err.user_message())),
        }
    }
}
