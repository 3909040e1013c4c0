use crate::api::{ApiError, HttpJobsApi};
use crate::cli::Commands;
use crate::config::DrillflowConfig;
use crate::workflow::{ActionForm, User};
use anyhow::{anyhow, Context, Result};

pub mod action;
pub mod personnel;
pub mod show;

pub use action::ActionCommand;
pub use personnel::PersonnelCommand;
pub use show::ShowCommand;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// What every command needs: the API client and who is acting.
pub struct AppContext {
    pub config: DrillflowConfig,
    pub api: HttpJobsApi,
}

impl AppContext {
    pub fn new(config: DrillflowConfig) -> Result<Self> {
        let api = HttpJobsApi::from_config(&config.api)
            .with_context(|| format!("Cannot use API at '{}'", config.api.base_url))?;
        Ok(Self { config, api })
    }

    /// The signed-in user, from flags or `[session]` configuration.
    pub fn current_user(&self) -> Result<User> {
        let session = &self.config.session;
        let id = session
            .user_id
            .clone()
            .context("No acting user: pass --user-id or set session.user_id")?;
        let role = session
            .role
            .clone()
            .context("No acting role: pass --role or set session.role")?;

        Ok(User {
            id,
            role,
            name: None,
        })
    }
}

/// Turns a backend failure into the banner text, keeping the details in the log.
pub fn api_failure(err: ApiError) -> anyhow::Error {
    tracing::debug!(status = ?err.status(), error = %err, "Backend request failed");
    anyhow!(err.user_message())
}

pub async fn run(command: Commands, ctx: &AppContext) -> Result<()> {
    match command {
        Commands::Show { job_id } => ShowCommand { job_id }.execute(ctx).await,
        Commands::Personnel { only } => PersonnelCommand { role: only }.execute(ctx).await,
        Commands::AssignSurveyor { job_id, surveyor } => {
            ActionCommand::new(job_id, ActionForm::AssignSurveyor { surveyor_id: surveyor })
                .execute(ctx)
                .await
        }
        Commands::CompleteSurvey { job_id, notes } => {
            ActionCommand::new(job_id, ActionForm::CompleteSurvey { notes })
                .execute(ctx)
                .await
        }
        Commands::AssignDriller { job_id, driller } => {
            ActionCommand::new(job_id, ActionForm::AssignDriller { driller_id: driller })
                .execute(ctx)
                .await
        }
        Commands::CompleteDrilling {
            job_id,
            final_depth,
            water_yield,
            unsuccessful,
            notes,
        } => {
            ActionCommand::new(
                job_id,
                ActionForm::CompleteDrilling {
                    final_depth,
                    water_yield,
                    is_successful: !unsuccessful,
                    notes,
                },
            )
            .execute(ctx)
            .await
        }
        Commands::Revert { job_id, reason } => {
            ActionCommand::new(job_id, ActionForm::RevertStatus { reason })
                .execute(ctx)
                .await
        }
    }
}
