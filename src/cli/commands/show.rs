use crate::api::JobsApi;
use crate::cli::commands::{api_failure, AppContext, Command};
use crate::controller::WorkflowView;
use crate::directory::Personnel;
use crate::workflow::{ActionKind, User};
use anyhow::Result;

pub struct ShowCommand {
    pub job_id: String,
}

impl Command for ShowCommand {
    async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let user = ctx.current_user()?;
        let job = ctx
            .api
            .fetch_job(&self.job_id)
            .await
            .map_err(api_failure)?;

        // The directory is only worth a request for pickers or assignee names.
        let needs_pickers = crate::workflow::eligible_actions(&job, &user)
            .iter()
            .any(|a| matches!(a, ActionKind::AssignSurveyor | ActionKind::AssignDriller));
        let has_assignees = job.assigned_surveyor_id.is_some() || job.assigned_driller_id.is_some();
        let personnel = if needs_pickers || has_assignees {
            Personnel::load(&ctx.api).await.map_err(api_failure)?
        } else {
            Personnel::default()
        };

        let view = WorkflowView::build(&job, &user, &personnel);

        println!("📋 Job {}", view.job_id);
        match view.status {
            Some(status) => println!("   Status: {status}"),
            None => println!("   Status: {} (unrecognized)", job.status),
        }
        if let Some(surveyor) = &job.assigned_surveyor_id {
            println!("   Surveyor: {}", assignee_label(&personnel, surveyor));
        }
        if let Some(driller) = &job.assigned_driller_id {
            println!("   Driller: {}", assignee_label(&personnel, driller));
        }
        println!();

        if view.actions.is_empty() {
            println!("🔒 No actions available to {} ({})", user.id, user.role);
            return Ok(());
        }

        println!("🎯 Available actions:");
        for action in &view.actions {
            println!("   → {:<18} drillflow {} {}", action.label(), command_name(*action), view.job_id);
            match action {
                ActionKind::AssignSurveyor => print_picker("surveyor", &view.surveyors),
                ActionKind::AssignDriller => print_picker("driller", &view.drillers),
                _ => {}
            }
        }
        Ok(())
    }
}

fn command_name(action: ActionKind) -> &'static str {
    match action {
        ActionKind::RevertStatus => "revert",
        other => other.endpoint(),
    }
}

fn assignee_label(personnel: &Personnel, user_id: &str) -> String {
    match personnel.find(user_id) {
        Some(user) if user.name.is_some() => format!("{} ({})", user.display_name(), user.id),
        _ => user_id.to_string(),
    }
}

fn print_picker(flag: &str, users: &[User]) {
    if users.is_empty() {
        println!("       (no {flag}s found)");
        return;
    }
    for user in users {
        println!("       --{flag} {:<12} {}", user.id, user.display_name());
    }
}
