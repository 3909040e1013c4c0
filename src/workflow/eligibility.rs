// Action eligibility: (status, role, identity) -> permitted actions
//
// The backend owns the real state machine. This table only decides which
// actions the client offers; it never validates a transition.

use super::types::{ActionKind, Job, JobStatus, Role, User};

/// Permitted actions for `user` on `job`, forward action first, revert last.
///
/// Unrecognized job statuses and unrecognized user roles both yield an empty
/// list rather than an error.
pub fn eligible_actions(job: &Job, user: &User) -> Vec<ActionKind> {
    let (Some(status), Some(role)) = (job.status(), user.role()) else {
        tracing::debug!(
            job_id = %job.id,
            status = %job.status,
            role = %user.role,
            "No actions for unrecognized status or role"
        );
        return Vec::new();
    };

    resolve(
        status,
        role,
        &user.id,
        job.assigned_surveyor_id.as_deref(),
        job.assigned_driller_id.as_deref(),
    )
}

pub fn resolve(
    status: JobStatus,
    role: Role,
    user_id: &str,
    assigned_surveyor_id: Option<&str>,
    assigned_driller_id: Option<&str>,
) -> Vec<ActionKind> {
    let mut actions = Vec::with_capacity(2);

    let forward = match status {
        JobStatus::Created => role.is_manager().then_some(ActionKind::AssignSurveyor),
        JobStatus::Assigned => acts_as_assignee(role, Role::Surveyor, user_id, assigned_surveyor_id)
            .then_some(ActionKind::CompleteSurvey),
        JobStatus::Surveyed => role.is_manager().then_some(ActionKind::AssignDriller),
        JobStatus::Drilling => acts_as_assignee(role, Role::Driller, user_id, assigned_driller_id)
            .then_some(ActionKind::CompleteDrilling),
        JobStatus::Completed => None,
    };
    actions.extend(forward);

    if revert_permitted(status, role) {
        actions.push(ActionKind::RevertStatus);
    }

    actions
}

/// Revert is gated by role only: any manager, any status but `created`.
pub fn revert_permitted(status: JobStatus, role: Role) -> bool {
    role.is_manager() && status.previous().is_some()
}

// Admin skips the identity check entirely; everyone else must hold the
// field role and be the user recorded on the job.
fn acts_as_assignee(role: Role, field_role: Role, user_id: &str, assigned_id: Option<&str>) -> bool {
    match role {
        Role::Admin => true,
        _ if role == field_role => assigned_id == Some(user_id),
        _ => false,
    }
}
