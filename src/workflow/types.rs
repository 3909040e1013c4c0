// Job, user and action vocabulary shared by the resolver, forms and dispatcher

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a borehole job, in workflow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JobStatus {
    Created,
    Assigned,
    Surveyed,
    Drilling,
    Completed,
}

impl JobStatus {
    pub const ALL: [JobStatus; 5] = [
        JobStatus::Created,
        JobStatus::Assigned,
        JobStatus::Surveyed,
        JobStatus::Drilling,
        JobStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Created => "created",
            JobStatus::Assigned => "assigned",
            JobStatus::Surveyed => "surveyed",
            JobStatus::Drilling => "drilling",
            JobStatus::Completed => "completed",
        }
    }

    /// Status reached by the forward action available from this one.
    pub fn next(&self) -> Option<JobStatus> {
        match self {
            JobStatus::Created => Some(JobStatus::Assigned),
            JobStatus::Assigned => Some(JobStatus::Surveyed),
            JobStatus::Surveyed => Some(JobStatus::Drilling),
            JobStatus::Drilling => Some(JobStatus::Completed),
            JobStatus::Completed => None,
        }
    }

    /// Status a revert moves back to. `Created` has nowhere to go.
    pub fn previous(&self) -> Option<JobStatus> {
        match self {
            JobStatus::Created => None,
            JobStatus::Assigned => Some(JobStatus::Created),
            JobStatus::Surveyed => Some(JobStatus::Assigned),
            JobStatus::Drilling => Some(JobStatus::Surveyed),
            JobStatus::Completed => Some(JobStatus::Drilling),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(JobStatus::Created),
            "assigned" => Ok(JobStatus::Assigned),
            "surveyed" => Ok(JobStatus::Surveyed),
            "drilling" => Ok(JobStatus::Drilling),
            "completed" => Ok(JobStatus::Completed),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    ProjectManager,
    Surveyor,
    Driller,
}

impl Role {
    pub const ALL: [Role; 4] = [
        Role::Admin,
        Role::ProjectManager,
        Role::Surveyor,
        Role::Driller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::ProjectManager => "project_manager",
            Role::Surveyor => "surveyor",
            Role::Driller => "driller",
        }
    }

    /// Admins and project managers drive assignments and reverts.
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Admin | Role::ProjectManager)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "project_manager" => Ok(Role::ProjectManager),
            "surveyor" => Ok(Role::Surveyor),
            "driller" => Ok(Role::Driller),
            other => Err(UnknownValue(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized value '{0}'")]
pub struct UnknownValue(pub String);

/// Job record as returned by the backend.
///
/// `status` stays a raw string on the wire so that a value this client does
/// not know about still deserializes; [`Job::status`] interprets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub assigned_surveyor_id: Option<String>,
    #[serde(default)]
    pub assigned_driller_id: Option<String>,
}

impl Job {
    pub fn new(id: impl Into<String>, status: JobStatus) -> Self {
        Self {
            id: id.into(),
            status: status.as_str().to_string(),
            assigned_surveyor_id: None,
            assigned_driller_id: None,
        }
    }

    pub fn with_surveyor(mut self, surveyor_id: impl Into<String>) -> Self {
        self.assigned_surveyor_id = Some(surveyor_id.into());
        self
    }

    pub fn with_driller(mut self, driller_id: impl Into<String>) -> Self {
        self.assigned_driller_id = Some(driller_id.into());
        self
    }

    /// `None` when the backend sent a status outside the known lifecycle.
    pub fn status(&self) -> Option<JobStatus> {
        self.status.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role: role.as_str().to_string(),
            name: None,
        }
    }

    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// The five operations a user can request against a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    AssignSurveyor,
    CompleteSurvey,
    AssignDriller,
    CompleteDrilling,
    RevertStatus,
}

impl ActionKind {
    /// Path segment under `/jobs/:id/`.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ActionKind::AssignSurveyor => "assign-surveyor",
            ActionKind::CompleteSurvey => "complete-survey",
            ActionKind::AssignDriller => "assign-driller",
            ActionKind::CompleteDrilling => "complete-drilling",
            ActionKind::RevertStatus => "revert-status",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ActionKind::AssignSurveyor => "Assign surveyor",
            ActionKind::CompleteSurvey => "Complete survey",
            ActionKind::AssignDriller => "Assign driller",
            ActionKind::CompleteDrilling => "Complete drilling",
            ActionKind::RevertStatus => "Revert status",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}
