use crate::config::DrillflowConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

#[derive(Parser)]
#[command(name = "drillflow")]
#[command(about = "Job workflow actions for borehole field operations")]
#[command(long_about = "drillflow shows which workflow actions you may take on a borehole job \
                       (assign surveyor, complete survey, assign driller, complete drilling, revert) \
                       and sends them to the field-operations API. Start with 'drillflow show <JOB_ID>'.")]
pub struct Cli {
    /// Configuration file (defaults to drillflow.toml / .drillflow-rc in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, help = "Override api.base_url, e.g. https://ops.example.com/api")]
    pub base_url: Option<String>,

    /// Acting user id
    #[arg(long, global = true, help = "Override session.user_id")]
    pub user_id: Option<String>,

    /// Acting user role
    #[arg(long, global = true, help = "Override session.role (admin, project_manager, surveyor, driller)")]
    pub role: Option<String>,

    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Command-line flags win over every configuration source.
    pub fn apply_overrides(&self, config: &mut DrillflowConfig) {
        if let Some(base_url) = &self.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(user_id) = &self.user_id {
            config.session.user_id = Some(user_id.clone());
        }
        if let Some(role) = &self.role {
            config.session.role = Some(role.clone());
        }
        if self.verbose {
            config.observability.log_level = "debug".to_string();
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a job's status and the actions available to you
    Show {
        /// Job id
        job_id: String,
    },
    /// List users, optionally only those with one role
    Personnel {
        #[arg(long, help = "Only list users with this role")]
        only: Option<String>,
    },
    /// Assign a surveyor to a newly created job
    AssignSurveyor {
        job_id: String,
        #[arg(long, help = "Id of the surveyor to assign")]
        surveyor: Option<String>,
    },
    /// Mark the survey of an assigned job as complete
    CompleteSurvey {
        job_id: String,
        #[arg(long, default_value = "", help = "Survey notes")]
        notes: String,
    },
    /// Assign a driller to a surveyed job
    AssignDriller {
        job_id: String,
        #[arg(long, help = "Id of the driller to assign")]
        driller: Option<String>,
    },
    /// Record the drilling result of a job
    CompleteDrilling {
        job_id: String,
        #[arg(
            long,
            allow_negative_numbers = true,
            help = "Final depth in metres (must be greater than zero)"
        )]
        final_depth: Option<f64>,
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, help = "Water yield")]
        water_yield: f64,
        #[arg(long, help = "Record the borehole as unsuccessful")]
        unsuccessful: bool,
        #[arg(long, default_value = "", help = "Drilling notes")]
        notes: String,
    },
    /// Move a job back one status
    Revert {
        job_id: String,
        #[arg(long, default_value = "", help = "Why the status is being reverted")]
        reason: String,
    },
}
