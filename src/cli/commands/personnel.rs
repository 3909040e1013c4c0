use crate::cli::commands::{api_failure, AppContext, Command};
use crate::directory::{users_with_role, Personnel};
use crate::workflow::Role;
use anyhow::{anyhow, Result};

pub struct PersonnelCommand {
    pub role: Option<String>,
}

impl Command for PersonnelCommand {
    async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let role: Option<Role> = self
            .role
            .as_deref()
            .map(str::parse::<Role>)
            .transpose()
            .map_err(|e| anyhow!("Unknown role filter: {e}"))?;

        let personnel = Personnel::load(&ctx.api).await.map_err(api_failure)?;

        let users = match role {
            Some(role) => users_with_role(&personnel.users, role),
            None => personnel.users.clone(),
        };

        if users.is_empty() {
            println!("👥 No users found");
            return Ok(());
        }

        println!("👥 {} user(s)", users.len());
        for user in &users {
            println!("   {:<12} {:<16} {}", user.id, user.role, user.display_name());
        }
        Ok(())
    }
}
