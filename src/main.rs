use anyhow::Result;
use clap::Parser;
use drillflow::cli::commands::{self, AppContext};
use drillflow::cli::Cli;
use drillflow::config::DrillflowConfig;
use drillflow::telemetry::init_telemetry;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            DrillflowConfig::load_env_file()?;
            DrillflowConfig::load_from_file(path)?
        }
        None => drillflow::config()?.clone(),
    };
    cli.apply_overrides(&mut config);

    init_telemetry(&config.observability)?;

    let ctx = AppContext::new(config)?;
    commands::run(cli.command, &ctx).await
}
