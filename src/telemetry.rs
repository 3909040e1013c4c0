use crate::config::ObservabilityConfig;
use crate::workflow::ActionKind;
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Initialize structured logging.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so command
/// output on stdout stays clean.
pub fn init_telemetry(config: &ObservabilityConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let registry = tracing_subscriber::registry().with(filter);

    if config.json_logs {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .compact()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    }

    tracing::debug!("drillflow telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking the logs of one dispatch
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span wrapping a single action request and its refresh
pub fn create_action_span(action: ActionKind, job_id: &str, correlation_id: &str) -> tracing::Span {
    tracing::info_span!(
        "action_dispatch",
        action = %action,
        job.id = job_id,
        correlation.id = correlation_id,
    )
}
