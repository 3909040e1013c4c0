use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for drillflow
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DrillflowConfig {
    /// Backend API settings
    pub api: ApiConfig,
    /// Who is acting
    pub session: SessionConfig,
    /// Logging settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the field-operations API, e.g. `https://ops.example.com/api`
    pub base_url: String,
    /// Bearer token (can be set via env var)
    pub token: Option<String>,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Id of the signed-in user
    pub user_id: Option<String>,
    /// Role of the signed-in user (admin, project_manager, surveyor, driller)
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Emit JSON lines instead of human-readable output
    pub json_logs: bool,
}

impl Default for DrillflowConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:3000/api".to_string(),
                token: None, // Read from env var or drillflow.toml
                timeout_seconds: 30,
            },
            session: SessionConfig::default(),
            observability: ObservabilityConfig {
                log_level: "warn".to_string(),
                json_logs: false,
            },
        }
    }
}

impl DrillflowConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Default values
    /// 2. Configuration files (drillflow.toml, .drillflow-rc)
    /// 3. Environment variables (prefixed with DRILLFLOW__, nested with `__`)
    pub fn load() -> Result<Self> {
        let mut files = Vec::new();
        if Path::new("drillflow.toml").exists() {
            files.push("drillflow.toml");
        }
        if Path::new(".drillflow-rc").exists() {
            files.push(".drillflow-rc");
        }
        Self::load_with_files(&files)
    }

    /// Same layering as [`load`](Self::load) but with an explicit file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            anyhow::bail!("Configuration file not found: {}", path.display());
        }
        Self::load_with_files(&[path])
    }

    fn load_with_files<P: AsRef<Path>>(files: &[P]) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        for file in files {
            builder = builder.add_source(File::from(file.as_ref()).format(config::FileFormat::Toml));
        }

        builder = builder.add_source(
            Environment::with_prefix("DRILLFLOW")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let mut drillflow_config: DrillflowConfig = builder.build()?.try_deserialize()?;

        // Token shorthand
        if drillflow_config.api.token.is_none() {
            if let Ok(token) = std::env::var("DRILLFLOW_API_TOKEN") {
                drillflow_config.api.token = Some(token);
            }
        }

        Ok(drillflow_config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

/// Global configuration instance
static CONFIG: std::sync::LazyLock<Result<DrillflowConfig, anyhow::Error>> =
    std::sync::LazyLock::new(|| {
        // Load .env file first
        let _ = DrillflowConfig::load_env_file();
        DrillflowConfig::load()
    });

/// Get the global configuration
pub fn config() -> Result<&'static DrillflowConfig> {
    CONFIG
        .as_ref()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}
