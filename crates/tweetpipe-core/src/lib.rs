pub mod app_config;
pub mod config;
pub mod credentials;
pub mod record;
pub mod sentinel;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, load_credentials};
pub use credentials::Credentials;
pub use record::CanonicalRecord;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("credentials error: {0}")]
    Credentials(String),
}
