use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Config error in {path}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config in {path}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("Failed to render output")]
    Render(#[from] serde_json::Error),

    #[error("Valet lookup failed")]
    Valet(#[from] everland_valet::ValetError),
}
