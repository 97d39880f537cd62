use std::net::SocketAddr;
use std::path::PathBuf;

use crate::search::SearchDefaults;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub seed_path: PathBuf,
    /// Origin and radius used when a search request omits or garbles them.
    pub search_defaults: SearchDefaults,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
}
