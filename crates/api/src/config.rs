use std::time::Duration;

use ordertrack_core::schedule::{parse_sweep_hours, DEFAULT_SWEEP_HOURS};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Interval between scheduled reconciliation passes (default: 300s).
    pub reconcile_interval: Duration,
    /// UTC hours at which the deadline alert sweep runs (default: 9, 17).
    pub alert_sweep_hours: Vec<u32>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `8080`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `RECONCILE_INTERVAL_SECS` | `300`                   |
    /// | `ALERT_SWEEP_HOURS`       | `9,17`                  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let reconcile_interval_secs: u64 = std::env::var("RECONCILE_INTERVAL_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("RECONCILE_INTERVAL_SECS must be a valid u64");

        let alert_sweep_hours = std::env::var("ALERT_SWEEP_HOURS")
            .ok()
            .and_then(|v| parse_sweep_hours(&v))
            .unwrap_or_else(|| DEFAULT_SWEEP_HOURS.to_vec());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            reconcile_interval: Duration::from_secs(reconcile_interval_secs),
            alert_sweep_hours,
        }
    }
}
