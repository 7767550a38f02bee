use galleria_core::wall_layout::{LayoutOptions, DEFAULT_HEIGHT_POSITION, DEFAULT_WALL_OFFSET};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Layout tunables applied when a request omits them.
    pub layout: LayoutOptions,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                 |
    /// |--------------------------|-------------------------|
    /// | `HOST`                   | `0.0.0.0`               |
    /// | `PORT`                   | `3000`                  |
    /// | `CORS_ORIGINS`           | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                    |
    /// | `LAYOUT_WALL_OFFSET`     | `0.15`                  |
    /// | `LAYOUT_HEIGHT_POSITION` | `4.0`                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let wall_offset = env_f64("LAYOUT_WALL_OFFSET", DEFAULT_WALL_OFFSET);
        let height_position = env_f64("LAYOUT_HEIGHT_POSITION", DEFAULT_HEIGHT_POSITION);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            layout: LayoutOptions {
                wall_offset,
                height_position,
            },
        }
    }
}

/// Split a comma-separated origin list, dropping blanks.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Read a finite float from the environment, panicking on garbage so that
/// misconfiguration fails at startup.
fn env_f64(key: &str, default: f64) -> f64 {
    match std::env::var(key) {
        Ok(raw) => {
            let value: f64 = raw
                .trim()
                .parse()
                .unwrap_or_else(|_| panic!("{key} must be a number"));
            assert!(value.is_finite(), "{key} must be finite");
            value
        }
        Err(_) => default,
    }
}
