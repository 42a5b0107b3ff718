use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory uploaded report photos are written to (default: `uploads`).
    pub upload_dir: PathBuf,
    /// Maximum request body size for report uploads, in bytes.
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                            |
    /// | `PORT`                 | `5000`                               |
    /// | `DATABASE_URL`         | `postgres://localhost:5432/sitebook` |
    /// | `CORS_ORIGINS`         | `*`                                  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `UPLOAD_DIR`           | `uploads`                            |
    /// | `MAX_UPLOAD_BYTES`     | `52428800` (50 MiB)                  |
    pub fn from_env() -> Self {
        let host = env_or("HOST", "0.0.0.0");

        let port: u16 = env_or("PORT", "5000")
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = env_or("DATABASE_URL", "postgres://localhost:5432/sitebook");

        let cors_origins = parse_cors_origins(&env_or("CORS_ORIGINS", "*"));

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let upload_dir = PathBuf::from(env_or("UPLOAD_DIR", "uploads"));

        let max_upload_bytes: usize = env_or("MAX_UPLOAD_BYTES", "52428800")
            .parse()
            .expect("MAX_UPLOAD_BYTES must be a valid usize");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            upload_dir,
            max_upload_bytes,
        }
    }

    /// Whether CORS should accept requests from any origin.
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty() || self.cors_origins.iter().any(|o| o == "*")
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.into())
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_origins(origins: &[&str]) -> ServerConfig {
        ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            database_url: String::new(),
            cors_origins: origins.iter().map(|s| s.to_string()).collect(),
            request_timeout_secs: 30,
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: 1024,
        }
    }

    #[test]
    fn origins_are_trimmed_and_blank_entries_dropped() {
        assert_eq!(
            parse_cors_origins(" http://a.test , ,http://b.test,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }

    #[test]
    fn wildcard_allows_any_origin() {
        assert!(config_with_origins(&["*"]).allows_any_origin());
        assert!(config_with_origins(&[]).allows_any_origin());
        assert!(!config_with_origins(&["http://localhost:5173"]).allows_any_origin());
    }
}
