use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
    pub cors_extra_origins: Vec<String>,

    pub mood_log_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".into())
                .parse()
                .expect("PORT must be a number"),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".into()),
            // In dev, also allow LAN access (e.g. testing from another device)
            cors_extra_origins: env::var("CORS_EXTRA_ORIGINS")
                .map(|extra| {
                    extra
                        .split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or_default(),

            mood_log_path: env::var("MOOD_LOG_PATH")
                .unwrap_or_else(|_| "mood_log.json".into())
                .into(),
        }
    }

    /// Config pointing at an explicit log file, everything else defaulted.
    pub fn with_log_path(path: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5000,
            frontend_url: "http://localhost:5173".into(),
            cors_extra_origins: Vec::new(),
            mood_log_path: path.into(),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
