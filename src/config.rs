use std::time::Duration;
use validator::Validate;

/// Object store implementation selected at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StorageBackend {
    /// Google Cloud Storage bucket (Firebase Storage)
    #[default]
    Gcs,
    /// Process-local in-memory store, contents are lost on exit
    Memory,
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gcs" | "firebase" => Ok(StorageBackend::Gcs),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(format!("Invalid storage backend: {}", s)),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct Config {
    /// Service account JSON used for the GCS backend
    pub credentials_path: String,
    pub bucket_name: Option<String>,
    #[validate(length(min = 1, message = "HOST cannot be empty"))]
    pub host: String,
    #[validate(range(min = 1, message = "PORT must be between 1 and 65535"))]
    pub port: u16,
    /// Per-call timeout for store requests
    #[validate(range(
        min = 1,
        max = 3600,
        message = "STORAGE_TIMEOUT_SECS must be between 1 and 3600"
    ))]
    pub timeout_secs: u64,
    pub storage_backend: StorageBackend,
    #[validate(length(min = 1, message = "PUBLIC_BASE_URL cannot be empty"))]
    pub public_base_url: String,
    /// CORS origins; `*` allows any origin
    pub allowed_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            credentials_path: std::env::var("FIREBASE_CREDENTIALS_PATH")
                .unwrap_or_else(|_| "credential.json".to_string()),
            bucket_name: std::env::var("FIREBASE_STORAGE_BUCKET")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5001),
            timeout_secs: std::env::var("STORAGE_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            storage_backend: std::env::var("STORAGE_BACKEND")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
            public_base_url: std::env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "https://storage.googleapis.com".to_string()),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string())
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            log_format: std::env::var("LOG_FORMAT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_default(),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        Validate::validate(self).map_err(|e| e.to_string())?;

        if self.storage_backend == StorageBackend::Gcs && self.bucket_name.is_none() {
            return Err(
                "FIREBASE_STORAGE_BUCKET must be set when using the gcs backend".to_string(),
            );
        }

        if !self.public_base_url.starts_with("http://")
            && !self.public_base_url.starts_with("https://")
        {
            return Err("PUBLIC_BASE_URL must start with http:// or https://".to_string());
        }

        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn storage_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Bucket used in public URLs; the in-memory backend may run without one
    pub fn bucket_or_default(&self) -> &str {
        self.bucket_name.as_deref().unwrap_or("local")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            credentials_path: "credential.json".to_string(),
            bucket_name: Some("demo.appspot.com".to_string()),
            host: "127.0.0.1".to_string(),
            port: 5001,
            timeout_secs: 60,
            storage_backend: StorageBackend::Gcs,
            public_base_url: "https://storage.googleapis.com".to_string(),
            allowed_origins: vec!["*".to_string()],
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config().validate().is_ok());
        assert_eq!(config().listen_addr(), "127.0.0.1:5001");
        assert_eq!(config().storage_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_gcs_requires_bucket() {
        let mut cfg = config();
        cfg.bucket_name = None;
        assert!(cfg.validate().unwrap_err().contains("FIREBASE_STORAGE_BUCKET"));

        cfg.storage_backend = StorageBackend::Memory;
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.bucket_or_default(), "local");
    }

    #[test]
    fn test_timeout_bounds() {
        let mut cfg = config();
        cfg.timeout_secs = 0;
        assert!(cfg.validate().is_err());
        cfg.timeout_secs = 3601;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_public_base_url_scheme() {
        let mut cfg = config();
        cfg.public_base_url = "storage.googleapis.com".to_string();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("GCS".parse::<StorageBackend>(), Ok(StorageBackend::Gcs));
        assert_eq!("memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert!("s3".parse::<StorageBackend>().is_err());
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
    }
}
