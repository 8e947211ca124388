use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub telegram: TelegramConfig,
    #[serde(default)]
    pub revalidate: RevalidateConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_acquire_timeout() -> u64 { 30 }

// Same values the serde per-field defaults use, so an env-only startup
// (no config file at all) gets a working pool configuration.
impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

/// Hosted object-storage HTTP API (buckets of uploaded site images).
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    pub base_url: String,
    pub service_key: String,
    #[serde(default = "default_gallery_bucket")]
    pub gallery_bucket: String,
    #[serde(default = "default_content_bucket")]
    pub content_bucket: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            service_key: String::new(),
            gallery_bucket: default_gallery_bucket(),
            content_bucket: default_content_bucket(),
        }
    }
}

fn default_gallery_bucket() -> String { "galeri".to_string() }
fn default_content_bucket() -> String { "icerik".to_string() }

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TelegramConfig {
    /// Bot token for outbound notifications; absence disables sends, not startup.
    #[serde(default)]
    pub bot_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RevalidateConfig {
    /// Shared secret checked against the `x-revalidate-token` header.
    pub token: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EditorConfig {
    /// Rich-text editor API key injected into the admin editor page.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AuthConfig {
    /// HS256 secret the session resolver validates cookies with.
    pub jwt_secret: String,
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` if present (a missing file falls back to defaults,
    /// a malformed one is an error), apply env-var overrides, then validate.
    /// Any missing required value fails here, once, at process start.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env();
        self.server.validate()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.storage.normalize_from_env();
        self.storage.validate()?;
        self.telegram.normalize_from_env();
        self.revalidate.normalize_from_env();
        self.revalidate.validate()?;
        self.editor.normalize_from_env();
        self.auth.normalize_from_env();
        self.auth.validate()?;
        Ok(())
    }
}

fn env_override(target: &mut String, var: &str) {
    if target.trim().is_empty() {
        if let Ok(v) = std::env::var(var) {
            *target = v;
        }
    }
}

fn env_override_opt(target: &mut Option<String>, var: &str) {
    if target.as_deref().map_or(true, |v| v.trim().is_empty()) {
        if let Ok(v) = std::env::var(var) {
            if !v.trim().is_empty() {
                *target = Some(v);
            }
        }
    }
}

impl ServerConfig {
    fn normalize_from_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            if !host.trim().is_empty() {
                self.host = host;
            }
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(p) = port.parse::<u16>() {
                self.port = p;
            }
        }
    }

    fn validate(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.worker_threads == Some(0) || self.worker_threads.is_none() {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        env_override(&mut self.url, "DATABASE_URL");
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "database.url is empty; set it in config.toml or via DATABASE_URL"
            ));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl StorageConfig {
    fn normalize_from_env(&mut self) {
        env_override(&mut self.base_url, "STORAGE_URL");
        env_override(&mut self.service_key, "STORAGE_SERVICE_KEY");
    }

    fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!(
                "storage.base_url is empty; set it in config.toml or via STORAGE_URL"
            ));
        }
        let lower = self.base_url.to_lowercase();
        if !(lower.starts_with("http://") || lower.starts_with("https://")) {
            return Err(anyhow!("storage.base_url must be an http(s) URL"));
        }
        if self.service_key.trim().is_empty() {
            return Err(anyhow!(
                "storage.service_key is empty; set it in config.toml or via STORAGE_SERVICE_KEY"
            ));
        }
        if self.gallery_bucket.trim().is_empty() || self.content_bucket.trim().is_empty() {
            return Err(anyhow!("storage bucket names must not be empty"));
        }
        Ok(())
    }
}

impl TelegramConfig {
    fn normalize_from_env(&mut self) {
        env_override_opt(&mut self.bot_token, "TELEGRAM_BOT_TOKEN");
    }
}

impl RevalidateConfig {
    fn normalize_from_env(&mut self) {
        env_override(&mut self.token, "REVALIDATE_TOKEN");
    }

    fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            return Err(anyhow!(
                "revalidate.token is empty; set it in config.toml or via REVALIDATE_TOKEN"
            ));
        }
        Ok(())
    }
}

impl EditorConfig {
    fn normalize_from_env(&mut self) {
        env_override_opt(&mut self.api_key, "EDITOR_API_KEY");
    }
}

impl AuthConfig {
    fn normalize_from_env(&mut self) {
        env_override(&mut self.jwt_secret, "JWT_SECRET");
    }

    fn validate(&self) -> Result<()> {
        if self.jwt_secret.trim().is_empty() {
            return Err(anyhow!(
                "auth.jwt_secret is empty; set it in config.toml or via JWT_SECRET"
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> AppConfig {
        let mut cfg = AppConfig::default();
        cfg.database.url = "postgres://u:p@localhost:5432/site".into();
        cfg.storage.base_url = "https://storage.example.com/storage/v1".into();
        cfg.storage.service_key = "svc-key".into();
        cfg.revalidate.token = "secret".into();
        cfg.auth.jwt_secret = "jwt-secret".into();
        cfg
    }

    #[test]
    fn valid_config_passes() {
        let mut cfg = valid_config();
        assert!(cfg.normalize_and_validate().is_ok());
        assert_eq!(cfg.storage.gallery_bucket, "galeri");
        assert_eq!(cfg.storage.content_bucket, "icerik");
    }

    #[test]
    fn pool_defaults_hold_without_config_file() {
        // Only the required values set, as an env-only deployment would.
        let mut cfg = valid_config();
        assert!(cfg.normalize_and_validate().is_ok());
        assert_eq!(cfg.database.max_connections, 10);
        assert_eq!(cfg.database.min_connections, 2);
        assert_eq!(cfg.database.connect_timeout_secs, 30);
    }

    #[test]
    fn missing_revalidate_token_fails() {
        let mut cfg = valid_config();
        std::env::remove_var("REVALIDATE_TOKEN");
        cfg.revalidate.token = String::new();
        let err = cfg.normalize_and_validate().unwrap_err().to_string();
        assert!(err.contains("revalidate.token"));
    }

    #[test]
    fn database_url_scheme_checked() {
        let mut cfg = valid_config();
        cfg.database.url = "mysql://nope".into();
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn toml_sections_parse() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 3000

            [database]
            url = "postgres://u:p@localhost/site"

            [storage]
            base_url = "https://storage.example.com/storage/v1"
            service_key = "k"

            [telegram]
            bot_token = "123:abc"

            [revalidate]
            token = "t"

            [auth]
            jwt_secret = "s"
            "#,
        )
        .expect("parse");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.telegram.bot_token.as_deref(), Some("123:abc"));
    }
}
