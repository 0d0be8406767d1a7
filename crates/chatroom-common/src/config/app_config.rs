//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Secret used outside production when `JWT_SECRET` is unset
const DEVELOPMENT_JWT_SECRET: &str = "chatroom-development-secret-change-me";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub chat: ChatConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Maximum time to wait for a pooled connection
    pub acquire_timeout: Duration,
}

/// Session token and cookie configuration
#[derive(Clone)]
pub struct SessionConfig {
    pub secret: String,
    /// Token lifetime in seconds
    pub expiry_seconds: i64,
    pub cookie_name: String,
    pub cookie_secure: bool,
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("secret", &"<redacted>")
            .field("expiry_seconds", &self.expiry_seconds)
            .field("cookie_name", &self.cookie_name)
            .field("cookie_secure", &self.cookie_secure)
            .finish()
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

/// Chat behaviour settings
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Channel used by users who never swapped channels
    pub default_channel_id: i64,
    /// Upper bound accepted by `$setslowmode`
    pub max_slowmode_seconds: u32,
    /// Number of messages returned by the chat view
    pub history_limit: i64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_channel_id: default_channel_id(),
            max_slowmode_seconds: default_max_slowmode_seconds(),
            history_limit: default_history_limit(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "chatroom".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5500
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    2
}

fn default_acquire_timeout_secs() -> u64 {
    10
}

fn default_session_expiry() -> i64 {
    86_400 // 24 hours
}

fn default_cookie_name() -> String {
    "session".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5500".to_string(),
    ]
}

fn default_channel_id() -> i64 {
    1
}

fn default_max_slowmode_seconds() -> u32 {
    21_600 // 6 hours
}

fn default_history_limit() -> i64 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value fails to parse
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if a required key is missing or a value fails to parse
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(&lookup);

        let env = vars.parse::<Environment>("APP_ENV")?.unwrap_or_default();

        let secret = match lookup("JWT_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ if env.is_production() => return Err(ConfigError::MissingVar("JWT_SECRET")),
            _ => DEVELOPMENT_JWT_SECRET.to_string(),
        };

        let chat = ChatConfig {
            default_channel_id: vars
                .parse("CHAT_DEFAULT_CHANNEL_ID")?
                .unwrap_or_else(default_channel_id),
            max_slowmode_seconds: vars
                .parse("CHAT_MAX_SLOWMODE_SECONDS")?
                .unwrap_or_else(default_max_slowmode_seconds),
            history_limit: vars
                .parse("CHAT_HISTORY_LIMIT")?
                .unwrap_or_else(default_history_limit),
        };
        if chat.history_limit <= 0 {
            return Err(ConfigError::InvalidValue(
                "CHAT_HISTORY_LIMIT",
                chat.history_limit.to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: lookup("API_HOST").unwrap_or_else(default_host),
                port: vars.parse("API_PORT")?.unwrap_or_else(default_port),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: vars
                    .parse("DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: vars
                    .parse("DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                acquire_timeout: Duration::from_secs(
                    vars.parse("DATABASE_ACQUIRE_TIMEOUT_SECONDS")?
                        .unwrap_or_else(default_acquire_timeout_secs),
                ),
            },
            session: SessionConfig {
                secret,
                expiry_seconds: vars
                    .parse("SESSION_EXPIRY_SECONDS")?
                    .unwrap_or_else(default_session_expiry),
                cookie_name: lookup("SESSION_COOKIE_NAME").unwrap_or_else(default_cookie_name),
                cookie_secure: vars
                    .parse("SESSION_COOKIE_SECURE")?
                    .unwrap_or(env.is_production()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: vars
                    .parse("RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: vars.parse("RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|o| !o.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_else(default_cors_origins),
            },
            chat,
        })
    }
}

/// Typed access to optional variables
struct Vars<'a, F>(&'a F);

impl<F> Vars<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    fn parse<T: FromStr>(&self, key: &'static str) -> Result<Option<T>, ConfigError> {
        match (self.0)(key) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue(key, raw)),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
