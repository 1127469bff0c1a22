use serde::Deserialize;

pub const DEV_JWT_SECRET: &str = "dev-waitlist-secret";
pub const DEV_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DatabaseConfig {
    /// Postgres URL; without one signups live in memory only.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// Credentials accepted at login and the token settings derived from them.
#[derive(Clone, Deserialize)]
pub struct AdminConfig {
    #[serde(default = "default_admin_username")]
    pub username: String,
    #[serde(default = "default_admin_password")]
    pub password: String,
    /// HMAC key for admin tokens; changing it logs every admin out.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_jwt_ttl_seconds")]
    pub jwt_ttl_seconds: u64,
}

impl std::fmt::Debug for AdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("jwt_secret", &"<redacted>")
            .field("jwt_ttl_seconds", &self.jwt_ttl_seconds)
            .finish()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: default_admin_username(),
            password: default_admin_password(),
            jwt_secret: default_jwt_secret(),
            jwt_ttl_seconds: default_jwt_ttl_seconds(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_connections() -> u32 {
    10
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    DEV_ADMIN_PASSWORD.to_string()
}

fn default_jwt_secret() -> String {
    DEV_JWT_SECRET.to_string()
}

fn default_jwt_ttl_seconds() -> u64 {
    60 * 60 * 12
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("database.max_connections", 10)?
            .set_default("admin.username", "admin")?
            .set_default("admin.password", DEV_ADMIN_PASSWORD)?
            .set_default("admin.jwt_secret", DEV_JWT_SECRET)?
            .set_default("admin.jwt_ttl_seconds", default_jwt_ttl_seconds())?
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.admin.jwt_ttl_seconds == 0 {
            anyhow::bail!("admin.jwt_ttl_seconds must be greater than zero");
        }
        if self.admin.jwt_secret.is_empty() {
            anyhow::bail!("admin.jwt_secret must not be empty");
        }
        if self.admin.jwt_secret == DEV_JWT_SECRET {
            tracing::warn!("Using the development admin token secret; set ADMIN__JWT_SECRET");
        }
        if self.admin.password == DEV_ADMIN_PASSWORD {
            tracing::warn!("Using the development admin password; set ADMIN__PASSWORD");
        }
        Ok(())
    }
}
