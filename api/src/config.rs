use std::env;
use std::time::Duration;

/// SMTP settings for customer notifications
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Display name used in the From header
    pub from_name: String,
}

#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Full PostgreSQL URL; built from the `DB_*` variables when unset
    pub database_url: String,
    pub db_connect_timeout: Duration,
    /// SMTP is only configured when both user and password are present
    pub smtp: Option<SmtpConfig>,
    /// Bearer key guarding the order admin endpoints
    pub admin_api_key: Option<String>,
    pub rate_limit_enabled: bool,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            database_url_from_parts(
                &env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
                &env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                &env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string()),
                &env::var("DB_NAME").unwrap_or_else(|_| "casa_marquito".to_string()),
            )
        });

        let smtp = match (env::var("SMTP_USER"), env::var("SMTP_PASS")) {
            (Ok(username), Ok(password)) if !username.is_empty() && !password.is_empty() => {
                Some(SmtpConfig {
                    host: env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
                    port: parse_var("SMTP_PORT").unwrap_or(587),
                    username,
                    password,
                    from_name: env::var("SMTP_FROM_NAME")
                        .unwrap_or_else(|_| "Casa Marquito".to_string()),
                })
            }
            _ => None,
        };

        Self {
            port: parse_var("PORT").unwrap_or(3001),
            database_url,
            db_connect_timeout: Duration::from_secs(
                parse_var("DB_CONNECT_TIMEOUT_SECS").unwrap_or(5),
            ),
            smtp,
            admin_api_key: env::var("ADMIN_API_KEY").ok().filter(|k| !k.is_empty()),
            rate_limit_enabled: parse_var("RATE_LIMIT_ENABLED").unwrap_or(true),
        }
    }
}

/// PostgreSQL URL with the credentials and database name percent-encoded
fn database_url_from_parts(
    user: &str,
    password: &str,
    host: &str,
    port: &str,
    name: &str,
) -> String {
    format!(
        "postgres://{}:{}@{}:{}/{}",
        urlencoding::encode(user),
        urlencoding::encode(password),
        host,
        port,
        urlencoding::encode(name),
    )
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
impl Config {
    /// Configuration for in-process tests: no database, no SMTP, no rate limiting
    pub fn for_tests() -> Self {
        Self {
            port: 0,
            database_url: String::new(),
            db_connect_timeout: Duration::from_secs(1),
            smtp: None,
            admin_api_key: None,
            rate_limit_enabled: false,
        }
    }
}
