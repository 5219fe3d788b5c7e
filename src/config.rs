use anyhow::Context;

/// Minimum length of a cookie-signing secret, in bytes.
pub const MIN_SESSION_SECRET_LEN: usize = 64;

/// Longest accepted session inactivity window: one year.
pub const MAX_SESSION_TTL_MINUTES: u32 = 60 * 24 * 365;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: Option<String>,
    pub ttl_minutes: u32,
    pub cookie_secure: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub max_connections: u32,
    pub session: SessionConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: None,
            ttl_minutes: 60 * 24 * 7,
            cookie_secure: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5555,
            database_url: "sqlite://recipes.db".into(),
            max_connections: 5,
            session: SessionConfig::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();

        let secret = session_secret(std::env::var("SESSION_SECRET").ok())?;
        let ttl_minutes = session_ttl(parse_var("SESSION_TTL_MINUTES")?)?
            .unwrap_or(defaults.session.ttl_minutes);

        let session = SessionConfig {
            secret,
            ttl_minutes,
            cookie_secure: parse_var("SESSION_COOKIE_SECURE")?
                .unwrap_or(defaults.session.cookie_secure),
        };

        Ok(Self {
            host: std::env::var("APP_HOST").unwrap_or(defaults.host),
            port: parse_var("APP_PORT")?.unwrap_or(defaults.port),
            database_url: std::env::var("DATABASE_URL").unwrap_or(defaults.database_url),
            max_connections: parse_var("DATABASE_MAX_CONNECTIONS")?
                .unwrap_or(defaults.max_connections),
            session,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// An empty secret counts as unset; anything else must be long enough to
/// sign cookies with.
fn session_secret(raw: Option<String>) -> anyhow::Result<Option<String>> {
    let secret = raw.filter(|s| !s.is_empty());
    if let Some(s) = &secret {
        anyhow::ensure!(
            s.len() >= MIN_SESSION_SECRET_LEN,
            "SESSION_SECRET must be at least {MIN_SESSION_SECRET_LEN} bytes"
        );
    }
    Ok(secret)
}

fn session_ttl(minutes: Option<u32>) -> anyhow::Result<Option<u32>> {
    if let Some(m) = minutes {
        anyhow::ensure!(
            (1..=MAX_SESSION_TTL_MINUTES).contains(&m),
            "SESSION_TTL_MINUTES must be between 1 and {MAX_SESSION_TTL_MINUTES}"
        );
    }
    Ok(minutes)
}

fn parse_var<T>(name: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => v
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("invalid value for {name}: {v:?}")),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_to_local_port() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:5555");
        assert!(cfg.session.secret.is_none());
        assert!(!cfg.session.cookie_secure);
    }

    #[test]
    fn parse_var_rejects_garbage() {
        std::env::set_var("RECIPE_BOOK_TEST_PORT", "not-a-port");
        let err = parse_var::<u16>("RECIPE_BOOK_TEST_PORT").unwrap_err();
        assert!(err.to_string().contains("RECIPE_BOOK_TEST_PORT"));
        std::env::remove_var("RECIPE_BOOK_TEST_PORT");
    }

    #[test]
    fn short_session_secret_is_rejected() {
        let err = session_secret(Some("short".into())).unwrap_err();
        assert_eq!(err.to_string(), "SESSION_SECRET must be at least 64 bytes");

        let err = session_secret(Some("k".repeat(MIN_SESSION_SECRET_LEN - 1))).unwrap_err();
        assert!(err.to_string().contains("SESSION_SECRET"));
    }

    #[test]
    fn empty_session_secret_counts_as_unset() {
        assert!(session_secret(Some(String::new())).unwrap().is_none());
        assert!(session_secret(None).unwrap().is_none());
    }

    #[test]
    fn long_session_secret_is_kept() {
        let secret = "k".repeat(MIN_SESSION_SECRET_LEN);
        assert_eq!(session_secret(Some(secret.clone())).unwrap(), Some(secret));
    }

    #[test]
    fn session_ttl_is_range_checked() {
        let err = session_ttl(Some(0)).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_MINUTES"));
        assert!(session_ttl(Some(MAX_SESSION_TTL_MINUTES + 1)).is_err());
        assert!(session_ttl(Some(u32::MAX)).is_err());
        assert_eq!(
            session_ttl(Some(MAX_SESSION_TTL_MINUTES)).unwrap(),
            Some(MAX_SESSION_TTL_MINUTES)
        );
        assert_eq!(session_ttl(Some(30)).unwrap(), Some(30));
        assert_eq!(session_ttl(None).unwrap(), None);
    }

    #[test]
    fn negative_or_huge_ttl_fails_to_parse() {
        std::env::set_var("RECIPE_BOOK_TEST_TTL_NEGATIVE", "-5");
        assert!(parse_var::<u32>("RECIPE_BOOK_TEST_TTL_NEGATIVE").is_err());
        std::env::remove_var("RECIPE_BOOK_TEST_TTL_NEGATIVE");

        std::env::set_var("RECIPE_BOOK_TEST_TTL_HUGE", "99999999999999999999");
        assert!(parse_var::<u32>("RECIPE_BOOK_TEST_TTL_HUGE").is_err());
        std::env::remove_var("RECIPE_BOOK_TEST_TTL_HUGE");
    }

    #[test]
    fn parse_var_missing_is_none() {
        let v = parse_var::<u32>("RECIPE_BOOK_TEST_SURELY_UNSET").unwrap();
        assert!(v.is_none());
    }
}
