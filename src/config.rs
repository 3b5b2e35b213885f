use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// develop, staging or production
    pub environment: String,
    pub log_level: String,
    pub http_port: String,
    pub todo_service_host: String,
    pub todo_service_port: u16,
    /// Upper bound on a single remote call.
    pub ctx_timeout: Duration,
    pub default_page: i64,
    pub default_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "develop".to_string(),
            log_level: "debug".to_string(),
            http_port: ":8080".to_string(),
            todo_service_host: "127.0.0.1".to_string(),
            todo_service_port: 9000,
            ctx_timeout: Duration::from_secs(7),
            default_page: 1,
            default_limit: 10,
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub key: &'static str,
    pub value: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid value {:?} for {}", self.value, self.key)
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup; absent keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(env) = lookup("ENVIRONMENT") {
            config.environment = env;
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(port) = lookup("HTTP_PORT") {
            config.http_port = port;
        }
        if let Some(host) = lookup("TODO_SERVICE_HOST") {
            config.todo_service_host = host;
        }
        if let Some(port) = lookup("TODO_SERVICE_PORT") {
            config.todo_service_port = parse("TODO_SERVICE_PORT", port)?;
        }
        if let Some(secs) = lookup("CTX_TIMEOUT") {
            config.ctx_timeout = Duration::from_secs(parse("CTX_TIMEOUT", secs)?);
        }
        if let Some(page) = lookup("DEFAULT_PAGE") {
            config.default_page = parse_positive("DEFAULT_PAGE", page)?;
        }
        if let Some(limit) = lookup("DEFAULT_LIMIT") {
            config.default_limit = parse_positive("DEFAULT_LIMIT", limit)?;
        }

        Ok(config)
    }

    /// Address the HTTP listener binds to. `:8080` means every interface.
    pub fn listen_addr(&self) -> String {
        let port = self.http_port.trim();
        if let Some(port) = port.strip_prefix(':') {
            format!("0.0.0.0:{port}")
        } else if port.contains(':') {
            port.to_string()
        } else {
            format!("0.0.0.0:{port}")
        }
    }

    pub fn todo_service_uri(&self) -> String {
        format!(
            "http://{}:{}",
            self.todo_service_host, self.todo_service_port
        )
    }
}

fn parse<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError { key, value })
}

fn parse_positive(key: &'static str, value: String) -> Result<i64, ConfigError> {
    match value.trim().parse::<i64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError { key, value }),
    }
}
