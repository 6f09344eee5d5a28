use clap::Parser;

/// Server configuration, read from command-line flags or the environment.
///
/// | Flag                     | Env Var                | Default   |
/// |--------------------------|------------------------|-----------|
/// | `--host`                 | `HOST`                 | `0.0.0.0` |
/// | `--port`                 | `PORT`                 | `5000`    |
/// | `--request-timeout-secs` | `REQUEST_TIMEOUT_SECS` | `30`      |
/// | `--log-json`             | `LOG_JSON`             | off       |
#[derive(Debug, Clone, Parser)]
#[command(name = "cas-olympiad", version, about, long_about = None)]
pub struct ServerConfig {
    /// Bind address.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Bind port.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Requests running longer than this many seconds are answered with `408 Request Timeout`.
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Emit logs as JSON lines instead of human-readable text.
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 30,
            log_json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = ServerConfig::parse_from(["cas-olympiad", "--port", "8080", "--log-json"]);
        assert_eq!(config.port, 8080);
        assert!(config.log_json);
        assert_eq!(config.request_timeout_secs, 30);
    }
}
