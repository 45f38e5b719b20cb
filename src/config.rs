use clap::{Args, Parser, ValueEnum};

#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Database connection URL
    #[arg(long, env = "DATABASE_URL", default_value = "postgresql://myapp@localhost/myapp")]
    pub database_url: String,

    /// Free-text label for the deployment environment
    #[arg(long, env = "ENVIRONMENT", default_value = "development")]
    pub environment: String,

    #[command(flatten)]
    pub server: ServerConfig,

    #[command(flatten)]
    pub telemetry: TelemetryConfig,
}

#[derive(Clone, Debug, Args)]
pub struct ServerConfig {
    /// Host to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Debug, Args)]
pub struct TelemetryConfig {
    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// OTLP collector endpoint; traces and metrics are only exported when set
    #[arg(long, env = "OTLP_ENDPOINT")]
    pub otlp_endpoint: Option<String>,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_everything() {
        let config = Config::try_parse_from([
            "message-board",
            "--database-url",
            "postgres://tester@db/other",
            "--environment",
            "staging",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--otlp-endpoint",
            "http://collector:4317",
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://tester@db/other");
        assert_eq!(config.environment, "staging");
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.telemetry.otlp_endpoint.as_deref(), Some("http://collector:4317"));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let result = Config::try_parse_from(["message-board", "--log-format", "yaml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = Config::try_parse_from(["message-board", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}
