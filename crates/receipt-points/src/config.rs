//! Service and server configuration.

use clap::Parser;

/// Default page size for listings.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Configuration for the [`PointsService`](crate::PointsService).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Page size used when a listing request gives none (or an invalid one).
    pub default_page_limit: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_page_limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

/// Server command line, with environment fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(name = "receipt-points")]
#[command(about = "Scores scanned receipts and serves the results over HTTP")]
pub struct ServerConfig {
    /// Host to bind to
    #[arg(long, env = "RECEIPTS_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind to
    #[arg(long, env = "RECEIPTS_PORT", default_value = "8080")]
    pub port: u16,

    /// Log filter (e.g. "info", "receipt_points=debug")
    #[arg(long, env = "RECEIPTS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Number of sample records preloaded at start-up (ids "0".."n-1")
    #[arg(long, env = "RECEIPTS_SAMPLE_RECEIPTS", default_value = "15")]
    pub sample_receipts: usize,

    /// Page size for listings that give no valid limit
    #[arg(long, env = "RECEIPTS_DEFAULT_PAGE_LIMIT", default_value = "10",
          value_parser = clap::value_parser!(u64).range(1..))]
    pub default_page_limit: u64,
}

impl ServerConfig {
    /// The `host:port` string to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            default_page_limit: self.default_page_limit as usize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::try_parse_from(["receipt-points"]).unwrap();
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.sample_receipts, 15);
        assert_eq!(config.service_config().default_page_limit, 10);
    }

    #[test]
    fn test_flags() {
        let config = ServerConfig::try_parse_from([
            "receipt-points",
            "--host",
            "0.0.0.0",
            "--port",
            "3000",
            "--sample-receipts",
            "0",
            "--default-page-limit",
            "25",
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.sample_receipts, 0);
        assert_eq!(config.service_config().default_page_limit, 25);
    }

    #[test]
    fn test_zero_page_limit_rejected() {
        let result =
            ServerConfig::try_parse_from(["receipt-points", "--default-page-limit", "0"]);
        assert!(result.is_err());
    }
}
