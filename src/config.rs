use std::env;

// Configuration for the indexer-backed block fetch layer
#[derive(Clone, Debug)]
pub struct Config {
    pub endpoint: String, // Base URL of the remote ledger-indexing service
    pub api_token: Option<String>, // Optional indexer API token
    pub page_limit: u64, // Page size for paginated transaction search
    pub poll_interval_ms: u64, // Wait between chain-height polls during hash resolution
    pub poll_timeout_secs: u64, // Upper bound on a single hash-resolution poll loop
    pub request_timeout_secs: u64, // Per-request HTTP timeout
}

impl Config {
    // Loads configuration from environment variables, with defaults for optional fields
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let config = Config {
            // Required: indexer service base URL
            endpoint: env::var("INDEXER_ENDPOINT").map_err(|_| "INDEXER_ENDPOINT must be set")?,
            // Optional: API token sent with every request
            api_token: env::var("INDEXER_TOKEN").ok().filter(|t| !t.is_empty()),
            // Optional: transaction search page size (defaults to the service maximum)
            page_limit: env::var("TX_PAGE_LIMIT")
                .unwrap_or("10000".to_string())
                .parse()
                .unwrap_or(10000),
            // Optional: hash-resolution poll interval in milliseconds (defaults to 1s)
            poll_interval_ms: env::var("HASH_POLL_INTERVAL_MS")
                .unwrap_or("1000".to_string())
                .parse()
                .unwrap_or(1000),
            // Optional: hash-resolution poll cap in seconds (defaults to 60s)
            poll_timeout_secs: env::var("HASH_POLL_TIMEOUT_SECS")
                .unwrap_or("60".to_string())
                .parse()
                .unwrap_or(60),
            // Optional: HTTP request timeout in seconds (defaults to 30s)
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or("30".to_string())
                .parse()
                .unwrap_or(30),
        };

        // Validate required fields
        if config.endpoint.is_empty() {
            return Err("INDEXER_ENDPOINT must be set".into());
        }
        if config.page_limit == 0 {
            return Err("TX_PAGE_LIMIT must be positive".into());
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::new(),
            api_token: None,
            page_limit: 10000,
            poll_interval_ms: 1000,
            poll_timeout_secs: 60,
            request_timeout_secs: 30,
        }
    }
}
