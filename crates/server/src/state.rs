use crate::config::ServerConfig;
use crate::error::ServerResult;
use dashmap::DashMap;
use lexigauge::Scorer;
use std::net::IpAddr;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Rate limit tracking: client IP -> (count, window_start)
    pub rate_limiter: Arc<DashMap<IpAddr, (u32, std::time::Instant)>>,

    /// Word scorer (shared across requests)
    pub scorer: Scorer,
}

impl ServerState {
    /// Create new server state
    ///
    /// Builds the embedding backend selected by `config.embedding.mode` and
    /// wires it into the scorer shared by all requests.
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let embedder = embedding::embedder_from_config(&config.embedding)?;
        let scorer = Scorer::new(embedder);

        Ok(Self {
            config: Arc::new(config),
            rate_limiter: Arc::new(DashMap::new()),
            scorer,
        })
    }

    /// Check rate limit for a client address
    ///
    /// Fixed 60-second window per IP; returns false once the window's budget
    /// is spent.
    pub fn check_rate_limit(&self, client: IpAddr) -> bool {
        let now = std::time::Instant::now();
        let window = std::time::Duration::from_secs(60);
        let limit = self.config.rate_limit_per_minute;

        let mut entry = self.rate_limiter.entry(client).or_insert((0, now));
        let (count, window_start) = entry.value_mut();

        // Reset if window has passed
        if now.duration_since(*window_start) > window {
            *count = 0;
            *window_start = now;
        }

        // Check limit
        if *count >= limit {
            return false;
        }

        *count += 1;
        true
    }
}
