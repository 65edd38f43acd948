use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    /// Path to the watchlist JSON file.
    pub positions_file: String,
    /// Refresh window in seconds. Governs the snapshot cache's max age and
    /// is the interval the dashboard should poll at; keeping the two equal
    /// means the UI never polls faster than the cache refreshes.
    pub refresh_secs: u64,
    /// Per-request timeout applied to every upstream provider call.
    pub request_timeout: Duration,
    /// Bounds for the randomized pause between Google Finance page loads.
    pub scrape_delay_floor: Duration,
    pub scrape_delay_ceiling: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("TD_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid TD_LISTEN_ADDR");
        let positions_file =
            std::env::var("TD_POSITIONS_FILE").unwrap_or_else(|_| "./positions.json".into());
        let refresh_secs: u64 = std::env::var("TD_REFRESH_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .unwrap_or(15);
        let timeout_ms: u64 = std::env::var("TD_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "10000".into())
            .parse()
            .unwrap_or(10000);
        let delay_floor_ms: u64 = std::env::var("TD_SCRAPE_DELAY_FLOOR_MS")
            .unwrap_or_else(|_| "500".into())
            .parse()
            .unwrap_or(500);
        let delay_ceiling_ms: u64 = std::env::var("TD_SCRAPE_DELAY_CEILING_MS")
            .unwrap_or_else(|_| "1500".into())
            .parse()
            .unwrap_or(1500);
        Self {
            listen_addr,
            positions_file,
            refresh_secs,
            request_timeout: Duration::from_millis(timeout_ms),
            scrape_delay_floor: Duration::from_millis(delay_floor_ms),
            scrape_delay_ceiling: Duration::from_millis(delay_ceiling_ms),
        }
    }
}
