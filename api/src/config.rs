use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    /// JSON seed of states and cities; the bundled seed is used when unset
    pub locations_file: Option<String>,
    /// Sustained requests per second per client IP on lookup routes
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            locations_file: None,
            rate_limit_per_second: 10,
            rate_limit_burst: 20,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            locations_file: env::var("LOCATIONS_FILE").ok(),
            rate_limit_per_second: env::var("RATE_LIMIT_PER_SECOND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rate_limit_per_second),
            rate_limit_burst: env::var("RATE_LIMIT_BURST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.rate_limit_burst),
        }
    }
}
