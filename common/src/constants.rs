pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const DEFAULT_RESULT_LIMIT: usize = 50;

pub const BASE_PORT: u16 = 8080;
pub const SERVER_IP_ADDRESS: &str = "127.0.0.1";
pub const RESTAURANTS_FILE: &str = "data/restaurants.json";
pub const CONFIG_FILE: &str = "nearby.toml";
pub const ENV_PREFIX: &str = "NEARBY_";
pub const CORS_MAX_AGE_SECONDS: u64 = 60 * 60;

/// Any non-empty value turns on `Logger::debug` output.
pub const DEBUG_ENV_VAR: &str = "NEARBY_DEBUG";
