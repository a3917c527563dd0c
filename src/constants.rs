//! Application constants and configuration

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const API_URL_ENV: &str = "STARS_API_URL";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_DIR_NAME: &str = "Stars Admin";

/// Page size enforced by the server for star listings
pub const PAGE_SIZE: u64 = 10;
/// Response header carrying the unpaginated result count
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
