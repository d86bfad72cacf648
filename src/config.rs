use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub records_path: String,
    pub query_address: Option<String>,
    pub clean_memos: bool,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let records_path = env::var("RECORDS_PATH").unwrap_or_else(|_| "records.json".to_string());
        let query_address = env::var("QUERY_ADDRESS")
            .ok()
            .map(|address| address.trim().to_string())
            .filter(|address| !address.is_empty());
        let clean_memos = env::var("CLEAN_MEMOS")
            .map(|v| v.parse().unwrap_or(true))
            .unwrap_or(true);
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            records_path,
            query_address,
            clean_memos,
            log_filter,
        }
    }
}
