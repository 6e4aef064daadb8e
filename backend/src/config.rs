//! Runtime configuration, read once from the environment at startup.

use std::env;

pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        let host = env::var("TRACK_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("TRACK_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        let db_path =
            env::var("TRACK_DB").unwrap_or_else(|_| "tracciabilita.sqlite".to_string());
        Self {
            host,
            port,
            db_path,
        }
    }
}
