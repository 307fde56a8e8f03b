use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
    pub session_ttl_minutes: i64,
    pub font_path: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let jwt_secret = env_required("JWT_SECRET")?;

        let data_dir = PathBuf::from(env_or("YARDLOG_DATA_DIR", "data/companies"));

        let host: IpAddr = env_or("YARDLOG_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid YARDLOG_HOST: {e}"))?;

        let port: u16 = env_or("YARDLOG_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid YARDLOG_PORT: {e}"))?;

        let session_ttl_minutes: i64 = env_or("YARDLOG_SESSION_TTL_MINUTES", "720")
            .parse()
            .map_err(|e| format!("Invalid YARDLOG_SESSION_TTL_MINUTES: {e}"))?;

        let font_path = PathBuf::from(env_or(
            "YARDLOG_FONT_PATH",
            "assets/fonts/Vazirmatn-Regular.ttf",
        ));

        let log_level = env_or("YARDLOG_LOG_LEVEL", "info");

        Ok(Config {
            data_dir,
            jwt_secret,
            host,
            port,
            session_ttl_minutes,
            font_path,
            log_level,
        })
    }
}

fn env_required(key: &str) -> Result<String, String> {
    std::env::var(key).map_err(|_| format!("Missing required environment variable: {key}"))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
