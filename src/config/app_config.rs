use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_address: String,
    pub port: u16,
    pub log_path: PathBuf,
    pub csv_path: PathBuf,
    pub csv_enabled: bool,
    pub static_dir: PathBuf,
    pub geo_dataset_path: Option<PathBuf>,
    pub login_response: String,
    pub access_log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            log_path: PathBuf::from("honeypot.log"),
            csv_path: PathBuf::from("honeypot.csv"),
            csv_enabled: true,
            static_dir: PathBuf::from("public"),
            geo_dataset_path: None,
            login_response: "redirect".to_string(),
            access_log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            bind_address: lookup("HONEYPOT_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            port: lookup("PORT")
                .and_then(|port| port.trim().parse().ok())
                .unwrap_or(defaults.port),
            log_path: lookup("HONEYPOT_LOG_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_path),
            csv_path: lookup("HONEYPOT_CSV_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.csv_path),
            csv_enabled: lookup("HONEYPOT_CSV_ENABLED")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.csv_enabled),
            static_dir: lookup("HONEYPOT_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            geo_dataset_path: optional_path(lookup("HONEYPOT_GEO_DATASET_PATH")),
            login_response: lookup("HONEYPOT_LOGIN_RESPONSE").unwrap_or(defaults.login_response),
            access_log_path: optional_path(lookup("HONEYPOT_ACCESS_LOG_PATH")),
        }
    }

    pub fn listen_address(&self) -> String {
        if self.bind_address.contains(':') && !self.bind_address.starts_with('[') {
            format!("[{}]:{}", self.bind_address, self.port)
        } else {
            format!("{}:{}", self.bind_address, self.port)
        }
    }
}

fn optional_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
