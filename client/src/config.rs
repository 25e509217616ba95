use std::env;

pub const BASE_URL_ENV: &str = "ALGOBOT_API_URL";
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Connection settings for the trading service.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    /// Reads the service address from `ALGOBOT_API_URL`, falling back to the
    /// local development server. Trailing slashes are stripped so endpoint
    /// paths can be appended directly.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV)
            .ok()
            .map(|value| value.trim().trim_end_matches('/').to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn env_var_overrides_default() {
        env::set_var(BASE_URL_ENV, "https://algobot.example.com/");
        let config = ClientConfig::from_env();
        env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url, "https://algobot.example.com");
    }

    #[test]
    #[serial]
    fn defaults_to_local_server() {
        env::remove_var(BASE_URL_ENV);
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    #[serial]
    fn blank_env_var_is_ignored() {
        env::set_var(BASE_URL_ENV, "   ");
        let config = ClientConfig::from_env();
        env::remove_var(BASE_URL_ENV);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }
}
