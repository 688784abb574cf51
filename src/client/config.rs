static DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Console client configuration read from environment variables
pub struct ClientConfig {
    /// `COOKBOOK_API_URL`, defaults to `http://127.0.0.1:5000`
    pub api_url: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = lookup("COOKBOOK_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self { api_url }
    }
}
