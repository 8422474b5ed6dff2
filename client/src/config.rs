use std::time::Duration;

/// Where scores go unless told otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://10.38.219.120:80/fullstack/api/prd/score/submit";

/// Past this the request is abandoned and reported as a network failure.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug)]
pub struct SubmitConfig {
    pub url: String,
    pub timeout: Duration,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        SubmitConfig {
            url: DEFAULT_ENDPOINT.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl SubmitConfig {
    /// Use `url` if given, the default endpoint otherwise.
    pub fn with_endpoint(url: Option<String>) -> SubmitConfig {
        let mut config = SubmitConfig::default();
        if let Some(url) = url {
            config.url = url;
        }
        config
    }

    pub fn timeout(mut self, timeout: Duration) -> SubmitConfig {
        self.timeout = timeout;
        self
    }
}
