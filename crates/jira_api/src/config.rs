use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://jira.secondlife.com";
pub const DEFAULT_USER_AGENT: &str = "jira-popup";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct JiraConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl JiraConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    pub fn with_timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    pub fn with_connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = duration;
        self
    }

    pub fn api_root(&self) -> String {
        format!("{}/rest/api/2/", self.base_url.trim_end_matches('/'))
    }

    /// Canonical browse URL for an issue key.
    pub fn browse_url(&self, issue_key: &str) -> String {
        format!("{}/browse/{}", self.base_url.trim_end_matches('/'), issue_key)
    }

    /// Canonical profile URL for an assignee login name.
    pub fn profile_url(&self, name: &str) -> String {
        format!(
            "{}/secure/ViewProfile.jspa?name={}",
            self.base_url.trim_end_matches('/'),
            name
        )
    }
}

impl Default for JiraConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::JiraConfig;

    #[test]
    fn api_root_normalizes_trailing_slash() {
        let config = JiraConfig::new().with_base_url("https://jira.example.com/");
        assert_eq!(config.api_root(), "https://jira.example.com/rest/api/2/");
    }

    #[test]
    fn browse_and_profile_urls_use_base() {
        let config = JiraConfig::new();
        assert_eq!(
            config.browse_url("SUN-1"),
            "https://jira.secondlife.com/browse/SUN-1"
        );
        assert_eq!(
            config.profile_url("nyx"),
            "https://jira.secondlife.com/secure/ViewProfile.jspa?name=nyx"
        );
    }
}
