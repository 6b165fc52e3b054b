use crate::config::JiraConfig;
use crate::error::{JiraError, Result};
use crate::feed::parse_feed;
use crate::models::{ActivityFeed, Project};
use crate::query::{activity_url, SearchQuery};
use reqwest::header::{HeaderMap, USER_AGENT};
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde_json::Value;
use tracing::debug;

/// Status message shown when the session is not authenticated.
pub const LOGIN_REQUIRED_MESSAGE: &str =
    "You must be logged in to JIRA to see this project.";

#[derive(Clone)]
pub struct JiraClient {
    http: HttpClient,
    config: JiraConfig,
}

impl JiraClient {
    pub fn new(config: JiraConfig) -> Result<Self> {
        let http = build_http_client(&config)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &JiraConfig {
        &self.config
    }

    /// Issues a single GET and returns the parsed JSON body.
    ///
    /// A 401/403 maps to an authentication error; any other non-success
    /// status to an HTTP error. A success body carrying a non-empty
    /// `errorMessages` array is a remote application error even though the
    /// transport succeeded.
    pub async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(url, "GET json");
        let response = self.http.get(url).send().await?;
        let body: Value = Self::check_status(response).await?.json().await?;
        if let Some(message) = first_error_message(&body) {
            return Err(JiraError::Api(message));
        }
        Ok(body)
    }

    /// Issues a single GET and returns the raw body text for XML payloads.
    pub async fn get_xml(&self, url: &str) -> Result<String> {
        debug!(url, "GET xml");
        let response = self.http.get(url).send().await?;
        Ok(Self::check_status(response).await?.text().await?)
    }

    /// Runs an issue search and returns the raw payload; shape
    /// classification is left to the caller so malformed bodies can degrade
    /// to an empty-result display instead of an error.
    pub async fn search(&self, query: &SearchQuery) -> Result<Value> {
        self.get_json(&query.url(&self.config)).await
    }

    /// Fetches and parses the Atom activity stream for a user.
    pub async fn activity_feed(&self, user: &str) -> Result<ActivityFeed> {
        let body = self.get_xml(&activity_url(&self.config, user)).await?;
        parse_feed(&body)
    }

    /// Fetches a project by key. Used as a login probe: an unauthenticated
    /// session surfaces here as an authentication error.
    pub async fn get_project(&self, project_key: &str) -> Result<Project> {
        let url = format!("{}project/{}", self.config.api_root(), project_key);
        let body = self.get_json(&url).await?;
        serde_json::from_value(body).map_err(JiraError::from)
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Err(JiraError::Authentication(LOGIN_REQUIRED_MESSAGE.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(JiraError::http(status, body))
        }
    }
}

fn build_http_client(config: &JiraConfig) -> Result<HttpClient> {
    let mut headers = HeaderMap::new();
    headers.insert(
        USER_AGENT,
        config
            .user_agent
            .parse()
            .map_err(|_| JiraError::Other("invalid user agent".to_string()))?,
    );

    HttpClient::builder()
        .default_headers(headers)
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()
        .map_err(|err| JiraError::Other(err.to_string()))
}

fn first_error_message(body: &Value) -> Option<String> {
    body.get("errorMessages")?
        .as_array()?
        .first()?
        .as_str()
        .map(str::to_string)
}
