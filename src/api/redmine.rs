use super::{IssueTracker, RedmineError};
use crate::libs::catalog::Activity;
use crate::libs::entry::TimeEntry;
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const ACTIVITIES_URL: &str = "enumerations/time_entry_activities.json";
const TIME_ENTRIES_URL: &str = "time_entries.json";
const API_KEY_HEADER: &str = "X-Redmine-API-Key";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize, Debug)]
struct ActivitiesResponse {
    time_entry_activities: Vec<RedmineActivity>,
}

#[derive(Deserialize, Debug)]
struct RedmineActivity {
    id: u64,
    name: String,
    // Older Redmine versions do not report the flag at all.
    #[serde(default = "active_by_default")]
    active: bool,
}

fn active_by_default() -> bool {
    true
}

#[derive(Serialize, Debug)]
struct TimeEntryRequest<'a> {
    time_entry: &'a TimeEntry,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    errors: Vec<String>,
}

/// Connection settings of a Redmine instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedmineConfig {
    pub host: String,
    pub key: String,
}

/// Redmine REST client authenticated with an API key.
#[derive(Debug)]
pub struct Redmine {
    client: Client,
    config: RedmineConfig,
}

impl Redmine {
    /// Creates a client for `host` (scheme required, trailing slash ignored).
    pub fn new(host: &str, key: &str) -> Result<Self, RedmineError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Self::with_client(client, host, key)
    }

    /// Same as [`Redmine::new`] with a preconfigured HTTP client.
    pub fn with_client(client: Client, host: &str, key: &str) -> Result<Self, RedmineError> {
        let host = host.trim().trim_end_matches('/');
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            return Err(RedmineError::InvalidHost(host.to_string()));
        }

        Ok(Self {
            client,
            config: RedmineConfig {
                host: host.to_string(),
                key: key.to_string(),
            },
        })
    }

    pub fn config(&self) -> &RedmineConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.host, path)
    }

    fn check(response: Response) -> Result<Response, RedmineError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(Self::rejection(status, &body))
    }

    /// Prefers Redmine's `errors` array over the bare status reason.
    fn rejection(status: StatusCode, body: &str) -> RedmineError {
        let details = match serde_json::from_str::<ErrorResponse>(body) {
            Ok(error) if !error.errors.is_empty() => error.errors.join("; "),
            _ => status.canonical_reason().unwrap_or("unexpected response").to_string(),
        };
        RedmineError::Rejected {
            status: status.as_u16(),
            details,
        }
    }
}

impl IssueTracker for Redmine {
    fn activities(&mut self) -> Result<Vec<Activity>, RedmineError> {
        let response = self
            .client
            .get(self.url(ACTIVITIES_URL))
            .header(API_KEY_HEADER, &self.config.key)
            .send()?;
        let body = Self::check(response)?.json::<ActivitiesResponse>()?;

        Ok(body
            .time_entry_activities
            .into_iter()
            .filter(|activity| activity.active)
            .map(|activity| Activity {
                id: activity.id,
                name: activity.name,
            })
            .collect())
    }

    fn create_time_entry(&mut self, entry: &TimeEntry) -> Result<(), RedmineError> {
        let response = self
            .client
            .post(self.url(TIME_ENTRIES_URL))
            .header(API_KEY_HEADER, &self.config.key)
            .json(&TimeEntryRequest { time_entry: entry })
            .send()?;
        Self::check(response)?;
        Ok(())
    }
}
