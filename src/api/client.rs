use log::{debug, info};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{Project, Store, Task};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] Box<ureq::Error>),
    #[error("invalid response body: {0}")]
    Body(#[from] std::io::Error),
}

/// Blocking client for the tracker's REST API.
///
/// `sync` replaces the internal store wholesale; readers get slices into
/// the last successful snapshot.
pub struct TrackerClient {
    agent: ureq::Agent,
    token: String,
    base_url: String,
    store: Store,
}

impl TrackerClient {
    pub fn new(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            agent: ureq::Agent::new(),
            token: token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            store: Store::default(),
        }
    }

    /// Fetches projects and tasks from the remote service into the store.
    ///
    /// Blocks until both requests complete. No timeout is applied, so a
    /// stalled service blocks the caller indefinitely.
    pub fn sync(&mut self) -> Result<(), ClientError> {
        let projects: Vec<Project> = self.get("projects")?;
        let tasks: Vec<Task> = self.get("tasks")?;
        info!(
            "Sync complete: {} projects, {} tasks",
            projects.len(),
            tasks.len()
        );
        self.store = Store { projects, tasks };
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.store.projects
    }

    pub fn tasks(&self) -> &[Task] {
        &self.store.tasks
    }

    fn get<T: DeserializeOwned>(&self, resource: &str) -> Result<T, ClientError> {
        let url = format!("{}/{}", self.base_url, resource);
        debug!("GET {url}");
        let response = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.token))
            .call()
            .map_err(Box::new)?;
        Ok(response.into_json()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = TrackerClient::new("token", "https://example.com/api/");
        assert_eq!(client.base_url, "https://example.com/api");
    }

    #[test]
    fn test_store_starts_empty() {
        let client = TrackerClient::new("token", "https://example.com");
        assert!(client.projects().is_empty());
        assert!(client.tasks().is_empty());
    }
}
