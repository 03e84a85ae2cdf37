use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::domain::entities::comment::{Comment, User};
use crate::usecase::ports::source::{DashboardSource, SourceError};

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = self.endpoint(path);
        debug!(%url, "fetching");

        let response = self.client.get(&url).send().map_err(|err| {
            error!(%url, error = %err, "request failed");
            SourceError::Request {
                resource: path.to_string(),
                message: err.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%url, status = status.as_u16(), "unexpected status");
            return Err(SourceError::Status {
                resource: path.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().map_err(|err| {
            error!(%url, error = %err, "failed to decode response");
            SourceError::Decode {
                resource: path.to_string(),
                message: err.to_string(),
            }
        })
    }
}

impl DashboardSource for HttpSource {
    fn list_users(&self) -> Result<Vec<User>, SourceError> {
        self.get_json("users")
    }

    fn list_comments(&self) -> Result<Vec<Comment>, SourceError> {
        self.get_json("comments")
    }

    fn get_user(&self, id: i64) -> Result<User, SourceError> {
        self.get_json(&format!("users/{id}"))
    }
}
