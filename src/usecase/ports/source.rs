use thiserror::Error;

use crate::domain::entities::comment::{Comment, User};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("request for {resource} failed: {message}")]
    Request { resource: String, message: String },
    #[error("request for {resource} returned status {status}")]
    Status { resource: String, status: u16 },
    #[error("failed to decode {resource}: {message}")]
    Decode { resource: String, message: String },
}

/// Read-only provider of the dashboard's remote records.
pub trait DashboardSource: Send + Sync {
    fn list_users(&self) -> Result<Vec<User>, SourceError>;
    fn list_comments(&self) -> Result<Vec<Comment>, SourceError>;
    fn get_user(&self, id: i64) -> Result<User, SourceError>;
}
