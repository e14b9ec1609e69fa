//! Project store trait abstraction.

use async_trait::async_trait;
use sprintcast_core::{Project, ProjectId};

/// Error type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Supplies projects (settings and epics) to the forecasting engine and
/// persists them again.
///
/// This trait allows different storage backends to be plugged in.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Save a project (create or update).
    async fn save_project(&mut self, project: &Project) -> Result<()>;

    /// Load a project by ID.
    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>>;

    /// List all stored projects.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Delete a project. Fails with [`StorageError::NotFound`] if it does not exist.
    async fn delete_project(&mut self, id: ProjectId) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let errors = vec![
            StorageError::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")),
            StorageError::from(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
            StorageError::NotFound("01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string()),
        ];

        for error in &errors {
            let message = error.to_string();
            match error {
                StorageError::Io(_) => assert!(message.starts_with("I/O error")),
                StorageError::Json(_) => assert!(message.starts_with("JSON error")),
                StorageError::NotFound(id) => assert_eq!(message, format!("Not found: {}", id)),
            }
        }
    }
}
