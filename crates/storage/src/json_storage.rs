//! JSON file storage implementation.
//!
//! Stores one pretty-printed JSON file per project under
//! `<root>/projects/<id>.json`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sprintcast_core::{Project, ProjectId};
use tokio::fs;
use tracing::{debug, warn};

use super::{ProjectStore, Result, StorageError};

/// File-based JSON storage backend.
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Create storage, creating the `projects/` directory if needed.
    pub async fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(root.join("projects")).await?;
        Ok(Self { root })
    }

    /// Root directory of this store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn project_path(&self, id: ProjectId) -> PathBuf {
        self.root.join("projects").join(format!("{}.json", id))
    }

    /// Read a project from an arbitrary JSON file, e.g. one exported by
    /// another tool.
    pub async fn read_file(path: impl AsRef<Path>) -> Result<Project> {
        let path = path.as_ref();
        read_json(path)
            .await?
            .ok_or_else(|| StorageError::NotFound(path.display().to_string()))
    }
}

#[async_trait]
impl ProjectStore for JsonStorage {
    async fn save_project(&mut self, project: &Project) -> Result<()> {
        let path = self.project_path(project.id);
        let json = serde_json::to_string_pretty(project)?;

        // Write through a temp file so readers never see a partial project.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json.as_bytes()).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        debug!(project = %project.id, path = %path.display(), "saved project");
        Ok(())
    }

    async fn load_project(&self, id: ProjectId) -> Result<Option<Project>> {
        read_json(&self.project_path(id)).await
    }

    async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects: Vec<Project> = list_dir(&self.root.join("projects")).await?;
        projects.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(projects)
    }

    async fn delete_project(&mut self, id: ProjectId) -> Result<()> {
        match fs::remove_file(self.project_path(id)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    match fs::read_to_string(path).await {
        Ok(json) => {
            let value = serde_json::from_str(&json)?;
            Ok(Some(value))
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

async fn list_dir<T: serde::de::DeserializeOwned>(dir: &Path) -> Result<Vec<T>> {
    let mut items = Vec::new();
    let mut rd = fs::read_dir(dir).await?;
    while let Some(entry) = rd.next_entry().await? {
        if entry.path().extension().and_then(|s| s.to_str()) != Some("json") {
            continue;
        }
        match read_json(&entry.path()).await {
            Ok(Some(item)) => items.push(item),
            Ok(None) => {}
            Err(e) => warn!(path = %entry.path().display(), error = %e, "skipping unreadable project"),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprintcast_core::{Epic, SizeCategory, Task};

    fn create_test_project() -> Project {
        let mut project = Project::new("Test Project");
        project.settings.estimate_buffer_points = 4;
        project.epics.push(
            Epic::new("Epic")
                .with_task(Task::new("Task", SizeCategory::M))
                .with_task(Task::new("Done", SizeCategory::S).completed()),
        );
        project
    }

    #[tokio::test]
    async fn test_save_and_load_project() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let project = create_test_project();
        storage.save_project(&project).await.unwrap();

        let loaded = storage.load_project(project.id).await.unwrap().unwrap();
        assert_eq!(loaded.name, project.name);
        assert_eq!(loaded.settings, project.settings);
        assert_eq!(loaded.epics, project.epics);
    }

    #[tokio::test]
    async fn test_load_missing_project() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path()).await.unwrap();

        assert!(storage.load_project(ProjectId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_projects_skips_other_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        storage.save_project(&create_test_project()).await.unwrap();
        storage.save_project(&Project::new("Second")).await.unwrap();
        fs::write(dir.path().join("projects").join("notes.txt"), b"hello")
            .await
            .unwrap();
        fs::write(dir.path().join("projects").join("broken.json"), b"{")
            .await
            .unwrap();

        let projects = storage.list_projects().await.unwrap();
        assert_eq!(projects.len(), 2);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        // A directory in the project's place makes the final rename fail.
        let project = create_test_project();
        let path = storage.project_path(project.id);
        fs::create_dir(&path).await.unwrap();
        fs::write(path.join("keep"), b"x").await.unwrap();

        assert!(matches!(
            storage.save_project(&project).await,
            Err(StorageError::Io(_))
        ));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_delete_project() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = JsonStorage::new(dir.path()).await.unwrap();

        let project = create_test_project();
        storage.save_project(&project).await.unwrap();
        storage.delete_project(project.id).await.unwrap();

        assert!(storage.load_project(project.id).await.unwrap().is_none());
        assert!(matches!(
            storage.delete_project(project.id).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("import.json");
        fs::write(&path, br#"{"name": "Imported", "epics": [{"name": "E", "tasks": [{"name": "T", "size": "XL"}]}]}"#)
            .await
            .unwrap();

        let project = JsonStorage::read_file(&path).await.unwrap();
        assert_eq!(project.name, "Imported");
        assert_eq!(project.epics[0].tasks[0].size, SizeCategory::Xl);

        assert!(matches!(
            JsonStorage::read_file(dir.path().join("missing.json")).await,
            Err(StorageError::NotFound(_))
        ));
    }
}
