//! The record store: full-document reads and writes of the user list.
//!
//! Every operation performs a fresh load and every mutation a full save;
//! there is no caching and no locking. At-most-one-process usage is
//! assumed: overlapping mutations can race and collide on ids.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::model::User;
use crate::{Error, Result};

/// Owns read/write access to the JSON document backing the user list.
///
/// The path is passed in explicitly; nothing in this crate reaches for an
/// ambient location.
#[derive(Clone, Debug)]
pub struct UserStore {
    path: PathBuf,
}

impl UserStore {
    /// Create a store over the given backing file.
    ///
    /// The file is not created here — it is assumed to pre-exist. See
    /// [`UserStore::init`] for the operator-facing creation path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the entire user list.
    ///
    /// # Errors
    ///
    /// `Error::StorageRead` if the file is missing, unreadable, or not a
    /// valid JSON array of user records. No partial-document recovery.
    pub async fn load(&self) -> Result<Vec<User>> {
        let text = fs::read_to_string(&self.path)
            .await
            .map_err(|e| Error::storage_read(&self.path, e))?;
        let records: Vec<User> =
            serde_json::from_str(&text).map_err(|e| Error::storage_read(&self.path, e))?;
        debug!(path = %self.path.display(), count = records.len(), "loaded store");
        Ok(records)
    }

    /// Serialize the full list back to the backing document, pretty-printed
    /// with 2-space indentation.
    ///
    /// Writes a sibling temp file and renames it into place so a crash
    /// mid-write cannot leave a truncated store.
    ///
    /// # Errors
    ///
    /// `Error::StorageWrite` on serialization or I/O failure; the previous
    /// document is left intact in that case.
    pub async fn save(&self, records: &[User]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| Error::storage_write(&self.path, e))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .await
            .map_err(|e| Error::storage_write(&self.path, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| Error::storage_write(&self.path, e))?;
        debug!(path = %self.path.display(), count = records.len(), "saved store");
        Ok(())
    }

    /// Seed an empty store (`[]`), creating parent directories as needed.
    ///
    /// The server never calls this: the backing file is created externally,
    /// and this is that external mechanism. Refuses to overwrite an
    /// existing store unless `force` is set.
    pub async fn init(&self, force: bool) -> Result<()> {
        if !force && fs::try_exists(&self.path).await.unwrap_or(false) {
            return Err(Error::storage_write(
                &self.path,
                "store already exists (pass force to overwrite)",
            ));
        }
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| Error::storage_write(&self.path, e))?;
            }
        }
        self.save(&[]).await
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NewUser, User, next_id};
    use tempfile::TempDir;

    fn sample(id: u64, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            address: format!("{} Test Rd", id),
            phone: format!("555-01{:02}", id),
        }
    }

    fn store_in(dir: &TempDir) -> UserStore {
        UserStore::new(dir.path().join("users.json"))
    }

    #[tokio::test]
    async fn test_store_round_trip_preserves_order_and_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let records = vec![sample(1, "Alice"), sample(2, "Bob"), sample(3, "Carol")];

        store.save(&records).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, records);
    }

    #[tokio::test]
    async fn test_store_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, Error::StorageRead(_)));
        assert!(err.to_string().contains("users.json"));
    }

    #[tokio::test]
    async fn test_store_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.path(), "not json at all").await.unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, Error::StorageRead(_)));
    }

    #[tokio::test]
    async fn test_store_load_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        // An object, not an array: fatal for the operation.
        fs::write(store.path(), r#"{"id": 1}"#).await.unwrap();

        let err = store.load().await.unwrap_err();
        assert!(matches!(err, Error::StorageRead(_)));
    }

    #[tokio::test]
    async fn test_store_save_pretty_prints_two_space_indent() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[sample(1, "Alice")]).await.unwrap();

        let text = fs::read_to_string(store.path()).await.unwrap();
        assert!(text.starts_with("[\n  {"));
        assert!(text.contains("\n    \"id\": 1"));
    }

    #[tokio::test]
    async fn test_store_save_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[sample(1, "Alice")]).await.unwrap();

        let mut names = Vec::new();
        let mut entries = fs::read_dir(dir.path()).await.unwrap();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec!["users.json"]);
    }

    #[tokio::test]
    async fn test_store_save_overwrites_fully() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store
            .save(&[sample(1, "Alice"), sample(2, "Bob")])
            .await
            .unwrap();
        store.save(&[sample(1, "Alice")]).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[tokio::test]
    async fn test_store_save_empty_list() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[]).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Vec::<User>::new());
        assert_eq!(fs::read_to_string(store.path()).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_store_init_creates_empty_store() {
        let dir = TempDir::new().unwrap();
        let store = UserStore::new(dir.path().join("data").join("users.json"));
        store.init(false).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Vec::<User>::new());
    }

    #[tokio::test]
    async fn test_store_init_refuses_existing() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[sample(1, "Alice")]).await.unwrap();

        let err = store.init(false).await.unwrap_err();
        assert!(matches!(err, Error::StorageWrite(_)));
        // Existing data untouched.
        assert_eq!(store.load().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_store_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.save(&[sample(1, "Alice")]).await.unwrap();

        store.init(true).await.unwrap();
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_create_sequence_matches_id_scheme() {
        // load → next_id → append → save, twice over.
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.init(false).await.unwrap();

        for expected_id in 1..=2u64 {
            let mut records = store.load().await.unwrap();
            let id = next_id(&records);
            assert_eq!(id, expected_id);
            records.push(User::from_new(
                id,
                NewUser {
                    name: format!("User {}", id),
                    email: format!("u{}@example.com", id),
                    address: format!("{} Test Rd", id),
                    phone: "555-0100".to_string(),
                },
            ));
            store.save(&records).await.unwrap();
        }

        assert_eq!(store.load().await.unwrap().len(), 2);
    }
}
