//! Blob storage for report attachments and documents.
//!
//! Files are addressed by generated keys of the form `<uuid v4>/<sanitized file name>`, so
//! two uploads of the same file name never collide and the original name survives in the key
//! for operators browsing the directory.

use std::{
    future::Future,
    path::{Component, Path, PathBuf},
};

use dioxus_logger::tracing;
use uuid::Uuid;

use crate::server::error::storage::StorageError;

/// Maximum length of the file-name part of a storage key.
const MAX_FILE_NAME_LEN: usize = 100;

/// A store for uploaded file contents.
pub trait BlobStore: Clone + Send + Sync + 'static {
    /// Store `bytes` and return the generated key.
    fn put(
        &self,
        file_name: &str,
        bytes: &[u8],
    ) -> impl Future<Output = Result<String, StorageError>> + Send;

    /// Read the blob stored under `key`.
    fn get(&self, key: &str) -> impl Future<Output = Result<Vec<u8>, StorageError>> + Send;

    /// Delete the blob stored under `key`. Deleting a missing blob succeeds.
    fn delete(&self, key: &str) -> impl Future<Output = Result<(), StorageError>> + Send;
}

/// Replace anything but ASCII alphanumerics, `.`, `-` and `_` with `_`.
///
/// Leading dots are stripped so a key can never name a hidden file or `..`.
pub fn sanitize_file_name(file_name: &str) -> String {
    // Browsers on Windows may send the full client path
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name);

    let sanitized: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = sanitized.trim_start_matches('.');
    let truncated: String = trimmed.chars().take(MAX_FILE_NAME_LEN).collect();

    if truncated.is_empty() {
        "file".to_string()
    } else {
        truncated
    }
}

/// Generate a fresh storage key for an uploaded file.
pub fn generate_key(file_name: &str) -> String {
    format!("{}/{}", Uuid::new_v4(), sanitize_file_name(file_name))
}

/// [`BlobStore`] writing each blob to `<root>/<key>` on the local file system.
#[derive(Clone, Debug)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    /// Open a store rooted at `root`, creating the directory if it doesn't exist.
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        tokio::fs::create_dir_all(&root).await?;

        Ok(Self { root })
    }

    /// Resolve a key to a path below the root, rejecting anything that could escape it.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(key);

        let is_safe = !key.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));

        if !is_safe {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

impl BlobStore for FsBlobStore {
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        let key = generate_key(file_name);
        let path = self.path_for(&key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        Ok(key)
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        // Each key owns its uuid directory; it is empty once the blob is gone
        if let Some(parent) = path.parent() {
            if parent != self.root {
                let _ = tokio::fs::remove_dir(parent).await;
            }
        }

        Ok(())
    }
}

/// A file received in a multipart upload.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    pub fn size_bytes(&self) -> i64 {
        i64::try_from(self.bytes.len()).unwrap_or(i64::MAX)
    }
}

/// Store every file in order, returning their keys.
///
/// When any file fails, the blobs already stored by this call are deleted before the error
/// is returned, so an upload is stored completely or not at all.
pub async fn put_all<S: BlobStore>(
    store: &S,
    files: &[UploadedFile],
) -> Result<Vec<String>, StorageError> {
    let mut keys = Vec::with_capacity(files.len());

    for file in files {
        match store.put(&file.file_name, &file.bytes).await {
            Ok(key) => keys.push(key),
            Err(e) => {
                tracing::warn!(
                    "Failed to store {}, removing {} blob(s) of the same upload: {}",
                    file.file_name,
                    keys.len(),
                    e
                );
                delete_all(store, &keys).await;

                return Err(e);
            }
        }
    }

    Ok(keys)
}

/// Delete blobs on a best-effort basis, logging failures.
///
/// Used after the owning rows are gone or were never written; a leftover blob is harmless
/// while a failed request is not.
pub async fn delete_all<S: BlobStore>(store: &S, keys: &[String]) {
    for key in keys {
        if let Err(e) = store.delete(key).await {
            tracing::error!("Failed to delete blob {}: {}", key, e);
        }
    }
}

/// Test double failing to store one particular file name.
#[cfg(test)]
#[derive(Clone, Debug)]
pub(crate) struct FailingBlobStore {
    pub inner: FsBlobStore,
    pub fail_on: String,
}

#[cfg(test)]
impl BlobStore for FailingBlobStore {
    async fn put(&self, file_name: &str, bytes: &[u8]) -> Result<String, StorageError> {
        if file_name == self.fail_on {
            return Err(std::io::Error::other("disk full").into());
        }
        self.inner.put(file_name, bytes).await
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.inner.get(key).await
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.inner.delete(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod sanitize_file_name {
        use super::*;

        /// Expect safe names to pass through unchanged
        #[test]
        fn keeps_safe_names() {
            assert_eq!(sanitize_file_name("invoice-2025_03.pdf"), "invoice-2025_03.pdf");
        }

        /// Expect path separators, spaces and non-ASCII to be replaced or dropped
        #[test]
        fn strips_paths_and_unsafe_characters() {
            assert_eq!(sanitize_file_name("C:\\Users\\ola\\bilde 1.jpg"), "bilde_1.jpg");
            assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
            assert_eq!(sanitize_file_name("fjøs.png"), "fj_s.png");
        }

        /// Expect names that sanitize to nothing to get a placeholder
        #[test]
        fn never_returns_empty_or_hidden_name() {
            assert_eq!(sanitize_file_name(".."), "file");
            assert_eq!(sanitize_file_name(""), "file");
            assert_eq!(sanitize_file_name(".env"), "env");
        }
    }

    mod fs_blob_store {
        use super::*;

        /// Expect a stored blob to be readable under its generated key
        #[tokio::test]
        async fn put_then_get() -> Result<(), StorageError> {
            let dir = tempfile::tempdir()?;
            let store = FsBlobStore::open(dir.path()).await?;

            let key = store.put("report photo.jpg", b"jpeg").await?;

            assert!(key.ends_with("/report_photo.jpg"));
            assert_eq!(store.get(&key).await?, b"jpeg".to_vec());

            Ok(())
        }

        /// Expect two uploads with the same name to get different keys
        #[tokio::test]
        async fn keys_are_unique() -> Result<(), StorageError> {
            let dir = tempfile::tempdir()?;
            let store = FsBlobStore::open(dir.path()).await?;

            let first = store.put("a.txt", b"1").await?;
            let second = store.put("a.txt", b"2").await?;

            assert_ne!(first, second);

            Ok(())
        }

        /// Expect deletion to remove the blob and to succeed when repeated
        #[tokio::test]
        async fn delete_is_idempotent() -> Result<(), StorageError> {
            let dir = tempfile::tempdir()?;
            let store = FsBlobStore::open(dir.path()).await?;
            let key = store.put("a.txt", b"1").await?;

            store.delete(&key).await?;
            store.delete(&key).await?;

            assert!(matches!(
                store.get(&key).await,
                Err(StorageError::NotFound(_))
            ));

            Ok(())
        }

        /// Expect keys escaping the root to be rejected
        #[tokio::test]
        async fn rejects_traversal_keys() -> Result<(), StorageError> {
            let dir = tempfile::tempdir()?;
            let store = FsBlobStore::open(dir.path()).await?;

            assert!(matches!(
                store.get("../secret").await,
                Err(StorageError::InvalidKey(_))
            ));
            assert!(matches!(
                store.get("/etc/passwd").await,
                Err(StorageError::InvalidKey(_))
            ));

            Ok(())
        }
    }

    mod put_all {
        use super::*;

        fn file(name: &str) -> UploadedFile {
            UploadedFile {
                file_name: name.to_string(),
                content_type: "text/plain".to_string(),
                bytes: name.as_bytes().to_vec(),
            }
        }

        fn stored_entries(root: &Path) -> usize {
            std::fs::read_dir(root).map(|dir| dir.count()).unwrap_or(0)
        }

        /// Expect one key per file in upload order
        #[tokio::test]
        async fn stores_every_file() -> Result<(), StorageError> {
            let dir = tempfile::tempdir()?;
            let store = FsBlobStore::open(dir.path()).await?;

            let keys = put_all(&store, &[file("a.txt"), file("b.txt")]).await?;

            assert_eq!(keys.len(), 2);
            assert!(keys[0].ends_with("/a.txt"));
            assert_eq!(store.get(&keys[1]).await?, b"b.txt".to_vec());

            Ok(())
        }

        /// Expect earlier blobs of the upload to be removed when a later file fails
        #[tokio::test]
        async fn rolls_back_on_failure() -> Result<(), StorageError> {
            let dir = tempfile::tempdir()?;
            let store = FailingBlobStore {
                inner: FsBlobStore::open(dir.path()).await?,
                fail_on: "c.txt".to_string(),
            };

            let result = put_all(&store, &[file("a.txt"), file("b.txt"), file("c.txt")]).await;

            assert!(matches!(result, Err(StorageError::Io(_))));
            assert_eq!(stored_entries(dir.path()), 0);

            Ok(())
        }
    }
}
