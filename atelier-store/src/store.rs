use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::warn;

use crate::model::Profiles;

/// Failures of the persistence layer. Input validation never shows up here:
/// the command boundary rejects bad levels and unknown professions before
/// the store is involved.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read roster document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write roster document {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize roster document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// Handle to the JSON roster document.
///
/// Clones are cheap and share one process-wide lock, so a load-mutate-save
/// sequence is never interleaved with another operation and two concurrent
/// updates cannot lose each other's write.
#[derive(Clone, Debug)]
pub struct ProfileStore {
    inner: Arc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    path: PathBuf,
    lock: Mutex<()>,
}

impl ProfileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                path: path.into(),
                lock: Mutex::new(()),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Load the current document. A missing file is an empty roster; a
    /// malformed file is quarantined and treated as empty.
    pub async fn snapshot(&self) -> Result<Profiles, StoreError> {
        let _guard = self.inner.lock.lock().await;
        read_document(&self.inner.path).await
    }

    /// Run one serialized load-mutate-save sequence and hand back whatever
    /// the mutation returned.
    pub(crate) async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut Profiles) -> T,
    ) -> Result<T, StoreError> {
        let _guard = self.inner.lock.lock().await;
        let mut profiles = read_document(&self.inner.path).await?;
        let outcome = apply(&mut profiles);
        write_document(&self.inner.path, &profiles).await?;
        Ok(outcome)
    }
}

async fn read_document(path: &Path) -> Result<Profiles, StoreError> {
    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Ok(Profiles::default());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match serde_json::from_str(&raw) {
        Ok(profiles) => Ok(profiles),
        Err(error) => {
            warn!(
                path = %path.display(),
                %error,
                "roster document is malformed, continuing with an empty roster"
            );
            quarantine_corrupt(path).await;
            Ok(Profiles::default())
        }
    }
}

/// Move a malformed document aside so the next save cannot silently
/// overwrite whatever is left of it.
async fn quarantine_corrupt(path: &Path) {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |duration| duration.as_secs());
    let target = sibling_path(path, &format!("corrupt-{timestamp}"));

    match tokio::fs::rename(path, &target).await {
        Ok(()) => warn!(
            quarantined = %target.display(),
            "malformed roster document moved aside"
        ),
        Err(error) => warn!(
            path = %path.display(),
            %error,
            "failed to quarantine malformed roster document"
        ),
    }
}

async fn write_document(path: &Path, profiles: &Profiles) -> Result<(), StoreError> {
    let payload =
        serde_json::to_string_pretty(profiles).map_err(|source| StoreError::Serialize { source })?;

    // Write-then-rename keeps the live document intact if we die mid-write.
    let staging = sibling_path(path, "tmp");
    tokio::fs::write(&staging, payload)
        .await
        .map_err(|source| StoreError::Write {
            path: staging.clone(),
            source,
        })?;
    tokio::fs::rename(&staging, path)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(".");
    raw.push(suffix);
    PathBuf::from(raw)
}
