use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::persist::types::{PersistError, PersistResult, Profile, PROFILE_SCHEMA_VERSION};
use crate::persist::ProfileStore;

/// Single-file JSON store, the closest server-less analogue to the
/// browser localStorage the product uses.
pub struct JsonProfileStore {
    pub path: PathBuf,
}

impl JsonProfileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

#[async_trait]
impl ProfileStore for JsonProfileStore {
    async fn load(&self) -> PersistResult<Option<Profile>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No profile file yet");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let profile: Profile = serde_json::from_str(&raw)?;
        if profile.version != PROFILE_SCHEMA_VERSION {
            warn!(found = profile.version, "Profile schema version mismatch");
            return Err(PersistError::FormatMismatch {
                found: profile.version,
                expected: PROFILE_SCHEMA_VERSION,
            });
        }
        debug!(path = %self.path.display(), orders = profile.standing_orders.len(), "Loaded profile");
        Ok(Some(profile))
    }

    async fn save(&mut self, profile: &Profile) -> PersistResult<()> {
        let json = serde_json::to_string_pretty(profile)?;
        // Write to a sibling temp file first so a crash mid-write cannot
        // leave a truncated profile behind.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json.as_bytes()).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), "Saved profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonProfileStore::new(dir.path().join("profile.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonProfileStore::new(dir.path().join("profile.json"));
        let profile = Profile::new(500.0, 42.0);
        store.save(&profile).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[tokio::test]
    async fn test_version_mismatch_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let mut bad = Profile::new(1.0, 1.0);
        bad.version = 99;
        tokio::fs::write(&path, serde_json::to_string(&bad).unwrap())
            .await
            .unwrap();
        let store = JsonProfileStore::new(&path);
        match store.load().await {
            Err(PersistError::FormatMismatch { found: 99, .. }) => {}
            other => panic!("expected format mismatch, got {:?}", other),
        }
    }
}
