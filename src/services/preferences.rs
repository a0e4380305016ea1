use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;

use crate::api_models::preferences::RefreshPreferences;

pub const MIN_REFRESH_INTERVAL_SECS: u64 = 1;
pub const MAX_REFRESH_INTERVAL_SECS: u64 = 3600;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("refresh interval must be between 1 and 3600 seconds, got {0}")]
    OutOfRange(u64),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

fn validate(prefs: &RefreshPreferences) -> Result<(), PreferenceError> {
    let secs = prefs.refresh_interval;
    if !(MIN_REFRESH_INTERVAL_SECS..=MAX_REFRESH_INTERVAL_SECS).contains(&secs) {
        return Err(PreferenceError::OutOfRange(secs));
    }
    Ok(())
}

/// 刷新间隔偏好：启动时加载一次，修改时落盘
#[derive(Debug)]
pub struct PreferenceStore {
    path: PathBuf,
    current: Mutex<RefreshPreferences>,
}

impl PreferenceStore {
    /// 文件不存在时使用默认值，文件损坏则报错
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, PreferenceError> {
        let path = path.into();
        let current = match tokio::fs::read_to_string(&path).await {
            Ok(raw) => {
                let prefs: RefreshPreferences = serde_json::from_str(&raw)?;
                validate(&prefs)?;
                prefs
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("偏好文件不存在，使用默认值: {}", path.display());
                RefreshPreferences::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            current: Mutex::new(current),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn get(&self) -> RefreshPreferences {
        *self.current.lock().await
    }

    /// 先写文件再更新内存，写入失败时内存中的值保持不变
    pub async fn update(&self, prefs: RefreshPreferences) -> Result<RefreshPreferences, PreferenceError> {
        validate(&prefs)?;

        let mut current = self.current.lock().await;
        if *current == prefs {
            return Ok(prefs);
        }

        self.save(&prefs).await?;
        tracing::info!(
            "刷新间隔已更新: {}s -> {}s",
            current.refresh_interval,
            prefs.refresh_interval
        );
        *current = prefs;
        Ok(prefs)
    }

    async fn save(&self, prefs: &RefreshPreferences) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let body = serde_json::to_vec_pretty(prefs)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_models::preferences::DEFAULT_REFRESH_INTERVAL_SECS;

    #[tokio::test]
    async fn missing_file_uses_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::load(dir.path().join("prefs.json")).await.unwrap();
        assert_eq!(store.get().await.refresh_interval, DEFAULT_REFRESH_INTERVAL_SECS);
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn update_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = PreferenceStore::load(&path).await.unwrap();
        let saved = store
            .update(RefreshPreferences { refresh_interval: 60 })
            .await
            .unwrap();
        assert_eq!(saved.refresh_interval, 60);
        assert_eq!(store.get().await.refresh_interval, 60);

        let reloaded = PreferenceStore::load(&path).await.unwrap();
        assert_eq!(reloaded.get().await.refresh_interval, 60);
    }

    #[tokio::test]
    async fn unchanged_value_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = PreferenceStore::load(&path).await.unwrap();

        store
            .update(RefreshPreferences { refresh_interval: DEFAULT_REFRESH_INTERVAL_SECS })
            .await
            .unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::load(dir.path().join("prefs.json")).await.unwrap();

        for secs in [0, MAX_REFRESH_INTERVAL_SECS + 1] {
            let err = store
                .update(RefreshPreferences { refresh_interval: secs })
                .await
                .unwrap_err();
            assert!(matches!(err, PreferenceError::OutOfRange(s) if s == secs));
        }
        assert_eq!(store.get().await.refresh_interval, DEFAULT_REFRESH_INTERVAL_SECS);
    }

    #[tokio::test]
    async fn corrupt_file_fails_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = PreferenceStore::load(&path).await.unwrap_err();
        assert!(matches!(err, PreferenceError::SerdeJson(_)));
    }
}
