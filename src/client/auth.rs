//! Bearer token holder shared by every API client

use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::RwLock;

use crate::error::AppResult;

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedAuth {
    token: Option<String>,
}

/// Authentication state; clones share the same token
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    token: Arc<RwLock<Option<String>>>,
    file: Option<PathBuf>,
}

impl AuthState {
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: Arc::new(RwLock::new(token.filter(|t| !t.is_empty()))),
            file: None,
        }
    }

    /// Load the token persisted at `path`. A missing file yields an empty state
    /// that will persist to `path` on the next change.
    pub async fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let persisted = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice::<PersistedAuth>(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => PersistedAuth::default(),
            Err(e) => return Err(e.into()),
        };

        let mut state = Self::new(persisted.token);
        state.file = Some(path);
        Ok(state)
    }

    pub async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Replace the token and persist it when a file is attached
    pub async fn set_token(&self, token: impl Into<String>) -> AppResult<()> {
        let token = token.into();
        *self.token.write().await = Some(token).filter(|t| !t.is_empty());
        self.persist().await
    }

    pub async fn clear(&self) -> AppResult<()> {
        *self.token.write().await = None;
        self.persist().await
    }

    async fn persist(&self) -> AppResult<()> {
        let Some(path) = &self.file else {
            return Ok(());
        };
        let body = serde_json::to_vec(&PersistedAuth { token: self.token().await })?;
        tokio::fs::write(path, body).await?;
        tracing::debug!("Persisted auth state to {}", path.display());
        Ok(())
    }
}
