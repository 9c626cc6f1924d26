//! Campusdesk
//!
//! Client-side CRUD layer of the campus and housing administration
//! front-end: generic entity stores that keep a list, a form draft and an
//! editing flag in sync with a remote REST API, with an injected gateway for
//! confirmations and notices.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;
pub mod stores;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use store::EntityStore;
pub use stores::Stores;

/// Application context, built once per application lifetime or per test
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<AppConfig>,
    pub auth: client::AuthState,
    pub gateway: Arc<dyn gateway::Gateway>,
    pub stores: Stores,
}

impl AppContext {
    /// Build the context, loading the persisted token when a token file is configured
    pub async fn new(config: AppConfig, gateway: Arc<dyn gateway::Gateway>) -> AppResult<Self> {
        let auth = match &config.auth.token_file {
            Some(path) => {
                let auth = client::AuthState::load(path).await?;
                if let Some(token) = config.auth.token.as_deref().filter(|t| !t.is_empty()) {
                    auth.set_token(token).await?;
                }
                auth
            }
            None => client::AuthState::new(config.auth.token.clone()),
        };

        let stores = Stores::new(&config.api, auth.clone(), Arc::clone(&gateway))?;

        Ok(Self {
            config: Arc::new(config),
            auth,
            gateway,
            stores,
        })
    }
}
