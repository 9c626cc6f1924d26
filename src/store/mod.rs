//! Generic CRUD entity store
//!
//! One `EntityStore<E>` holds the list of `E` last fetched from the API, the
//! form draft being created or edited, and the editing flag. Operations never
//! return errors: failures are logged, reported through the gateway and
//! summarised in the returned outcome.

pub mod form;
pub mod state;
pub mod tokens;

use serde_json::Value;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use validator::Validate;

use crate::{
    client::{ApiRequest, Transport},
    error::{AppError, AppResult},
    gateway::{ConfirmPrompt, Gateway, Notice},
    models::{Entity, EntityId},
};

pub use state::{
    DeleteOutcome, DeletePhase, FetchOutcome, FetchPhase, FormPhase, Phase, StoreSnapshot,
    SubmitOutcome,
};
pub use tokens::{OperationKind, RequestToken, RequestTokens};

use state::StoreState;

/// Required-field check run before a submit
pub type Validator<E> = Arc<dyn Fn(&E) -> AppResult<()> + Send + Sync>;

/// Per-store configuration: endpoint path and validator
pub struct StoreConfig<E> {
    pub path: String,
    pub validator: Validator<E>,
}

impl<E: Entity> StoreConfig<E> {
    /// `/{RESOURCE}` with the entity's own validation rules
    pub fn for_entity() -> Self {
        Self {
            path: format!("/{}", E::RESOURCE),
            validator: Arc::new(|entity: &E| entity.validate().map_err(AppError::from)),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_validator(mut self, validator: impl Fn(&E) -> AppResult<()> + Send + Sync + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }
}

impl<E: Entity> Default for StoreConfig<E> {
    fn default() -> Self {
        Self::for_entity()
    }
}

impl<E> Clone for StoreConfig<E> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            validator: Arc::clone(&self.validator),
        }
    }
}

pub struct EntityStore<E: Entity> {
    config: StoreConfig<E>,
    transport: Arc<dyn Transport>,
    gateway: Arc<dyn Gateway>,
    state: Mutex<StoreState<E>>,
    tokens: RequestTokens,
}

impl<E: Entity> fmt::Debug for EntityStore<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStore")
            .field("resource", &E::RESOURCE)
            .field("path", &self.config.path)
            .finish()
    }
}

impl<E: Entity> EntityStore<E> {
    pub fn new(config: StoreConfig<E>, transport: Arc<dyn Transport>, gateway: Arc<dyn Gateway>) -> Self {
        Self {
            config,
            transport,
            gateway,
            state: Mutex::new(StoreState::default()),
            tokens: RequestTokens::default(),
        }
    }

    pub fn path(&self) -> &str {
        &self.config.path
    }

    /// Resource path for one record; the id is encoded as a single segment
    fn item_path(&self, id: &EntityId) -> String {
        let segment = id.to_string();
        format!("{}/{}", self.config.path.trim_end_matches('/'), urlencoding::encode(&segment))
    }

    pub async fn list(&self) -> Vec<E> {
        self.state.lock().await.list.clone()
    }

    pub async fn draft(&self) -> E {
        self.state.lock().await.draft.clone()
    }

    pub async fn editing(&self) -> Option<EntityId> {
        self.state.lock().await.editing.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.state.lock().await.phase
    }

    pub async fn find(&self, id: &EntityId) -> Option<E> {
        self.state
            .lock()
            .await
            .list
            .iter()
            .find(|e| &e.id() == id)
            .cloned()
    }

    pub async fn snapshot(&self) -> StoreSnapshot<E> {
        let state = self.state.lock().await;
        StoreSnapshot {
            list: state.list.clone(),
            draft: state.draft.clone(),
            editing: state.editing.clone(),
            phase: state.phase,
        }
    }

    /// Draft fields changed since selection, or since the defaults in create mode
    pub async fn dirty_fields(&self) -> Vec<String> {
        let state = self.state.lock().await;
        match &state.original {
            Some(original) => form::diff_fields(original, &state.draft),
            None => form::diff_fields(&E::default(), &state.draft),
        }
    }

    pub async fn is_dirty(&self) -> bool {
        !self.dirty_fields().await.is_empty()
    }

    /// Replace the list with the API's current array
    pub async fn fetch_list(&self) -> FetchOutcome {
        let token = {
            let mut state = self.state.lock().await;
            state.phase.fetch = FetchPhase::Loading;
            self.tokens.issue(OperationKind::Fetch)
        };

        let response = self.transport.send(ApiRequest::get(self.config.path.clone())).await;

        let (list, outcome, failure) = match response {
            Ok(value @ Value::Array(_)) => match serde_json::from_value::<Vec<E>>(value) {
                Ok(list) => {
                    let count = list.len();
                    (list, FetchOutcome::Loaded(count), None)
                }
                Err(e) => (Vec::new(), FetchOutcome::Failed, Some(AppError::from(e))),
            },
            Ok(other) => {
                tracing::warn!(
                    resource = E::RESOURCE,
                    "Expected an array from {}, got {}",
                    self.config.path,
                    json_kind(&other)
                );
                (Vec::new(), FetchOutcome::NotAnArray, None)
            }
            Err(e) => (Vec::new(), FetchOutcome::Failed, Some(e)),
        };

        {
            let mut state = self.state.lock().await;
            if !self.tokens.is_latest(token) {
                tracing::debug!(
                    resource = E::RESOURCE,
                    "Dropping stale list response #{}",
                    token.sequence()
                );
                return FetchOutcome::Stale;
            }
            state.list = list;
            state.phase.fetch = FetchPhase::Idle;
        }

        match failure {
            Some(e) => self.report_failure("load", &e).await,
            None => tracing::debug!(resource = E::RESOURCE, "Fetched list: {:?}", outcome),
        }
        outcome
    }

    /// Merge a JSON object of fields into the draft. No validation happens here.
    pub async fn update_draft(&self, patch: Value) -> bool {
        let rejected = {
            let mut state = self.state.lock().await;
            match form::merge_patch(&state.draft, &patch) {
                Ok(draft) => {
                    state.draft = draft;
                    state.mark_editing();
                    None
                }
                Err(e) => Some(e),
            }
        };

        match rejected {
            None => true,
            Some(e) => {
                tracing::debug!(resource = E::RESOURCE, "Rejected draft update: {}", e);
                self.gateway.notify(Notice::warning(E::LABEL, e.user_message())).await;
                false
            }
        }
    }

    /// Mutate the draft in place
    pub async fn edit_draft(&self, edit: impl FnOnce(&mut E)) {
        let mut state = self.state.lock().await;
        edit(&mut state.draft);
        state.mark_editing();
    }

    /// Load an existing record into the draft and switch to update mode.
    /// A record without an id stays in create mode.
    pub async fn select_for_edit(&self, entity: E) {
        let mut draft = entity;
        draft.normalize_dates();
        let id = draft.id();

        let mut state = self.state.lock().await;
        state.editing = (!id.is_unset()).then_some(id);
        state.original = Some(draft.clone());
        state.draft = draft;
        state.phase.form = FormPhase::Editing;
    }

    /// Select the listed record with `id`; false when it is not in the list
    pub async fn select_by_id(&self, id: &EntityId) -> bool {
        match self.find(id).await {
            Some(entity) => {
                self.select_for_edit(entity).await;
                true
            }
            None => false,
        }
    }

    /// Create or update the draft, then resynchronise the list
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let prepared = {
            let mut state = self.state.lock().await;
            match (self.config.validator)(&state.draft) {
                Ok(()) => {
                    state.phase.form = FormPhase::Submitting;
                    Ok((
                        state.draft.clone(),
                        state.editing.clone(),
                        self.tokens.issue(OperationKind::Submit),
                    ))
                }
                Err(e) => {
                    if state.phase.form != FormPhase::Submitting {
                        state.phase.form = FormPhase::Editing;
                    }
                    Err(e)
                }
            }
        };

        let (draft, editing, token) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::debug!(resource = E::RESOURCE, "Submit blocked: {}", e);
                self.gateway.notify(Notice::warning(E::LABEL, e.user_message())).await;
                return SubmitOutcome::Invalid;
            }
        };

        let result = match serde_json::to_value(&draft) {
            Ok(body) => {
                let request = match &editing {
                    Some(id) => ApiRequest::put(self.item_path(id), body),
                    None => ApiRequest::post(self.config.path.clone(), body),
                };
                self.transport.send(request).await
            }
            Err(e) => Err(e.into()),
        };

        match result {
            Ok(_) => {
                let latest = {
                    let mut state = self.state.lock().await;
                    let latest = self.tokens.is_latest(token);
                    if latest {
                        state.reset_draft();
                    }
                    latest
                };

                let message = match &editing {
                    Some(id) => {
                        tracing::info!(resource = E::RESOURCE, "Updated {} {}", E::LABEL, id);
                        format!("{} updated successfully", E::LABEL)
                    }
                    None => {
                        tracing::info!(resource = E::RESOURCE, "Created {}", E::LABEL);
                        format!("{} added successfully", E::LABEL)
                    }
                };
                self.gateway.notify(Notice::success(E::LABEL, message)).await;
                self.fetch_list().await;

                match (latest, editing) {
                    (false, _) => SubmitOutcome::Stale,
                    (true, Some(id)) => SubmitOutcome::Updated(id),
                    (true, None) => SubmitOutcome::Created,
                }
            }
            Err(e) => {
                {
                    let mut state = self.state.lock().await;
                    if self.tokens.is_latest(token) {
                        state.phase.form = FormPhase::Editing;
                    }
                }
                self.report_failure("save", &e).await;
                SubmitOutcome::Failed
            }
        }
    }

    /// Delete after the user confirms, then resynchronise the list
    pub async fn delete_entity(&self, id: impl Into<EntityId>) -> DeleteOutcome {
        let id = id.into();
        let token = {
            let mut state = self.state.lock().await;
            state.phase.delete = DeletePhase::ConfirmPending;
            self.tokens.issue(OperationKind::Delete)
        };

        let answer = self.gateway.confirm(&ConfirmPrompt::delete(E::LABEL)).await;
        if !answer.is_confirmed() {
            self.finish_delete(token, DeletePhase::Idle).await;
            tracing::debug!(resource = E::RESOURCE, "Delete of {} cancelled", id);
            return DeleteOutcome::Cancelled;
        }

        self.finish_delete(token, DeletePhase::Deleting).await;
        let result = self.transport.send(ApiRequest::delete(self.item_path(&id))).await;
        self.finish_delete(token, DeletePhase::Idle).await;

        match result {
            Ok(_) => {
                tracing::info!(resource = E::RESOURCE, "Deleted {} {}", E::LABEL, id);
                self.gateway
                    .notify(Notice::success(E::LABEL, format!("{} deleted successfully", E::LABEL)))
                    .await;
                self.fetch_list().await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                self.report_failure("delete", &e).await;
                DeleteOutcome::Failed
            }
        }
    }

    /// Back to an empty draft in create mode
    pub async fn reset_draft(&self) {
        self.state.lock().await.reset_draft();
    }

    async fn finish_delete(&self, token: RequestToken, phase: DeletePhase) {
        let mut state = self.state.lock().await;
        if self.tokens.is_latest(token) {
            state.phase.delete = phase;
        }
    }

    async fn report_failure(&self, action: &str, error: &AppError) {
        tracing::error!(resource = E::RESOURCE, "Failed to {} {}: {}", action, E::LABEL, error);
        self.gateway.notify(Notice::error(E::LABEL, error.user_message())).await;
    }
}

impl<E: Default> StoreState<E> {
    fn mark_editing(&mut self) {
        if self.phase.form == FormPhase::Idle {
            self.phase.form = FormPhase::Editing;
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
