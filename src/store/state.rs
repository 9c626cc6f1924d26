//! Store state, phases and operation outcomes

use crate::models::EntityId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Loading,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// Draft holds the default shape
    #[default]
    Idle,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePhase {
    #[default]
    Idle,
    ConfirmPending,
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phase {
    pub fetch: FetchPhase,
    pub form: FormPhase,
    pub delete: DeletePhase,
}

/// Point-in-time copy of a store, for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct StoreSnapshot<E> {
    pub list: Vec<E>,
    pub draft: E,
    pub editing: Option<EntityId>,
    pub phase: Phase,
}

#[derive(Debug, Default)]
pub(crate) struct StoreState<E> {
    pub list: Vec<E>,
    pub draft: E,
    /// Record the draft was selected from, for dirty tracking
    pub original: Option<E>,
    pub editing: Option<EntityId>,
    pub phase: Phase,
}

impl<E: Default> StoreState<E> {
    pub fn reset_draft(&mut self) {
        self.draft = E::default();
        self.original = None;
        self.editing = None;
        self.phase.form = FormPhase::Idle;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Loaded(usize),
    /// The API answered with something other than an array; the list was emptied
    NotAnArray,
    Failed,
    /// A newer fetch was issued before this one completed
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created,
    Updated(EntityId),
    /// Required fields missing, nothing was sent
    Invalid,
    Failed,
    /// Saved remotely, but a newer submit owns the draft
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    Failed,
}
