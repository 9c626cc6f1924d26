//! Headless gateway with a scripted confirmation answer

use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use super::{ConfirmPrompt, Confirmation, Gateway, Notice, NoticeLevel};

#[derive(Default)]
struct Journal {
    answers: VecDeque<Confirmation>,
    prompts: Vec<ConfirmPrompt>,
    notices: Vec<Notice>,
}

/// Records every prompt and notice. Confirmations are answered from the
/// queued answers first, then from the default answer.
#[derive(Clone)]
pub struct RecordingGateway {
    default_answer: Confirmation,
    journal: Arc<Mutex<Journal>>,
}

impl RecordingGateway {
    pub fn new(default_answer: Confirmation) -> Self {
        Self {
            default_answer,
            journal: Arc::new(Mutex::new(Journal::default())),
        }
    }

    pub fn confirming() -> Self {
        Self::new(Confirmation::Confirmed)
    }

    pub fn cancelling() -> Self {
        Self::new(Confirmation::Cancelled)
    }

    /// Queue an answer for the next confirmation
    pub fn answer_next(&self, answer: Confirmation) {
        self.with_journal(|j| j.answers.push_back(answer));
    }

    pub fn prompts(&self) -> Vec<ConfirmPrompt> {
        self.with_journal(|j| j.prompts.clone())
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.with_journal(|j| j.notices.clone())
    }

    pub fn notices_of(&self, level: NoticeLevel) -> Vec<Notice> {
        self.with_journal(|j| j.notices.iter().filter(|n| n.level == level).cloned().collect())
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.with_journal(|j| j.notices.last().cloned())
    }

    fn with_journal<T>(&self, f: impl FnOnce(&mut Journal) -> T) -> T {
        let mut journal = match self.journal.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut journal)
    }
}

#[async_trait]
impl Gateway for RecordingGateway {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation {
        let default_answer = self.default_answer;
        self.with_journal(|j| {
            j.prompts.push(prompt.clone());
            j.answers.pop_front().unwrap_or(default_answer)
        })
    }

    async fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Error => tracing::error!("{}: {}", notice.title, notice.message),
            NoticeLevel::Warning => tracing::warn!("{}: {}", notice.title, notice.message),
            _ => tracing::info!("{}: {}", notice.title, notice.message),
        }
        self.with_journal(|j| j.notices.push(notice));
    }
}
