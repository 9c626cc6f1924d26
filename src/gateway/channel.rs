//! Gateway that hands prompts and notices to a UI event loop over channels

use async_trait::async_trait;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio_stream::{
    wrappers::{errors::BroadcastStreamRecvError, BroadcastStream},
    Stream, StreamExt,
};

use super::{ConfirmPrompt, Confirmation, Gateway, Notice};

/// A pending confirmation; answer it through `reply`
#[derive(Debug)]
pub struct ConfirmRequest {
    pub prompt: ConfirmPrompt,
    pub reply: oneshot::Sender<bool>,
}

impl ConfirmRequest {
    pub fn answer(self, confirmed: bool) {
        // The store may have stopped waiting; nothing to do then.
        let _ = self.reply.send(confirmed);
    }
}

#[derive(Clone)]
pub struct ChannelGateway {
    notices: broadcast::Sender<Notice>,
    prompts: mpsc::Sender<ConfirmRequest>,
}

impl ChannelGateway {
    /// Create the gateway and the receiver the UI reads confirmations from.
    /// Notices are buffered up to `capacity` per subscriber.
    pub fn new(capacity: usize) -> (Self, mpsc::Receiver<ConfirmRequest>) {
        let (notices, _) = broadcast::channel(capacity);
        let (prompts, rx) = mpsc::channel(capacity);
        (Self { notices, prompts }, rx)
    }

    /// Subscribe to notices emitted from now on. Lagged subscribers skip the
    /// notices they missed.
    pub fn subscribe(&self) -> impl Stream<Item = Notice> + Send + Unpin {
        BroadcastStream::new(self.notices.subscribe()).filter_map(
            |item: Result<Notice, BroadcastStreamRecvError>| match item {
                Ok(notice) => Some(notice),
                Err(BroadcastStreamRecvError::Lagged(n)) => {
                    tracing::warn!("Notice subscriber lagged, {} notices dropped", n);
                    None
                }
            },
        )
    }
}

#[async_trait]
impl Gateway for ChannelGateway {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> Confirmation {
        let (reply, answer) = oneshot::channel();
        let request = ConfirmRequest { prompt: prompt.clone(), reply };

        if self.prompts.send(request).await.is_err() {
            tracing::warn!("No confirmation listener, treating '{}' as cancelled", prompt.title);
            return Confirmation::Cancelled;
        }

        match answer.await {
            Ok(true) => Confirmation::Confirmed,
            _ => Confirmation::Cancelled,
        }
    }

    async fn notify(&self, notice: Notice) {
        // No subscribers is fine, notices are transient.
        let _ = self.notices.send(notice);
    }
}
