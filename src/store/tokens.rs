//! Monotonic request tokens used to drop out-of-order responses

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Fetch,
    Submit,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken {
    kind: OperationKind,
    sequence: u64,
}

impl RequestToken {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Last issued token per operation kind
#[derive(Debug, Default)]
pub struct RequestTokens {
    fetch: AtomicU64,
    submit: AtomicU64,
    delete: AtomicU64,
}

impl RequestTokens {
    pub fn issue(&self, kind: OperationKind) -> RequestToken {
        let sequence = self.counter(kind).fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken { kind, sequence }
    }

    /// True when no newer token of the same kind has been issued
    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.counter(token.kind).load(Ordering::SeqCst) == token.sequence
    }

    fn counter(&self, kind: OperationKind) -> &AtomicU64 {
        match kind {
            OperationKind::Fetch => &self.fetch,
            OperationKind::Submit => &self.submit,
            OperationKind::Delete => &self.delete,
        }
    }
}
