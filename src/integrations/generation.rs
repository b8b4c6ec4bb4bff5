// src/integrations/generation.rs
//
// Provider-agnostic text generation contract
//
// The stream is lazy, finite and non-restartable: fragments are pushed to
// the caller's sink in provider emission order. Fragments delivered before
// a mid-stream failure stay delivered; there is no retraction and no
// automatic retry.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::AppResult;

/// How a streaming generation call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// The provider signalled normal completion
    Completed,
    /// The caller's cancel token was observed at a suspension point
    Cancelled,
}

/// Cooperative cancellation flag for an in-flight generation
///
/// Cloned into whatever task drives the stream; checked at every suspension
/// point. Cancelling does not retract fragments already delivered.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// A streaming text-generation capability
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Send `prompt` and push each generated fragment to `on_fragment`
    async fn stream_generate(
        &self,
        prompt: &str,
        cancel: &CancelToken,
        on_fragment: &mut (dyn for<'a> FnMut(&'a str) + Send),
    ) -> AppResult<StreamOutcome>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_observed_by_clones() {
        let token = CancelToken::new();
        let clone = token.clone();

        assert!(!clone.is_cancelled());
        token.cancel();
        assert!(clone.is_cancelled());
    }
}
