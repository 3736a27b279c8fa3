//! Embedding model boundary.
//!
//! The model itself is an external collaborator: text in, fixed-length
//! vector out, deterministic for identical input and model version. The
//! orchestrator wraps the provider in a bounded timeout since this call
//! is the dominant latency source in a batch.

use std::sync::Arc;
use std::time::Duration;

use sift_core::errors::EmbeddingError;
use tracing::warn;

/// External embedding model collaborator.
pub trait EmbeddingProvider: Send + Sync {
    /// Embed `text` into a fixed-length vector.
    ///
    /// Empty normalized text yields [`EmbeddingError::EmptyInput`].
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Length of the vectors this provider produces.
    fn dimensions(&self) -> usize;
}

/// Run one embedding call with a bounded timeout.
///
/// The call runs on a helper thread; if it does not answer within
/// `timeout` the caller gets [`EmbeddingError::Timeout`] and moves on.
/// The stuck call is abandoned, not cancelled: the orchestrator records
/// the failure and a rerun reattempts the file.
pub fn embed_with_timeout(
    provider: &Arc<dyn EmbeddingProvider>,
    text: &str,
    timeout: Duration,
) -> Result<Vec<f32>, EmbeddingError> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    let worker = Arc::clone(provider);
    let owned = text.to_string();
    std::thread::spawn(move || {
        let _ = tx.send(worker.embed(&owned));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => {
            let ms = timeout.as_millis() as u64;
            warn!(ms, "embedding call timed out");
            Err(EmbeddingError::Timeout { ms })
        }
    }
}

/// Provider wrapper that applies the batch timeout to every call.
pub struct TimedProvider {
    inner: Arc<dyn EmbeddingProvider>,
    timeout: Duration,
}

impl TimedProvider {
    pub fn new(inner: Arc<dyn EmbeddingProvider>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

impl EmbeddingProvider for TimedProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        embed_with_timeout(&self.inner, text, self.timeout)
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }
}
