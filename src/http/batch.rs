use futures::future::{join_all, BoxFuture};
use futures::{Future, FutureExt};

use crate::util::error::{ApiError, BatchError};

/// A group of independent requests dispatched together and awaited as one.
///
/// Every request runs to completion even when another one fails; the batch
/// then reports a single aggregate error.
pub struct Batch<'a, T> {
    requests: Vec<(String, BoxFuture<'a, Result<T, ApiError>>)>,
}

impl<'a, T: Send + 'a> Batch<'a, T> {
    pub fn new() -> Self {
        Batch { requests: Vec::new() }
    }

    pub fn add<F>(&mut self, label: impl Into<String>, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + Send + 'a,
    {
        self.requests.push((label.into(), request.boxed()));
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub async fn execute(self) -> Result<Vec<(String, T)>, BatchError> {
        let total = self.requests.len();
        let (labels, requests): (Vec<String>, Vec<_>) = self.requests.into_iter().unzip();
        let results = join_all(requests).await;

        let mut completed = Vec::with_capacity(total);
        let mut failures = Vec::new();
        for (label, result) in labels.into_iter().zip(results) {
            match result {
                Ok(value) => completed.push((label, value)),
                Err(err) => {
                    warn!("Batched request '{}' failed: {}", label, err);
                    failures.push(format!("{}: {}", label, err));
                }
            }
        }

        if failures.is_empty() {
            return Ok(completed);
        }
        Err(BatchError {
            failed: failures.len(),
            total,
            message: failures.join("; "),
        })
    }
}

impl<'a, T: Send + 'a> Default for Batch<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}
