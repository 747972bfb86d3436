//! FIFO pipeline of approved requests awaiting donations.
//!
//! Requests enter at the tail in approval order. A donation can fully fund
//! any request in the pipeline, not just the head, so removal is a linear
//! scan-and-splice.

use std::collections::VecDeque;

use campusfund_types::RequestId;

/// FIFO queue of approved request ids.
#[derive(Debug, Default)]
pub struct FundingPipeline {
    queue: VecDeque<RequestId>,
}

impl FundingPipeline {
    /// Create a new empty pipeline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a request at the tail upon approval.
    pub fn enqueue(&mut self, id: RequestId) {
        self.queue.push_back(id);
    }

    /// Traverse the pipeline in approval order.
    ///
    /// Lazy and restartable — each call starts a fresh traversal.
    pub fn iter(&self) -> impl Iterator<Item = RequestId> + '_ {
        self.queue.iter().copied()
    }

    /// Remove a request wherever it sits in the pipeline.
    ///
    /// Returns `false` if the request is not present.
    pub fn remove(&mut self, id: RequestId) -> bool {
        match self.queue.iter().position(|&entry| entry == id) {
            Some(pos) => {
                self.queue.remove(pos);
                true
            }
            None => false,
        }
    }

    /// The request at the head (oldest approval), if any.
    #[must_use]
    pub fn front(&self) -> Option<RequestId> {
        self.queue.front().copied()
    }

    /// Whether the given request is waiting in the pipeline.
    #[must_use]
    pub fn contains(&self, id: RequestId) -> bool {
        self.queue.contains(&id)
    }

    /// Number of requests waiting in the pipeline.
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the pipeline is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
