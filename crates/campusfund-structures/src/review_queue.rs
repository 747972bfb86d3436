//! Urgency-ordered review queue for the admin.
//!
//! A binary heap over `(urgency, sequence)` entries: highest urgency
//! surfaces first, ties broken by earliest push (FIFO among equal
//! urgencies). Sequence numbers are assigned by the queue at push time.
//!
//! A request's status can change between push and pop without its heap
//! entry being removed (e.g. it was approved directly or withdrawn), so
//! extraction re-validates every entry against the caller's view of the
//! world and silently discards stale ones — lazy deletion. Stale entries
//! are expected, not an error.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use campusfund_types::RequestId;

/// A heap entry. `Ord` is max-first by urgency, then min-first by sequence.
#[derive(Debug, Clone, Copy)]
struct Entry {
    urgency: u8,
    seq: u64,
    id: RequestId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.urgency
            .cmp(&other.urgency)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of requests awaiting admin review.
#[derive(Debug, Default)]
pub struct ReviewQueue {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl ReviewQueue {
    /// Create a new empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a request at submission time.
    pub fn push(&mut self, id: RequestId, urgency: u8) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { urgency, seq, id });
    }

    /// Pop the highest-urgency, earliest-pushed request that is still
    /// pending according to `still_pending`.
    ///
    /// Stale entries (requests whose status changed since push) are
    /// discarded and extraction repeats until a pending request is found
    /// or the heap is empty.
    pub fn pop_highest<F>(&mut self, mut still_pending: F) -> Option<RequestId>
    where
        F: FnMut(RequestId) -> bool,
    {
        while let Some(entry) = self.heap.pop() {
            if still_pending(entry.id) {
                return Some(entry.id);
            }
            tracing::debug!(request = %entry.id, "skipping stale review queue entry");
        }
        None
    }

    /// Number of entries currently in the heap.
    ///
    /// Counts stale entries too — lazy deletion only discards them at pop
    /// time.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the heap holds no entries (stale or otherwise).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
