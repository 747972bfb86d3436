//! # campusfund-structures
//!
//! **Pure in-memory data structures for CampusFund.**
//!
//! This is the compute plane of the workspace — no I/O, no persistence,
//! no entity storage. Each structure holds [`RequestId`]s (plus whatever
//! key it orders by) and leaves the authoritative request records to the
//! registry:
//!
//! - [`AmountIndex`]: unbalanced binary search tree keyed by outstanding
//!   amount, for sorted reporting
//! - [`ReviewQueue`]: binary heap keyed by urgency with FIFO tie-break and
//!   lazy deletion of stale entries
//! - [`FundingPipeline`]: FIFO queue of approved requests awaiting donations
//!
//! [`RequestId`]: campusfund_types::RequestId

pub mod amount_index;
pub mod pipeline;
pub mod review_queue;

pub use amount_index::AmountIndex;
pub use pipeline::FundingPipeline;
pub use review_queue::ReviewQueue;
