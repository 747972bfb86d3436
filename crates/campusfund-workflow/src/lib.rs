//! # campusfund-workflow
//!
//! **Workflow orchestration for CampusFund.**
//!
//! ## Architecture
//!
//! The workflow plane coordinates the pure structures against the entity
//! registry and persists after every mutation:
//!
//! 1. **Registry**: authoritative `id -> User` / `id -> FundingRequest`
//!    maps with uniqueness enforcement and the request-id counter
//! 2. **FundingDesk**: the orchestrator — five user actions plus read-only
//!    queries, keeping the amount index, review queue, and funding pipeline
//!    consistent with the registry
//!
//! ## Request Flow
//!
//! ```text
//! submit_request -> Registry + AmountIndex + ReviewQueue
//! review_next    -> ReviewQueue.pop_highest (lazy deletion)
//! approve        -> FundingPipeline (request stays in the index)
//! reject         -> removed from the index
//! donate         -> amount clamps toward zero; FUNDED leaves pipeline + index
//! ```
//!
//! Every persisted-state mutation ends with a whole-state save. A save
//! failure is surfaced to the caller but the in-memory mutation stands —
//! best-effort durability under the single-writer model.

pub mod desk;
pub mod registry;

pub use desk::FundingDesk;
pub use registry::Registry;
