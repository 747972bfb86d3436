//! # campusfund-store
//!
//! **Durable persistence for CampusFund state.**
//!
//! The whole state — users and requests — is serialized to a single JSON
//! file after every mutation and reloaded at startup. This keeps the
//! project free of a database while preserving state across restarts.
//!
//! Whole-file overwrite is safe only under the workflow's single-writer
//! assumption: one process, one user action at a time, last successful
//! save wins. There is no transaction log and no partial-failure recovery.
//!
//! - [`Snapshot`]: the serialized form of the state (ordered maps)
//! - [`JsonStore`]: `load()` / `save()` against a file path

pub mod json_store;
pub mod snapshot;

pub use json_store::JsonStore;
pub use snapshot::Snapshot;
