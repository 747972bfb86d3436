//! The serialized form of the workflow state.

use std::collections::BTreeMap;

use campusfund_types::{FundingRequest, RequestId, User, UserId};
use serde::{Deserialize, Serialize};

/// Full workflow state as written to disk.
///
/// `BTreeMap`s keep the JSON output deterministic and give the load path
/// an ascending-id replay order, which makes the rebuilt review queue and
/// pipeline deterministic across restarts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub users: BTreeMap<UserId, User>,
    pub requests: BTreeMap<RequestId, FundingRequest>,
}

impl Snapshot {
    /// Collect a snapshot from iterators over the live state.
    pub fn collect<'a, U, R>(users: U, requests: R) -> Self
    where
        U: IntoIterator<Item = &'a User>,
        R: IntoIterator<Item = &'a FundingRequest>,
    {
        Self {
            users: users.into_iter().map(|u| (u.id, u.clone())).collect(),
            requests: requests.into_iter().map(|r| (r.id, r.clone())).collect(),
        }
    }

    /// Whether the snapshot holds no state at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.requests.is_empty()
    }
}
