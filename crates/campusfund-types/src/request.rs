//! Funding request model.
//!
//! A request lives in up to three structures at once — the amount-ordered
//! index, the urgency review queue, and the funding pipeline — keyed by its
//! [`RequestId`]. The registry map holds the single authoritative copy.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{RequestId, UserId};

/// Lifecycle status of a funding request.
///
/// ```text
/// PENDING -[approve]-> APPROVED -[donations reach amount]-> FUNDED
/// PENDING -[reject]--> REJECTED
/// ```
///
/// `APPROVED`, `FUNDED`, and `REJECTED` are terminal for admin review;
/// only `APPROVED` requests accept donations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
    Funded,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Approved => write!(f, "APPROVED"),
            Self::Rejected => write!(f, "REJECTED"),
            Self::Funded => write!(f, "FUNDED"),
        }
    }
}

/// A funding request submitted by a student.
///
/// `amount` is the *remaining outstanding* amount — it decreases as
/// donations arrive and the request becomes `Funded` when it reaches zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingRequest {
    pub id: RequestId,
    pub student_id: UserId,
    pub amount: Decimal,
    pub urgency: u8,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FundingRequest {
    #[must_use]
    pub fn new(id: RequestId, student_id: UserId, amount: Decimal, urgency: u8) -> Self {
        let now = Utc::now();
        Self {
            id,
            student_id,
            amount,
            urgency,
            status: RequestStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Active requests (pending or approved) appear in the amount index.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            RequestStatus::Pending | RequestStatus::Approved
        )
    }

    #[must_use]
    pub fn is_funded(&self) -> bool {
        self.status == RequestStatus::Funded
    }

    /// Whether this request is waiting in the funding pipeline.
    #[must_use]
    pub fn awaits_donations(&self) -> bool {
        self.status == RequestStatus::Approved && self.amount > Decimal::ZERO
    }
}
