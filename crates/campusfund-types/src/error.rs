//! Error types for the CampusFund workflow.
//!
//! All errors use the `CF_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: User / registration errors
//! - 2xx: Request / donation errors
//! - 3xx: Review queue errors
//! - 9xx: General / persistence errors

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{RequestId, UserId};

/// Central error enum for all CampusFund operations.
#[derive(Debug, Error)]
pub enum FundError {
    // =================================================================
    // User / Registration Errors (1xx)
    // =================================================================
    /// A user with this id is already registered.
    #[error("CF_ERR_100: User already registered: {0}")]
    DuplicateUser(UserId),

    /// The referenced user does not exist.
    #[error("CF_ERR_101: User not found: {0}")]
    UserNotFound(UserId),

    /// The referenced user exists but does not hold the student role.
    #[error("CF_ERR_102: User {0} is not a student")]
    NotAStudent(UserId),

    // =================================================================
    // Request / Donation Errors (2xx)
    // =================================================================
    /// The referenced funding request does not exist.
    #[error("CF_ERR_200: Request not found: {0}")]
    RequestNotFound(RequestId),

    /// A submission or donation amount must be strictly positive.
    #[error("CF_ERR_201: Invalid amount: {0}")]
    InvalidAmount(Decimal),

    /// Donations are only accepted for approved requests.
    #[error("CF_ERR_202: Request {0} is not approved for donations")]
    NotApproved(RequestId),

    /// The request is past review (already approved, rejected, or funded).
    #[error("CF_ERR_203: Request {0} is not pending review")]
    NotReviewable(RequestId),

    // =================================================================
    // Review Queue Errors (3xx)
    // =================================================================
    /// No pending requests remain to review.
    #[error("CF_ERR_300: No pending requests to review")]
    EmptyQueue,

    // =================================================================
    // General / Persistence (9xx)
    // =================================================================
    /// Serialization / deserialization error.
    #[error("CF_ERR_900: Serialization error: {0}")]
    Serialization(String),

    /// I/O error writing or reading the state file.
    #[error("CF_ERR_901: I/O error: {0}")]
    Io(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, FundError>;

// Conversion from std::io::Error
impl From<std::io::Error> for FundError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FundError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
