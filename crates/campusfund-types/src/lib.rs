//! # campusfund-types
//!
//! Shared types and errors for the **CampusFund** funding workflow.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`RequestId`]
//! - **User model**: [`User`], [`Role`]
//! - **Request model**: [`FundingRequest`], [`RequestStatus`]
//! - **Errors**: [`FundError`] with `CF_ERR_` prefix codes

pub mod error;
pub mod ids;
pub mod request;
pub mod user;

// Re-export all primary types at crate root for ergonomic imports:
//   use campusfund_types::{FundingRequest, RequestStatus, User, ...};

pub use error::*;
pub use ids::*;
pub use request::*;
pub use user::*;
