//! The funding desk: orchestrates the registry, index, queue, and pipeline.
//!
//! One explicit state object — constructed at process start from the
//! store's `load()`, persisted via `save()` after each mutation. No
//! ambient singletons. Execution is single-threaded and synchronous: one
//! user action runs start-to-finish before the next begins.
//!
//! Each operation either fully applies its effect across all four
//! structures or fails before mutating any of them. A failed save is
//! surfaced to the caller but does not roll back the in-memory mutation
//! (best-effort durability; last successful save wins).

use campusfund_store::{JsonStore, Snapshot};
use campusfund_structures::{AmountIndex, FundingPipeline, ReviewQueue};
use campusfund_types::{
    FundError, FundingRequest, RequestId, RequestStatus, Result, Role, User, UserId,
};
use chrono::Utc;
use rust_decimal::Decimal;

use crate::Registry;

/// Workflow orchestrator over the four core structures.
#[derive(Debug)]
pub struct FundingDesk {
    registry: Registry,
    index: AmountIndex,
    queue: ReviewQueue,
    pipeline: FundingPipeline,
    store: JsonStore,
}

impl FundingDesk {
    /// Open the desk, loading persisted state and rebuilding the in-memory
    /// structures from it.
    ///
    /// Requests are replayed in ascending id order, so the rebuilt review
    /// queue and pipeline are deterministic across restarts.
    ///
    /// # Errors
    /// - persistence errors from [`JsonStore::load`]
    /// - [`FundError::UserNotFound`] if a stored request references a user
    ///   missing from the store
    pub fn open(store: JsonStore) -> Result<Self> {
        let snapshot = store.load()?;
        let mut desk = Self {
            registry: Registry::new(),
            index: AmountIndex::new(),
            queue: ReviewQueue::new(),
            pipeline: FundingPipeline::new(),
            store,
        };

        for user in snapshot.users.into_values() {
            desk.registry.insert_user(user)?;
        }
        for request in snapshot.requests.into_values() {
            if !desk.registry.has_user(request.student_id) {
                return Err(FundError::UserNotFound(request.student_id));
            }
            if request.is_active() {
                desk.index.insert(request.amount, request.id);
            }
            match request.status {
                RequestStatus::Pending => desk.queue.push(request.id, request.urgency),
                RequestStatus::Approved if request.amount > Decimal::ZERO => {
                    desk.pipeline.enqueue(request.id);
                }
                _ => {}
            }
            desk.registry.restore_request(request);
        }

        Ok(desk)
    }

    // =================================================================
    // Mutations
    // =================================================================

    /// Register a user.
    ///
    /// # Errors
    /// [`FundError::DuplicateUser`] if the id is taken; no state changes.
    pub fn register_user(
        &mut self,
        id: UserId,
        name: impl Into<String>,
        role: Role,
    ) -> Result<User> {
        let user = User::new(id, name, role);
        self.registry.insert_user(user.clone())?;
        tracing::info!(user = %id, %role, "user registered");
        self.persist()?;
        Ok(user)
    }

    /// Submit a funding request on behalf of a student.
    ///
    /// The new request enters the registry, the amount index, and the
    /// review queue.
    pub fn submit_request(
        &mut self,
        student_id: UserId,
        amount: Decimal,
        urgency: u8,
    ) -> Result<FundingRequest> {
        let request = self
            .registry
            .create_request(student_id, amount, urgency)?
            .clone();
        self.index.insert(request.amount, request.id);
        self.queue.push(request.id, request.urgency);
        tracing::info!(
            request = %request.id,
            student = %student_id,
            %amount,
            urgency,
            "request submitted"
        );
        self.persist()?;
        Ok(request)
    }

    /// Pop the highest-urgency pending request for admin review.
    ///
    /// Stale queue entries (requests no longer pending) are skipped.
    /// Only the ephemeral queue changes here, so nothing is persisted;
    /// the decision (`approve`/`reject`) is what saves.
    ///
    /// # Errors
    /// [`FundError::EmptyQueue`] if no pending request remains.
    pub fn review_next(&mut self) -> Result<FundingRequest> {
        let registry = &self.registry;
        let id = self
            .queue
            .pop_highest(|id| {
                registry
                    .request(id)
                    .is_some_and(|r| r.status == RequestStatus::Pending)
            })
            .ok_or(FundError::EmptyQueue)?;
        self.registry
            .request(id)
            .cloned()
            .ok_or(FundError::RequestNotFound(id))
    }

    /// Approve a pending request: it enters the funding pipeline and stays
    /// in the amount index.
    ///
    /// # Errors
    /// [`FundError::NotReviewable`] unless the request is pending.
    pub fn approve(&mut self, id: RequestId) -> Result<FundingRequest> {
        let request = self
            .registry
            .request_mut(id)
            .ok_or(FundError::RequestNotFound(id))?;
        if request.status != RequestStatus::Pending {
            return Err(FundError::NotReviewable(id));
        }
        request.status = RequestStatus::Approved;
        request.updated_at = Utc::now();
        let approved = request.clone();

        self.pipeline.enqueue(id);
        tracing::info!(request = %id, "request approved");
        self.persist()?;
        Ok(approved)
    }

    /// Reject a pending request: terminal, removed from the amount index.
    ///
    /// # Errors
    /// [`FundError::NotReviewable`] unless the request is pending.
    pub fn reject(&mut self, id: RequestId) -> Result<FundingRequest> {
        let request = self
            .registry
            .request_mut(id)
            .ok_or(FundError::RequestNotFound(id))?;
        if request.status != RequestStatus::Pending {
            return Err(FundError::NotReviewable(id));
        }
        request.status = RequestStatus::Rejected;
        request.updated_at = Utc::now();
        let rejected = request.clone();

        self.index.remove(rejected.amount, id);
        tracing::info!(request = %id, "request rejected");
        self.persist()?;
        Ok(rejected)
    }

    /// Donate toward an approved request.
    ///
    /// The outstanding amount decreases, clamped at zero — an overshooting
    /// donation never drives it negative. Reaching zero funds the request
    /// and removes it from the pipeline and the index; a partial donation
    /// re-keys the index entry so reports stay ordered by what is still
    /// outstanding.
    ///
    /// # Errors
    /// - [`FundError::InvalidAmount`] if `amount` is not strictly positive
    /// - [`FundError::NotApproved`] unless the request is approved
    pub fn donate(&mut self, id: RequestId, amount: Decimal) -> Result<FundingRequest> {
        if amount <= Decimal::ZERO {
            return Err(FundError::InvalidAmount(amount));
        }
        let request = self
            .registry
            .request_mut(id)
            .ok_or(FundError::RequestNotFound(id))?;
        if request.status != RequestStatus::Approved {
            return Err(FundError::NotApproved(id));
        }

        let outstanding = request.amount;
        let applied = amount.min(outstanding);
        request.amount = outstanding - applied;
        request.updated_at = Utc::now();
        let funded = request.amount.is_zero();
        if funded {
            request.status = RequestStatus::Funded;
        }
        let updated = request.clone();

        self.index.remove(outstanding, id);
        if funded {
            self.pipeline.remove(id);
            tracing::info!(request = %id, donated = %applied, "request fully funded");
        } else {
            self.index.insert(updated.amount, id);
            tracing::info!(
                request = %id,
                donated = %applied,
                remaining = %updated.amount,
                "donation received"
            );
        }
        self.persist()?;
        Ok(updated)
    }

    // =================================================================
    // Queries
    // =================================================================

    /// All active requests in ascending order of outstanding amount.
    #[must_use]
    pub fn list_by_amount(&self) -> Vec<FundingRequest> {
        self.index
            .in_order()
            .filter_map(|(_, id)| self.registry.request(id).cloned())
            .collect()
    }

    /// Approved requests awaiting donations, in approval order.
    #[must_use]
    pub fn list_pipeline(&self) -> Vec<FundingRequest> {
        self.pipeline
            .iter()
            .filter_map(|id| self.registry.request(id).cloned())
            .collect()
    }

    /// All registered users, in ascending id order.
    #[must_use]
    pub fn list_users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.registry.users().cloned().collect();
        users.sort_by_key(|u| u.id);
        users
    }

    /// Look up a request by id.
    ///
    /// # Errors
    /// [`FundError::RequestNotFound`] if the id is unknown.
    pub fn get_request(&self, id: RequestId) -> Result<FundingRequest> {
        self.registry
            .request(id)
            .cloned()
            .ok_or(FundError::RequestNotFound(id))
    }

    /// Look up a user by id.
    ///
    /// # Errors
    /// [`FundError::UserNotFound`] if the id is unknown.
    pub fn get_user(&self, id: UserId) -> Result<User> {
        self.registry
            .user(id)
            .cloned()
            .ok_or(FundError::UserNotFound(id))
    }

    // =================================================================
    // Persistence
    // =================================================================

    fn persist(&self) -> Result<()> {
        let snapshot = Snapshot::collect(self.registry.users(), self.registry.requests());
        self.store.save(&snapshot)
    }
}
