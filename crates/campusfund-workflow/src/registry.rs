//! Entity store: the authoritative user and request maps.
//!
//! Identifier uniqueness is enforced before insertion; a violation fails
//! the operation without mutating state (atomic check-then-insert).
//! Request ids come from a monotonically increasing counter, re-seeded
//! past the highest existing id when state is restored from disk.

use std::collections::HashMap;

use campusfund_types::{FundError, FundingRequest, RequestId, Result, User, UserId};
use rust_decimal::Decimal;

/// Mapping-based store of users and funding requests.
#[derive(Debug)]
pub struct Registry {
    users: HashMap<UserId, User>,
    requests: HashMap<RequestId, FundingRequest>,
    next_request_id: RequestId,
}

impl Registry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            users: HashMap::new(),
            requests: HashMap::new(),
            next_request_id: RequestId(1),
        }
    }

    // =================================================================
    // Users
    // =================================================================

    /// Insert a user, enforcing id uniqueness.
    ///
    /// # Errors
    /// Returns [`FundError::DuplicateUser`] without mutating state if the
    /// id is already registered.
    pub fn insert_user(&mut self, user: User) -> Result<()> {
        if self.users.contains_key(&user.id) {
            return Err(FundError::DuplicateUser(user.id));
        }
        self.users.insert(user.id, user);
        Ok(())
    }

    /// Look up a user by id.
    #[must_use]
    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    #[must_use]
    pub fn has_user(&self, id: UserId) -> bool {
        self.users.contains_key(&id)
    }

    /// Iterate over all registered users (arbitrary order).
    pub fn users(&self) -> impl Iterator<Item = &User> {
        self.users.values()
    }

    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // =================================================================
    // Requests
    // =================================================================

    /// Create a new pending request with the next sequential id.
    ///
    /// All checks run before any mutation:
    ///
    /// # Errors
    /// - [`FundError::UserNotFound`] if `student_id` is unknown
    /// - [`FundError::NotAStudent`] if the user is not a student
    /// - [`FundError::InvalidAmount`] if `amount` is not strictly positive
    pub fn create_request(
        &mut self,
        student_id: UserId,
        amount: Decimal,
        urgency: u8,
    ) -> Result<&FundingRequest> {
        let student = self
            .users
            .get(&student_id)
            .ok_or(FundError::UserNotFound(student_id))?;
        if !student.is_student() {
            return Err(FundError::NotAStudent(student_id));
        }
        if amount <= Decimal::ZERO {
            return Err(FundError::InvalidAmount(amount));
        }

        let id = self.next_request_id;
        self.next_request_id = id.next();

        let request = FundingRequest::new(id, student_id, amount, urgency);
        Ok(self.requests.entry(id).or_insert(request))
    }

    /// Re-insert a request loaded from a snapshot, advancing the id
    /// counter past it.
    pub fn restore_request(&mut self, request: FundingRequest) {
        if request.id >= self.next_request_id {
            self.next_request_id = request.id.next();
        }
        self.requests.insert(request.id, request);
    }

    /// Look up a request by id.
    #[must_use]
    pub fn request(&self, id: RequestId) -> Option<&FundingRequest> {
        self.requests.get(&id)
    }

    /// Mutable access to a request.
    pub fn request_mut(&mut self, id: RequestId) -> Option<&mut FundingRequest> {
        self.requests.get_mut(&id)
    }

    /// Iterate over all requests (arbitrary order).
    pub fn requests(&self) -> impl Iterator<Item = &FundingRequest> {
        self.requests.values()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.len()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use campusfund_types::{RequestStatus, Role};

    use super::*;

    fn registry_with_student() -> Registry {
        let mut registry = Registry::new();
        registry
            .insert_user(User::new(UserId(1), "Ada", Role::Student))
            .unwrap();
        registry
    }

    #[test]
    fn duplicate_user_rejected_without_mutation() {
        let mut registry = registry_with_student();
        let err = registry
            .insert_user(User::new(UserId(1), "Imposter", Role::Donor))
            .unwrap_err();
        assert!(matches!(err, FundError::DuplicateUser(UserId(1))));

        // Original registration is untouched.
        let user = registry.user(UserId(1)).unwrap();
        assert_eq!(user.name, "Ada");
        assert_eq!(user.role, Role::Student);
        assert_eq!(registry.user_count(), 1);
    }

    #[test]
    fn request_ids_are_sequential() {
        let mut registry = registry_with_student();
        let first = registry
            .create_request(UserId(1), Decimal::new(100, 0), 5)
            .unwrap()
            .id;
        let second = registry
            .create_request(UserId(1), Decimal::new(200, 0), 5)
            .unwrap()
            .id;
        assert_eq!(first, RequestId(1));
        assert_eq!(second, RequestId(2));
    }

    #[test]
    fn new_request_starts_pending() {
        let mut registry = registry_with_student();
        let request = registry
            .create_request(UserId(1), Decimal::new(100, 0), 5)
            .unwrap();
        assert_eq!(request.status, RequestStatus::Pending);
        assert_eq!(request.amount, Decimal::new(100, 0));
    }

    #[test]
    fn unknown_student_rejected() {
        let mut registry = Registry::new();
        let err = registry
            .create_request(UserId(9), Decimal::new(100, 0), 5)
            .unwrap_err();
        assert!(matches!(err, FundError::UserNotFound(UserId(9))));
        assert_eq!(registry.request_count(), 0);
    }

    #[test]
    fn non_student_cannot_submit() {
        let mut registry = Registry::new();
        registry
            .insert_user(User::new(UserId(2), "Grace", Role::Donor))
            .unwrap();
        let err = registry
            .create_request(UserId(2), Decimal::new(100, 0), 5)
            .unwrap_err();
        assert!(matches!(err, FundError::NotAStudent(UserId(2))));
    }

    #[test]
    fn non_positive_amount_rejected() {
        let mut registry = registry_with_student();
        for amount in [Decimal::ZERO, Decimal::new(-50, 0)] {
            let err = registry.create_request(UserId(1), amount, 5).unwrap_err();
            assert!(matches!(err, FundError::InvalidAmount(_)));
        }
        assert_eq!(registry.request_count(), 0);
    }

    #[test]
    fn restore_advances_id_counter() {
        let mut registry = registry_with_student();
        registry.restore_request(FundingRequest::new(
            RequestId(7),
            UserId(1),
            Decimal::new(100, 0),
            5,
        ));

        let next = registry
            .create_request(UserId(1), Decimal::new(50, 0), 1)
            .unwrap()
            .id;
        assert_eq!(next, RequestId(8));
    }
}
