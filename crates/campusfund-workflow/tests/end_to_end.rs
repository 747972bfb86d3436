//! End-to-end tests across the whole workflow.
//!
//! These exercise the full request lifecycle — register, submit, review,
//! approve/reject, donate — through the `FundingDesk` with a real JSON
//! store on disk, including restarts that rebuild the in-memory structures
//! from the persisted state.

use campusfund_store::JsonStore;
use campusfund_types::{FundError, RequestId, RequestStatus, Role, UserId};
use campusfund_workflow::FundingDesk;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Helper: a desk plus the directory its state file lives in, so tests
/// can reopen the same store to simulate a restart.
struct Campus {
    dir: TempDir,
    desk: FundingDesk,
}

impl Campus {
    fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let desk = FundingDesk::open(Self::store_in(&dir)).expect("open should succeed");
        Self { dir, desk }
    }

    fn store_in(dir: &TempDir) -> JsonStore {
        JsonStore::new(dir.path().join("data.json"))
    }

    /// Drop the current desk and reopen from disk.
    fn restart(self) -> Self {
        let desk = FundingDesk::open(Self::store_in(&self.dir)).expect("reopen should succeed");
        Self {
            dir: self.dir,
            desk,
        }
    }
}

fn dec(n: i64) -> Decimal {
    Decimal::from(n)
}

#[test]
fn full_lifecycle_scenario() {
    let mut campus = Campus::new();
    let desk = &mut campus.desk;

    // Register a student and submit two requests of differing urgency.
    desk.register_user(UserId(1), "Ada", Role::Student).unwrap();
    let low = desk.submit_request(UserId(1), dec(500), 3).unwrap();
    let high = desk.submit_request(UserId(1), dec(200), 7).unwrap();

    // The admin sees the higher-urgency request first.
    let next = desk.review_next().unwrap();
    assert_eq!(next.id, high.id);
    desk.approve(high.id).unwrap();

    // Partial donation: still approved, 50 outstanding.
    let after_first = desk.donate(high.id, dec(150)).unwrap();
    assert_eq!(after_first.amount, dec(50));
    assert_eq!(after_first.status, RequestStatus::Approved);
    assert!(desk.list_pipeline().iter().any(|r| r.id == high.id));

    // Final donation: funded, gone from pipeline and index.
    let funded = desk.donate(high.id, dec(50)).unwrap();
    assert_eq!(funded.amount, Decimal::ZERO);
    assert_eq!(funded.status, RequestStatus::Funded);
    assert!(desk.list_pipeline().is_empty());
    assert!(desk.list_by_amount().iter().all(|r| r.id != high.id));

    // The low-urgency request is still pending and indexed.
    assert_eq!(desk.review_next().unwrap().id, low.id);
    assert_eq!(desk.list_by_amount().len(), 1);
}

#[test]
fn restart_rebuilds_all_structures() {
    let mut campus = Campus::new();
    {
        let desk = &mut campus.desk;
        desk.register_user(UserId(1), "Ada", Role::Student).unwrap();
        desk.register_user(UserId(2), "Grace", Role::Donor).unwrap();

        let approved = desk.submit_request(UserId(1), dec(300), 5).unwrap();
        let rejected = desk.submit_request(UserId(1), dec(100), 2).unwrap();
        desk.submit_request(UserId(1), dec(700), 9).unwrap(); // stays pending
        desk.approve(approved.id).unwrap();
        desk.reject(rejected.id).unwrap();
    }

    let mut campus = campus.restart();
    let desk = &mut campus.desk;

    // Users survive.
    assert_eq!(desk.list_users().len(), 2);
    assert_eq!(desk.get_user(UserId(2)).unwrap().role, Role::Donor);

    // Index holds only active requests, sorted by amount.
    let amounts: Vec<Decimal> = desk.list_by_amount().iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![dec(300), dec(700)]);

    // Pipeline holds the approved request.
    let pipeline: Vec<RequestId> = desk.list_pipeline().iter().map(|r| r.id).collect();
    assert_eq!(pipeline.len(), 1);

    // Review queue holds only the pending request.
    let pending = desk.review_next().unwrap();
    assert_eq!(pending.amount, dec(700));
    assert!(matches!(desk.review_next(), Err(FundError::EmptyQueue)));

    // The donation path still works against rebuilt state.
    desk.donate(pipeline[0], dec(300)).unwrap();
    assert!(desk.list_pipeline().is_empty());
}

#[test]
fn request_id_counter_survives_restart() {
    let mut campus = Campus::new();
    campus
        .desk
        .register_user(UserId(1), "Ada", Role::Student)
        .unwrap();
    let first = campus.desk.submit_request(UserId(1), dec(100), 1).unwrap();
    let second = campus.desk.submit_request(UserId(1), dec(200), 1).unwrap();

    let mut campus = campus.restart();
    let third = campus.desk.submit_request(UserId(1), dec(300), 1).unwrap();

    assert_eq!(first.id, RequestId(1));
    assert_eq!(second.id, RequestId(2));
    assert_eq!(third.id, RequestId(3));
}

#[test]
fn equal_urgency_reviews_in_submission_order() {
    let mut campus = Campus::new();
    let desk = &mut campus.desk;
    desk.register_user(UserId(1), "Ada", Role::Student).unwrap();

    let a = desk.submit_request(UserId(1), dec(100), 5).unwrap();
    let b = desk.submit_request(UserId(1), dec(200), 5).unwrap();
    let c = desk.submit_request(UserId(1), dec(300), 5).unwrap();

    assert_eq!(desk.review_next().unwrap().id, a.id);
    assert_eq!(desk.review_next().unwrap().id, b.id);
    assert_eq!(desk.review_next().unwrap().id, c.id);
}

#[test]
fn persisted_file_round_trips_through_the_store() {
    let mut campus = Campus::new();
    campus
        .desk
        .register_user(UserId(1), "Ada", Role::Student)
        .unwrap();
    let request = campus.desk.submit_request(UserId(1), dec(500), 3).unwrap();

    // Read the store directly: an untouched save/load round trip.
    let store = Campus::store_in(&campus.dir);
    let snapshot = store.load().unwrap();
    assert_eq!(snapshot.users.len(), 1);
    assert_eq!(snapshot.requests.len(), 1);

    let stored = &snapshot.requests[&request.id];
    assert_eq!(stored.student_id, UserId(1));
    assert_eq!(stored.amount, dec(500));
    assert_eq!(stored.urgency, 3);
    assert_eq!(stored.status, RequestStatus::Pending);

    store.save(&snapshot).unwrap();
    assert_eq!(store.load().unwrap(), snapshot);
}

#[test]
fn submissions_by_unknown_or_non_student_users_are_rejected() {
    let mut campus = Campus::new();
    let desk = &mut campus.desk;
    desk.register_user(UserId(2), "Grace", Role::Donor).unwrap();

    assert!(matches!(
        desk.submit_request(UserId(9), dec(100), 1),
        Err(FundError::UserNotFound(UserId(9)))
    ));
    assert!(matches!(
        desk.submit_request(UserId(2), dec(100), 1),
        Err(FundError::NotAStudent(UserId(2)))
    ));
    assert!(desk.list_by_amount().is_empty());
}
