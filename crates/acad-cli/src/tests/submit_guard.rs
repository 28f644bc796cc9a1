use crate::ClientError;
use crate::submit_guard::{STALE_LOCK_AGE, SubmitGuard, SubmitGuards};

#[test]
fn given_submission_in_flight_when_acquiring_again_then_rejected() {
    // Given
    let guard = SubmitGuard::new("payment");
    let _permit = guard.try_acquire().unwrap();

    // When
    let second = guard.try_acquire();

    // Then
    assert!(matches!(
        second,
        Err(ClientError::DuplicateSubmission {
            action: "payment",
            ..
        })
    ));
}

#[test]
fn given_permit_dropped_when_acquiring_then_allowed() {
    // Given
    let guard = SubmitGuard::new("bulk assign");
    let permit = guard.try_acquire().unwrap();
    assert!(guard.is_in_flight());

    // When
    drop(permit);

    // Then
    assert!(!guard.is_in_flight());
    assert!(guard.try_acquire().is_ok());
}

#[test]
fn test_cloned_guard_shares_state() {
    let guard = SubmitGuard::new("task assignment");
    let clone = guard.clone();

    let _permit = guard.try_acquire().unwrap();

    assert!(clone.try_acquire().is_err());
}

#[test]
fn test_guards_are_independent_per_action() {
    let guards = SubmitGuards::default();

    let _payment = guards.payment.try_acquire().unwrap();

    assert!(guards.bulk_assign.try_acquire().is_ok());
    assert!(guards.task_assign.try_acquire().is_ok());
}

#[test]
fn given_lock_held_by_other_guard_when_acquiring_then_rejected() {
    // Given
    let dir = tempfile::TempDir::new().unwrap();
    let first = SubmitGuard::with_lock_dir("bulk assign", dir.path());
    let second = SubmitGuard::with_lock_dir("bulk assign", dir.path());
    let permit = first.try_acquire().unwrap();
    assert!(dir.path().join("bulk-assign.lock").exists());

    // When
    let rejected = second.try_acquire();

    // Then
    assert!(matches!(
        rejected,
        Err(ClientError::DuplicateSubmission {
            action: "bulk assign",
            ..
        })
    ));
    assert!(!second.is_in_flight());

    drop(permit);
    assert!(!dir.path().join("bulk-assign.lock").exists());
    assert!(second.try_acquire().is_ok());
}

#[test]
fn given_stale_lock_file_when_acquiring_then_reclaimed() {
    // Given
    let dir = tempfile::TempDir::new().unwrap();
    let guard = SubmitGuard::with_lock_dir("payment", dir.path());
    let lock = dir.path().join("payment.lock");
    let file = std::fs::File::create(&lock).unwrap();
    let old = std::time::SystemTime::now() - STALE_LOCK_AGE - std::time::Duration::from_secs(60);
    file.set_modified(old).unwrap();
    drop(file);

    // When
    let permit = guard.try_acquire();

    // Then
    assert!(permit.is_ok());
    assert!(lock.exists());
}
