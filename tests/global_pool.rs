//! The process-wide pool lives in a static, so it gets its own test binary.
//! Everything here shares one instance; tests only return what they take.

use std::thread;
use waypoint::pool::global::{self, install};
use waypoint::pool::{PoolConfig, PoolError};

fn config() -> PoolConfig {
    PoolConfig::new("shared-printers", 3)
}

#[test]
fn install_is_idempotent_for_equal_config() {
    let first = install(config()).unwrap();
    let second = install(config()).unwrap();

    assert!(std::ptr::eq(first, second));
    assert_eq!(first.id(), second.id());
    assert!(std::ptr::eq(global::global().unwrap(), first));
}

#[test]
fn install_rejects_conflicting_config() {
    install(config()).unwrap();

    let err = install(PoolConfig::new("other", 5)).unwrap_err();

    match err {
        PoolError::ConflictingInstall {
            installed,
            requested,
        } => {
            assert_eq!(installed, config());
            assert_eq!(requested.capacity, 5);
        }
        other => panic!("Expected conflicting install, got {other:?}"),
    }
}

#[test]
fn install_rejects_invalid_config() {
    let result = install(PoolConfig::new("broken", 0));
    assert!(matches!(
        result,
        Err(PoolError::InvalidCapacity { capacity: 0 })
    ));
}

#[test]
fn all_threads_observe_the_same_pool() {
    let pool = install(config()).unwrap();

    let ids: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let pool = install(config()).unwrap();
                pool.scoped_checkout(|_| Ok::<_, String>(pool.id())).unwrap()
            })
        })
        .map(|worker| worker.join().unwrap())
        .collect();

    assert!(ids.iter().all(|id| *id == pool.id()));
    assert_eq!(pool.checked_out_count(), 0);
}
