use agolabel::clock::{Clock, FixedClock, SystemClock};
use agolabel::timestamp::{SECONDS_CUTOFF, normalize_to_millis};

#[test]
fn test_seconds_are_scaled() {
    assert_eq!(normalize_to_millis(1_709_640_000), 1_709_640_000_000);
    assert_eq!(normalize_to_millis(1), 1000);
}

#[test]
fn test_millis_pass_through() {
    assert_eq!(normalize_to_millis(1_709_640_000_000), 1_709_640_000_000);
    assert_eq!(normalize_to_millis(SECONDS_CUTOFF), SECONDS_CUTOFF);
}

#[test]
fn test_non_positive_pass_through() {
    assert_eq!(normalize_to_millis(0), 0);
    assert_eq!(normalize_to_millis(-5), -5);
}

#[test]
fn test_just_below_cutoff_is_scaled() {
    assert_eq!(
        normalize_to_millis(SECONDS_CUTOFF - 1),
        (SECONDS_CUTOFF - 1) * 1000
    );
}

#[test]
fn test_fixed_clock() {
    assert_eq!(FixedClock(123).now_millis(), 123);
}

#[test]
fn test_system_clock_is_after_cutoff() {
    assert!(SystemClock.now_millis() > SECONDS_CUTOFF);
}
