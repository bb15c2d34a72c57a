use super::*;

#[test]
fn stagger_grows_with_card_index() {
    assert_eq!(stagger_delay(0, 120), 0);
    assert_eq!(stagger_delay(1, 120), 120);
    assert_eq!(stagger_delay(4, 120), 480);
}

#[test]
fn stagger_css_uses_milliseconds() {
    assert_eq!(stagger_delay_css(0, 120), "0ms");
    assert_eq!(stagger_delay_css(3, 120), "360ms");
}

#[test]
fn stagger_saturates_instead_of_overflowing() {
    assert_eq!(stagger_delay(usize::MAX, u32::MAX), u64::MAX);
}

#[test]
fn first_intersection_reveals() {
    let mut ledger = RevealLedger::new(3);
    assert!(!ledger.observe(1, false));
    assert!(!ledger.is_revealed(1));
    assert!(ledger.observe(1, true));
    assert!(ledger.is_revealed(1));
}

#[test]
fn reveal_reported_once() {
    let mut ledger = RevealLedger::new(1);
    assert!(ledger.observe(0, true));
    assert!(!ledger.observe(0, true));
}

#[test]
fn leaving_viewport_never_hides() {
    let mut ledger = RevealLedger::new(2);
    ledger.observe(0, true);
    for intersecting in [false, true, false, false] {
        ledger.observe(0, intersecting);
        assert!(ledger.is_revealed(0));
    }
    assert_eq!(ledger.revealed_count(), 1);
}

#[test]
fn unknown_index_is_ignored() {
    let mut ledger = RevealLedger::new(1);
    assert!(!ledger.observe(5, true));
    assert!(!ledger.is_revealed(5));
    assert_eq!(ledger.revealed_count(), 0);
}
