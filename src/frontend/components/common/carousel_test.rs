use super::*;

#[test]
fn next_wraps_to_first_slide() {
    assert_eq!(next_index(0, 3), 1);
    assert_eq!(next_index(2, 3), 0);
}

#[test]
fn prev_wraps_to_last_slide() {
    assert_eq!(prev_index(2, 3), 1);
    assert_eq!(prev_index(0, 3), 2);
}

#[test]
fn out_of_range_index_recovers() {
    assert_eq!(prev_index(7, 3), 2);
    assert_eq!(next_index(7, 3), 2);
}

#[test]
fn empty_carousel_stays_at_zero() {
    assert_eq!(next_index(0, 0), 0);
    assert_eq!(prev_index(0, 0), 0);
}

#[test]
fn single_slide_stays_put() {
    assert_eq!(next_index(0, 1), 0);
    assert_eq!(prev_index(0, 1), 0);
}
