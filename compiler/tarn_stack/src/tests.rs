use super::*;

/// Mimics a chain of nested blocks, each level adding one frame.
fn nested_blocks(depth: u32) -> u32 {
    ensure_sufficient_stack(|| {
        if depth == 0 {
            0
        } else {
            nested_blocks(depth - 1) + 1
        }
    })
}

#[test]
fn shallow_nesting_passes_through() {
    assert_eq!(nested_blocks(16), 16);
}

#[test]
fn deep_nesting_does_not_overflow() {
    assert_eq!(nested_blocks(200_000), 200_000);
}

#[test]
fn propagates_errors_from_closure() {
    let outcome: Result<(), String> = ensure_sufficient_stack(|| Err("halt".to_string()));
    assert_eq!(outcome, Err("halt".to_string()));
}

#[test]
fn red_zone_is_smaller_than_segment() {
    assert!(RED_ZONE < SEGMENT_SIZE);
}

#[test]
fn remaining_stack_is_reported_on_native() {
    if cfg!(not(target_arch = "wasm32")) {
        assert!(remaining_stack().is_some_and(|n| n > 0));
    }
}
