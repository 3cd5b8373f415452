use super::*;

#[test]
fn test_deep_recursion() {
    fn nest(depth: u64) -> u64 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    // Deeper than a default 8MB main-thread stack allows without growth.
    assert_eq!(nest(100_000), 100_000);
}

#[test]
fn test_passes_through_results() {
    let ok: Result<i64, String> = ensure_sufficient_stack(|| Ok(7));
    assert_eq!(ok, Ok(7));

    let err: Result<i64, String> = ensure_sufficient_stack(|| Err("boom".to_string()));
    assert_eq!(err, Err("boom".to_string()));
}
