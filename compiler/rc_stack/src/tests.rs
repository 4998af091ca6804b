use super::*;

#[test]
fn test_shallow_recursion() {
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
    }

    assert_eq!(depth(10), 10);
}

#[test]
fn test_deep_recursion() {
    // Boxed frames sized like a parser frame holding a partial tree.
    fn nest(n: u32) -> Option<Box<[u64; 16]>> {
        ensure_sufficient_stack(|| {
            if n == 0 {
                Some(Box::new([0; 16]))
            } else {
                let mut inner = nest(n - 1)?;
                inner[0] += 1;
                Some(inner)
            }
        })
    }

    assert_eq!(nest(100_000).map(|frame| frame[0]), Some(100_000));
}

#[test]
fn test_works_with_result_type() {
    let result: Result<i32, &str> = ensure_sufficient_stack(|| Ok(123));
    assert_eq!(result, Ok(123));
}
