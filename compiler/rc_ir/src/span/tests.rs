use super::*;

#[test]
fn test_span_basic() {
    let span = Span::new(10, 20);
    assert_eq!(span.to_range(), 10..20);
    assert_eq!(span.last(), 19);
}

#[test]
fn test_span_inclusive() {
    let span = Span::inclusive(2, 9);
    assert_eq!(span, Span::new(2, 10));
    assert_eq!(span.last(), 9);
    assert_eq!(span.to_range().len(), 8);
}

#[test]
fn test_span_last_of_empty() {
    // An empty string body at offset 18 reports 17 as its last offset.
    assert_eq!(Span::point(18).last(), 17);
    assert_eq!(Span::point(0).last(), 0);
}

#[test]
fn test_span_merge_disjoint() {
    let a = Span::new(0, 10);
    let b = Span::new(20, 30);
    assert_eq!(a.merge(b), Span::new(0, 30));
    assert_eq!(b.merge(a), Span::new(0, 30));
}

#[test]
fn test_span_debug_display() {
    let span = Span::new(100, 200);
    assert_eq!(format!("{span:?}"), "100..200");
    assert_eq!(format!("{span}"), "100..200");
    assert_eq!(span.to_range(), 100..200);
}
