use super::*;

#[test]
fn membership() {
    let set = TypeSet::TERM_LIKE | TypeSet::BOOL;
    assert!(set.has(EvaluatedType::TermLike));
    assert!(set.has(EvaluatedType::Bool));
    assert!(!set.has(EvaluatedType::Int));
    assert!(!set.has(EvaluatedType::ItemEffect));
}

#[test]
fn types_in_declaration_order() {
    let set = TypeSet::ITEM_EFFECT | TypeSet::TERM_LIKE;
    assert_eq!(
        set.to_vec(),
        vec![EvaluatedType::TermLike, EvaluatedType::ItemEffect]
    );
    assert!(TypeSet::empty().to_vec().is_empty());
}

#[test]
fn collects_from_iterator() {
    let set: TypeSet = [EvaluatedType::Bool, EvaluatedType::Int, EvaluatedType::Bool]
        .into_iter()
        .collect();
    assert_eq!(set, TypeSet::BOOL | TypeSet::INT);
    assert_eq!(TypeSet::from(EvaluatedType::ItemEffect), TypeSet::ITEM_EFFECT);
}

#[test]
fn display() {
    assert_eq!(
        (TypeSet::TERM_LIKE | TypeSet::BOOL).to_string(),
        "{TermLike, Bool}"
    );
    assert_eq!(TypeSet::empty().to_string(), "{}");
}
