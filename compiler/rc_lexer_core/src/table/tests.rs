use super::*;

#[test]
fn reserved_is_union_of_operator_chars() {
    let table = OperatorTable::new(["++", "+=", "=>", ">>"]);
    for ch in ['+', '=', '>'] {
        assert!(table.is_reserved(ch), "{ch}");
    }
    assert!(!table.is_reserved('-'));
    assert!(!table.is_reserved('a'));
}

#[test]
fn trie_holds_every_operator() {
    let table = OperatorTable::new(vec!["=>".to_string(), ">>".to_string()]);
    let arrow = table.trie().advance('=').advance('>');
    assert_eq!(arrow.value(), Some("=>"));
    assert_eq!(table.trie().candidates().len(), 2);
    assert!(!table.trie().advance('+').has_candidates());
}

#[test]
fn empty_table_reserves_nothing() {
    let table = OperatorTable::default();
    assert!(!table.is_reserved('+'));
    assert!(!table.trie().has_candidates());
}

#[test]
fn table_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OperatorTable>();
}
