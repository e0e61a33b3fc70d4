use super::*;
use pretty_assertions::assert_eq;

// === Lists ===

#[test]
fn new_list_is_empty_and_unfrozen() {
    let list = List::new(false);
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert_eq!(list.freeze_count(), 0);
    assert!(!list.object_mode);
}

#[test]
fn push_preserves_order() {
    let mut list = List::new(false);
    list.push(Value::token("a"));
    list.push(Value::number(1.0));
    list.push(Value::string("b"));
    assert_eq!(list.len(), 3);
    assert_eq!(list.get(0), Some(&Value::token("a")));
    assert_eq!(list.get(1), Some(&Value::number(1.0)));
    assert_eq!(list.get(2), Some(&Value::string("b")));
    assert_eq!(list.get(3), None);
}

#[test]
fn mark_implicitly_frozen_sets_counter() {
    let mut list = List::new(true);
    list.mark_implicitly_frozen();
    assert_eq!(list.freeze_count(), -1);
}

#[test]
fn with_items_matches_pushes() {
    let mut pushed = List::new(true);
    pushed.push(Value::token("x"));
    pushed.push(Value::token("y"));
    let built = List::with_items(true, vec![Value::token("x"), Value::token("y")]);
    assert_eq!(pushed, built);
}

// === Values ===

#[test]
fn frozen_wraps_inner_value() {
    let frozen = Value::frozen(Value::token("a"));
    assert_eq!(frozen, Value::Frozen(Box::new(Value::Token("a".into()))));
}

#[test]
fn as_token_only_matches_tokens() {
    assert_eq!(Value::token("get").as_token(), Some("get"));
    assert_eq!(Value::string("get").as_token(), None);
    assert_eq!(Value::frozen(Value::token("get")).as_token(), None);
}

#[test]
fn as_list_only_matches_lists() {
    let value = Value::List(List::new(false));
    assert!(value.as_list().is_some());
    assert!(Value::token("a").as_list().is_none());
}

// === Object literals ===

#[test]
fn object_literal_keeps_insertion_order() {
    let mut literal = ObjectLiteral::new(None);
    literal.insert("b".into(), Value::number(1.0));
    literal.insert("a".into(), Value::number(2.0));
    literal.insert("c".into(), Value::number(3.0));
    let keys: Vec<&str> = literal.entries().map(|(k, _)| k).collect();
    assert_eq!(keys, ["b", "a", "c"]);
}

#[test]
fn duplicate_key_overwrites_in_place() {
    let mut literal = ObjectLiteral::new(Some("Object".into()));
    literal.insert("a".into(), Value::number(1.0));
    literal.insert("b".into(), Value::number(2.0));
    literal.insert("a".into(), Value::number(9.0));
    assert_eq!(literal.len(), 2);
    let entries: Vec<(&str, &Value)> = literal.entries().collect();
    assert_eq!(entries[0], ("a", &Value::number(9.0)));
    assert_eq!(entries[1], ("b", &Value::number(2.0)));
}

#[test]
fn parent_reports_name() {
    assert_eq!(ObjectLiteral::new(None).parent(), None);
    let named = ObjectLiteral::new(Some("Point".into()));
    assert_eq!(named.parent(), Some("Point"));
}
