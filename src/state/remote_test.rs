use super::*;

fn loaded<T: Default>(value: T) -> Remote<T> {
    let mut remote = Remote::default();
    remote.settle(Ok(value)).unwrap();
    remote
}

#[test]
fn starts_idle_and_empty() {
    let remote: Remote<Vec<u32>> = Remote::default();
    assert!(!remote.is_loading());
    assert!(remote.value().is_empty());
}

#[test]
fn success_replaces_value() {
    let mut remote = loaded(vec![1]);
    remote.begin();
    assert!(remote.is_loading());
    assert_eq!(remote.settle(Ok(vec![2, 3])), Ok(()));
    assert_eq!(remote.value(), &vec![2, 3]);
    assert!(!remote.is_loading());
}

#[test]
fn failure_keeps_previous_value_and_returns_error() {
    let mut remote = loaded(vec![4]);
    remote.begin();
    let err = ServiceError::Unavailable("offline".to_owned());
    assert_eq!(remote.settle(Err(err.clone())), Err(err));
    assert_eq!(remote.value(), &vec![4]);
    assert!(!remote.is_loading());
}

#[test]
fn update_edits_in_place() {
    let mut remote = loaded(vec!["a", "b"]);
    remote.update(|items| items.retain(|item| *item != "a"));
    assert_eq!(remote.value(), &vec!["b"]);
}
