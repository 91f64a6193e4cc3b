//! Unit tests for the window registry

use super::*;
use crate::lifecycle::{WindowKind, WindowRequest};

fn window(id: u64, kind: WindowKind) -> Window {
    let request = WindowRequest {
        class: "terminal".into(),
        title: format!("win-{id}"),
        kind,
    };
    Window::open(request, WindowId(id), id)
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut registry = WindowRegistry::new();
    for id in [3, 1, 2] {
        registry.add(window(id, WindowKind::Regular)).unwrap();
    }

    let order: Vec<u64> = registry.windows().map(|w| w.id.0).collect();
    assert_eq!(order, vec![3, 1, 2]);
}

#[test]
fn test_duplicate_identity_is_rejected() {
    let mut registry = WindowRegistry::new();
    registry.add(window(1, WindowKind::Regular)).unwrap();

    let err = registry.add(window(1, WindowKind::Regular)).unwrap_err();
    assert_eq!(err, RegistryError::DuplicateIdentity(WindowId(1)));

    // The original entry must be untouched
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_remove_is_idempotent() {
    let mut registry = WindowRegistry::new();
    registry.add(window(1, WindowKind::Regular)).unwrap();

    assert!(registry.remove(WindowId(1)).is_some());
    assert!(registry.remove(WindowId(1)).is_none());
    assert!(registry.is_empty());
}

#[test]
fn test_open_regular_excludes_dialogs() {
    let mut registry = WindowRegistry::new();
    registry.add(window(1, WindowKind::Regular)).unwrap();
    registry.add(window(2, WindowKind::Dialog)).unwrap();
    registry.add(window(3, WindowKind::Regular)).unwrap();

    let regular: Vec<u64> = registry.open_regular().map(|w| w.id.0).collect();
    assert_eq!(regular, vec![1, 3]);
    assert_eq!(registry.len(), 3);
}
