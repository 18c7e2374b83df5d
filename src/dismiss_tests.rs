//! Tests for the outside-interaction registry

use super::*;

const FIELD: Rect = Rect {
    x: 10,
    y: 5,
    width: 20,
    height: 2,
};

const PANEL: Rect = Rect {
    x: 10,
    y: 7,
    width: 24,
    height: 8,
};

#[test]
fn test_listen_registers_and_drop_releases() {
    let registry = DismissRegistry::new();
    assert!(registry.is_empty());

    let guard = registry.listen(WidgetId(0));
    assert_eq!(registry.len(), 1);
    assert!(registry.is_listening(WidgetId(0)));

    drop(guard);
    assert!(registry.is_empty());
    assert!(!registry.is_listening(WidgetId(0)));
}

#[test]
fn test_guards_release_independently() {
    let registry = DismissRegistry::new();
    let first = registry.listen(WidgetId(0));
    let second = registry.listen(WidgetId(1));
    assert_eq!(registry.len(), 2);

    drop(first);
    assert_eq!(registry.len(), 1);
    assert!(registry.is_listening(WidgetId(1)));
    assert_eq!(second.owner(), WidgetId(1));
}

#[test]
fn test_dispatch_reports_press_outside_bounds() {
    let registry = DismissRegistry::new();
    let guard = registry.listen(WidgetId(2));
    guard.set_bounds(&[FIELD, PANEL]);

    assert_eq!(registry.dispatch(Position::new(0, 0)), vec![WidgetId(2)]);
}

#[test]
fn test_dispatch_ignores_press_inside_field_or_panel() {
    let registry = DismissRegistry::new();
    let guard = registry.listen(WidgetId(2));
    guard.set_bounds(&[FIELD, PANEL]);

    assert!(registry.dispatch(Position::new(12, 5)).is_empty());
    assert!(registry.dispatch(Position::new(30, 10)).is_empty());
}

#[test]
fn test_dispatch_without_bounds_treats_everything_as_outside() {
    let registry = DismissRegistry::new();
    let _guard = registry.listen(WidgetId(0));

    assert_eq!(registry.dispatch(Position::new(12, 5)), vec![WidgetId(0)]);
}

#[test]
fn test_set_bounds_replaces_previous_bounds() {
    let registry = DismissRegistry::new();
    let guard = registry.listen(WidgetId(0));
    guard.set_bounds(&[FIELD]);
    guard.set_bounds(&[PANEL]);

    assert_eq!(registry.dispatch(Position::new(12, 5)), vec![WidgetId(0)]);
    assert!(registry.dispatch(Position::new(12, 8)).is_empty());
}

#[test]
fn test_guard_outliving_registry_is_harmless() {
    let registry = DismissRegistry::new();
    let guard = registry.listen(WidgetId(0));
    drop(registry);

    guard.set_bounds(&[FIELD]);
    drop(guard);
}

#[test]
fn test_clones_share_listeners() {
    let registry = DismissRegistry::new();
    let handle = registry.clone();
    let _guard = handle.listen(WidgetId(3));

    assert!(registry.is_listening(WidgetId(3)));
}
