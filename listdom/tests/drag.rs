use listdom::{
    Document, DragConfig, DragController, Element, ItemMoved, Modifiers, PointerEvent,
    PointerKind, Position, Rect, Size,
};

const ITEM: &str = "drag-drop-item";
const MULTIPLE: &str = "drag-drop-multiple";
const DRAGGING: &str = "drag-drop-dragging";
const PLACEHOLDER: &str = "drag-drop-placeholder";

/// A list of two-row items stacked from row 0: item `n` covers rows 2n and 2n+1.
fn list(items: &[&str]) -> Document {
    let root = Element::col().id("list").children(items.iter().map(|name| {
        Element::text(*name)
            .id(*name)
            .class(ITEM)
            .height(Size::Fixed(2))
    }));
    Document::new(root, Rect::new(0, 0, 20, 20))
}

fn order(doc: &Document) -> Vec<String> {
    doc.root()
        .child_ids()
        .into_iter()
        .map(|id| {
            let child = doc.root().get_child(id).unwrap();
            if child.has_class(PLACEHOLDER) {
                "_".to_string()
            } else {
                id.to_string()
            }
        })
        .collect()
}

fn mark(doc: &mut Document, id: &str) {
    doc.find_mut(id).unwrap().add_class(MULTIPLE);
}

fn controller() -> DragController {
    DragController::new("list", DragConfig::default())
}

// ============================================================================
// Starting a Session
// ============================================================================

#[test]
fn test_press_outside_item_starts_nothing() {
    let mut doc = list(&["A", "B"]);
    let mut drag = controller();

    // Row 10 is below the list: nothing is hit.
    let mut event = PointerEvent::press(1, 10);
    assert!(!drag.begin(&mut doc, &mut event));

    assert!(!drag.is_dragging());
    assert!(!event.default_prevented());
    assert_eq!(doc.surface().listener_count(), 0);
    assert_eq!(order(&doc), ["A", "B"]);
}

#[test]
fn test_press_on_non_item_child_starts_nothing() {
    let root = Element::col()
        .id("list")
        .child(Element::text("Header").id("header"))
        .child(Element::text("A").id("A").class(ITEM));
    let mut doc = Document::new(root, Rect::new(0, 0, 20, 20));
    let mut drag = controller();

    let mut event = PointerEvent::press(1, 0);
    assert!(!drag.begin(&mut doc, &mut event));
    assert_eq!(event.target.as_deref(), Some("header"));
    assert_eq!(doc.surface().listener_count(), 0);
}

#[test]
fn test_disabled_never_starts() {
    let mut doc = list(&["A", "B"]);
    let mut drag = DragController::new("list", DragConfig::new().enabled(false));

    let mut event = PointerEvent::press(1, 0);
    assert!(!drag.begin(&mut doc, &mut event));
    assert!(!drag.is_dragging());
    assert_eq!(doc.surface().listener_count(), 0);

    drag.set_enabled(true);
    let mut event = PointerEvent::press(1, 0);
    assert!(drag.begin(&mut doc, &mut event));
}

#[test]
fn test_begin_prepares_floating_items() {
    let mut doc = list(&["A", "B", "C"]);
    let mut drag = controller();

    let mut event = PointerEvent::press(1, 2);
    assert!(drag.begin(&mut doc, &mut event));
    assert!(event.default_prevented());

    // Placeholder sits immediately before the pressed item.
    assert_eq!(order(&doc), ["A", "_", "B", "C"]);

    let session = drag.session().unwrap();
    assert_eq!(session.primary(), "B");
    assert_eq!(session.dragged(), ["B"]);
    assert_eq!(session.start_index(), 1);
    assert_eq!(session.last_y(), 2);

    let b = doc.find("B").unwrap();
    assert_eq!(b.position, Position::Absolute);
    assert_eq!(b.z_index, 1000);
    assert_eq!(b.top, Some(2));
    assert_eq!(b.width, Size::Fixed(20));
    assert!(b.has_class(DRAGGING));

    // The floating item stays where it was; the placeholder takes its slot.
    assert_eq!(doc.rect("B"), Some(Rect::new(0, 2, 20, 2)));
    let placeholder = session.placeholder().to_string();
    assert_eq!(doc.rect(&placeholder), Some(Rect::new(0, 2, 20, 2)));
    assert_eq!(doc.rect("C"), Some(Rect::new(0, 4, 20, 2)));

    // Move and release listeners on the surface.
    assert_eq!(doc.surface().listener_count(), 2);
}

#[test]
fn test_press_on_nested_element_drags_enclosing_item() {
    let root = Element::col().id("list").children(["A", "B"].map(|name| {
        Element::col()
            .id(name)
            .class(ITEM)
            .child(Element::text(format!("{name} label")).id(format!("{name}-label")))
    }));
    let mut doc = Document::new(root, Rect::new(0, 0, 20, 20));
    let mut drag = controller();

    let mut event = PointerEvent::press(1, 1).target("B-label");
    assert!(drag.begin(&mut doc, &mut event));
    assert_eq!(drag.session().unwrap().primary(), "B");

    let moved = drag.end(&mut doc, &PointerEvent::release(1, 1)).unwrap();
    assert_eq!(moved.items, ["B label"]);
}

#[test]
fn test_begin_while_dragging_is_ignored() {
    let mut doc = list(&["A", "B", "C"]);
    let mut drag = controller();

    assert!(drag.begin(&mut doc, &mut PointerEvent::press(1, 0)));
    assert!(!drag.begin(&mut doc, &mut PointerEvent::press(1, 4)));

    assert_eq!(drag.session().unwrap().primary(), "A");
    assert_eq!(doc.surface().listener_count(), 2);
}

// ============================================================================
// Moving
// ============================================================================

#[test]
fn test_move_without_session_is_noop() {
    let mut doc = list(&["A", "B"]);
    let mut drag = controller();

    assert!(!drag.drag(&mut doc, &PointerEvent::moved(1, 3)));
    assert_eq!(order(&doc), ["A", "B"]);
}

#[test]
fn test_move_offsets_are_cumulative() {
    let mut doc = list(&["A", "B", "C", "D"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    drag.drag(&mut doc, &PointerEvent::moved(1, 3));
    drag.drag(&mut doc, &PointerEvent::moved(1, 5));
    drag.drag(&mut doc, &PointerEvent::moved(1, 4));

    assert_eq!(doc.find("A").unwrap().top, Some(4));
    assert_eq!(doc.rect("A").map(|r| r.y), Some(4));
    assert_eq!(drag.session().unwrap().last_y(), 4);
}

#[test]
fn test_placeholder_follows_pointer() {
    let mut doc = list(&["A", "B", "C", "D"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    assert_eq!(order(&doc), ["_", "A", "B", "C", "D"]);

    // Row 5 is C's center: not above it, so the slot is after C.
    drag.drag(&mut doc, &PointerEvent::moved(1, 5));
    assert_eq!(order(&doc), ["A", "B", "C", "_", "D"]);

    // Row 0 is above B's center (flow is now B, C, placeholder, D).
    drag.drag(&mut doc, &PointerEvent::moved(1, 0));
    assert_eq!(order(&doc), ["A", "_", "B", "C", "D"]);
}

#[test]
fn test_repeated_move_is_idempotent() {
    let mut doc = list(&["A", "B", "C", "D"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    drag.drag(&mut doc, &PointerEvent::moved(1, 6));
    let settled = order(&doc);

    for _ in 0..3 {
        drag.drag(&mut doc, &PointerEvent::moved(1, 6));
        assert_eq!(order(&doc), settled);
    }
}

#[test]
fn test_no_eligible_sibling_keeps_placeholder() {
    let mut doc = list(&["A"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    drag.drag(&mut doc, &PointerEvent::moved(1, 9));
    assert_eq!(order(&doc), ["_", "A"]);

    let moved = drag.end(&mut doc, &PointerEvent::release(1, 9)).unwrap();
    // The placeholder still precedes the item at release.
    assert_eq!(moved.old_index, 1);
    assert_eq!(moved.new_index, 0);
    assert_eq!(moved.start_index, 0);
    assert_eq!(order(&doc), ["A"]);
}

// ============================================================================
// Releasing
// ============================================================================

#[test]
fn test_drag_first_item_before_last() {
    let mut doc = list(&["A", "B", "C", "D"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    drag.drag(&mut doc, &PointerEvent::moved(1, 5));
    drag.drag(&mut doc, &PointerEvent::moved(1, 6));
    assert_eq!(order(&doc), ["A", "B", "C", "_", "D"]);

    let moved = drag.end(&mut doc, &PointerEvent::release(1, 6));
    assert_eq!(
        moved,
        Some(ItemMoved {
            old_index: 0,
            new_index: 3,
            start_index: 0,
            items: vec!["A".into()],
            keys: vec!["A".into()],
        })
    );
    assert_eq!(order(&doc), ["B", "C", "A", "D"]);
}

#[test]
fn test_release_restores_items() {
    let mut doc = list(&["A", "B", "C"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 2));
    drag.drag(&mut doc, &PointerEvent::moved(1, 5));
    drag.end(&mut doc, &PointerEvent::release(1, 5));

    let b = doc.find("B").unwrap();
    assert_eq!(b.position, Position::Static);
    assert_eq!(b.z_index, 0);
    assert_eq!(b.top, None);
    assert_eq!(b.width, Size::Fill);
    assert!(!b.has_class(DRAGGING));
    assert!(!b.has_class(MULTIPLE));

    assert!(!drag.is_dragging());
    assert_eq!(doc.surface().listener_count(), 0);
    assert_eq!(doc.root().child_elements().len(), 3);
    assert_eq!(doc.rect("B"), Some(Rect::new(0, 4, 20, 2)));
}

#[test]
fn test_old_index_counts_placeholder() {
    let mut doc = list(&["A", "B", "C"]);
    let mut drag = controller();

    // No move: the placeholder stays just before C.
    drag.begin(&mut doc, &mut PointerEvent::press(1, 4));
    let moved = drag.end(&mut doc, &PointerEvent::release(1, 4)).unwrap();

    assert_eq!(moved.start_index, 2);
    assert_eq!(moved.old_index, 3);
    assert_eq!(moved.new_index, 2);
    assert_eq!(order(&doc), ["A", "B", "C"]);
}

#[test]
fn test_stray_release_emits_nothing() {
    let mut doc = list(&["A", "B"]);
    let mut drag = controller();

    assert_eq!(drag.end(&mut doc, &PointerEvent::release(1, 0)), None);

    let mut event = PointerEvent::release(1, 0);
    assert_eq!(drag.handle(&mut doc, &mut event), None);
    assert_eq!(order(&doc), ["A", "B"]);
}

#[test]
fn test_release_emits_once() {
    let mut doc = list(&["A", "B"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    assert!(drag.end(&mut doc, &PointerEvent::release(1, 0)).is_some());
    assert!(drag.end(&mut doc, &PointerEvent::release(1, 0)).is_none());
}

#[test]
fn test_item_removed_mid_drag_leaves_no_placeholder() {
    let mut doc = list(&["A", "B", "C"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    drag.drag(&mut doc, &PointerEvent::moved(1, 3));
    doc.root_mut().remove_child("A").unwrap();
    doc.relayout();

    assert_eq!(drag.end(&mut doc, &PointerEvent::release(1, 3)), None);
    assert_eq!(order(&doc), ["B", "C"]);
    assert!(!drag.is_dragging());
    assert_eq!(doc.surface().listener_count(), 0);
}

#[test]
fn test_partial_set_removed_mid_drag_restores_rest() {
    let mut doc = list(&["A", "B", "C"]);
    mark(&mut doc, "B");
    mark(&mut doc, "C");
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 2));
    doc.root_mut().remove_child("C").unwrap();
    doc.relayout();

    assert_eq!(drag.end(&mut doc, &PointerEvent::release(1, 2)), None);
    assert_eq!(order(&doc), ["A", "B"]);

    let b = doc.find("B").unwrap();
    assert_eq!(b.position, Position::Static);
    assert_eq!(b.top, None);
    assert!(!b.has_class(DRAGGING));
    assert!(!b.has_class(MULTIPLE));
    assert_eq!(doc.rect("B"), Some(Rect::new(0, 2, 20, 2)));
}

// ============================================================================
// Multi-select
// ============================================================================

#[test]
fn test_multi_drag_moves_set_together() {
    let mut doc = list(&["A", "B", "C"]);
    mark(&mut doc, "B");
    mark(&mut doc, "C");
    let mut drag = controller();

    assert!(drag.begin(&mut doc, &mut PointerEvent::press(1, 2)));
    assert_eq!(drag.session().unwrap().dragged(), ["B", "C"]);

    // Placeholder is as tall as both items.
    let placeholder = drag.session().unwrap().placeholder().to_string();
    assert_eq!(doc.rect(&placeholder).map(|r| r.height), Some(4));

    drag.drag(&mut doc, &PointerEvent::moved(1, 0));
    assert_eq!(order(&doc), ["_", "A", "B", "C"]);

    let moved = drag.end(&mut doc, &PointerEvent::release(1, 0)).unwrap();
    assert_eq!(moved.items, ["B", "C"]);
    assert_eq!(moved.keys, ["B", "C"]);
    assert_eq!(moved.old_index, 2);
    assert_eq!(moved.new_index, 0);
    assert_eq!(moved.start_index, 1);

    assert_eq!(order(&doc), ["B", "C", "A"]);
    assert!(!doc.find("B").unwrap().has_class(MULTIPLE));
    assert!(!doc.find("C").unwrap().has_class(MULTIPLE));
}

#[test]
fn test_press_outside_selection_drags_single_item() {
    let mut doc = list(&["A", "B", "C"]);
    mark(&mut doc, "A");
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 4));
    assert_eq!(drag.session().unwrap().dragged(), ["C"]);

    drag.end(&mut doc, &PointerEvent::release(1, 4));
    // A was not dragged and keeps its mark.
    assert!(doc.find("A").unwrap().has_class(MULTIPLE));
}

#[test]
fn test_modifier_press_adds_to_selection() {
    let mut doc = list(&["A", "B", "C"]);
    mark(&mut doc, "A");
    let mut drag = controller();

    let mut event = PointerEvent::press(1, 4).modifiers(Modifiers::ctrl());
    drag.begin(&mut doc, &mut event);
    assert!(doc.find("C").unwrap().has_class(MULTIPLE));
    assert_eq!(drag.session().unwrap().dragged(), ["A", "C"]);
}

#[test]
fn test_modifier_press_on_selected_item_deselects_it() {
    let mut doc = list(&["A", "B", "C"]);
    mark(&mut doc, "A");
    mark(&mut doc, "B");
    let mut drag = controller();

    let mut event = PointerEvent::press(1, 2).modifiers(Modifiers::meta());
    drag.begin(&mut doc, &mut event);
    assert!(!doc.find("B").unwrap().has_class(MULTIPLE));
    assert_eq!(drag.session().unwrap().dragged(), ["B"]);
}

#[test]
fn test_toggled_item_then_plain_press_elsewhere() {
    let mut doc = list(&["A", "B", "C"]);
    let mut drag = controller();

    let mut event = PointerEvent::press(1, 0).modifiers(Modifiers::ctrl());
    drag.begin(&mut doc, &mut event);
    assert_eq!(drag.session().unwrap().dragged(), ["A"]);
    drag.end(&mut doc, &PointerEvent::release(1, 0));

    drag.begin(&mut doc, &mut PointerEvent::press(1, 2));
    assert_eq!(drag.session().unwrap().dragged(), ["B"]);
}

// ============================================================================
// Host Dispatch and Listeners
// ============================================================================

#[test]
fn test_handle_routes_full_gesture() {
    let mut doc = list(&["A", "B", "C", "D"]);
    let mut drag = controller();

    let gesture = [
        PointerEvent::press(1, 0),
        PointerEvent::moved(1, 5),
        // Far outside the list: still delivered through the surface.
        PointerEvent::moved(30, 6),
        PointerEvent::release(30, 6),
    ];

    let mut emitted = Vec::new();
    for mut event in gesture {
        if let Some(moved) = drag.handle(&mut doc, &mut event) {
            emitted.push(moved);
        }
    }

    assert_eq!(emitted.len(), 1);
    assert_eq!(emitted[0].new_index, 3);
    assert_eq!(order(&doc), ["B", "C", "A", "D"]);
    assert_eq!(doc.surface().listener_count(), 0);
}

#[test]
fn test_handle_ignores_moves_after_release() {
    let mut doc = list(&["A", "B", "C"]);
    let mut drag = controller();

    drag.handle(&mut doc, &mut PointerEvent::press(1, 0));
    drag.handle(&mut doc, &mut PointerEvent::release(1, 0));
    let settled = order(&doc);

    drag.handle(&mut doc, &mut PointerEvent::moved(1, 5));
    assert_eq!(order(&doc), settled);
    assert!(!drag.is_dragging());
}

#[test]
fn test_listeners_registered_once_per_session() {
    let mut doc = list(&["A", "B"]);
    let mut drag = controller();

    for _ in 0..3 {
        drag.handle(&mut doc, &mut PointerEvent::press(1, 0));
        assert_eq!(doc.surface().listeners_for(PointerKind::Move).len(), 1);
        assert_eq!(doc.surface().listeners_for(PointerKind::Release).len(), 1);
        drag.handle(&mut doc, &mut PointerEvent::release(1, 0));
        assert_eq!(doc.surface().listener_count(), 0);
    }
}

#[test]
fn test_dropping_controller_releases_listeners() {
    let mut doc = list(&["A", "B"]);
    let mut drag = controller();

    drag.begin(&mut doc, &mut PointerEvent::press(1, 0));
    assert_eq!(doc.surface().listener_count(), 2);

    drop(drag);
    assert_eq!(doc.surface().listener_count(), 0);
}

#[test]
fn test_custom_classes() {
    let root = Element::col()
        .id("list")
        .child(Element::text("A").id("A").class("row"))
        .child(Element::text("B").id("B").class(ITEM));
    let mut doc = Document::new(root, Rect::new(0, 0, 20, 20));
    let config = DragConfig::new()
        .item_class("row")
        .dragging_class("lifted")
        .z_index(7);
    let mut drag = DragController::new("list", config);

    // Default item class no longer matches.
    assert!(!drag.begin(&mut doc, &mut PointerEvent::press(1, 1)));

    assert!(drag.begin(&mut doc, &mut PointerEvent::press(1, 0)));
    let a = doc.find("A").unwrap();
    assert!(a.has_class("lifted"));
    assert_eq!(a.z_index, 7);
}
