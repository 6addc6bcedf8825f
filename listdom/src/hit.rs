use std::cmp::Reverse;

use crate::element::{path_to, Element};
use crate::layout::LayoutResult;

/// Find the deepest element at the given coordinates.
///
/// Siblings are tried topmost first: higher `z_index` wins, and among equal
/// z-indices the later child is drawn on top. Children are hit-tested even
/// when they lie outside their parent's rect, since absolutely positioned
/// elements may be dragged past it.
pub fn hit_test_any(layout: &LayoutResult, root: &Element, x: u16, y: u16) -> Option<String> {
    let mut children: Vec<(usize, &Element)> = root.child_elements().iter().enumerate().collect();
    children.sort_by_key(|(index, child)| (Reverse(child.z_index), Reverse(*index)));

    for (_, child) in children {
        if let Some(id) = hit_test_any(layout, child, x, y) {
            return Some(id);
        }
    }

    let rect = layout.get(&root.id)?;
    rect.contains(x, y).then(|| root.id.clone())
}

/// The child of `container` that contains `target` (or is `target`), if it
/// carries `class`. Targets outside the container never match.
pub fn closest_with_class<'a>(
    container: &'a Element,
    target: &str,
    class: &str,
) -> Option<&'a Element> {
    let path = path_to(container, target)?;
    // path[0] is the container itself, path[1] its child on the way down.
    let child_id = path.get(1)?;
    container
        .get_child(child_id)
        .filter(|child| child.has_class(class))
}
