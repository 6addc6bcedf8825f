use serde::Serialize;

/// Notification produced once per completed drag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemMoved {
    /// Index of the primary item among the container's children at release,
    /// counting the placeholder. When the placeholder sits before the item
    /// this is one more than the item's position without it; see
    /// `start_index` for the pre-drag position.
    pub old_index: usize,
    /// Index of the placeholder among the container's children at release.
    pub new_index: usize,
    /// Index of the primary item before the drag started.
    pub start_index: usize,
    /// Text content of each dragged item, in drag-set order.
    pub items: Vec<String>,
    /// Element ids of the dragged items, in the same order as `items`.
    pub keys: Vec<String>,
}
