use serde::Deserialize;

/// Options for a [`DragController`](super::DragController).
///
/// Class names are matched exactly. Nothing is validated: an empty class
/// simply matches no element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Gates all interaction. A disabled controller ignores presses.
    pub enabled: bool,

    /// Class carried by draggable items.
    pub item_class: String,

    /// Class marking an item as part of the multi-selection.
    pub multiple_class: String,

    /// Class added to items while they are being dragged.
    pub dragging_class: String,

    /// Class carried by the spacer that marks the drop slot.
    pub placeholder_class: String,

    /// Z-order pinned on dragged items so they draw above their siblings.
    pub z_index: i16,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            item_class: "drag-drop-item".into(),
            multiple_class: "drag-drop-multiple".into(),
            dragging_class: "drag-drop-dragging".into(),
            placeholder_class: "drag-drop-placeholder".into(),
            z_index: 1000,
        }
    }
}

impl DragConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn item_class(mut self, class: impl Into<String>) -> Self {
        self.item_class = class.into();
        self
    }

    pub fn multiple_class(mut self, class: impl Into<String>) -> Self {
        self.multiple_class = class.into();
        self
    }

    pub fn dragging_class(mut self, class: impl Into<String>) -> Self {
        self.dragging_class = class.into();
        self
    }

    pub fn placeholder_class(mut self, class: impl Into<String>) -> Self {
        self.placeholder_class = class.into();
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }
}
