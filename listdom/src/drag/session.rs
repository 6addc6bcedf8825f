use crate::element::Element;
use crate::surface::ListenerGuard;
use crate::types::{Position, Size};

/// Box properties the controller overrides while an item floats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Overrides {
    position: Position,
    z_index: i16,
    top: Option<i16>,
    width: Size,
}

impl Overrides {
    pub(crate) fn capture(element: &Element) -> Self {
        Self {
            position: element.position,
            z_index: element.z_index,
            top: element.top,
            width: element.width,
        }
    }

    pub(crate) fn restore(&self, element: &mut Element) {
        element.position = self.position;
        element.z_index = self.z_index;
        element.top = self.top;
        element.width = self.width;
    }
}

/// State of one drag, from press to release.
///
/// Holds the move/release registration on the document's pointer surface;
/// dropping the session releases it.
#[derive(Debug)]
pub struct DragSession {
    pub(crate) primary: String,
    pub(crate) dragged: Vec<String>,
    pub(crate) placeholder: String,
    pub(crate) last_y: u16,
    pub(crate) start_index: usize,
    pub(crate) saved: Vec<Overrides>,
    pub(crate) listeners: ListenerGuard,
}

impl DragSession {
    /// The item that was under the pointer at press time.
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// Items moving together, primary included.
    pub fn dragged(&self) -> &[String] {
        &self.dragged
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn last_y(&self) -> u16 {
        self.last_y
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub(crate) fn is_dragged(&self, id: &str) -> bool {
        self.dragged.iter().any(|d| d == id)
    }
}
