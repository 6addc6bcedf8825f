use crate::element::{find_element, find_element_mut, Element};
use crate::event::PointerEvent;
use crate::hit::hit_test_any;
use crate::layout::{layout, LayoutResult, Rect};
use crate::surface::PointerSurface;

/// An element tree together with its last layout and its pointer surface.
///
/// Layout is cached. Anything that mutates the tree through [`root_mut`] or
/// [`find_mut`] must call [`relayout`] before geometry is read again.
///
/// [`root_mut`]: Document::root_mut
/// [`find_mut`]: Document::find_mut
/// [`relayout`]: Document::relayout
#[derive(Debug)]
pub struct Document {
    root: Element,
    viewport: Rect,
    layout: LayoutResult,
    surface: PointerSurface,
}

impl Document {
    pub fn new(root: Element, viewport: Rect) -> Self {
        let layout = layout(&root, viewport);
        Self {
            root,
            viewport,
            layout,
            surface: PointerSurface::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
        self.relayout();
    }

    pub fn relayout(&mut self) {
        self.layout = layout(&self.root, self.viewport);
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    pub fn rect(&self, id: &str) -> Option<Rect> {
        self.layout.get(id).copied()
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    pub fn surface(&self) -> &PointerSurface {
        &self.surface
    }

    /// Fill in `event.target` from the current layout if the host left it
    /// empty.
    pub fn target(&self, event: &mut PointerEvent) {
        if event.target.is_none() {
            event.target = hit_test_any(&self.layout, &self.root, event.x, event.y);
        }
    }
}
