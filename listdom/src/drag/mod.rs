//! Drag-to-reorder for a vertical list.
//!
//! A [`DragController`] is attached to one container element in a
//! [`Document`]. A press on one of the container's items starts a session:
//! the dragged items float above the list and follow the pointer while a
//! placeholder marks the slot they will land in. Release drops them there
//! and yields an [`ItemMoved`].
//!
//! ```text
//! idle --press on item--> dragging --move--> dragging --release--> idle
//! ```
//!
//! There is no cancel transition. Every failure (disabled controller, press
//! outside an item, stray move or release) is a silent no-op.

mod config;
mod moved;
mod resolve;
mod session;

pub use config::DragConfig;
pub use moved::ItemMoved;
pub use resolve::{closest_sibling, resolve_slot, Slot};
pub use session::DragSession;

use session::Overrides;

use crate::document::Document;
use crate::element::{generate_id, Element};
use crate::error::DomError;
use crate::event::{PointerEvent, PointerKind};
use crate::hit::closest_with_class;
use crate::layout::Rect;
use crate::types::{Position, Size};

#[derive(Debug)]
pub struct DragController {
    container: String,
    config: DragConfig,
    session: Option<DragSession>,
}

impl DragController {
    /// Attach to the container element with id `container`.
    pub fn new(container: impl Into<String>, config: DragConfig) -> Self {
        Self {
            container: container.into(),
            config,
            session: None,
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Route a pointer event the way a host would.
    ///
    /// Presses reach [`begin`](Self::begin) directly. Moves and releases
    /// only arrive while this controller's listeners are registered on the
    /// document surface, wherever the pointer is.
    pub fn handle(&mut self, doc: &mut Document, event: &mut PointerEvent) -> Option<ItemMoved> {
        match event.kind {
            PointerKind::Press => {
                self.begin(doc, event);
                None
            }
            PointerKind::Move => {
                if self.listening(doc, PointerKind::Move) {
                    self.drag(doc, event);
                }
                None
            }
            PointerKind::Release => {
                if self.listening(doc, PointerKind::Release) {
                    self.end(doc, event)
                } else {
                    None
                }
            }
        }
    }

    fn listening(&self, doc: &Document, kind: PointerKind) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| doc.surface().is_listening(s.listeners.id(), kind))
    }

    /// Start a session if `event` presses on an item of the container.
    /// Returns whether a session started.
    pub fn begin(&mut self, doc: &mut Document, event: &mut PointerEvent) -> bool {
        if !self.config.enabled {
            log::trace!("[drag] disabled, ignoring press at {},{}", event.x, event.y);
            return false;
        }
        if self.session.is_some() {
            log::debug!("[drag] press while dragging, ignored");
            return false;
        }

        doc.target(event);
        let Some(target) = event.target.as_deref() else {
            return false;
        };
        let Some(container) = doc.find(&self.container) else {
            log::warn!("[drag] container '{}' not in document", self.container);
            return false;
        };
        let Some(item) = closest_with_class(container, target, &self.config.item_class) else {
            log::trace!("[drag] press on '{}' is not inside an item", target);
            return false;
        };
        let item = item.id.clone();

        event.prevent_default();

        match self.start(doc, item, event) {
            Ok(session) => {
                log::debug!(
                    "[drag] begin primary={} dragged={:?} y={}",
                    session.primary, session.dragged, session.last_y
                );
                self.session = Some(session);
                true
            }
            Err(err) => {
                log::warn!("[drag] could not start: {err}");
                false
            }
        }
    }

    fn start(
        &self,
        doc: &mut Document,
        item: String,
        event: &PointerEvent,
    ) -> Result<DragSession, DomError> {
        let config = &self.config;
        let container_rect = self.rect(doc, &self.container)?;

        if event.modifiers.secondary_select() {
            let selected = self
                .container_mut(doc)?
                .get_child_mut(&item)
                .ok_or_else(|| DomError::NotFound(item.clone()))?
                .toggle_class(&config.multiple_class);
            log::debug!("[drag] toggled multi-select on {item}: {selected}");
        }

        let container = self.container_ref(doc)?;
        let selected: Vec<String> = container
            .child_elements()
            .iter()
            .filter(|c| c.has_class(&config.multiple_class))
            .map(|c| c.id.clone())
            .collect();
        let dragged = if selected.contains(&item) {
            selected
        } else {
            vec![item.clone()]
        };
        let start_index = container
            .index_of(&item)
            .ok_or_else(|| DomError::NotFound(item.clone()))?;

        // Geometry before the placeholder shifts anything.
        let rects = dragged
            .iter()
            .map(|id| self.rect(doc, id))
            .collect::<Result<Vec<Rect>, DomError>>()?;
        let height = rects
            .iter()
            .fold(0u16, |sum, r| sum.saturating_add(r.height));

        let placeholder = Element::box_()
            .id(generate_id("placeholder"))
            .class(config.placeholder_class.clone())
            .height(Size::Fixed(height));
        let placeholder_id = placeholder.id.clone();

        let container = self.container_mut(doc)?;
        container.insert_before(placeholder, Some(&item))?;

        let mut saved = Vec::with_capacity(dragged.len());
        for (id, rect) in dragged.iter().zip(&rects) {
            let element = container
                .get_child_mut(id)
                .ok_or_else(|| DomError::NotFound(id.clone()))?;
            saved.push(Overrides::capture(element));

            let top = rect.y as i32 - container_rect.y as i32;
            element.position = Position::Absolute;
            element.z_index = config.z_index;
            element.top = Some(clamp_i16(top));
            element.width = Size::Fixed(rect.width);
            element.add_class(config.dragging_class.clone());
        }
        doc.relayout();

        let listeners = doc
            .surface()
            .listen(&[PointerKind::Move, PointerKind::Release]);

        Ok(DragSession {
            primary: item,
            dragged,
            placeholder: placeholder_id,
            last_y: event.y,
            start_index,
            saved,
            listeners,
        })
    }

    /// Follow a pointer move. Returns whether a session was active.
    pub fn drag(&mut self, doc: &mut Document, event: &PointerEvent) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let delta = event.y as i32 - session.last_y as i32;
        session.last_y = event.y;

        if let Err(err) = follow(doc, &self.container, session, delta, event.y) {
            log::warn!("[drag] move failed: {err}");
        }
        true
    }

    /// Drop the dragged items at the placeholder and end the session.
    /// Returns `None` when no session was active.
    pub fn end(&mut self, doc: &mut Document, event: &PointerEvent) -> Option<ItemMoved> {
        // Taken out so it drops on every path, releasing the surface listeners.
        let session = self.session.take()?;

        match self.finish(doc, &session) {
            Ok(moved) => {
                log::debug!(
                    "[drag] end at y={} old={} new={} items={:?}",
                    event.y, moved.old_index, moved.new_index, moved.items
                );
                Some(moved)
            }
            Err(err) => {
                log::warn!("[drag] drop failed: {err}");
                self.discard(doc, &session);
                None
            }
        }
    }

    fn finish(&self, doc: &mut Document, session: &DragSession) -> Result<ItemMoved, DomError> {
        let config = &self.config;
        let container = self.container_mut(doc)?;

        let old_index = container
            .index_of(&session.primary)
            .ok_or_else(|| DomError::NotFound(session.primary.clone()))?;
        let new_index = container
            .index_of(&session.placeholder)
            .ok_or_else(|| DomError::NotFound(session.placeholder.clone()))?;

        let mut items = Vec::with_capacity(session.dragged.len());
        for (id, saved) in session.dragged.iter().zip(&session.saved) {
            let element = container
                .get_child_mut(id)
                .ok_or_else(|| DomError::NotFound(id.clone()))?;
            saved.restore(element);
            element.remove_class(&config.multiple_class);
            element.remove_class(&config.dragging_class);
            items.push(element.text_content());
        }

        let mut moving = Vec::with_capacity(session.dragged.len());
        for id in &session.dragged {
            moving.push(container.remove_child(id)?);
        }
        let slot = container
            .index_of(&session.placeholder)
            .ok_or_else(|| DomError::NotFound(session.placeholder.clone()))?;
        container.remove_child(&session.placeholder)?;
        for (offset, element) in moving.into_iter().enumerate() {
            container.insert_at(slot + offset, element)?;
        }
        doc.relayout();

        Ok(ItemMoved {
            old_index,
            new_index,
            start_index: session.start_index,
            items,
            keys: session.dragged.clone(),
        })
    }

    /// Undo whatever a failed drop left behind: restore the dragged items
    /// still in the container and take the placeholder out.
    fn discard(&self, doc: &mut Document, session: &DragSession) {
        let config = &self.config;
        let Ok(container) = self.container_mut(doc) else {
            return;
        };

        for (id, saved) in session.dragged.iter().zip(&session.saved) {
            if let Some(element) = container.get_child_mut(id) {
                if element.has_class(&config.dragging_class) {
                    saved.restore(element);
                    element.remove_class(&config.multiple_class);
                    element.remove_class(&config.dragging_class);
                }
            }
        }
        if container.remove_child(&session.placeholder).is_ok() {
            log::debug!("[drag] removed orphaned placeholder {}", session.placeholder);
        }
        doc.relayout();
    }

    fn container_ref<'a>(&self, doc: &'a Document) -> Result<&'a Element, DomError> {
        doc.find(&self.container)
            .ok_or_else(|| DomError::NotFound(self.container.clone()))
    }

    fn container_mut<'a>(&self, doc: &'a mut Document) -> Result<&'a mut Element, DomError> {
        doc.find_mut(&self.container)
            .ok_or_else(|| DomError::NotFound(self.container.clone()))
    }

    fn rect(&self, doc: &Document, id: &str) -> Result<Rect, DomError> {
        doc.rect(id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }
}

fn follow(
    doc: &mut Document,
    container_id: &str,
    session: &DragSession,
    delta: i32,
    y: u16,
) -> Result<(), DomError> {
    let not_found = || DomError::NotFound(container_id.to_string());

    if delta != 0 {
        let container = doc.find_mut(container_id).ok_or_else(not_found)?;
        for id in &session.dragged {
            let element = container
                .get_child_mut(id)
                .ok_or_else(|| DomError::NotFound(id.clone()))?;
            let top = element.top.unwrap_or(0) as i32 + delta;
            element.top = Some(clamp_i16(top));
        }
        doc.relayout();
    }

    let container = doc.find(container_id).ok_or_else(not_found)?;
    let candidates = container
        .child_elements()
        .iter()
        .filter(|c| !session.is_dragged(&c.id) && c.id != session.placeholder)
        .filter_map(|c| doc.rect(&c.id).map(|rect| (c.id.as_str(), rect)));

    let (sibling, after) = match resolve_slot(candidates, y) {
        Some(Slot::Before(id)) => (id.to_string(), false),
        Some(Slot::After(id)) => (id.to_string(), true),
        None => return Ok(()),
    };

    let container = doc.find_mut(container_id).ok_or_else(not_found)?;
    let before = container.index_of(&session.placeholder);
    let placeholder = container.remove_child(&session.placeholder)?;
    let index = container
        .index_of(&sibling)
        .ok_or_else(|| DomError::NotFound(sibling.clone()))?;
    let index = if after { index + 1 } else { index };
    container.insert_at(index, placeholder)?;

    if before != Some(index) {
        log::trace!(
            "[drag] placeholder {} {} at index {}",
            if after { "after" } else { "before" },
            sibling,
            index
        );
        doc.relayout();
    }
    Ok(())
}

fn clamp_i16(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}
