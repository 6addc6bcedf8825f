use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::error::DomError;
use crate::types::{Position, Size};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Box
    pub width: Size,
    pub height: Size,

    // Positioning
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub z_index: i16,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            classes: Vec::new(),
            content: Content::None,
            width: Size::Fill,
            height: Size::Auto,
            position: Position::Static,
            top: None,
            left: None,
            z_index: 0,
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            content: Content::Children(Vec::new()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn classes<S: Into<String>>(mut self, classes: impl IntoIterator<Item = S>) -> Self {
        for class in classes {
            self.add_class(class);
        }
        self
    }

    // Box
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn z_index(mut self, z_index: i16) -> Self {
        self.z_index = z_index;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // Classes

    /// An empty class name never matches.
    pub fn has_class(&self, class: &str) -> bool {
        !class.is_empty() && self.classes.iter().any(|c| c == class)
    }

    /// Returns true if the class was added.
    pub fn add_class(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.has_class(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    /// Returns true if the class was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        let before = self.classes.len();
        self.classes.retain(|c| c != class);
        self.classes.len() != before
    }

    /// Flip membership of `class`. Returns whether the element has it afterwards.
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.add_class(class)
        }
    }

    /// All text in this subtree, concatenated in document order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // Child list

    pub fn child_elements(&self) -> &[Element] {
        self.content.as_children()
    }

    pub fn child_ids(&self) -> Vec<&str> {
        self.child_elements().iter().map(|c| c.id.as_str()).collect()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.child_elements().iter().position(|c| c.id == id)
    }

    pub fn get_child(&self, id: &str) -> Option<&Element> {
        self.child_elements().iter().find(|c| c.id == id)
    }

    pub fn get_child_mut(&mut self, id: &str) -> Option<&mut Element> {
        match &mut self.content {
            Content::Children(children) => children.iter_mut().find(|c| c.id == id),
            _ => None,
        }
    }

    fn children_mut(&mut self) -> Result<&mut Vec<Element>, DomError> {
        if matches!(self.content, Content::None) {
            self.content = Content::Children(Vec::new());
        }
        match &mut self.content {
            Content::Children(children) => Ok(children),
            _ => Err(DomError::NotAContainer(self.id.clone())),
        }
    }

    /// Insert `child` at `index` in this element's child list.
    pub fn insert_at(&mut self, index: usize, child: Element) -> Result<(), DomError> {
        let parent = self.id.clone();
        let children = self.children_mut()?;
        if index > children.len() {
            return Err(DomError::IndexOutOfBounds {
                parent,
                index,
                len: children.len(),
            });
        }
        children.insert(index, child);
        Ok(())
    }

    /// Insert `child` immediately before the child `reference`, or append
    /// when `reference` is `None`.
    pub fn insert_before(
        &mut self,
        child: Element,
        reference: Option<&str>,
    ) -> Result<(), DomError> {
        let index = match reference {
            Some(id) => self
                .index_of(id)
                .ok_or_else(|| DomError::NotFound(id.to_string()))?,
            None => self.child_elements().len(),
        };
        self.insert_at(index, child)
    }

    /// Detach the child `id` and hand it back.
    pub fn remove_child(&mut self, id: &str) -> Result<Element, DomError> {
        let index = self
            .index_of(id)
            .ok_or_else(|| DomError::NotFound(id.to_string()))?;
        let children = self.children_mut()?;
        Ok(children.remove(index))
    }
}

fn collect_text(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(text) => out.push_str(text),
        Content::Children(children) => {
            for child in children {
                collect_text(child, out);
            }
        }
        Content::None => {}
    }
}
