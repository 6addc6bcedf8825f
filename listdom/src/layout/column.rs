use std::collections::HashMap;

use super::Rect;
use crate::element::{Content, Element};
use crate::text::{line_count, max_line_width};
use crate::types::{Position, Size};

pub type LayoutResult = HashMap<String, Rect>;

/// Lay out `element` and its subtree inside `available`.
///
/// Static children stack top to bottom in document order. Absolute children
/// are skipped by the flow and placed at `left`/`top` relative to their
/// parent's rect, so they may overlap their siblings.
pub fn layout(element: &Element, available: Rect) -> LayoutResult {
    let mut result = LayoutResult::new();
    let width = resolve_width(element, available.width);
    let height = resolve_height(element, available.height);
    let rect = Rect::new(available.x, available.y, width, height);
    result.insert(element.id.clone(), rect);
    layout_children(element, rect, &mut result);
    result
}

fn layout_children(element: &Element, rect: Rect, result: &mut LayoutResult) {
    let Content::Children(children) = &element.content else {
        return;
    };

    let mut offset = 0u16;
    for child in children.iter().filter(|c| c.position != Position::Absolute) {
        let height = resolve_height(child, rect.height.saturating_sub(offset));
        let child_rect = Rect::new(
            rect.x,
            rect.y.saturating_add(offset),
            resolve_width(child, rect.width),
            height,
        );
        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);
        offset = offset.saturating_add(height);
    }

    for child in children.iter().filter(|c| c.position == Position::Absolute) {
        let x = (rect.x as i32 + child.left.unwrap_or(0) as i32).clamp(0, u16::MAX as i32);
        let y = (rect.y as i32 + child.top.unwrap_or(0) as i32).clamp(0, u16::MAX as i32);
        let child_rect = Rect::new(
            x as u16,
            y as u16,
            resolve_width(child, rect.width),
            resolve_height(child, rect.height),
        );
        result.insert(child.id.clone(), child_rect);
        layout_children(child, child_rect, result);
    }
}

fn resolve_width(element: &Element, available: u16) -> u16 {
    match element.width {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_width(element).min(available),
    }
}

// Heights are not clipped: a list taller than its viewport keeps its rows.
fn resolve_height(element: &Element, available: u16) -> u16 {
    match element.height {
        Size::Fixed(n) => n,
        Size::Fill => available,
        Size::Auto => estimate_height(element),
    }
}

fn estimate_width(element: &Element) -> u16 {
    match &element.content {
        Content::Text(text) => max_line_width(text) as u16,
        Content::Children(children) => children
            .iter()
            .map(|c| match c.width {
                Size::Fixed(n) => n,
                _ => estimate_width(c),
            })
            .max()
            .unwrap_or(0),
        Content::None => 0,
    }
}

fn estimate_height(element: &Element) -> u16 {
    match &element.content {
        Content::Text(text) => line_count(text) as u16,
        Content::Children(children) => children
            .iter()
            .filter(|c| c.position != Position::Absolute)
            .map(|c| match c.height {
                Size::Fixed(n) => n,
                // Fill has nothing to fill while the parent is still being sized.
                Size::Fill => 0,
                Size::Auto => estimate_height(c),
            })
            .fold(0u16, u16::saturating_add),
        Content::None => 0,
    }
}
