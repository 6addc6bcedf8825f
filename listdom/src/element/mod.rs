mod content;
mod node;

pub use content::Content;
pub(crate) use node::generate_id;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.content.as_children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// IDs from `root` down to the element with `id`, both ends included.
pub fn path_to<'a>(root: &'a Element, id: &str) -> Option<Vec<&'a str>> {
    if root.id == id {
        return Some(vec![root.id.as_str()]);
    }

    for child in root.content.as_children() {
        if let Some(mut path) = path_to(child, id) {
            path.insert(0, root.id.as_str());
            return Some(path);
        }
    }

    None
}
