mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in subtrees(root) {
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

    match &mut root.content {
        Content::Children(children) | Content::Frames { children, .. } => {
            for child in children {
                if let Some(found) = find_element_mut(child, id) {
                    return Some(found);
                }
            }
            None
        }
        _ => None,
    }
}

/// Concatenated text content of an element's subtree, in document order.
/// This is what the search filter matches against.
pub fn collect_text(element: &Element) -> String {
    let mut out = String::new();
    collect_text_into(element, &mut out);
    out
}

fn collect_text_into(element: &Element, out: &mut String) {
    match &element.content {
        Content::Text(s) => out.push_str(s),
        Content::TextInput { value, .. } => out.push_str(value),
        Content::Children(children) | Content::Frames { children, .. } => {
            for child in children {
                collect_text_into(child, out);
            }
        }
        Content::None => {}
    }
}

/// Insert `new` as a sibling immediately before the element with `anchor_id`.
/// Returns false (tree untouched) when the anchor is not found.
pub fn insert_before(root: &mut Element, anchor_id: &str, new: Element) -> bool {
    insert_sibling(root, anchor_id, new, 0)
}

/// Insert `new` as a sibling immediately after the element with `anchor_id`.
pub fn insert_after(root: &mut Element, anchor_id: &str, new: Element) -> bool {
    insert_sibling(root, anchor_id, new, 1)
}

fn insert_sibling(root: &mut Element, anchor_id: &str, new: Element, offset: usize) -> bool {
    let Some(children) = root.child_elements_mut() else {
        return false;
    };

    if let Some(pos) = children.iter().position(|c| c.id == anchor_id) {
        children.insert(pos + offset, new);
        return true;
    }

    // Descend only into the subtree that actually contains the anchor, so
    // ownership of `new` moves exactly once.
    for child in children {
        if find_element(child, anchor_id).is_some() {
            return insert_sibling(child, anchor_id, new, offset);
        }
    }
    false
}

/// Remove the element with `id` from the tree, returning it.
pub fn remove_element(root: &mut Element, id: &str) -> Option<Element> {
    let children = root.child_elements_mut()?;

    if let Some(pos) = children.iter().position(|c| c.id == id) {
        return Some(children.remove(pos));
    }

    for child in children {
        if let Some(removed) = remove_element(child, id) {
            return Some(removed);
        }
    }
    None
}

fn subtrees(element: &Element) -> &[Element] {
    match &element.content {
        Content::Children(children) | Content::Frames { children, .. } => children,
        _ => &[],
    }
}
