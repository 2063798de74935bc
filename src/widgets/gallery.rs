//! Category filter for a gallery of items.
//!
//! The host document provides the markup: filter buttons carry the
//! `filter-btn` class and a `data("category", ..)` key, items carry the
//! `gallery-item` class and their own category. The special category
//! `all` shows everything.

use crate::element::{find_element, find_element_mut, Element};
use crate::event::Event;

#[derive(Debug)]
pub struct GalleryFilter {
    gallery_id: String,
    /// (button id, category) pairs found at initialization.
    buttons: Vec<(String, String)>,
}

impl GalleryFilter {
    /// Attach to an existing gallery. Returns None when the gallery is
    /// missing; a gallery with no filter buttons is left untouched.
    pub fn init(root: &mut Element, gallery_id: &str) -> Option<Self> {
        let gallery = find_element(root, gallery_id)?;

        let mut buttons = Vec::new();
        collect_buttons(gallery, &mut buttons);

        let filter = Self {
            gallery_id: gallery_id.to_string(),
            buttons,
        };

        if let Some(gallery) = find_element_mut(root, gallery_id) {
            mark_clickable(gallery);
        }
        Some(filter)
    }

    pub fn handle_event(&self, root: &mut Element, event: &Event) -> bool {
        let Event::Click {
            target: Some(id), ..
        } = event
        else {
            return false;
        };
        let Some((_, category)) = self.buttons.iter().find(|(bid, _)| bid == id) else {
            return false;
        };
        let category = category.clone();
        self.select(root, &category);
        true
    }

    /// Apply a category: show matching items, hide the rest, move the
    /// `active` class to the matching button.
    pub fn select(&self, root: &mut Element, category: &str) {
        log::debug!("[gallery] {} filter {:?}", self.gallery_id, category);
        let Some(gallery) = find_element_mut(root, &self.gallery_id) else {
            return;
        };
        apply_category(gallery, category);
    }
}

fn collect_buttons(element: &Element, buttons: &mut Vec<(String, String)>) {
    if element.has_class("filter-btn") {
        if let Some(category) = element.get_data("category") {
            buttons.push((element.id.clone(), category.clone()));
        }
    }
    for child in element.child_elements() {
        collect_buttons(child, buttons);
    }
}

fn mark_clickable(element: &mut Element) {
    if element.has_class("filter-btn") {
        element.clickable = true;
    }
    if let Some(children) = element.child_elements_mut() {
        for child in children {
            mark_clickable(child);
        }
    }
}

fn apply_category(element: &mut Element, category: &str) {
    if element.has_class("filter-btn") {
        let matches = element.get_data("category").map(String::as_str) == Some(category);
        element.remove_class("active");
        if matches {
            element.add_class("active");
        }
    }
    if element.has_class("gallery-item") {
        element.display = category == "all"
            || element.get_data("category").map(String::as_str) == Some(category);
    }
    if let Some(children) = element.child_elements_mut() {
        for child in children {
            apply_category(child, category);
        }
    }
}
