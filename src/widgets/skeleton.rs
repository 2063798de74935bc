//! Skeleton placeholders shown while real content loads.

use crate::element::{find_element_mut, Element};
use crate::types::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonKind {
    Card,
    Table,
    Stats,
    List,
}

/// Replace the container's content with a skeleton template.
pub fn show_skeleton(root: &mut Element, container_id: &str, kind: SkeletonKind) {
    let Some(container) = find_element_mut(root, container_id) else {
        return;
    };
    log::debug!("[skeleton] show {kind:?} in {container_id}");
    container.set_children(vec![template(kind)]);
}

/// Mark every skeleton node under the container as hidden. The host
/// swaps the real content in afterwards.
pub fn hide_skeleton(root: &mut Element, container_id: &str) {
    let Some(container) = find_element_mut(root, container_id) else {
        return;
    };
    log::debug!("[skeleton] hide in {container_id}");
    hide_under(container);
}

fn hide_under(element: &mut Element) {
    if element.has_class("skeleton") {
        element.add_class("skeleton-hidden");
        element.display = false;
    }
    if let Some(children) = element.child_elements_mut() {
        for child in children {
            hide_under(child);
        }
    }
}

fn template(kind: SkeletonKind) -> Element {
    let root = Element::col().class("skeleton").gap(1);
    match kind {
        SkeletonKind::Card => root
            .child(bar(20))
            .child(bar(28))
            .child(bar(24)),
        SkeletonKind::Table => root.children((0..5).map(|_| {
            Element::row()
                .gap(1)
                .children((0..4).map(|_| bar(12)))
        })),
        SkeletonKind::Stats => Element::row()
            .class("skeleton")
            .gap(2)
            .children((0..4).map(|_| Element::col().gap(1).child(bar(8)).child(bar(6)))),
        SkeletonKind::List => root.children((0..6).map(|_| bar(32))),
    }
}

fn bar(width: u16) -> Element {
    Element::text("░".repeat(width as usize))
        .width(width)
        .class("skeleton-bar")
        .style(Style::new().dim())
}
