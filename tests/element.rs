use tabledom::{
    collect_text, find_element, find_element_mut, insert_after, insert_before, remove_element,
    Element,
};

fn doc() -> Element {
    Element::col()
        .id("root")
        .child(Element::text("header").id("h"))
        .child(
            Element::col()
                .id("section")
                .child(Element::text("body").id("b")),
        )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_find_element_descends_the_tree() {
    let root = doc();
    assert!(find_element(&root, "b").is_some());
    assert!(find_element(&root, "nope").is_none());
}

#[test]
fn test_find_element_mut_allows_in_place_edits() {
    let mut root = doc();
    find_element_mut(&mut root, "b").unwrap().set_text("changed");
    assert_eq!(
        find_element(&root, "b").unwrap().text_content(),
        Some("changed")
    );
}

#[test]
fn test_collect_text_concatenates_subtree() {
    let root = doc();
    assert_eq!(collect_text(&root), "headerbody");
}

// ============================================================================
// Sibling insertion and removal
// ============================================================================

#[test]
fn test_insert_before_places_sibling_at_anchor() {
    let mut root = doc();
    assert!(insert_before(&mut root, "h", Element::text("first").id("f")));

    let ids: Vec<&str> = root.child_elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["f", "h", "section"]);
}

#[test]
fn test_insert_after_works_on_nested_anchors() {
    let mut root = doc();
    assert!(insert_after(&mut root, "b", Element::text("note").id("n")));

    let section = find_element(&root, "section").unwrap();
    let ids: Vec<&str> = section.child_elements().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "n"]);
}

#[test]
fn test_insert_with_missing_anchor_leaves_tree_alone() {
    let mut root = doc();
    assert!(!insert_before(&mut root, "nope", Element::text("x")));
    assert_eq!(root.child_elements().len(), 2);
}

#[test]
fn test_remove_element_returns_the_subtree() {
    let mut root = doc();
    let removed = remove_element(&mut root, "section").unwrap();
    assert_eq!(collect_text(&removed), "body");
    assert!(find_element(&root, "b").is_none());
}

// ============================================================================
// Classes
// ============================================================================

#[test]
fn test_class_toggling() {
    let mut el = Element::text("x").class("one");
    assert!(el.has_class("one"));

    el.add_class("two");
    el.add_class("two");
    assert_eq!(el.classes, vec!["one", "two"]);

    el.remove_class("one");
    assert!(!el.has_class("one"));
}
