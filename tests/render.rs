use tabledom::table::data_table;
use tabledom::{
    layout, render_to_buffer, Buffer, Color, Element, EnhancedTable, Rect, Rgb, Style, TableConfig,
};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let lr = layout(root, Rect::new(0, 0, width, height));
    let mut buffer = Buffer::new(width, height);
    render_to_buffer(root, &lr, &mut buffer);
    buffer
}

// ============================================================================
// Basic rendering
// ============================================================================

#[test]
fn test_text_renders_at_layout_position() {
    let root = Element::col()
        .child(Element::text("first"))
        .child(Element::text("second"));
    let buffer = render(&root, 20, 5);

    assert_eq!(buffer.lines(), vec!["first", "second"]);
}

#[test]
fn test_hidden_elements_are_not_drawn() {
    let root = Element::col()
        .child(Element::text("shown"))
        .child(Element::text("hidden").display(false))
        .child(Element::text("after"));
    let buffer = render(&root, 20, 5);

    assert_eq!(buffer.lines(), vec!["shown", "after"]);
}

#[test]
fn test_row_places_children_side_by_side() {
    let root = Element::row()
        .child(Element::text("ab").width(4))
        .child(Element::text("cd"));
    let buffer = render(&root, 20, 3);

    // Fixed width 4 plus the row's default gap of 1.
    assert_eq!(buffer.line(0), "ab   cd");
}

#[test]
fn test_bold_style_reaches_the_cell() {
    let root = Element::col().child(Element::text("x").style(Style::new().bold()));
    let buffer = render(&root, 5, 2);

    let cell = buffer.get(0, 0).unwrap();
    assert_eq!(cell.char, 'x');
    assert!(cell.style.bold);
}

#[test]
fn test_colors_reach_the_cell() {
    let root = Element::col().child(
        Element::text("hi")
            .width(4)
            .style(
                Style::new()
                    .foreground(Color::rgb(10, 20, 30))
                    .background(Color::rgb(40, 50, 60)),
            ),
    );
    let buffer = render(&root, 6, 2);

    let cell = buffer.get(0, 0).unwrap();
    assert_eq!(cell.fg, Rgb::new(10, 20, 30));
    assert_eq!(cell.bg, Rgb::new(40, 50, 60));
    // The background fills the whole fixed-width rect, not just the glyphs.
    assert_eq!(buffer.get(3, 0).unwrap().bg, Rgb::new(40, 50, 60));
}

#[test]
fn test_long_text_clips_with_ellipsis() {
    let root = Element::col().child(Element::text("abcdefgh").width(5));
    let buffer = render(&root, 10, 2);

    assert_eq!(buffer.line(0), "abcd…");
}

#[test]
fn test_text_input_shows_placeholder_when_empty() {
    let root = Element::col().child(Element::text_input("").placeholder("Search..."));
    let buffer = render(&root, 20, 2);

    assert_eq!(buffer.line(0), "Search...");
    assert!(buffer.get(0, 0).unwrap().style.dim);
}

#[test]
fn test_buffer_diff_reports_only_changed_cells() {
    use tabledom::buffer::Cell;

    let clean = Buffer::new(4, 2);
    let mut drawn = Buffer::new(4, 2);
    drawn.set(
        1,
        0,
        Cell::styled('x', Rgb::new(1, 2, 3), Cell::DEFAULT_BG, Default::default()),
    );
    drawn.set(3, 1, Cell::blank(Cell::DEFAULT_FG, Rgb::new(9, 9, 9)));

    let changed: Vec<(u16, u16, char)> =
        drawn.diff(&clean).map(|(x, y, c)| (x, y, c.char)).collect();
    assert_eq!(changed, vec![(1, 0, 'x'), (3, 1, ' ')]);
}

#[test]
fn test_wide_characters_take_two_cells() {
    let root = Element::col().child(Element::text("日x"));
    let buffer = render(&root, 10, 2);

    assert_eq!(buffer.get(0, 0).unwrap().char, '日');
    assert!(buffer.get(1, 0).unwrap().wide_continuation);
    assert_eq!(buffer.get(2, 0).unwrap().char, 'x');
}

// ============================================================================
// Table rendering
// ============================================================================

#[test]
fn test_paginated_table_renders_only_current_page() {
    let rows: Vec<Vec<String>> = (1..=12).map(|n| vec![format!("Item {n:02}")]).collect();
    let mut root = Element::col().child(data_table("t", &["Name"], &rows));
    EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    let buffer = render(&root, 40, 30);
    let text = buffer.lines().join("\n");

    assert!(text.contains("Item 01"));
    assert!(text.contains("Item 10"));
    assert!(!text.contains("Item 11"));
    assert!(text.contains("Showing 1-10 of 12"));
}

#[test]
fn test_control_strip_renders_page_numbers() {
    let rows: Vec<Vec<String>> = (1..=25).map(|n| vec![format!("Item {n:02}")]).collect();
    let mut root = Element::col().child(data_table("t", &["Name"], &rows));
    EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    let buffer = render(&root, 40, 30);
    let text = buffer.lines().join("\n");

    assert!(text.contains("‹ 1 2 3 ›"));
}

#[test]
fn test_search_box_renders_above_the_table() {
    let rows: Vec<Vec<String>> = (1..=3).map(|n| vec![format!("Item {n}")]).collect();
    let mut root = Element::col().child(data_table("t", &["Name"], &rows));
    EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    let buffer = render(&root, 40, 20);
    let lines = buffer.lines();

    let search_line = lines.iter().position(|l| l.contains("Search...")).unwrap();
    let first_row = lines.iter().position(|l| l.contains("Item 1")).unwrap();
    assert!(search_line < first_row);
}
