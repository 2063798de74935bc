use tabledom::table::{data_table, numeric_value, page_controls, PageControl};
use tabledom::{collect_text, find_element, Element, EnhancedTable, Event, MouseButton, TableConfig};

// ============================================================================
// Helpers
// ============================================================================

fn doc(rows: &[Vec<String>]) -> Element {
    Element::col().child(data_table("t", &["Name", "Amount"], rows))
}

fn doc_one_column(cells: &[&str]) -> Element {
    let rows: Vec<Vec<String>> = cells.iter().map(|c| vec![c.to_string()]).collect();
    Element::col().child(data_table("t", &["Value"], &rows))
}

fn numbered_rows(count: usize) -> Vec<Vec<String>> {
    (1..=count)
        .map(|n| vec![format!("Row {n:02}"), format!("{}", n * 10)])
        .collect()
}

/// First-column text of the body rows currently displayed, in rendered order.
fn visible_col0(root: &Element) -> Vec<String> {
    find_element(root, "t_body")
        .map(|body| {
            body.child_elements()
                .iter()
                .filter(|r| r.display)
                .map(|r| {
                    r.child_elements()
                        .first()
                        .and_then(|c| c.text_content())
                        .unwrap_or("")
                        .to_string()
                })
                .collect()
        })
        .unwrap_or_default()
}

fn header_ids(root: &Element) -> Vec<String> {
    find_element(root, "t_head")
        .map(|head| head.child_elements().iter().map(|c| c.id.clone()).collect())
        .unwrap_or_default()
}

fn header_classes(root: &Element, column: usize) -> Vec<String> {
    let id = header_ids(root)[column].clone();
    find_element(root, &id).map(|h| h.classes.clone()).unwrap_or_default()
}

fn info_text(root: &Element) -> String {
    find_element(root, "t_info")
        .and_then(|e| e.text_content())
        .unwrap_or("")
        .to_string()
}

fn control_labels(root: &Element) -> Vec<String> {
    find_element(root, "t_pagination")
        .map(|c| c.child_elements().iter().map(collect_text).collect())
        .unwrap_or_default()
}

fn click(id: &str) -> Event {
    Event::Click {
        target: Some(id.to_string()),
        x: 0,
        y: 0,
        button: MouseButton::Left,
    }
}

fn search(text: &str) -> Event {
    Event::Change {
        target: "t_search".to_string(),
        text: text.to_string(),
    }
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_search_filters_without_reordering() {
    let mut root = doc(&numbered_rows(25));
    let config = TableConfig {
        pagination: false,
        ..TableConfig::default()
    };
    let mut table = EnhancedTable::init(&mut root, "t", config).unwrap();

    assert!(table.handle_event(&mut root, &search("row 1")));

    // "row 1" matches Row 10..19, in their original order.
    let visible = visible_col0(&root);
    assert_eq!(visible.len(), 10);
    assert_eq!(visible[0], "Row 10");
    assert_eq!(visible[9], "Row 19");
}

#[test]
fn test_search_is_case_insensitive() {
    let mut root = doc_one_column(&["Apple", "BANANA", "cherry"]);
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.handle_event(&mut root, &search("APP"));
    assert_eq!(visible_col0(&root), vec!["Apple"]);
}

#[test]
fn test_clearing_search_restores_all_rows_in_original_order() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.handle_event(&mut root, &search("row 2"));
    table.handle_event(&mut root, &search(""));

    let visible = visible_col0(&root);
    assert_eq!(visible.len(), 10);
    assert_eq!(visible[0], "Row 01");
    assert_eq!(visible[9], "Row 10");
    assert_eq!(info_text(&root), "Showing 1-10 of 25");
}

#[test]
fn test_search_matching_few_rows_collapses_to_single_page() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    // Exactly Row 03, Row 13, Row 23.
    table.handle_event(&mut root, &search("3"));

    assert_eq!(visible_col0(&root), vec!["Row 03", "Row 13", "Row 23"]);
    assert_eq!(info_text(&root), "Showing 1-3 of 3");
    assert!(control_labels(&root).is_empty());
}

#[test]
fn test_search_resets_out_of_range_page() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.render_page(&mut root, 3);
    table.handle_event(&mut root, &search("row 0"));

    // Page 3 no longer exists for the 9 matching rows.
    assert_eq!(table.current_page(), 1);
    assert_eq!(visible_col0(&root).len(), 9);
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_first_click_sorts_ascending_and_marks_header() {
    let mut root = doc_one_column(&["30", "10", "20"]);
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    let header = header_ids(&root)[0].clone();
    assert!(table.handle_event(&mut root, &click(&header)));

    assert_eq!(visible_col0(&root), vec!["10", "20", "30"]);
    assert!(header_classes(&root, 0).contains(&"sort-asc".to_string()));
}

#[test]
fn test_second_click_reverses_exactly_with_distinct_keys() {
    let mut root = doc_one_column(&["5", "3", "9", "1", "7"]);
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.sort_by_column(&mut root, 0);
    let ascending = visible_col0(&root);
    table.sort_by_column(&mut root, 0);
    let descending = visible_col0(&root);

    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
    assert!(header_classes(&root, 0).contains(&"sort-desc".to_string()));
}

#[test]
fn test_mixed_numeric_and_text_cells() {
    let mut root = doc_one_column(&["10", "9", "abc"]);
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.sort_by_column(&mut root, 0);
    assert_eq!(visible_col0(&root), vec!["9", "10", "abc"]);
}

#[test]
fn test_sort_marker_moves_between_headers() {
    let mut root = doc(&numbered_rows(5));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.sort_by_column(&mut root, 0);
    assert!(header_classes(&root, 0).contains(&"sort-asc".to_string()));

    // Switching columns starts ascending again and clears the old marker.
    table.sort_by_column(&mut root, 1);
    let first = header_classes(&root, 0);
    assert!(!first.contains(&"sort-asc".to_string()));
    assert!(!first.contains(&"sort-desc".to_string()));
    assert!(header_classes(&root, 1).contains(&"sort-asc".to_string()));
}

#[test]
fn test_sort_applies_across_pages() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    // Sort by amount descending: 250, 240, ...
    table.sort_by_column(&mut root, 1);
    table.sort_by_column(&mut root, 1);

    assert_eq!(visible_col0(&root)[0], "Row 25");
    table.render_page(&mut root, 3);
    assert_eq!(visible_col0(&root), vec!["Row 05", "Row 04", "Row 03", "Row 02", "Row 01"]);
}

#[test]
fn test_ragged_rows_sort_with_empty_cells_first() {
    let rows = vec![
        vec!["b".to_string(), "2".to_string()],
        vec!["a".to_string()],
        vec!["c".to_string(), "1".to_string()],
    ];
    let mut root = doc(&rows);
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.sort_by_column(&mut root, 1);
    // The missing cell reads as "" and sorts before the numbered ones.
    assert_eq!(visible_col0(&root), vec!["a", "c", "b"]);
}

#[test]
fn test_numeric_extraction() {
    assert_eq!(numeric_value("$1,234.50"), Some(1234.50));
    assert_eq!(numeric_value("  42 units"), Some(42.0));
    assert_eq!(numeric_value("-7"), Some(-7.0));
    assert_eq!(numeric_value("N/A"), None);
    assert_eq!(numeric_value(""), None);
}

#[test]
fn test_numeric_extraction_takes_the_leading_number() {
    // Anything after the first full number is ignored, so dates sort by
    // their leading component instead of falling back to text.
    assert_eq!(numeric_value("2024-01-15"), Some(2024.0));
    assert_eq!(numeric_value("1.2.3"), Some(1.2));
    assert_eq!(numeric_value("--5"), None);
}

#[test]
fn test_date_cells_sort_by_leading_component() {
    let mut root = doc_one_column(&["2024-03-01", "2023-12-31", "2024-01-15"]);
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.sort_by_column(&mut root, 0);
    // Both 2024 dates extract to the same key; the stable sort keeps
    // their prior relative order.
    assert_eq!(
        visible_col0(&root),
        vec!["2023-12-31", "2024-03-01", "2024-01-15"]
    );
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_page_windows_for_25_rows() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    assert_eq!(visible_col0(&root)[0], "Row 01");
    assert_eq!(visible_col0(&root)[9], "Row 10");
    assert_eq!(info_text(&root), "Showing 1-10 of 25");

    table.render_page(&mut root, 2);
    assert_eq!(visible_col0(&root)[0], "Row 11");
    assert_eq!(visible_col0(&root)[9], "Row 20");

    table.render_page(&mut root, 3);
    assert_eq!(visible_col0(&root).len(), 5);
    assert_eq!(visible_col0(&root)[0], "Row 21");
    assert_eq!(info_text(&root), "Showing 21-25 of 25");

    // Requesting past the end clamps to the last page.
    table.render_page(&mut root, 99);
    assert_eq!(table.current_page(), 3);
}

#[test]
fn test_boundary_controls_are_disabled_and_inert() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    let prev = find_element(&root, "t_prev").unwrap();
    assert!(prev.disabled);

    // The click is still consumed, but nothing moves.
    assert!(table.handle_event(&mut root, &click("t_prev")));
    assert_eq!(table.current_page(), 1);

    table.render_page(&mut root, 3);
    let next = find_element(&root, "t_next").unwrap();
    assert!(next.disabled);
    table.handle_event(&mut root, &click("t_next"));
    assert_eq!(table.current_page(), 3);
}

#[test]
fn test_prev_next_and_page_buttons_navigate() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    table.handle_event(&mut root, &click("t_next"));
    assert_eq!(table.current_page(), 2);
    table.handle_event(&mut root, &click("t_page_3"));
    assert_eq!(table.current_page(), 3);
    table.handle_event(&mut root, &click("t_prev"));
    assert_eq!(table.current_page(), 2);
}

#[test]
fn test_control_strip_collapses_gaps_to_one_ellipsis() {
    let controls = page_controls(5, 10);
    assert_eq!(
        controls,
        vec![
            PageControl::Previous { enabled: true },
            PageControl::Page { number: 1, active: false },
            PageControl::Ellipsis,
            PageControl::Page { number: 4, active: false },
            PageControl::Page { number: 5, active: true },
            PageControl::Page { number: 6, active: false },
            PageControl::Ellipsis,
            PageControl::Page { number: 10, active: false },
            PageControl::Next { enabled: true },
        ]
    );
}

#[test]
fn test_control_strip_without_gaps() {
    let controls = page_controls(1, 3);
    assert_eq!(
        controls,
        vec![
            PageControl::Previous { enabled: false },
            PageControl::Page { number: 1, active: true },
            PageControl::Page { number: 2, active: false },
            PageControl::Page { number: 3, active: false },
            PageControl::Next { enabled: true },
        ]
    );
}

#[test]
fn test_rendered_controls_match_strip() {
    let mut root = doc(&numbered_rows(25));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();
    table.render_page(&mut root, 2);

    assert_eq!(control_labels(&root), vec!["‹", "1", "2", "3", "›"]);
}

// ============================================================================
// Initialization and configuration
// ============================================================================

#[test]
fn test_missing_table_is_a_silent_no_op() {
    let mut root = Element::col().child(Element::text("no table here"));
    let before = root.child_elements().len();

    assert!(EnhancedTable::init(&mut root, "t", TableConfig::default()).is_none());
    assert_eq!(root.child_elements().len(), before);
}

#[test]
fn test_zero_row_table_degrades_quietly() {
    let mut root = doc(&[]);
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    assert_eq!(info_text(&root), "Showing 0-0 of 0");
    assert!(control_labels(&root).is_empty());

    table.handle_event(&mut root, &search("anything"));
    assert_eq!(info_text(&root), "Showing 0-0 of 0");
}

#[test]
fn test_injected_controls_carry_expected_ids() {
    let mut root = doc(&numbered_rows(25));
    EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    assert!(find_element(&root, "t_search").is_some());
    assert!(find_element(&root, "t_info").is_some());
    assert!(find_element(&root, "t_pagination").is_some());
}

#[test]
fn test_searchable_off_injects_no_search_box() {
    let mut root = doc(&numbered_rows(5));
    let config = TableConfig {
        searchable: false,
        ..TableConfig::default()
    };
    let mut table = EnhancedTable::init(&mut root, "t", config).unwrap();

    assert!(find_element(&root, "t_search").is_none());
    // A stray change event for the would-be search id is not consumed.
    assert!(!table.handle_event(&mut root, &search("x")));
}

#[test]
fn test_sortable_off_leaves_headers_inert() {
    let mut root = doc(&numbered_rows(5));
    let config = TableConfig {
        sortable: false,
        ..TableConfig::default()
    };
    let mut table = EnhancedTable::init(&mut root, "t", config).unwrap();

    let header = header_ids(&root)[0].clone();
    assert!(!find_element(&root, &header).unwrap().clickable);
    assert!(!table.handle_event(&mut root, &click(&header)));
}

#[test]
fn test_pagination_off_shows_every_row() {
    let mut root = doc(&numbered_rows(25));
    let config = TableConfig {
        pagination: false,
        ..TableConfig::default()
    };
    EnhancedTable::init(&mut root, "t", config).unwrap();

    assert_eq!(visible_col0(&root).len(), 25);
    assert!(find_element(&root, "t_info").is_none());
    assert!(find_element(&root, "t_pagination").is_none());
}

#[test]
fn test_blank_headers_are_not_sortable() {
    let rows = numbered_rows(5);
    let mut root = Element::col().child(data_table("t", &["Name", ""], &rows));
    let mut table = EnhancedTable::init(&mut root, "t", TableConfig::default()).unwrap();

    let blank = header_ids(&root)[1].clone();
    assert!(!find_element(&root, &blank).unwrap().clickable);
    assert!(!table.handle_event(&mut root, &click(&blank)));
}
