use crate::element::{collect_text, Element};

/// One table body row, snapshotted at initialization time.
///
/// `original_index` is the row's position in the unsorted, unfiltered
/// source order and anchors every later reordering; `matched` is the
/// result of the active search predicate.
#[derive(Debug, Clone)]
pub struct RowRecord {
    /// Document id of the row element.
    pub element_id: String,
    /// Cell text contents, indexed by column. Ragged rows are tolerated;
    /// a missing cell reads as "".
    pub cells: Vec<String>,
    pub original_index: usize,
    pub matched: bool,
}

impl RowRecord {
    /// Trimmed text of one cell; out-of-range columns read as "".
    pub fn cell(&self, column: usize) -> &str {
        self.cells.get(column).map(|s| s.trim()).unwrap_or("")
    }

    /// Lowercased concatenation of all cell texts, the search haystack.
    pub fn haystack(&self) -> String {
        self.cells.concat().to_lowercase()
    }
}

/// Read all body rows of a table element in document order.
/// A table with no body or no rows yields an empty store and every
/// downstream behavior becomes a no-op.
pub fn load_rows(table: &Element) -> Vec<RowRecord> {
    let Some(body) = body_of(table) else {
        return Vec::new();
    };

    body.child_elements()
        .iter()
        .enumerate()
        .map(|(index, row)| RowRecord {
            element_id: row.id.clone(),
            cells: row.child_elements().iter().map(collect_text).collect(),
            original_index: index,
            matched: true,
        })
        .collect()
}

/// The table's body: the child tagged `data("role", "tbody")`, falling
/// back to the second child.
pub fn body_of(table: &Element) -> Option<&Element> {
    let children = table.child_elements();
    children
        .iter()
        .find(|c| c.get_data("role").map(String::as_str) == Some("tbody"))
        .or_else(|| children.get(1))
}

pub fn body_of_mut(table: &mut Element) -> Option<&mut Element> {
    let children = table.child_elements_mut()?;
    if let Some(pos) = children
        .iter()
        .position(|c| c.get_data("role").map(String::as_str) == Some("tbody"))
    {
        return children.get_mut(pos);
    }
    children.get_mut(1)
}

/// The table's header row: the child tagged `data("role", "thead")`
/// (or the first child), unwrapped one level if it holds a single row.
pub fn header_row_of_mut(table: &mut Element) -> Option<&mut Element> {
    let children = table.child_elements_mut()?;
    let pos = children
        .iter()
        .position(|c| c.get_data("role").map(String::as_str) == Some("thead"))
        .unwrap_or(0);
    let head = children.get_mut(pos)?;

    let unwrap_single = matches!(head.child_elements(), [only] if !only.child_elements().is_empty());
    if unwrap_single {
        head.child_elements_mut()?.get_mut(0)
    } else {
        Some(head)
    }
}
