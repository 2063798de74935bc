use std::cmp::Ordering;

use super::rows::RowRecord;

/// Direction applied by the first click on a previously inactive column.
/// Matches the original behavior: the first click orders ascending by
/// value and the header is marked `sort-asc`.
pub const DEFAULT_SORT_DIRECTION: SortDirection = SortDirection::Ascending;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Header class for the consuming stylesheet.
    pub fn class(self) -> &'static str {
        match self {
            Self::Ascending => "sort-asc",
            Self::Descending => "sort-desc",
        }
    }
}

/// Per-table sort state: at most one active column.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortState {
    pub column: Option<usize>,
    pub direction: SortDirection,
}

impl SortState {
    /// Register a header click: re-clicking the active column toggles its
    /// direction, any other column starts from the default.
    pub fn click(&mut self, column: usize) -> SortDirection {
        self.direction = if self.column == Some(column) {
            self.direction.toggled()
        } else {
            DEFAULT_SORT_DIRECTION
        };
        self.column = Some(column);
        self.direction
    }
}

/// Stable-sort the logical row order by one column.
///
/// The sort runs over the *current* order, so sorting the same column
/// twice reverses the prior arrangement rather than rebuilding it from
/// the original order.
pub fn sort_order(
    order: &mut [usize],
    rows: &[RowRecord],
    column: usize,
    direction: SortDirection,
) {
    order.sort_by(|&a, &b| {
        let ordering = compare_cells(rows[a].cell(column), rows[b].cell(column));
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Numeric-aware cell comparison: compare as numbers when both sides
/// parse after extraction, otherwise fall back to comparing the trimmed
/// strings.
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Strip every character except digits, '.' and '-', then parse the
/// longest numeric prefix of what is left: `"$1,234.50"` becomes
/// `1234.50`, `"2024-01-15"` becomes `2024`, `"N/A"` becomes nothing.
pub fn numeric_value(cell: &str) -> Option<f64> {
    let stripped: String = cell
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (i, b) in stripped.bytes().enumerate() {
        match b {
            b'-' if i == 0 => {}
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + 1;
    }

    if !seen_digit {
        return None;
    }
    stripped[..end].parse().ok()
}
