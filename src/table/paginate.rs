/// Per-table pagination state. `current_page` is 1-indexed and clamped
/// against the page count of the currently matched row set on every
/// refresh.
#[derive(Debug, Clone, Copy)]
pub struct PaginationState {
    pub page_size: usize,
    pub current_page: usize,
}

impl PaginationState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Page count for the given visible row count.
    pub fn total_pages(&self, visible_rows: usize) -> usize {
        visible_rows.div_ceil(self.page_size)
    }

    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    /// Half-open index window `[start, end)` into the visible row
    /// sequence for the current page.
    pub fn window(&self) -> (usize, usize) {
        let start = (self.current_page - 1) * self.page_size;
        (start, start + self.page_size)
    }
}

/// One rendered pagination control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Previous { enabled: bool },
    Page { number: usize, active: bool },
    /// A run of skipped pages, collapsed to a single marker.
    Ellipsis,
    Next { enabled: bool },
}

/// The control strip for (current, total): Previous, page 1, the window
/// `[current-1, current+1]`, the last page, Next; every gap between shown
/// pages collapses to one ellipsis.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    let mut controls = vec![PageControl::Previous {
        enabled: current > 1,
    }];

    let mut in_gap = false;
    for number in 1..=total {
        let shown = number == 1
            || number == total
            || (number + 1 >= current && number <= current + 1);
        if shown {
            controls.push(PageControl::Page {
                number,
                active: number == current,
            });
            in_gap = false;
        } else if !in_gap {
            controls.push(PageControl::Ellipsis);
            in_gap = true;
        }
    }

    controls.push(PageControl::Next {
        enabled: current < total,
    });
    controls
}
