mod markup;
mod paginate;
mod rows;
mod search;
mod sort;

pub use markup::{data_table, table_row};
pub use paginate::{page_controls, PageControl, PaginationState};
pub use rows::{load_rows, RowRecord};
pub use sort::{
    compare_cells, numeric_value, SortDirection, SortState, DEFAULT_SORT_DIRECTION,
};

use std::collections::HashSet;

use crate::element::{find_element, find_element_mut, insert_after, insert_before, Element};
use crate::event::Event;
use crate::types::Style;

/// Configuration for one enhanced table.
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Attach the search filter (injects a search box before the table).
    pub searchable: bool,
    /// Make non-empty header cells sortable triggers.
    pub sortable: bool,
    /// Attach the paginator (injects the info line and control strip
    /// after the table).
    pub pagination: bool,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            sortable: true,
            pagination: true,
            page_size: 10,
        }
    }
}

/// Per-table controller wiring search, sort and pagination behind one
/// initialization call.
///
/// The controller owns the logical row order; the document's body is
/// rewritten from it on every refresh, and each row's visibility is
/// resolved exactly once per refresh (search predicate first, then the
/// page window over the filtered sequence). Rendered controls carry ids
/// the controller generated, so events route back to it without any
/// global registry.
#[derive(Debug)]
pub struct EnhancedTable {
    table_id: String,
    config: TableConfig,
    rows: Vec<RowRecord>,
    /// Logical row order: indices into `rows`. Single source of truth;
    /// the document body tracks it, never the other way around.
    order: Vec<usize>,
    /// Header cell ids by column, None for blank headers.
    header_ids: Vec<Option<String>>,
    sort: SortState,
    page: PaginationState,
    search_term: String,
}

impl EnhancedTable {
    /// Attach the configured behaviors to the table with `table_id`.
    ///
    /// Returns None (and touches nothing) when the table does not exist.
    /// Initializing the same table twice is not supported: the second
    /// call injects a second set of controls.
    pub fn init(root: &mut Element, table_id: &str, config: TableConfig) -> Option<Self> {
        let table = find_element(root, table_id)?;
        let records = load_rows(table);
        let order = (0..records.len()).collect();

        let mut controller = Self {
            table_id: table_id.to_string(),
            page: PaginationState::new(config.page_size),
            config,
            rows: records,
            order,
            header_ids: Vec::new(),
            sort: SortState::default(),
            search_term: String::new(),
        };

        if controller.config.searchable {
            controller.inject_search(root);
        }
        if controller.config.sortable {
            controller.mark_sortable_headers(root);
        }
        if controller.config.pagination {
            controller.inject_pagination(root);
        }

        controller.refresh(root);
        log::debug!(
            "[table] initialized {} with {} rows ({:?})",
            controller.table_id,
            controller.rows.len(),
            controller.config
        );
        Some(controller)
    }

    pub fn table_id(&self) -> &str {
        &self.table_id
    }

    /// Id of the injected search input.
    pub fn search_input_id(&self) -> String {
        format!("{}_search", self.table_id)
    }

    /// Id of the injected pagination controls container.
    pub fn pagination_id(&self) -> String {
        format!("{}_pagination", self.table_id)
    }

    /// Id of the injected `Showing X-Y of Z` info line.
    pub fn info_id(&self) -> String {
        format!("{}_info", self.table_id)
    }

    fn prev_id(&self) -> String {
        format!("{}_prev", self.table_id)
    }

    fn next_id(&self) -> String {
        format!("{}_next", self.table_id)
    }

    fn page_button_id(&self, number: usize) -> String {
        format!("{}_page_{}", self.table_id, number)
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    /// Handle an event if it belongs to this table's controls.
    /// Returns true when the event was consumed.
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> bool {
        match event {
            Event::Change { target, text }
                if self.config.searchable && *target == self.search_input_id() =>
            {
                self.on_search_input(root, text);
                true
            }
            Event::Click {
                target: Some(id), ..
            } => {
                let id = id.clone();
                self.handle_click(root, &id)
            }
            _ => false,
        }
    }

    fn handle_click(&mut self, root: &mut Element, id: &str) -> bool {
        if let Some(column) = self.header_column(id) {
            self.sort_by_column(root, column);
            return true;
        }

        if id == self.prev_id() {
            // Disabled boundary controls never hit-test, but a direct
            // call must stay a no-op too.
            if self.page.current_page > 1 {
                self.render_page(root, self.page.current_page - 1);
            }
            return true;
        }
        if id == self.next_id() {
            self.render_page(root, self.page.current_page + 1);
            return true;
        }
        if let Some(number) = id
            .strip_prefix(&format!("{}_page_", self.table_id))
            .and_then(|n| n.parse::<usize>().ok())
        {
            self.render_page(root, number);
            return true;
        }
        false
    }

    /// Update the search term and re-resolve visibility. Empty term
    /// restores every row.
    pub fn on_search_input(&mut self, root: &mut Element, term: &str) {
        log::debug!("[table] {} search {:?}", self.table_id, term);
        self.search_term = term.to_string();
        self.refresh(root);
    }

    /// Sort by a column, toggling direction when it is already active.
    pub fn sort_by_column(&mut self, root: &mut Element, column: usize) {
        let direction = self.sort.click(column);
        log::debug!(
            "[table] {} sort column {} {:?}",
            self.table_id,
            column,
            direction
        );
        sort::sort_order(&mut self.order, &self.rows, column, direction);
        self.refresh(root);
    }

    /// Go to a page; out-of-range requests clamp to the valid range.
    pub fn render_page(&mut self, root: &mut Element, page: usize) {
        log::debug!("[table] {} page -> {}", self.table_id, page);
        self.page.current_page = page.max(1);
        self.refresh(root);
    }

    // -------------------------------------------------------------------
    // Injection
    // -------------------------------------------------------------------

    fn inject_search(&self, root: &mut Element) {
        let block = Element::row()
            .id(format!("{}_controls", self.table_id))
            .class("data-table-controls")
            .child(Element::text("⌕"))
            .child(
                Element::text_input("")
                    .id(self.search_input_id())
                    .placeholder("Search...")
                    .width(24)
                    .class("table-search-box"),
            );
        insert_before(root, &self.table_id, block);
    }

    fn mark_sortable_headers(&mut self, root: &mut Element) {
        let Some(table) = find_element_mut(root, &self.table_id) else {
            return;
        };
        let Some(header) = rows::header_row_of_mut(table) else {
            return;
        };
        let Some(cells) = header.child_elements_mut() else {
            return;
        };

        self.header_ids = cells
            .iter_mut()
            .map(|cell| {
                // Blank headers (action columns and the like) stay inert.
                let has_text = cell
                    .text_content()
                    .map(|t| !t.trim().is_empty())
                    .unwrap_or(false);
                if !has_text {
                    return None;
                }
                cell.clickable = true;
                cell.add_class("sortable-header");
                Some(cell.id.clone())
            })
            .collect();
    }

    fn inject_pagination(&self, root: &mut Element) {
        let block = Element::row()
            .id(format!("{}_pageblock", self.table_id))
            .class("table-pagination")
            .gap(2)
            .child(
                Element::text("")
                    .id(self.info_id())
                    .class("pagination-info"),
            )
            .child(
                Element::row()
                    .id(self.pagination_id())
                    .class("pagination-controls"),
            );
        insert_after(root, &self.table_id, block);
    }

    fn header_column(&self, id: &str) -> Option<usize> {
        if !self.config.sortable {
            return None;
        }
        self.header_ids
            .iter()
            .position(|h| h.as_deref() == Some(id))
    }

    // -------------------------------------------------------------------
    // Refresh: the single visibility-resolution step
    // -------------------------------------------------------------------

    /// Re-resolve the table from controller state: search predicate over
    /// all rows, page window over the matched sequence, then one pass
    /// writing order, visibility, header markers, info line and controls
    /// into the document.
    fn refresh(&mut self, root: &mut Element) {
        search::apply_search(&mut self.rows, &self.search_term);

        let matched: Vec<usize> = self
            .order
            .iter()
            .copied()
            .filter(|&i| self.rows[i].matched)
            .collect();

        let total_pages = if self.config.pagination {
            self.page.total_pages(matched.len())
        } else {
            1
        };
        self.page.clamp(total_pages);

        let paginating = self.config.pagination && total_pages > 1;
        let (start, end) = if paginating {
            self.page.window()
        } else {
            (0, usize::MAX)
        };

        let visible: HashSet<&str> = matched
            .iter()
            .enumerate()
            .filter(|(position, _)| *position >= start && *position < end)
            .map(|(_, &i)| self.rows[i].element_id.as_str())
            .collect();

        self.apply_to_body(root, &visible);
        self.apply_header_markers(root);
        if self.config.pagination {
            self.apply_pagination(root, matched.len(), total_pages, start, end);
        }
    }

    fn apply_to_body(&self, root: &mut Element, visible: &HashSet<&str>) {
        let Some(table) = find_element_mut(root, &self.table_id) else {
            return;
        };
        let Some(body) = rows::body_of_mut(table) else {
            return;
        };
        let Some(children) = body.child_elements_mut() else {
            return;
        };

        // Rewrite the rendered order from the logical order, then set
        // each row's final visibility exactly once.
        let positions: Vec<&str> = self
            .order
            .iter()
            .map(|&i| self.rows[i].element_id.as_str())
            .collect();
        children.sort_by_key(|child| {
            positions
                .iter()
                .position(|id| *id == child.id)
                .unwrap_or(usize::MAX)
        });

        for child in children.iter_mut() {
            child.display = visible.contains(child.id.as_str());
        }
    }

    fn apply_header_markers(&self, root: &mut Element) {
        if !self.config.sortable {
            return;
        }
        let Some(table) = find_element_mut(root, &self.table_id) else {
            return;
        };
        let Some(header) = rows::header_row_of_mut(table) else {
            return;
        };
        let Some(cells) = header.child_elements_mut() else {
            return;
        };

        for (column, cell) in cells.iter_mut().enumerate() {
            cell.remove_class("sort-asc");
            cell.remove_class("sort-desc");
            if self.sort.column == Some(column) {
                cell.add_class(self.sort.direction.class());
            }
        }
    }

    fn apply_pagination(
        &self,
        root: &mut Element,
        matched: usize,
        total_pages: usize,
        start: usize,
        end: usize,
    ) {
        let showing_from = if matched == 0 { 0 } else { start + 1 };
        let showing_to = end.min(matched);
        if let Some(info) = find_element_mut(root, &self.info_id()) {
            info.set_text(format!("Showing {showing_from}-{showing_to} of {matched}"));
        }

        let Some(container) = find_element_mut(root, &self.pagination_id()) else {
            return;
        };

        // A single page needs no controls at all.
        if total_pages <= 1 {
            container.set_children(Vec::new());
            return;
        }

        let buttons = page_controls(self.page.current_page, total_pages)
            .into_iter()
            .map(|control| self.control_element(control))
            .collect();
        container.set_children(buttons);
    }

    fn control_element(&self, control: PageControl) -> Element {
        match control {
            PageControl::Previous { enabled } => Element::button("‹")
                .id(self.prev_id())
                .class("pagination-btn")
                .disabled(!enabled),
            PageControl::Next { enabled } => Element::button("›")
                .id(self.next_id())
                .class("pagination-btn")
                .disabled(!enabled),
            PageControl::Page { number, active } => {
                let mut button = Element::button(number.to_string())
                    .id(self.page_button_id(number))
                    .class("pagination-btn");
                if active {
                    button = button.class("active").style(Style::new().bold());
                }
                button
            }
            PageControl::Ellipsis => Element::text("…")
                .class("pagination-ellipsis")
                .style(Style::new().dim()),
        }
    }
}
