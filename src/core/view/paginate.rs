// Pagination over a derived list, and the bounded window of page buttons.
//
// Purpose
// - Slice one page out of a list without ever panicking on out of range input.
// - Compute which page numbers a pager shows, plus its first/last shortcuts and ellipses.
// - Combine filters and pagination into the page the list view renders.

use crate::core::employee::model::Employee;
use crate::core::store::state::AppState;
use crate::core::view::filter::apply_filters;

pub const DEFAULT_MAX_VISIBLE_PAGES: usize = 5;

/// Returns `list[(page - 1) * size .. page * size]`, clamped to the list.
pub fn paginate<T>(list: &[T], current_page: usize, items_per_page: usize) -> &[T] {
    if current_page == 0 {
        return &[];
    }
    let start = (current_page - 1).saturating_mul(items_per_page).min(list.len());
    let end = start.saturating_add(items_per_page).min(list.len());
    &list[start..end]
}

pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

/// Page numbers to render: all of them when they fit, otherwise `max_visible` contiguous
/// numbers centered on the current page and clamped to `[1, total_pages]`.
pub fn visible_pages(total_pages: usize, current_page: usize, max_visible: usize) -> Vec<usize> {
    if total_pages <= max_visible {
        return (1..=total_pages).collect();
    }
    if max_visible == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);
    let half = max_visible / 2;
    let mut start = current.saturating_sub(half).max(1);
    let end = start.saturating_add(max_visible - 1).min(total_pages);
    if end - start + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }
    (start..=end).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub current_page: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub show_first: bool,
    pub show_first_ellipsis: bool,
    pub show_last: bool,
    pub show_last_ellipsis: bool,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn new(total_items: usize, items_per_page: usize, current_page: usize, max_visible: usize) -> Self {
        let total = total_pages(total_items, items_per_page);
        let pages = visible_pages(total, current_page, max_visible);
        let first = pages.first().copied().unwrap_or(1);
        let last = pages.last().copied().unwrap_or(total);
        Self {
            current_page,
            total_pages: total,
            show_first: first > 1,
            show_first_ellipsis: first > 2,
            show_last: last < total,
            show_last_ellipsis: last < total.saturating_sub(1),
            has_previous: current_page > 1,
            has_next: current_page < total,
            pages,
        }
    }

    /// Whether a page change to `page` should be emitted.
    pub fn accepts(&self, page: usize) -> bool {
        page >= 1 && page <= self.total_pages && page != self.current_page
    }
}

/// One rendered page of the employee list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePage<'a> {
    pub items: Vec<&'a Employee>,
    pub total_items: usize,
    pub window: PageWindow,
}

pub fn select_page(state: &AppState) -> EmployeePage<'_> {
    let filtered = apply_filters(&state.employees.list, &state.ui.filters);
    let pagination = state.ui.pagination;
    let items = paginate(&filtered, pagination.current_page, pagination.items_per_page).to_vec();
    EmployeePage {
        total_items: filtered.len(),
        window: PageWindow::new(
            filtered.len(),
            pagination.items_per_page,
            pagination.current_page,
            DEFAULT_MAX_VISIBLE_PAGES,
        ),
        items,
    }
}

pub fn find_employee<'a>(state: &'a AppState, id: &str) -> Option<&'a Employee> {
    state.employees.list.iter().find(|e| e.id == id)
}
