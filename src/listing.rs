//! Pure filter / paginate / sort helpers shared by every list renderer.
//!
//! Renderers build their row types on top of these; nothing here touches
//! shared state, so the whole module is testable without a running app.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::SortOrder;

/// Rows per page in every paginated table.
pub const PAGE_SIZE: usize = 10;

// ─── Search ───────────────────────────────────────────────────────────────────

/// Lowercased search term, or `None` when the box is empty.
pub fn search_term(raw: Option<&str>) -> Option<String> {
    raw.filter(|t| !t.is_empty()).map(str::to_lowercase)
}

/// Case-insensitive substring match. `needle` must already be lowercased.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

// ─── Pagination ───────────────────────────────────────────────────────────────

/// `ceil(total / PAGE_SIZE)`.
pub fn total_pages(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// One page of an already-filtered collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub rows: Vec<T>,
    /// 1-indexed.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

/// Slice page `page` (1-indexed; `0` is treated as `1`) out of `items`.
///
/// Page `k` holds `[(k-1)*10, min(k*10, N))`. Pages past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: usize) -> Page<T> {
    let page = page.max(1);
    let total_items = items.len();
    let start = (page - 1).saturating_mul(PAGE_SIZE);
    let rows = items.into_iter().skip(start).take(PAGE_SIZE).collect();

    Page {
        rows,
        page,
        total_pages: total_pages(total_items),
        total_items,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageButton {
    pub number: usize,
    pub active: bool,
}

/// Page buttons under a table. Hidden (no buttons) for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationControl {
    pub total_pages: usize,
    pub buttons: Vec<PageButton>,
}

impl PaginationControl {
    pub fn new(total_items: usize, current_page: usize) -> Self {
        let total = total_pages(total_items);
        let buttons = if total <= 1 {
            Vec::new()
        } else {
            (1..=total)
                .map(|number| PageButton {
                    number,
                    active: number == current_page,
                })
                .collect()
        };
        Self {
            total_pages: total,
            buttons,
        }
    }
}

// ─── Listing states ───────────────────────────────────────────────────────────

/// Placeholder card shown instead of a table body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

/// Result of running a renderer over a collection.
///
/// An empty collection and a filter that matches nothing are kept apart
/// so the UI can show the right placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Listing<T> {
    Empty { placeholder: EmptyState },
    NoMatches { placeholder: EmptyState },
    Rows {
        #[serde(flatten)]
        page: Page<T>,
        pagination: PaginationControl,
    },
}

impl<T> Listing<T> {
    /// Run the common "empty → filter → paginate → map" sequence.
    pub fn build<S>(
        collection: &[S],
        matches: impl Fn(&S) -> bool,
        to_row: impl Fn(&S) -> T,
        page: usize,
        empty: EmptyState,
        no_matches: EmptyState,
    ) -> Self {
        if collection.is_empty() {
            return Listing::Empty { placeholder: empty };
        }

        let filtered: Vec<&S> = collection.iter().filter(|item| matches(item)).collect();
        if filtered.is_empty() {
            return Listing::NoMatches {
                placeholder: no_matches,
            };
        }

        let page = paginate(filtered, page);
        let pagination = PaginationControl::new(page.total_items, page.page);
        Listing::Rows {
            page: Page {
                rows: page.rows.into_iter().map(to_row).collect(),
                page: page.page,
                total_pages: page.total_pages,
                total_items: page.total_items,
            },
            pagination,
        }
    }

    pub fn rows(&self) -> &[T] {
        match self {
            Listing::Rows { page, .. } => &page.rows,
            _ => &[],
        }
    }

    pub fn total_items(&self) -> usize {
        match self {
            Listing::Rows { page, .. } => page.total_items,
            _ => 0,
        }
    }
}

// ─── Sorting ──────────────────────────────────────────────────────────────────

/// A comparable column value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey {
    Int(i64),
    Bool(bool),
    Text(String),
}

/// Records that can be sorted by a named column.
pub trait Sortable {
    /// Column value, or `None` when the record has no such column.
    fn sort_key(&self, column: &str) -> Option<SortKey>;
}

/// Current sort of a collection, toggled by repeated header clicks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: String,
    pub order: SortOrder,
}

impl SortState {
    /// Order to apply when `column` is clicked: ascending, unless the
    /// collection is already sorted ascending by that column.
    pub fn next_order(previous: Option<&SortState>, column: &str) -> SortOrder {
        match previous {
            Some(state) if state.column == column && state.order == SortOrder::Asc => {
                SortOrder::Desc
            }
            _ => SortOrder::Asc,
        }
    }
}

/// Stable in-place sort by `column`. Records lacking the column compare equal.
pub fn sort_by_column<T: Sortable>(items: &mut [T], column: &str, order: SortOrder) {
    items.sort_by(|a, b| {
        let ord = match (a.sort_key(column), b.sort_key(column)) {
            (Some(x), Some(y)) => x.cmp(&y),
            _ => Ordering::Equal,
        };
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
