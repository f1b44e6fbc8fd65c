//! Filter / Sort / Paginate pipeline behind the reel table.

use crate::metrics::{Metric, Reel, SortOrder};

/// Fixed page size of the table.
pub const ROWS_PER_PAGE: usize = 10;

/// User-controlled inputs of the table view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub metric: Metric,
    pub order: SortOrder,
    pub filter: String,
    /// 1-based.
    pub page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            order: SortOrder::default(),
            filter: String::new(),
            page: 1,
        }
    }
}

/// One rendered page of the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a Reel>,
    pub page: usize,
    pub page_count: usize,
    pub filtered_count: usize,
}

impl TableView<'_> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page * ROWS_PER_PAGE < self.filtered_count
    }
}

/// Case-insensitive substring match against the Reel URL or its short URL.
pub fn matches_filter(reel: &Reel, needle_lower: &str) -> bool {
    needle_lower.is_empty()
        || reel.reel.to_lowercase().contains(needle_lower)
        || reel.short_url.to_lowercase().contains(needle_lower)
}

pub fn filter_reels<'a>(reels: &'a [Reel], filter: &str) -> Vec<&'a Reel> {
    let needle = filter.to_lowercase();
    reels.iter().filter(|r| matches_filter(r, &needle)).collect()
}

/// Stable sort by `metric` in either direction.
pub fn sort_reels(rows: &mut [&Reel], metric: Metric, order: SortOrder) {
    match order {
        SortOrder::Asc => rows.sort_by(|a, b| metric.value(a).total_cmp(&metric.value(b))),
        SortOrder::Desc => rows.sort_by(|a, b| metric.value(b).total_cmp(&metric.value(a))),
    }
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(ROWS_PER_PAGE)
}

/// Bring `page` into `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.clamp(1, page_count(total).max(1))
}

/// Rows `[(page-1)*10, page*10)`; empty when the page is out of range.
pub fn paginate<'r, 'a>(rows: &'r [&'a Reel], page: usize) -> &'r [&'a Reel] {
    let Some(start) = page.checked_sub(1).map(|p| p * ROWS_PER_PAGE) else {
        return &[];
    };
    if start >= rows.len() {
        return &[];
    }
    let end = (start + ROWS_PER_PAGE).min(rows.len());
    &rows[start..end]
}

/// Filtered and sorted rows, before pagination.
pub fn filtered_sorted<'a>(reels: &'a [Reel], query: &TableQuery) -> Vec<&'a Reel> {
    let mut rows = filter_reels(reels, &query.filter);
    sort_reels(&mut rows, query.metric, query.order);
    rows
}

/// Build the visible page. A stale page number is clamped so the table never
/// shows an empty page while matching rows exist.
pub fn build_view<'a>(reels: &'a [Reel], query: &TableQuery) -> TableView<'a> {
    let rows = filtered_sorted(reels, query);
    let filtered_count = rows.len();
    let page = clamp_page(query.page, filtered_count);

    TableView {
        rows: paginate(&rows, page).to_vec(),
        page,
        page_count: page_count(filtered_count),
        filtered_count,
    }
}
