//! Fixed-size page windowing over a filtered account view.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::data::account::Account;
use crate::data::account_view::AccountView;

/// Records shown per page unless the caller overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Pages listed on each side of the current page in the index list.
const PAGE_WINDOW: usize = 2;

/// One entry of the page-index list: a clickable page number, or an
/// elided span between two listed pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageItem {
    Page(usize),
    Gap { from: usize, to: usize },
}

/// One page of results plus the navigation metadata needed to render
/// pagination controls. Recomputed on every request, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub items: Vec<Account>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub page_items: Vec<PageItem>,
}

/// Slice the filtered view into a page.
///
/// `requested_page` is 1-based and may be any integer; out-of-range
/// values (zero, negative, past the end) are clamped, never rejected.
pub fn paginate(view: &AccountView, requested_page: i64, page_size: usize) -> PageView {
    let total_items = view.row_count();
    let total_pages = ((total_items + page_size - 1) / page_size).max(1);
    let current_page = requested_page.clamp(1, total_pages as i64) as usize;

    let start = (current_page - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items: Vec<Account> = (start..end).filter_map(|idx| view.get(idx).cloned()).collect();

    PageView {
        items,
        total_items,
        total_pages,
        current_page,
        page_items: page_index_items(current_page, total_pages),
    }
}

/// Build the compact page-index list: always page 1 and the last page,
/// every page within the window around the current page, and one gap
/// marker per elided span, carrying the pages it spans between.
fn page_index_items(current_page: usize, total_pages: usize) -> Vec<PageItem> {
    let mut keep = BTreeSet::new();
    keep.insert(1);
    keep.insert(total_pages);
    let lo = current_page.saturating_sub(PAGE_WINDOW).max(1);
    let hi = (current_page + PAGE_WINDOW).min(total_pages);
    for page in lo..=hi {
        keep.insert(page);
    }

    let mut items = Vec::new();
    let mut prev: Option<usize> = None;
    for &page in &keep {
        if let Some(prev) = prev {
            if page - prev > 1 {
                items.push(PageItem::Gap {
                    from: prev,
                    to: page,
                });
            }
        }
        items.push(PageItem::Page(page));
        prev = Some(page);
    }
    items
}
