//! A filtered view over an immutable account set.

use std::sync::Arc;

use crate::data::account::Account;

/// View over a loaded account set that can narrow the visible rows by a
/// free-text search without modifying the underlying data.
///
/// The visible subsequence always preserves source order. Applying a
/// search recomputes the view from the full source, so repeated calls
/// with the same term produce the same rows.
#[derive(Clone)]
pub struct AccountView {
    /// The underlying immutable account sequence.
    source: Arc<Vec<Account>>,

    /// Row indices that are visible (after filtering).
    visible: Vec<usize>,

    /// The search term the current view was computed from.
    search_term: String,
}

impl AccountView {
    /// Create a view showing every account.
    pub fn new(source: Arc<Vec<Account>>) -> Self {
        let visible = (0..source.len()).collect();
        Self {
            source,
            visible,
            search_term: String::new(),
        }
    }

    /// Recompute the visible rows for a search term.
    ///
    /// A term that is empty after trimming restores the full sequence.
    /// Otherwise a row stays visible iff any of name, email, address, or
    /// gender contains the term as a case-insensitive substring.
    pub fn apply_search(&mut self, term: &str) {
        self.search_term = term.to_string();

        if term.trim().is_empty() {
            self.visible = (0..self.source.len()).collect();
            return;
        }

        let needle = term.to_lowercase();
        self.visible = self
            .source
            .iter()
            .enumerate()
            .filter(|(_, account)| Self::matches(account, &needle))
            .map(|(idx, _)| idx)
            .collect();
    }

    fn matches(account: &Account, needle: &str) -> bool {
        [
            &account.name,
            &account.email,
            &account.address,
            &account.gender,
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(needle))
    }

    /// Restore the unfiltered view.
    pub fn clear_search(&mut self) {
        self.apply_search("");
    }

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.visible.len()
    }

    /// Get a visible row by its position in the filtered sequence.
    pub fn get(&self, index: usize) -> Option<&Account> {
        self.visible.get(index).map(|&idx| &self.source[idx])
    }

    /// Iterate the visible rows in order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> + '_ {
        self.visible.iter().map(move |&idx| &self.source[idx])
    }

    /// The term the current view was computed from.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Total rows in the underlying source, ignoring any filter.
    pub fn total_count(&self) -> usize {
        self.source.len()
    }
}
