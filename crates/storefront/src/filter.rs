//! Menu filtering by spice level and free-text search.

use ethiopia_core::SpiceFilter;

use crate::catalog::Dish;

/// Current menu filter. Process-local, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    spice: SpiceFilter,
    search_term: String,
}

impl FilterState {
    /// Filter with the given spice selection and search input.
    #[must_use]
    pub fn new(spice: SpiceFilter, search: &str) -> Self {
        let mut state = Self {
            spice,
            search_term: String::new(),
        };
        state.set_search(search);
        state
    }

    /// Selected spice filter.
    #[must_use]
    pub const fn spice(&self) -> SpiceFilter {
        self.spice
    }

    /// Trimmed search term; empty when no search is active.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Select a spice filter.
    pub const fn set_spice(&mut self, spice: SpiceFilter) {
        self.spice = spice;
    }

    /// Replace the search term with the trimmed input.
    pub fn set_search(&mut self, raw: &str) {
        raw.trim().clone_into(&mut self.search_term);
    }

    /// Whether `dish` passes the spice filter and matches the search term.
    ///
    /// The term matches case-insensitively anywhere in the name or description.
    #[must_use]
    pub fn matches(&self, dish: &Dish) -> bool {
        if !self.spice.admits(dish.spice) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let term = self.search_term.to_lowercase();
        dish.name.to_lowercase().contains(&term) || dish.description.to_lowercase().contains(&term)
    }
}
