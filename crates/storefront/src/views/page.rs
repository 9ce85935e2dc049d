//! Full page document and the contact hint.

use askama::Template;
use ethiopia_core::SpiceFilter;

use crate::filter::FilterState;
use crate::filters;
use crate::ui::{Panel, RecordingSurface, Region};

/// Spice filter button display data.
#[derive(Debug, Clone)]
pub struct FilterButtonView {
    pub value: &'static str,
    pub label: &'static str,
    pub active: bool,
}

impl FilterButtonView {
    /// One button per filter, with the selected one marked active.
    #[must_use]
    pub fn all(selected: SpiceFilter) -> Vec<Self> {
        [
            (SpiceFilter::All, "All"),
            (SpiceFilter::Mild, "Mild"),
            (SpiceFilter::Medium, "Medium"),
            (SpiceFilter::Hot, "Hot"),
        ]
        .into_iter()
        .map(|(filter, label)| Self {
            value: filter.as_str(),
            label,
            active: filter == selected,
        })
        .collect()
    }
}

/// Hint shown under the contact form.
#[derive(Template)]
#[template(path = "partials/contact_hint.html")]
pub struct ContactHintTemplate<'a> {
    pub message: &'a str,
}

/// The whole page, assembled from already rendered regions.
#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub filters: Vec<FilterButtonView>,
    pub search_term: String,
    pub menu_grid: String,
    pub cart_items: String,
    pub cart_summary: String,
    pub cart_count: String,
    pub favorites_count: String,
    pub modal: String,
    pub contact_hint: String,
    pub cart_open: bool,
    pub modal_open: bool,
    pub overlay_open: bool,
}

impl PageTemplate {
    /// Compose the page from the latest state of `surface`.
    #[must_use]
    pub fn new(surface: &RecordingSurface, filter: &FilterState) -> Self {
        let region = |r: Region| surface.region(r).unwrap_or_default().to_string();
        Self {
            filters: FilterButtonView::all(filter.spice()),
            search_term: filter.search_term().to_string(),
            menu_grid: region(Region::MenuGrid),
            cart_items: region(Region::CartItems),
            cart_summary: region(Region::CartSummary),
            cart_count: region(Region::CartCount),
            favorites_count: region(Region::FavoritesCount),
            modal: region(Region::Modal),
            contact_hint: region(Region::ContactHint),
            cart_open: surface.is_open(Panel::CartDrawer),
            modal_open: surface.is_open(Panel::Modal),
            overlay_open: surface.is_open(Panel::Overlay),
        }
    }
}
