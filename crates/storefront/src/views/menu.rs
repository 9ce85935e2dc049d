//! Menu grid view.

use askama::Template;

use crate::catalog::{Catalog, Dish};
use crate::favorites::Favorites;
use crate::filter::FilterState;

/// Dish card display data for templates.
#[derive(Debug, Clone)]
pub struct DishCardView {
    pub id: String,
    pub name: String,
    pub description: String,
    pub badge: String,
    pub price: String,
    pub spice_label: &'static str,
    pub spice_class: &'static str,
    pub image: String,
    pub favorite: bool,
}

impl DishCardView {
    #[must_use]
    pub fn new(dish: &Dish, favorite: bool) -> Self {
        Self {
            id: dish.id.to_string(),
            name: dish.name.clone(),
            description: dish.description.clone(),
            badge: dish.badge.clone(),
            price: dish.price.display(),
            spice_label: dish.spice.label(),
            spice_class: dish.spice.as_str(),
            image: dish.image.clone(),
            favorite,
        }
    }
}

/// Menu grid fragment: one card per visible dish.
#[derive(Template)]
#[template(path = "partials/menu_grid.html")]
pub struct MenuGridTemplate {
    pub dishes: Vec<DishCardView>,
}

impl MenuGridTemplate {
    /// Cards for the dishes passing `filter`, in catalog order.
    #[must_use]
    pub fn new(catalog: &Catalog, filter: &FilterState, favorites: &Favorites) -> Self {
        Self {
            dishes: catalog
                .visible(filter)
                .into_iter()
                .map(|dish| DishCardView::new(dish, favorites.contains(dish.id.as_str())))
                .collect(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ethiopia_core::{DishId, SpiceFilter};

    use super::*;

    #[test]
    fn test_grid_renders_visible_dishes() {
        let filter = FilterState::new(SpiceFilter::Hot, "");
        let grid = MenuGridTemplate::new(&Catalog::house(), &filter, &Favorites::new());
        assert_eq!(grid.dishes.len(), 2);

        let html = grid.render().unwrap();
        assert!(html.contains("Doro Wot"));
        assert!(html.contains("Kitfo"));
        assert!(!html.contains("Kikil"));
        assert!(html.contains("Spice: Hot"));
        assert!(html.contains("$14.50"));
    }

    #[test]
    fn test_favorite_marker() {
        let favorites: Favorites = [DishId::from("tibs")].into_iter().collect();
        let grid = MenuGridTemplate::new(&Catalog::house(), &FilterState::default(), &favorites);
        let tibs = grid.dishes.iter().find(|d| d.id == "tibs").unwrap();
        assert!(tibs.favorite);

        let html = grid.render().unwrap();
        assert_eq!(html.matches("is-fav").count(), 1);
    }

    #[test]
    fn test_empty_state() {
        let filter = FilterState::new(SpiceFilter::All, "pizza");
        let html = MenuGridTemplate::new(&Catalog::house(), &filter, &Favorites::new())
            .render()
            .unwrap();
        assert!(html.contains("No dishes match your search. Try clearing filters."));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = MenuGridTemplate::new(&Catalog::house(), &FilterState::default(), &Favorites::new())
            .render()
            .unwrap();
        assert!(html.contains("Chef&"));
        assert!(!html.contains("Chef's pick"));
    }
}
