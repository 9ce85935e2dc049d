//! The fixed menu.
//!
//! The catalog is built once at startup and never mutated or persisted. It is
//! the lookup table shared by the cart (prices, names) and favorites
//! (listing), and the enumeration source for everything the menu shows.

use ethiopia_core::{CurrencyCode, DishId, Price, SpiceLevel};

use crate::filter::FilterState;

/// A sellable dish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dish {
    /// Stable identifier.
    pub id: DishId,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Heat level.
    pub spice: SpiceLevel,
    /// Short tag shown on the card (e.g. "Chef's pick").
    pub badge: String,
    /// Image path; empty when the dish has no picture.
    pub image: String,
}

/// Ordered, immutable list of dishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// Build a catalog from dishes in display order.
    ///
    /// Later dishes with an id already present are ignored so ids stay unique.
    #[must_use]
    pub fn new(dishes: Vec<Dish>) -> Self {
        let mut unique: Vec<Dish> = Vec::with_capacity(dishes.len());
        for dish in dishes {
            if unique.iter().any(|d| d.id == dish.id) {
                tracing::warn!(id = %dish.id, "duplicate dish id ignored");
                continue;
            }
            unique.push(dish);
        }
        Self { dishes: unique }
    }

    /// The restaurant's four signature dishes.
    #[must_use]
    pub fn house() -> Self {
        Self::new(vec![
            house_dish(
                "doro-wot",
                "Doro Wot",
                "Slow-cooked chicken stew with berbere, served with injera and soft-boiled egg.",
                1250,
                SpiceLevel::Hot,
                "Chef's pick",
            ),
            house_dish(
                "kikil",
                "Kikil",
                "Comforting bone-in beef soup with potatoes, carrots, and warming spices.",
                1000,
                SpiceLevel::Mild,
                "Comfort bowl",
            ),
            house_dish(
                "tibs",
                "Tibs",
                "Sizzling pan-fried beef cubes with onions, peppers, and rosemary.",
                1300,
                SpiceLevel::Medium,
                "Sizzling plate",
            ),
            house_dish(
                "kitfo",
                "Kitfo",
                "Finely minced beef with spiced clarified butter and mitmita, served with gomen.",
                1450,
                SpiceLevel::Hot,
                "For spice lovers",
            ),
        ])
    }

    /// Look up a dish by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id.as_str() == id)
    }

    /// Whether a dish with this id exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Dishes in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    /// Number of dishes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Whether the catalog has no dishes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Dishes passing `filter`, in catalog order.
    #[must_use]
    pub fn visible(&self, filter: &FilterState) -> Vec<&Dish> {
        self.dishes.iter().filter(|d| filter.matches(d)).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::house()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}

fn house_dish(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    spice: SpiceLevel,
    badge: &str,
) -> Dish {
    Dish {
        id: DishId::from(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Price::from_cents(cents, CurrencyCode::USD),
        spice,
        badge: badge.to_owned(),
        image: format!("images/{id}.jpg"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_house_menu_order() {
        let catalog = Catalog::house();
        let ids: Vec<&str> = catalog.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["doro-wot", "kikil", "tibs", "kitfo"]);
    }

    #[test]
    fn test_house_prices() {
        let catalog = Catalog::house();
        assert_eq!(catalog.get("tibs").unwrap().price.display(), "$13.00");
        assert_eq!(catalog.get("doro-wot").unwrap().price.display(), "$12.50");
        assert_eq!(catalog.get("kitfo").unwrap().spice, SpiceLevel::Hot);
        assert_eq!(catalog.get("kikil").unwrap().image, "images/kikil.jpg");
    }

    #[test]
    fn test_unknown_lookup() {
        let catalog = Catalog::house();
        assert!(catalog.get("injera-pizza").is_none());
        assert!(!catalog.contains("injera-pizza"));
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut second = house_dish("tibs", "Other", "", 100, SpiceLevel::Mild, "");
        second.image = String::new();
        let first = house_dish("tibs", "Tibs", "", 1300, SpiceLevel::Medium, "");
        let catalog = Catalog::new(vec![first, second]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("tibs").unwrap().name, "Tibs");
    }

    #[test]
    fn test_default_filter_shows_everything() {
        let catalog = Catalog::house();
        let visible = catalog.visible(&FilterState::default());
        assert_eq!(visible.len(), catalog.len());
    }
}
