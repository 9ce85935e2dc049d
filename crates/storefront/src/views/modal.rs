//! Modal dialog views.
//!
//! Each dialog is its own template extending `modals/base.html`, which lays
//! out the title and body. [`render_modal`] picks the template for a
//! [`ModalKind`] and fills it from the current state.

use askama::Template;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::favorites::Favorites;
use crate::models::UserProfile;
use crate::ui::ModalKind;
use crate::views::cart::CartView;

/// Favorite dish display data for templates.
#[derive(Debug, Clone)]
pub struct FavoriteView {
    pub name: String,
    pub price: String,
}

/// Favorites dialog: the liked dishes that are on the menu.
#[derive(Template)]
#[template(path = "modals/favorites.html")]
pub struct FavoritesModalTemplate {
    /// Whether any favorite is stored, listed or not.
    pub has_favorites: bool,
    pub dishes: Vec<FavoriteView>,
}

impl FavoritesModalTemplate {
    #[must_use]
    pub fn new(catalog: &Catalog, favorites: &Favorites) -> Self {
        Self {
            has_favorites: !favorites.is_empty(),
            dishes: catalog
                .iter()
                .filter(|d| favorites.contains(d.id.as_str()))
                .map(|d| FavoriteView {
                    name: d.name.clone(),
                    price: d.price.display(),
                })
                .collect(),
        }
    }
}

/// Sign-in dialog, pre-filled from the stored profile.
#[derive(Template)]
#[template(path = "modals/sign_in.html")]
pub struct SignInModalTemplate {
    pub name: String,
    pub email: String,
}

impl SignInModalTemplate {
    #[must_use]
    pub fn new(profile: Option<&UserProfile>) -> Self {
        profile.map_or_else(
            || Self {
                name: String::new(),
                email: String::new(),
            },
            |p| Self {
                name: p.name.clone(),
                email: p.email.clone(),
            },
        )
    }
}

/// Booking dialog with date and time inputs.
#[derive(Template)]
#[template(path = "modals/booking.html")]
pub struct BookingModalTemplate {
    /// Earliest selectable date, `YYYY-MM-DD`.
    pub min_date: String,
}

impl BookingModalTemplate {
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_date: chrono::Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }
}

impl Default for BookingModalTemplate {
    fn default() -> Self {
        Self::new()
    }
}

/// "Our story" dialog.
#[derive(Template)]
#[template(path = "modals/story.html")]
pub struct StoryModalTemplate {
    /// Dish names joined for prose, e.g. "Doro Wot, Kikil, Tibs, and Kitfo".
    pub signature_dishes: String,
}

impl StoryModalTemplate {
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let names: Vec<&str> = catalog.iter().map(|d| d.name.as_str()).collect();
        let signature_dishes = match names.split_last() {
            None => String::new(),
            Some((last, [])) => (*last).to_string(),
            Some((last, [only])) => format!("{only} and {last}"),
            Some((last, init)) => format!("{}, and {last}", init.join(", ")),
        };
        Self { signature_dishes }
    }
}

/// Demo checkout confirmation.
#[derive(Template)]
#[template(path = "modals/checkout.html")]
pub struct CheckoutModalTemplate {
    pub cart: CartView,
}

/// Render the dialog for `kind` from the current state.
///
/// # Errors
///
/// Returns an error if the template fails to render.
pub fn render_modal(
    kind: ModalKind,
    catalog: &Catalog,
    cart: &Cart,
    favorites: &Favorites,
    profile: Option<&UserProfile>,
) -> askama::Result<String> {
    match kind {
        ModalKind::Favorites => FavoritesModalTemplate::new(catalog, favorites).render(),
        ModalKind::SignIn => SignInModalTemplate::new(profile).render(),
        ModalKind::Booking => BookingModalTemplate::new().render(),
        ModalKind::Story => StoryModalTemplate::new(catalog).render(),
        ModalKind::Checkout => CheckoutModalTemplate {
            cart: CartView::new(cart, catalog),
        }
        .render(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ethiopia_core::DishId;

    use super::*;

    fn render(kind: ModalKind, cart: &Cart, favorites: &Favorites) -> String {
        render_modal(kind, &Catalog::house(), cart, favorites, None).unwrap()
    }

    #[test]
    fn test_favorites_empty_and_listed() {
        let html = render(ModalKind::Favorites, &Cart::new(), &Favorites::new());
        assert!(html.contains("You have no favorites yet."));

        let favorites: Favorites = ["kitfo", "ghost-dish"].into_iter().map(DishId::from).collect();
        let html = render(ModalKind::Favorites, &Cart::new(), &favorites);
        assert!(html.contains("Your favorites"));
        assert!(html.contains("Kitfo"));
        assert!(html.contains("$14.50"));
        assert!(!html.contains("ghost-dish"));
    }

    #[test]
    fn test_favorites_off_menu_show_empty_list() {
        let favorites: Favorites = ["ghost-dish"].into_iter().map(DishId::from).collect();
        let html = render(ModalKind::Favorites, &Cart::new(), &favorites);
        assert!(html.contains("Your favorites"));
        assert!(!html.contains("You have no favorites yet."));
        assert!(!html.contains("<li>"));
    }

    #[test]
    fn test_sign_in_prefill() {
        let profile = UserProfile::from_form("Hanna", "hanna@example.com").unwrap();
        let html = render_modal(
            ModalKind::SignIn,
            &Catalog::house(),
            &Cart::new(),
            &Favorites::new(),
            Some(&profile),
        )
        .unwrap();
        assert!(html.contains(r#"value="Hanna""#));
        assert!(html.contains(r#"value="hanna@example.com""#));
    }

    #[test]
    fn test_story_lists_signature_dishes() {
        let html = render(ModalKind::Story, &Cart::new(), &Favorites::new());
        assert!(html.contains("Doro Wot, Kikil, Tibs, and Kitfo"));
    }

    #[test]
    fn test_checkout_shows_total() {
        let mut cart = Cart::new();
        cart.add(&DishId::from("tibs"));
        let html = render(ModalKind::Checkout, &cart, &Favorites::new());
        assert!(html.contains("Checkout (demo)"));
        assert!(html.contains("$15.99"));
        assert!(html.contains("Place order"));
    }

    #[test]
    fn test_booking_inputs() {
        let html = render(ModalKind::Booking, &Cart::new(), &Favorites::new());
        assert!(html.contains(r#"type="date""#));
        assert!(html.contains(r#"type="time""#));
    }
}
