//! The storefront controller.
//!
//! [`Storefront`] owns the session state (cart, favorites, filter, panels),
//! the storage adapter and the rendering surface. All mutation goes through
//! [`Storefront::dispatch`]: the action is applied to the model, persisted,
//! and the affected regions are re-rendered.

use askama::Template;
use ethiopia_core::DishId;
use tracing::{debug, info, instrument, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{ActionError, AppError, Result, add_breadcrumb};
use crate::favorites::Favorites;
use crate::filter::FilterState;
use crate::models::{BookingSlot, ContactMessage, UserProfile};
use crate::storage::{KeyValueStore, Storage, keys};
use crate::views::{
    CartItemsTemplate, CartSummaryTemplate, CartView, ContactHintTemplate, CountBadgeTemplate,
    MenuGridTemplate, PageTemplate, render_modal,
};

use super::action::Action;
use super::panels::{ModalKind, Panels};
use super::surface::{Panel, RecordingSurface, Region, Surface};

/// Notification shown after a demo order.
pub const ORDER_PLACED_MESSAGE: &str = "Order placed! (demo)";

/// One user's storefront session.
#[derive(Debug)]
pub struct Storefront<S, R> {
    catalog: Catalog,
    storage: Storage<S>,
    surface: R,
    cart: Cart,
    favorites: Favorites,
    filter: FilterState,
    panels: Panels,
}

impl<S: KeyValueStore, R: Surface> Storefront<S, R> {
    /// Start a session, restoring the cart and favorites from `store`.
    ///
    /// Unreadable stored values fall back to an empty cart or set. Nothing is
    /// rendered until [`Storefront::render_all`] or the first action.
    pub fn new(catalog: Catalog, store: S, surface: R) -> Self {
        let storage = Storage::new(store);
        let cart = Cart::from_lines(storage.read(keys::CART, Vec::new()));
        let favorites: Favorites = storage
            .read::<Vec<DishId>>(keys::FAVORITES, Vec::new())
            .into_iter()
            .collect();

        debug!(
            cart_lines = cart.lines().len(),
            favorites = favorites.count(),
            "storefront session restored"
        );

        Self {
            catalog,
            storage,
            surface,
            cart,
            favorites,
            filter: FilterState::default(),
            panels: Panels::default(),
        }
    }

    /// The menu being served.
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The current cart.
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The liked dish ids.
    pub const fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// The active spice filter and search query.
    pub const fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Which drawer and dialog are open.
    pub const fn panels(&self) -> &Panels {
        &self.panels
    }

    /// The display being rendered to.
    pub const fn surface(&self) -> &R {
        &self.surface
    }

    /// Mutable access to the display.
    pub const fn surface_mut(&mut self) -> &mut R {
        &mut self.surface
    }

    /// The persistence adapter.
    pub const fn storage(&self) -> &Storage<S> {
        &self.storage
    }

    /// Consume the session and return the backend and surface.
    pub fn into_parts(self) -> (S, R) {
        (self.storage.into_inner(), self.surface)
    }

    /// The stored sign-in profile, read fresh from storage.
    pub fn profile(&self) -> Option<UserProfile> {
        self.storage.read(keys::USER, None)
    }

    /// Render every region and sync panel visibility.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render_all(&mut self) -> Result<()> {
        self.render_menu()?;
        self.render_favorites_badge()?;
        self.render_cart()?;
        if let Some(kind) = self.panels.modal() {
            self.render_modal(kind)?;
        }
        self.sync_panels();
        Ok(())
    }

    /// Apply one user action.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Rejected`] when input validation fails; the user
    /// has already been notified through the surface and no state changed.
    /// Returns [`AppError::Render`] if a template fails.
    #[instrument(skip_all, fields(action = action.tag()))]
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action.dish() {
            Some(id) => add_breadcrumb("action", action.tag(), Some(&[("id", id.as_str())])),
            None => add_breadcrumb("action", action.tag(), None),
        }

        match self.apply(action) {
            Err(AppError::Rejected(reason)) => {
                info!(%reason, "action rejected");
                self.surface.notify(&reason.to_string());
                Err(AppError::Rejected(reason))
            }
            other => other,
        }
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Add(id) => {
                self.cart.add(&id);
                info!(id = %id, quantity = self.cart.total_quantity(), "added to cart");
                self.cart_changed()?;
                self.panels.open_cart();
                self.sync_panels();
            }
            Action::Adjust { id, delta } => {
                if self.cart.adjust(id.as_str(), delta) {
                    self.cart_changed()?;
                } else {
                    debug!(id = %id, "no cart line to adjust");
                }
            }
            Action::Remove(id) => {
                if self.cart.remove(id.as_str()) {
                    self.cart_changed()?;
                } else {
                    debug!(id = %id, "no cart line to remove");
                }
            }
            Action::ClearCart => {
                self.cart.clear();
                self.cart_changed()?;
            }
            Action::ToggleFavorite(id) => {
                let favorite = self.favorites.toggle(&id);
                debug!(id = %id, favorite, "favorite toggled");
                self.persist_favorites();
                self.render_favorites_badge()?;
                self.render_menu()?;
                if self.panels.modal() == Some(ModalKind::Favorites) {
                    self.render_modal(ModalKind::Favorites)?;
                }
            }
            Action::Filter(spice) => {
                self.filter.set_spice(spice);
                self.render_menu()?;
            }
            Action::Search(term) => {
                self.filter.set_search(&term);
                self.render_menu()?;
            }
            Action::OpenCart => {
                self.panels.open_cart();
                self.sync_panels();
            }
            Action::CloseCart => {
                self.panels.close_cart();
                self.sync_panels();
            }
            Action::CloseModal => {
                self.panels.close_modal();
                self.sync_panels();
            }
            Action::Backdrop => {
                self.panels.backdrop();
                self.sync_panels();
            }
            Action::ShowFavorites => self.open_modal(ModalKind::Favorites)?,
            Action::OpenSignIn => self.open_modal(ModalKind::SignIn)?,
            Action::OpenBooking => self.open_modal(ModalKind::Booking)?,
            Action::OpenStory => self.open_modal(ModalKind::Story)?,
            Action::SaveProfile { name, email } => {
                let profile = UserProfile::from_form(&name, &email)?;
                if let Err(e) = self.storage.write(keys::USER, &profile) {
                    warn!(error = %e, "failed to persist profile");
                }
                self.panels.close_modal();
                self.sync_panels();
                self.surface.notify(&format!(
                    "Welcome, {}! (stored only on this device)",
                    profile.name
                ));
            }
            Action::RequestBooking { date, time } => {
                let slot = BookingSlot::parse(date.as_deref(), time.as_deref())?;
                info!(%slot, "booking requested");
                self.panels.close_modal();
                self.sync_panels();
                self.surface
                    .notify(&format!("Booking requested for {slot}. (demo only)"));
            }
            Action::Checkout => {
                if self.cart.is_empty() {
                    return Err(ActionError::EmptyCart.into());
                }
                self.open_modal(ModalKind::Checkout)?;
            }
            Action::PlaceOrder => {
                if self.cart.is_empty() {
                    return Err(ActionError::EmptyCart.into());
                }
                let totals = self.cart.totals(&self.catalog);
                info!(total = %totals.total, "order placed");
                self.cart.clear();
                self.cart_changed()?;
                self.panels.close_modal();
                self.sync_panels();
                self.surface.notify(ORDER_PLACED_MESSAGE);
            }
            Action::SubmitContact { name } => {
                let message = ContactMessage::new(name.as_deref());
                let hint = ContactHintTemplate {
                    message: &message.acknowledgement(),
                }
                .render()?;
                self.surface.inject(Region::ContactHint, hint);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn cart_changed(&mut self) -> Result<()> {
        if let Err(e) = self.storage.write(keys::CART, self.cart.lines()) {
            warn!(error = %e, "failed to persist cart");
        }
        self.render_cart()
    }

    fn persist_favorites(&mut self) {
        let ids: Vec<&DishId> = self.favorites.iter().collect();
        if let Err(e) = self.storage.write(keys::FAVORITES, &ids) {
            warn!(error = %e, "failed to persist favorites");
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    fn render_menu(&mut self) -> Result<()> {
        let html = MenuGridTemplate::new(&self.catalog, &self.filter, &self.favorites).render()?;
        self.surface.inject(Region::MenuGrid, html);
        Ok(())
    }

    fn render_favorites_badge(&mut self) -> Result<()> {
        let html = CountBadgeTemplate {
            count: self.favorites.count(),
        }
        .render()?;
        self.surface.inject(Region::FavoritesCount, html);
        Ok(())
    }

    fn render_cart(&mut self) -> Result<()> {
        let view = CartView::new(&self.cart, &self.catalog);
        let items = CartItemsTemplate { cart: &view }.render()?;
        let summary = CartSummaryTemplate { cart: &view }.render()?;
        let count = CountBadgeTemplate {
            count: usize::try_from(self.cart.total_quantity()).unwrap_or(usize::MAX),
        }
        .render()?;

        self.surface.inject(Region::CartItems, items);
        self.surface.inject(Region::CartSummary, summary);
        self.surface.inject(Region::CartCount, count);

        if self.panels.modal() == Some(ModalKind::Checkout) {
            self.render_modal(ModalKind::Checkout)?;
        }
        Ok(())
    }

    fn render_modal(&mut self, kind: ModalKind) -> Result<()> {
        let profile = match kind {
            ModalKind::SignIn => self.profile(),
            _ => None,
        };
        let html = render_modal(
            kind,
            &self.catalog,
            &self.cart,
            &self.favorites,
            profile.as_ref(),
        )?;
        self.surface.inject(Region::Modal, html);
        Ok(())
    }

    fn open_modal(&mut self, kind: ModalKind) -> Result<()> {
        self.render_modal(kind)?;
        self.panels.open_modal(kind);
        self.sync_panels();
        Ok(())
    }

    fn sync_panels(&mut self) {
        self.surface
            .set_open(Panel::CartDrawer, self.panels.cart_open());
        self.surface
            .set_open(Panel::Modal, self.panels.modal().is_some());
        self.surface
            .set_open(Panel::Overlay, self.panels.overlay_open());
    }
}

impl<S: KeyValueStore> Storefront<S, RecordingSurface> {
    /// Render the full page from the recorded regions.
    ///
    /// # Errors
    ///
    /// Returns an error if the page template fails to render.
    pub fn render_page(&self) -> Result<String> {
        Ok(PageTemplate::new(&self.surface, &self.filter).render()?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ethiopia_core::SpiceFilter;

    use super::*;
    use crate::storage::MemoryStore;

    type Session = Storefront<MemoryStore, RecordingSurface>;

    fn session() -> Session {
        session_with(MemoryStore::new())
    }

    fn session_with(store: MemoryStore) -> Session {
        let mut storefront = Storefront::new(Catalog::house(), store, RecordingSurface::new());
        storefront.render_all().unwrap();
        storefront
    }

    fn run(storefront: &mut Session, line: &str) -> Result<()> {
        storefront.dispatch(line.parse().unwrap())
    }

    #[test]
    fn test_render_all_fills_every_region_but_hint_and_modal() {
        let storefront = session();
        let surface = storefront.surface();
        assert_eq!(surface.region(Region::CartCount).map(str::trim), Some("0"));
        assert_eq!(surface.region(Region::FavoritesCount).map(str::trim), Some("0"));
        assert!(surface.region(Region::MenuGrid).unwrap().contains("Tibs"));
        assert!(surface.region(Region::Modal).is_none());
        assert!(surface.region(Region::ContactHint).is_none());
    }

    #[test]
    fn test_add_persists_renders_and_opens_cart() {
        let mut storefront = session();
        run(&mut storefront, "add tibs").unwrap();

        assert_eq!(
            storefront.storage().store().get(keys::CART),
            Some(r#"[{"id":"tibs","qty":1}]"#)
        );
        let surface = storefront.surface();
        assert_eq!(surface.region(Region::CartCount).map(str::trim), Some("1"));
        assert!(surface.region(Region::CartSummary).unwrap().contains("$15.99"));
        assert!(surface.is_open(Panel::CartDrawer));
        assert!(surface.is_open(Panel::Overlay));
    }

    #[test]
    fn test_restores_cart_and_favorites() {
        let store = MemoryStore::new()
            .with_entry(keys::CART, r#"[{"id":"kikil","qty":2}]"#)
            .with_entry(keys::FAVORITES, r#"["kitfo"]"#);
        let storefront = session_with(store);

        assert_eq!(storefront.cart().total_quantity(), 2);
        assert!(storefront.favorites().contains("kitfo"));
        let grid = storefront.surface().region(Region::MenuGrid).unwrap();
        assert_eq!(grid.matches("is-fav").count(), 1);
    }

    #[test]
    fn test_corrupt_storage_starts_empty() {
        let store = MemoryStore::new()
            .with_entry(keys::CART, "not json")
            .with_entry(keys::FAVORITES, "{}");
        let storefront = session_with(store);
        assert!(storefront.cart().is_empty());
        assert_eq!(storefront.favorites().count(), 0);
    }

    #[test]
    fn test_toggle_favorite_rerenders_badge_and_menu() {
        let mut storefront = session();
        let menu_renders = storefront.surface().render_count(Region::MenuGrid);

        run(&mut storefront, "favorite kitfo").unwrap();
        assert_eq!(
            storefront.surface().region(Region::FavoritesCount).map(str::trim),
            Some("1")
        );
        assert_eq!(
            storefront.surface().render_count(Region::MenuGrid),
            menu_renders + 1
        );
        assert_eq!(
            storefront.storage().store().get(keys::FAVORITES),
            Some(r#"["kitfo"]"#)
        );
    }

    #[test]
    fn test_filter_and_search_rerender_menu() {
        let mut storefront = session();
        run(&mut storefront, "filter hot").unwrap();
        assert_eq!(storefront.filter().spice(), SpiceFilter::Hot);
        let grid = storefront.surface().region(Region::MenuGrid).unwrap();
        assert!(grid.contains("Kitfo"));
        assert!(!grid.contains("Kikil"));

        run(&mut storefront, "search  pizza ").unwrap();
        assert_eq!(storefront.filter().search_term(), "pizza");
        let grid = storefront.surface().region(Region::MenuGrid).unwrap();
        assert!(grid.contains("No dishes match"));
    }

    #[test]
    fn test_checkout_empty_cart_is_rejected() {
        let mut storefront = session();
        let err = run(&mut storefront, "checkout").unwrap_err();
        assert!(matches!(err, AppError::Rejected(ActionError::EmptyCart)));
        assert_eq!(
            storefront.surface().last_notification(),
            Some("Your cart is empty.")
        );
        assert_eq!(storefront.panels().modal(), None);
    }

    #[test]
    fn test_checkout_then_place_order() {
        let mut storefront = session();
        run(&mut storefront, "add doro-wot").unwrap();
        run(&mut storefront, "checkout").unwrap();
        assert_eq!(storefront.panels().modal(), Some(ModalKind::Checkout));
        assert!(storefront.surface().is_open(Panel::Modal));

        run(&mut storefront, "place-order").unwrap();
        assert!(storefront.cart().is_empty());
        assert_eq!(storefront.panels().modal(), None);
        assert_eq!(
            storefront.surface().last_notification(),
            Some(ORDER_PLACED_MESSAGE)
        );
        assert_eq!(storefront.storage().store().get(keys::CART), Some("[]"));
    }

    #[test]
    fn test_sign_in_saves_profile() {
        let mut storefront = session();
        run(&mut storefront, "sign-in").unwrap();
        assert_eq!(storefront.panels().modal(), Some(ModalKind::SignIn));

        run(&mut storefront, "sign-in Hanna hanna@example.com").unwrap();
        assert_eq!(storefront.panels().modal(), None);
        assert_eq!(
            storefront.surface().last_notification(),
            Some("Welcome, Hanna! (stored only on this device)")
        );
        assert_eq!(storefront.profile().unwrap().name, "Hanna");

        run(&mut storefront, "sign-in").unwrap();
        let modal = storefront.surface().region(Region::Modal).unwrap();
        assert!(modal.contains(r#"value="Hanna""#));
    }

    #[test]
    fn test_sign_in_blank_name_rejected_without_saving() {
        let mut storefront = session();
        run(&mut storefront, "sign-in").unwrap();
        let err = storefront
            .dispatch(Action::SaveProfile {
                name: "  ".to_string(),
                email: String::new(),
            })
            .unwrap_err();

        assert!(err.is_rejection());
        assert_eq!(
            storefront.surface().last_notification(),
            Some("Please enter your name.")
        );
        assert!(storefront.profile().is_none());
        assert_eq!(storefront.panels().modal(), Some(ModalKind::SignIn));
    }

    #[test]
    fn test_booking() {
        let mut storefront = session();
        run(&mut storefront, "booking").unwrap();
        assert!(run(&mut storefront, "book 2026-11-02").is_err());
        assert_eq!(
            storefront.surface().last_notification(),
            Some("Please choose both a date and time.")
        );

        run(&mut storefront, "book 2026-11-02 19:30").unwrap();
        assert_eq!(
            storefront.surface().last_notification(),
            Some("Booking requested for 2026-11-02 at 19:30. (demo only)")
        );
        assert!(!storefront.surface().is_open(Panel::Modal));
    }

    #[test]
    fn test_contact_hint() {
        let mut storefront = session();
        run(&mut storefront, "contact").unwrap();
        assert_eq!(
            storefront.surface().region(Region::ContactHint).map(str::trim),
            Some("Thank you, Guest! We received your message (demo only).")
        );
    }

    #[test]
    fn test_backdrop_closes_cart_and_modal() {
        let mut storefront = session();
        run(&mut storefront, "cart").unwrap();
        run(&mut storefront, "story").unwrap();
        assert!(storefront.surface().is_open(Panel::CartDrawer));
        assert!(storefront.surface().is_open(Panel::Modal));

        run(&mut storefront, "backdrop").unwrap();
        for panel in [Panel::CartDrawer, Panel::Modal, Panel::Overlay] {
            assert!(!storefront.surface().is_open(panel));
        }
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut store = MemoryStore::new();
        store.set_reject_writes(true);
        let mut storefront = session_with(store);

        run(&mut storefront, "add kitfo").unwrap();
        assert_eq!(storefront.cart().total_quantity(), 1);
        assert!(storefront.storage().store().get(keys::CART).is_none());
    }

    #[test]
    fn test_render_page() {
        let mut storefront = session();
        run(&mut storefront, "add tibs").unwrap();
        let page = storefront.render_page().unwrap();
        assert!(page.contains("<!DOCTYPE html>"));
        assert!(page.contains(r#"class="drawer is-open""#));
        assert!(page.contains("1 item in cart"));
    }
}
