//! Visibility of the cart drawer, modal dialog and backdrop overlay.
//!
//! The three are independent: a modal may open over an open cart and both
//! stay open. Opening either one shows the overlay; closing either one hides
//! it. A backdrop click closes everything.

/// Which dialog the modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    Favorites,
    SignIn,
    Booking,
    Story,
    Checkout,
}

/// Current panel state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panels {
    cart_open: bool,
    modal: Option<ModalKind>,
    overlay_open: bool,
}

impl Panels {
    /// Whether the cart drawer is open.
    #[must_use]
    pub const fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// The dialog currently shown, if any.
    #[must_use]
    pub const fn modal(&self) -> Option<ModalKind> {
        self.modal
    }

    /// Whether the backdrop overlay is shown.
    #[must_use]
    pub const fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub const fn open_cart(&mut self) {
        self.cart_open = true;
        self.overlay_open = true;
    }

    pub const fn close_cart(&mut self) {
        self.cart_open = false;
        self.overlay_open = false;
    }

    /// Show `kind`, replacing any dialog already open.
    pub const fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(kind);
        self.overlay_open = true;
    }

    pub const fn close_modal(&mut self) {
        self.modal = None;
        self.overlay_open = false;
    }

    /// Backdrop click: close the cart and the modal.
    pub const fn backdrop(&mut self) {
        self.close_cart();
        self.close_modal();
    }
}
