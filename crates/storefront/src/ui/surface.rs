//! Port to the rendering surface.
//!
//! The controller never touches a concrete UI. It hands rendered markup to a
//! [`Surface`] per named [`Region`], flips [`Panel`] visibility, and raises
//! blocking notifications.

use std::collections::{BTreeMap, BTreeSet};

/// A region of the page whose markup is replaced wholesale on re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// The dish cards.
    MenuGrid,
    /// Lines inside the cart drawer.
    CartItems,
    /// Item count, subtotal, delivery and total under the cart lines.
    CartSummary,
    /// Header badge with the cart quantity.
    CartCount,
    /// Header badge with the number of favorites.
    FavoritesCount,
    /// Title and body of the modal dialog.
    Modal,
    /// Hint text under the contact form.
    ContactHint,
}

impl Region {
    /// Every region, in page order.
    pub const ALL: [Self; 7] = [
        Self::MenuGrid,
        Self::CartItems,
        Self::CartSummary,
        Self::CartCount,
        Self::FavoritesCount,
        Self::Modal,
        Self::ContactHint,
    ];

    /// DOM element id of the region on the page.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::MenuGrid => "menuGrid",
            Self::CartItems => "cartItems",
            Self::CartSummary => "cartSummary",
            Self::CartCount => "cartCount",
            Self::FavoritesCount => "favoritesCount",
            Self::Modal => "modalContent",
            Self::ContactHint => "contactHint",
        }
    }
}

/// A panel that can be shown or hidden independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Panel {
    CartDrawer,
    Modal,
    Overlay,
}

/// Rendering surface the controller drives.
pub trait Surface {
    /// Replace the markup of `region`.
    fn inject(&mut self, region: Region, markup: String);

    /// Show or hide `panel`.
    fn set_open(&mut self, panel: Panel, open: bool);

    /// Show a blocking notification to the user.
    fn notify(&mut self, message: &str);
}

impl<T: Surface + ?Sized> Surface for &mut T {
    fn inject(&mut self, region: Region, markup: String) {
        (**self).inject(region, markup);
    }

    fn set_open(&mut self, panel: Panel, open: bool) {
        (**self).set_open(panel, open);
    }

    fn notify(&mut self, message: &str) {
        (**self).notify(message);
    }
}

/// Surface that keeps the latest state of every region in memory.
///
/// Used by tests to observe what the user would see, and by the CLI to
/// assemble the full page.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    regions: BTreeMap<Region, String>,
    renders: BTreeMap<Region, usize>,
    open: BTreeSet<Panel>,
    notifications: Vec<String>,
}

impl RecordingSurface {
    /// An empty surface with every panel closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest markup injected into `region`.
    #[must_use]
    pub fn region(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(String::as_str)
    }

    /// How many times `region` has been rendered.
    #[must_use]
    pub fn render_count(&self, region: Region) -> usize {
        self.renders.get(&region).copied().unwrap_or(0)
    }

    /// Whether `panel` is currently shown.
    #[must_use]
    pub fn is_open(&self, panel: Panel) -> bool {
        self.open.contains(&panel)
    }

    /// Every notification raised so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> &[String] {
        &self.notifications
    }

    /// The most recent notification.
    #[must_use]
    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(String::as_str)
    }

    /// Drain pending notifications.
    pub fn take_notifications(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notifications)
    }
}

impl Surface for RecordingSurface {
    fn inject(&mut self, region: Region, markup: String) {
        *self.renders.entry(region).or_insert(0) += 1;
        self.regions.insert(region, markup);
    }

    fn set_open(&mut self, panel: Panel, open: bool) {
        if open {
            self.open.insert(panel);
        } else {
            self.open.remove(&panel);
        }
    }

    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_owned());
    }
}
