//! User interactions as data.
//!
//! Every click, keystroke or form submission becomes one [`Action`] handed to
//! [`Storefront::dispatch`](super::Storefront::dispatch). Actions also parse
//! from a single line of text so the interactive shell and tests share one
//! grammar:
//!
//! ```text
//! add tibs                 adjust tibs -1           remove tibs
//! clear                    favorite kitfo           filter hot
//! search beef stew         search                   cart | close-cart
//! close | backdrop         favorites                sign-in
//! sign-in Hanna T hanna@example.com                 booking
//! book 2026-11-02 19:30    story                    checkout
//! place-order              contact Meron
//! ```

use std::str::FromStr;

use ethiopia_core::{DishId, SpiceFilter, SpiceParseError};
use thiserror::Error;

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add one of a dish to the cart and open the cart.
    Add(DishId),
    /// Change a cart line's quantity by a signed delta.
    Adjust { id: DishId, delta: i32 },
    /// Remove a cart line.
    Remove(DishId),
    /// Empty the cart.
    ClearCart,
    /// Flip a dish's favorite marker.
    ToggleFavorite(DishId),
    /// Select a spice filter.
    Filter(SpiceFilter),
    /// Replace the search term (trimmed; empty clears it).
    Search(String),
    OpenCart,
    CloseCart,
    CloseModal,
    /// Click on the backdrop overlay.
    Backdrop,
    /// Show the favorites dialog.
    ShowFavorites,
    /// Show the sign-in dialog.
    OpenSignIn,
    /// Submit the sign-in dialog.
    SaveProfile { name: String, email: String },
    /// Show the booking dialog.
    OpenBooking,
    /// Submit the booking dialog.
    RequestBooking {
        date: Option<String>,
        time: Option<String>,
    },
    /// Show the story dialog.
    OpenStory,
    /// Show the checkout dialog.
    Checkout,
    /// Confirm the checkout dialog.
    PlaceOrder,
    /// Submit the contact form.
    SubmitContact { name: Option<String> },
}

impl Action {
    /// Short name used in logs and breadcrumbs.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Adjust { .. } => "adjust",
            Self::Remove(_) => "remove",
            Self::ClearCart => "clear",
            Self::ToggleFavorite(_) => "favorite",
            Self::Filter(_) => "filter",
            Self::Search(_) => "search",
            Self::OpenCart => "cart",
            Self::CloseCart => "close-cart",
            Self::CloseModal => "close",
            Self::Backdrop => "backdrop",
            Self::ShowFavorites => "favorites",
            Self::OpenSignIn => "sign-in",
            Self::SaveProfile { .. } => "save-profile",
            Self::OpenBooking => "booking",
            Self::RequestBooking { .. } => "book",
            Self::OpenStory => "story",
            Self::Checkout => "checkout",
            Self::PlaceOrder => "place-order",
            Self::SubmitContact { .. } => "contact",
        }
    }

    /// The dish this action targets, if any.
    #[must_use]
    pub const fn dish(&self) -> Option<&DishId> {
        match self {
            Self::Add(id)
            | Self::Adjust { id, .. }
            | Self::Remove(id)
            | Self::ToggleFavorite(id) => Some(id),
            _ => None,
        }
    }
}

/// Errors from parsing an action line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseActionError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("invalid quantity change: {0}")]
    InvalidDelta(String),
    #[error(transparent)]
    InvalidSpice(#[from] SpiceParseError),
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(c, r)| (c, r.trim()));
        let mut args = rest.split_whitespace();

        let action = match command.to_ascii_lowercase().as_str() {
            "" => return Err(ParseActionError::Empty),
            "add" => Self::Add(dish_arg(args.next(), "add")?),
            "adjust" | "qty" => {
                let id = dish_arg(args.next(), "adjust")?;
                let raw = args.next().ok_or(ParseActionError::MissingArgument {
                    command: "adjust",
                    argument: "delta",
                })?;
                let delta = raw
                    .parse::<i32>()
                    .map_err(|_| ParseActionError::InvalidDelta(raw.to_owned()))?;
                Self::Adjust { id, delta }
            }
            "remove" => Self::Remove(dish_arg(args.next(), "remove")?),
            "clear" => Self::ClearCart,
            "favorite" | "fav" => Self::ToggleFavorite(dish_arg(args.next(), "favorite")?),
            "filter" => Self::Filter(args.next().unwrap_or("all").parse()?),
            "search" => Self::Search(rest.to_owned()),
            "cart" => Self::OpenCart,
            "close-cart" => Self::CloseCart,
            "close" => Self::CloseModal,
            "backdrop" => Self::Backdrop,
            "favorites" => Self::ShowFavorites,
            "sign-in" | "signin" if rest.is_empty() => Self::OpenSignIn,
            "sign-in" | "signin" => {
                let words: Vec<&str> = args.collect();
                let (name, email) = match words.split_last() {
                    Some((last, init)) if last.contains('@') => (init.join(" "), (*last).to_owned()),
                    _ => (words.join(" "), String::new()),
                };
                Self::SaveProfile { name, email }
            }
            "booking" => Self::OpenBooking,
            "book" => Self::RequestBooking {
                date: args.next().map(str::to_owned),
                time: args.next().map(str::to_owned),
            },
            "story" => Self::OpenStory,
            "checkout" => Self::Checkout,
            "place-order" | "order" => Self::PlaceOrder,
            "contact" => Self::SubmitContact {
                name: Some(rest.to_owned()).filter(|n| !n.is_empty()),
            },
            _ => return Err(ParseActionError::UnknownCommand(command.to_owned())),
        };
        Ok(action)
    }
}

fn dish_arg(arg: Option<&str>, command: &'static str) -> Result<DishId, ParseActionError> {
    arg.map(DishId::from).ok_or(ParseActionError::MissingArgument {
        command,
        argument: "dish id",
    })
}
