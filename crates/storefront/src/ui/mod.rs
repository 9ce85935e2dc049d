//! Presentation layer: the surface port, panel state, user actions and the
//! controller that ties them to the models.

mod action;
mod controller;
mod panels;
mod surface;

pub use action::{Action, ParseActionError};
pub use controller::{ORDER_PLACED_MESSAGE, Storefront};
pub use panels::{ModalKind, Panels};
pub use surface::{Panel, RecordingSurface, Region, Surface};
