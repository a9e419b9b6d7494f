//! Business logic layer
//!
//! Services sit between the HTTP handlers and the repositories.

pub mod vets;

pub use vets::{page_window, resolve_page, VetListModel, VetService};
