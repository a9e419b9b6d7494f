//! Petclinic vet listing service
//!
//! Serves the clinic's veterinarians as a paginated HTML page
//! (`/vets.html`) and as a JSON document (`/vets`).

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod services;
pub mod state;
pub mod views;

pub use error::{Error, Result};
