//! Petclinic domain models
//!
//! Veterinarians, their specialties, and the page window used to list them.
//! No persistence or validation - just data representation.

pub mod page;
pub mod vet;

pub use page::{Page, PageRequest};
pub use vet::{Specialty, Vet, Vets};
