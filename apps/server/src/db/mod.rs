//! Data access layer
//!
//! Handlers and services only see [`VetRepository`]; the concrete store is
//! picked once at startup.

pub mod memory;
pub mod vets;

pub use memory::InMemoryVetRepository;
pub use vets::PostgresVetRepository;

use crate::Result;
use async_trait::async_trait;
use petclinic_models::{Page, PageRequest, Vet};

/// Read contract for veterinarian records
#[async_trait]
pub trait VetRepository: Send + Sync {
    /// All vets, ordered by id
    async fn find_all(&self) -> Result<Vec<Vet>>;

    /// One window of the vets ordered by id
    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Vet>>;
}
