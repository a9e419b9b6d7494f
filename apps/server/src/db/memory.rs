//! In-process vet repository.
//!
//! Serves the clinic's reference vets when no database is configured.

use super::VetRepository;
use crate::Result;
use async_trait::async_trait;
use petclinic_models::{Page, PageRequest, Specialty, Vet};

pub struct InMemoryVetRepository {
    vets: Vec<Vet>,
}

impl InMemoryVetRepository {
    /// Vets are stored ordered by id regardless of input order.
    pub fn new(mut vets: Vec<Vet>) -> Self {
        vets.sort_by_key(|v| v.id);
        Self { vets }
    }

    /// The six reference vets the clinic ships with
    pub fn seeded() -> Self {
        let radiology = Specialty::new(1, "radiology");
        let surgery = Specialty::new(2, "surgery");
        let dentistry = Specialty::new(3, "dentistry");

        Self::new(vec![
            Vet::new(1, "James", "Carter"),
            Vet::new(2, "Helen", "Leary").with_specialty(radiology.clone()),
            Vet::new(3, "Linda", "Douglas")
                .with_specialty(surgery.clone())
                .with_specialty(dentistry),
            Vet::new(4, "Rafael", "Ortega").with_specialty(surgery),
            Vet::new(5, "Henry", "Stevens").with_specialty(radiology),
            Vet::new(6, "Sharon", "Jenkins"),
        ])
    }

    pub fn len(&self) -> usize {
        self.vets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vets.is_empty()
    }
}

#[async_trait]
impl VetRepository for InMemoryVetRepository {
    async fn find_all(&self) -> Result<Vec<Vet>> {
        Ok(self.vets.clone())
    }

    async fn find_all_paged(&self, request: PageRequest) -> Result<Page<Vet>> {
        Ok(Page::from_slice(&self.vets, request))
    }
}
