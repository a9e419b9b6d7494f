pub mod vets;

pub use vets::vet_routes;
