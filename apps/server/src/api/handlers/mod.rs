pub mod health;
pub mod vets;
