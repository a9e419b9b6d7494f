use crate::api::handlers::vets;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn vet_routes() -> Router<AppState> {
    Router::new()
        // Paginated HTML page
        .route("/vets.html", get(vets::show_vet_list))
        // Full JSON listing
        .route("/vets", get(vets::show_resources_vet_list))
}
