//! Vet listing service - pagination policy and view model assembly.

use crate::{db::VetRepository, Result};
use petclinic_models::{PageRequest, Vet, Vets};
use serde::Serialize;
use std::sync::Arc;

/// Model behind the `vets/vetList` view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VetListModel {
    pub list_vets: Vec<Vet>,
    /// 1-based page actually served
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    /// Numbered links shown around the current page
    pub page_links: Vec<u32>,
    pub has_previous: bool,
    pub has_next: bool,
}

/// How many numbered links are shown on each side of the current page
const PAGE_LINK_RADIUS: u32 = 5;

/// Page numbers within [`PAGE_LINK_RADIUS`] of `current_page`, clamped to
/// `1..=total_pages`. Empty when `current_page` is past the last page.
pub fn page_window(current_page: u32, total_pages: u32) -> Vec<u32> {
    let start = current_page.saturating_sub(PAGE_LINK_RADIUS).max(1);
    let end = current_page.saturating_add(PAGE_LINK_RADIUS).min(total_pages);
    (start..=end).collect()
}

/// Resolves the raw `page` query value to a 1-based page number.
///
/// Missing, empty or non-numeric input means page 1; zero and negative
/// values are clamped to 1 and anything past `i32::MAX` to `i32::MAX`.
pub fn resolve_page(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .map(|n| n.clamp(1, i64::from(i32::MAX)) as u32)
        .unwrap_or(1)
}

pub struct VetService {
    repo: Arc<dyn VetRepository>,
    page_size: usize,
}

impl VetService {
    pub fn new(repo: Arc<dyn VetRepository>, page_size: usize) -> Self {
        Self {
            repo,
            page_size: page_size.max(1),
        }
    }

    /// One page of vets for the HTML listing. `page` is 1-based and at least 1.
    pub async fn list_page(&self, page: u32) -> Result<VetListModel> {
        let current_page = page.max(1);
        let request = PageRequest::of((current_page - 1) as usize, self.page_size);

        let paginated = self.repo.find_all_paged(request).await?;
        let total_pages = paginated.total_pages();
        let total_items = paginated.total_elements();
        let has_previous = paginated.has_previous();
        let has_next = paginated.has_next();

        tracing::debug!(
            current_page,
            total_pages,
            total_items,
            returned = paginated.number_of_elements(),
            "Listed vet page"
        );

        Ok(VetListModel {
            list_vets: paginated.into_content(),
            current_page,
            total_pages,
            total_items,
            page_links: page_window(current_page, total_pages),
            has_previous,
            has_next,
        })
    }

    /// Every vet, in repository order, for the JSON listing
    pub async fn list_all(&self) -> Result<Vets> {
        let vets = self.repo.find_all().await?;
        tracing::debug!(count = vets.len(), "Listed all vets");
        Ok(Vets::from(vets))
    }
}
