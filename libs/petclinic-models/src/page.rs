//! Page windows over ordered collections
//!
//! Requests are zero-based (`page_number = 0` is the first page); the
//! 1-based numbering shown to users lives in the web layer.

use serde::{Deserialize, Serialize};

/// A request for one window of an ordered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page_number: usize,
    page_size: usize,
}

impl PageRequest {
    /// Creates a request for the zero-based `page_number`. A size of 0 is raised to 1.
    pub fn of(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size: page_size.max(1),
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first element of this page within the whole collection
    pub fn offset(&self) -> usize {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// One window of an ordered collection plus totals for the whole collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Builds a page from its content and the total size of the collection.
    ///
    /// A non-empty last page never reports fewer elements than it holds: when
    /// `offset + page_size` runs past `total_elements`, the total is taken
    /// from `offset + content.len()`.
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        let offset = request.offset() as u64;
        let total_elements = if !content.is_empty()
            && offset.saturating_add(request.page_size() as u64) > total_elements
        {
            offset.saturating_add(content.len() as u64)
        } else {
            total_elements
        };

        Self {
            content,
            request,
            total_elements,
        }
    }

    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    pub fn content(&self) -> &[T] {
        &self.content
    }

    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    pub fn page_number(&self) -> usize {
        self.request.page_number()
    }

    pub fn page_size(&self) -> usize {
        self.request.page_size()
    }

    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// `ceil(total_elements / page_size)`; 0 for an empty collection
    pub fn total_pages(&self) -> u32 {
        let size = self.page_size() as u64;
        let pages = self.total_elements.div_ceil(size);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn has_next(&self) -> bool {
        (self.page_number() as u64).saturating_add(1) < u64::from(self.total_pages())
    }

    pub fn has_previous(&self) -> bool {
        self.page_number() > 0
    }
}

impl<T: Clone> Page<T> {
    /// Cuts the window described by `request` out of an ordered slice
    pub fn from_slice(items: &[T], request: PageRequest) -> Self {
        let content = items
            .iter()
            .skip(request.offset())
            .take(request.page_size())
            .cloned()
            .collect();
        Self::new(content, request, items.len() as u64)
    }
}
