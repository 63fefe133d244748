//! Catalog pagination with out-of-order response protection.
//!
//! Every navigation issues an independent page fetch, so rapid
//! next/next/previous clicks can resolve in any order. The browser
//! stamps each request with a monotonic id and applies a response only
//! when it belongs to the most recently issued request:
//! last-issued-wins, not first-arrived-wins. Superseded responses are
//! discarded without touching displayed state. There is no hard
//! cancellation; a hung request simply never applies.

use artos_commerce::catalog::{Page, Product};
use tracing::debug;

use crate::client::ProductSource;

/// A ticket for one in-flight page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    id: u64,
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// The page this ticket was issued for.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// The page size this ticket was issued with.
    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// Outcome of handing a fetched page back to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response became the displayed state.
    Current,
    /// A later request superseded this one; the response was discarded.
    Stale,
}

/// Owns the displayed catalog page and the navigation bounds around it.
///
/// Navigation bounds always come from the last *applied* page, so a
/// request for a page beyond the current total is rejected before any
/// network call.
pub struct CatalogBrowser<S> {
    source: S,
    limit: u32,
    state: Page<Product>,
    issued: u64,
}

impl<S> CatalogBrowser<S> {
    /// Create a browser that fetches `limit` products per page.
    ///
    /// Starts on the canonical empty page (one page of nothing); use
    /// [`go_to`](Self::go_to) to load page 1.
    pub fn new(source: S, limit: u32) -> Self {
        Self {
            source,
            limit,
            state: Page::empty(limit),
            issued: 0,
        }
    }

    /// Issue a navigation ticket for `page`.
    ///
    /// Returns `None` when the page is out of bounds for the last
    /// applied result; a rejected navigation consumes no request id and
    /// must make no network call.
    pub fn begin(&mut self, page: u32) -> Option<PageRequest> {
        if page < 1 || page > self.state.total_pages {
            return None;
        }
        self.issued += 1;
        Some(PageRequest {
            id: self.issued,
            page,
            limit: self.limit,
        })
    }

    /// Apply a fetched page if its ticket is still the latest issued.
    ///
    /// A normalized-failure page applies exactly like a success; the
    /// browser has no separate error state.
    pub fn apply(&mut self, request: &PageRequest, result: Page<Product>) -> Applied {
        if request.id != self.issued {
            debug!(
                request = request.id,
                latest = self.issued,
                "discarding stale page response"
            );
            return Applied::Stale;
        }
        self.state = result;
        Applied::Current
    }

    /// The last applied page.
    pub fn current(&self) -> &Page<Product> {
        &self.state
    }

    /// The displayed page number.
    pub fn current_page(&self) -> u32 {
        self.state.current_page
    }

    /// Whether an earlier page can be navigated to.
    pub fn can_go_previous(&self) -> bool {
        self.state.current_page > 1
    }

    /// Whether a later page can be navigated to.
    pub fn can_go_next(&self) -> bool {
        self.state.current_page < self.state.total_pages
    }
}

impl<S: ProductSource> CatalogBrowser<S> {
    /// Navigate to `page`: issue a ticket, fetch, and apply in one step.
    ///
    /// Returns true when the fetched page became the displayed state;
    /// false for out-of-bounds pages and superseded responses.
    pub async fn go_to(&mut self, page: u32) -> bool {
        let Some(request) = self.begin(page) else {
            return false;
        };
        let result = self.source.fetch_page(request.page, request.limit).await;
        self.apply(&request, result) == Applied::Current
    }
}
