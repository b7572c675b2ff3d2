//! Page router: the active page of one session.
//!
//! Page identifiers form a closed set. `navigate` accepts any string and
//! parses it with an explicit default arm, so an unknown identifier lands on
//! the home page instead of failing.

use crate::pages::{self, Page};
use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::debug;

/// Identifier of one of the site's content pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    Hedging,
    Brokerage,
    Portfolio,
    About,
    Contact,
    Education,
    Insights,
}

impl PageId {
    /// Every page, in navigation order.
    pub const ALL: [PageId; 8] = [
        PageId::Home,
        PageId::Hedging,
        PageId::Brokerage,
        PageId::Portfolio,
        PageId::About,
        PageId::Contact,
        PageId::Education,
        PageId::Insights,
    ];

    /// Pages grouped under the "Services" menu.
    pub const SERVICES: [PageId; 3] = [PageId::Hedging, PageId::Brokerage, PageId::Portfolio];

    /// Top-level pages of the navigation bar.
    pub const MAIN: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Contact,
        PageId::Education,
        PageId::Insights,
    ];

    /// Parse a page identifier, falling back to `Home` for anything unknown.
    pub fn parse(id: &str) -> PageId {
        match id {
            "home" => PageId::Home,
            "hedging" => PageId::Hedging,
            "brokerage" => PageId::Brokerage,
            "portfolio" => PageId::Portfolio,
            "about" => PageId::About,
            "contact" => PageId::Contact,
            "education" => PageId::Education,
            "insights" => PageId::Insights,
            _ => PageId::Home,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Hedging => "hedging",
            PageId::Brokerage => "brokerage",
            PageId::Portfolio => "portfolio",
            PageId::About => "about",
            PageId::Contact => "contact",
            PageId::Education => "education",
            PageId::Insights => "insights",
        }
    }

    /// Translation key of the page's navigation label.
    pub fn nav_key(&self) -> String {
        format!("nav.{}", self.as_str())
    }

    pub fn is_service(&self) -> bool {
        PageId::SERVICES.contains(self)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Session-scoped active page with navigation.
///
/// Cloning is cheap and yields a handle onto the same state.
#[derive(Debug, Clone)]
pub struct PageRouter {
    active: Arc<watch::Sender<PageId>>,
}

impl PageRouter {
    /// Create a router on the home page.
    pub fn new() -> Self {
        let (active, _) = watch::channel(PageId::Home);
        Self {
            active: Arc::new(active),
        }
    }

    pub fn get_active_page(&self) -> PageId {
        *self.active.borrow()
    }

    /// Make `page` the active page. Unknown identifiers select `Home`.
    ///
    /// There is no guard against navigating to the current page and no history.
    pub fn navigate(&self, page: &str) {
        let target = PageId::parse(page);
        if target.as_str() != page {
            debug!(requested = page, "Unknown page id, falling back to home");
        }
        self.navigate_to(target);
    }

    pub fn navigate_to(&self, page: PageId) {
        let previous = self.active.send_replace(page);
        debug!(from = %previous, to = %page, "Navigated");
    }

    /// Receive a notification every time the active page is set.
    pub fn subscribe(&self) -> watch::Receiver<PageId> {
        self.active.subscribe()
    }

    /// The renderer for a page. Total over `PageId`.
    pub fn resolve(&self, page: PageId) -> Page {
        pages::page_for(page)
    }

    /// The renderer for the active page.
    pub fn active(&self) -> Page {
        self.resolve(self.get_active_page())
    }
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new()
    }
}
