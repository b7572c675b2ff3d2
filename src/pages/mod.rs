//! Page renderers.
//!
//! Every page is a plain function from a [`RenderContext`] to an HTML
//! fragment. The context gives read access to the session's language and a
//! navigation callback that produces the link for any other page.

mod about;
mod brokerage;
mod contact;
mod education;
mod hedging;
mod home;
pub mod html;
mod insights;
mod layout;
mod portfolio;

use crate::contact::ContactView;
use crate::i18n::{Language, LanguageContext};
use crate::router::PageId;
use crate::session::Session;
use std::ops::Range;

pub use html::escape_html;

/// Signature shared by all page renderers.
pub type RenderFn = fn(&RenderContext<'_>) -> String;

/// A page identifier together with its renderer.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub id: PageId,
    pub render: RenderFn,
}

/// Map a page identifier to its renderer.
pub fn page_for(page: PageId) -> Page {
    let render: RenderFn = match page {
        PageId::Home => home::render,
        PageId::Hedging => hedging::render,
        PageId::Brokerage => brokerage::render,
        PageId::Portfolio => portfolio::render,
        PageId::About => about::render,
        PageId::Contact => contact::render,
        PageId::Education => education::render,
        PageId::Insights => insights::render,
    };

    Page { id: page, render }
}

/// Link that navigates the session to `page`.
pub fn navigate_href(page: PageId) -> String {
    format!("/navigate/{}", page)
}

/// Link that switches the session's language.
pub fn language_href(language: Language) -> String {
    format!("/language/{}", language.code())
}

/// Everything a renderer may read while producing a page.
pub struct RenderContext<'a> {
    language: &'a LanguageContext,
    active: PageId,
    navigate: &'a dyn Fn(PageId) -> String,
    contact: Option<&'a ContactView>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        language: &'a LanguageContext,
        active: PageId,
        navigate: &'a dyn Fn(PageId) -> String,
    ) -> Self {
        Self {
            language,
            active,
            navigate,
            contact: None,
        }
    }

    /// Attach the state of a contact form submission.
    pub fn with_contact(mut self, view: &'a ContactView) -> Self {
        self.contact = Some(view);
        self
    }

    pub fn language(&self) -> Language {
        self.language.get_active_language()
    }

    pub fn active_page(&self) -> PageId {
        self.active
    }

    /// Link produced by the navigation callback.
    pub fn href(&self, page: PageId) -> String {
        (self.navigate)(page)
    }

    /// Resolved, HTML-escaped translation.
    pub fn text(&self, key: &str) -> String {
        escape_html(&self.language.resolve(key))
    }

    /// Like `text`, with digits localized for the active language.
    pub fn digits(&self, key: &str) -> String {
        escape_html(&self.language.resolve_digits(key))
    }

    /// Resolved translation without escaping.
    pub fn raw(&self, key: &str) -> String {
        self.language.resolve(key)
    }

    /// Indices of the list at `key`, for iterating parallel datasets.
    pub fn items(&self, key: &str) -> Range<usize> {
        0..self.language.list_len(key)
    }

    pub fn contact(&self) -> Option<&ContactView> {
        self.contact
    }
}

/// Render the session's active page inside the site layout.
pub fn render_session(session: &Session, contact: Option<&ContactView>) -> String {
    let page = session.router.active();
    let mut cx = RenderContext::new(&session.language, page.id, &navigate_href);
    if let Some(view) = contact {
        cx = cx.with_contact(view);
    }

    let body = (page.render)(&cx);
    layout::document(&cx, &body)
}
