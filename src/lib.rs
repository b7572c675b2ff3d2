//! Bilingual (English / Persian) website for Sib Capital Management.
//!
//! Pages are rendered on the server from per-session state: an active
//! language and an active page. See `server` for the HTTP surface.

pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod pages;
pub mod router;
pub mod scheduler;
pub mod security;
pub mod server;
pub mod session;
