//! Per-visitor state.
//!
//! Each browser session owns its own language context and page router. The
//! store maps the opaque id carried in the session cookie to that state.

use crate::i18n::{Language, LanguageContext, ResolutionMetrics, TranslationTable};
use crate::router::PageRouter;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Name of the cookie holding the session id.
pub const SESSION_COOKIE: &str = "sib_session";

/// State of one visitor.
#[derive(Debug, Clone)]
pub struct Session {
    pub language: LanguageContext,
    pub router: PageRouter,
}

struct Entry {
    session: Arc<Session>,
    last_seen: DateTime<Utc>,
}

/// Result of looking up (or creating) the session for a request.
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub id: String,
    pub session: Arc<Session>,
    /// True when the request carried no usable id and a cookie must be set.
    pub is_new: bool,
}

pub struct SessionStore {
    table: Arc<TranslationTable>,
    metrics: Arc<ResolutionMetrics>,
    default_language: Language,
    sessions: RwLock<HashMap<String, Entry>>,
}

impl SessionStore {
    pub fn new(
        table: Arc<TranslationTable>,
        metrics: Arc<ResolutionMetrics>,
        default_language: Language,
    ) -> Self {
        Self {
            table,
            metrics,
            default_language,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn metrics(&self) -> &ResolutionMetrics {
        &self.metrics
    }

    fn new_session(&self) -> Session {
        Session {
            language: LanguageContext::new(
                Arc::clone(&self.table),
                Arc::clone(&self.metrics),
                self.default_language,
            ),
            router: PageRouter::new(),
        }
    }

    /// Return the session for `id`, or start a fresh one when the id is
    /// absent or unknown (e.g. expired).
    pub async fn get_or_create(&self, id: Option<&str>) -> SessionHandle {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        if let Some(id) = id {
            if let Some(entry) = sessions.get_mut(id) {
                entry.last_seen = now;
                return SessionHandle {
                    id: id.to_string(),
                    session: Arc::clone(&entry.session),
                    is_new: false,
                };
            }
            debug!(session = id, "Unknown session id, starting a new session");
        }

        let id = Uuid::new_v4().to_string();
        let session = Arc::new(self.new_session());
        sessions.insert(
            id.clone(),
            Entry {
                session: Arc::clone(&session),
                last_seen: now,
            },
        );
        debug!(session = %id, total = sessions.len(), "Session created");

        SessionHandle {
            id,
            session,
            is_new: true,
        }
    }

    /// Look up a stored session and mark it as seen. Never creates one.
    pub async fn get(&self, id: &str) -> Option<Arc<Session>> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Utc::now();
        Some(Arc::clone(&entry.session))
    }

    /// A default session that is never stored, for visitors who have not
    /// changed anything yet.
    pub fn transient(&self) -> Session {
        self.new_session()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drop sessions idle for longer than `ttl`. Returns how many were removed.
    pub async fn prune_idle(&self, ttl: Duration) -> usize {
        self.prune_idle_at(Utc::now(), ttl).await
    }

    pub async fn prune_idle_at(&self, now: DateTime<Utc>, ttl: Duration) -> usize {
        // A TTL reaching past the earliest representable time expires nothing.
        let Some(cutoff) = now.checked_sub_signed(ttl) else {
            return 0;
        };
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|_, entry| entry.last_seen >= cutoff);

        let removed = before - sessions.len();
        if removed > 0 {
            info!("Pruned {} idle session(s), {} active", removed, sessions.len());
        }
        removed
    }
}
