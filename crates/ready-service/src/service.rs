use ready_core::DEFAULT_RECENT_LIMIT;
use ready_core::backend::StockBackend;
use ready_core::identity::Actor;

use crate::cache::QueryCache;

/// Stock operations over a backend, attributed to one acting user.
///
/// All operation methods are implemented as `impl StockService` in
/// `ops::*`.
pub struct StockService<B> {
    backend: B,
    cache: QueryCache,
    actor: Actor,
    recent_limit: u32,
}

impl<B: StockBackend> StockService<B> {
    pub fn new(backend: B, actor: Actor) -> Self {
        Self {
            backend,
            cache: QueryCache::new(),
            actor,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }

    /// Number of transactions the dashboard shows.
    #[must_use]
    pub fn with_recent_limit(mut self, recent_limit: u32) -> Self {
        self.recent_limit = recent_limit.max(1);
        self
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    pub(crate) const fn recent_limit(&self) -> u32 {
        self.recent_limit
    }

    pub(crate) fn actor_email(&self) -> Option<String> {
        self.actor.email.clone()
    }
}
