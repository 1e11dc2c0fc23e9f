use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::Result;
use crate::config::CacheConfig;
use crate::models::Match;
use crate::traits::MatchSource;

struct CacheEntry {
    fetched_at: Instant,
    matches: Arc<Vec<Match>>,
}

/// Serves the last successful response of `inner` until the TTL runs out.
/// Failed fetches are passed through and never stored.
pub struct CachedMatchSource<S> {
    inner: S,
    config: CacheConfig,
    entry: RwLock<Option<CacheEntry>>,
}

impl<S: MatchSource> CachedMatchSource<S> {
    pub fn new(inner: S, config: CacheConfig) -> Self {
        Self {
            inner,
            config,
            entry: RwLock::new(None),
        }
    }

    async fn fresh(&self) -> Option<Arc<Vec<Match>>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|e| e.fetched_at.elapsed() < self.config.ttl)
            .map(|e| Arc::clone(&e.matches))
    }
}

#[async_trait::async_trait]
impl<S: MatchSource> MatchSource for CachedMatchSource<S> {
    async fn team_matches(&self) -> Result<Vec<Match>> {
        if let Some(matches) = self.fresh().await {
            debug!("Serving {} cached matches", matches.len());
            return Ok(matches.as_ref().clone());
        }

        let matches = self.inner.team_matches().await?;
        info!(
            "Refreshed {} matches from {}",
            matches.len(),
            self.inner.name()
        );

        *self.entry.write().await = Some(CacheEntry {
            fetched_at: Instant::now(),
            matches: Arc::new(matches.clone()),
        });

        Ok(matches)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
