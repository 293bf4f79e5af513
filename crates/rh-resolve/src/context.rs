//! Caller-supplied freshness context for one resolution call.

use chrono::{DateTime, Duration, Utc};

/// How fresh the snapshot handed to the resolver is.
///
/// Callers either know outright (`Fresh`/`Stale`) or supply the last
/// fetch time and let the resolver judge it against a max age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFreshness {
    Fresh,
    Stale,
    FetchedAt(DateTime<Utc>),
}

/// Context for one resolution call. Controls only the wording of a
/// not-found outcome: stale data suggests a refresh, fresh data a final
/// "not in database".
#[derive(Debug, Clone, Copy)]
pub struct ResolverContext {
    pub freshness: SnapshotFreshness,
    /// Max age before a `FetchedAt` timestamp counts as stale.
    pub max_age: Duration,
}

impl ResolverContext {
    pub const DEFAULT_MAX_AGE_SECS: i64 = 300;

    pub fn fresh() -> Self {
        Self {
            freshness: SnapshotFreshness::Fresh,
            max_age: Duration::seconds(Self::DEFAULT_MAX_AGE_SECS),
        }
    }

    pub fn stale() -> Self {
        Self {
            freshness: SnapshotFreshness::Stale,
            max_age: Duration::seconds(Self::DEFAULT_MAX_AGE_SECS),
        }
    }

    pub fn fetched_at(timestamp: DateTime<Utc>) -> Self {
        Self {
            freshness: SnapshotFreshness::FetchedAt(timestamp),
            max_age: Duration::seconds(Self::DEFAULT_MAX_AGE_SECS),
        }
    }

    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = max_age;
        self
    }

    /// Judge freshness at `now`. The clock is passed in so resolution
    /// stays deterministic under test.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.freshness {
            SnapshotFreshness::Fresh => true,
            SnapshotFreshness::Stale => false,
            SnapshotFreshness::FetchedAt(ts) => now.signed_duration_since(ts) <= self.max_age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags() {
        let now = Utc::now();
        assert!(ResolverContext::fresh().is_fresh(now));
        assert!(!ResolverContext::stale().is_fresh(now));
    }

    #[test]
    fn timestamp_within_max_age_is_fresh() {
        let now = Utc::now();
        let context = ResolverContext::fetched_at(now - Duration::seconds(60));
        assert!(context.is_fresh(now));
    }

    #[test]
    fn timestamp_past_max_age_is_stale() {
        let now = Utc::now();
        let context = ResolverContext::fetched_at(now - Duration::seconds(600));
        assert!(!context.is_fresh(now));
    }

    #[test]
    fn max_age_is_configurable() {
        let now = Utc::now();
        let context = ResolverContext::fetched_at(now - Duration::seconds(600))
            .with_max_age(Duration::seconds(3600));
        assert!(context.is_fresh(now));
    }
}
