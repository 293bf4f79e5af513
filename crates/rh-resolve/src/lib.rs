//! Deterministic grounding of extracted locomotive references against a
//! fleet snapshot.
//!
//! Strict priority order — assetId, then loco number, then name — with
//! no implicit scoring across rules. The resolver never fabricates a
//! match, never tie-breaks among equally valid candidates, and never
//! silently degrades confidence: ties surface as `Ambiguous`, misses as
//! `NeedsFollowup` with stale/fresh wording chosen from the caller's
//! context.

pub mod context;
pub mod followup;
pub mod resolver;

pub use context::{ResolverContext, SnapshotFreshness};
pub use followup::prompt_for;
pub use resolver::{FuzzyNames, MAX_CANDIDATES, ResolverOptions, resolve, resolve_at};
