//! Heuristic locomotive-reference extraction for Roundhouse.
//!
//! Pulls asset IDs, loco numbers, and loco names out of free-text admin
//! questions with layered regex/keyword heuristics — no external NLP
//! model, no I/O, fully deterministic. Three independent sub-extractors
//! feed one `ExtractionResult`:
//!
//! - **asset IDs**: 24-char hex tokens (exact format scan)
//! - **loco numbers**: keyword-anchored 3–5 digit numbers, plus a scored
//!   generic fallback with year/duration/count rejection
//! - **names**: number+model phrases, no-space compounds, and bare model
//!   codes near a loco keyword
//!
//! Anything the heuristics are not confident about is dropped rather
//! than guessed — downstream resolution must never see fabricated
//! candidates.

pub mod confidence;
pub mod extractors;
pub mod stopwords;
mod text;

pub use extractors::extract_loco_query;
pub use rh_protocol::{Confidence, ExtractionResult, RawMatch, RefKind};
