//! Fixed stopword set.
//!
//! Ordinary English words that must never be read as a locomotive model
//! token or a name continuation. Plain immutable data; lookups are
//! case-insensitive.

use std::collections::HashSet;
use std::sync::LazyLock;

#[rustfmt::skip]
const STOPWORDS: &[&str] = &[
    // Temporal
    "today", "tomorrow", "yesterday", "now", "soon", "ago", "current",
    "currently", "recent", "recently", "upcoming", "next", "last",
    "day", "days", "week", "weeks", "month", "months", "year", "years",
    "date", "dates", "time",
    // Inspection domain
    "due", "overdue", "inspection", "inspections", "inspect", "inspected",
    "expiry", "expire", "expires", "expired", "credit", "credits",
    "status", "state", "schedule", "scheduled", "maintenance",
    "service", "serviced", "servicing", "repair", "repairs", "use", "mileage",
    "stored", "storage",
    // Loco keywords
    "loco", "locos", "locomotive", "locomotives", "unit", "units",
    "engine", "engines", "asset", "assets", "fleet",
    // Politeness
    "please", "thanks", "thank", "hello", "hi", "hey", "kindly",
    // Conjunctions, prepositions, articles, auxiliaries
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet",
    "for", "of", "in", "on", "at", "to", "by", "with", "from", "into",
    "onto", "about", "as", "is", "are", "was", "were", "be", "been",
    "being", "am", "it", "its", "this", "that", "these", "those",
    "there", "here", "not", "no", "yes", "any", "all", "some", "each",
    "every", "both", "few", "more", "most", "other", "than", "then",
    "if", "else", "out", "off", "up", "down", "over", "under",
    "between", "after", "before", "during", "until", "since", "while",
    // Interrogatives
    "what", "when", "where", "which", "who", "whom", "whose", "why", "how",
    // Common verbs and count words
    "show", "shows", "showing", "get", "gets", "give", "gives", "tell",
    "tells", "find", "finds", "list", "lists", "display", "check",
    "checks", "see", "look", "looks", "need", "needs", "want", "wants",
    "know", "has", "have", "had", "having", "do", "does", "did", "done",
    "doing", "can", "could", "will", "would", "shall", "should", "may",
    "might", "must", "go", "going", "come", "coming", "run", "running",
    "work", "works", "working", "top", "first", "limit", "number",
    "item", "items", "result", "results", "row", "rows", "record",
    "records", "entry", "entries", "many", "much", "long",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Case-insensitive stopword membership test.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word.to_ascii_lowercase().as_str())
}
