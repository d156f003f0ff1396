//! Fixed vocabularies and limits.
//!
//! The verb/term/stopword lists are not consulted by the extractor; they are
//! served to clients via `GET /api/v1/rules` together with the enforcement
//! flags, ahead of the deferred scoring phase.

pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".docx", ".txt"];

pub const APPROVED_ACTION_VERBS: &[&str] = &[
    "achieved",
    "analyzed",
    "architected",
    "automated",
    "built",
    "collaborated",
    "conducted",
    "created",
    "delivered",
    "designed",
    "developed",
    "drove",
    "enhanced",
    "engineered",
    "executed",
    "expanded",
    "implemented",
    "improved",
    "launched",
    "led",
    "managed",
    "optimized",
    "orchestrated",
    "organized",
    "owned",
    "piloted",
    "planned",
    "reduced",
    "resolved",
    "shipped",
    "streamlined",
    "spearheaded",
    "supported",
    "transformed",
];

pub const BANNED_TERMS: &[&str] = &[
    "guru",
    "rockstar",
    "ninja",
    "wizard",
    "synergy",
    "best-in-class",
    "world-class",
    "wheelhouse",
    "leverage (as noun)",
    "game changer",
    "out-of-the-box thinker",
];

pub const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "in", "on", "for", "with", "to", "of", "at", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "being",
];
