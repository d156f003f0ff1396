// Text utilities shared by validation, decoding, and JD structuring.
// Pure string processing: no I/O, no shared state, never fails.

pub mod normalize;
pub mod tokens;

pub use normalize::normalize;
pub use tokens::{count_words, extract_email, extract_phone, tokenize, top_tokens};
