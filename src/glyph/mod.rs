//! Static Devanagari glyph tables
//!
//! The tables are split into four disjoint classes. Each entry maps a code
//! point (or a fixed code point sequence) to a [`Spelling`] pair, and the
//! [`Scheme`] decides which half of the pair is used.

mod data;
mod nukta;
pub use nukta::{normalize_nukta, NUKTA};
mod scheme;
pub use scheme::{Scheme, Spelling};
mod table;
pub use table::{GlyphClass, GlyphMap, GlyphTable};

/// The vowel implied by a consonant that has neither a vowel sign nor a virama
pub const INHERENT_VOWEL: &str = "a";

/// The vowel killer. It has no spelling of its own.
pub const VIRAMA: char = '\u{094D}';
