use super::data;
use super::{Scheme, Spelling};
use std::fmt;

/// The class of a mapped glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphClass {
    Consonant,
    VowelSign,
    IndependentVowel,
    Other,
}

impl GlyphClass {
    pub const ALL: [GlyphClass; 4] = [
        GlyphClass::Consonant,
        GlyphClass::VowelSign,
        GlyphClass::IndependentVowel,
        GlyphClass::Other,
    ];
}

impl fmt::Display for GlyphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphClass::Consonant => write!(f, "consonant"),
            GlyphClass::VowelSign => write!(f, "vowel sign"),
            GlyphClass::IndependentVowel => write!(f, "independent vowel"),
            GlyphClass::Other => write!(f, "other"),
        }
    }
}

/// Sorted, immutable map from a code point sequence to its spellings
#[derive(Debug)]
pub struct GlyphMap {
    entries: &'static [(&'static str, Spelling)],
    /// Length of the longest key, in chars
    max_key_chars: usize,
}

impl GlyphMap {
    /// Create a map over `entries`, which must be sorted by key
    pub const fn new(entries: &'static [(&'static str, Spelling)]) -> Self {
        let mut max_key_chars = 0;
        let mut i = 0;
        while i < entries.len() {
            let n = char_count(entries[i].0);
            if n > max_key_chars {
                max_key_chars = n;
            }
            i += 1;
        }
        Self {
            entries,
            max_key_chars,
        }
    }

    /// Exact lookup
    pub fn get(&self, key: &str) -> Option<&Spelling> {
        self.entries
            .binary_search_by(|(k, _)| (*k).cmp(key))
            .ok()
            .map(|i| &self.entries[i].1)
    }

    /// Find the longest key that `text` starts with.
    ///
    /// Returns the matched part of `text` together with its spelling.
    pub fn longest_prefix<'a>(&self, text: &'a str) -> Option<(&'a str, &Spelling)> {
        let mut found = None;
        for (n, (i, c)) in text.char_indices().enumerate() {
            if n == self.max_key_chars {
                break;
            }
            let key = &text[..i + c.len_utf8()];
            if let Some(spelling) = self.get(key) {
                found = Some((key, spelling));
            }
        }
        found
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const fn char_count(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        // skip UTF-8 continuation bytes
        if bytes[i] & 0xC0 != 0x80 {
            count += 1;
        }
        i += 1;
    }
    count
}

/// The four glyph classes of a script
#[derive(Debug)]
pub struct GlyphTable {
    consonants: GlyphMap,
    vowel_signs: GlyphMap,
    independent_vowels: GlyphMap,
    other: GlyphMap,
}

static DEVANAGARI: GlyphTable = GlyphTable {
    consonants: GlyphMap::new(&data::CONSONANTS),
    vowel_signs: GlyphMap::new(&data::VOWEL_SIGNS),
    independent_vowels: GlyphMap::new(&data::INDEPENDENT_VOWELS),
    other: GlyphMap::new(&data::OTHER),
};

impl GlyphTable {
    /// The Devanagari table, shared for the lifetime of the process
    pub fn devanagari() -> &'static GlyphTable {
        &DEVANAGARI
    }

    pub fn map(&self, class: GlyphClass) -> &GlyphMap {
        match class {
            GlyphClass::Consonant => &self.consonants,
            GlyphClass::VowelSign => &self.vowel_signs,
            GlyphClass::IndependentVowel => &self.independent_vowels,
            GlyphClass::Other => &self.other,
        }
    }

    /// Get the class of a code point or code point sequence.
    ///
    /// Returns `None` if the key is not in any class.
    pub fn classify(&self, key: &str) -> Option<GlyphClass> {
        GlyphClass::ALL
            .into_iter()
            .find(|class| self.map(*class).get(key).is_some())
    }

    /// Get the spelling of `key` in `class` under `scheme`.
    pub fn romanize(&self, class: GlyphClass, key: &str, scheme: Scheme) -> Option<&'static str> {
        self.map(class).get(key).map(|s| s.pick(scheme))
    }
}
