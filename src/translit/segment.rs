use std::fmt;

/// What a [`Segment`] was matched as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Consonant followed by a vowel sign
    Syllable,
    /// Consonant followed by a virama
    DeadConsonant,
    /// Consonant carrying the inherent vowel
    Consonant,
    IndependentVowel,
    /// Sign, punctuation or digit
    Other,
    /// Text that no pass matched. It is kept unchanged.
    Literal,
}

impl SegmentKind {
    /// If the segment came from one of the three consonant passes
    pub fn is_consonantal(&self) -> bool {
        matches!(
            self,
            SegmentKind::Syllable | SegmentKind::DeadConsonant | SegmentKind::Consonant
        )
    }
}

/// A piece of the input and what it romanizes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub source: String,
    pub output: String,
}

impl Segment {
    pub fn literal(source: String) -> Self {
        Self {
            kind: SegmentKind::Literal,
            output: source.clone(),
            source,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind == SegmentKind::Literal
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.output)
    }
}
