use super::SegmentKind;
use crate::glyph::{GlyphClass, GlyphTable, Scheme, INHERENT_VOWEL, VIRAMA};

/// One substitution pass. [`Pass::ORDER`] is the order they must run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    ConsonantVowelSign,
    ConsonantVirama,
    Consonant,
    IndependentVowel,
    Other,
}

/// A match found by a pass at the start of some text
pub struct PassMatch {
    /// Length of the matched text in bytes
    pub len: usize,
    pub output: String,
}

impl Pass {
    /// Each pass assumes the more specific ones before it have already
    /// consumed their matches.
    pub const ORDER: [Pass; 5] = [
        Pass::ConsonantVowelSign,
        Pass::ConsonantVirama,
        Pass::Consonant,
        Pass::IndependentVowel,
        Pass::Other,
    ];

    pub fn kind(&self) -> SegmentKind {
        match self {
            Pass::ConsonantVowelSign => SegmentKind::Syllable,
            Pass::ConsonantVirama => SegmentKind::DeadConsonant,
            Pass::Consonant => SegmentKind::Consonant,
            Pass::IndependentVowel => SegmentKind::IndependentVowel,
            Pass::Other => SegmentKind::Other,
        }
    }

    /// Try to match this pass at the start of `text`
    pub fn match_start(&self, table: &GlyphTable, scheme: Scheme, text: &str) -> Option<PassMatch> {
        match self {
            Pass::ConsonantVowelSign => {
                let (consonant, c) = table.map(GlyphClass::Consonant).longest_prefix(text)?;
                let rest = &text[consonant.len()..];
                let (sign, v) = table.map(GlyphClass::VowelSign).longest_prefix(rest)?;
                let mut output = c.pick(scheme).to_string();
                output.push_str(v.pick(scheme));
                Some(PassMatch {
                    len: consonant.len() + sign.len(),
                    output,
                })
            }
            Pass::ConsonantVirama => {
                let (consonant, c) = table.map(GlyphClass::Consonant).longest_prefix(text)?;
                if !text[consonant.len()..].starts_with(VIRAMA) {
                    return None;
                }
                Some(PassMatch {
                    len: consonant.len() + VIRAMA.len_utf8(),
                    output: c.pick(scheme).to_string(),
                })
            }
            Pass::Consonant => {
                let (consonant, c) = table.map(GlyphClass::Consonant).longest_prefix(text)?;
                let mut output = c.pick(scheme).to_string();
                output.push_str(INHERENT_VOWEL);
                Some(PassMatch {
                    len: consonant.len(),
                    output,
                })
            }
            Pass::IndependentVowel => Self::single(table, GlyphClass::IndependentVowel, scheme, text),
            Pass::Other => Self::single(table, GlyphClass::Other, scheme, text),
        }
    }

    fn single(table: &GlyphTable, class: GlyphClass, scheme: Scheme, text: &str) -> Option<PassMatch> {
        let (key, spelling) = table.map(class).longest_prefix(text)?;
        Some(PassMatch {
            len: key.len(),
            output: spelling.pick(scheme).to_string(),
        })
    }
}
