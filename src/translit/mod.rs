//! Devanagari to ASCII romanization
//!
//! The input is run through five passes, in a fixed order. Each pass scans
//! the text that no earlier pass has converted, from left to right, and
//! replaces every non-overlapping match. Anything no pass matches is kept as
//! it is, in place.

use crate::glyph::{GlyphTable, Scheme};

mod pass;
use pass::Pass;
mod segment;
pub use segment::{Segment, SegmentKind};

/// Romanize `text` with the Devanagari table
pub fn transliterate(text: &str, scheme: Scheme) -> String {
    Transliterator::new(GlyphTable::devanagari(), scheme).transliterate(text)
}

/// The transliteration engine for one table and scheme
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    table: &'t GlyphTable,
    scheme: Scheme,
}

impl<'t> Transliterator<'t> {
    pub fn new(table: &'t GlyphTable, scheme: Scheme) -> Self {
        Self { table, scheme }
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Romanize `text`
    pub fn transliterate(&self, text: &str) -> String {
        self.segment(text)
            .into_iter()
            .map(|s| s.output)
            .collect()
    }

    /// Split `text` into matched segments and literal runs, in order.
    ///
    /// Concatenating the outputs gives the romanized text, and concatenating
    /// the sources gives `text` back.
    pub fn segment(&self, text: &str) -> Vec<Segment> {
        let mut segments = vec![Segment::literal(text.to_string())];
        for pass in Pass::ORDER {
            segments = segments
                .into_iter()
                .flat_map(|s| {
                    if s.is_literal() {
                        self.scan(pass, &s.source)
                    } else {
                        vec![s]
                    }
                })
                .collect();
        }
        segments.retain(|s| !s.source.is_empty());
        segments
    }

    /// Run one pass over a literal run
    fn scan(&self, pass: Pass, text: &str) -> Vec<Segment> {
        let mut segments = vec![];
        let mut literal = String::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            match pass.match_start(self.table, self.scheme, rest) {
                Some(m) => {
                    if !literal.is_empty() {
                        segments.push(Segment::literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment {
                        kind: pass.kind(),
                        source: rest[..m.len].to_string(),
                        output: m.output,
                    });
                    rest = &rest[m.len..];
                }
                None => {
                    literal.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::literal(literal));
        }
        segments
    }
}

#[cfg(test)]
mod ut {
    use super::*;
    use crate::glyph::{GlyphClass, VIRAMA};

    fn velthuis(s: &str) -> String {
        transliterate(s, Scheme::Velthuis)
    }

    fn wikner(s: &str) -> String {
        transliterate(s, Scheme::Wikner)
    }

    #[test]
    fn test_empty() {
        assert_eq!("", velthuis(""));
        assert!(Transliterator::new(GlyphTable::devanagari(), Scheme::Velthuis)
            .segment("")
            .is_empty());
    }

    #[test]
    fn test_pass_through() {
        assert_eq!("hello, world 123\t\n", velthuis("hello, world 123\t\n"));
        assert_eq!("日本語 ß", wikner("日本語 ß"));
        assert_eq!("  ", velthuis("  "));
    }

    #[test]
    fn test_inherent_vowel() {
        assert_eq!("ka", velthuis("क"));
        assert_eq!(".dha", velthuis("ढ"));
        assert_eq!("kamala", velthuis("कमल"));
    }

    #[test]
    fn test_vowel_sign() {
        assert_eq!("kii", velthuis("की"));
        assert_eq!("kaa", velthuis("का"));
        assert_eq!("hindii", velthuis("हिन्दी"));
    }

    #[test]
    fn test_virama() {
        assert_eq!("kta", velthuis("क्त"));
        assert_eq!("kaar", velthuis("कार्"));
        assert_eq!("dharma", velthuis("धर्म"));
    }

    #[test]
    fn test_independent_vowel() {
        assert_eq!("a", velthuis("अ"));
        assert_eq!("aaga", velthuis("आग"));
        assert_eq!("~a", velthuis("\u{0972}"));
    }

    #[test]
    fn test_other() {
        assert_eq!("|", velthuis("।"));
        assert_eq!("||", velthuis("॥"));
        assert_eq!("2024", velthuis("२०२४"));
        assert_eq!("sa.m", velthuis("सं"));
        assert_eq!(".o", velthuis("ॐ"));
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            "sa.msk.rtam bhaa.saa |",
            velthuis("संस्कृतम् भाषा ।")
        );
    }

    #[test]
    fn test_scheme_alternate() {
        assert_eq!("k.R", velthuis("कॄ"));
        assert_eq!("k.r.r", wikner("कॄ"));
        assert_eq!("k.ll", velthuis("क\u{0963}"));
        assert_eq!("k.l.l", wikner("क\u{0963}"));
        assert_eq!(velthuis("नमस्ते"), wikner("नमस्ते"));
    }

    #[test]
    fn test_stray_marks_kept() {
        // vowel sign or virama without a consonant
        assert_eq!("\u{093F}", velthuis("\u{093F}"));
        assert_eq!(VIRAMA.to_string(), velthuis(&VIRAMA.to_string()));
        assert_eq!("a\u{093E}", velthuis("अ\u{093E}"));
        assert_eq!("kaa\u{093E}", velthuis("का\u{093E}"));
    }

    #[test]
    fn test_unmapped_nukta_forms() {
        assert_eq!("\u{095F}", velthuis("\u{095F}"));
        assert_eq!("ca\u{093C}", velthuis("च\u{093C}"));
        assert_eq!("qaa", velthuis("\u{0958}\u{093E}"));
    }

    #[test]
    fn test_no_rescan_of_output() {
        // romanized text from an earlier pass is never matched again
        assert_eq!("a ka", velthuis("a क"));
        assert_eq!("ka", velthuis("ka"));
    }

    #[test]
    fn test_consonant_rule_matches_table() {
        let table = GlyphTable::devanagari();
        let map = table.map(GlyphClass::Consonant);
        for key in map.keys() {
            for scheme in [Scheme::Velthuis, Scheme::Wikner] {
                let spelling = table.romanize(GlyphClass::Consonant, key, scheme).unwrap();
                assert_eq!(
                    format!("{spelling}a"),
                    transliterate(key, scheme),
                    "bare consonant {key:?}"
                );
                let ii = format!("{key}\u{0940}");
                assert_eq!(format!("{spelling}ii"), transliterate(&ii, scheme));
                let cluster = format!("{key}{VIRAMA}\u{0915}");
                assert_eq!(format!("{spelling}ka"), transliterate(&cluster, scheme));
            }
        }
    }

    #[test]
    fn test_segments() {
        let t = Transliterator::new(GlyphTable::devanagari(), Scheme::Velthuis);
        let segments = t.segment("कार् x।");
        let kinds = segments.iter().map(|s| s.kind).collect::<Vec<_>>();
        assert_eq!(
            vec![
                SegmentKind::Syllable,
                SegmentKind::DeadConsonant,
                SegmentKind::Literal,
                SegmentKind::Other,
            ],
            kinds
        );
        assert_eq!("का", segments[0].source);
        assert_eq!(" x", segments[2].output);
        let source = segments.iter().map(|s| s.source.as_str()).collect::<String>();
        assert_eq!("कार् x।", source);
    }

    #[test]
    fn test_segment_structure_same_across_schemes() {
        let text = "कॄष्ण क\u{0963} अ॥ abc";
        let v = Transliterator::new(GlyphTable::devanagari(), Scheme::Velthuis).segment(text);
        let w = Transliterator::new(GlyphTable::devanagari(), Scheme::Wikner).segment(text);
        assert_eq!(v.len(), w.len());
        assert_eq!(
            v.iter().filter(|s| s.kind.is_consonantal()).count(),
            w.iter().filter(|s| s.kind.is_consonantal()).count()
        );
        for (a, b) in v.iter().zip(w.iter()) {
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.source, b.source);
        }
    }
}
