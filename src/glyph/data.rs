//! Glyph data for the Devanagari block
//!
//! Every table is sorted by key, which is what [`GlyphMap`](super::GlyphMap)
//! binary-searches on.

use super::Spelling;

type Entry = (&'static str, Spelling);

const fn one(s: &'static str) -> Spelling {
    Spelling::one(s)
}

pub const CONSONANTS: [Entry; 41] = [
    ("\u{0915}", one("k")),
    ("\u{0916}", one("kh")),
    ("\u{0917}", one("g")),
    ("\u{0918}", one("gh")),
    ("\u{0919}", one("\"n")),
    ("\u{091A}", one("c")),
    ("\u{091B}", one("ch")),
    ("\u{091C}", one("j")),
    ("\u{091D}", one("jh")),
    ("\u{091E}", one("~n")),
    ("\u{091F}", one(".t")),
    ("\u{0920}", one(".th")),
    ("\u{0921}", one(".d")),
    ("\u{0922}", one(".dh")),
    ("\u{0923}", one(".n")),
    ("\u{0924}", one("t")),
    ("\u{0925}", one("th")),
    ("\u{0926}", one("d")),
    ("\u{0927}", one("dh")),
    ("\u{0928}", one("n")),
    ("\u{092A}", one("p")),
    ("\u{092B}", one("ph")),
    ("\u{092C}", one("b")),
    ("\u{092D}", one("bh")),
    ("\u{092E}", one("m")),
    ("\u{092F}", one("y")),
    ("\u{0930}", one("r")),
    ("\u{0932}", one("l")),
    ("\u{0933}", one("L")),
    ("\u{0935}", one("v")),
    ("\u{0936}", one("\"s")),
    ("\u{0937}", one(".s")),
    ("\u{0938}", one("s")),
    ("\u{0939}", one("h")),
    // nukta forms
    ("\u{0958}", one("q")),
    ("\u{0959}", one(".kh")),
    ("\u{095A}", one(".g")),
    ("\u{095B}", one("z")),
    ("\u{095C}", one("R")),
    ("\u{095D}", one("Rh")),
    ("\u{095E}", one("f")),
];

pub const VOWEL_SIGNS: [Entry; 14] = [
    ("\u{093E}", one("aa")),
    ("\u{093F}", one("i")),
    ("\u{0940}", one("ii")),
    ("\u{0941}", one("u")),
    ("\u{0942}", one("uu")),
    ("\u{0943}", one(".r")),
    ("\u{0944}", Spelling::two(".R", ".r.r")),
    ("\u{0947}", one("e")),
    ("\u{0948}", one("ai")),
    ("\u{0949}", one("~o")),
    ("\u{094B}", one("o")),
    ("\u{094C}", one("au")),
    ("\u{0962}", one(".l")),
    ("\u{0963}", Spelling::two(".ll", ".l.l")),
];

pub const INDEPENDENT_VOWELS: [Entry; 15] = [
    ("\u{0905}", one("a")),
    ("\u{0906}", one("aa")),
    ("\u{0907}", one("i")),
    ("\u{0908}", one("ii")),
    ("\u{0909}", one("u")),
    ("\u{090A}", one("uu")),
    ("\u{090B}", one(".r")),
    ("\u{090C}", one(".l")),
    ("\u{090F}", one("e")),
    ("\u{0910}", one("ai")),
    ("\u{0913}", one("o")),
    ("\u{0914}", one("au")),
    ("\u{0960}", one(".R")),
    ("\u{0961}", one(".L")),
    ("\u{0972}", one("~a")),
];

pub const OTHER: [Entry; 19] = [
    ("\u{0901}", one("/")),
    ("\u{0902}", one(".m")),
    ("\u{0903}", one(".h")),
    ("\u{093D}", one(".a")),
    ("\u{0950}", one(".o")),
    ("\u{0964}", one("|")),
    ("\u{0965}", one("||")),
    ("\u{0966}", one("0")),
    ("\u{0967}", one("1")),
    ("\u{0968}", one("2")),
    ("\u{0969}", one("3")),
    ("\u{096A}", one("4")),
    ("\u{096B}", one("5")),
    ("\u{096C}", one("6")),
    ("\u{096D}", one("7")),
    ("\u{096E}", one("8")),
    ("\u{096F}", one("9")),
    ("\u{0970}", one("@")),
    ("\u{0971}", one("#")),
];
