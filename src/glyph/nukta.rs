/// The nukta sign
pub const NUKTA: char = '\u{093C}';

/// Base consonant followed by a nukta, and the precomposed code point for it
const NUKTA_FORMS: [(&str, &str); 11] = [
    ("\u{0915}\u{093C}", "\u{0958}"), // qa
    ("\u{0916}\u{093C}", "\u{0959}"), // khha
    ("\u{0917}\u{093C}", "\u{095A}"), // ghha
    ("\u{091C}\u{093C}", "\u{095B}"), // za
    ("\u{0921}\u{093C}", "\u{095C}"), // dddha
    ("\u{0922}\u{093C}", "\u{095D}"), // rha
    ("\u{092B}\u{093C}", "\u{095E}"), // fa
    ("\u{092F}\u{093C}", "\u{095F}"), // yya
    ("\u{0930}\u{093C}", "\u{0931}"), // rra
    ("\u{0933}\u{093C}", "\u{0934}"), // llla
    ("\u{0928}\u{093C}", "\u{0929}"), // nnna
];

/// Fold every consonant + nukta sequence into its precomposed code point.
///
/// Nukta signs that don't follow one of the known consonants are kept as-is.
pub fn normalize_nukta(text: &str) -> String {
    if !text.contains(NUKTA) {
        return text.to_string();
    }
    NUKTA_FORMS
        .iter()
        .fold(text.to_string(), |s, (decomposed, precomposed)| {
            s.replace(decomposed, precomposed)
        })
}
