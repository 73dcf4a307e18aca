// File: src/orthography/phonology.rs
//
// Shared machinery for the normalizers: a longest-match grapheme tokenizer
// and the positional passes that turn a tokenized word into canonical form.
//
// Every pass reads an immutable input slice and writes a fresh vector, so a
// rule never sees a glyph that an earlier position in the same pass produced.
// The one exception is `fix_sonorant_distribution`, which deliberately looks
// at its own output to the left; that is what makes it idempotent.

use super::glyph::Glyph;

/// Where a grapheme is allowed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Anywhere,
    WordInitial,
    WordFinal,
}

/// One spelling unit of a source orthography and the glyphs it stands for.
#[derive(Debug, Clone, Copy)]
pub struct Grapheme {
    pub spelling: &'static str,
    pub glyphs: &'static [Glyph],
    pub anchor: Anchor,
}

pub const fn g(spelling: &'static str, glyphs: &'static [Glyph]) -> Grapheme {
    Grapheme {
        spelling,
        glyphs,
        anchor: Anchor::Anywhere,
    }
}

pub const fn initial(spelling: &'static str, glyphs: &'static [Glyph]) -> Grapheme {
    Grapheme {
        spelling,
        glyphs,
        anchor: Anchor::WordInitial,
    }
}

pub const fn last(spelling: &'static str, glyphs: &'static [Glyph]) -> Grapheme {
    Grapheme {
        spelling,
        glyphs,
        anchor: Anchor::WordFinal,
    }
}

fn is_boundary_char(c: char) -> bool {
    matches!(c, ' ' | '.' | ',') || c.is_whitespace()
}

/// Splits `text` into glyphs. At each position the longest matching grapheme
/// wins; anchored graphemes beat unanchored ones of the same length. Letters
/// no grapheme claims fall back to `Glyph::from_letter`.
pub fn tokenize(text: &str, table: &[Grapheme]) -> Vec<Glyph> {
    let mut glyphs = Vec::with_capacity(text.len());
    let mut offset = 0;

    while offset < text.len() {
        let rest = &text[offset..];
        let word_initial = offset == 0
            || text[..offset]
                .chars()
                .next_back()
                .map_or(true, is_boundary_char);

        let mut best: Option<&Grapheme> = None;
        for grapheme in table {
            if !rest.starts_with(grapheme.spelling) {
                continue;
            }
            let anchored = match grapheme.anchor {
                Anchor::Anywhere => false,
                Anchor::WordInitial if word_initial => true,
                Anchor::WordFinal
                    if rest[grapheme.spelling.len()..]
                        .chars()
                        .next()
                        .map_or(true, is_boundary_char) =>
                {
                    true
                }
                _ => continue,
            };
            let better = match best {
                None => true,
                Some(current) => {
                    let current_anchored = current.anchor != Anchor::Anywhere;
                    (grapheme.spelling.len(), anchored)
                        > (current.spelling.len(), current_anchored)
                }
            };
            if better {
                best = Some(grapheme);
            }
        }

        match best {
            Some(grapheme) => {
                glyphs.extend_from_slice(grapheme.glyphs);
                offset += grapheme.spelling.len();
            }
            None => {
                let Some(c) = rest.chars().next() else { break };
                glyphs.push(Glyph::from_letter(c));
                offset += c.len_utf8();
            }
        }
    }

    glyphs
}

fn is_word_start(glyphs: &[Glyph], i: usize) -> bool {
    i == 0 || glyphs[i - 1].is_delineator()
}

/// Which positional rules a source orthography needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanRules {
    /// Mark a plain sonorant after a consonant or sonorant as syllabic.
    pub medial_syllabics: bool,
    /// Mark a word-initial sonorant before a consonant or sonorant as syllabic.
    pub initial_syllabics: bool,
    /// Voice word-initial and intervocalic voiceless stops.
    pub voicing: bool,
}

/// The single left-to-right positional scan.
pub fn scan(glyphs: &[Glyph], rules: ScanRules) -> Vec<Glyph> {
    glyphs
        .iter()
        .enumerate()
        .map(|(i, &glyph)| {
            let prev = if is_word_start(glyphs, i) {
                None
            } else {
                Some(glyphs[i - 1])
            };
            let next = glyphs.get(i + 1).copied();

            if glyph.is_plain_sonorant() {
                return match prev {
                    Some(p)
                        if rules.medial_syllabics
                            && (p.is_consonant() || p.is_sonorant())
                            && !p.is_semivowel() =>
                    {
                        glyph.syllabic()
                    }
                    None if rules.initial_syllabics
                        && next.is_some_and(|n| n.is_consonant() || n.is_sonorant()) =>
                    {
                        glyph.initial_syllabic()
                    }
                    _ => glyph,
                };
            }

            if rules.voicing && glyph.is_allophonically_voiced() {
                let voiced = match (prev, next) {
                    (None, Some(n)) => !n.is_consonant(),
                    (Some(p), Some(n)) if !n.is_delineator() => {
                        !p.is_consonant() && !n.is_consonant()
                    }
                    _ => false,
                };
                if voiced {
                    return glyph.voiced();
                }
            }

            glyph
        })
        .collect()
}

/// Prepends a schwa when the word opens with two consonants.
pub fn insert_initial_schwa(mut glyphs: Vec<Glyph>) -> Vec<Glyph> {
    if glyphs.len() >= 2 && glyphs[0].is_consonant() && glyphs[1].is_consonant() {
        glyphs.insert(0, Glyph::Schwa);
    }
    glyphs
}

/// Undoes syllabic marking the scan over-applies: a syllabic sonorant right
/// after an initial syllabic, a second syllabic n, or a syllabic n after a
/// plain n.
pub fn fix_sonorant_distribution(glyphs: &[Glyph]) -> Vec<Glyph> {
    let mut out: Vec<Glyph> = Vec::with_capacity(glyphs.len());
    for &glyph in glyphs {
        let fixed = match (out.last().copied(), glyph) {
            (Some(prev), g) if prev.is_initial_syllabic() && g.is_medial_syllabic() => g.plain(),
            (Some(Glyph::SyllabicN), Glyph::SyllabicN) => Glyph::N,
            (Some(Glyph::N), Glyph::SyllabicN) => Glyph::N,
            (_, g) => g,
        };
        out.push(fixed);
    }
    out
}

/// Orthographies that write /x/ with the velar letter get it back here: a
/// velar becomes the uvular fricative word-initially before a low back
/// vowel, after a low back vowel unless i follows, or word-finally after a
/// low back vowel.
pub fn resolve_uvular_fricative(glyphs: &[Glyph]) -> Vec<Glyph> {
    let mut out = Vec::with_capacity(glyphs.len());
    for (i, &glyph) in glyphs.iter().enumerate() {
        if !(glyph.is_velar() || glyph.is_labialized_velar()) {
            out.push(glyph);
            continue;
        }
        let prev = if is_word_start(glyphs, i) {
            None
        } else {
            Some(glyphs[i - 1])
        };
        let next = glyphs.get(i + 1).copied().filter(|n| !n.is_delineator());

        let uvular = match (prev, next) {
            (None, Some(n)) => n.is_low_back_vowel(),
            (None, None) => false,
            (Some(p), Some(n)) => p.is_low_back_vowel() && !n.is_high_front_vowel(),
            (Some(p), None) => p.is_low_back_vowel(),
        };

        match (uvular, glyph.is_labialized_velar()) {
            (false, _) => out.push(glyph),
            (true, false) => out.push(Glyph::Q),
            (true, true) => out.extend([Glyph::Q, Glyph::W]),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orthography::glyph::CanonicalForm;

    fn glyphs(notation: &str) -> Vec<Glyph> {
        notation.parse::<CanonicalForm>().unwrap().into_glyphs()
    }

    fn notation(glyphs: &[Glyph]) -> String {
        CanonicalForm::new(glyphs.to_vec()).to_string()
    }

    const TABLE: &[Grapheme] = &[
        g("a'", &[Glyph::LongA]),
        g("kw", &[Glyph::Kw]),
        initial("'l", &[Glyph::InitialL]),
        g("'", &[]),
        last("ā", &[Glyph::E, Glyph::Y]),
        g("ā", &[Glyph::LongE]),
    ];

    #[test]
    fn tokenizer_prefers_longest_match() {
        assert_eq!(notation(&tokenize("kwa'", TABLE)), "$@");
    }

    #[test]
    fn tokenizer_honours_anchors() {
        assert_eq!(notation(&tokenize("'la'l", TABLE)), "6@l");
        assert_eq!(notation(&tokenize("āsā", TABLE)), "3sey");
        assert_eq!(notation(&tokenize("sā ā", TABLE)), "sey ey");
    }

    #[test]
    fn tokenizer_passes_unknown_characters() {
        assert_eq!(tokenize("x-", TABLE), vec![Glyph::Other('x'), Glyph::Other('-')]);
    }

    #[test]
    fn scan_voices_initial_and_intervocalic_stops() {
        let rules = ScanRules {
            voicing: true,
            ..ScanRules::default()
        };
        assert_eq!(notation(&scan(&glyphs("tapat"), rules)), "dabat");
        // flanking consonant blocks voicing
        assert_eq!(notation(&scan(&glyphs("apsa"), rules)), "apsa");
        assert_eq!(notation(&scan(&glyphs("tka"), rules)), "tka");
    }

    #[test]
    fn scan_marks_medial_syllabics_but_not_after_semivowels() {
        let rules = ScanRules {
            medial_syllabics: true,
            ..ScanRules::default()
        };
        assert_eq!(notation(&scan(&glyphs("pma"), rules)), "p8a");
        assert_eq!(notation(&scan(&glyphs("wla"), rules)), "wla");
        assert_eq!(notation(&scan(&glyphs("ama"), rules)), "ama");
    }

    #[test]
    fn scan_marks_initial_syllabics_before_consonants() {
        let rules = ScanRules {
            initial_syllabics: true,
            ..ScanRules::default()
        };
        assert_eq!(notation(&scan(&glyphs("lpa"), rules)), "6pa");
        assert_eq!(notation(&scan(&glyphs("la"), rules)), "la");
    }

    #[test]
    fn initial_schwa_only_before_two_consonants() {
        assert_eq!(notation(&insert_initial_schwa(glyphs("kta"))), "*kta");
        assert_eq!(notation(&insert_initial_schwa(glyphs("kma"))), "kma");
    }

    #[test]
    fn fix_sonorant_distribution_cases() {
        assert_eq!(notation(&fix_sonorant_distribution(&glyphs("68a"))), "6ma");
        assert_eq!(notation(&fix_sonorant_distribution(&glyphs("709"))), "7l9");
        assert_eq!(notation(&fix_sonorant_distribution(&glyphs("99"))), "9n");
        assert_eq!(notation(&fix_sonorant_distribution(&glyphs("n9"))), "nn");
        assert_eq!(notation(&fix_sonorant_distribution(&glyphs("999"))), "9nn");
    }

    #[test]
    fn fix_sonorant_distribution_is_idempotent() {
        for sample in ["68a", "70909", "99999", "n9n9", "p8a", "+89", "a9n99l0"] {
            let once = fix_sonorant_distribution(&glyphs(sample));
            let twice = fix_sonorant_distribution(&once);
            assert_eq!(once, twice, "not idempotent for {sample}");
        }
    }

    #[test]
    fn uvular_resolution_follows_vowel_backness() {
        assert_eq!(notation(&resolve_uvular_fricative(&glyphs("kal"))), "qal");
        assert_eq!(notation(&resolve_uvular_fricative(&glyphs("aks"))), "aqs");
        assert_eq!(notation(&resolve_uvular_fricative(&glyphs("aki"))), "aki");
        assert_eq!(notation(&resolve_uvular_fricative(&glyphs("tak"))), "taq");
        assert_eq!(notation(&resolve_uvular_fricative(&glyphs("ek"))), "ek");
        assert_eq!(notation(&resolve_uvular_fricative(&glyphs("%$"))), "%qw");
    }
}
