// File: src/orthography/normalize.rs
//
// Source orthography -> canonical form. Each normalizer is a grapheme table
// for the tokenizer plus the positional passes its spelling system needs.
// Francis-Smith and Listuguj write voicing and syllabicity implicitly, so they
// get the full scan; Metallic and Rand mark both explicitly; Pacifique and
// Rand do not tell /k/ from /x/, so they get uvular resolution.

use super::glyph::{CanonicalForm, Glyph};
use super::phonology::{
    fix_sonorant_distribution, g, initial, insert_initial_schwa, last,
    resolve_uvular_fricative, scan, tokenize, Grapheme, ScanRules,
};
use super::Orthography;
use Glyph::*;

const FRANCIS_SMITH: &[Grapheme] = &[
    g("ɨ", &[Schwa]),
    g("*", &[Schwa]),
    g("a'", &[LongA]),
    g("e'", &[LongE]),
    g("i'", &[LongI]),
    g("o'", &[LongO]),
    g("u'", &[LongU]),
    g("kw", &[Kw]),
    g("j", &[C]),
    g("l'", &[InitialL]),
    g("n'", &[InitialN]),
    g("m'", &[InitialM]),
];

/// The lexicon spelling is Francis-Smith with a colon for vowel length.
const LEXICON: &[Grapheme] = &[
    g("ɨ", &[Schwa]),
    g("*", &[Schwa]),
    g("a:", &[LongA]),
    g("e:", &[LongE]),
    g("i:", &[LongI]),
    g("o:", &[LongO]),
    g("u:", &[LongU]),
    g("a'", &[LongA]),
    g("e'", &[LongE]),
    g("i'", &[LongI]),
    g("o'", &[LongO]),
    g("u'", &[LongU]),
    g("kw", &[Kw]),
    g("j", &[C]),
    g("l'", &[InitialL]),
    g("n'", &[InitialN]),
    g("m'", &[InitialM]),
    g("l:", &[InitialL]),
    g("n:", &[InitialN]),
    g("m:", &[InitialM]),
];

const LISTUGUJ: &[Grapheme] = &[
    g("a'", &[LongA]),
    g("e'", &[LongE]),
    g("i'", &[LongI]),
    g("o'", &[LongO]),
    g("u'", &[LongU]),
    g("ai", &[A, Y]),
    g("a'i", &[LongA, Y]),
    g("ei", &[E, Y]),
    g("e'i", &[LongE, Y]),
    g("gw", &[Kw]),
    g("g", &[K]),
    g("j", &[C]),
    // apostrophe after an obstruent is the schwa
    g("p'", &[P, Schwa]),
    g("t'", &[T, Schwa]),
    g("k'", &[K, Schwa]),
    g("g'", &[K, Schwa]),
    g("s'", &[S, Schwa]),
    g("q'", &[Q, Schwa]),
    g("j'", &[C, Schwa]),
    g("c'", &[C, Schwa]),
];

const PACIFIQUE: &[Grapheme] = &[
    g("ai", &[A, Y]),
    g("ao", &[A, W]),
    g("ei", &[E, Y]),
    g("eo", &[E, W]),
    g("aa", &[LongA]),
    g("aai", &[LongA, Y]),
    g("aao", &[LongA, W]),
    g("ee", &[LongE]),
    g("eei", &[LongE, Y]),
    g("eeo", &[LongE, W]),
    g("ii", &[LongI]),
    g("o", &[U]),
    g("oo", &[LongU]),
    g("uu", &[LongU]),
    g("ô", &[O]),
    g("ôô", &[LongO]),
    g("go", &[Kw]),
    g("g", &[K]),
    g("tj", &[C]),
];

const RAND: &[Grapheme] = &[
    initial("ŭl", &[InitialL]),
    initial("'l", &[InitialL]),
    initial("ŭn", &[InitialN]),
    initial("'n", &[InitialN]),
    initial("ŭm", &[InitialM]),
    initial("'m", &[InitialM]),
    // stress mark
    g("'", &[]),
    g("ŭl", &[SyllabicL]),
    g("ŭn", &[SyllabicN]),
    g("ŭm", &[SyllabicM]),
    g("eei", &[LongA, Y]),
    g("oow", &[LongA, W]),
    g("ei", &[A, Y]),
    g("ow", &[A, W]),
    g("āā", &[LongE, Y]),
    g("ee", &[LongI]),
    g("ŭŭ", &[Schwa]),
    g("ăă", &[LongA]),
    g("aa", &[LongA]),
    g("ĕĕ", &[LongE]),
    g("ĭĭ", &[LongI]),
    g("uu", &[LongI, W]),
    g("u", &[I, W]),
    g("ü", &[I, W]),
    g("oo", &[U]),
    g("ŏŏ", &[U]),
    g("ŭ", &[Schwa]),
    g("ă", &[A]),
    g("â", &[LongA]),
    g("ä", &[A]),
    g("e", &[I]),
    g("ë", &[I]),
    g("ĕ", &[E]),
    g("ā", &[LongE]),
    last("ā", &[E, Y]),
    g("ĭ", &[I]),
    g("ï", &[I]),
    g("ō", &[LongO]),
    g("ŏ", &[O]),
    g("ö", &[O]),
    g("h", &[Q]),
    g("tç", &[C]),
    g("ch", &[C]),
    g("dj", &[J]),
    g("gw", &[Gw]),
    g("kw", &[Kw]),
];

/// Keyboard fallbacks for the Rand diacritics.
const RAND_FALLBACKS: &[(&str, &str)] = &[
    ("a-", "ā"),
    ("a/", "ă"),
    ("a!", "â"),
    ("a:", "ä"),
    ("e/", "ĕ"),
    ("e:", "ë"),
    ("i/", "ĭ"),
    ("i:", "ï"),
    ("o/", "ŏ"),
    ("o-", "ō"),
    ("o:", "ö"),
    ("u/", "ŭ"),
    ("u:", "ü"),
    ("tc", "tç"),
];

const METALLIC: &[Grapheme] = &[
    g("ê", &[Schwa]),
    g("e!", &[Schwa]),
    initial("êl", &[InitialL]),
    initial("ên", &[InitialN]),
    initial("êm", &[InitialM]),
    initial("e!l", &[InitialL]),
    initial("e!n", &[InitialN]),
    initial("e!m", &[InitialM]),
    g("êl", &[SyllabicL]),
    g("ên", &[SyllabicN]),
    g("êm", &[SyllabicM]),
    g("e!l", &[SyllabicL]),
    g("e!n", &[SyllabicN]),
    g("e!m", &[SyllabicM]),
    g("ch", &[C]),
    g("kw", &[Kw]),
    g("gw", &[Gw]),
    g("à", &[LongA]),
    g("è", &[LongE]),
    g("ì", &[LongI]),
    g("ò", &[LongO]),
    g("ù", &[LongU]),
];

/// Maps one lowercase word in `source` spelling to canonical form.
pub fn normalize(word: &str, source: Orthography) -> CanonicalForm {
    let glyphs = match source {
        Orthography::FrancisSmith => implicit(word, FRANCIS_SMITH, false),
        Orthography::Lexicon => implicit(word, LEXICON, false),
        Orthography::Listuguj => implicit(word, LISTUGUJ, true),
        Orthography::Pacifique => pacifique(word),
        Orthography::Rand => rand(word),
        Orthography::Metallic => fix_sonorant_distribution(&tokenize(word, METALLIC)),
    };
    CanonicalForm::new(glyphs)
}

/// Spellings that leave voicing and syllabic sonorants to position.
fn implicit(word: &str, table: &[Grapheme], initial_syllabics: bool) -> Vec<Glyph> {
    let rules = ScanRules {
        medial_syllabics: true,
        initial_syllabics,
        voicing: true,
    };
    let scanned = scan(&tokenize(word, table), rules);
    fix_sonorant_distribution(&insert_initial_schwa(scanned))
}

fn pacifique(word: &str) -> Vec<Glyph> {
    let rules = ScanRules {
        voicing: true,
        ..ScanRules::default()
    };
    let scanned = scan(&tokenize(word, PACIFIQUE), rules);
    resolve_uvular_fricative(&fix_sonorant_distribution(&scanned))
}

fn rand(word: &str) -> Vec<Glyph> {
    let expanded = expand_rand_fallbacks(word);
    let glyphs = tokenize(&expanded, RAND);
    resolve_uvular_fricative(&fix_sonorant_distribution(&glyphs))
}

fn expand_rand_fallbacks(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut rest = word;
    'outer: while !rest.is_empty() {
        for (typed, letter) in RAND_FALLBACKS {
            if let Some(tail) = rest.strip_prefix(typed) {
                out.push_str(letter);
                rest = tail;
                continue 'outer;
            }
        }
        let Some(c) = rest.chars().next() else { break };
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canon(word: &str, source: Orthography) -> String {
        normalize(word, source).to_string()
    }

    #[test]
    fn francis_smith_voicing_and_length() {
        assert_eq!(canon("teluisit", Orthography::FrancisSmith), "deluisit");
        assert_eq!(canon("ta'n", Orthography::FrancisSmith), "d@n");
        assert_eq!(canon("kesalatl", Orthography::FrancisSmith), "gesalad0");
    }

    #[test]
    fn francis_smith_schwa_and_coarticulation() {
        assert_eq!(canon("nestɨk", Orthography::FrancisSmith), "nest*k");
        assert_eq!(canon("kwe'", Orthography::FrancisSmith), "#3");
        assert_eq!(canon("kjijitu", Orthography::FrancisSmith), "*kcijidu");
    }

    #[test]
    fn francis_smith_syllabic_sonorants() {
        assert_eq!(canon("l'nu", Orthography::FrancisSmith), "6nu");
        assert_eq!(canon("kmu'j", Orthography::FrancisSmith), "g8&c");
    }

    #[test]
    fn listuguj_apostrophe_schwa_and_diphthongs() {
        assert_eq!(canon("put'p", Orthography::Listuguj), "bud*p");
        assert_eq!(canon("gmu'j", Orthography::Listuguj), "g8&c");
        assert_eq!(canon("gaiptm", Orthography::Listuguj), "gaypt8");
    }

    #[test]
    fn listuguj_initial_syllabic() {
        assert_eq!(canon("lnu", Orthography::Listuguj), "6nu");
    }

    #[test]
    fn lexicon_colon_length() {
        assert_eq!(
            canon("ta:n", Orthography::Lexicon),
            canon("ta'n", Orthography::FrancisSmith)
        );
        assert_eq!(canon("l:nu", Orthography::Lexicon), "6nu");
    }

    #[test]
    fn pacifique_vowels_and_uvular() {
        assert_eq!(canon("taan", Orthography::Pacifique), "d@n");
        assert_eq!(canon("goesas", Orthography::Pacifique), "#esas");
        assert_eq!(canon("ag", Orthography::Pacifique), "aq");
    }

    #[test]
    fn rand_fallbacks_and_initial_syllabic() {
        assert_eq!(canon("ŭlnoo", Orthography::Rand), "6nu");
        assert_eq!(canon("u/lnoo", Orthography::Rand), "6nu");
        assert_eq!(canon("mĭgmăk", Orthography::Rand), "migmaq");
    }

    #[test]
    fn rand_final_long_e() {
        assert_eq!(canon("ā", Orthography::Rand), "ey");
        assert_eq!(canon("āt", Orthography::Rand), "3t");
    }

    #[test]
    fn metallic_explicit_marking() {
        assert_eq!(canon("êlnu", Orthography::Metallic), "6nu");
        assert_eq!(canon("tàn", Orthography::Metallic), "t@n");
        assert_eq!(canon("kêchkw", Orthography::Metallic), "k*c$");
    }
}
