// File: src/orthography/glyph.rs
//
// The canonical intermediate representation. Every source spelling is
// tokenized into `Glyph`s and every target spelling is rendered from them, so
// each phoneme (or fixed allophone) has exactly one glyph and no glyph ever
// has to be re-read as part of a multi-character sequence.
//
// `CanonicalForm` prints in a compact one-character-per-glyph notation
// (`*` schwa, `@ 3 ! % &` long vowels, `$ #` kw/gw, `8 9 0` medial syllabic
// m/n/l, `+ 7 6` initial syllabic m/n/l, `c j` the tʃ/dʒ pair). The notation
// is only used for debugging and tests.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    A,
    E,
    I,
    O,
    U,
    LongA,
    LongE,
    LongI,
    LongO,
    LongU,
    Schwa,
    P,
    B,
    T,
    D,
    K,
    G,
    /// Voiceless labialized velar, kw.
    Kw,
    /// Voiced labialized velar, gw.
    Gw,
    /// Voiceless affricate tʃ.
    C,
    /// Voiced affricate dʒ.
    J,
    /// Uvular fricative.
    Q,
    S,
    W,
    Y,
    M,
    N,
    L,
    SyllabicM,
    SyllabicN,
    SyllabicL,
    InitialM,
    InitialN,
    InitialL,
    /// Word separator or punctuation that ends a phonological word.
    Delineator(char),
    /// Anything the orthographies have no opinion about. Passed through.
    Other(char),
}

impl Glyph {
    /// The glyph a bare letter stands for when no orthography-specific
    /// grapheme claims it.
    pub fn from_letter(c: char) -> Glyph {
        match c {
            'a' => Glyph::A,
            'e' => Glyph::E,
            'i' => Glyph::I,
            'o' => Glyph::O,
            'u' => Glyph::U,
            'p' => Glyph::P,
            'b' => Glyph::B,
            't' => Glyph::T,
            'd' => Glyph::D,
            'k' => Glyph::K,
            'g' => Glyph::G,
            'c' => Glyph::C,
            'j' => Glyph::J,
            'q' => Glyph::Q,
            's' => Glyph::S,
            'w' => Glyph::W,
            'y' => Glyph::Y,
            'm' => Glyph::M,
            'n' => Glyph::N,
            'l' => Glyph::L,
            ' ' | '.' | ',' => Glyph::Delineator(c),
            other => Glyph::Other(other),
        }
    }

    /// Parses one character of canonical notation.
    pub fn from_notation(c: char) -> Glyph {
        match c {
            '*' => Glyph::Schwa,
            '@' => Glyph::LongA,
            '3' => Glyph::LongE,
            '!' => Glyph::LongI,
            '%' => Glyph::LongO,
            '&' => Glyph::LongU,
            '$' => Glyph::Kw,
            '#' => Glyph::Gw,
            '8' => Glyph::SyllabicM,
            '9' => Glyph::SyllabicN,
            '0' => Glyph::SyllabicL,
            '+' => Glyph::InitialM,
            '7' => Glyph::InitialN,
            '6' => Glyph::InitialL,
            other => Glyph::from_letter(other),
        }
    }

    pub fn notation(self) -> char {
        match self {
            Glyph::A => 'a',
            Glyph::E => 'e',
            Glyph::I => 'i',
            Glyph::O => 'o',
            Glyph::U => 'u',
            Glyph::LongA => '@',
            Glyph::LongE => '3',
            Glyph::LongI => '!',
            Glyph::LongO => '%',
            Glyph::LongU => '&',
            Glyph::Schwa => '*',
            Glyph::P => 'p',
            Glyph::B => 'b',
            Glyph::T => 't',
            Glyph::D => 'd',
            Glyph::K => 'k',
            Glyph::G => 'g',
            Glyph::Kw => '$',
            Glyph::Gw => '#',
            Glyph::C => 'c',
            Glyph::J => 'j',
            Glyph::Q => 'q',
            Glyph::S => 's',
            Glyph::W => 'w',
            Glyph::Y => 'y',
            Glyph::M => 'm',
            Glyph::N => 'n',
            Glyph::L => 'l',
            Glyph::SyllabicM => '8',
            Glyph::SyllabicN => '9',
            Glyph::SyllabicL => '0',
            Glyph::InitialM => '+',
            Glyph::InitialN => '7',
            Glyph::InitialL => '6',
            Glyph::Delineator(c) | Glyph::Other(c) => c,
        }
    }

    // --- Predicate library ---

    /// Obstruents, the uvular fricative and the two semivowels. Sonorants are
    /// tracked separately.
    pub fn is_consonant(self) -> bool {
        matches!(
            self,
            Glyph::P
                | Glyph::B
                | Glyph::T
                | Glyph::D
                | Glyph::K
                | Glyph::G
                | Glyph::Kw
                | Glyph::Gw
                | Glyph::C
                | Glyph::J
                | Glyph::Q
                | Glyph::S
                | Glyph::W
                | Glyph::Y
        )
    }

    pub fn is_sonorant(self) -> bool {
        matches!(
            self,
            Glyph::M
                | Glyph::N
                | Glyph::L
                | Glyph::SyllabicM
                | Glyph::SyllabicN
                | Glyph::SyllabicL
                | Glyph::InitialM
                | Glyph::InitialN
                | Glyph::InitialL
        )
    }

    pub fn is_semivowel(self) -> bool {
        matches!(self, Glyph::W | Glyph::Y)
    }

    pub fn is_delineator(self) -> bool {
        matches!(self, Glyph::Delineator(_))
    }

    /// Voiceless stops, which surface voiced between vowels and word-initially.
    pub fn is_allophonically_voiced(self) -> bool {
        matches!(
            self,
            Glyph::P | Glyph::T | Glyph::K | Glyph::Kw | Glyph::C
        )
    }

    pub fn is_low_back_vowel(self) -> bool {
        matches!(self, Glyph::A | Glyph::LongA | Glyph::O | Glyph::LongO)
    }

    pub fn is_high_front_vowel(self) -> bool {
        matches!(self, Glyph::I | Glyph::LongI)
    }

    pub fn is_velar(self) -> bool {
        matches!(self, Glyph::K | Glyph::G)
    }

    pub fn is_labialized_velar(self) -> bool {
        matches!(self, Glyph::Kw | Glyph::Gw)
    }

    // --- Allophone helpers ---

    pub fn voiced(self) -> Glyph {
        match self {
            Glyph::P => Glyph::B,
            Glyph::T => Glyph::D,
            Glyph::K => Glyph::G,
            Glyph::Kw => Glyph::Gw,
            Glyph::C => Glyph::J,
            other => other,
        }
    }

    pub fn syllabic(self) -> Glyph {
        match self {
            Glyph::M => Glyph::SyllabicM,
            Glyph::N => Glyph::SyllabicN,
            Glyph::L => Glyph::SyllabicL,
            other => other,
        }
    }

    pub fn initial_syllabic(self) -> Glyph {
        match self {
            Glyph::M => Glyph::InitialM,
            Glyph::N => Glyph::InitialN,
            Glyph::L => Glyph::InitialL,
            other => other,
        }
    }

    /// Strips syllabicity from a medial syllabic sonorant.
    pub fn plain(self) -> Glyph {
        match self {
            Glyph::SyllabicM => Glyph::M,
            Glyph::SyllabicN => Glyph::N,
            Glyph::SyllabicL => Glyph::L,
            other => other,
        }
    }

    pub fn is_plain_sonorant(self) -> bool {
        matches!(self, Glyph::M | Glyph::N | Glyph::L)
    }

    pub fn is_medial_syllabic(self) -> bool {
        matches!(self, Glyph::SyllabicM | Glyph::SyllabicN | Glyph::SyllabicL)
    }

    pub fn is_initial_syllabic(self) -> bool {
        matches!(self, Glyph::InitialM | Glyph::InitialN | Glyph::InitialL)
    }
}

/// A word (or short run of words) in canonical glyphs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanonicalForm(Vec<Glyph>);

impl CanonicalForm {
    pub fn new(glyphs: Vec<Glyph>) -> Self {
        Self(glyphs)
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.0
    }

    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Glyph>> for CanonicalForm {
    fn from(glyphs: Vec<Glyph>) -> Self {
        Self(glyphs)
    }
}

impl FromStr for CanonicalForm {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.chars().map(Glyph::from_notation).collect()))
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.0 {
            write!(f, "{}", glyph.notation())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notation_round_trips() {
        let text = "*@3!%&$#890+76pbtdkgcjqswymnl .,";
        let form: CanonicalForm = text.parse().unwrap();
        assert_eq!(form.len(), text.chars().count());
        assert_eq!(form.to_string(), text);
    }

    #[test]
    fn voiced_glyphs_stay_consonants() {
        for g in [Glyph::P, Glyph::T, Glyph::K, Glyph::Kw, Glyph::C] {
            assert!(g.is_allophonically_voiced());
            assert!(g.voiced().is_consonant());
            assert!(!g.voiced().is_allophonically_voiced());
        }
    }

    #[test]
    fn sonorant_classes_are_disjoint_from_consonants() {
        for g in [Glyph::M, Glyph::SyllabicN, Glyph::InitialL] {
            assert!(g.is_sonorant());
            assert!(!g.is_consonant());
        }
        assert!(Glyph::W.is_consonant() && Glyph::W.is_semivowel());
    }

    #[test]
    fn low_back_vowels() {
        assert!(Glyph::LongA.is_low_back_vowel());
        assert!(Glyph::O.is_low_back_vowel());
        assert!(!Glyph::U.is_low_back_vowel());
        assert!(!Glyph::Schwa.is_low_back_vowel());
    }
}
