// File: src/orthography/encode.rs
//
// Canonical form -> every target spelling. Rendering walks the glyphs once;
// the only lookahead is for diphthongs and clusters, never for text that an
// earlier rule has produced.

use super::glyph::{CanonicalForm, Glyph};
use super::Orthography;
use serde::Serialize;
use Glyph::*;

/// One canonical word rendered in all six spellings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transliterations {
    pub francis_smith: String,
    pub listuguj: String,
    pub pacifique: String,
    pub rand: String,
    pub lexicon: String,
    pub metallic: String,
}

impl Transliterations {
    pub fn get(&self, orthography: Orthography) -> &str {
        match orthography {
            Orthography::FrancisSmith => &self.francis_smith,
            Orthography::Listuguj => &self.listuguj,
            Orthography::Pacifique => &self.pacifique,
            Orthography::Rand => &self.rand,
            Orthography::Lexicon => &self.lexicon,
            Orthography::Metallic => &self.metallic,
        }
    }

    fn get_mut(&mut self, orthography: Orthography) -> &mut String {
        match orthography {
            Orthography::FrancisSmith => &mut self.francis_smith,
            Orthography::Listuguj => &mut self.listuguj,
            Orthography::Pacifique => &mut self.pacifique,
            Orthography::Rand => &mut self.rand,
            Orthography::Lexicon => &mut self.lexicon,
            Orthography::Metallic => &mut self.metallic,
        }
    }

    /// Appends the same literal text to every spelling.
    pub fn push_verbatim(&mut self, text: &str) {
        for orthography in Orthography::ALL {
            self.get_mut(orthography).push_str(text);
        }
    }

    pub fn push(&mut self, other: &Transliterations) {
        for orthography in Orthography::ALL {
            self.get_mut(orthography).push_str(other.get(orthography));
        }
    }

    pub fn map(&self, f: impl Fn(&str) -> String) -> Transliterations {
        let mut out = Transliterations::default();
        for orthography in Orthography::ALL {
            *out.get_mut(orthography) = f(self.get(orthography));
        }
        out
    }
}

pub fn encode(form: &CanonicalForm) -> Transliterations {
    let glyphs = form.glyphs();
    Transliterations {
        francis_smith: francis_smith(glyphs),
        listuguj: listuguj(glyphs),
        pacifique: pacifique(glyphs),
        rand: rand(glyphs),
        lexicon: lexicon(glyphs),
        metallic: metallic(glyphs),
    }
}

pub fn encode_as(form: &CanonicalForm, target: Orthography) -> String {
    let glyphs = form.glyphs();
    match target {
        Orthography::FrancisSmith => francis_smith(glyphs),
        Orthography::Listuguj => listuguj(glyphs),
        Orthography::Pacifique => pacifique(glyphs),
        Orthography::Rand => rand(glyphs),
        Orthography::Lexicon => lexicon(glyphs),
        Orthography::Metallic => metallic(glyphs),
    }
}

/// The epenthetic schwa the normalizers insert is not written. A schwa
/// standing alone is a word of its own and stays.
fn without_leading_schwa(glyphs: &[Glyph]) -> &[Glyph] {
    match glyphs {
        [Schwa, rest @ ..] if !rest.is_empty() => rest,
        _ => glyphs,
    }
}

/// Collapses adjacent tʃ glyphs, which every spelling but Francis-Smith
/// writes once.
fn collapse_affricates(glyphs: &[Glyph]) -> Vec<Glyph> {
    let mut out: Vec<Glyph> = Vec::with_capacity(glyphs.len());
    for &glyph in glyphs {
        if glyph == C && out.last() == Some(&C) {
            continue;
        }
        out.push(glyph);
    }
    out
}

fn passthrough(glyph: Glyph, out: &mut String) {
    match glyph {
        A => out.push('a'),
        E => out.push('e'),
        I => out.push('i'),
        O => out.push('o'),
        U => out.push('u'),
        Q => out.push('q'),
        S => out.push('s'),
        W => out.push('w'),
        Y => out.push('y'),
        M | SyllabicM => out.push('m'),
        N | SyllabicN => out.push('n'),
        L | SyllabicL => out.push('l'),
        B => out.push('b'),
        D => out.push('d'),
        G => out.push('g'),
        J => out.push('j'),
        P => out.push('p'),
        T => out.push('t'),
        K => out.push('k'),
        C => out.push('c'),
        Delineator(c) | Other(c) => out.push(c),
        other => out.push(other.notation()),
    }
}

fn francis_smith(glyphs: &[Glyph]) -> String {
    francis_smith_with(without_leading_schwa(glyphs), '\'')
}

/// Francis-Smith with `length` marking long vowels; the lexicon spelling
/// uses a colon.
fn francis_smith_with(glyphs: &[Glyph], length: char) -> String {
    let mut out = String::with_capacity(glyphs.len() * 2);
    for &glyph in glyphs {
        match glyph {
            Schwa => out.push('ɨ'),
            LongA | LongE | LongI | LongO | LongU => {
                out.push(short_vowel(glyph));
                out.push(length);
            }
            B => out.push('p'),
            D => out.push('t'),
            G => out.push('k'),
            Kw | Gw => out.push_str("kw"),
            C | J => out.push('j'),
            InitialL => out.push_str("l'"),
            InitialN => out.push_str("n'"),
            InitialM => out.push_str("m'"),
            other => passthrough(other, &mut out),
        }
    }
    out
}

fn lexicon(glyphs: &[Glyph]) -> String {
    francis_smith_with(without_leading_schwa(glyphs), ':')
}

fn short_vowel(glyph: Glyph) -> char {
    match glyph {
        LongA => 'a',
        LongE => 'e',
        LongI => 'i',
        LongO => 'o',
        LongU => 'u',
        other => other.notation(),
    }
}

fn listuguj(glyphs: &[Glyph]) -> String {
    let mut out = String::with_capacity(glyphs.len() * 2);
    for &glyph in without_leading_schwa(glyphs) {
        match glyph {
            Schwa => out.push('\''),
            LongA | LongE | LongI | LongO | LongU => {
                out.push(short_vowel(glyph));
                out.push('\'');
            }
            B => out.push('p'),
            D => out.push('t'),
            K | G => out.push('g'),
            Kw | Gw => out.push_str("gw"),
            C | J => out.push('j'),
            Y => out.push('i'),
            InitialL => out.push('l'),
            InitialN => out.push('n'),
            InitialM => out.push('m'),
            Other('-') => {}
            other => passthrough(other, &mut out),
        }
    }
    // y is written i, which leaves doubled vowels to tidy up
    out.replace("eii", "e'i").replace("ii", "i")
}

fn pacifique(glyphs: &[Glyph]) -> String {
    let glyphs = collapse_affricates(glyphs);
    let mut out = String::with_capacity(glyphs.len() * 2);
    for &glyph in &glyphs {
        match glyph {
            Schwa => out.push('e'),
            O | LongO => out.push('ô'),
            U | LongU | W => out.push('o'),
            LongA => out.push('a'),
            LongE => out.push('e'),
            LongI | Y => out.push('i'),
            C | J => out.push_str("tj"),
            B => out.push('p'),
            D => out.push('t'),
            K | G | Q => out.push('g'),
            Kw | Gw => out.push_str("go"),
            InitialL => out.push_str("el"),
            InitialN => out.push_str("en"),
            InitialM => out.push_str("em"),
            Other('-') => {}
            other => passthrough(other, &mut out),
        }
    }
    collapse_runs(&collapse_runs(&out, 'i'), 'o')
}

fn collapse_runs(text: &str, letter: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev = None;
    for c in text.chars() {
        if c == letter && prev == Some(letter) {
            continue;
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

fn rand(glyphs: &[Glyph]) -> String {
    let mut glyphs = collapse_affricates(glyphs);
    while glyphs.len() > 1 && glyphs.first() == Some(&Schwa) {
        glyphs.remove(0);
    }
    while glyphs.len() > 1 && glyphs.last() == Some(&Schwa) {
        glyphs.pop();
    }

    let mut out = String::with_capacity(glyphs.len() * 3);
    let mut i = 0;
    while i < glyphs.len() {
        let glyph = glyphs[i];
        let next = glyphs.get(i + 1).copied();
        let prev = if i == 0 { None } else { Some(glyphs[i - 1]) };

        let diphthong = match (glyph, next) {
            (E, Some(Y)) => Some("ā"),
            (LongE, Some(Y)) => Some("āā"),
            (LongA, Some(Y)) => Some("eei"),
            (A, Some(Y)) => Some("ei"),
            (LongA, Some(W)) => Some("oow"),
            (A, Some(W)) => Some("ow"),
            (LongI, Some(W)) => Some("uu"),
            (I, Some(W)) => Some("u"),
            _ => None,
        };
        if let Some(spelling) = diphthong {
            out.push_str(spelling);
            i += 2;
            continue;
        }

        match glyph {
            Schwa => out.push('ŭ'),
            A if closes_syllable(&glyphs[i + 1..]) => out.push('ă'),
            A => out.push('a'),
            LongA => out.push('â'),
            E => out.push('ĕ'),
            LongE => out.push('ā'),
            I => out.push('e'),
            LongI => out.push_str("ee"),
            O => out.push('ŏ'),
            LongO => out.push('ō'),
            U | LongU => out.push_str("oo"),
            Q if prev.is_some_and(Glyph::is_low_back_vowel) => out.push('g'),
            Q => out.push('h'),
            C => out.push_str("ch"),
            Kw => out.push_str("kw"),
            Gw => out.push_str("gw"),
            InitialL | SyllabicL => out.push_str("ŭl"),
            InitialN | SyllabicN => out.push_str("ŭn"),
            InitialM | SyllabicM => out.push_str("ŭm"),
            Other('-') => {}
            other => passthrough(other, &mut out),
        }
        i += 1;
    }
    out
}

/// True when the following glyphs open with a two-consonant cluster, which
/// shortens a preceding a to ă.
fn closes_syllable(rest: &[Glyph]) -> bool {
    let consonantal = |g: &Glyph| g.is_consonant() || g.is_sonorant();
    rest.len() >= 2 && consonantal(&rest[0]) && consonantal(&rest[1])
}

fn metallic(glyphs: &[Glyph]) -> String {
    let glyphs = collapse_affricates(glyphs);
    let mut out = String::with_capacity(glyphs.len() * 2);
    for &glyph in &glyphs {
        match glyph {
            Schwa => out.push('ê'),
            LongA => out.push('à'),
            LongE => out.push('è'),
            LongI => out.push('ì'),
            LongO => out.push('ò'),
            LongU => out.push('ù'),
            C => out.push_str("ch"),
            Kw => out.push_str("kw"),
            Gw => out.push_str("gw"),
            InitialL | SyllabicL => out.push_str("êl"),
            InitialN | SyllabicN => out.push_str("ên"),
            InitialM | SyllabicM => out.push_str("êm"),
            Other('-') => {}
            other => passthrough(other, &mut out),
        }
    }
    out
}
