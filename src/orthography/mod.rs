// File: src/orthography/mod.rs
//
// Hub-and-spoke conversion between the six Mi'kmaw spellings. A word is
// normalized from its source spelling into canonical glyphs once and then
// encoded into every target spelling, so there are six normalizers and six
// encoders instead of thirty pairwise converters.
//
//   text --route--> spans --normalize--> CanonicalForm --encode--> Transliterations

pub mod encode;
pub mod escape;
pub mod glyph;
pub mod normalize;
pub mod phonology;

use crate::error::{ConjugatorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use encode::{encode, encode_as, Transliterations};
pub use escape::{check_escapes, route, Span};
pub use glyph::{CanonicalForm, Glyph};
pub use normalize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Orthography {
    FrancisSmith,
    Listuguj,
    Pacifique,
    Rand,
    Lexicon,
    Metallic,
}

impl Orthography {
    pub const ALL: [Orthography; 6] = [
        Orthography::FrancisSmith,
        Orthography::Listuguj,
        Orthography::Pacifique,
        Orthography::Rand,
        Orthography::Lexicon,
        Orthography::Metallic,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Orthography::FrancisSmith => "francis-smith",
            Orthography::Listuguj => "listuguj",
            Orthography::Pacifique => "pacifique",
            Orthography::Rand => "rand",
            Orthography::Lexicon => "lexicon",
            Orthography::Metallic => "metallic",
        }
    }

    /// Pacifique and Rand predate the phonemic spellings; conversions from
    /// them are reconstructions.
    pub fn is_approximate(self) -> bool {
        matches!(self, Orthography::Pacifique | Orthography::Rand)
    }
}

impl fmt::Display for Orthography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Orthography {
    type Err = ConjugatorError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "francissmith" | "fs" => Ok(Orthography::FrancisSmith),
            "listuguj" => Ok(Orthography::Listuguj),
            "pacifique" => Ok(Orthography::Pacifique),
            "rand" => Ok(Orthography::Rand),
            "lexicon" => Ok(Orthography::Lexicon),
            "metallic" => Ok(Orthography::Metallic),
            _ => Err(ConjugatorError::UnknownOrthography(s.to_string())),
        }
    }
}

/// Result of converting one piece of text out of `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionOutput {
    pub source: Orthography,
    #[serde(flatten)]
    pub forms: Transliterations,
    pub pacifique_disclaimer: bool,
    pub rand_disclaimer: bool,
    /// Character position of a `{` that is never closed. Everything after
    /// it was copied verbatim.
    pub unterminated_escape: Option<usize>,
}

/// Converts free text written in `source` into all six spellings. Escaped
/// spans are copied verbatim. Input longer than `max_chars` is rejected.
pub fn convert(text: &str, source: Orthography, max_chars: usize) -> Result<ConversionOutput> {
    if text.chars().count() > max_chars {
        return Err(ConjugatorError::InputTooLong { limit: max_chars });
    }

    let mut forms = Transliterations::default();
    for span in route(text) {
        if span.escaped {
            forms.push_verbatim(&span.text);
        } else {
            forms.push(&convert_word(&span.text, source, span.upper_initial));
        }
    }

    let unterminated_escape = match check_escapes(text) {
        Err(ConjugatorError::MalformedEscape { position }) => Some(position),
        _ => None,
    };

    Ok(ConversionOutput {
        source,
        forms,
        pacifique_disclaimer: source == Orthography::Pacifique,
        rand_disclaimer: source == Orthography::Rand,
        unterminated_escape,
    })
}

/// Converts a single word (with any surrounding whitespace) without escape
/// handling or a length cap. Used for generated verb forms.
pub fn convert_word(span: &str, source: Orthography, upper_initial: bool) -> Transliterations {
    let core = span.trim();
    if core.is_empty() {
        let mut out = Transliterations::default();
        out.push_verbatim(span);
        return out;
    }
    let leading = &span[..span.len() - span.trim_start().len()];
    let trailing = &span[span.trim_end().len()..];

    let canonical = normalize(&core.to_lowercase(), source);
    encode(&canonical).map(|word| {
        let word = if upper_initial {
            retain_initial_capital(word)
        } else {
            word.to_string()
        };
        format!("{leading}{word}{trailing}")
    })
}

/// Re-encodes a run of words from `source` into a single `target` spelling.
pub fn transcribe(text: &str, source: Orthography, target: Orthography) -> String {
    if source == target {
        return text.to_string();
    }
    route(text)
        .into_iter()
        .map(|span| {
            if span.escaped {
                span.text
            } else {
                convert_word(&span.text, source, span.upper_initial)
                    .get(target)
                    .to_string()
            }
        })
        .collect()
}

/// Uppercases the first character, by code point.
pub fn retain_initial_capital(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tags_loosely() {
        assert_eq!("Francis-Smith".parse::<Orthography>().unwrap(), Orthography::FrancisSmith);
        assert_eq!("francis_smith".parse::<Orthography>().unwrap(), Orthography::FrancisSmith);
        assert_eq!("LISTUGUJ".parse::<Orthography>().unwrap(), Orthography::Listuguj);
        assert!("cyrillic".parse::<Orthography>().is_err());
    }

    #[test]
    fn escaped_span_is_untouched_in_every_spelling() {
        let out = convert("{DoNotTouch} regularword", Orthography::FrancisSmith, 40).unwrap();
        for orthography in Orthography::ALL {
            assert!(
                out.forms.get(orthography).starts_with("DoNotTouch "),
                "{orthography}: {}",
                out.forms.get(orthography)
            );
        }
        // g and d are read as voiced stops, which Francis-Smith spells k and t
        assert_eq!(out.forms.francis_smith, "DoNotTouch rekularwort");
    }

    #[test]
    fn unterminated_escape_is_reported_with_the_output() {
        let out = convert("{", Orthography::FrancisSmith, 40).unwrap();
        assert_eq!(out.unterminated_escape, Some(0));
        assert_eq!(out.forms.francis_smith, "");

        let out = convert("ta'n {L'nu", Orthography::FrancisSmith, 40).unwrap();
        assert_eq!(out.unterminated_escape, Some(5));
        assert_eq!(out.forms.listuguj, "ta'n L'nu");

        let closed = convert("{L'nu} ta'n", Orthography::FrancisSmith, 40).unwrap();
        assert_eq!(closed.unterminated_escape, None);
    }

    #[test]
    fn capital_is_kept_per_word() {
        let out = convert("L'nu ta'n", Orthography::FrancisSmith, 40).unwrap();
        assert_eq!(out.forms.francis_smith, "L'nu ta'n");
        assert_eq!(out.forms.listuguj, "Lnu ta'n");
        assert_eq!(out.forms.metallic, "Êlnu dàn");
    }

    #[test]
    fn capital_is_code_point_aware() {
        assert_eq!(retain_initial_capital("ŭlnoo"), "Ŭlnoo");
        assert_eq!(retain_initial_capital(""), "");
    }

    #[test]
    fn disclaimers_follow_the_source() {
        let out = convert("taan", Orthography::Pacifique, 40).unwrap();
        assert!(out.pacifique_disclaimer);
        assert!(!out.rand_disclaimer);
        assert_eq!(out.forms.francis_smith, "ta'n");

        let out = convert("ta'n", Orthography::FrancisSmith, 40).unwrap();
        assert!(!out.pacifique_disclaimer && !out.rand_disclaimer);
    }

    #[test]
    fn input_cap() {
        let long = "a".repeat(41);
        assert!(matches!(
            convert(&long, Orthography::FrancisSmith, 40),
            Err(ConjugatorError::InputTooLong { limit: 40 })
        ));
    }

    #[test]
    fn transcribe_keeps_spacing() {
        assert_eq!(
            transcribe("mu teluisin", Orthography::FrancisSmith, Orthography::Listuguj),
            "mu teluisin"
        );
        assert_eq!(
            transcribe("ma' kmu'j", Orthography::FrancisSmith, Orthography::Listuguj),
            "ma' gmu'j"
        );
    }
}
