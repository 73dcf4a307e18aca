// File: src/core/classifier.rs
//
// Dictionary form -> (verb type, conjugation class, variant, stem). Endings
// are tried from longest to shortest and the first hit wins, so the order of
// the checks below is part of the grammar.

use crate::core::contraction::contract;
use crate::core::types::{Variant, VerbClassification, VerbType};
use crate::error::{ConjugatorError, Result};
use tracing::debug;

/// Letters the classifier treats as consonants (sonorants included).
pub fn is_consonant(c: char) -> bool {
    matches!(
        c,
        'j' | 'k' | 'l' | 'm' | 'n' | 'p' | 'q' | 's' | 't' | 'w' | 'y'
    )
}

pub fn is_plosive(c: char) -> bool {
    matches!(c, 'j' | 'k' | 'p' | 'q' | 's' | 't')
}

/// A matched ending: what it means and how many trailing characters to drop
/// to reach the stem.
struct Ending {
    verb_type: VerbType,
    class: u8,
    variant: Variant,
    strip: usize,
}

const fn ending(verb_type: VerbType, class: u8, variant: Variant, strip: usize) -> Ending {
    Ending {
        verb_type,
        class,
        variant,
        strip,
    }
}

pub struct StemClassifier;

impl StemClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classifies a dictionary-form verb. The word is trimmed and lowercased
    /// first; an unknown ending or an empty stem is `Unrecognized`.
    pub fn classify(&self, word: &str) -> Result<VerbClassification> {
        let word = word.trim().to_lowercase();
        let chars: Vec<char> = word.chars().collect();

        let matched = Self::match_ending(&chars)
            .ok_or_else(|| ConjugatorError::Unrecognized(word.clone()))?;
        let stem: String = chars[..chars.len() - matched.strip].iter().collect();
        if stem.is_empty() {
            return Err(ConjugatorError::Unrecognized(word));
        }

        let contracted_stem = contract(&stem, matched.class);
        debug!(
            %word,
            verb_type = %matched.verb_type,
            class = matched.class,
            variant = %matched.variant,
            %stem,
            %contracted_stem,
            "classified verb"
        );

        Ok(VerbClassification {
            verb_type: matched.verb_type,
            class: matched.class,
            variant: matched.variant,
            stem,
            contracted_stem,
        })
    }

    fn match_ending(chars: &[char]) -> Option<Ending> {
        use Variant::*;
        use VerbType::*;

        let ends = |suffix: &str| {
            let suffix: Vec<char> = suffix.chars().collect();
            chars.ends_with(&suffix)
        };
        let from_end = |n: usize| chars.len().checked_sub(n).map(|i| chars[i]);

        // five and four characters
        if ends("a'sɨk") {
            return Some(ending(Vii, 1, Asik, 5));
        }
        if ends("a'tl") {
            // two stem shapes share this ending; kept as one variant
            return Some(ending(Vta, 6, Aestem, 4));
        }

        // three characters
        if ends("a't") {
            return Some(ending(Vai, 2, Long, 3));
        }
        if ends("ayk") {
            return Some(ending(Vai, 2, Diph, 3));
        }
        if ends("iaq") {
            return Some(ending(Vii, 3, Iaq, 3));
        }
        if ends("e'k") {
            return Some(if ends("te'k") {
                ending(Vti, 4, Estem, 1)
            } else {
                ending(Vai, 3, Long, 3)
            });
        }
        if ends("ink") {
            return Some(ending(Vai, 1, Ink, 3));
        }
        if ends("tɨk") {
            return Some(ending(Vti, 4, Ibar, 3));
        }
        if ends("a'q") {
            return Some(ending(Vti, 4, Astem, 3));
        }
        if ends("i'k") {
            return Some(ending(Vti, 4, Istem, 1));
        }
        if ends("toq") {
            return Some(ending(Vti, 5, Std, 2));
        }
        if ends("atl") {
            if ends("iatl") {
                return Some(ending(Vta, 6, Istem, 4));
            }
            if ends("uatl") {
                return Some(ending(Vta, 7, Std, 4));
            }
            // a consonant after a long vowel before -atl takes the ibar pattern
            let long_closed = matches!(
                (from_end(5), from_end(4)),
                (Some('\''), Some(c)) if is_consonant(c)
            );
            return Some(ending(Vta, 6, if long_closed { Ibar } else { Std }, 3));
        }
        if ends("u'k") {
            return Some(ending(Vii, 4, Inan, 3));
        }

        // two characters
        if ends("it") {
            return Some(if ends("a'sit") {
                ending(Vai, 1, Asit, 5)
            } else {
                ending(Vai, 1, Std, 2)
            });
        }
        if ends("at") {
            return Some(ending(Vai, 2, Std, 2));
        }
        if ends("et") {
            let (variant, strip) = if ends("iet") {
                (Iet, 3)
            } else if ends("uet") || ends("wet") {
                (Uet, 2)
            } else if ends("eket") {
                (Eket, 4)
            } else {
                (Std, 2)
            };
            return Some(ending(Vai, 3, variant, strip));
        }
        if ends("tk") {
            return Some(ending(Vti, 4, Std, 2));
        }
        if from_end(1) == Some('k') {
            if let Some(c) = from_end(2).filter(|&c| is_consonant(c) && c != 't') {
                debug!(consonant = %c, "consonant-final stem");
                return Some(if chars == ['e', 'y', 'k'].as_slice() {
                    ending(Vai, 4, Eyk, 1)
                } else {
                    ending(Vti, 4, Cons, 1)
                });
            }
        }
        if ends("ɨk") && from_end(3) != Some('t') {
            return Some(ending(Vti, 4, Kstem, 2));
        }
        if ends("uk") {
            return Some(ending(Vti, 5, Kuk, 2));
        }
        if ends("ik") {
            return Some(if ends("a'sik") {
                ending(Vii, 1, Asik, 5)
            } else {
                ending(Vii, 1, Inan, 2)
            });
        }
        if ends("aq") {
            return Some(ending(Vii, 2, Inan, 2));
        }
        if ends("ek") {
            return Some(ending(Vii, 3, Inan, 2));
        }

        None
    }
}

impl Default for StemClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(word: &str) -> VerbClassification {
        StemClassifier::new().classify(word).unwrap()
    }

    #[test]
    fn teluisit_is_class_one_standard() {
        let verb = classify("teluisit");
        assert_eq!(verb.verb_type, VerbType::Vai);
        assert_eq!(verb.class, 1);
        assert_eq!(verb.variant, Variant::Std);
        assert_eq!(verb.stem, "telui");
    }

    #[test]
    fn nenk_is_consonant_stem_vti() {
        let verb = classify("nenk");
        assert_eq!((verb.verb_type, verb.class, verb.variant), (VerbType::Vti, 4, Variant::Cons));
        assert_eq!(verb.stem, "nen");
        assert_eq!(verb.contracted_stem, "nɨn");
    }

    #[test]
    fn atl_refinement() {
        let std = classify("kesalatl");
        assert_eq!((std.class, std.variant, std.stem.as_str()), (6, Variant::Std, "kesal"));
        let ibar = classify("e'natl");
        assert_eq!((ibar.class, ibar.variant, ibar.stem.as_str()), (6, Variant::Ibar, "e'n"));
        let istem = classify("nemiatl");
        assert_eq!((istem.class, istem.variant, istem.stem.as_str()), (6, Variant::Istem, "nem"));
        let seven = classify("kisituatl");
        assert_eq!((seven.class, seven.verb_type), (7, VerbType::Vta));
        assert_eq!(seven.stem, "kisit");
    }

    #[test]
    fn merged_atl_variant() {
        let verb = classify("pesa'tl");
        assert_eq!((verb.class, verb.variant, verb.stem.as_str()), (6, Variant::Aestem, "pes"));
    }

    #[test]
    fn schwa_endings_strip_by_character() {
        let ibar = classify("nestɨk");
        assert_eq!((ibar.variant, ibar.stem.as_str()), (Variant::Ibar, "nes"));
        let kstem = classify("ewi'kɨk");
        assert_eq!((kstem.variant, kstem.stem.as_str()), (Variant::Kstem, "ewi'k"));
        let asik = classify("enqa'sɨk");
        assert_eq!((asik.verb_type, asik.variant, asik.stem.as_str()), (VerbType::Vii, Variant::Asik, "enq"));
    }

    #[test]
    fn long_vowel_endings_keep_the_length_mark() {
        assert_eq!(classify("telte'k").stem, "telte'");
        assert_eq!(classify("ketkwi'k").stem, "ketkwi'");
        assert_eq!(classify("wele'k").variant, Variant::Long);
        assert_eq!(classify("wele'k").stem, "wel");
    }

    #[test]
    fn et_sub_variants() {
        assert_eq!(classify("eliet").variant, Variant::Iet);
        assert_eq!(classify("teluet").variant, Variant::Uet);
        assert_eq!(classify("teweket").variant, Variant::Eket);
        assert_eq!(classify("teweket").stem, "tew");
        assert_eq!(classify("ewi'kiket").variant, Variant::Std);
    }

    #[test]
    fn eyk_is_its_own_vai() {
        let verb = classify("eyk");
        assert_eq!((verb.verb_type, verb.class, verb.variant), (VerbType::Vai, 4, Variant::Eyk));
        assert_eq!(verb.contracted_stem, "i'");
    }

    #[test]
    fn input_is_trimmed_and_lowercased() {
        assert_eq!(classify("  Teluisit ").stem, "telui");
    }

    #[test]
    fn unknown_endings_and_empty_stems_are_unrecognized() {
        let classifier = StemClassifier::new();
        assert!(matches!(classifier.classify("xyz"), Err(ConjugatorError::Unrecognized(_))));
        assert!(matches!(classifier.classify("it"), Err(ConjugatorError::Unrecognized(_))));
        assert!(matches!(classifier.classify(""), Err(ConjugatorError::Unrecognized(_))));
    }
}
