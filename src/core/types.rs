// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transitivity/animacy class of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerbType {
    /// Inanimate-subject intransitive.
    Vii,
    /// Animate-subject intransitive.
    Vai,
    /// Transitive with an inanimate object.
    Vti,
    /// Transitive with an animate object.
    Vta,
}

impl fmt::Display for VerbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            VerbType::Vii => "VII",
            VerbType::Vai => "VAI",
            VerbType::Vti => "VTI",
            VerbType::Vta => "VTA",
        })
    }
}

/// Stem-final sub-pattern within a conjugation class. The same tag means
/// different things in different classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Std,
    Asit,
    Asik,
    Ink,
    Inan,
    Long,
    Diph,
    Iet,
    Iaq,
    Uet,
    Eket,
    Ibar,
    Estem,
    Cons,
    Istem,
    Eyk,
    Astem,
    Kstem,
    Kuk,
    Aestem,
}

impl Variant {
    pub fn tag(self) -> &'static str {
        match self {
            Variant::Std => "std",
            Variant::Asit => "asit",
            Variant::Asik => "asik",
            Variant::Ink => "ink",
            Variant::Inan => "inan",
            Variant::Long => "long",
            Variant::Diph => "diph",
            Variant::Iet => "iet",
            Variant::Iaq => "iaq",
            Variant::Uet => "uet",
            Variant::Eket => "eket",
            Variant::Ibar => "ibar",
            Variant::Estem => "estem",
            Variant::Cons => "cons",
            Variant::Istem => "istem",
            Variant::Eyk => "eyk",
            Variant::Astem => "astem",
            Variant::Kstem => "kstem",
            Variant::Kuk => "kuk",
            Variant::Aestem => "aestem",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The classifier's verdict on a dictionary-form verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerbClassification {
    pub verb_type: VerbType,
    pub class: u8,
    pub variant: Variant,
    pub stem: String,
    pub contracted_stem: String,
}

impl VerbClassification {
    /// Dictionary namespace for this class/variant pair. Four class 4
    /// variants share the combined entries.
    pub fn namespace(&self) -> &'static str {
        match (self.class, self.variant) {
            (4, Variant::Estem | Variant::Cons | Variant::Istem | Variant::Eyk) => "comb",
            (_, variant) => variant.tag(),
        }
    }

    pub fn is_vta(&self) -> bool {
        matches!(self.class, 6 | 7)
    }

    /// VTI verbs that also agree with a plural inanimate object.
    pub fn takes_plural_object(&self) -> bool {
        matches!(self.class, 4 | 5) && !matches!(self.variant, Variant::Inan | Variant::Eyk)
    }
}

/// A raw dictionary suffix, parsed once at load time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suffix {
    /// The person has no form in this cell.
    Absent,
    Plain(String),
    /// Two dialectal endings for the same person.
    Alternatives(String, String),
    /// Boundary between object groups in a VTA cell.
    ObjectBreak,
}

impl Suffix {
    pub fn parse(raw: &str) -> Suffix {
        if raw.contains("&&") {
            Suffix::ObjectBreak
        } else if raw == "*" {
            Suffix::Absent
        } else if let Some((a, b)) = raw.split_once(':') {
            Suffix::Alternatives(a.to_string(), b.to_string())
        } else {
            Suffix::Plain(raw.to_string())
        }
    }
}

/// A surface form in a paradigm cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Form {
    Absent,
    Word(String),
    /// Dialectal alternatives, shown comma-joined.
    Alternatives(Vec<String>),
    /// Boundary between VTA object groups.
    ObjectBreak,
    /// Boundary between the singular- and plural-object halves of a VTI cell.
    PluralBreak,
}

impl Form {
    pub fn is_break(&self) -> bool {
        matches!(self, Form::ObjectBreak | Form::PluralBreak)
    }

    /// Applies `f` to every spelled-out alternative, leaving markers alone.
    pub fn map_words(&self, f: impl Fn(&str) -> String) -> Form {
        match self {
            Form::Word(w) => Form::Word(f(w)),
            Form::Alternatives(alts) => Form::Alternatives(alts.iter().map(|a| f(a)).collect()),
            other => other.clone(),
        }
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Form::Absent => f.write_str("*"),
            Form::Word(w) => f.write_str(w),
            Form::Alternatives(alts) => f.write_str(&alts.join(", ")),
            Form::ObjectBreak => f.write_str("&&"),
            Form::PluralBreak => f.write_str("||"),
        }
    }
}

/// Splits a cell at every `marker`. A cell without markers is one segment.
pub fn split_segments(forms: &[Form], marker: &Form) -> Vec<Vec<Form>> {
    forms.split(|f| f == marker).map(<[Form]>::to_vec).collect()
}

/// Inverse of `split_segments`.
pub fn join_segments(segments: Vec<Vec<Form>>, marker: Form) -> Vec<Form> {
    let mut joined = Vec::new();
    for (i, segment) in segments.into_iter().enumerate() {
        if i > 0 {
            joined.push(marker.clone());
        }
        joined.extend(segment);
    }
    joined
}

/// One tense/mood of a paradigm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParadigmCell {
    pub tense: crate::core::persons::Tense,
    pub forms: Vec<Form>,
}

/// A rendered table: a title plus rows of cells, first column being labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Table {
    pub title: String,
    pub rows: Vec<Vec<String>>,
}
