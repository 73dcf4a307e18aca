// File: src/core/locale.rs
use crate::core::persons::{Person, Tense, VtaObject, VtaSubject};
use crate::core::types::Variant;
use crate::error::{ConjugatorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// English and French, compiled in.
const EMBEDDED: &str = include_str!("../../data/localization.json");

/// Localized labels for one interface language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locale {
    pub language: String,
    /// One per paradigm cell, in display order.
    pub table_titles: Vec<String>,
    pub subject_pronouns: Vec<String>,
    /// Column headers for the singular and plural object halves of a VTI cell.
    pub inanimate_object_pronouns: Vec<String>,
    /// Corner header of two-axis tables.
    pub subject_object_split: String,
    pub vta_subject_pronouns: Vec<String>,
    pub vta_object_pronouns: Vec<String>,
    pub verb_unrecognized: String,
    pub disclaimers: Disclaimers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disclaimers {
    pub eliet: String,
    pub nestik: String,
    pub nenk: String,
    pub pewaq: String,
    pub pesatl: String,
    pub ketuk: String,
    pub eyk: String,
    pub vii: String,
    pub ewniaq: String,
}

impl Locale {
    /// Checks that every list lines up with the person and tense inventories.
    pub fn validate(&self) -> Result<()> {
        let checks: [(&'static str, usize, usize); 5] = [
            ("table_titles", Tense::ALL.len(), self.table_titles.len()),
            ("subject_pronouns", Person::ALL.len(), self.subject_pronouns.len()),
            ("inanimate_object_pronouns", 2, self.inanimate_object_pronouns.len()),
            ("vta_subject_pronouns", VtaSubject::ALL.len(), self.vta_subject_pronouns.len()),
            ("vta_object_pronouns", VtaObject::ALL.len(), self.vta_object_pronouns.len()),
        ];
        for (field, expected, found) in checks {
            if expected != found {
                return Err(ConjugatorError::InvalidLocale {
                    language: self.language.clone(),
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    pub fn title(&self, tense: Tense) -> &str {
        &self.table_titles[tense.title_index()]
    }

    pub fn subject(&self, person: Person) -> &str {
        &self.subject_pronouns[person.index()]
    }

    pub fn vta_subject(&self, subject: VtaSubject) -> &str {
        &self.vta_subject_pronouns[subject.index()]
    }

    pub fn vta_object(&self, object: VtaObject) -> &str {
        &self.vta_object_pronouns[object.index()]
    }

    pub fn disclaimer(&self, kind: DisclaimerKind) -> &str {
        let d = &self.disclaimers;
        match kind {
            DisclaimerKind::Eliet => &d.eliet,
            DisclaimerKind::Nestik => &d.nestik,
            DisclaimerKind::Nenk => &d.nenk,
            DisclaimerKind::Pewaq => &d.pewaq,
            DisclaimerKind::Pesatl => &d.pesatl,
            DisclaimerKind::Ketuk => &d.ketuk,
            DisclaimerKind::Eyk => &d.eyk,
            DisclaimerKind::Vii => &d.vii,
            DisclaimerKind::Ewniaq => &d.ewniaq,
        }
    }
}

/// All loaded locales. Only validated locales get in.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    locales: Vec<Locale>,
}

impl LocaleTable {
    pub fn from_json(json: &str) -> Result<Self> {
        let locales: Vec<Locale> = serde_json::from_str(json)?;
        for locale in &locales {
            locale.validate()?;
        }
        Ok(Self { locales })
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let table = Self::from_json(&fs::read_to_string(path)?)?;
        info!(path = %path.display(), locales = table.locales.len(), "loaded locales");
        Ok(table)
    }

    /// Looks a locale up by its tag, ignoring case.
    pub fn get(&self, language: &str) -> Result<&Locale> {
        self.locales
            .iter()
            .find(|l| l.language.eq_ignore_ascii_case(language))
            .ok_or_else(|| ConjugatorError::UnknownLanguage(language.to_string()))
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.iter().map(|l| l.language.as_str())
    }
}

/// Notes shown next to the paradigms of some models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DisclaimerKind {
    /// Land and water travel forms in the dual.
    Eliet,
    /// Alternative third person plural endings.
    Nestik,
    /// Some verbs of the group take inanimate subjects only.
    Nenk,
    Pewaq,
    /// Some verbs of the group have a- stems, some e- stems.
    Pesatl,
    Ketuk,
    Eyk,
    /// Several future forms for inanimate subjects.
    Vii,
    Ewniaq,
}

/// How a class/variant pair is presented: its conjugation label, the verb it
/// is modelled on and an optional note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub label: &'static str,
    pub model: &'static str,
    pub disclaimer: Option<DisclaimerKind>,
}

const fn model(label: &'static str, model: &'static str, disclaimer: Option<DisclaimerKind>) -> ModelInfo {
    ModelInfo {
        label,
        model,
        disclaimer,
    }
}

pub fn model_info(class: u8, variant: Variant) -> Option<ModelInfo> {
    use DisclaimerKind as D;
    use Variant::*;

    let info = match (class, variant) {
        (1, Asit) => model("1", "pejila'sit", None),
        (1, Asik) => model("1", "enqa'sik", Some(D::Vii)),
        (1, Ink) => model("1", "pekisink", None),
        (1, Inan) => model("1", "maqatkwik", Some(D::Vii)),
        (1, Std) => model("1", "teluisit", None),
        (2, Long) => model("2", "ajipuna't", None),
        (2, Inan) => model("2", "pesaq", Some(D::Vii)),
        (2, Diph) => model("1~2", "wekayk", None),
        (2, Std) => model("2", "amalkat", None),
        (3, Iet) => model("3", "eliet", Some(D::Eliet)),
        (3, Iaq) => model("3", "ewniaq", Some(D::Ewniaq)),
        (3, Uet) => model("3", "teluet", None),
        (3, Eket) => model("3", "teweket", None),
        (3, Long) => model("1~3", "wele'k", None),
        (3, Inan) => model("3", "te'sipunqek", Some(D::Vii)),
        (3, Std) => model("3", "ewi'kiket", None),
        (4, Ibar) => model("4", "nestɨk", Some(D::Nestik)),
        (4, Estem) => model("4", "telte'k", Some(D::Nestik)),
        (4, Cons) => model("4", "nenk", Some(D::Nenk)),
        (4, Istem) => model("4", "ketkwi'k", Some(D::Nestik)),
        (4, Eyk) => model("4", "eyk", Some(D::Eyk)),
        (4, Astem) => model("4", "pewa'q", Some(D::Pewaq)),
        (4, Kstem) => model("4", "ewi'kɨk", Some(D::Nestik)),
        (4, Inan) => model("4~5", "telamu'k", None),
        (4, Std) => model("4", "kesatk", Some(D::Nestik)),
        (5, Kuk) => model("5", "ketuk", Some(D::Ketuk)),
        (5, Std) => model("5", "mena'toq", None),
        (6, Istem) => model("6", "nemiatl", None),
        (6, Aestem) => model("6", "pesa'tl", Some(D::Pesatl)),
        (6, Ibar) => model("6", "e'natl", None),
        (6, Std) => model("6", "kesalatl", None),
        (7, _) => model("7", "kisituatl", None),
        _ => return None,
    };
    Some(info)
}
