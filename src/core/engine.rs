// File: src/core/engine.rs
use crate::config::EngineConfig;
use crate::core::classifier::StemClassifier;
use crate::core::dictionary::AffixDictionary;
use crate::core::locale::{model_info, Locale, LocaleTable};
use crate::core::paradigm::ParadigmAssembler;
use crate::core::tables::shape;
use crate::core::types::{ParadigmCell, Table, VerbClassification};
use crate::error::Result;
use crate::orthography::{self, transcribe, ConversionOutput, Orthography};
use crate::persistence::{load_snapshot, save_snapshot};
use serde::Serialize;
use tracing::{debug, info, warn};

/// A fully conjugated verb, labelled for one interface language and spelled
/// in the orthography it was asked in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conjugation {
    /// The verb as classified, in Francis-Smith.
    pub verb: VerbClassification,
    pub label: String,
    pub model: String,
    pub disclaimer: Option<String>,
    pub tables: Vec<Table>,
}

/// Everything both engines need, loaded once and only read afterwards.
pub struct ConjugatorEngine {
    dictionary: AffixDictionary,
    locales: LocaleTable,
    classifier: StemClassifier,
    max_input_chars: usize,
}

impl ConjugatorEngine {
    pub fn new(dictionary: AffixDictionary, locales: LocaleTable, max_input_chars: usize) -> Self {
        Self {
            dictionary,
            locales,
            classifier: StemClassifier::new(),
            max_input_chars,
        }
    }

    /// Loads the dictionary from the snapshot when one is configured and
    /// readable, otherwise from JSON, refreshing the snapshot afterwards.
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let dictionary = match &config.snapshot_path {
            Some(snapshot) => match load_snapshot(snapshot) {
                Ok(dictionary) => {
                    info!(path = %snapshot.display(), entries = dictionary.len(), "using dictionary snapshot");
                    dictionary
                }
                Err(e) => {
                    debug!(error = %e, "no usable snapshot, reading JSON dictionary");
                    let dictionary = AffixDictionary::load(&config.dictionary_path)?;
                    if let Err(e) = save_snapshot(&dictionary, snapshot) {
                        warn!(path = %snapshot.display(), error = %e, "could not write dictionary snapshot");
                    }
                    dictionary
                }
            },
            None => AffixDictionary::load(&config.dictionary_path)?,
        };

        let locales = match &config.localization_path {
            Some(path) => LocaleTable::load(path)?,
            None => LocaleTable::embedded()?,
        };
        locales.get(&config.language)?;

        Ok(Self::new(dictionary, locales, config.max_input_chars))
    }

    pub fn locale(&self, language: &str) -> Result<&Locale> {
        self.locales.get(language)
    }

    pub fn locales(&self) -> &LocaleTable {
        &self.locales
    }

    pub fn dictionary(&self) -> &AffixDictionary {
        &self.dictionary
    }

    /// Classifies `word`, written in `orthography`, and builds its paradigm.
    /// The input is read through Francis-Smith, which the classifier and the
    /// dictionary are written in, and every form is spelled back afterwards.
    pub fn conjugate(&self, word: &str, orthography: Orthography, language: &str) -> Result<Conjugation> {
        let locale = self.locales.get(language)?;
        let word = word.trim().to_lowercase();
        let francis_smith = transcribe(&word, orthography, Orthography::FrancisSmith);
        debug!(%word, %orthography, %francis_smith, "conjugating");

        let verb = self.classifier.classify(&francis_smith)?;
        let mut cells = ParadigmAssembler::new(&self.dictionary).build(&verb);
        respell(&mut cells, orthography);

        let (label, model, disclaimer) = match model_info(verb.class, verb.variant) {
            Some(info) => (
                info.label.to_string(),
                transcribe(info.model, Orthography::FrancisSmith, orthography),
                info.disclaimer.map(|kind| locale.disclaimer(kind).to_string()),
            ),
            None => {
                warn!(class = verb.class, variant = %verb.variant, "no model verb for this class");
                (verb.class.to_string(), String::new(), None)
            }
        };

        Ok(Conjugation {
            tables: shape(&cells, &verb, locale),
            verb,
            label,
            model,
            disclaimer,
        })
    }

    /// Converts free text out of `source` into all six spellings.
    pub fn convert(&self, text: &str, source: Orthography) -> Result<ConversionOutput> {
        orthography::convert(text, source, self.max_input_chars)
    }
}

fn respell(cells: &mut [ParadigmCell], target: Orthography) {
    if target == Orthography::FrancisSmith {
        return;
    }
    for cell in cells.iter_mut() {
        for form in cell.forms.iter_mut() {
            *form = form.map_words(|w| transcribe(w, Orthography::FrancisSmith, target));
        }
    }
}
