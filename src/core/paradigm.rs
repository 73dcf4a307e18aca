// File: src/core/paradigm.rs
//
// Builds every cell of a verb's paradigm from the affix dictionary. Which key
// a cell reads, which stem it attaches to and how it is negated is data in
// `CELLS`; the code below only interprets that table.

use crate::core::dictionary::{key, AffixDictionary};
use crate::core::persons::{person_axis, vta_objects, vta_subjects, Tense, TenseGroup};
use crate::core::types::{
    join_segments, split_segments, Form, ParadigmCell, VerbClassification, VerbType,
};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StemKind {
    Plain,
    Contracted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Negation {
    Affirmative,
    /// `mu` before every form.
    Mu,
    /// `ma'`, the future particle.
    Ma,
    /// `mukk` for second persons, `mu` for the rest.
    Imperative,
}

struct CellRule {
    tense: Tense,
    code: &'static str,
    negative: bool,
    stem: StemKind,
    negation: Negation,
    /// The entry belongs to another tense group; its persons are narrowed to
    /// this cell's group.
    borrowed_from: Option<TenseGroup>,
}

const fn cell(
    tense: Tense,
    code: &'static str,
    negative: bool,
    stem: StemKind,
    negation: Negation,
) -> CellRule {
    CellRule {
        tense,
        code,
        negative,
        stem,
        negation,
        borrowed_from: None,
    }
}

const fn borrowed(mut rule: CellRule, from: TenseGroup) -> CellRule {
    rule.borrowed_from = Some(from);
    rule
}

use Negation::*;
use StemKind::*;

const CELLS: [CellRule; 26] = [
    cell(Tense::Present, "pres", false, Plain, Affirmative),
    cell(Tense::PresentNegative, "pres", true, Plain, Mu),
    cell(Tense::PastDirect, "past.dir", false, Plain, Affirmative),
    cell(Tense::PastDirectNegative, "past.dir", true, Plain, Mu),
    cell(Tense::PastSuppositive, "past.sup", false, Plain, Affirmative),
    cell(Tense::PastSuppositiveNegative, "past.sup", true, Plain, Mu),
    cell(Tense::PastDeferential, "past.def", false, Plain, Affirmative),
    cell(Tense::PastDeferentialNegative, "past.def", true, Plain, Mu),
    cell(Tense::Future, "futr", false, Contracted, Affirmative),
    // the future negative is the present negative with ma'
    borrowed(
        cell(Tense::FutureNegative, "pres", true, Contracted, Ma),
        TenseGroup::Present,
    ),
    cell(Tense::Imperative, "impe", false, Contracted, Affirmative),
    cell(Tense::ImperativeNegative, "impe", true, Contracted, Imperative),
    cell(Tense::WhenPresent, "when.prs", false, Plain, Affirmative),
    cell(Tense::WhenPresentNegative, "when.prs", true, Plain, Mu),
    cell(Tense::WhenPast, "when.pst", false, Plain, Affirmative),
    cell(Tense::WhenPastNegative, "when.pst", true, Plain, Mu),
    // the if conjunct is the present when conjunct on the contracted stem
    borrowed(
        cell(Tense::If, "when.prs", false, Contracted, Affirmative),
        TenseGroup::WhenConjunct,
    ),
    borrowed(
        cell(Tense::IfNegative, "when.prs", true, Contracted, Mu),
        TenseGroup::WhenConjunct,
    ),
    cell(Tense::IfSuppositive, "ifcn.sup", false, Contracted, Affirmative),
    cell(Tense::IfSuppositiveNegative, "ifcn.sup", true, Plain, Mu),
    cell(Tense::IfCounterfactual, "ifcn.cfl", false, Contracted, Affirmative),
    cell(Tense::IfCounterfactualNegative, "ifcn.cfl", true, Plain, Mu),
    cell(Tense::Conditional, "cond.prs", false, Contracted, Affirmative),
    cell(Tense::ConditionalSuppositive, "cond.sup", false, Contracted, Affirmative),
    cell(Tense::ConditionalCounterfactual, "cond.cfl", false, Contracted, Affirmative),
    cell(Tense::ConditionalCounterfactualNegative, "cond.cfl", true, Contracted, Mu),
];

/// The conditional suppositive does not exist for inanimate subjects and
/// merges with the counterfactual in the VTA classes.
fn has_cell(verb: &VerbClassification, tense: Tense) -> bool {
    !(tense == Tense::ConditionalSuppositive && (verb.is_vta() || verb.verb_type == VerbType::Vii))
}

pub struct ParadigmAssembler<'a> {
    dictionary: &'a AffixDictionary,
}

impl<'a> ParadigmAssembler<'a> {
    pub fn new(dictionary: &'a AffixDictionary) -> Self {
        Self { dictionary }
    }

    /// Builds the paradigm in display order. A cell whose entry is missing
    /// is logged and left empty; the rest of the paradigm is still built.
    pub fn build(&self, verb: &VerbClassification) -> Vec<ParadigmCell> {
        let namespace = verb.namespace();
        let mut cells: Vec<ParadigmCell> = CELLS
            .iter()
            .filter(|rule| has_cell(verb, rule.tense))
            .map(|rule| {
                let stem = match rule.stem {
                    Plain => verb.stem.as_str(),
                    Contracted => verb.contracted_stem.as_str(),
                };
                let key = key(verb.class, rule.code, rule.negative, namespace);
                let forms = match self.dictionary.lookup(stem, &key) {
                    Ok(forms) => forms,
                    Err(e) => {
                        warn!(tense = ?rule.tense, %key, error = %e, "leaving cell empty");
                        Vec::new()
                    }
                };
                let forms = match rule.borrowed_from {
                    Some(from) => regroup(forms, verb, from, rule.tense.group()),
                    None => forms,
                };
                ParadigmCell {
                    tense: rule.tense,
                    forms: negate(forms, rule.negation, verb),
                }
            })
            .collect();

        if verb.takes_plural_object() {
            debug!(class = verb.class, variant = %verb.variant, "adding plural object forms");
            add_plural_objects(&mut cells);
        }
        cells
    }
}

/// Narrows forms laid out for the `from` group to the persons of `to`.
fn regroup(forms: Vec<Form>, verb: &VerbClassification, from: TenseGroup, to: TenseGroup) -> Vec<Form> {
    if verb.is_vta() {
        let from_objects = vta_objects(from);
        let to_objects = vta_objects(to);
        let from_subjects = vta_subjects(from);
        let to_subjects = vta_subjects(to);
        let segments = split_segments(&forms, &Form::ObjectBreak)
            .into_iter()
            .enumerate()
            .filter(|(i, _)| from_objects.get(*i).map_or(true, |o| to_objects.contains(o)))
            .map(|(_, segment)| keep_positions(segment, &from_subjects, &to_subjects))
            .collect();
        join_segments(segments, Form::ObjectBreak)
    } else {
        let from_axis = person_axis(verb.verb_type, from);
        let to_axis = person_axis(verb.verb_type, to);
        keep_positions(forms, &from_axis, &to_axis)
    }
}

/// Keeps the forms whose person in `from` also appears in `to`. Forms past
/// the end of `from` are kept as they are.
fn keep_positions<P: PartialEq>(forms: Vec<Form>, from: &[P], to: &[P]) -> Vec<Form> {
    if forms.len() != from.len() && !forms.is_empty() {
        warn!(forms = forms.len(), persons = from.len(), "cell does not match its person set");
    }
    forms
        .into_iter()
        .enumerate()
        .filter(|(i, _)| from.get(*i).map_or(true, |p| to.contains(p)))
        .map(|(_, form)| form)
        .collect()
}

fn prefix(form: &Form, particle: &str) -> Form {
    form.map_words(|w| format!("{particle} {w}"))
}

fn negate(forms: Vec<Form>, negation: Negation, verb: &VerbClassification) -> Vec<Form> {
    match negation {
        Affirmative => forms,
        Mu => forms.iter().map(|f| prefix(f, "mu")).collect(),
        Ma => forms.iter().map(|f| prefix(f, "ma'")).collect(),
        Imperative if verb.is_vta() => {
            let subjects = vta_subjects(TenseGroup::Imperative);
            let segments = split_segments(&forms, &Form::ObjectBreak)
                .into_iter()
                .map(|segment| {
                    segment
                        .iter()
                        .enumerate()
                        .map(|(i, f)| imperative_prefix(f, subjects.get(i).is_some_and(|s| s.is_second())))
                        .collect()
                })
                .collect();
            join_segments(segments, Form::ObjectBreak)
        }
        Imperative => {
            let axis = person_axis(verb.verb_type, TenseGroup::Imperative);
            forms
                .iter()
                .enumerate()
                .map(|(i, f)| imperative_prefix(f, axis.get(i).is_some_and(|p| p.is_second())))
                .collect()
        }
    }
}

fn imperative_prefix(form: &Form, addressee: bool) -> Form {
    prefix(form, if addressee { "mukk" } else { "mu" })
}

/// Appends the plural-object half to the present and past cells, after a
/// `PluralBreak`.
fn add_plural_objects(cells: &mut [ParadigmCell]) {
    for cell in cells.iter_mut() {
        let present = match cell.tense.group() {
            TenseGroup::Present => true,
            TenseGroup::Past => false,
            _ => continue,
        };
        if cell.forms.is_empty() {
            continue;
        }
        let plural: Vec<Form> = cell
            .forms
            .iter()
            .enumerate()
            .map(|(i, form)| match (present, i) {
                (true, 0) => form.map_words(|w| format!("{w}anl")),
                (true, _) => form.map_words(present_plural),
                (false, _) => form.map_words(past_plural),
            })
            .collect();
        cell.forms.push(Form::PluralBreak);
        cell.forms.extend(plural);
    }
}

fn present_plural(word: &str) -> String {
    if word.ends_with('l') {
        word.to_string()
    } else {
        format!("{word}l")
    }
}

fn past_plural(word: &str) -> String {
    match word.chars().last() {
        Some('n' | 'k') => format!("{word}l"),
        Some('l') => word.to_string(),
        _ => format!("{word}nl"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::classifier::StemClassifier;
    use crate::core::types::Suffix;

    fn suffixes(list: &[&str]) -> Vec<Suffix> {
        list.iter().map(|s| Suffix::parse(s)).collect()
    }

    fn numbered(prefix: &str, count: usize) -> Vec<Suffix> {
        (0..count).map(|i| Suffix::Plain(format!("{prefix}{i}"))).collect()
    }

    fn words(cell: &ParadigmCell) -> Vec<String> {
        cell.forms.iter().map(Form::to_string).collect()
    }

    fn cell_for(cells: &[ParadigmCell], tense: Tense) -> &ParadigmCell {
        cells.iter().find(|c| c.tense == tense).unwrap()
    }

    #[test]
    fn nenk_present_negative() {
        let mut dictionary = AffixDictionary::new();
        dictionary.insert("4.pres.neg.comb", suffixes(&["k", "*"]));
        let verb = StemClassifier::new().classify("nenk").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);
        let negative = cell_for(&cells, Tense::PresentNegative);
        assert_eq!(
            words(negative),
            vec!["mu nenk", "*", "||", "mu nenkanl", "*"]
        );
    }

    #[test]
    fn missing_entries_leave_empty_cells() {
        let dictionary = AffixDictionary::new();
        let verb = StemClassifier::new().classify("teluisit").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);
        assert_eq!(cells.len(), 26);
        assert!(cells.iter().all(|c| c.forms.is_empty()));
    }

    #[test]
    fn conditional_suppositive_is_omitted_for_vta_and_vii() {
        let dictionary = AffixDictionary::new();
        let classifier = StemClassifier::new();
        for word in ["kesalatl", "maqatkwik"] {
            let cells = ParadigmAssembler::new(&dictionary).build(&classifier.classify(word).unwrap());
            assert_eq!(cells.len(), 25, "{word}");
            assert!(cells.iter().all(|c| c.tense != Tense::ConditionalSuppositive));
            assert_eq!(cells[23].tense, Tense::ConditionalCounterfactual);
        }
    }

    #[test]
    fn future_negative_drops_persons_missing_from_the_future() {
        let mut dictionary = AffixDictionary::new();
        dictionary.insert("1.pres.neg.std", numbered("n", 24));
        let verb = StemClassifier::new().classify("teluisit").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);

        let future = cell_for(&cells, Tense::FutureNegative);
        assert_eq!(future.forms.len(), person_axis(VerbType::Vai, TenseGroup::Future).len());
        assert_eq!(words(future)[0], "ma' tluin0");
        assert!(!words(future).contains(&"ma' tluin5".to_string()));
        assert!(words(future).contains(&"ma' tluin4".to_string()));

        let present = cell_for(&cells, Tense::PresentNegative);
        assert_eq!(present.forms.len(), 24);
        assert_eq!(words(present)[5], "mu teluin5");
    }

    #[test]
    fn if_conjunct_narrows_the_when_conjunct() {
        let mut dictionary = AffixDictionary::new();
        dictionary.insert("1.when.prs.std", numbered("w", 21));
        dictionary.insert("1.when.prs.neg.std", numbered("w", 21));
        let verb = StemClassifier::new().classify("teluisit").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);

        let when = cell_for(&cells, Tense::WhenPresent);
        assert_eq!(when.forms.len(), 21);
        let expected = person_axis(VerbType::Vai, TenseGroup::IfConjunct).len();
        let affirmative = cell_for(&cells, Tense::If);
        assert_eq!(affirmative.forms.len(), expected);
        assert!(!words(affirmative).contains(&"tluiw4".to_string()));
        let negative = cell_for(&cells, Tense::IfNegative);
        assert_eq!(negative.forms.len(), expected);
        assert_eq!(words(negative)[0], "mu tluiw0");
    }

    #[test]
    fn imperative_negative_uses_mukk_for_second_persons() {
        let mut dictionary = AffixDictionary::new();
        dictionary.insert("1.impe.neg.std", numbered("i", 12));
        let verb = StemClassifier::new().classify("teluisit").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);
        let negative = words(cell_for(&cells, Tense::ImperativeNegative));
        for (i, form) in negative.iter().enumerate() {
            let particle = if [0, 5, 9].contains(&i) { "mukk " } else { "mu " };
            assert!(form.starts_with(particle), "{i}: {form}");
        }
    }

    #[test]
    fn vta_imperative_negative_is_per_object_group() {
        let mut dictionary = AffixDictionary::new();
        let mut raw: Vec<&str> = Vec::new();
        for group in 0..2 {
            if group > 0 {
                raw.push("&&");
            }
            raw.extend(["a", "b", "*", "d", "e", "f", "g", "h", "i"]);
        }
        dictionary.insert("6.impe.neg.std", suffixes(&raw));
        let verb = StemClassifier::new().classify("kesalatl").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);
        let negative = words(cell_for(&cells, Tense::ImperativeNegative));
        // imperative subjects: 2sg 3sg 3obv 1duIn 3du 2du 1plIn 3pl 2pl
        for (i, form) in negative[..9].iter().enumerate() {
            let expected = match i {
                2 => "*".to_string(),
                0 | 5 | 8 => format!("mukk ksal{}", "abcdefghi".as_bytes()[i] as char),
                _ => format!("mu ksal{}", "abcdefghi".as_bytes()[i] as char),
            };
            assert_eq!(form, &expected, "{i}");
        }
        assert_eq!(negative[9], "&&");
        assert_eq!(negative[10], "mukk ksala");
        assert_eq!(negative[14], "mu ksale");
    }

    #[test]
    fn vta_future_negative_drops_absentative_objects() {
        let mut dictionary = AffixDictionary::new();
        let mut raw: Vec<String> = Vec::new();
        for object in 0..9 {
            if object > 0 {
                raw.push("&&".into());
            }
            raw.push(format!("o{object}"));
        }
        let raw: Vec<&str> = raw.iter().map(String::as_str).collect();
        dictionary.insert("6.pres.neg.std", suffixes(&raw));
        let verb = StemClassifier::new().classify("kesalatl").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);
        let future = words(cell_for(&cells, Tense::FutureNegative));
        let kept: Vec<&str> = future.iter().filter(|f| *f != "&&").map(String::as_str).collect();
        assert_eq!(
            kept,
            vec![
                "ma' ksalo0", "ma' ksalo1", "ma' ksalo2", "ma' ksalo4", "ma' ksalo5",
                "ma' ksalo6", "ma' ksalo7",
            ]
        );
        assert_eq!(future.iter().filter(|f| *f == "&&").count(), 6);
    }

    #[test]
    fn plural_objects_for_present_and_past() {
        let mut dictionary = AffixDictionary::new();
        dictionary.insert("4.pres.comb", suffixes(&["k", "mk", "ml", "*", "mk:mkw"]));
        dictionary.insert("4.past.dir.comb", suffixes(&["kɨp", "mɨn", "mɨl", "mk:mkw"]));
        let verb = StemClassifier::new().classify("nenk").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);

        assert_eq!(
            words(cell_for(&cells, Tense::Present)),
            vec![
                "nenk", "nenmk", "nenml", "*", "nenmk, nenmkw", "||",
                "nenkanl", "nenmkl", "nenml", "*", "nenmkl, nenmkwl",
            ]
        );
        assert_eq!(
            words(cell_for(&cells, Tense::PastDirect)),
            vec![
                "nenkɨp", "nenmɨn", "nenmɨl", "nenmk, nenmkw", "||",
                "nenkɨpnl", "nenmɨnl", "nenmɨl", "nenmkl, nenmkwnl",
            ]
        );
        // later tenses carry no plural half
        assert!(cell_for(&cells, Tense::Future).forms.is_empty());
    }

    #[test]
    fn inan_and_eyk_take_no_plural_objects() {
        let mut dictionary = AffixDictionary::new();
        dictionary.insert("4.pres.comb", suffixes(&["k"]));
        let verb = StemClassifier::new().classify("eyk").unwrap();
        let cells = ParadigmAssembler::new(&dictionary).build(&verb);
        assert_eq!(words(cell_for(&cells, Tense::Present)), vec!["eyk"]);
    }

    #[test]
    fn negation_skips_absent_forms() {
        let forms = vec![Form::Absent, Form::Word("x".into()), Form::ObjectBreak];
        let verb = StemClassifier::new().classify("teluisit").unwrap();
        let negated = negate(forms, Mu, &verb);
        assert_eq!(negated, vec![Form::Absent, Form::Word("mu x".into()), Form::ObjectBreak]);
    }

    const MODEL_VERBS: [&str; 32] = [
        "pejila'sit", "enqa'sik", "pekisink", "maqatkwik", "teluisit", "ajipuna't", "pesaq",
        "wekayk", "amalkat", "eliet", "ewniaq", "teluet", "teweket", "wele'k", "te'sipunqek",
        "ewi'kiket", "nestɨk", "telte'k", "nenk", "ketkwi'k", "eyk", "pewa'q", "ewi'kɨk",
        "telamu'k", "kesatk", "ketuk", "mena'toq", "nemiatl", "pesa'tl", "e'natl", "kesalatl",
        "kisituatl",
    ];

    fn shipped_dictionary() -> AffixDictionary {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/conjdict.sample.json");
        AffixDictionary::load(&path).unwrap()
    }

    /// Forms per segment a cell of `group` should hold.
    fn expected_layout(verb: &VerbClassification, group: TenseGroup) -> Vec<usize> {
        if verb.is_vta() {
            return vec![vta_subjects(group).len(); vta_objects(group).len()];
        }
        let persons = person_axis(verb.verb_type, group).len();
        if verb.takes_plural_object() && matches!(group, TenseGroup::Present | TenseGroup::Past) {
            vec![persons; 2]
        } else {
            vec![persons]
        }
    }

    fn layout(cell: &ParadigmCell, verb: &VerbClassification) -> Vec<usize> {
        let marker = if verb.is_vta() { Form::ObjectBreak } else { Form::PluralBreak };
        split_segments(&cell.forms, &marker).iter().map(Vec::len).collect()
    }

    #[test]
    fn every_model_verb_has_a_full_present() {
        let dictionary = shipped_dictionary();
        let classifier = StemClassifier::new();
        for word in MODEL_VERBS {
            let verb = classifier.classify(word).unwrap();
            let cells = ParadigmAssembler::new(&dictionary).build(&verb);
            let present = cell_for(&cells, Tense::Present);
            assert!(!present.forms.is_empty(), "{word}");
            assert_eq!(
                layout(present, &verb),
                expected_layout(&verb, TenseGroup::Present),
                "{word}"
            );
        }
    }

    #[test]
    fn negatives_line_up_with_their_affirmatives() {
        let dictionary = shipped_dictionary();
        let classifier = StemClassifier::new();
        for word in MODEL_VERBS {
            let verb = classifier.classify(word).unwrap();
            let cells = ParadigmAssembler::new(&dictionary).build(&verb);

            for pair in CELLS.windows(2) {
                let (affirmative, negative) = (&pair[0], &pair[1]);
                if !negative.negative || !has_cell(&verb, negative.tense) {
                    continue;
                }
                let group = negative.tense.group();
                assert_eq!(affirmative.tense.group(), group, "{:?}", negative.tense);

                let negated = cell_for(&cells, negative.tense);
                let plain = cell_for(&cells, affirmative.tense);
                assert!(!negated.forms.is_empty(), "{word} {:?}", negative.tense);
                assert_eq!(layout(negated, &verb), expected_layout(&verb, group), "{word} {:?}", negative.tense);
                assert_eq!(layout(negated, &verb), layout(plain, &verb), "{word} {:?}", negative.tense);

                for form in &negated.forms {
                    if let Form::Word(w) = form {
                        assert!(
                            ["mu ", "ma' ", "mukk "].iter().any(|p| w.starts_with(p)),
                            "{word} {:?}: {w}",
                            negative.tense
                        );
                    }
                }
            }
        }
    }
}
