// src/core/persons.rs
//
// Grammatical persons and tenses. Each tense belongs to a group, and each
// group declares which persons exist in it; the paradigm assembler and the
// table shaper both ask these sets rather than counting indices.

use crate::core::types::VerbType;
use serde::Serialize;

/// Subject persons of intransitive and VTI paradigms, in locale order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Person {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    ThirdSingularInanimate,
    ThirdSingularAbsentative,
    ThirdSingularObviativeAbsentative,
    ThirdSingularInanimateAbsentative,
    ThirdSingularObviative,
    ThirdSingularInanimateObviative,
    FirstDualExclusive,
    SecondDual,
    FirstDualInclusive,
    ThirdDual,
    ThirdDualAbsentative,
    ThirdDualObviativeAbsentative,
    ThirdDualInanimateAbsentative,
    ThirdDualObviative,
    FirstPluralExclusive,
    SecondPlural,
    FirstPluralInclusive,
    ThirdPlural,
    ThirdPluralAbsentative,
    ThirdPluralObviativeAbsentative,
    ThirdPluralInanimateAbsentative,
}

impl Person {
    pub const ALL: [Person; 24] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::ThirdSingularInanimate,
        Person::ThirdSingularAbsentative,
        Person::ThirdSingularObviativeAbsentative,
        Person::ThirdSingularInanimateAbsentative,
        Person::ThirdSingularObviative,
        Person::ThirdSingularInanimateObviative,
        Person::FirstDualExclusive,
        Person::SecondDual,
        Person::FirstDualInclusive,
        Person::ThirdDual,
        Person::ThirdDualAbsentative,
        Person::ThirdDualObviativeAbsentative,
        Person::ThirdDualInanimateAbsentative,
        Person::ThirdDualObviative,
        Person::FirstPluralExclusive,
        Person::SecondPlural,
        Person::FirstPluralInclusive,
        Person::ThirdPlural,
        Person::ThirdPluralAbsentative,
        Person::ThirdPluralObviativeAbsentative,
        Person::ThirdPluralInanimateAbsentative,
    ];

    /// Position in the locale's subject pronoun list.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_absentative(self) -> bool {
        self.is_plain_absentative() || self.is_obviative_absentative() || self.is_inanimate_absentative()
    }

    fn is_plain_absentative(self) -> bool {
        matches!(
            self,
            Person::ThirdSingularAbsentative
                | Person::ThirdDualAbsentative
                | Person::ThirdPluralAbsentative
        )
    }

    pub fn is_obviative_absentative(self) -> bool {
        matches!(
            self,
            Person::ThirdSingularObviativeAbsentative
                | Person::ThirdDualObviativeAbsentative
                | Person::ThirdPluralObviativeAbsentative
        )
    }

    pub fn is_inanimate_absentative(self) -> bool {
        matches!(
            self,
            Person::ThirdSingularInanimateAbsentative
                | Person::ThirdDualInanimateAbsentative
                | Person::ThirdPluralInanimateAbsentative
        )
    }

    /// First persons that exclude the addressee; they have no imperative.
    pub fn is_first_exclusive(self) -> bool {
        matches!(
            self,
            Person::FirstSingular | Person::FirstDualExclusive | Person::FirstPluralExclusive
        )
    }

    pub fn is_second(self) -> bool {
        matches!(
            self,
            Person::SecondSingular | Person::SecondDual | Person::SecondPlural
        )
    }

    /// Persons an inanimate-subject verb can take in the present.
    pub fn is_inanimate_subject(self) -> bool {
        matches!(
            self,
            Person::ThirdSingularInanimate
                | Person::ThirdDual
                | Person::ThirdPlural
        ) || self.is_inanimate_absentative()
    }
}

/// Subjects of a VTA cell, one row per subject within each object group.
/// The dual and plural put the third person before the second, so the
/// second persons of the imperative fall at 0, 5 and 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VtaSubject {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    ThirdObviative,
    FirstDualExclusive,
    FirstDualInclusive,
    ThirdDual,
    SecondDual,
    FirstPluralExclusive,
    FirstPluralInclusive,
    ThirdPlural,
    SecondPlural,
}

impl VtaSubject {
    pub const ALL: [VtaSubject; 12] = [
        VtaSubject::FirstSingular,
        VtaSubject::SecondSingular,
        VtaSubject::ThirdSingular,
        VtaSubject::ThirdObviative,
        VtaSubject::FirstDualExclusive,
        VtaSubject::FirstDualInclusive,
        VtaSubject::ThirdDual,
        VtaSubject::SecondDual,
        VtaSubject::FirstPluralExclusive,
        VtaSubject::FirstPluralInclusive,
        VtaSubject::ThirdPlural,
        VtaSubject::SecondPlural,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_first_exclusive(self) -> bool {
        matches!(
            self,
            VtaSubject::FirstSingular
                | VtaSubject::FirstDualExclusive
                | VtaSubject::FirstPluralExclusive
        )
    }

    pub fn is_second(self) -> bool {
        matches!(
            self,
            VtaSubject::SecondSingular | VtaSubject::SecondDual | VtaSubject::SecondPlural
        )
    }

    /// Speaker-only subjects have no imperative.
    pub fn in_group(self, group: TenseGroup) -> bool {
        match group {
            TenseGroup::Imperative => !self.is_first_exclusive(),
            _ => true,
        }
    }
}

/// Objects of a VTA cell, one delimited group of forms per object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum VtaObject {
    FirstSingular,
    SecondSingular,
    ThirdSingular,
    ThirdSingularAbsentative,
    FirstExclusive,
    FirstInclusive,
    SecondPlural,
    ThirdPlural,
    ThirdPluralAbsentative,
}

impl VtaObject {
    pub const ALL: [VtaObject; 9] = [
        VtaObject::FirstSingular,
        VtaObject::SecondSingular,
        VtaObject::ThirdSingular,
        VtaObject::ThirdSingularAbsentative,
        VtaObject::FirstExclusive,
        VtaObject::FirstInclusive,
        VtaObject::SecondPlural,
        VtaObject::ThirdPlural,
        VtaObject::ThirdPluralAbsentative,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_absentative(self) -> bool {
        matches!(
            self,
            VtaObject::ThirdSingularAbsentative | VtaObject::ThirdPluralAbsentative
        )
    }

    /// Absentative objects only occur in the present and past.
    pub fn in_group(self, group: TenseGroup) -> bool {
        match group {
            TenseGroup::Present | TenseGroup::Past => true,
            _ => !self.is_absentative(),
        }
    }
}

/// Tenses sharing one person inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenseGroup {
    Present,
    Past,
    Future,
    Imperative,
    WhenConjunct,
    IfConjunct,
}

impl TenseGroup {
    pub fn includes(self, person: Person) -> bool {
        match self {
            TenseGroup::Present => true,
            TenseGroup::Past | TenseGroup::IfConjunct => !person.is_absentative(),
            TenseGroup::Future => {
                !person.is_obviative_absentative() && !person.is_inanimate_absentative()
            }
            TenseGroup::Imperative => !person.is_first_exclusive() && !person.is_absentative(),
            TenseGroup::WhenConjunct => !person.is_inanimate_absentative(),
        }
    }
}

/// Persons a cell's forms line up with, for a non-VTA verb.
pub fn person_axis(verb_type: VerbType, group: TenseGroup) -> Vec<Person> {
    match verb_type {
        VerbType::Vii => Person::ALL
            .into_iter()
            .filter(|p| p.is_inanimate_subject())
            .filter(|p| group == TenseGroup::Present || !p.is_absentative())
            .collect(),
        _ => Person::ALL
            .into_iter()
            .filter(|&p| group.includes(p))
            .collect(),
    }
}

pub fn vta_subjects(group: TenseGroup) -> Vec<VtaSubject> {
    VtaSubject::ALL
        .into_iter()
        .filter(|s| s.in_group(group))
        .collect()
}

pub fn vta_objects(group: TenseGroup) -> Vec<VtaObject> {
    VtaObject::ALL
        .into_iter()
        .filter(|o| o.in_group(group))
        .collect()
}

/// Every cell of a full paradigm, in display order. The position in this
/// list is also the index of the cell's title in the locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Tense {
    Present,
    PresentNegative,
    PastDirect,
    PastDirectNegative,
    PastSuppositive,
    PastSuppositiveNegative,
    PastDeferential,
    PastDeferentialNegative,
    Future,
    FutureNegative,
    Imperative,
    ImperativeNegative,
    WhenPresent,
    WhenPresentNegative,
    WhenPast,
    WhenPastNegative,
    If,
    IfNegative,
    IfSuppositive,
    IfSuppositiveNegative,
    IfCounterfactual,
    IfCounterfactualNegative,
    Conditional,
    ConditionalSuppositive,
    ConditionalCounterfactual,
    ConditionalCounterfactualNegative,
}

impl Tense {
    pub const ALL: [Tense; 26] = [
        Tense::Present,
        Tense::PresentNegative,
        Tense::PastDirect,
        Tense::PastDirectNegative,
        Tense::PastSuppositive,
        Tense::PastSuppositiveNegative,
        Tense::PastDeferential,
        Tense::PastDeferentialNegative,
        Tense::Future,
        Tense::FutureNegative,
        Tense::Imperative,
        Tense::ImperativeNegative,
        Tense::WhenPresent,
        Tense::WhenPresentNegative,
        Tense::WhenPast,
        Tense::WhenPastNegative,
        Tense::If,
        Tense::IfNegative,
        Tense::IfSuppositive,
        Tense::IfSuppositiveNegative,
        Tense::IfCounterfactual,
        Tense::IfCounterfactualNegative,
        Tense::Conditional,
        Tense::ConditionalSuppositive,
        Tense::ConditionalCounterfactual,
        Tense::ConditionalCounterfactualNegative,
    ];

    /// Index of this cell's title in the locale's title list.
    pub fn title_index(self) -> usize {
        self as usize
    }

    pub fn group(self) -> TenseGroup {
        use Tense::*;
        match self {
            Present | PresentNegative => TenseGroup::Present,
            PastDirect | PastDirectNegative | PastSuppositive | PastSuppositiveNegative
            | PastDeferential | PastDeferentialNegative => TenseGroup::Past,
            Future | FutureNegative | Conditional | ConditionalSuppositive
            | ConditionalCounterfactual | ConditionalCounterfactualNegative => TenseGroup::Future,
            Imperative | ImperativeNegative => TenseGroup::Imperative,
            WhenPresent | WhenPresentNegative | WhenPast | WhenPastNegative => {
                TenseGroup::WhenConjunct
            }
            If | IfNegative | IfSuppositive | IfSuppositiveNegative | IfCounterfactual
            | IfCounterfactualNegative => TenseGroup::IfConjunct,
        }
    }
}
