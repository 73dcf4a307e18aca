// File: src/core/tables.rs
//
// Turns paradigm cells into display tables. Cells are built column-wise (one
// list of forms per tense) and tables read row-wise (one row per person), so
// each table is assembled as columns and transposed at the end.

use crate::core::locale::Locale;
use crate::core::persons::{person_axis, vta_objects, vta_subjects, TenseGroup};
use crate::core::types::{split_segments, Form, ParadigmCell, Table, VerbClassification, VerbType};
use tracing::warn;

pub fn shape(cells: &[ParadigmCell], verb: &VerbClassification, locale: &Locale) -> Vec<Table> {
    cells
        .iter()
        .map(|cell| {
            let group = cell.tense.group();
            let columns = if verb.is_vta() {
                vta_columns(cell, group, locale)
            } else if verb.verb_type == VerbType::Vti
                && matches!(group, TenseGroup::Present | TenseGroup::Past)
            {
                plural_object_columns(cell, verb, group, locale)
            } else {
                person_columns(cell, verb, group, locale)
            };
            Table {
                title: locale.title(cell.tense).to_string(),
                rows: transpose(&columns),
            }
        })
        .collect()
}

fn subject_labels(verb: &VerbClassification, group: TenseGroup, locale: &Locale) -> Vec<String> {
    person_axis(verb.verb_type, group)
        .into_iter()
        .map(|p| locale.subject(p).to_string())
        .collect()
}

fn render(forms: &[Form]) -> Vec<String> {
    forms.iter().map(Form::to_string).collect()
}

fn check_length(cell: &ParadigmCell, labels: usize, forms: usize) {
    if forms != 0 && forms != labels {
        warn!(tense = ?cell.tense, labels, forms, "column length differs from its labels");
    }
}

/// One label column and one form column.
fn person_columns(
    cell: &ParadigmCell,
    verb: &VerbClassification,
    group: TenseGroup,
    locale: &Locale,
) -> Vec<Vec<String>> {
    let labels = subject_labels(verb, group, locale);
    check_length(cell, labels.len(), cell.forms.len());
    vec![labels, render(&cell.forms)]
}

/// Subjects down the side, singular and plural objects across the top.
fn plural_object_columns(
    cell: &ParadigmCell,
    verb: &VerbClassification,
    group: TenseGroup,
    locale: &Locale,
) -> Vec<Vec<String>> {
    let mut labels = vec![locale.subject_object_split.clone()];
    labels.extend(subject_labels(verb, group, locale));

    let mut columns = vec![labels];
    for (j, segment) in split_segments(&cell.forms, &Form::PluralBreak).iter().enumerate() {
        check_length(cell, columns[0].len() - 1, segment.len());
        let mut column = vec![locale
            .inanimate_object_pronouns
            .get(j)
            .cloned()
            .unwrap_or_default()];
        column.extend(render(segment));
        columns.push(column);
    }
    columns
}

/// Subjects down the side, one column per object group.
fn vta_columns(cell: &ParadigmCell, group: TenseGroup, locale: &Locale) -> Vec<Vec<String>> {
    let subjects = vta_subjects(group);
    let objects = vta_objects(group);

    let mut labels = vec![locale.subject_object_split.clone()];
    labels.extend(subjects.iter().map(|&s| locale.vta_subject(s).to_string()));

    let segments = split_segments(&cell.forms, &Form::ObjectBreak);
    if !cell.forms.is_empty() && segments.len() != objects.len() {
        warn!(tense = ?cell.tense, objects = objects.len(), segments = segments.len(), "object groups differ from object labels");
    }

    let mut columns = vec![labels];
    for (j, segment) in segments.iter().enumerate() {
        check_length(cell, subjects.len(), segment.len());
        let header = objects
            .get(j)
            .map(|&o| locale.vta_object(o).to_string())
            .unwrap_or_default();
        let mut column = vec![header];
        column.extend(render(segment));
        columns.push(column);
    }
    columns
}

/// Swaps rows and columns. Short columns are padded with empty strings.
pub fn transpose(columns: &[Vec<String>]) -> Vec<Vec<String>> {
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);
    (0..height)
        .map(|row| {
            columns
                .iter()
                .map(|column| column.get(row).cloned().unwrap_or_default())
                .collect()
        })
        .collect()
}
