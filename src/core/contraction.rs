// File: src/core/contraction.rs
use crate::core::classifier::{is_consonant, is_plosive};

const SCHWA: char = 'ɨ';

/// Derives the contracted stem used by the future, imperative and several
/// conjunct cells. An unstressed `e` in the first or second position is
/// dropped before a consonant; clusters the deletion makes unpronounceable get
/// a schwa back. A stem with nothing to delete comes back unchanged.
pub fn contract(stem: &str, class: u8) -> String {
    let chars: Vec<char> = stem.chars().collect();
    let at = |i: usize| chars.get(i).copied();
    let consonant_at = |i: usize| at(i).is_some_and(is_consonant);

    if at(0) == Some('e') && consonant_at(1) {
        return with_initial_glide(chars[1..].to_vec()).into_iter().collect();
    }

    if at(1) == Some('e') && consonant_at(2) {
        let mut out: Vec<char> = Vec::with_capacity(chars.len());
        out.push(chars[0]);
        out.extend_from_slice(&chars[2..]);
        let out = break_cluster(with_initial_glide(out), class);
        return out.into_iter().collect();
    }

    stem.to_string()
}

/// `y` cannot open the contracted stem; it surfaces as `i'`.
fn with_initial_glide(mut chars: Vec<char>) -> Vec<char> {
    if chars.first() == Some(&'y') {
        chars.splice(0..1, ['i', '\'']);
    }
    chars
}

fn break_cluster(mut chars: Vec<char>, class: u8) -> Vec<char> {
    if chars.len() > 2 {
        if is_consonant(chars[0]) && is_plosive(chars[1]) && is_plosive(chars[2]) {
            let at = if is_plosive(chars[0]) { 1 } else { 2 };
            chars.insert(at, SCHWA);
        }
    } else if chars.len() == 2 {
        // VTA affixes begin with a vowel of their own
        if is_consonant(chars[0]) && is_plosive(chars[1]) && !matches!(class, 6 | 7) {
            chars.push(SCHWA);
        } else if chars[0] == chars[1] {
            chars.insert(1, SCHWA);
        }
    }
    chars
}
