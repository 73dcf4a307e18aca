// File: src/orthography/escape.rs
//
// Splits free text into spans so that anything inside `{...}` is carried
// through untouched while the words around it are converted. Unescaped spans
// hold at most one word plus the whitespace around it, so the word-initial
// rules of the normalizers see real word starts.

use crate::error::{ConjugatorError, Result};
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub text: String,
    pub escaped: bool,
    /// The span's first letter was uppercase in the input.
    pub upper_initial: bool,
}

impl Span {
    fn plain(text: String) -> Self {
        let upper_initial = starts_uppercase(&text);
        Self {
            text,
            escaped: false,
            upper_initial,
        }
    }

    fn escaped(text: String) -> Self {
        let upper_initial = starts_uppercase(&text);
        Self {
            text,
            escaped: true,
            upper_initial,
        }
    }
}

fn starts_uppercase(text: &str) -> bool {
    text.trim_start()
        .chars()
        .next()
        .is_some_and(char::is_uppercase)
}

/// Whitespace-delimited tokens, each keeping the whitespace that follows it.
fn split_keeping_separators(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_separator = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            in_separator = true;
        } else if in_separator {
            tokens.push(&text[start..i]);
            start = i;
            in_separator = false;
        }
    }
    if start < text.len() {
        tokens.push(&text[start..]);
    }
    tokens
}

/// Joins tokens so that an opening brace and its closing brace always land in
/// the same token. An unclosed brace swallows the rest of the input.
fn merge_open_escapes(tokens: Vec<&str>) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(tokens.len());
    let mut pending: Option<String> = None;
    for token in tokens {
        match pending.as_mut() {
            Some(open) => {
                open.push_str(token);
                if !has_unclosed_brace(open) {
                    merged.extend(pending.take());
                }
            }
            None if has_unclosed_brace(token) => pending = Some(token.to_string()),
            None => merged.push(token.to_string()),
        }
    }
    merged.extend(pending);
    merged
}

fn has_unclosed_brace(text: &str) -> bool {
    match text.rfind('{') {
        Some(open) => !text[open..].contains('}'),
        None => false,
    }
}

/// Splits free text into plain and escaped spans. Concatenating the span
/// texts gives back the input without its braces.
pub fn route(text: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    // whitespace left over after an escape, waiting for the next word
    let mut carry = String::new();

    for token in merge_open_escapes(split_keeping_separators(text)) {
        let mut rest = token.as_str();
        while let Some(open) = rest.find('{') {
            let before = &rest[..open];
            if !before.is_empty() {
                spans.push(Span::plain(std::mem::take(&mut carry) + before));
            }
            let inner = &rest[open + 1..];
            match inner.find('}') {
                Some(close) => {
                    flush_carry(&mut spans, &mut carry);
                    spans.push(Span::escaped(inner[..close].to_string()));
                    rest = &inner[close + 1..];
                }
                None => {
                    warn!(text = %inner, "unterminated escape runs to end of input");
                    flush_carry(&mut spans, &mut carry);
                    spans.push(Span::escaped(inner.to_string()));
                    rest = "";
                }
            }
        }

        if rest.is_empty() {
            continue;
        }
        if rest.trim().is_empty() {
            carry.push_str(rest);
        } else {
            spans.push(Span::plain(std::mem::take(&mut carry) + rest));
        }
    }

    flush_carry(&mut spans, &mut carry);
    spans
}

fn flush_carry(spans: &mut Vec<Span>, carry: &mut String) {
    if !carry.is_empty() {
        spans.push(Span::plain(std::mem::take(carry)));
    }
}

/// Rejects text with an escape that is never closed. `route` itself accepts
/// such text and escapes everything to the end.
pub fn check_escapes(text: &str) -> Result<()> {
    let mut open: Option<usize> = None;
    for (position, c) in text.chars().enumerate() {
        match c {
            '{' if open.is_none() => open = Some(position),
            '}' => open = None,
            _ => {}
        }
    }
    match open {
        Some(position) => Err(ConjugatorError::MalformedEscape { position }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(spans: &[Span]) -> Vec<(&str, bool)> {
        spans.iter().map(|s| (s.text.as_str(), s.escaped)).collect()
    }

    fn reassemble(spans: &[Span]) -> String {
        spans.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn escape_in_the_middle() {
        let spans = route("a {b} c");
        assert_eq!(texts(&spans), vec![("a ", false), ("b", true), (" c", false)]);
        assert_eq!(reassemble(&spans), "a b c");
    }

    #[test]
    fn leading_escape_keeps_its_separator() {
        let spans = route("{DoNotTouch} regularword");
        assert_eq!(
            texts(&spans),
            vec![("DoNotTouch", true), (" regularword", false)]
        );
        assert!(spans[0].upper_initial);
        assert!(!spans[1].upper_initial);
    }

    #[test]
    fn multi_word_escape_is_merged() {
        let spans = route("pa {do not touch} ta");
        assert_eq!(
            texts(&spans),
            vec![("pa ", false), ("do not touch", true), (" ta", false)]
        );
    }

    #[test]
    fn unterminated_escape_runs_to_end() {
        let spans = route("pa {do not");
        assert_eq!(texts(&spans), vec![("pa ", false), ("do not", true)]);
        assert!(check_escapes("pa {do not").is_err());
        assert!(check_escapes("pa {do} not").is_ok());
    }

    #[test]
    fn escape_glued_to_a_word() {
        let spans = route("x{y}z w");
        assert_eq!(
            texts(&spans),
            vec![("x", false), ("y", true), ("z ", false), ("w", false)]
        );
    }

    #[test]
    fn plain_words_split_per_word() {
        let spans = route("Teluisit nenk");
        assert_eq!(texts(&spans), vec![("Teluisit ", false), ("nenk", false)]);
        assert!(spans[0].upper_initial);
        assert!(!spans[1].upper_initial);
    }

    #[test]
    fn malformed_escape_reports_position() {
        match check_escapes("ab {c") {
            Err(ConjugatorError::MalformedEscape { position }) => assert_eq!(position, 3),
            other => panic!("unexpected {other:?}"),
        }
    }
}
