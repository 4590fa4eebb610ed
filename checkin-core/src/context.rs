//! Context scanning around a trigger token: negation and intensity windows.

use crate::lexicon::{INTENSITY_MODIFIERS, is_negation_word};
use crate::tokenize::{Token, tokenize};

pub const NEGATION_WINDOW: usize = 3;
pub const MODIFIER_WINDOW: usize = 2;

/// Default multiplier when no modifier precedes a trigger.
pub const NEUTRAL_MODIFIER: f64 = 1.0;

fn preceding<'t, 'a>(tokens: &'t [Token<'a>], token_index: usize, window: usize) -> &'t [Token<'a>] {
    if token_index > tokens.len() {
        return &[];
    }
    &tokens[token_index.saturating_sub(window)..token_index]
}

/// True if any of the `window` tokens before `token_index` is a negation word.
///
/// Never fails: an out-of-range index or empty window yields `false`.
pub fn is_negated(tokens: &[Token<'_>], token_index: usize, window: usize) -> bool {
    preceding(tokens, token_index, window)
        .iter()
        .any(|t| is_negation_word(t.text))
}

/// Multiplier from the `window` tokens before `token_index`.
///
/// Multi-word modifiers are checked first by substring containment over the
/// joined window, then single-word modifiers by exact token match. Within
/// each pass the first entry in table order wins.
pub fn find_modifier(tokens: &[Token<'_>], token_index: usize, window: usize) -> f64 {
    let words: Vec<String> = preceding(tokens, token_index, window)
        .iter()
        .map(|t| t.text.to_lowercase())
        .collect();
    if words.is_empty() {
        return NEUTRAL_MODIFIER;
    }
    let joined = words.join(" ");

    let multi = INTENSITY_MODIFIERS
        .iter()
        .filter(|(m, _)| m.contains(' '))
        .find(|(m, _)| joined.contains(m));
    if let Some((_, weight)) = multi {
        return *weight;
    }

    INTENSITY_MODIFIERS
        .iter()
        .filter(|(m, _)| !m.contains(' '))
        .find(|(m, _)| words.iter().any(|w| w == m))
        .map(|(_, weight)| *weight)
        .unwrap_or(NEUTRAL_MODIFIER)
}

/// [`is_negated`] over raw text.
pub fn is_negated_in(text: &str, token_index: usize, window: usize) -> bool {
    is_negated(&tokenize(text), token_index, window)
}

/// [`find_modifier`] over raw text.
pub fn find_modifier_in(text: &str, token_index: usize, window: usize) -> f64 {
    find_modifier(&tokenize(text), token_index, window)
}
