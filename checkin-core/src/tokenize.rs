//! Whitespace tokenizer that keeps byte offsets.
//!
//! Keyword matches are located by offset containment, so a match and its
//! token can never drift apart.

/// A whitespace-delimited token and its byte span in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub index: usize,
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

impl Token<'_> {
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Split `text` on whitespace, recording each token's byte span.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                out.push(Token { index: out.len(), start: s, end: i, text: &text[s..i] });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push(Token { index: out.len(), start: s, end: text.len(), text: &text[s..] });
    }

    out
}

/// Index of the token whose span contains `offset`, if any.
pub fn token_at(tokens: &[Token<'_>], offset: usize) -> Option<usize> {
    // Tokens are sorted by start, so binary search on the span.
    let pos = tokens.partition_point(|t| t.end <= offset);
    tokens.get(pos).filter(|t| t.contains(offset)).map(|t| t.index)
}
