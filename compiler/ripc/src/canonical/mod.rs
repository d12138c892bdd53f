//! Token canonicalization.
//!
//! Turns the reference lexer's `(line, column, event, text)` tokens into
//! `start-end type text` strings with whole-source character offsets.
//! Every token survives, trivia included, in emission order.

use rip_ir::{CanonicalToken, LineIndex, RawToken};
use tracing::trace;

use crate::SetupError;

/// Canonicalize one reference token against `index`.
pub fn canonicalize<'src>(
    index: &LineIndex,
    token: &RawToken<'src>,
) -> Result<CanonicalToken<'src>, SetupError> {
    let name = token.event.event_name();
    let kind = name
        .strip_prefix("on_")
        .ok_or(SetupError::MissingNamespace(name))?;
    let (start, end) = index.span(token.line, token.column, token.text)?;
    Ok(CanonicalToken {
        start,
        end,
        kind,
        text: token.text,
    })
}

/// Lex `source` with the reference lexer and canonicalize every token.
pub fn canonical_tokens(source: &str) -> Result<Vec<CanonicalToken<'_>>, SetupError> {
    let index = LineIndex::new(source);
    let tokens = rip_lexer::lex(source)?;
    trace!(tokens = tokens.len(), lines = index.line_count(), "canonicalizing");
    tokens
        .iter()
        .map(|token| canonicalize(&index, token))
        .collect()
}

/// Canonical tokens of `source`, joined by single spaces.
pub fn render_tokens(source: &str) -> Result<String, SetupError> {
    Ok(canonical_tokens(source)?
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" "))
}
