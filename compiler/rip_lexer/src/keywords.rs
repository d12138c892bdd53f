//! Reserved words.

use crate::State;

/// Every reserved word of the language, sorted.
const KEYWORDS: [&str; 41] = [
    "BEGIN",
    "END",
    "__ENCODING__",
    "__FILE__",
    "__LINE__",
    "alias",
    "and",
    "begin",
    "break",
    "case",
    "class",
    "def",
    "defined?",
    "do",
    "else",
    "elsif",
    "end",
    "ensure",
    "false",
    "for",
    "if",
    "in",
    "module",
    "next",
    "nil",
    "not",
    "or",
    "redo",
    "rescue",
    "retry",
    "return",
    "self",
    "super",
    "then",
    "true",
    "undef",
    "unless",
    "until",
    "when",
    "while",
    "yield",
];

pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.binary_search(&word).is_ok()
}

/// Expression state after `word`, or `None` if it is not reserved.
pub(crate) fn keyword_state(word: &str) -> Option<State> {
    if !is_keyword(word) {
        return None;
    }
    Some(match word {
        "true" | "false" | "nil" | "self" | "__FILE__" | "__LINE__" | "__ENCODING__" | "end"
        | "redo" | "retry" => State::End,
        "defined?" | "not" => State::Arg,
        _ => State::Beg,
    })
}
