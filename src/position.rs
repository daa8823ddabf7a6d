use crate::types::Token;

/// Finds the token containing a cursor character offset.
///
/// A cursor at offset `p` belongs to the token `t` with `t.start <= p < t.end`.
/// The `end` boundary (one past the last character) is not part of the token,
/// and an offset in the whitespace between tokens is `None`.
pub fn find_token_at_position(tokens: &[Token], char_position: usize) -> Option<&Token> {
    tokens
        .iter()
        .find(|t| t.start <= char_position && char_position < t.end)
}

/// Returns the column name for a data-line token index.
///
/// Columns align positionally with the header tokens; an index past the end
/// of the header (ragged or short header) is `None`, not an error.
pub fn column_name_at(header: &[Token], index: usize) -> Option<&str> {
    header.get(index).map(|t| t.value.as_str())
}
